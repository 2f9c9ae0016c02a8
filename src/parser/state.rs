//! Scanner states and the pure transition function driving them

/// Where the scanner stands relative to placeholder syntax
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseState {
    /// Plain literal text
    #[default]
    Init,
    /// Just saw `$`; a following `{` opens a placeholder
    SawDollar,
    /// Inside `${ ... }`
    InBrace,
    /// Just saw `\`; the next character is taken literally
    SawBackslash,
}

/// Effect of feeding one character to the scanner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Nothing to emit (the character is held as scanner state)
    Hold,
    /// Append the character to the current literal run
    Literal(char),
    /// The held `$` was not an opener: emit it, then re-scan the character from `Init`
    ReleaseDollar,
    /// `${` completed: flush the literal run and start a placeholder body
    Open,
    /// Append the character to the placeholder body
    Body(char),
    /// `}` closed the placeholder body
    Close,
}

/// Compute the next state and the action for one input character.
pub fn transition(state: ParseState, ch: char) -> (ParseState, Action) {
    match (state, ch) {
        (ParseState::Init, '$') => (ParseState::SawDollar, Action::Hold),
        (ParseState::Init, '\\') => (ParseState::SawBackslash, Action::Hold),
        (ParseState::Init, c) => (ParseState::Init, Action::Literal(c)),

        (ParseState::SawDollar, '{') => (ParseState::InBrace, Action::Open),
        (ParseState::SawDollar, _) => (ParseState::Init, Action::ReleaseDollar),

        (ParseState::InBrace, '}') => (ParseState::Init, Action::Close),
        (ParseState::InBrace, c) => (ParseState::InBrace, Action::Body(c)),

        (ParseState::SawBackslash, c) => (ParseState::Init, Action::Literal(c)),
    }
}

/// Text still pending when input ends in `state`, or `None` if a placeholder is open.
pub fn trailing_text(state: ParseState) -> Option<&'static str> {
    match state {
        ParseState::Init => Some(""),
        ParseState::SawDollar => Some("$"),
        ParseState::SawBackslash => Some("\\"),
        ParseState::InBrace => None,
    }
}
