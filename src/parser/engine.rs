//! Scan driver shared by compilation and one-pass rendering
//!
//! The driver owns the transient scan state (current state, pending literal
//! run, placeholder body) and reports what it finds to a [`Sink`]. Compiling
//! collects into [`Parts`]; one-pass rendering substitutes as it goes.

use std::convert::Infallible;

use crate::error::ParseError;
use crate::template::ArgumentParser;

use super::part::Parts;
use super::state::{trailing_text, transition, Action, ParseState};

/// Receiver for the pieces found while scanning a template
pub trait Sink<A> {
    type Error;

    /// A completed literal run. Never called with empty text.
    fn text(&mut self, text: &str);

    /// A placeholder accepted by the argument parser
    fn argument(&mut self, arg: A) -> Result<(), Self::Error>;
}

impl<A> Sink<A> for Parts<A> {
    type Error = Infallible;

    fn text(&mut self, text: &str) {
        self.push_literal(text);
    }

    fn argument(&mut self, arg: A) -> Result<(), Infallible> {
        self.push_argument(arg);
        Ok(())
    }
}

/// Failure while scanning: either the template itself or the sink
#[derive(Debug)]
pub enum ScanError<E> {
    Parse(ParseError),
    Sink(E),
}

impl ScanError<Infallible> {
    pub fn into_parse_error(self) -> ParseError {
        match self {
            ScanError::Parse(err) => err,
            ScanError::Sink(never) => match never {},
        }
    }
}

/// Scan `text`, handing literal runs and parsed placeholders to `sink` in order.
pub fn scan<P, S>(text: &str, parser: &P, sink: &mut S) -> Result<(), ScanError<S::Error>>
where
    P: ArgumentParser + ?Sized,
    S: Sink<P::Argument>,
{
    let mut state = ParseState::Init;
    let mut literal = String::new();
    let mut body = String::new();
    let mut opened_at = 0;

    for (position, ch) in text.chars().enumerate() {
        let (next, action) = transition(state, ch);
        state = next;
        match action {
            Action::Hold => {}
            Action::Literal(c) => literal.push(c),
            Action::ReleaseDollar => {
                literal.push('$');
                // The character after a lone `$` gets a fresh look from Init
                let (rescanned, action) = transition(ParseState::Init, ch);
                state = rescanned;
                if let Action::Literal(c) = action {
                    literal.push(c);
                }
            }
            Action::Open => {
                if !literal.is_empty() {
                    sink.text(&literal);
                    literal.clear();
                }
                body.clear();
                opened_at = position - 1;
            }
            Action::Body(c) => body.push(c),
            Action::Close => {
                if body.is_empty() {
                    return Err(ScanError::Parse(ParseError::EmptyPlaceholder { position }));
                }
                let arg = parser
                    .parse_argument(&body)
                    .map_err(|err| ScanError::Parse(ParseError::parse_failed(position, err)))?;
                sink.argument(arg).map_err(ScanError::Sink)?;
            }
        }
    }

    match trailing_text(state) {
        Some(rest) => {
            literal.push_str(rest);
            if !literal.is_empty() {
                sink.text(&literal);
            }
            Ok(())
        }
        None => Err(ScanError::Parse(ParseError::UnterminatedPlaceholder {
            position: opened_at,
        })),
    }
}

/// Scan `text` into a parts sequence
pub fn parse<P>(text: &str, parser: &P) -> Result<Parts<P::Argument>, ParseError>
where
    P: ArgumentParser + ?Sized,
{
    let mut parts = Parts::new();
    scan(text, parser, &mut parts).map_err(ScanError::into_parse_error)?;
    Ok(parts)
}
