//! Template scanner
//!
//! A character-level state machine splits template text into literal runs
//! and `${...}` placeholders. `\` escapes the following character; a `$` not
//! followed by `{` is ordinary text.

mod engine;
mod part;
mod state;

pub use engine::{parse, scan, ScanError, Sink};
pub use part::{Part, Parts};
pub use state::{transition, Action, ParseState};
