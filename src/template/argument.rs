//! Pluggable placeholder arguments
//!
//! A placeholder goes through two phases. At compile time an
//! [`ArgumentParser`] turns the placeholder body into an argument value; at
//! render time the argument's [`Argument::apply`] produces text from data.

use std::borrow::Cow;
use std::error::Error as StdError;

/// Parse phase: turns a placeholder body into an argument
pub trait ArgumentParser {
    type Argument;
    type Error: StdError + Send + Sync + 'static;

    fn parse_argument(&self, body: &str) -> Result<Self::Argument, Self::Error>;
}

impl<F, A, E> ArgumentParser for F
where
    F: Fn(&str) -> Result<A, E>,
    E: StdError + Send + Sync + 'static,
{
    type Argument = A;
    type Error = E;

    fn parse_argument(&self, body: &str) -> Result<A, E> {
        self(body)
    }
}

/// Apply phase: produces text for a placeholder from data of type `D`
pub trait Argument<D: ?Sized> {
    type Error: StdError + Send + Sync + 'static;

    fn apply<'s>(&'s self, data: &'s D) -> Result<Cow<'s, str>, ApplyFailure<Self::Error>>;
}

/// A failed apply, with the text to show in place of the value when failures
/// are preserved rather than raised
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyFailure<E> {
    pub partial: String,
    pub error: E,
}

impl<E> ApplyFailure<E> {
    pub fn new(partial: impl Into<String>, error: E) -> Self {
        Self {
            partial: partial.into(),
            error,
        }
    }
}
