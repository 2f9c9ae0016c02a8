//! Compiled templates: parse once, render many times

use tracing::debug;

use crate::error::ParseError;
use crate::parser::{parse, Part, Parts};

use super::argument::{Argument, ArgumentParser};
use super::policy::ErrorPolicy;

/// A parsed template ready to be rendered against data.
///
/// Immutable after compilation; rendering only borrows it, so one template
/// can be shared across threads and rendered concurrently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template<A> {
    parts: Parts<A>,
}

impl<A> Template<A> {
    /// Parse `text`, handing each placeholder body to `parser`
    pub fn compile<P>(text: &str, parser: &P) -> Result<Self, ParseError>
    where
        P: ArgumentParser<Argument = A> + ?Sized,
    {
        let parts = parse(text, parser)?;
        debug!(parts = parts.len(), "compiled template");
        Ok(Self { parts })
    }

    /// Parts in template order; no two literals are adjacent
    pub fn parts(&self) -> &[Part<A>] {
        self.parts.as_slice()
    }

    /// Arguments in template order
    pub fn arguments(&self) -> impl Iterator<Item = &A> + '_ {
        self.parts.iter().filter_map(Part::as_argument)
    }

    /// Render against `data`.
    ///
    /// With [`ErrorPolicy::Raise`] the first failing placeholder's error is
    /// returned; with [`ErrorPolicy::Preserve`] it is written back as
    /// `${partial}` and rendering always succeeds.
    pub fn render<D>(&self, data: &D, policy: ErrorPolicy) -> Result<String, A::Error>
    where
        A: Argument<D>,
        D: ?Sized,
    {
        let mut out = String::new();
        for part in &self.parts {
            match part {
                Part::Literal(text) => out.push_str(text),
                Part::Argument(arg) => policy.substitute(arg, data, &mut out)?,
            }
        }
        Ok(out)
    }
}
