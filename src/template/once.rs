//! One-pass rendering: scan and substitute without keeping parts

use std::convert::Infallible;

use thiserror::Error;
use tracing::debug;

use crate::error::ParseError;
use crate::parser::{scan, ScanError, Sink};

use super::argument::{Argument, ArgumentParser};
use super::policy::ErrorPolicy;

/// Error from one-pass rendering: a template error or an apply error
#[derive(Error, Debug)]
pub enum RenderError<E> {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Apply(E),
}

/// Writes literals and substituted values straight into the output.
///
/// The first apply failure is held back and output stops, but scanning goes
/// on so a later template error still wins.
struct Direct<'d, D: ?Sized, E> {
    data: &'d D,
    policy: ErrorPolicy,
    out: String,
    failure: Option<E>,
}

impl<A, D> Sink<A> for Direct<'_, D, A::Error>
where
    A: Argument<D>,
    D: ?Sized,
{
    type Error = Infallible;

    fn text(&mut self, text: &str) {
        if self.failure.is_none() {
            self.out.push_str(text);
        }
    }

    fn argument(&mut self, arg: A) -> Result<(), Infallible> {
        if self.failure.is_none() {
            if let Err(err) = self.policy.substitute(&arg, self.data, &mut self.out) {
                self.failure = Some(err);
            }
        }
        Ok(())
    }
}

/// Render `text` against `data` in a single scan.
///
/// Behaves as [`Template::compile`](super::Template::compile) followed by one
/// [`Template::render`](super::Template::render): a template error anywhere
/// in `text` is reported ahead of any apply error.
pub fn render_once<P, D>(
    text: &str,
    data: &D,
    parser: &P,
    policy: ErrorPolicy,
) -> Result<String, RenderError<<P::Argument as Argument<D>>::Error>>
where
    P: ArgumentParser + ?Sized,
    P::Argument: Argument<D>,
    D: ?Sized,
{
    let mut sink: Direct<'_, D, <P::Argument as Argument<D>>::Error> = Direct {
        data,
        policy,
        out: String::with_capacity(text.len()),
        failure: None,
    };
    scan(text, parser, &mut sink).map_err(ScanError::into_parse_error)?;
    if let Some(err) = sink.failure {
        return Err(RenderError::Apply(err));
    }
    debug!(len = sink.out.len(), "rendered template in one pass");
    Ok(sink.out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::{ApplyFailure, Template};
    use pretty_assertions::assert_eq;
    use std::borrow::Cow;
    use std::error::Error as StdError;
    use std::fmt;

    #[derive(Debug, PartialEq, Eq)]
    struct NotADigit;

    impl fmt::Display for NotADigit {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "not a digit")
        }
    }

    impl StdError for NotADigit {}

    /// Picks the n-th entry of a slice
    #[derive(Debug)]
    struct Index(String);

    impl Argument<[&'static str]> for Index {
        type Error = NotADigit;

        fn apply<'s>(
            &'s self,
            data: &'s [&'static str],
        ) -> Result<Cow<'s, str>, ApplyFailure<NotADigit>> {
            self.0
                .parse::<usize>()
                .ok()
                .and_then(|i| data.get(i))
                .map(|v| Cow::Borrowed(*v))
                .ok_or_else(|| ApplyFailure::new(self.0.clone(), NotADigit))
        }
    }

    fn index_parser(body: &str) -> Result<Index, std::convert::Infallible> {
        Ok(Index(body.to_string()))
    }

    const DATA: &[&str] = &["zero", "one", "two"];

    #[test]
    fn test_render_once_substitutes() {
        let out = render_once("${0}-${2}", DATA, &index_parser, ErrorPolicy::Raise).unwrap();
        assert_eq!(out, "zero-two");
    }

    #[test]
    fn test_render_once_matches_compiled() {
        let inputs = [
            r"a${1}b\${0}c$d${9}\\",
            "$${0}",
            "{1}${1}}",
            r"\",
            "",
        ];
        for input in inputs {
            let once = render_once(input, DATA, &index_parser, ErrorPolicy::Preserve).unwrap();
            let compiled = Template::compile(input, &index_parser)
                .unwrap()
                .render(DATA, ErrorPolicy::Preserve)
                .unwrap();
            assert_eq!(once, compiled, "input: {input}");
        }
    }

    #[test]
    fn test_render_once_raise() {
        let err = render_once("${x}", DATA, &index_parser, ErrorPolicy::Raise).unwrap_err();
        assert!(matches!(err, RenderError::Apply(NotADigit)));
        assert_eq!(err.to_string(), "not a digit");
    }

    #[test]
    fn test_render_once_parse_error() {
        let err = render_once("${0}${}", DATA, &index_parser, ErrorPolicy::Preserve).unwrap_err();
        assert!(matches!(
            err,
            RenderError::Parse(ParseError::EmptyPlaceholder { position: 6 })
        ));
    }

    #[test]
    fn test_parse_error_wins_over_earlier_apply_error() {
        let err = render_once("${x}${", DATA, &index_parser, ErrorPolicy::Raise).unwrap_err();
        assert!(matches!(
            err,
            RenderError::Parse(ParseError::UnterminatedPlaceholder { position: 4 })
        ));
        let compiled = Template::compile("${x}${", &index_parser).unwrap_err();
        assert_eq!(err.to_string(), compiled.to_string());
    }

    #[test]
    fn test_first_apply_error_kept() {
        let err = render_once("${x}${1}${y}", DATA, &index_parser, ErrorPolicy::Raise).unwrap_err();
        assert!(matches!(err, RenderError::Apply(NotADigit)));
    }

    #[test]
    fn test_render_error_source() {
        let err = render_once("ab${}", DATA, &index_parser, ErrorPolicy::Raise).unwrap_err();
        assert_eq!(err.to_string(), "empty interpolate argument (position=4)");
        assert!(StdError::source(&err).is_none());
    }
}
