//! Error types for template parsing

use std::error::Error as StdError;

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Error raised by an argument parser, carried opaquely
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Errors discovered while scanning template text.
///
/// Positions are character indices into the template, not byte offsets.
#[derive(Error, Debug)]
pub enum ParseError {
    /// `${}` with nothing between the braces; position of the closing brace
    #[error("empty interpolate argument (position={position})")]
    EmptyPlaceholder { position: usize },

    /// The argument parser rejected a placeholder body; position of the closing brace
    #[error("interpolate argument parsing failed (position={position}, error={source})")]
    PlaceholderParseFailed {
        position: usize,
        #[source]
        source: BoxError,
    },

    /// Input ended inside `${`; position of the opening `$`
    #[error("unterminated interpolate argument (position={position})")]
    UnterminatedPlaceholder { position: usize },
}

impl ParseError {
    pub(crate) fn parse_failed(position: usize, source: impl Into<BoxError>) -> Self {
        ParseError::PlaceholderParseFailed {
            position,
            source: source.into(),
        }
    }

    /// Character index the error points at
    pub fn position(&self) -> usize {
        match self {
            ParseError::EmptyPlaceholder { position }
            | ParseError::PlaceholderParseFailed { position, .. }
            | ParseError::UnterminatedPlaceholder { position } => *position,
        }
    }

    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let (span, message) = match self {
            ParseError::EmptyPlaceholder { position } => {
                (*position..*position + 1, "placeholder body is empty".to_string())
            }
            ParseError::PlaceholderParseFailed {
                position,
                source: cause,
            } => (
                *position..*position + 1,
                format!("placeholder rejected: {}", cause),
            ),
            ParseError::UnterminatedPlaceholder { position } => (
                *position..source.chars().count().max(*position + 1),
                "placeholder is never closed".to_string(),
            ),
        };

        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, filename, span.start)
            .with_message(self.to_string())
            .with_label(
                Label::new((filename, span))
                    .with_message(message)
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);

        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => self.to_string(),
        }
    }
}
