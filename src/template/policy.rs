//! What rendering does when a placeholder cannot be resolved

use serde::Deserialize;
use tracing::debug;

use super::argument::Argument;

/// Render-time error policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Abort on the first failing placeholder and return its error
    #[default]
    Raise,
    /// Write the failing placeholder back as `${partial}` and keep going
    Preserve,
}

impl ErrorPolicy {
    /// Policy for a `raise_error` flag
    pub fn from_raise(raise: bool) -> Self {
        if raise {
            ErrorPolicy::Raise
        } else {
            ErrorPolicy::Preserve
        }
    }

    pub fn raises(self) -> bool {
        self == ErrorPolicy::Raise
    }

    /// Apply `arg` to `data` and append the result to `out` under this policy.
    pub(crate) fn substitute<A, D>(self, arg: &A, data: &D, out: &mut String) -> Result<(), A::Error>
    where
        A: Argument<D>,
        D: ?Sized,
    {
        match arg.apply(data) {
            Ok(text) => out.push_str(&text),
            Err(failure) => {
                if self.raises() {
                    return Err(failure.error);
                }
                debug!(placeholder = %failure.partial, error = %failure.error, "preserving unresolved placeholder");
                out.push_str("${");
                out.push_str(&failure.partial);
                out.push('}');
            }
        }
        Ok(())
    }
}
