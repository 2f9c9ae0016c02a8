//! Compiled and one-pass template rendering
//!
//! Templates are plain text with `${...}` placeholders. Each placeholder body
//! is handed to an [`ArgumentParser`] at compile time; the resulting
//! arguments produce text from data at render time.
//!
//! # Example
//!
//! ```rust
//! use std::borrow::Cow;
//! use std::convert::Infallible;
//! use interpolate_text::template::{ApplyFailure, Argument, ErrorPolicy, Template};
//!
//! struct Shout(String);
//!
//! impl Argument<str> for Shout {
//!     type Error = Infallible;
//!
//!     fn apply<'s>(&'s self, data: &'s str) -> Result<Cow<'s, str>, ApplyFailure<Infallible>> {
//!         Ok(Cow::Owned(format!("{}{}", data, self.0)))
//!     }
//! }
//!
//! let parser = |body: &str| -> Result<Shout, Infallible> { Ok(Shout(body.to_string())) };
//! let tpl = Template::compile("say ${!!}", &parser).unwrap();
//! assert_eq!(tpl.render("hi", ErrorPolicy::Raise).unwrap(), "say hi!!");
//! ```

mod argument;
mod compiled;
mod once;
mod policy;

pub use argument::{ApplyFailure, Argument, ArgumentParser};
pub use compiled::Template;
pub use once::{render_once, RenderError};
pub use policy::ErrorPolicy;
