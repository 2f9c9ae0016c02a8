//! Interpolate Text - `${...}` placeholder interpolation
//!
//! This library scans template text for `${...}` placeholders, either
//! compiling it into a reusable [`Template`] or rendering it in a single pass.
//! Placeholder bodies are interpreted by a pluggable [`ArgumentParser`]; the
//! [`textmap`] module provides one that looks names up in a key/value map.
//!
//! # Example
//!
//! ```rust
//! use interpolate_text::{render, TextMap};
//!
//! let map: TextMap = [("DEF", "apple"), ("ABC", "banana")].into_iter().collect();
//! let text = render("Abc${DEF}Ghi", &map).unwrap();
//! assert_eq!(text, "AbcappleGhi");
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod parser;
pub mod template;
pub mod textmap;

pub use config::{RenderConfig, RenderMode};
pub use data::Data;
pub use error::ParseError;
pub use parser::{Part, ParseState};
pub use template::{
    render_once, ApplyFailure, Argument, ArgumentParser, ErrorPolicy, RenderError, Template,
};
pub use textmap::{BatchError, TextMap, TextMapError, TextMapTemplate, TextMapTemplates};

/// Render a text-map template with default configuration
///
/// Unresolved placeholders are errors.
///
/// # Example
///
/// ```rust
/// use interpolate_text::{render, TextMap};
///
/// let map: TextMap = [("who", "world")].into_iter().collect();
/// assert_eq!(render(r"Hello ${who}, that's \${who}", &map).unwrap(), "Hello world, that's ${who}");
/// ```
pub fn render(template: &str, map: &TextMap) -> Result<String, RenderError<TextMapError>> {
    render_with_config(template, map, &RenderConfig::default())
}

/// Render a text-map template with custom configuration
///
/// # Example
///
/// ```rust
/// use interpolate_text::{render_with_config, ErrorPolicy, RenderConfig, RenderMode, TextMap};
///
/// let config = RenderConfig::new()
///     .with_policy(ErrorPolicy::Preserve)
///     .with_mode(RenderMode::OnePass);
///
/// let text = render_with_config("a ${b} c", &TextMap::new(), &config).unwrap();
/// assert_eq!(text, "a ${B} c");
/// ```
pub fn render_with_config(
    template: &str,
    map: &TextMap,
    config: &RenderConfig,
) -> Result<String, RenderError<TextMapError>> {
    match config.mode {
        RenderMode::OnePass => textmap::render_text_map(template, map, config.policy),
        RenderMode::Compiled => {
            let tpl = TextMapTemplate::new(template)?;
            tpl.render(map, config.policy).map_err(RenderError::Apply)
        }
    }
}

/// Render each text as its own text-map template, honoring the configured mode
///
/// # Example
///
/// ```rust
/// use interpolate_text::{render_batch_with_config, RenderConfig, TextMap};
///
/// let map: TextMap = [("who", "world")].into_iter().collect();
/// let lines = render_batch_with_config(["hi ${who}", "bye"], &map, &RenderConfig::new()).unwrap();
/// assert_eq!(lines, vec!["hi world", "bye"]);
/// ```
pub fn render_batch_with_config<I, S>(
    template_texts: I,
    map: &TextMap,
    config: &RenderConfig,
) -> Result<Vec<String>, BatchError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    match config.mode {
        RenderMode::OnePass => textmap::render_text_maps(template_texts, map, config.policy),
        RenderMode::Compiled => TextMapTemplates::new(template_texts)?.render(map, config.policy),
    }
}
