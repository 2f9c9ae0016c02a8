//! Text-map interpolation
//!
//! Placeholder names are upper-cased at compile time and looked up in a
//! [`TextMap`]. Missing keys render back as `${KEY}` when failures are
//! preserved.
//!
//! # Example
//!
//! ```rust
//! use interpolate_text::textmap::{TextMap, TextMapTemplate};
//! use interpolate_text::ErrorPolicy;
//!
//! let map: TextMap = [("def", "apple")].into_iter().collect();
//! let tpl = TextMapTemplate::new("Abc${def}Ghi${jk}").unwrap();
//!
//! assert_eq!(tpl.render(&map, ErrorPolicy::Preserve).unwrap(), "AbcappleGhi${JK}");
//! assert!(tpl.render(&map, ErrorPolicy::Raise).is_err());
//! ```

mod key;
mod map;
mod template;

pub use key::{parse_key, TextMapError, TextMapKey};
pub use map::{TextMap, TextMapLoadError};
pub use template::{render_text_map, render_text_maps, BatchError, TextMapTemplate, TextMapTemplates};
