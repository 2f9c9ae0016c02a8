//! Render data of mixed shape

use crate::textmap::TextMap;

/// Data handed to arguments that accept more than one shape.
///
/// Arguments inspect the variant and fail when it is not one they can read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Data<'a> {
    /// No data at all
    Empty,
    /// A single text value
    Text(&'a str),
    /// A key/value text map
    TextMap(&'a TextMap),
}

impl<'a> From<&'a TextMap> for Data<'a> {
    fn from(map: &'a TextMap) -> Self {
        Data::TextMap(map)
    }
}

impl<'a> From<&'a str> for Data<'a> {
    fn from(text: &'a str) -> Self {
        Data::Text(text)
    }
}
