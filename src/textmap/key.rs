//! Placeholder keys resolved against text maps

use std::borrow::Cow;
use std::collections::HashMap;
use std::convert::Infallible;

use thiserror::Error;

use crate::data::Data;
use crate::template::{ApplyFailure, Argument};

use super::map::TextMap;

/// Errors from resolving a key against render data
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TextMapError {
    #[error("cannot found key [{0}] in given text map")]
    KeyNotFound(String),
    #[error("cannot convert given data into text map")]
    UnsupportedDataShape,
}

/// Upper-cased placeholder name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TextMapKey(String);

impl TextMapKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn lookup<'s>(&'s self, value: Option<&'s str>) -> Result<Cow<'s, str>, ApplyFailure<TextMapError>> {
        value.map(Cow::Borrowed).ok_or_else(|| {
            ApplyFailure::new(self.0.clone(), TextMapError::KeyNotFound(self.0.clone()))
        })
    }
}

/// Argument parser for text-map templates; never fails
pub fn parse_key(body: &str) -> Result<TextMapKey, Infallible> {
    Ok(TextMapKey(body.to_uppercase()))
}

impl Argument<TextMap> for TextMapKey {
    type Error = TextMapError;

    fn apply<'s>(&'s self, data: &'s TextMap) -> Result<Cow<'s, str>, ApplyFailure<TextMapError>> {
        self.lookup(data.get(&self.0))
    }
}

/// Plain maps are looked up as-is; their keys must already be upper-case.
impl Argument<HashMap<String, String>> for TextMapKey {
    type Error = TextMapError;

    fn apply<'s>(
        &'s self,
        data: &'s HashMap<String, String>,
    ) -> Result<Cow<'s, str>, ApplyFailure<TextMapError>> {
        self.lookup(data.get(&self.0).map(|s| s.as_str()))
    }
}

impl<'a> Argument<Data<'a>> for TextMapKey {
    type Error = TextMapError;

    fn apply<'s>(&'s self, data: &'s Data<'a>) -> Result<Cow<'s, str>, ApplyFailure<TextMapError>> {
        match data {
            Data::TextMap(map) => self.lookup(map.get(&self.0)),
            Data::Empty | Data::Text(_) => Err(ApplyFailure::new(
                self.0.clone(),
                TextMapError::UnsupportedDataShape,
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(body: &str) -> TextMapKey {
        parse_key(body).unwrap()
    }

    #[test]
    fn test_parse_uppercases() {
        assert_eq!(key("dEf").as_str(), "DEF");
        assert_eq!(key("straße").as_str(), "STRASSE");
    }

    #[test]
    fn test_apply_found() {
        let map: TextMap = [("DEF", "apple")].into_iter().collect();
        assert_eq!(key("def").apply(&map).unwrap(), "apple");
    }

    #[test]
    fn test_apply_missing_reports_key() {
        let map = TextMap::new();
        let failure = key("def").apply(&map).unwrap_err();
        assert_eq!(failure.partial, "DEF");
        assert_eq!(failure.error, TextMapError::KeyNotFound("DEF".to_string()));
    }

    #[test]
    fn test_apply_plain_hashmap() {
        let map = HashMap::from([("JK".to_string(), "x".to_string())]);
        assert_eq!(key("jk").apply(&map).unwrap(), "x");
    }

    #[test]
    fn test_apply_data_shapes() {
        let map: TextMap = [("A", "1")].into_iter().collect();
        assert_eq!(key("a").apply(&Data::TextMap(&map)).unwrap(), "1");

        for data in [Data::Empty, Data::Text("a")] {
            let failure = key("a").apply(&data).unwrap_err();
            assert_eq!(failure.partial, "A");
            assert_eq!(failure.error, TextMapError::UnsupportedDataShape);
        }
    }
}
