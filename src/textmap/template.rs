//! Text-map templates, singly and in batches

use thiserror::Error;

use crate::error::ParseError;
use crate::template::{render_once, Argument, ErrorPolicy, RenderError, Template};

use super::key::{parse_key, TextMapError, TextMapKey};

/// A template whose placeholders name text-map keys
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextMapTemplate {
    inner: Template<TextMapKey>,
}

impl TextMapTemplate {
    pub fn new(template_text: &str) -> Result<Self, ParseError> {
        Ok(Self {
            inner: Template::compile(template_text, &parse_key)?,
        })
    }

    /// Render against a [`TextMap`](super::TextMap), a plain upper-case keyed
    /// `HashMap`, or mixed-shape [`Data`](crate::Data)
    pub fn render<D>(&self, data: &D, policy: ErrorPolicy) -> Result<String, TextMapError>
    where
        TextMapKey: Argument<D, Error = TextMapError>,
        D: ?Sized,
    {
        self.inner.render(data, policy)
    }

    /// Upper-cased keys in template order
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.inner.arguments().map(TextMapKey::as_str)
    }

    /// The underlying generic template
    pub fn template(&self) -> &Template<TextMapKey> {
        &self.inner
    }
}

/// Render a text-map template without keeping it
pub fn render_text_map<D>(
    template_text: &str,
    data: &D,
    policy: ErrorPolicy,
) -> Result<String, RenderError<TextMapError>>
where
    TextMapKey: Argument<D, Error = TextMapError>,
    D: ?Sized,
{
    render_once(template_text, data, &parse_key, policy)
}

/// Render several text-map templates in a single pass each.
///
/// Reports the same error [`TextMapTemplates::new`] followed by
/// [`TextMapTemplates::render`] would: any template error ahead of the first
/// apply error.
pub fn render_text_maps<I, S, D>(
    template_texts: I,
    data: &D,
    policy: ErrorPolicy,
) -> Result<Vec<String>, BatchError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    TextMapKey: Argument<D, Error = TextMapError>,
    D: ?Sized,
{
    let mut rendered = Vec::new();
    let mut failure = None;
    for (index, text) in template_texts.into_iter().enumerate() {
        match render_text_map(text.as_ref(), data, policy) {
            Ok(out) => rendered.push(out),
            Err(RenderError::Parse(source)) => return Err(BatchError::Parse { index, source }),
            Err(RenderError::Apply(source)) => {
                failure.get_or_insert(BatchError::Apply { index, source });
            }
        }
    }
    match failure {
        Some(err) => Err(err),
        None => Ok(rendered),
    }
}

/// Errors from a batch of templates, naming the failing template's index
#[derive(Error, Debug)]
pub enum BatchError {
    #[error("template #{index}: {source}")]
    Parse {
        index: usize,
        #[source]
        source: ParseError,
    },
    #[error("template #{index}: {source}")]
    Apply {
        index: usize,
        #[source]
        source: TextMapError,
    },
}

/// Several text-map templates rendered against the same data
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextMapTemplates {
    templates: Vec<TextMapTemplate>,
}

impl TextMapTemplates {
    /// Compile every text; the first failure aborts the batch
    pub fn new<I, S>(template_texts: I) -> Result<Self, BatchError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let templates = template_texts
            .into_iter()
            .enumerate()
            .map(|(index, text)| {
                TextMapTemplate::new(text.as_ref())
                    .map_err(|source| BatchError::Parse { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { templates })
    }

    /// Render every template in order; under [`ErrorPolicy::Raise`] the first
    /// failure aborts the batch
    pub fn render<D>(&self, data: &D, policy: ErrorPolicy) -> Result<Vec<String>, BatchError>
    where
        TextMapKey: Argument<D, Error = TextMapError>,
        D: ?Sized,
    {
        self.templates
            .iter()
            .enumerate()
            .map(|(index, tpl)| {
                tpl.render(data, policy)
                    .map_err(|source| BatchError::Apply { index, source })
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TextMapTemplate> {
        self.templates.iter()
    }
}
