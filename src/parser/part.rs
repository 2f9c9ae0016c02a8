//! Parsed template parts

/// One unit of a compiled template
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Part<A> {
    /// Text copied to the output as-is (escapes already removed)
    Literal(String),
    /// Product of the argument parser for one placeholder
    Argument(A),
}

impl<A> Part<A> {
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Part::Literal(text) => Some(text),
            Part::Argument(_) => None,
        }
    }

    pub fn as_argument(&self) -> Option<&A> {
        match self {
            Part::Literal(_) => None,
            Part::Argument(arg) => Some(arg),
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Part::Literal(_))
    }
}

/// Ordered parts in which no two literals are adjacent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parts<A> {
    parts: Vec<Part<A>>,
}

impl<A> Default for Parts<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Parts<A> {
    pub fn new() -> Self {
        Self { parts: Vec::new() }
    }

    /// Append literal text, merging into a preceding literal.
    pub fn push_literal(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        match self.parts.last_mut() {
            Some(Part::Literal(prev)) => prev.push_str(text),
            _ => self.parts.push(Part::Literal(text.to_string())),
        }
    }

    pub fn push_argument(&mut self, arg: A) {
        self.parts.push(Part::Argument(arg));
    }

    pub fn as_slice(&self) -> &[Part<A>] {
        &self.parts
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Part<A>> {
        self.parts.iter()
    }
}

impl<'a, A> IntoIterator for &'a Parts<A> {
    type Item = &'a Part<A>;
    type IntoIter = std::slice::Iter<'a, Part<A>>;

    fn into_iter(self) -> Self::IntoIter {
        self.parts.iter()
    }
}
