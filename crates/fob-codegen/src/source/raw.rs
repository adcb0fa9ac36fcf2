use std::borrow::Cow;
use std::sync::Arc;

use super::Source;

/// Text emitted verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSource {
    text: Arc<str>,
}

impl RawSource {
    pub fn new(text: impl Into<Arc<str>>) -> Self {
        Self { text: text.into() }
    }
}

impl From<&str> for RawSource {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for RawSource {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl Source for RawSource {
    fn source(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.text)
    }

    fn size(&self) -> usize {
        self.text.len()
    }
}
