use std::borrow::Cow;

use fob_graph::HashUpdate;

use super::{BoxSource, RawSource, Source};

/// Ordered concatenation of sources.
#[derive(Debug, Default)]
pub struct ConcatSource {
    children: Vec<BoxSource>,
}

impl ConcatSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a source.
    pub fn add(&mut self, source: impl Source + 'static) {
        self.children.push(Box::new(source));
    }

    /// Append plain text.
    pub fn add_str(&mut self, text: impl Into<String>) {
        self.add(RawSource::from(text.into()));
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Source for ConcatSource {
    fn source(&self) -> Cow<'_, str> {
        match self.children.as_slice() {
            [] => Cow::Borrowed(""),
            [only] => only.source(),
            children => {
                let mut text = String::with_capacity(self.size());
                for child in children {
                    text.push_str(&child.source());
                }
                Cow::Owned(text)
            }
        }
    }

    fn size(&self) -> usize {
        self.children.iter().map(|child| child.size()).sum()
    }

    /// Children contribute one after another.
    fn update_hash(&self, hash: &mut dyn HashUpdate) {
        for child in &self.children {
            child.update_hash(hash);
        }
    }
}
