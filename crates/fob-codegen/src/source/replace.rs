use std::borrow::Cow;
use std::sync::Arc;

use super::Source;

/// Where an insertion lands relative to other edits at the same offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    /// At the offset, ordered with other ordinary edits by call order.
    At(u32),
    /// At the offset, after every ordinary edit there and before the
    /// original character at that offset.
    Trailing(u32),
}

impl Anchor {
    fn offset(self) -> u32 {
        match self {
            Self::At(offset) | Self::Trailing(offset) => offset,
        }
    }

    fn placement(self) -> Placement {
        match self {
            Self::At(_) => Placement::Ordinary,
            Self::Trailing(_) => Placement::Trailing,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Placement {
    Ordinary,
    Trailing,
}

#[derive(Debug, Clone)]
struct Edit {
    start: usize,
    end: usize,
    placement: Placement,
    order: usize,
    content: String,
}

/// Copy-on-splice editor over an original text.
///
/// Every offset passed to [`insert`](Self::insert), [`insert_at`](Self::insert_at)
/// and [`replace`](Self::replace) refers to the original text, never to the
/// text produced by earlier edits. Offsets past the end clamp to the end.
/// Overlapping replacements are not repaired: the later-sorted edit only
/// removes what the earlier one left.
#[derive(Debug, Clone)]
pub struct ReplaceSource {
    original: Arc<str>,
    edits: Vec<Edit>,
}

impl ReplaceSource {
    pub fn new(original: impl Into<Arc<str>>) -> Self {
        Self {
            original: original.into(),
            edits: Vec::new(),
        }
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    /// Insert text before the original character at `position`.
    pub fn insert(&mut self, position: u32, content: impl Into<String>) {
        self.insert_at(Anchor::At(position), content);
    }

    pub fn insert_at(&mut self, anchor: Anchor, content: impl Into<String>) {
        let start = self.clamp(anchor.offset());
        self.push(start, start, anchor.placement(), content.into());
    }

    /// Replace the original bytes `[start, end)` with `content`.
    pub fn replace(&mut self, start: u32, end: u32, content: impl Into<String>) {
        let start = self.clamp(start);
        let end = self.clamp(end).max(start);
        self.push(start, end, Placement::Ordinary, content.into());
    }

    /// Number of recorded edits.
    pub fn edit_count(&self) -> usize {
        self.edits.len()
    }

    fn push(&mut self, start: usize, end: usize, placement: Placement, content: String) {
        let order = self.edits.len();
        self.edits.push(Edit {
            start,
            end,
            placement,
            order,
            content,
        });
    }

    fn clamp(&self, offset: u32) -> usize {
        let mut offset = (offset as usize).min(self.original.len());
        while !self.original.is_char_boundary(offset) {
            offset -= 1;
        }
        offset
    }

    fn render(&self) -> String {
        let mut edits: Vec<&Edit> = self.edits.iter().collect();
        edits.sort_by_key(|edit| (edit.start, edit.placement, edit.order));

        let added: usize = edits.iter().map(|edit| edit.content.len()).sum();
        let mut out = String::with_capacity(self.original.len() + added);
        let mut cursor = 0;

        for edit in edits {
            if edit.start > cursor {
                out.push_str(&self.original[cursor..edit.start]);
                cursor = edit.start;
            }
            out.push_str(&edit.content);
            cursor = cursor.max(edit.end);
        }

        out.push_str(&self.original[cursor..]);
        out
    }
}

impl Source for ReplaceSource {
    fn source(&self) -> Cow<'_, str> {
        if self.edits.is_empty() {
            Cow::Borrowed(&self.original)
        } else {
            Cow::Owned(self.render())
        }
    }
}
