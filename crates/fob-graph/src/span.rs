use std::fmt;

use serde::{Deserialize, Serialize};

/// Half-open byte range `[start, end)` into a module's *original* source.
///
/// Ranges are produced by the parser and never shift while templates edit the
/// source: every editor call is addressed in original coordinates.
///
/// An inverted range collapses to an empty range at `start`, whether it is
/// built with [`SourceRange::new`] or deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawRange")]
pub struct SourceRange {
    pub start: u32,
    pub end: u32,
}

impl SourceRange {
    /// Construct a new range from byte offsets.
    pub fn new(start: u32, end: u32) -> Self {
        Self {
            start,
            end: end.max(start),
        }
    }

    /// Length of the range in bytes.
    pub fn len(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    /// Returns true when the range has zero width.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Check whether the range contains a byte offset.
    pub fn contains(&self, offset: u32) -> bool {
        offset >= self.start && offset < self.end
    }

    /// Returns true when the two ranges share at least one byte.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }
}

#[derive(Deserialize)]
struct RawRange {
    start: u32,
    end: u32,
}

impl From<RawRange> for SourceRange {
    fn from(raw: RawRange) -> Self {
        Self::new(raw.start, raw.end)
    }
}

impl fmt::Display for SourceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_object() {
        let range = SourceRange::new(5, 9);
        let json = serde_json::to_string(&range).unwrap();
        assert_eq!(json, r#"{"start":5,"end":9}"#);

        let back: SourceRange = serde_json::from_str(r#"{ "start": 10, "end": 20 }"#).unwrap();
        assert_eq!(back, SourceRange::new(10, 20));
    }

    #[test]
    fn inverted_range_collapses_at_start() {
        assert_eq!(SourceRange::new(9, 5), SourceRange::new(9, 9));
        assert!(SourceRange::new(9, 5).is_empty());

        let parsed: SourceRange = serde_json::from_str(r#"{ "start": 9, "end": 5 }"#).unwrap();
        assert_eq!(parsed, SourceRange::new(9, 9));
    }

    #[test]
    fn overlap_is_half_open() {
        let a = SourceRange::new(0, 5);
        assert!(!a.overlaps(&SourceRange::new(5, 8)));
        assert!(a.overlaps(&SourceRange::new(4, 8)));
        assert!(a.contains(4));
        assert!(!a.contains(5));
        assert_eq!(a.len(), 5);
    }
}
