//! Code hoisted ahead of a module body.
//!
//! Templates return [`InitFragment`]s next to their in-place edits. The
//! generator merges every fragment of a module with [`merge_init_fragments`]
//! and emits the survivors before the edited source.

use std::cmp::Ordering;

/// Ordering stage of a fragment. Lower stages are emitted first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum InitFragmentStage {
    Constants = 10,
    HarmonyExports = 20,
    HarmonyImports = 30,
    Provides = 40,
}

/// Deduplication key of a fragment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FragmentKey {
    /// Fragments sharing a key collapse to the first one in sort order.
    Keyed(String),
    /// Never merged, even with a content-identical fragment.
    NoDedup,
}

impl From<String> for FragmentKey {
    fn from(key: String) -> Self {
        Self::Keyed(key)
    }
}

impl From<&str> for FragmentKey {
    fn from(key: &str) -> Self {
        Self::Keyed(key.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitFragment {
    pub content: String,
    pub stage: InitFragmentStage,
    /// Secondary sort key within a stage.
    pub position: i32,
    pub key: FragmentKey,
}

impl InitFragment {
    pub fn new(
        content: impl Into<String>,
        stage: InitFragmentStage,
        position: i32,
        key: impl Into<FragmentKey>,
    ) -> Self {
        Self {
            content: content.into(),
            stage,
            position,
            key: key.into(),
        }
    }

    /// Fragment that is never deduplicated.
    pub fn unkeyed(content: impl Into<String>, stage: InitFragmentStage, position: i32) -> Self {
        Self::new(content, stage, position, FragmentKey::NoDedup)
    }

    fn sort_key(&self) -> (InitFragmentStage, i32) {
        (self.stage, self.position)
    }
}

fn compare_indexed(a: &(usize, InitFragment), b: &(usize, InitFragment)) -> Ordering {
    a.1.sort_key()
        .cmp(&b.1.sort_key())
        .then_with(|| a.0.cmp(&b.0))
}

/// Sort fragments by `(stage, position, insertion index)` and keep the first
/// fragment of every key.
pub fn merge_init_fragments(fragments: Vec<InitFragment>) -> Vec<InitFragment> {
    let mut indexed: Vec<(usize, InitFragment)> = fragments.into_iter().enumerate().collect();
    indexed.sort_by(compare_indexed);

    let mut seen = rustc_hash::FxHashSet::default();
    indexed
        .into_iter()
        .map(|(_, fragment)| fragment)
        .filter(|fragment| match &fragment.key {
            FragmentKey::Keyed(key) => seen.insert(key.clone()),
            FragmentKey::NoDedup => true,
        })
        .collect()
}
