//! Source editor contract.
//!
//! Generated code is assembled from [`Source`] values: raw text, a
//! [`ReplaceSource`] holding splices over a module's original text, and a
//! [`ConcatSource`] joining several of them.

mod concat;
mod raw;
mod replace;

pub use concat::ConcatSource;
pub use raw::RawSource;
pub use replace::{Anchor, ReplaceSource};

use std::borrow::Cow;
use std::fmt;

use fob_graph::HashUpdate;

/// Text produced by code generation.
pub trait Source: fmt::Debug + Send + Sync {
    /// Final text of this source.
    fn source(&self) -> Cow<'_, str>;

    /// Length of [`source`](Self::source) in bytes.
    fn size(&self) -> usize {
        self.source().len()
    }

    /// Feed the final text into a build hash.
    fn update_hash(&self, hash: &mut dyn HashUpdate) {
        hash.update(&self.source());
    }
}

/// Owned, type-erased source.
pub type BoxSource = Box<dyn Source>;

impl Source for BoxSource {
    fn source(&self) -> Cow<'_, str> {
        self.as_ref().source()
    }

    fn size(&self) -> usize {
        self.as_ref().size()
    }

    fn update_hash(&self, hash: &mut dyn HashUpdate) {
        self.as_ref().update_hash(hash);
    }
}
