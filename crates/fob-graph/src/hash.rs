//! Incremental hashing contract.
//!
//! Only the incremental-update surface matters to the data model: every
//! participant feeds strings into a [`HashUpdate`] in a fixed order.

use sha2::{Digest, Sha256};

/// Sink for incremental hash contributions.
pub trait HashUpdate {
    /// Feed one string into the hash.
    fn update(&mut self, data: &str);
}

/// SHA-256 backed [`HashUpdate`] producing a hex digest.
#[derive(Debug, Clone, Default)]
pub struct ContentHasher {
    hasher: Sha256,
}

impl ContentHasher {
    /// Create an empty hasher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Finish hashing and return the lowercase hex digest.
    pub fn digest_hex(self) -> String {
        format!("{:x}", self.hasher.finalize())
    }
}

impl HashUpdate for ContentHasher {
    fn update(&mut self, data: &str) {
        self.hasher.update(data.as_bytes());
    }
}

/// Records every update verbatim. Useful to assert hash feeding order.
impl HashUpdate for Vec<String> {
    fn update(&mut self, data: &str) {
        self.push(data.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_is_deterministic_and_order_sensitive() {
        let mut a = ContentHasher::new();
        a.update("HotUpdateChunkTemplate");
        a.update("1");

        let mut b = ContentHasher::new();
        b.update("HotUpdateChunkTemplate");
        b.update("1");

        let mut c = ContentHasher::new();
        c.update("1");
        c.update("HotUpdateChunkTemplate");

        let a = a.digest_hex();
        assert_eq!(a, b.digest_hex());
        assert_ne!(a, c.digest_hex());
        assert_eq!(a.len(), 64);
    }
}
