use std::borrow::Borrow;
use std::fmt;
use std::path::Path;

use path_clean::PathClean;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

const VIRTUAL_PREFIX: &str = "virtual:";

/// Canonical identifier for a module in the graph.
///
/// Filesystem-like identifiers are lexically cleaned (`./a/../b.js` becomes
/// `b.js`) so that differently spelled requests for the same file compare
/// equal. Nothing touches the filesystem: the graph is a pure data structure.
/// Virtual modules (e.g. `virtual:entry`) keep their prefix and skip cleaning.
///
/// The identifier is also what generated code uses as the runtime module id,
/// so it renders verbatim through [`fmt::Display`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModuleId(String);

impl ModuleId {
    /// Create a new module identifier from a path-like string.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, ModuleIdError> {
        let path = path.as_ref();

        if path.as_os_str().is_empty() {
            return Err(ModuleIdError::EmptyPath);
        }

        let text = path.to_string_lossy();
        if looks_like_virtual(&text) {
            return Ok(Self(normalize_virtual(&text)));
        }

        let cleaned = path.to_path_buf().clean();
        Ok(Self(cleaned.to_string_lossy().into_owned()))
    }

    /// Create a module identifier for a virtual module (e.g. `virtual:...`).
    pub fn new_virtual(id: impl Into<String>) -> Self {
        let id = id.into();

        if id.is_empty() {
            return Self(VIRTUAL_PREFIX.to_string());
        }

        Self(normalize_virtual(&id))
    }

    /// Borrow the identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the identifier represents a virtual module.
    pub fn is_virtual(&self) -> bool {
        self.0.starts_with(VIRTUAL_PREFIX)
    }
}

impl Borrow<str> for ModuleId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for ModuleId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ModuleId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        ModuleId::new(&value).map_err(serde::de::Error::custom)
    }
}

/// Error type for `ModuleId` construction failures.
#[derive(Debug, Error)]
pub enum ModuleIdError {
    /// The provided path was empty.
    #[error("module id path is empty")]
    EmptyPath,
}

fn looks_like_virtual(text: &str) -> bool {
    text.starts_with(VIRTUAL_PREFIX) || text.starts_with('\0')
}

fn normalize_virtual(text: &str) -> String {
    if text.starts_with(VIRTUAL_PREFIX) {
        text.to_string()
    } else {
        let trimmed = text.trim_start_matches('\0');
        format!("{VIRTUAL_PREFIX}{trimmed}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cleans_relative_segments() {
        let a = ModuleId::new("./src/../src/index.js").unwrap();
        let b = ModuleId::new("src/index.js").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "src/index.js");
    }

    #[test]
    fn empty_path_is_rejected() {
        assert!(matches!(ModuleId::new(""), Err(ModuleIdError::EmptyPath)));
    }

    #[test]
    fn virtual_ids_keep_prefix() {
        assert_eq!(ModuleId::new_virtual("entry").as_str(), "virtual:entry");
        assert_eq!(ModuleId::new_virtual("virtual:entry").as_str(), "virtual:entry");
        assert_eq!(ModuleId::new("\0helper").unwrap().as_str(), "virtual:helper");
        assert!(ModuleId::new_virtual("x").is_virtual());
    }

    #[test]
    fn serde_round_trips_through_string() {
        let id = ModuleId::new_virtual("a.js");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"virtual:a.js\"");
        let back: ModuleId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
