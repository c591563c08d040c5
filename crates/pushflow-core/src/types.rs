/*!
 * Core data types for pushflow.
 *
 * This module defines the identifier type used to key every registry in the
 * pushflow ecosystem.
 */
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A unique identifier for pushflow resources
///
/// Identifiers are opaque caller-supplied strings; construction never
/// validates them. Registries reject blank identifiers at the call site so
/// that validation ordering stays under their control.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Id(String);

impl Id {
    /// Create a new ID with a random UUID
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Create an ID from a string
    pub fn from_string<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_string())
    }

    /// Get the string representation of the ID
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for Id {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for Id {
    fn from(s: &str) -> Self {
        Self::from_string(s)
    }
}

impl From<String> for Id {
    fn from(s: String) -> Self {
        Self::from_string(s)
    }
}

impl From<Uuid> for Id {
    fn from(uuid: Uuid) -> Self {
        Self::from_string(uuid.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = Id::new();
        assert!(!id.as_str().is_empty());

        let id = Id::from_string("device-1");
        assert_eq!(id.as_str(), "device-1");

        let id: Id = "another-id".into();
        assert_eq!(id.as_str(), "another-id");

        let id: Id = String::from("string-id").into();
        assert_eq!(id.as_str(), "string-id");
    }

    #[test]
    fn test_id_display() {
        let id = Id::from_string("device-1");
        assert_eq!(format!("{}", id), "device-1");
    }

    #[test]
    fn test_id_preserves_whitespace() {
        // Identifiers are opaque: " a" and "a" are distinct keys.
        let padded = Id::from_string(" a");
        let bare = Id::from_string("a");
        assert_ne!(padded, bare);
        assert_eq!(padded.as_str(), " a");
    }
}
