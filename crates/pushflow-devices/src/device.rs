/*!
 * Device record, store contract, and error taxonomy.
 *
 * This module defines the data carried for every registered device and the
 * storage-agnostic contract a device directory must satisfy. The in-memory
 * implementation lives in [`crate::registry`]; a durable variant only needs
 * to implement [`DeviceStore`] to be substitutable.
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use pushflow_core::types::Id;

/// Error type for device directory operations
///
/// Every variant is a caller-correctable rejection of a single call:
/// retrying with the same input fails identically, and no variant leaves the
/// store partially mutated.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceError {
    /// The identifier is missing or blank after trimming
    #[error("Invalid device identifier: missing or blank")]
    InvalidIdentifier,

    /// The device token is missing or blank after trimming
    #[error("Invalid device token: missing or blank")]
    InvalidToken,

    /// A device is already registered under this identifier
    #[error("A device is already registered under this identifier")]
    DuplicateIdentifier,

    /// No device is registered under this identifier
    #[error("No device is registered under this identifier")]
    UnknownIdentifier,
}

/// Result type for device directory operations
pub type Result<T> = std::result::Result<T, DeviceError>;

/// A registered device
///
/// Records are created only by a successful registration and are immutable
/// thereafter; fields are private so callers hold read-only views. Changing
/// a device's token requires removal and re-registration, which produces a
/// fresh registration timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceRecord {
    /// The caller-supplied identifier keying the record
    id: Id,
    /// The device token, with all whitespace stripped
    token: String,
    /// When the device was registered
    registered_at: DateTime<Utc>,
}

impl DeviceRecord {
    pub(crate) fn new(id: Id, token: String, registered_at: DateTime<Utc>) -> Self {
        Self {
            id,
            token,
            registered_at,
        }
    }

    /// Get the device identifier
    pub fn id(&self) -> &Id {
        &self.id
    }

    /// Get the normalized device token
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Get the registration timestamp
    pub fn registered_at(&self) -> DateTime<Utc> {
        self.registered_at
    }
}

/// The device directory contract
///
/// Exactly three operations: register, lookup, remove. There is deliberately
/// no update or find-by-token; implementations must keep the validation
/// order of [`DeviceStore::register`] so backends stay substitutable.
pub trait DeviceStore: Send + Sync {
    /// Register a device under `id`, normalizing `token` by deleting every
    /// whitespace character it contains
    ///
    /// Validation short-circuits in order: blank `id`
    /// ([`DeviceError::InvalidIdentifier`]), blank `token`
    /// ([`DeviceError::InvalidToken`]), identifier already registered
    /// ([`DeviceError::DuplicateIdentifier`]).
    fn register(&self, id: &str, token: &str) -> Result<DeviceRecord>;

    /// Resolve the record registered under `id`
    fn lookup(&self, id: &str) -> Result<DeviceRecord>;

    /// Delete the record registered under `id`
    fn remove(&self, id: &str) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_accessors() {
        let now = Utc::now();
        let record = DeviceRecord::new(Id::from_string("user1"), "abcd".to_string(), now);
        assert_eq!(record.id().as_str(), "user1");
        assert_eq!(record.token(), "abcd");
        assert_eq!(record.registered_at(), now);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            DeviceError::InvalidIdentifier.to_string(),
            "Invalid device identifier: missing or blank"
        );
        assert_eq!(
            DeviceError::UnknownIdentifier.to_string(),
            "No device is registered under this identifier"
        );
    }
}
