/*!
 * Pushflow Devices
 *
 * This crate provides the device directory for the pushflow push-notification
 * system: the record type, the storage-agnostic store contract, and the
 * in-memory registry used to resolve an application-level identifier to a
 * device token before dispatching a message.
 */

#![warn(missing_docs)]

// Re-export core types
pub use pushflow_core::prelude;

pub mod device;
pub mod registry;

// Re-export the store contract and basic implementation
pub use device::{DeviceError, DeviceRecord, DeviceStore};
pub use registry::{DeviceRegistry, SharedDeviceRegistry};

/// Pushflow devices crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the device system
pub fn init() -> Result<(), pushflow_core::error::Error> {
    tracing::info!("Pushflow Devices {} initialized", VERSION);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
