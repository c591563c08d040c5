/*!
 * In-memory device registry.
 *
 * This module provides the volatile implementation of the device directory.
 * Since it does not persist records, it is meant for tests and development
 * rather than production deployments; a durable backend implements the same
 * [`DeviceStore`] contract.
 */
use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use parking_lot::RwLock;
use tracing::debug;

use pushflow_core::types::Id;

use crate::device::{DeviceError, DeviceRecord, DeviceStore, Result};

/// In-memory device registry
///
/// The registry exclusively owns its records; operations return clones, so
/// callers can never reach the stored entry. All three operations behave as
/// if serialized with respect to the uniqueness invariant: the duplicate
/// check and the insert happen under one write lock.
#[derive(Debug, Default)]
pub struct DeviceRegistry {
    /// The registered devices, keyed by identifier
    devices: RwLock<HashMap<Id, DeviceRecord>>,
}

impl DeviceRegistry {
    /// Create a new, empty device registry
    pub fn new() -> Self {
        Self {
            devices: RwLock::new(HashMap::new()),
        }
    }

    /// Register a device with the registry
    ///
    /// The token is normalized by deleting every whitespace character it
    /// contains, not only leading and trailing ones. Validation
    /// short-circuits: blank identifier, then blank token, then duplicate
    /// identifier. On success the returned record is a clone of the stored
    /// entry.
    pub fn register(&self, id: &str, token: &str) -> Result<DeviceRecord> {
        if id.trim().is_empty() {
            return Err(DeviceError::InvalidIdentifier);
        }
        if token.trim().is_empty() {
            return Err(DeviceError::InvalidToken);
        }

        let key = Id::from_string(id);
        let mut devices = self.devices.write();
        if devices.contains_key(&key) {
            return Err(DeviceError::DuplicateIdentifier);
        }

        let token: String = token.chars().filter(|c| !c.is_whitespace()).collect();
        let record = DeviceRecord::new(key.clone(), token, Utc::now());
        devices.insert(key.clone(), record.clone());
        debug!("Registered device with ID {}", key);

        Ok(record)
    }

    /// Get the device registered under `id`
    pub fn lookup(&self, id: &str) -> Result<DeviceRecord> {
        if id.trim().is_empty() {
            return Err(DeviceError::InvalidIdentifier);
        }

        let key = Id::from_string(id);
        let devices = self.devices.read();
        let record = devices
            .get(&key)
            .cloned()
            .ok_or(DeviceError::UnknownIdentifier)?;
        debug!("Resolved token for device with ID {}", key);

        Ok(record)
    }

    /// Remove the device registered under `id`
    pub fn remove(&self, id: &str) -> Result<()> {
        if id.trim().is_empty() {
            return Err(DeviceError::InvalidIdentifier);
        }

        let key = Id::from_string(id);
        let mut devices = self.devices.write();
        if devices.remove(&key).is_none() {
            return Err(DeviceError::UnknownIdentifier);
        }
        debug!("Unregistered device with ID {}", key);

        Ok(())
    }

    /// Count registered devices
    pub fn len(&self) -> usize {
        self.devices.read().len()
    }

    /// Check whether the registry holds no devices
    pub fn is_empty(&self) -> bool {
        self.devices.read().is_empty()
    }
}

impl DeviceStore for DeviceRegistry {
    fn register(&self, id: &str, token: &str) -> Result<DeviceRecord> {
        DeviceRegistry::register(self, id, token)
    }

    fn lookup(&self, id: &str) -> Result<DeviceRecord> {
        DeviceRegistry::lookup(self, id)
    }

    fn remove(&self, id: &str) -> Result<()> {
        DeviceRegistry::remove(self, id)
    }
}

/// A shared device registry that can be cloned
#[derive(Debug, Clone, Default)]
pub struct SharedDeviceRegistry(Arc<DeviceRegistry>);

impl SharedDeviceRegistry {
    /// Create a new shared device registry
    pub fn new() -> Self {
        Self(Arc::new(DeviceRegistry::new()))
    }

    /// Get a reference to the device registry
    pub fn registry(&self) -> &DeviceRegistry {
        &self.0
    }
}

impl AsRef<DeviceRegistry> for SharedDeviceRegistry {
    fn as_ref(&self) -> &DeviceRegistry {
        self.registry()
    }
}
