//! Provisioning-flow walkthrough for the device directory.
//!
//! Enrolls a device, shows duplicate rejection and token resolution, then
//! unenrolls it. Run with:
//!
//! ```bash
//! cargo run --example enroll
//! ```

use anyhow::Result;

use pushflow_devices::{DeviceError, DeviceRegistry};

fn main() -> Result<()> {
    pushflow_core::logging::init_with_filter("debug")?;

    let registry = DeviceRegistry::new();

    // A device enrolls; the token arrives with presentation whitespace.
    let record = registry.register("alice-phone", "740f 4707 bebc f74f")?;
    println!(
        "enrolled {} with token {} at {}",
        record.id(),
        record.token(),
        record.registered_at()
    );

    // A second enrollment under the same identifier is rejected.
    match registry.register("alice-phone", "1111 2222") {
        Err(DeviceError::DuplicateIdentifier) => println!("duplicate enrollment rejected"),
        other => println!("unexpected outcome: {:?}", other),
    }

    // The delivery pipeline resolves the token before dispatch.
    let resolved = registry.lookup("alice-phone")?;
    println!("resolved token {} for delivery", resolved.token());

    // The device unenrolls.
    registry.remove("alice-phone")?;
    match registry.lookup("alice-phone") {
        Err(DeviceError::UnknownIdentifier) => println!("alice-phone is no longer enrolled"),
        other => println!("unexpected outcome: {:?}", other),
    }

    Ok(())
}
