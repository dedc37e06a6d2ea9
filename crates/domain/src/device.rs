//! Device — a physical thing a user owns and the gateway authorizes commands
//! for.
//!
//! Devices are owned and persisted by the external ownership store; the
//! gateway only ever reads them.

use serde::{Deserialize, Serialize};

use crate::id::DeviceId;

/// A device as materialized from the ownership store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub id: DeviceId,
    /// Display name shown to the voice assistant.
    pub name: String,
    /// Display description shown to the voice assistant.
    pub description: String,
}

impl Device {
    /// Create a device value.
    #[must_use]
    pub fn new(id: DeviceId, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_device_from_parts() {
        let device = Device::new(DeviceId::new(3), "Desk Lamp", "The lamp on the desk");
        assert_eq!(device.id, DeviceId::new(3));
        assert_eq!(device.name, "Desk Lamp");
        assert_eq!(device.description, "The lamp on the desk");
    }
}
