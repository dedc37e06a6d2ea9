//! User — an actor that owns zero or more devices.
//!
//! A `User` carries its owned devices fully materialized, in the order the
//! ownership store returned them. The set is valid for the lifetime of one
//! request only; nothing here caches across requests.

use serde::{Deserialize, Serialize};

use crate::device::Device;
use crate::id::{DeviceId, UserId};

/// A user with its materialized owned-device set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    /// Devices owned by this user, in store order.
    pub devices: Vec<Device>,
}

impl User {
    /// Create a user with its owned devices.
    #[must_use]
    pub fn new(id: UserId, name: impl Into<String>, devices: Vec<Device>) -> Self {
        Self {
            id,
            name: name.into(),
            devices,
        }
    }

    /// Whether `device_id` is a member of this user's owned-device set.
    ///
    /// Pure membership check over the already-materialized collection; no IO.
    #[must_use]
    pub fn owns_device(&self, device_id: DeviceId) -> bool {
        self.devices.iter().any(|device| device.id == device_id)
    }
}
