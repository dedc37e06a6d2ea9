//! The closed action vocabulary shared between the gateway and the command
//! publisher.
//!
//! Each action has three spellings: the protocol name used in discovery
//! payloads (`TURN_ON`), the lower-cased wire name used when publishing
//! (`turn_on`), and the confirmation name used in control response headers
//! (`TurnOnConfirmation`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A device control action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeviceAction {
    TurnOn,
    TurnOff,
}

impl DeviceAction {
    /// Every action a discovered appliance supports.
    pub const ALL: [Self; 2] = [Self::TurnOn, Self::TurnOff];

    /// Protocol spelling, as emitted in discovery payloads.
    #[must_use]
    pub fn protocol_name(self) -> &'static str {
        match self {
            Self::TurnOn => "TURN_ON",
            Self::TurnOff => "TURN_OFF",
        }
    }

    /// Lower-cased spelling used on the publish wire.
    #[must_use]
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::TurnOn => "turn_on",
            Self::TurnOff => "turn_off",
        }
    }

    /// Name of the control confirmation response for this action.
    #[must_use]
    pub fn confirmation_name(self) -> &'static str {
        match self {
            Self::TurnOn => "TurnOnConfirmation",
            Self::TurnOff => "TurnOffConfirmation",
        }
    }
}

impl fmt::Display for DeviceAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.protocol_name())
    }
}

/// Returned when a token does not name a known action.
#[derive(Debug, thiserror::Error)]
#[error("unknown device action: {0}")]
pub struct UnknownActionError(String);

impl FromStr for DeviceAction {
    type Err = UnknownActionError;

    /// Accepts both the protocol and the wire spelling.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "TURN_ON" | "turn_on" => Ok(Self::TurnOn),
            "TURN_OFF" | "turn_off" => Ok(Self::TurnOff),
            other => Err(UnknownActionError(other.to_string())),
        }
    }
}
