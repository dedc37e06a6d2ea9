//! The ConnectedHome response envelope schema: a header plus an
//! operation-specific payload.
//!
//! The header's `messageId` is echoed verbatim from the inbound request's
//! `Message-Id` header — never generated, never validated. An absent header
//! serializes as JSON `null`.

use serde::Serialize;

use crate::action::DeviceAction;
use crate::device::Device;
use crate::id::DeviceId;

/// Protocol payload version, fixed by the ConnectedHome v2 schema.
pub const PAYLOAD_VERSION: &str = "2";

/// Namespace for discovery responses.
pub const DISCOVERY_NAMESPACE: &str = "Alexa.ConnectedHome.Discovery";

/// Namespace for control responses.
pub const CONTROL_NAMESPACE: &str = "Alexa.ConnectedHome.Control";

/// Response name for discovery.
pub const DISCOVER_RESPONSE_NAME: &str = "DiscoverAppliancesResponse";

/// A complete response: header plus payload.
#[derive(Debug, Clone, Serialize)]
pub struct Envelope<P> {
    pub header: Header,
    pub payload: P,
}

impl Envelope<DiscoveryPayload> {
    /// Build a discovery response for the given devices, in input order.
    #[must_use]
    pub fn discovery(message_id: Option<String>, devices: &[Device]) -> Self {
        Self {
            header: Header::new(message_id, DISCOVER_RESPONSE_NAME, DISCOVERY_NAMESPACE),
            payload: DiscoveryPayload {
                discovered_appliances: devices.iter().map(ApplianceDescriptor::new).collect(),
            },
        }
    }
}

impl Envelope<ControlPayload> {
    /// Build the empty-payload confirmation for a control action.
    #[must_use]
    pub fn confirmation(message_id: Option<String>, action: DeviceAction) -> Self {
        Self {
            header: Header::new(message_id, action.confirmation_name(), CONTROL_NAMESPACE),
            payload: EmptyObject {},
        }
    }
}

/// Response header common to every operation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    /// Echoed from the request's `Message-Id` header; `null` when absent.
    pub message_id: Option<String>,
    pub name: &'static str,
    pub namespace: &'static str,
    pub payload_version: &'static str,
}

impl Header {
    /// Assemble a header around an echoed message id.
    #[must_use]
    pub fn new(message_id: Option<String>, name: &'static str, namespace: &'static str) -> Self {
        Self {
            message_id,
            name,
            namespace,
            payload_version: PAYLOAD_VERSION,
        }
    }
}

/// Payload of a discovery response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveryPayload {
    pub discovered_appliances: Vec<ApplianceDescriptor>,
}

/// A JSON value that always serializes as `{}`.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct EmptyObject {}

/// Payload of a control confirmation — always the empty object.
pub type ControlPayload = EmptyObject;

/// Discovery-response representation of a single device.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplianceDescriptor {
    pub actions: [DeviceAction; 2],
    pub additional_appliance_details: EmptyObject,
    pub appliance_id: DeviceId,
    pub friendly_name: String,
    pub friendly_description: String,
    pub is_reachable: bool,
    pub manufacturer_name: &'static str,
    pub model_name: &'static str,
    pub version: &'static str,
}

impl ApplianceDescriptor {
    /// Describe a device; reachability and manufacturer metadata are fixed,
    /// the store does not track them.
    #[must_use]
    pub fn new(device: &Device) -> Self {
        Self {
            actions: DeviceAction::ALL,
            additional_appliance_details: EmptyObject {},
            appliance_id: device.id,
            friendly_name: device.name.clone(),
            friendly_description: device.description.clone(),
            is_reachable: true,
            manufacturer_name: "N/A",
            model_name: "N/A",
            version: "N/A",
        }
    }
}
