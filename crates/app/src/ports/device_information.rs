//! Device information port — opaque telemetry lookup.

use std::future::Future;

use homegate_domain::error::GatewayError;
use homegate_domain::id::DeviceId;

/// Fetches device telemetry for the info operation.
///
/// The response shape is owned by the provider and passed through verbatim,
/// so it is exposed as raw JSON. The action parameter is likewise part of the
/// provider's vocabulary and is not validated here.
pub trait DeviceInformation {
    fn info(
        &self,
        device_id: DeviceId,
        action: &str,
    ) -> impl Future<Output = Result<serde_json::Value, GatewayError>> + Send;
}
