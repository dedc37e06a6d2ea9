//! Device information provider returning a fixed shape.

use std::future::Future;

use homegate_app::ports::DeviceInformation;
use homegate_domain::error::GatewayError;
use homegate_domain::id::DeviceId;

/// Echoes the request back as a small JSON document.
///
/// Stands in for a real telemetry backend; the gateway treats the payload as
/// opaque either way.
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticDeviceInformation;

impl DeviceInformation for StaticDeviceInformation {
    fn info(
        &self,
        device_id: DeviceId,
        action: &str,
    ) -> impl Future<Output = Result<serde_json::Value, GatewayError>> + Send {
        let value = serde_json::json!({
            "deviceId": device_id,
            "action": action,
            "status": "ok",
        });
        async { Ok(value) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_echo_device_id_and_action() {
        let provider = StaticDeviceInformation;

        let value = provider.info(DeviceId::new(5), "status").await.unwrap();

        assert_eq!(value["deviceId"], 5);
        assert_eq!(value["action"], "status");
        assert_eq!(value["status"], "ok");
    }
}
