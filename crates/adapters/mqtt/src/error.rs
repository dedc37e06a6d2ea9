//! MQTT adapter error types.

use homegate_domain::error::GatewayError;

/// Errors specific to the MQTT adapter.
#[derive(Debug, thiserror::Error)]
pub enum MqttError {
    /// The rumqttc client rejected the publish.
    #[error("MQTT client error")]
    Client(#[source] rumqttc::ClientError),
}

impl From<MqttError> for GatewayError {
    fn from(err: MqttError) -> Self {
        Self::Publish(Box::new(err))
    }
}
