//! MQTT implementation of [`CommandPublisher`].

use std::future::Future;
use std::time::Duration;

use rumqttc::{AsyncClient, MqttOptions, QoS};

use homegate_app::ports::CommandPublisher;
use homegate_domain::action::DeviceAction;
use homegate_domain::error::GatewayError;
use homegate_domain::id::{DeviceId, UserId};

use crate::config::MqttConfig;
use crate::error::MqttError;

/// Topic a command for `(user_id, device_id)` is published on.
fn command_topic(base_topic: &str, user_id: UserId, device_id: DeviceId) -> String {
    format!("{base_topic}/{user_id}/{device_id}")
}

/// Command publisher backed by a rumqttc [`AsyncClient`].
///
/// Publishing resolves once rumqttc has accepted the message; broker
/// acknowledgment and device delivery happen on the background event loop.
#[derive(Clone)]
pub struct MqttCommandPublisher {
    client: AsyncClient,
    base_topic: String,
}

impl MqttCommandPublisher {
    /// Connect to the broker and spawn the event-loop driver task.
    ///
    /// Connection errors are logged and retried by the driver; they do not
    /// fail construction.
    #[must_use]
    pub fn connect(config: &MqttConfig) -> Self {
        let mut options = MqttOptions::new(
            config.client_id.clone(),
            config.broker_host.clone(),
            config.broker_port,
        );
        options.set_keep_alive(Duration::from_secs(u64::from(config.keep_alive_secs)));

        let (client, mut event_loop) = AsyncClient::new(options, 16);

        tokio::spawn(async move {
            loop {
                if let Err(err) = event_loop.poll().await {
                    tracing::warn!(error = %err, "MQTT connection error, retrying");
                    tokio::time::sleep(Duration::from_secs(1)).await;
                }
            }
        });

        Self {
            client,
            base_topic: config.base_topic.clone(),
        }
    }

    /// Wrap an already-connected client; the caller owns the event loop.
    #[must_use]
    pub fn with_client(client: AsyncClient, base_topic: impl Into<String>) -> Self {
        Self {
            client,
            base_topic: base_topic.into(),
        }
    }
}

impl CommandPublisher for MqttCommandPublisher {
    fn publish(
        &self,
        user_id: UserId,
        action: DeviceAction,
        device_id: DeviceId,
    ) -> impl Future<Output = Result<(), GatewayError>> + Send {
        let client = self.client.clone();
        let topic = command_topic(&self.base_topic, user_id, device_id);
        async move {
            tracing::debug!(%topic, action = action.wire_name(), "publishing command");
            client
                .publish(topic, QoS::AtLeastOnce, false, action.wire_name())
                .await
                .map_err(MqttError::Client)?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_command_topic_from_ids() {
        let topic = command_topic("homegate/commands", UserId::new(3), DeviceId::new(14));
        assert_eq!(topic, "homegate/commands/3/14");
    }

    #[tokio::test]
    async fn should_queue_publish_without_a_broker() {
        // rumqttc buffers requests client-side; the hand-off succeeds even
        // though nothing is connected.
        let (client, _event_loop) = AsyncClient::new(MqttOptions::new("test", "localhost", 1883), 16);
        let publisher = MqttCommandPublisher::with_client(client, "homegate/commands");

        let result = publisher
            .publish(UserId::new(1), DeviceAction::TurnOn, DeviceId::new(2))
            .await;

        assert!(result.is_ok());
    }
}
