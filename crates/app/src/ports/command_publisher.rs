//! Command publisher port — asynchronous hand-off of device commands.

use std::future::Future;

use homegate_domain::action::DeviceAction;
use homegate_domain::error::GatewayError;
use homegate_domain::id::{DeviceId, UserId};

/// Hands a command to the transport that delivers it to the device.
///
/// Fire-and-forget from the gateway's perspective: the future resolves once
/// the command has been accepted by the transport, not once it reaches the
/// device. Delivery guarantees (at-least-once) belong to the implementation.
pub trait CommandPublisher {
    fn publish(
        &self,
        user_id: UserId,
        action: DeviceAction,
        device_id: DeviceId,
    ) -> impl Future<Output = Result<(), GatewayError>> + Send;
}
