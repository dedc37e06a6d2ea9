//! Command publisher that records instead of delivering.

use std::future::Future;
use std::sync::{Arc, Mutex};

use homegate_app::ports::CommandPublisher;
use homegate_domain::action::DeviceAction;
use homegate_domain::error::GatewayError;
use homegate_domain::id::{DeviceId, UserId};

/// A single recorded publish call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublishedCommand {
    pub user_id: UserId,
    pub action: DeviceAction,
    pub device_id: DeviceId,
}

/// Records every publish; cloning shares the underlying log so tests can
/// assert on calls made through the gateway.
#[derive(Default, Clone)]
pub struct RecordingPublisher {
    published: Arc<Mutex<Vec<PublishedCommand>>>,
}

impl RecordingPublisher {
    /// Snapshot of everything published so far, in call order.
    #[must_use]
    pub fn published(&self) -> Vec<PublishedCommand> {
        self.published.lock().expect("publisher log poisoned").clone()
    }
}

impl CommandPublisher for RecordingPublisher {
    fn publish(
        &self,
        user_id: UserId,
        action: DeviceAction,
        device_id: DeviceId,
    ) -> impl Future<Output = Result<(), GatewayError>> + Send {
        self.published
            .lock()
            .expect("publisher log poisoned")
            .push(PublishedCommand {
                user_id,
                action,
                device_id,
            });
        async { Ok(()) }
    }
}
