//! Gateway service — the discover, control, and info use-cases.
//!
//! Every operation is check-then-act over data the caller (or the ownership
//! store) already materialized: authorize, optionally call one outbound port,
//! wrap the result in a response envelope. There is no retry, deduplication,
//! or compensating action on downstream failure.

use homegate_domain::action::DeviceAction;
use homegate_domain::envelope::{ControlPayload, DiscoveryPayload, Envelope};
use homegate_domain::error::GatewayError;
use homegate_domain::id::{DeviceId, UserId};
use homegate_domain::user::User;

use crate::ports::{CommandPublisher, DeviceInformation, UserRepository};

/// Application service translating protocol requests into ownership checks
/// and outbound port calls.
pub struct GatewayService<UR, CP, DI> {
    user_repo: UR,
    publisher: CP,
    device_information: DI,
}

impl<UR, CP, DI> GatewayService<UR, CP, DI>
where
    UR: UserRepository,
    CP: CommandPublisher,
    DI: DeviceInformation,
{
    /// Create a new service backed by the given ports.
    pub fn new(user_repo: UR, publisher: CP, device_information: DI) -> Self {
        Self {
            user_repo,
            publisher,
            device_information,
        }
    }

    /// Describe every device the actor owns, in store order.
    ///
    /// Authentication happens upstream; an unauthenticated caller never
    /// reaches this method, so there is no failure path.
    #[must_use]
    pub fn discover(&self, actor: &User, message_id: Option<String>) -> Envelope<DiscoveryPayload> {
        Envelope::discovery(message_id, &actor.devices)
    }

    /// Authorize and publish a control command, then confirm.
    ///
    /// Exactly one publish call per successful request; zero on authorization
    /// failure. The publish is awaited only for hand-off errors — delivery is
    /// the publisher's concern.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Unauthorized`] when the actor is absent or does
    /// not own `device_id`, or a [`GatewayError::Publish`] propagated from the
    /// publisher.
    #[tracing::instrument(skip(self, actor, message_id), fields(action = %action))]
    pub async fn control(
        &self,
        actor: Option<&User>,
        device_id: DeviceId,
        action: DeviceAction,
        message_id: Option<String>,
    ) -> Result<Envelope<ControlPayload>, GatewayError> {
        let Some(actor) = actor.filter(|user| user.owns_device(device_id)) else {
            tracing::debug!("control request rejected");
            return Err(GatewayError::Unauthorized);
        };

        self.publisher.publish(actor.id, action, device_id).await?;

        Ok(Envelope::confirmation(message_id, action))
    }

    /// Resolve the claimed user, authorize, and pass the provider's response
    /// through verbatim.
    ///
    /// Unlike discover and control, the actor here is looked up from a
    /// caller-supplied user id rather than taken from the session.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Unauthorized`] when the user is absent or does
    /// not own `device_id`, or an error propagated from the ownership store or
    /// the information provider.
    #[tracing::instrument(skip(self, action))]
    pub async fn info(
        &self,
        user_id: UserId,
        device_id: DeviceId,
        action: &str,
    ) -> Result<serde_json::Value, GatewayError> {
        let user = self.user_repo.get_user(user_id).await?;

        if !user.is_some_and(|user| user.owns_device(device_id)) {
            tracing::debug!("info request rejected");
            return Err(GatewayError::Unauthorized);
        }

        self.device_information.info(device_id, action).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use homegate_domain::device::Device;
    use std::collections::HashMap;
    use std::future::Future;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    struct InMemoryUsers {
        users: HashMap<UserId, User>,
    }

    impl InMemoryUsers {
        fn with(users: Vec<User>) -> Self {
            Self {
                users: users.into_iter().map(|user| (user.id, user)).collect(),
            }
        }
    }

    impl UserRepository for InMemoryUsers {
        fn get_user(
            &self,
            id: UserId,
        ) -> impl Future<Output = Result<Option<User>, GatewayError>> + Send {
            let result = self.users.get(&id).cloned();
            async { Ok(result) }
        }
    }

    #[derive(Default, Clone)]
    struct RecordingPublisher {
        published: Arc<Mutex<Vec<(UserId, DeviceAction, DeviceId)>>>,
    }

    impl RecordingPublisher {
        fn published(&self) -> Vec<(UserId, DeviceAction, DeviceId)> {
            self.published.lock().unwrap().clone()
        }
    }

    impl CommandPublisher for RecordingPublisher {
        fn publish(
            &self,
            user_id: UserId,
            action: DeviceAction,
            device_id: DeviceId,
        ) -> impl Future<Output = Result<(), GatewayError>> + Send {
            self.published.lock().unwrap().push((user_id, action, device_id));
            async { Ok(()) }
        }
    }

    struct FailingPublisher;

    impl CommandPublisher for FailingPublisher {
        fn publish(
            &self,
            _user_id: UserId,
            _action: DeviceAction,
            _device_id: DeviceId,
        ) -> impl Future<Output = Result<(), GatewayError>> + Send {
            async { Err(GatewayError::publish(std::io::Error::other("broker down"))) }
        }
    }

    #[derive(Default, Clone)]
    struct CountingInfo {
        calls: Arc<AtomicUsize>,
    }

    impl DeviceInformation for CountingInfo {
        fn info(
            &self,
            device_id: DeviceId,
            action: &str,
        ) -> impl Future<Output = Result<serde_json::Value, GatewayError>> + Send {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let value = serde_json::json!({
                "deviceId": device_id,
                "action": action,
            });
            async { Ok(value) }
        }
    }

    fn device(id: i64, name: &str) -> Device {
        Device::new(DeviceId::new(id), name, format!("{name} description"))
    }

    fn owner() -> User {
        User::new(
            UserId::new(1),
            "alice",
            vec![device(10, "Lamp"), device(11, "Fan"), device(12, "Heater")],
        )
    }

    fn service(
        users: Vec<User>,
    ) -> (
        GatewayService<InMemoryUsers, RecordingPublisher, CountingInfo>,
        RecordingPublisher,
        CountingInfo,
    ) {
        let publisher = RecordingPublisher::default();
        let info = CountingInfo::default();
        let svc = GatewayService::new(
            InMemoryUsers::with(users),
            publisher.clone(),
            info.clone(),
        );
        (svc, publisher, info)
    }

    #[test]
    fn should_discover_nothing_when_user_owns_no_devices() {
        let (svc, _, _) = service(vec![]);
        let actor = User::new(UserId::new(1), "alice", vec![]);

        let envelope = svc.discover(&actor, Some("msg-1".to_string()));

        assert!(envelope.payload.discovered_appliances.is_empty());
        assert_eq!(envelope.header.message_id.as_deref(), Some("msg-1"));
    }

    #[test]
    fn should_discover_all_devices_in_store_order() {
        let (svc, _, _) = service(vec![]);
        let actor = owner();

        let envelope = svc.discover(&actor, None);

        let names: Vec<&str> = envelope
            .payload
            .discovered_appliances
            .iter()
            .map(|appliance| appliance.friendly_name.as_str())
            .collect();
        assert_eq!(names, ["Lamp", "Fan", "Heater"]);
        for appliance in &envelope.payload.discovered_appliances {
            assert_eq!(appliance.actions, DeviceAction::ALL);
            assert!(appliance.is_reachable);
        }
    }

    #[tokio::test]
    async fn should_publish_once_and_confirm_when_actor_owns_device() {
        let (svc, publisher, _) = service(vec![]);
        let actor = owner();

        let envelope = svc
            .control(
                Some(&actor),
                DeviceId::new(10),
                DeviceAction::TurnOn,
                Some("msg-2".to_string()),
            )
            .await
            .unwrap();

        assert_eq!(envelope.header.name, "TurnOnConfirmation");
        assert_eq!(envelope.header.message_id.as_deref(), Some("msg-2"));
        assert_eq!(
            publisher.published(),
            vec![(UserId::new(1), DeviceAction::TurnOn, DeviceId::new(10))]
        );
    }

    #[tokio::test]
    async fn should_reject_control_without_publishing_when_actor_does_not_own_device() {
        let (svc, publisher, _) = service(vec![]);
        let actor = owner();

        let result = svc
            .control(Some(&actor), DeviceId::new(99), DeviceAction::TurnOff, None)
            .await;

        assert!(matches!(result, Err(GatewayError::Unauthorized)));
        assert!(publisher.published().is_empty());
    }

    #[tokio::test]
    async fn should_reject_control_when_actor_is_absent() {
        let (svc, publisher, _) = service(vec![]);

        let result = svc
            .control(None, DeviceId::new(10), DeviceAction::TurnOn, None)
            .await;

        assert!(matches!(result, Err(GatewayError::Unauthorized)));
        assert!(publisher.published().is_empty());
    }

    #[tokio::test]
    async fn should_publish_twice_when_same_control_request_repeats() {
        let (svc, publisher, _) = service(vec![]);
        let actor = owner();

        for _ in 0..2 {
            svc.control(Some(&actor), DeviceId::new(11), DeviceAction::TurnOff, None)
                .await
                .unwrap();
        }

        let published = publisher.published();
        assert_eq!(published.len(), 2);
        assert_eq!(published[0], published[1]);
    }

    #[tokio::test]
    async fn should_propagate_publisher_failure() {
        let svc = GatewayService::new(
            InMemoryUsers::with(vec![]),
            FailingPublisher,
            CountingInfo::default(),
        );
        let actor = owner();

        let result = svc
            .control(Some(&actor), DeviceId::new(10), DeviceAction::TurnOn, None)
            .await;

        assert!(matches!(result, Err(GatewayError::Publish(_))));
    }

    #[tokio::test]
    async fn should_pass_provider_response_through_when_user_owns_device() {
        let (svc, _, info) = service(vec![owner()]);

        let value = svc
            .info(UserId::new(1), DeviceId::new(10), "status")
            .await
            .unwrap();

        assert_eq!(value["deviceId"], 10);
        assert_eq!(value["action"], "status");
        assert_eq!(info.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn should_reject_info_when_user_does_not_own_device() {
        let (svc, _, info) = service(vec![owner()]);

        let result = svc.info(UserId::new(1), DeviceId::new(99), "status").await;

        assert!(matches!(result, Err(GatewayError::Unauthorized)));
        assert_eq!(info.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn should_reject_info_when_user_is_unknown() {
        let (svc, _, info) = service(vec![owner()]);

        let result = svc.info(UserId::new(42), DeviceId::new(10), "status").await;

        assert!(matches!(result, Err(GatewayError::Unauthorized)));
        assert_eq!(info.calls.load(Ordering::SeqCst), 0);
    }
}
