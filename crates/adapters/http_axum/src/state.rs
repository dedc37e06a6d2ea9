//! Shared application state for axum handlers.

use std::sync::Arc;

use homegate_app::ports::{CommandPublisher, DeviceInformation, TokenAuthenticator, UserRepository};
use homegate_app::services::gateway_service::GatewayService;

/// Application state shared across all axum handlers.
///
/// Generic over the port implementations to avoid dynamic dispatch. `Clone`
/// is implemented manually so the underlying types themselves do not need to
/// be `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<UR, CP, DI, TA> {
    /// Gateway use-case service.
    pub gateway: Arc<GatewayService<UR, CP, DI>>,
    /// Bearer token resolver used before gateway logic runs.
    pub authenticator: Arc<TA>,
}

impl<UR, CP, DI, TA> Clone for AppState<UR, CP, DI, TA> {
    fn clone(&self) -> Self {
        Self {
            gateway: Arc::clone(&self.gateway),
            authenticator: Arc::clone(&self.authenticator),
        }
    }
}

impl<UR, CP, DI, TA> AppState<UR, CP, DI, TA>
where
    UR: UserRepository + Send + Sync + 'static,
    CP: CommandPublisher + Send + Sync + 'static,
    DI: DeviceInformation + Send + Sync + 'static,
    TA: TokenAuthenticator + Send + Sync + 'static,
{
    /// Create a new application state from a gateway service and authenticator.
    pub fn new(gateway: GatewayService<UR, CP, DI>, authenticator: TA) -> Self {
        Self {
            gateway: Arc::new(gateway),
            authenticator: Arc::new(authenticator),
        }
    }

    /// Create a new application state from pre-wrapped `Arc` values.
    ///
    /// Use this when the service needs to be shared with background tasks
    /// before constructing the HTTP state.
    pub fn from_arcs(gateway: Arc<GatewayService<UR, CP, DI>>, authenticator: Arc<TA>) -> Self {
        Self {
            gateway,
            authenticator,
        }
    }
}
