//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use homegate_app::ports::{CommandPublisher, DeviceInformation, TokenAuthenticator, UserRepository};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Nests the device API under `/api` and includes a [`TraceLayer`] that logs
/// each HTTP request/response at the `DEBUG` level using the `tracing`
/// ecosystem.
pub fn build<UR, CP, DI, TA>(state: AppState<UR, CP, DI, TA>) -> Router
where
    UR: UserRepository + Send + Sync + 'static,
    CP: CommandPublisher + Send + Sync + 'static,
    DI: DeviceInformation + Send + Sync + 'static,
    TA: TokenAuthenticator + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
