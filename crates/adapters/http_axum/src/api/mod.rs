//! JSON API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod devices;

use axum::Router;
use axum::routing::{get, post};

use homegate_app::ports::{CommandPublisher, DeviceInformation, TokenAuthenticator, UserRepository};

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<UR, CP, DI, TA>() -> Router<AppState<UR, CP, DI, TA>>
where
    UR: UserRepository + Send + Sync + 'static,
    CP: CommandPublisher + Send + Sync + 'static,
    DI: DeviceInformation + Send + Sync + 'static,
    TA: TokenAuthenticator + Send + Sync + 'static,
{
    Router::new()
        .route("/devices", get(devices::discover::<UR, CP, DI, TA>))
        .route("/devices/turnon", post(devices::turn_on::<UR, CP, DI, TA>))
        .route("/devices/turnoff", post(devices::turn_off::<UR, CP, DI, TA>))
        .route(
            "/devices/info",
            get(devices::info_query::<UR, CP, DI, TA>)
                .post(devices::info_body::<UR, CP, DI, TA>),
        )
}
