//! ConnectedHome device handlers: discover, control, and info.

use axum::Json;
use axum::extract::{Query, State};
use axum::http::HeaderMap;

use homegate_app::ports::{CommandPublisher, DeviceInformation, TokenAuthenticator, UserRepository};
use homegate_domain::action::DeviceAction;
use homegate_domain::envelope::{ControlPayload, DiscoveryPayload, Envelope};
use homegate_domain::error::GatewayError;
use homegate_domain::id::{DeviceId, UserId};
use homegate_domain::user::User;
use serde::Deserialize;

use crate::error::ApiError;
use crate::extract;
use crate::state::AppState;

/// Request body for the control endpoints.
#[derive(Deserialize)]
pub struct ControlRequest {
    /// Target device id.
    pub id: DeviceId,
}

/// Parameters for the self-authorizing info endpoint, via query string (GET)
/// or JSON body (POST).
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfoParams {
    pub user_id: UserId,
    pub device_id: DeviceId,
    pub action: String,
}

/// Resolve the bearer token into an actor, or fail with 401 before any
/// gateway logic runs.
async fn authenticate<UR, CP, DI, TA>(
    state: &AppState<UR, CP, DI, TA>,
    headers: &HeaderMap,
) -> Result<User, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    CP: CommandPublisher + Send + Sync + 'static,
    DI: DeviceInformation + Send + Sync + 'static,
    TA: TokenAuthenticator + Send + Sync + 'static,
{
    let Some(token) = extract::bearer_token(headers) else {
        return Err(GatewayError::Unauthorized.into());
    };
    let actor = state.authenticator.resolve(token).await?;
    actor.ok_or_else(|| GatewayError::Unauthorized.into())
}

/// `GET /api/devices`
pub async fn discover<UR, CP, DI, TA>(
    State(state): State<AppState<UR, CP, DI, TA>>,
    headers: HeaderMap,
) -> Result<Json<Envelope<DiscoveryPayload>>, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    CP: CommandPublisher + Send + Sync + 'static,
    DI: DeviceInformation + Send + Sync + 'static,
    TA: TokenAuthenticator + Send + Sync + 'static,
{
    let actor = authenticate(&state, &headers).await?;
    let envelope = state
        .gateway
        .discover(&actor, extract::message_id(&headers));
    Ok(Json(envelope))
}

/// `POST /api/devices/turnon`
pub async fn turn_on<UR, CP, DI, TA>(
    State(state): State<AppState<UR, CP, DI, TA>>,
    headers: HeaderMap,
    Json(req): Json<ControlRequest>,
) -> Result<Json<Envelope<ControlPayload>>, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    CP: CommandPublisher + Send + Sync + 'static,
    DI: DeviceInformation + Send + Sync + 'static,
    TA: TokenAuthenticator + Send + Sync + 'static,
{
    control(&state, &headers, req.id, DeviceAction::TurnOn).await
}

/// `POST /api/devices/turnoff`
pub async fn turn_off<UR, CP, DI, TA>(
    State(state): State<AppState<UR, CP, DI, TA>>,
    headers: HeaderMap,
    Json(req): Json<ControlRequest>,
) -> Result<Json<Envelope<ControlPayload>>, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    CP: CommandPublisher + Send + Sync + 'static,
    DI: DeviceInformation + Send + Sync + 'static,
    TA: TokenAuthenticator + Send + Sync + 'static,
{
    control(&state, &headers, req.id, DeviceAction::TurnOff).await
}

async fn control<UR, CP, DI, TA>(
    state: &AppState<UR, CP, DI, TA>,
    headers: &HeaderMap,
    device_id: DeviceId,
    action: DeviceAction,
) -> Result<Json<Envelope<ControlPayload>>, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    CP: CommandPublisher + Send + Sync + 'static,
    DI: DeviceInformation + Send + Sync + 'static,
    TA: TokenAuthenticator + Send + Sync + 'static,
{
    let actor = authenticate(state, headers).await?;
    let envelope = state
        .gateway
        .control(
            Some(&actor),
            device_id,
            action,
            extract::message_id(headers),
        )
        .await?;
    Ok(Json(envelope))
}

/// `GET /api/devices/info`
///
/// Deliberately exempt from bearer authentication: authorization is performed
/// against the caller-supplied `userId`. See DESIGN.md for the risk note.
pub async fn info_query<UR, CP, DI, TA>(
    State(state): State<AppState<UR, CP, DI, TA>>,
    Query(params): Query<InfoParams>,
) -> Result<Json<serde_json::Value>, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    CP: CommandPublisher + Send + Sync + 'static,
    DI: DeviceInformation + Send + Sync + 'static,
    TA: TokenAuthenticator + Send + Sync + 'static,
{
    info(&state, params).await
}

/// `POST /api/devices/info`
pub async fn info_body<UR, CP, DI, TA>(
    State(state): State<AppState<UR, CP, DI, TA>>,
    Json(params): Json<InfoParams>,
) -> Result<Json<serde_json::Value>, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    CP: CommandPublisher + Send + Sync + 'static,
    DI: DeviceInformation + Send + Sync + 'static,
    TA: TokenAuthenticator + Send + Sync + 'static,
{
    info(&state, params).await
}

async fn info<UR, CP, DI, TA>(
    state: &AppState<UR, CP, DI, TA>,
    params: InfoParams,
) -> Result<Json<serde_json::Value>, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    CP: CommandPublisher + Send + Sync + 'static,
    DI: DeviceInformation + Send + Sync + 'static,
    TA: TokenAuthenticator + Send + Sync + 'static,
{
    let value = state
        .gateway
        .info(params.user_id, params.device_id, &params.action)
        .await?;
    Ok(Json(value))
}
