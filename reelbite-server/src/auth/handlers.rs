use axum::{Extension, Json, extract::State, http::StatusCode};
use tracing::info;

use reelbite_model::Creator;
use reelbite_model::api::{
    ApiResponse, LoginRequest, RegisterCreatorRequest, RegisterViewerRequest,
    SessionResponse,
};

use crate::auth::sessions::{AuthError, Identity};
use crate::errors::{AppError, AppResult};
use crate::infra::app_state::AppState;

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::DuplicateEmail => AppError::bad_request(err.to_string()),
            AuthError::InvalidCredentials => AppError::bad_request(err.to_string()),
        }
    }
}

pub async fn register_viewer(
    State(state): State<AppState>,
    Json(request): Json<RegisterViewerRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<SessionResponse>>)> {
    if request.full_name.is_empty() || request.email.is_empty() || request.password.is_empty() {
        return Err(AppError::bad_request("all fields are required"));
    }

    let viewer =
        state
            .accounts
            .register_viewer(&request.full_name, &request.email, &request.password)?;
    let token = state.sessions.issue(Identity::Viewer(viewer.id));
    info!(viewer = %viewer.id, "viewer registered");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(SessionResponse {
            token,
            id: viewer.id.to_string(),
            name: viewer.full_name,
            email: viewer.email,
        })),
    ))
}

pub async fn login_viewer(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> AppResult<Json<ApiResponse<SessionResponse>>> {
    let viewer = state
        .accounts
        .login_viewer(&request.email, &request.password)?;
    let token = state.sessions.issue(Identity::Viewer(viewer.id));

    Ok(Json(ApiResponse::success(SessionResponse {
        token,
        id: viewer.id.to_string(),
        name: viewer.full_name,
        email: viewer.email,
    })))
}

pub async fn register_creator(
    State(state): State<AppState>,
    Json(request): Json<RegisterCreatorRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<SessionResponse>>)> {
    if request.name.is_empty() || request.email.is_empty() || request.password.is_empty() {
        return Err(AppError::bad_request("all fields are required"));
    }

    let creator = Creator::new(&request.name, &request.email, request.address.clone());
    let creator_id = creator.id;
    state
        .accounts
        .register_creator(creator_id, &request.email, &request.password)?;
    state.ledger.insert_creator(creator);
    let token = state.sessions.issue(Identity::Creator(creator_id));
    info!(creator = %creator_id, "creator registered");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(SessionResponse {
            token,
            id: creator_id.to_string(),
            name: request.name,
            email: request.email,
        })),
    ))
}

pub async fn login_creator(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> AppResult<Json<ApiResponse<SessionResponse>>> {
    let creator_id = state
        .accounts
        .login_creator(&request.email, &request.password)?;
    let creator = state.ledger.creator(creator_id)?;
    let token = state.sessions.issue(Identity::Creator(creator_id));

    Ok(Json(ApiResponse::success(SessionResponse {
        token,
        id: creator_id.to_string(),
        name: creator.name,
        email: creator.email,
    })))
}

pub async fn logout(
    State(state): State<AppState>,
    Extension(_identity): Extension<Identity>,
    headers: axum::http::HeaderMap,
) -> AppResult<StatusCode> {
    if let Some(token) = headers
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
    {
        state.sessions.revoke(token);
    }
    Ok(StatusCode::NO_CONTENT)
}
