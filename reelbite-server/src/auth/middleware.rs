use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};

use crate::auth::sessions::Identity;
use crate::errors::AppError;
use crate::infra::app_state::AppState;

/// Resolve the bearer token and attach the principal as a request
/// extension. Fails closed: no token or an unknown token is terminal for
/// the call, before any handler state is touched.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = extract_bearer_token(&request)?;
    let identity = state
        .sessions
        .resolve(&token)
        .ok_or_else(|| AppError::unauthorized("session token not recognized"))?;

    request.extensions_mut().insert(identity);
    Ok(next.run(request).await)
}

fn extract_bearer_token(request: &Request) -> Result<String, AppError> {
    let header_value = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| AppError::unauthorized("missing authorization header"))?;

    header_value
        .strip_prefix("Bearer ")
        .map(|token| token.to_string())
        .ok_or_else(|| AppError::unauthorized("authorization header is not a bearer token"))
}

/// Handler-side guard for viewer-only endpoints.
pub fn require_viewer(identity: Identity) -> Result<reelbite_model::ViewerID, AppError> {
    identity
        .viewer_id()
        .ok_or_else(|| AppError::unauthorized("viewer session required"))
}

/// Handler-side guard for creator-only endpoints.
pub fn require_creator(identity: Identity) -> Result<reelbite_model::CreatorID, AppError> {
    identity
        .creator_id()
        .ok_or_else(|| AppError::unauthorized("creator session required"))
}
