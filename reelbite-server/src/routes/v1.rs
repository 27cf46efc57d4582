use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::{
    auth::{self, handlers as auth_handlers},
    catalog::handlers as catalog_handlers,
    comments::handlers as comment_handlers,
    engagement::handlers as engagement_handlers,
    infra::app_state::AppState,
};

/// Create all v1 API routes
pub fn create_v1_router(state: AppState) -> Router<AppState> {
    Router::new()
        // Public authentication endpoints
        .route("/auth/viewer/register", post(auth_handlers::register_viewer))
        .route("/auth/viewer/login", post(auth_handlers::login_viewer))
        .route(
            "/auth/creator/register",
            post(auth_handlers::register_creator),
        )
        .route("/auth/creator/login", post(auth_handlers::login_creator))
        // Public media passthrough (URIs minted by the storage collaborator)
        .route("/media/{key}", get(catalog_handlers::media_handler))
        // Merge protected routes
        .merge(create_protected_routes(state))
}

/// Create protected routes that require a resolved session identity
fn create_protected_routes(state: AppState) -> Router<AppState> {
    Router::new()
        // Auth endpoints
        .route("/auth/logout", post(auth_handlers::logout))
        // Feed and upload
        .route("/feed", get(catalog_handlers::feed_handler))
        .route("/videos", post(catalog_handlers::create_video_handler))
        .route("/videos/mine", get(catalog_handlers::my_videos_handler))
        // Engagement toggles
        .route(
            "/videos/{id}/like",
            post(engagement_handlers::toggle_like_handler),
        )
        .route(
            "/creators/{id}/follow",
            post(engagement_handlers::toggle_follow_handler),
        )
        // Creator profiles
        .route(
            "/creators/{id}",
            get(catalog_handlers::creator_profile_handler),
        )
        // Comments
        .route(
            "/videos/{id}/comments",
            post(comment_handlers::create_comment_handler),
        )
        .route("/comments", get(comment_handlers::list_comments_handler))
        .layer(middleware::from_fn_with_state(
            state,
            auth::auth_middleware,
        ))
}
