//! Router assembly.

pub mod common;
pub mod users;

pub use common::common_routes;
pub use users::user_routes;

use crate::error::AppError;
use crate::response::json_content_type;
use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, http::Uri, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Largest accepted request body.
pub const MAX_BODY_BYTES: usize = 64 * 1024;

async fn fallback(uri: Uri) -> AppError {
    AppError::NotFound(format!("no route for {}", uri.path()))
}

/// Full application: user CRUD, health/readiness/version, JSON 404 fallback.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(user_routes(state))
        .fallback(fallback)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(json_content_type())
                .layer(DefaultBodyLimit::max(MAX_BODY_BYTES)),
        )
}
