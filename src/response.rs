//! Response helpers: the JSON content-type layer and the delete acknowledgement.

use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, StatusCode},
    Json,
};
use tower_http::set_header::SetResponseHeaderLayer;

/// Body returned by a successful delete.
pub const USER_DELETED: &str = "User deleted";

/// Forces `Content-Type: application/json` on every response, including
/// bodiless ones produced by the router itself.
pub fn json_content_type() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(CONTENT_TYPE, HeaderValue::from_static("application/json"))
}

pub fn deleted() -> (StatusCode, Json<&'static str>) {
    (StatusCode::OK, Json(USER_DELETED))
}
