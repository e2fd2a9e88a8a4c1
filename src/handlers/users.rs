//! User CRUD handlers: list, read, create, update, delete.

use crate::error::AppError;
use crate::extractors::JsonBody;
use crate::model::UserPayload;
use crate::response;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

/// Path ids are opaque; anything that is not an `i32` cannot match a row.
fn parse_id(id_str: &str) -> Result<i32, AppError> {
    id_str
        .parse()
        .map_err(|_| AppError::NotFound(format!("user {}", id_str)))
}

fn user_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("user {}", id))
}

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let users = state.store.list().await?;
    Ok((StatusCode::OK, Json(users)))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let user = state.store.get(id).await?.ok_or_else(|| user_not_found(id))?;
    Ok((StatusCode::OK, Json(user)))
}

pub async fn create(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<UserPayload>,
) -> Result<impl IntoResponse, AppError> {
    let user = state.store.create(&payload).await?;
    tracing::info!(id = user.id, "user created");
    Ok((StatusCode::OK, Json(user)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    JsonBody(payload): JsonBody<UserPayload>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let user = state
        .store
        .update(id, &payload)
        .await?
        .ok_or_else(|| user_not_found(id))?;
    Ok((StatusCode::OK, Json(user)))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    if !state.store.delete(id).await? {
        return Err(user_not_found(id));
    }
    tracing::info!(id, "user deleted");
    Ok(response::deleted())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_accepts_integers_only() {
        assert_eq!(parse_id("1").unwrap(), 1);
        assert_eq!(parse_id("-3").unwrap(), -3);
        for raw in ["", "abc", "1.5", "99999999999", "1;DROP TABLE users"] {
            assert!(matches!(parse_id(raw), Err(AppError::NotFound(_))), "{:?}", raw);
        }
    }
}
