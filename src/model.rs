//! User entity: row shape, wire shape, and request body.

use serde::{Deserialize, Serialize};

/// A stored user. Serialized as `{"id": .., "name": .., "email": ..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
}

/// Body of create and update requests. A client-supplied `id` is ignored;
/// missing fields decode as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UserPayload {
    pub name: String,
    pub email: String,
}

impl User {
    pub fn from_payload(id: i32, payload: UserPayload) -> Self {
        User {
            id,
            name: payload.name,
            email: payload.email,
        }
    }
}
