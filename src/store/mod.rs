//! Storage seam for users. Handlers only see [`UserStore`]; the Postgres
//! adapter and the in-memory store are interchangeable behind it.

pub mod memory;
pub mod postgres;

use crate::error::AppError;
use crate::model::{User, UserPayload};
use async_trait::async_trait;

pub use memory::MemoryUserStore;
pub use postgres::{connect, ensure_users_table, PgUserStore};

#[async_trait]
pub trait UserStore: Send + Sync {
    /// All users, in whatever order the backend yields them.
    async fn list(&self) -> Result<Vec<User>, AppError>;

    async fn get(&self, id: i32) -> Result<Option<User>, AppError>;

    /// Insert a user; the store assigns the id.
    async fn create(&self, payload: &UserPayload) -> Result<User, AppError>;

    /// Overwrite name and email. `None` when no row has this id.
    async fn update(&self, id: i32, payload: &UserPayload) -> Result<Option<User>, AppError>;

    /// Remove the row. `false` when no row had this id.
    async fn delete(&self, id: i32) -> Result<bool, AppError>;

    /// Cheap liveness probe of the backend.
    async fn ping(&self) -> Result<(), AppError>;
}
