//! users-api: CRUD REST service for a single `users` table in PostgreSQL.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod state;
pub mod store;

pub use config::Config;
pub use error::{AppError, ConfigError};
pub use model::{User, UserPayload};
pub use routes::{app_router, common_routes, user_routes};
pub use state::AppState;
pub use store::{connect, ensure_users_table, MemoryUserStore, PgUserStore, UserStore};
