//! In-process store with the same contract as the Postgres adapter. Used by
//! tests and for running the router without a database.

use crate::error::AppError;
use crate::model::{User, UserPayload};
use crate::store::UserStore;
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct MemoryUserStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    /// Last id handed out; ids are never reused, like a SERIAL sequence.
    last_id: i32,
    rows: BTreeMap<i32, User>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn list(&self) -> Result<Vec<User>, AppError> {
        let inner = self.inner.read().await;
        Ok(inner.rows.values().cloned().collect())
    }

    async fn get(&self, id: i32) -> Result<Option<User>, AppError> {
        let inner = self.inner.read().await;
        Ok(inner.rows.get(&id).cloned())
    }

    async fn create(&self, payload: &UserPayload) -> Result<User, AppError> {
        let mut inner = self.inner.write().await;
        let id = inner
            .last_id
            .checked_add(1)
            .ok_or_else(|| AppError::Internal("user id sequence exhausted".into()))?;
        inner.last_id = id;
        let user = User::from_payload(id, payload.clone());
        inner.rows.insert(id, user.clone());
        Ok(user)
    }

    async fn update(&self, id: i32, payload: &UserPayload) -> Result<Option<User>, AppError> {
        let mut inner = self.inner.write().await;
        Ok(inner.rows.get_mut(&id).map(|row| {
            row.name = payload.name.clone();
            row.email = payload.email.clone();
            row.clone()
        }))
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let mut inner = self.inner.write().await;
        Ok(inner.rows.remove(&id).is_some())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(name: &str, email: &str) -> UserPayload {
        UserPayload {
            name: name.into(),
            email: email.into(),
        }
    }

    #[tokio::test]
    async fn ids_are_fresh_after_delete() {
        let store = MemoryUserStore::new();
        let a = store.create(&payload("Ada", "ada@example.com")).await.unwrap();
        let b = store.create(&payload("Bob", "bob@example.com")).await.unwrap();
        assert_eq!((a.id, b.id), (1, 2));

        assert!(store.delete(b.id).await.unwrap());
        let c = store.create(&payload("Cy", "cy@example.com")).await.unwrap();
        assert_eq!(c.id, 3);
    }

    #[tokio::test]
    async fn update_keeps_id_and_misses_unknown_rows() {
        let store = MemoryUserStore::new();
        let a = store.create(&payload("Ada", "ada@example.com")).await.unwrap();

        let updated = store
            .update(a.id, &payload("Ada L.", "ada@example.com"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.id, a.id);
        assert_eq!(updated.name, "Ada L.");
        assert_eq!(store.get(a.id).await.unwrap(), Some(updated));

        assert_eq!(store.update(404, &payload("x", "y")).await.unwrap(), None);
    }

    #[tokio::test]
    async fn delete_is_idempotent_on_missing_rows() {
        let store = MemoryUserStore::new();
        let a = store.create(&payload("Ada", "ada@example.com")).await.unwrap();
        assert!(store.delete(a.id).await.unwrap());
        assert!(!store.delete(a.id).await.unwrap());
        assert_eq!(store.get(a.id).await.unwrap(), None);
        assert!(store.list().await.unwrap().is_empty());
    }
}
