//! Shared application state for all routes.

use crate::store::UserStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn UserStore>,
}

impl AppState {
    pub fn new<S>(store: S) -> Self
    where
        S: UserStore + 'static,
    {
        AppState {
            store: Arc::new(store),
        }
    }
}
