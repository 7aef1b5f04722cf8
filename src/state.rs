use crate::store::KvStore;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn KvStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }
}
