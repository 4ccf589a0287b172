//! Shared application state for all routes: the account store handle, opened at startup.

use crate::store::AccountStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn AccountStore>,
}

impl AppState {
    pub fn new<S: AccountStore + 'static>(store: S) -> Self {
        AppState {
            store: Arc::new(store),
        }
    }
}
