//! Shared application state.

use asistencia_store::SupabaseStore;

/// State handed to every route handler.
///
/// All persistent state lives in the external store, so this is just the
/// store client; requests never share in-process mutable state.
#[derive(Clone)]
pub struct AppState {
    store: SupabaseStore,
}

impl AppState {
    pub fn new(store: SupabaseStore) -> Self {
        AppState { store }
    }

    pub fn store(&self) -> &SupabaseStore {
        &self.store
    }
}
