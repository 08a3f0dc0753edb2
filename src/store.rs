//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Created once in
//! `App` and handed out through context.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Candidate;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Candidate parsed from the last uploaded résumé
    pub candidate: Option<Candidate>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_set_candidate(store: &AppStore, candidate: Candidate) {
    log::info!("[STORE] Active candidate {}", candidate.candidate_id);
    *store.candidate().write() = Some(candidate);
}

pub fn store_clear_candidate(store: &AppStore) {
    *store.candidate().write() = None;
}

/// Id of the active candidate (tracked)
pub fn store_candidate_id(store: &AppStore) -> Option<String> {
    store.candidate().with(|c| c.as_ref().map(|c| c.candidate_id.clone()))
}
