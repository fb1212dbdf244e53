//! Global Application State Store
//!
//! Session-wide data shared by the sidebar and pages: the signed-in user and
//! their organization.

use leptos::prelude::*;
use reactive_stores::Store;
use whitepaperiq_core::models::{Organization, User};
use whitepaperiq_core::storage;

use crate::browser::LocalStorage;

#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    pub user: Option<User>,
    pub organization: Option<Organization>,
    pub organization_loading: bool,
    pub organization_error: Option<String>,
}

impl AppState {
    /// State restored from localStorage
    pub fn restored() -> Self {
        Self {
            user: storage::current_user(&LocalStorage),
            ..Default::default()
        }
    }
}

pub type AppStore = Store<AppState>;

pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Show a new organization name before the server confirms it
pub fn store_rename_organization(store: &AppStore, name: &str) {
    store.organization().update(|org| {
        if let Some(org) = org {
            org.name = name.to_string();
        }
    });
}

pub fn store_reload_user(store: &AppStore) {
    store.user().set(storage::current_user(&LocalStorage));
}

pub fn store_reset(store: &AppStore) {
    store.user().set(None);
    store.organization().set(None);
    store.organization_loading().set(false);
    store.organization_error().set(None);
}
