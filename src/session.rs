//! Session Driver
//!
//! Feeds browser events into the core [`SessionMachine`] and carries out
//! the effects it returns. The refresh [`Interval`] is owned here; dropping
//! it cancels the timer.

use std::cell::RefCell;

use gloo_timers::callback::Interval;
use leptos::prelude::*;
use leptos::task::spawn_local;
use whitepaperiq_core::{storage, SessionEffect, SessionEvent, SessionMachine};

use crate::api;
use crate::browser::{self, LocalStorage};
use crate::store::{store_reload_user, store_reset, AppStateStoreFields, AppStore};

#[derive(Default)]
struct Driver {
    machine: SessionMachine,
    refresh_timer: Option<Interval>,
}

thread_local! {
    static DRIVER: RefCell<Driver> = RefCell::new(Driver::default());
}

/// Install listeners and restore the persisted session
pub fn start(store: AppStore) {
    browser::on_storage_change(move |change| dispatch(store, SessionEvent::StorageChanged(change)));
    browser::on_logged_in(move || dispatch(store, SessionEvent::LoggedIn));

    let has_token = storage::is_authenticated(&LocalStorage);
    dispatch(store, SessionEvent::Restored { has_token });
}

pub fn dispatch(store: AppStore, event: SessionEvent) {
    tracing::debug!(?event, "session event");
    let effects = DRIVER.with(|driver| driver.borrow_mut().machine.handle(event));
    for effect in effects {
        apply(store, effect);
    }
}

fn apply(store: AppStore, effect: SessionEffect) {
    match effect {
        SessionEffect::StartRefreshTimer => {
            let period = u32::try_from(api::config().refresh_interval.as_millis()).unwrap_or(u32::MAX);
            let timer = Interval::new(period, move || {
                spawn_local(async move {
                    let event = match api::client().refresh_token().await {
                        Some(_) => SessionEvent::RefreshSucceeded,
                        None => SessionEvent::RefreshFailed,
                    };
                    dispatch(store, event);
                });
            });
            DRIVER.with(|driver| driver.borrow_mut().refresh_timer = Some(timer));
        }
        SessionEffect::StopRefreshTimer => {
            let timer = DRIVER.with(|driver| driver.borrow_mut().refresh_timer.take());
            drop(timer);
        }
        SessionEffect::LoadOrganization => load_organization(store),
        SessionEffect::ReloadUser => store_reload_user(&store),
        SessionEffect::ResetState => store_reset(&store),
        SessionEffect::RedirectToLogin => browser::redirect("/login"),
    }
}

/// Fetch the organization into the shared store
pub fn load_organization(store: AppStore) {
    store.organization_loading().set(true);
    store.organization_error().set(None);
    spawn_local(async move {
        match api::client().organization().await {
            Ok(org) => store.organization().set(Some(org)),
            Err(e) => {
                tracing::warn!(error = %e, "failed to load organization");
                store.organization_error().set(Some(e.to_string()));
            }
        }
        store.organization_loading().set(false);
    });
}

/// Server logout, then back to the login page
pub fn logout(store: AppStore) {
    spawn_local(async move {
        api::client().logout().await;
        dispatch(store, SessionEvent::LoggedOut);
    });
}
