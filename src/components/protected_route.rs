//! Protected Route Component
//!
//! Renders its children only while a token is stored; otherwise sends the
//! user to the login page.

use leptos::prelude::*;
use leptos_router::components::Redirect;
use whitepaperiq_core::storage;

use crate::browser::LocalStorage;

#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    move || {
        if storage::is_authenticated(&LocalStorage) {
            children().into_any()
        } else {
            view! { <Redirect path="/login" /> }.into_any()
        }
    }
}
