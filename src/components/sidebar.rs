//! Sidebar Component
//!
//! Navigation, organization name with credit usage, and the signed-in user.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::session;
use crate::store::{use_app_store, AppStateStoreFields};

const NAV_ITEMS: &[(&str, &str)] = &[
    ("/search", "Search"),
    ("/trending", "Trending"),
    ("/projects", "Projects"),
    ("/analyses", "Analyses"),
    ("/settings", "Settings"),
];

#[component]
pub fn Sidebar() -> impl IntoView {
    let store = use_app_store();

    let org_name = move || {
        if store.organization_loading().get() && store.organization().with(Option::is_none) {
            return "Loading...".to_string();
        }
        store
            .organization()
            .with(|org| org.as_ref().map(|o| o.name.clone()))
            .unwrap_or_else(|| "No organization".to_string())
    };
    let usage = move || store.organization().with(|org| org.as_ref().map(|o| o.usage_stats));
    let user_name = move || {
        store
            .user()
            .with(|user| user.as_ref().map(|u| u.display_name().to_string()))
            .unwrap_or_default()
    };
    let user_role = move || {
        store
            .user()
            .with(|user| user.as_ref().map(|u| u.role.label()))
            .unwrap_or_default()
    };

    view! {
        <aside class="sidebar">
            <div class="sidebar__logo">"WhitepaperIQ"</div>

            <div class="sidebar__org">
                <span class="sidebar__org-name">{org_name}</span>
                {move || usage().map(|stats| view! {
                    <div class="sidebar__usage">
                        <div class="sidebar__usage-bar">
                            <div class="sidebar__usage-fill" style:width=format!("{:.0}%", stats.percentage())></div>
                        </div>
                        <span class="sidebar__usage-text">
                            {format!("{}/{} analyses used", stats.used, stats.total)}
                        </span>
                    </div>
                })}
            </div>

            <nav class="sidebar__nav">
                {NAV_ITEMS
                    .iter()
                    .map(|(href, label)| view! {
                        <A href=*href attr:class="sidebar__link">{*label}</A>
                    })
                    .collect_view()}
            </nav>

            <div class="sidebar__user">
                <div class="sidebar__user-info">
                    <span class="sidebar__user-name">{user_name}</span>
                    <span class="sidebar__user-role">{user_role}</span>
                </div>
                <button type="button" class="sidebar__logout" on:click=move |_| session::logout(store)>
                    "Log out"
                </button>
            </div>
        </aside>
    }
}
