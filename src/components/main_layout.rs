//! Sidebar plus content area for all signed-in pages

use leptos::prelude::*;

use super::Sidebar;

#[component]
pub fn MainLayout(children: Children) -> impl IntoView {
    view! {
        <div class="main-layout">
            <Sidebar />
            <main class="main-layout__content">{children()}</main>
        </div>
    }
}
