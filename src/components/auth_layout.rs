//! Centered card layout for the login and invitation pages

use leptos::prelude::*;

#[component]
pub fn AuthLayout(children: Children) -> impl IntoView {
    view! {
        <div class="auth-layout">
            <div class="auth-layout__brand">
                <span class="auth-layout__logo">"WhitepaperIQ"</span>
                <p class="auth-layout__tagline">"AI-assisted due diligence for crypto projects"</p>
            </div>
            <div class="auth-layout__card">{children()}</div>
        </div>
    }
}
