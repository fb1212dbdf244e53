use leptos::prelude::*;
use leptos_router::components::A;

use crate::browser;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    browser::set_page_title("Page Not Found");

    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"The page you are looking for does not exist."</p>
            <A href="/search" attr:class="btn btn--primary">"Back to search"</A>
        </div>
    }
}
