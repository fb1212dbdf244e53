//! Previous/next pager used by list pages

use leptos::prelude::*;
use whitepaperiq_core::models::Pagination;

#[component]
pub fn PaginationBar(
    #[prop(into)] pagination: Signal<Option<Pagination>>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] on_page: Callback<u32>,
) -> impl IntoView {
    let has_pages = move || pagination.get().is_some_and(|p| p.total_pages > 1);

    view! {
        <Show when=has_pages>
            <div class="pagination">
                <button
                    type="button"
                    class="pagination__btn"
                    disabled=move || loading.get() || !pagination.get().is_some_and(|p| p.has_previous())
                    on:click=move |_| {
                        if let Some(p) = pagination.get_untracked() {
                            on_page.run(p.page.saturating_sub(1).max(1));
                        }
                    }
                >
                    "Previous"
                </button>
                <span class="pagination__info">
                    {move || pagination.get().map(|p| format!("Page {} of {}", p.page, p.total_pages))}
                </span>
                <button
                    type="button"
                    class="pagination__btn"
                    disabled=move || loading.get() || !pagination.get().is_some_and(|p| p.has_next())
                    on:click=move |_| {
                        if let Some(p) = pagination.get_untracked() {
                            on_page.run((p.page + 1).min(p.total_pages));
                        }
                    }
                >
                    "Next"
                </button>
            </div>
        </Show>
    }
}
