//! Search Page
//!
//! Project search with autocomplete. Submitting opens the full results list.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use whitepaperiq_core::filters::{autocomplete_term, AUTOCOMPLETE_LIMIT};
use whitepaperiq_core::links;
use whitepaperiq_core::models::SearchResponse;

use crate::api;
use crate::browser;
use crate::components::MainLayout;

const AUTOCOMPLETE_DELAY_MS: u32 = 300;

#[component]
pub fn SearchPage() -> impl IntoView {
    browser::set_page_title("Search");
    let navigate = use_navigate();

    let (query, set_query) = signal(String::new());
    let (suggestions, set_suggestions) = signal::<Option<SearchResponse>>(None);
    let (loading, set_loading) = signal(false);
    let pending = StoredValue::new_local(None::<Timeout>);

    let on_input = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        set_query.set(value.clone());
        pending.update_value(|timer| *timer = None);

        let Some(term) = autocomplete_term(&value).map(str::to_string) else {
            set_suggestions.set(None);
            return;
        };
        let timer = Timeout::new(AUTOCOMPLETE_DELAY_MS, move || {
            set_loading.set(true);
            spawn_local(async move {
                let result = api::client().search(&term, AUTOCOMPLETE_LIMIT).await;
                set_loading.set(false);
                // Input moved on while the request was in flight
                if query.get_untracked().trim() != term {
                    return;
                }
                match result {
                    Ok(response) => set_suggestions.set(Some(response)),
                    Err(e) => {
                        tracing::warn!(error = %e, "autocomplete failed");
                        set_suggestions.set(None);
                    }
                }
            });
        });
        pending.set_value(Some(timer));
    };

    let on_submit = {
        let navigate = navigate.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            let value = query.get_untracked();
            if value.trim().is_empty() {
                return;
            }
            pending.update_value(|timer| *timer = None);
            navigate(&links::search_results_path(&value), Default::default());
        }
    };

    let suggestion_list = move || {
        let navigate = navigate.clone();
        suggestions.get().map(|response| {
            let go = move |path: String| navigate(&path, Default::default());
            let go_category = go.clone();
            view! {
                <div class="search__suggestions">
                    {if response.projects.is_empty() && response.categories.is_empty() {
                        Some(view! { <p class="search__empty">"No matches"</p> })
                    } else {
                        None
                    }}
                    <ul class="search__projects">
                        {response
                            .projects
                            .into_iter()
                            .map(|project| {
                                let path = links::token_path(&project.id, None);
                                let go = go.clone();
                                view! {
                                    <li class="search__project" on:click=move |_| go(path.clone())>
                                        {project.image.clone().map(|src| view! { <img class="search__thumb" src=src alt="" /> })}
                                        <span class="search__name">{project.name}</span>
                                        <span class="search__symbol">{project.symbol.to_uppercase()}</span>
                                        {project.market_cap_rank.map(|rank| view! {
                                            <span class="search__rank">{format!("#{rank}")}</span>
                                        })}
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                    <div class="search__categories">
                        {response
                            .categories
                            .into_iter()
                            .map(|category| {
                                let path = links::search_results_path(&category.name);
                                let go = go_category.clone();
                                view! {
                                    <button type="button" class="chip" on:click=move |_| go(path.clone())>
                                        {category.name}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            }
        })
    };

    view! {
        <MainLayout>
            <div class="search">
                <h1 class="search__title">"Research any crypto project"</h1>
                <p class="search__subtitle">"Search by name or symbol to open its analysis page."</p>
                <form class="search__form" on:submit=on_submit>
                    <input
                        type="search"
                        class="search__input"
                        placeholder="Bitcoin, ETH, Solana..."
                        autocomplete="off"
                        prop:value=move || query.get()
                        on:input=on_input
                    />
                    <button type="submit" class="btn btn--primary">"Search"</button>
                </form>
                <Show when=move || loading.get()>
                    <p class="search__loading">"Searching..."</p>
                </Show>
                {suggestion_list}
                <p class="search__hint">
                    "Not sure where to start? "
                    <A href="/trending">"See what's trending"</A>
                </p>
            </div>
        </MainLayout>
    }
}
