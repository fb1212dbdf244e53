//! Search Results Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_query_map};
use whitepaperiq_core::links;
use whitepaperiq_core::models::SearchResponse;
use whitepaperiq_core::DEFAULT_SEARCH_LIMIT;

use crate::api;
use crate::browser;
use crate::components::MainLayout;

#[component]
pub fn SearchResultsPage() -> impl IntoView {
    let query_map = use_query_map();
    let navigate = use_navigate();
    let query = move || query_map.read().get("q").unwrap_or_default();

    let (results, set_results) = signal::<Option<SearchResponse>>(None);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    Effect::new(move |_| {
        let q = query();
        browser::set_page_title(&format!("Results for \"{}\"", q.trim()));
        set_results.set(None);
        set_error.set(None);
        if q.trim().is_empty() {
            return;
        }
        set_loading.set(true);
        spawn_local(async move {
            match api::client().search(q.trim(), DEFAULT_SEARCH_LIMIT).await {
                Ok(response) => set_results.set(Some(response)),
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_loading.set(false);
        });
    });

    let body = move || {
        if loading.get() {
            return view! { <p class="results__status">"Searching..."</p> }.into_any();
        }
        if let Some(message) = error.get() {
            return view! { <div class="alert alert--error">{message}</div> }.into_any();
        }
        let Some(response) = results.get() else {
            return view! { <p class="results__status">"Enter a search term to find projects."</p> }.into_any();
        };
        if response.projects.is_empty() {
            return view! { <p class="results__status">"No projects matched your search."</p> }.into_any();
        }

        let navigate = navigate.clone();
        view! {
            <ul class="results__list">
                {response
                    .projects
                    .into_iter()
                    .map(|project| {
                        let path = links::token_path(&project.id, None);
                        let navigate = navigate.clone();
                        view! {
                            <li class="results__item" on:click=move |_| navigate(&path, Default::default())>
                                {project.image.clone().map(|src| view! { <img class="results__thumb" src=src alt="" /> })}
                                <div class="results__info">
                                    <span class="results__name">{project.name}</span>
                                    <span class="results__symbol">{project.symbol.to_uppercase()}</span>
                                </div>
                                <span class="results__rank">
                                    {project.market_cap_rank.map(|rank| format!("Rank #{rank}")).unwrap_or_default()}
                                </span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        }
            .into_any()
    };

    view! {
        <MainLayout>
            <div class="results">
                <h1 class="page-title">{move || format!("Results for \"{}\"", query().trim())}</h1>
                {body}
            </div>
        </MainLayout>
    }
}
