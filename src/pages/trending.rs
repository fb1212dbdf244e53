//! Trending Page
//!
//! Trending coins, 20 per page with numbered page buttons.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use whitepaperiq_core::format;
use whitepaperiq_core::links;
use whitepaperiq_core::models::{Pagination, TrendingCoin};

use crate::api;
use crate::browser;
use crate::components::MainLayout;
use crate::context::use_app_context;

const PAGE_SIZE: u32 = 20;
const MAX_PAGE_BUTTONS: u32 = 10;

#[component]
pub fn TrendingPage() -> impl IntoView {
    browser::set_page_title("Trending");
    let ctx = use_app_context();
    let navigate = use_navigate();

    let (page, set_page) = signal(1u32);
    let (coins, set_coins) = signal(Vec::<TrendingCoin>::new());
    let (pagination, set_pagination) = signal::<Option<Pagination>>(None);
    let (loading, set_loading) = signal(false);

    Effect::new(move |_| {
        let current = page.get();
        set_loading.set(true);
        spawn_local(async move {
            match api::client().trending(current, PAGE_SIZE).await {
                Ok(result) => {
                    set_coins.set(result.data);
                    set_pagination.set(Some(result.pagination));
                }
                Err(e) => ctx.error(format!("Failed to load trending coins: {e}")),
            }
            set_loading.set(false);
        });
    });

    let page_buttons = move || {
        let Some(p) = pagination.get() else { return Vec::new() };
        (1..=p.visible_pages(MAX_PAGE_BUTTONS)).collect::<Vec<_>>()
    };

    view! {
        <MainLayout>
            <div class="trending">
                <h1 class="page-title">"Trending"</h1>
                <Show when=move || loading.get()>
                    <p class="trending__status">"Loading..."</p>
                </Show>
                <div class="trending__grid">
                    <For
                        each=move || coins.get()
                        key=|coin| coin.id.clone()
                        children={
                            let navigate = navigate.clone();
                            move |coin: TrendingCoin| {
                                let path = links::token_path(&coin.id, None);
                                let navigate = navigate.clone();
                                let change = coin.price_change_24h;
                                let change_class = match change {
                                    Some(c) if c < 0.0 => "trending__change negative",
                                    _ => "trending__change positive",
                                };
                                view! {
                                    <div class="trending__card" on:click=move |_| navigate(&path, Default::default())>
                                        {coin.image().map(|src| view! { <img class="trending__thumb" src=src.to_string() alt="" /> })}
                                        <div class="trending__info">
                                            <span class="trending__name">{coin.name.clone()}</span>
                                            <span class="trending__symbol">{coin.symbol.to_uppercase()}</span>
                                        </div>
                                        <div class="trending__stats">
                                            <span class="trending__mcap">
                                                {coin.market_cap.map(|m| format!("MCap {}", format::usd_compact(m))).unwrap_or_default()}
                                            </span>
                                            <span class=change_class>
                                                {change.map(format::percent_change).unwrap_or_default()}
                                            </span>
                                            {coin.market_cap_rank.map(|rank| view! {
                                                <span class="trending__rank">{format!("#{rank}")}</span>
                                            })}
                                        </div>
                                    </div>
                                }
                            }
                        }
                    />
                </div>
                <div class="pagination pagination--numbered">
                    <For
                        each=page_buttons
                        key=|n| *n
                        children=move |n: u32| view! {
                            <button
                                type="button"
                                class="pagination__btn"
                                class:pagination__btn--active=move || page.get() == n
                                disabled=move || loading.get()
                                on:click=move |_| set_page.set(n)
                            >
                                {n}
                            </button>
                        }
                    />
                </div>
            </div>
        </MainLayout>
    }
}
