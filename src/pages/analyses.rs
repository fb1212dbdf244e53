//! All Analyses Page
//!
//! Organization-wide analysis history with user and project filters. The
//! filters apply to the page already loaded.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use whitepaperiq_core::filters::{self, normalize_risk_level, UserFilter};
use whitepaperiq_core::models::{AnalysisListItem, ListAnalysesParams, Pagination};
use whitepaperiq_core::{format, links};

use crate::api;
use crate::browser;
use crate::components::{MainLayout, PaginationBar};
use crate::context::use_app_context;

const PAGE_SIZE: u32 = 20;

#[component]
pub fn AnalysesPage() -> impl IntoView {
    browser::set_page_title("All Analyses");
    let ctx = use_app_context();
    let navigate = use_navigate();

    let (page, set_page) = signal(1u32);
    let (analyses, set_analyses) = signal(Vec::<AnalysisListItem>::new());
    let (pagination, set_pagination) = signal::<Option<Pagination>>(None);
    let (loading, set_loading) = signal(false);
    let (user_filter, set_user_filter) = signal(UserFilter::All);
    let (search, set_search) = signal(String::new());

    Effect::new(move |_| {
        let params = ListAnalysesParams {
            page: Some(page.get()),
            limit: Some(PAGE_SIZE),
            project_id: None,
        };
        set_loading.set(true);
        spawn_local(async move {
            match api::client().list_analyses(&params).await {
                Ok(result) => {
                    set_analyses.set(result.data);
                    set_pagination.set(Some(result.pagination));
                }
                Err(e) => ctx.error(format!("Failed to load analyses: {e}")),
            }
            set_loading.set(false);
        });
    });

    let users = move || analyses.with(|list| filters::distinct_users(list));
    let visible = move || {
        analyses.with(|list| {
            user_filter.with(|user| {
                search.with(|term| {
                    filters::filter_analyses(list, user, term)
                        .into_iter()
                        .cloned()
                        .collect::<Vec<_>>()
                })
            })
        })
    };

    let row = move |item: AnalysisListItem| {
        let path = links::analysis_project_path(&item.project);
        let navigate = navigate.clone();
        let bucket = normalize_risk_level(item.risk_level.as_deref());
        let score = match (item.total_score, item.max_score) {
            (Some(total), Some(max)) => format!("{total:.0}/{max:.0}"),
            _ => "-".to_string(),
        };
        let author = item
            .user
            .as_ref()
            .and_then(|u| u.full_name.clone().or_else(|| u.email.clone()))
            .unwrap_or_default();
        view! {
            <tr class="analyses__row" on:click=move |_| navigate(&path, Default::default())>
                <td class="analyses__project">
                    {item.project.image_url.clone().map(|src| view! { <img class="analyses__thumb" src=src alt="" /> })}
                    <span class="analyses__name">{item.project.name.clone()}</span>
                    <span class="analyses__symbol">
                        {item.project.symbol.as_deref().unwrap_or_default().to_uppercase()}
                    </span>
                </td>
                <td>
                    <span class=format!("status-badge status-badge--{}", item.status.as_str().to_lowercase())>
                        {item.status.label()}
                    </span>
                </td>
                <td>
                    <span class=format!("risk-badge risk-badge--{}", bucket.as_str())>{bucket.as_str()}</span>
                </td>
                <td>{score}</td>
                <td>{author}</td>
                <td>{format::date_time(&item.created_at)}</td>
            </tr>
        }
    };

    view! {
        <MainLayout>
            <div class="analyses">
                <h1 class="page-title">"All Analyses"</h1>

                <div class="analyses__filters">
                    <select
                        class="analyses__user-filter"
                        on:change=move |ev| set_user_filter.set(UserFilter::from_select(&event_target_value(&ev)))
                    >
                        <option value="all" selected=move || user_filter.with(|f| *f == UserFilter::All)>
                            "All users"
                        </option>
                        {move || {
                            users()
                                .into_iter()
                                .map(|user| {
                                    let id = user.id.clone();
                                    view! {
                                        <option
                                            value=user.id
                                            selected=move || user_filter.with(|f| f.select_value() == id)
                                        >
                                            {user.label}
                                        </option>
                                    }
                                })
                                .collect_view()
                        }}
                    </select>
                    <input
                        type="search"
                        class="analyses__search"
                        placeholder="Search by project name or symbol"
                        prop:value=move || search.get()
                        on:input=move |ev| set_search.set(event_target_value(&ev))
                    />
                </div>

                {move || {
                    let items = visible();
                    if loading.get() && items.is_empty() {
                        view! { <p class="analyses__status">"Loading analyses..."</p> }.into_any()
                    } else if items.is_empty() {
                        view! { <p class="analyses__status">"No analyses found."</p> }.into_any()
                    } else {
                        view! {
                            <table class="analyses__table">
                                <thead>
                                    <tr>
                                        <th>"Project"</th>
                                        <th>"Status"</th>
                                        <th>"Risk"</th>
                                        <th>"Score"</th>
                                        <th>"Analyst"</th>
                                        <th>"Date"</th>
                                    </tr>
                                </thead>
                                <tbody>{items.into_iter().map(row.clone()).collect_view()}</tbody>
                            </table>
                        }
                            .into_any()
                    }
                }}

                <PaginationBar pagination=pagination loading=loading on_page=move |n: u32| set_page.set(n) />
            </div>
        </MainLayout>
    }
}
