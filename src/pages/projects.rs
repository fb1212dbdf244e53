//! Projects Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use whitepaperiq_core::filters::normalize_risk_level;
use whitepaperiq_core::models::{AnalysisStatus, ListProjectsParams, Pagination, ProjectListItem};
use whitepaperiq_core::{format, links};

use crate::api;
use crate::browser;
use crate::components::{MainLayout, PaginationBar};
use crate::context::use_app_context;

const PAGE_SIZE: u32 = 20;
const STATUS_OPTIONS: [AnalysisStatus; 4] = [
    AnalysisStatus::Completed,
    AnalysisStatus::Processing,
    AnalysisStatus::Pending,
    AnalysisStatus::Failed,
];

#[component]
pub fn ProjectsPage() -> impl IntoView {
    browser::set_page_title("Projects");
    let ctx = use_app_context();
    let navigate = use_navigate();

    let (page, set_page) = signal(1u32);
    let (search, set_search) = signal(String::new());
    let (status, set_status) = signal::<Option<AnalysisStatus>>(None);
    let (projects, set_projects) = signal(Vec::<ProjectListItem>::new());
    let (pagination, set_pagination) = signal::<Option<Pagination>>(None);
    let (loading, set_loading) = signal(false);

    Effect::new(move |_| {
        let params = ListProjectsParams {
            page: Some(page.get()),
            limit: Some(PAGE_SIZE),
            search: Some(search.get()),
            analysis_status: status.get(),
            ..ListProjectsParams::default()
        };
        set_loading.set(true);
        spawn_local(async move {
            match api::client().list_projects(&params).await {
                Ok(result) => {
                    set_projects.set(result.data);
                    set_pagination.set(Some(result.pagination));
                }
                Err(e) => ctx.error(format!("Failed to load projects: {e}")),
            }
            set_loading.set(false);
        });
    });

    let row = move |item: ProjectListItem| {
        let path = links::project_path(&item.project);
        let navigate = navigate.clone();
        let latest = item.latest_analysis.map(|analysis| {
            let bucket = normalize_risk_level(analysis.risk_level.as_deref());
            view! {
                <span class=format!("status-badge status-badge--{}", analysis.status.as_str().to_lowercase())>
                    {analysis.status.label()}
                </span>
                <span class=format!("risk-badge risk-badge--{}", bucket.as_str())>{bucket.as_str()}</span>
                <span class="projects__date">{format::date(&analysis.created_at)}</span>
            }
        });
        view! {
            <tr class="projects__row" on:click=move |_| navigate(&path, Default::default())>
                <td class="projects__name">
                    {item.project.image_url.clone().map(|src| view! { <img class="projects__thumb" src=src alt="" /> })}
                    <span>{item.project.name.clone()}</span>
                    <span class="projects__symbol">{item.project.symbol_upper()}</span>
                </td>
                <td class="projects__latest">{latest}</td>
                <td>{item.analysis_count}</td>
            </tr>
        }
    };

    view! {
        <MainLayout>
            <div class="projects">
                <h1 class="page-title">"Projects"</h1>

                <div class="projects__filters">
                    <input
                        type="search"
                        class="projects__search"
                        placeholder="Search projects"
                        prop:value=move || search.get()
                        on:input=move |ev| {
                            set_search.set(event_target_value(&ev));
                            set_page.set(1);
                        }
                    />
                    <select
                        class="projects__status"
                        on:change=move |ev| {
                            set_status.set(AnalysisStatus::parse(&event_target_value(&ev)));
                            set_page.set(1);
                        }
                    >
                        <option value="">"All statuses"</option>
                        {STATUS_OPTIONS
                            .iter()
                            .map(|option| view! { <option value=option.as_str()>{option.label()}</option> })
                            .collect_view()}
                    </select>
                </div>

                {move || {
                    let items = projects.get();
                    if loading.get() && items.is_empty() {
                        view! { <p class="projects__status-text">"Loading projects..."</p> }.into_any()
                    } else if items.is_empty() {
                        view! { <p class="projects__status-text">"No projects yet. Search for a token to add one."</p> }
                            .into_any()
                    } else {
                        view! {
                            <table class="projects__table">
                                <thead>
                                    <tr>
                                        <th>"Project"</th>
                                        <th>"Latest analysis"</th>
                                        <th>"Analyses"</th>
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
