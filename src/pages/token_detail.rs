//! Token Detail Page
//!
//! Resolves the project behind `/token/:ticker`, shows its latest analysis
//! and history, and starts new analyses. A `projectId` query pins a known
//! project; otherwise the ticker is treated as a CoinGecko id and the
//! project is found or created.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_params_map, use_query_map};
use whitepaperiq_core::filters::normalize_risk_level;
use whitepaperiq_core::format;
use whitepaperiq_core::models::{
    Analysis, AnalysisSummary, AnalysisUiStatus, CreateProjectPayload, HistoryParams, Pagination, Project,
    ProjectWithLatestAnalysis,
};
use whitepaperiq_core::ApiResult;

use crate::api;
use crate::browser;
use crate::components::{AnalysisReport, MainLayout, PaginationBar};
use crate::context::use_app_context;
use crate::session;
use crate::store::use_app_store;

const HISTORY_PAGE_SIZE: u32 = 10;

async fn resolve_project(ticker: String, project_id: Option<String>) -> ApiResult<ProjectWithLatestAnalysis> {
    let client = api::client();
    let id = match project_id {
        Some(id) => id,
        None => client.create_project(&CreateProjectPayload::from_coingecko(&ticker)).await?.project.id,
    };
    client.project(&id).await
}

#[component]
pub fn TokenDetailPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let params = use_params_map();
    let query = use_query_map();

    let (project, set_project) = signal::<Option<Project>>(None);
    let (analysis, set_analysis) = signal::<Option<Analysis>>(None);
    let (status, set_status) = signal(AnalysisUiStatus::Idle);
    let (load_error, set_load_error) = signal::<Option<String>>(None);
    let (history, set_history) = signal(Vec::<AnalysisSummary>::new());
    let (history_page, set_history_page) = signal(1u32);
    let (history_pagination, set_history_pagination) = signal::<Option<Pagination>>(None);
    let (history_loading, set_history_loading) = signal(false);
    let (downloading, set_downloading) = signal(false);

    // Project lookup
    Effect::new(move |_| {
        let ticker = params.read().get("ticker").unwrap_or_default();
        let project_id = query.read().get("projectId").filter(|id| !id.is_empty());
        set_project.set(None);
        set_analysis.set(None);
        set_load_error.set(None);
        set_status.set(AnalysisUiStatus::Idle);
        set_history_page.set(1);
        browser::set_page_title(&ticker.to_uppercase());

        spawn_local(async move {
            match resolve_project(ticker, project_id).await {
                Ok(found) => {
                    browser::set_page_title(&found.project.name);
                    set_status.set(
                        found
                            .latest_analysis
                            .as_ref()
                            .map(|a| AnalysisUiStatus::from_status(a.status))
                            .unwrap_or_default(),
                    );
                    set_analysis.set(found.latest_analysis);
                    set_project.set(Some(found.project));
                }
                Err(e) => {
                    tracing::warn!(error = %e, "project lookup failed");
                    set_load_error.set(Some(e.to_string()));
                }
            }
        });
    });

    let load_history = move |id: String, page: u32| {
        set_history_loading.set(true);
        spawn_local(async move {
            let params = HistoryParams {
                page: Some(page),
                limit: Some(HISTORY_PAGE_SIZE),
            };
            match api::client().project_history(&id, &params).await {
                Ok(result) => {
                    set_history.set(result.data);
                    set_history_pagination.set(Some(result.pagination));
                }
                Err(e) => ctx.error(format!("Failed to load history: {e}")),
            }
            set_history_loading.set(false);
        });
    };

    Effect::new(move |_| {
        let page = history_page.get();
        if let Some(id) = project.with(|p| p.as_ref().map(|p| p.id.clone())) {
            load_history(id, page);
        }
    });

    let start_analysis = move |_: web_sys::MouseEvent| {
        let Some(id) = project.with_untracked(|p| p.as_ref().map(|p| p.id.clone())) else { return };
        if status.get_untracked() == AnalysisUiStatus::Loading {
            return;
        }
        set_status.set(AnalysisUiStatus::Loading);
        spawn_local(async move {
            match api::client().create_analysis(&id).await {
                Ok(created) => {
                    let next = AnalysisUiStatus::from_status(created.status);
                    match next {
                        AnalysisUiStatus::Error => ctx.error(
                            created
                                .error_message
                                .clone()
                                .unwrap_or_else(|| "Analysis failed".to_string()),
                        ),
                        _ => ctx.success("Analysis completed"),
                    }
                    set_status.set(next);
                    set_analysis.set(Some(created));
                    load_history(id, history_page.get_untracked());
                    session::load_organization(store);
                }
                Err(e) => {
                    set_status.set(AnalysisUiStatus::Error);
                    ctx.error(e.to_string());
                }
            }
        });
    };

    let open_analysis = move |id: String| {
        spawn_local(async move {
            match api::client().analysis(&id).await {
                Ok(found) => {
                    set_status.set(AnalysisUiStatus::from_status(found.status));
                    set_analysis.set(Some(found));
                }
                Err(e) => ctx.error(e.to_string()),
            }
        });
    };

    let download_pdf = move |_: web_sys::MouseEvent| {
        let Some((id, created_at)) = analysis.with_untracked(|a| a.as_ref().map(|a| (a.id.clone(), a.created_at.clone())))
        else {
            return;
        };
        let symbol = project.with_untracked(|p| p.as_ref().map(Project::symbol_upper)).unwrap_or_default();
        set_downloading.set(true);
        spawn_local(async move {
            let saved = match api::client().download_analysis_pdf(&id).await {
                Ok(bytes) => {
                    let date = created_at.get(..10).unwrap_or(&created_at);
                    browser::download_bytes(&bytes, &format!("{symbol}-analysis-{date}.pdf"), "application/pdf")
                }
                Err(e) => Err(e.to_string()),
            };
            if let Err(message) = saved {
                ctx.error(format!("PDF download failed: {message}"));
            }
            set_downloading.set(false);
        });
    };

    let header = move || {
        project.get().map(|p| {
            view! {
                <div class="token__header">
                    {p.image_url.clone().map(|src| view! { <img class="token__logo" src=src alt="" /> })}
                    <div>
                        <h1 class="token__name">{p.name.clone()}</h1>
                        <span class="token__symbol">{p.symbol_upper()}</span>
                    </div>
                    <div class="token__actions">
                        <button
                            type="button"
                            class="btn btn--primary"
                            disabled=move || status.get() == AnalysisUiStatus::Loading
                            on:click=start_analysis
                        >
                            {move || match status.get() {
                                AnalysisUiStatus::Loading => "Analyzing...",
                                AnalysisUiStatus::Idle => "Start analysis",
                                _ => "Run new analysis",
                            }}
                        </button>
                        <Show when=move || analysis.with(|a| a.is_some())>
                            <button
                                type="button"
                                class="btn"
                                disabled=move || downloading.get()
                                on:click=download_pdf
                            >
                                {move || if downloading.get() { "Preparing PDF..." } else { "Download PDF" }}
                            </button>
                        </Show>
                    </div>
                </div>
            }
        })
    };

    let report = move || match status.get() {
        AnalysisUiStatus::Loading => view! {
            <div class="token__analyzing">
                <div class="spinner"></div>
                <p>"Running analysis. This can take up to two minutes."</p>
            </div>
        }
            .into_any(),
        AnalysisUiStatus::Error => {
            let message = analysis
                .with(|a| a.as_ref().and_then(|a| a.error_message.clone()))
                .unwrap_or_else(|| "The last analysis failed. Try running it again.".to_string());
            view! { <div class="alert alert--error">{message}</div> }.into_any()
        }
        AnalysisUiStatus::Completed => match analysis.get() {
            Some(found) => view! { <AnalysisReport analysis=found /> }.into_any(),
            None => view! { <p class="token__empty">"Report unavailable."</p> }.into_any(),
        },
        AnalysisUiStatus::Idle => view! {
            <p class="token__empty">"No analysis yet. Start one to generate a due-diligence report."</p>
        }
            .into_any(),
    };

    let history_list = move || {
        let items = history.get();
        if items.is_empty() {
            return view! { <p class="token__history-empty">"No previous analyses."</p> }.into_any();
        }
        items
            .into_iter()
            .map(|item| {
                let id = item.id.clone();
                let bucket = normalize_risk_level(item.risk_level.as_deref());
                let selected = {
                    let id = id.clone();
                    move || analysis.with(|a| a.as_ref().is_some_and(|a| a.id == id))
                };
                view! {
                    <li
                        class="token__history-item"
                        class:token__history-item--active=selected
                        on:click=move |_| open_analysis(id.clone())
                    >
                        <span class="token__history-date">{format::date_time(&item.created_at)}</span>
                        <span class=format!("status-badge status-badge--{}", item.status.as_str().to_lowercase())>
                            {item.status.label()}
                        </span>
                        <span class=format!("risk-badge risk-badge--{}", bucket.as_str())>{bucket.as_str()}</span>
                    </li>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <MainLayout>
            <div class="token">
                {move || load_error.get().map(|message| view! { <div class="alert alert--error">{message}</div> })}
                <Show when=move || project.with(Option::is_none) && load_error.with(Option::is_none)>
                    <p class="token__loading">"Loading project..."</p>
                </Show>
                {header}
                <div class="token__body">
                    <div class="token__report">{report}</div>
                    <Show when=move || project.with(Option::is_some)>
                        <aside class="token__history">
                            <h3>"History"</h3>
                            <ul>{history_list}</ul>
                            <PaginationBar
                                pagination=history_pagination
                                loading=history_loading
                                on_page=move |n: u32| set_history_page.set(n)
                            />
                        </aside>
                    </Show>
                </div>
            </div>
        </MainLayout>
    }
}
