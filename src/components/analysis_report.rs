//! Analysis Report Component
//!
//! Renders a completed analysis: score and criteria, AI insights, market
//! data, holders, exchanges and fund flows, treasuries, and community and
//! developer activity. Missing parts are skipped.

use leptos::prelude::*;
use whitepaperiq_core::filters::normalize_risk_level;
use whitepaperiq_core::format;
use whitepaperiq_core::models::{
    AiInsights, Analysis, CoinData, CommunityData, DetailedAnalysis, DeveloperData, InflowOutflowData, MarketData,
    TopHoldersData, TreasuryData, WtiAnalysis,
};

const TOP_HOLDERS: usize = 10;
const TOP_EXCHANGES: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FlowTab {
    Exchanges,
    Inflow,
}

#[component]
pub fn AnalysisReport(analysis: Analysis) -> impl IntoView {
    let data = analysis.result_data.unwrap_or_default();
    let coin = data.coin_data.unwrap_or_default();

    view! {
        <div class="report">
            {data.detailed_analysis.map(score_section)}
            {data.ai_insights.map(insights_section)}
            {coin.market_data.clone().map(market_section)}
            {coin.wti_analysis.clone().map(wti_section)}
            {data.top_holders_data.map(holders_section)}
            {exchanges_section(coin.clone(), data.inflow_outflow_data)}
            {data.treasury_data.filter(|t| !t.companies.is_empty()).map(treasury_section)}
            {coin.community_data.clone().map(community_section)}
            {coin.developer_data.clone().map(developer_section)}
            <p class="report__meta">
                {format!("Generated {} · {} AI tokens", format::date_time(&analysis.created_at), analysis.ai_token_usage)}
            </p>
        </div>
    }
}

fn score_section(detailed: DetailedAnalysis) -> impl IntoView {
    let body = detailed.data;
    let risk = body.analysis.risk_level.clone();
    let bucket = normalize_risk_level(Some(&risk));

    view! {
        <section class="report__card report__score">
            <div class="report__score-header">
                <div class="report__score-value">
                    <span class="report__score-total">{format!("{:.0}", body.total_score)}</span>
                    <span class="report__score-max">{format!("/ {:.0}", body.max_score)}</span>
                </div>
                <span class=format!("risk-badge risk-badge--{}", bucket.as_str())>{risk}</span>
            </div>
            <p class="report__assessment">{body.analysis.overall_assessment}</p>
            <div class="report__criteria">
                {body
                    .analysis
                    .criteria
                    .into_iter()
                    .map(|criteria| view! {
                        <details class="report__criteria-item">
                            <summary>
                                <span class="report__criteria-name">{criteria.name}</span>
                                <span class="report__criteria-score">
                                    {format!("{:.0}/{:.0}", criteria.score, criteria.max_score)}
                                </span>
                            </summary>
                            <p>{criteria.analysis}</p>
                            {bullet_list("Strengths", "report__strengths", criteria.strengths)}
                            {bullet_list("Weaknesses", "report__weaknesses", criteria.weaknesses)}
                        </details>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

fn bullet_list(title: &'static str, class: &'static str, items: Vec<String>) -> Option<impl IntoView> {
    (!items.is_empty()).then(|| {
        view! {
            <div class=class>
                <h5>{title}</h5>
                <ul>{items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}</ul>
            </div>
        }
    })
}

fn insights_section(insights: AiInsights) -> impl IntoView {
    let body = insights.data;
    view! {
        <section class="report__card report__insights">
            <h3>"AI Insights"</h3>
            <p class="report__insights-summary">{body.summary}</p>
            <div class="report__insights-list">
                {body
                    .insights
                    .into_iter()
                    .map(|insight| view! {
                        <article class="report__insight">
                            <span class="report__insight-category">{insight.category}</span>
                            <h4>{insight.title}</h4>
                            <p>{insight.summary}</p>
                        </article>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

fn stat(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="report__stat">
            <span class="report__stat-label">{label}</span>
            <span class="report__stat-value">{value}</span>
        </div>
    }
}

fn market_section(market: MarketData) -> impl IntoView {
    let change_class = if market.price_change_percentage_24h >= 0.0 { "positive" } else { "negative" };
    let max_supply = market
        .max_supply
        .map(format::supply_compact)
        .unwrap_or_else(|| "∞".to_string());

    view! {
        <section class="report__card report__market">
            <h3>"Market Data"</h3>
            <div class="report__price">
                <span class="report__price-value">{format::price(market.current_price)}</span>
                <span class=format!("report__price-change {change_class}")>
                    {format::percent_change(market.price_change_percentage_24h)}
                </span>
            </div>
            <div class="report__stats">
                {stat("Market Cap", format::usd_compact(market.market_cap))}
                {stat("Rank", market.market_cap_rank.map(|r| format!("#{r}")).unwrap_or_else(|| "-".to_string()))}
                {stat("24h Volume", format::usd_compact(market.total_volume))}
                {stat("FDV", market.fully_diluted_valuation.map(format::usd_compact).unwrap_or_else(|| "-".to_string()))}
                {stat("Circulating Supply", format::supply_compact(market.circulating_supply))}
                {stat("Total Supply", market.total_supply.map(format::supply_compact).unwrap_or_else(|| "-".to_string()))}
                {stat("Max Supply", max_supply)}
                {stat("24h Range", format!("{} - {}", format::price(market.low_24h), format::price(market.high_24h)))}
                {stat("All-Time High", format!("{} ({})", format::price(market.ath), format::percent_change(market.ath_change_percentage)))}
                {stat("All-Time Low", format!("{} ({})", format::price(market.atl), format::percent_change(market.atl_change_percentage)))}
            </div>
        </section>
    }
}

fn wti_section(wti: WtiAnalysis) -> impl IntoView {
    let bucket = normalize_risk_level(Some(&wti.risk_level));
    view! {
        <section class="report__card report__wti">
            <h3>"Wash Trading Index"</h3>
            <div class="report__wti-header">
                <span class="report__wti-score">{format!("{:.1}", wti.score)}</span>
                <span class=format!("risk-badge risk-badge--{}", bucket.as_str())>{wti.risk_level}</span>
            </div>
            <p class="report__wti-verdict">{wti.verdict}</p>
            <div class="report__stats">
                {stat("Turnover Ratio", wti.details.turnover_ratio)}
                {stat("Turnover Status", wti.details.turnover_status)}
                {stat("Weighted Spread", wti.details.weighted_spread)}
                {stat("Tickers Analyzed", wti.details.analyzed_ticker_count.to_string())}
            </div>
        </section>
    }
}

fn holders_section(holders: TopHoldersData) -> impl IntoView {
    let rows = holders
        .top_holders(TOP_HOLDERS)
        .into_iter()
        .map(|holder| {
            let label = holder.label().to_string();
            let chain = holder.address.chain.clone();
            let pct = format::percent(holder.pct_of_cap);
            let usd = format::usd_compact(holder.usd);
            view! {
                <tr>
                    <td class="report__holder-label">{label}</td>
                    <td>{chain}</td>
                    <td>{usd}</td>
                    <td>{pct}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <section class="report__card report__holders">
            <h3>"Top Holders"</h3>
            <table class="report__table">
                <thead>
                    <tr>
                        <th>"Holder"</th>
                        <th>"Chain"</th>
                        <th>"Value"</th>
                        <th>"% of Cap"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </section>
    }
}

fn exchanges_section(coin: CoinData, flows: Option<InflowOutflowData>) -> Option<impl IntoView> {
    if coin.tickers.is_empty() && flows.is_none() {
        return None;
    }
    let (tab, set_tab) = signal(FlowTab::Exchanges);

    let exchanges = coin
        .top_exchanges(TOP_EXCHANGES)
        .into_iter()
        .map(|ticker| {
            let pair = format!("{}/{}", ticker.base, ticker.target);
            view! {
                <tr>
                    <td>{ticker.market.name.clone()}</td>
                    <td>{pair}</td>
                    <td>{format::price(ticker.converted_last)}</td>
                    <td>{format::usd_compact(ticker.converted_volume)}</td>
                </tr>
            }
        })
        .collect_view();

    let flow_rows = flows.map(|flows| {
        flows
            .rows()
            .into_iter()
            .map(|row| view! {
                <tr>
                    <td>{row.label}</td>
                    <td>{format::usd_compact(row.previous_24h)}</td>
                    <td>{format::usd_compact(row.current)}</td>
                </tr>
            })
            .collect_view()
    });

    Some(view! {
        <section class="report__card report__exchanges">
            <div class="report__tabs">
                <button
                    type="button"
                    class="report__tab"
                    class:report__tab--active=move || tab.get() == FlowTab::Exchanges
                    on:click=move |_| set_tab.set(FlowTab::Exchanges)
                >
                    "Exchanges"
                </button>
                <button
                    type="button"
                    class="report__tab"
                    class:report__tab--active=move || tab.get() == FlowTab::Inflow
                    on:click=move |_| set_tab.set(FlowTab::Inflow)
                >
                    "Inflow / Outflow"
                </button>
            </div>
            <table class="report__table" class:hidden=move || tab.get() != FlowTab::Exchanges>
                <thead>
                    <tr>
                        <th>"Exchange"</th>
                        <th>"Pair"</th>
                        <th>"Price"</th>
                        <th>"Volume"</th>
                    </tr>
                </thead>
                <tbody>{exchanges}</tbody>
            </table>
            <div class:hidden=move || tab.get() != FlowTab::Inflow>
                {match flow_rows {
                    Some(rows) => view! {
                        <table class="report__table">
                            <thead>
                                <tr>
                                    <th>"Flow"</th>
                                    <th>"Previous 24h"</th>
                                    <th>"Current"</th>
                                </tr>
                            </thead>
                            <tbody>{rows}</tbody>
                        </table>
                    }
                        .into_any(),
                    None => view! { <p class="report__empty">"No flow data available."</p> }.into_any(),
                }}
            </div>
        </section>
    })
}

fn treasury_section(treasury: TreasuryData) -> impl IntoView {
    view! {
        <section class="report__card report__treasury">
            <h3>"Institutional Holdings"</h3>
            <div class="report__stats">
                {stat("Total Holdings", format::supply_compact(treasury.total_holdings))}
                {stat("Total Value", format::usd_compact(treasury.total_value_usd))}
                {stat("Market Cap Dominance", format::percent(treasury.market_cap_dominance))}
            </div>
            <table class="report__table">
                <thead>
                    <tr>
                        <th>"Company"</th>
                        <th>"Country"</th>
                        <th>"Holdings"</th>
                        <th>"Value"</th>
                        <th>"% of Supply"</th>
                    </tr>
                </thead>
                <tbody>
                    {treasury
                        .companies
                        .into_iter()
                        .map(|company| view! {
                            <tr>
                                <td>{company.name}</td>
                                <td>{company.country}</td>
                                <td>{format::supply_compact(company.total_holdings)}</td>
                                <td>{format::usd_compact(company.total_current_value_usd)}</td>
                                <td>{format::percent(company.percentage_of_total_supply)}</td>
                            </tr>
                        })
                        .collect_view()}
                </tbody>
            </table>
        </section>
    }
}

fn community_section(community: CommunityData) -> impl IntoView {
    let optional = |value: Option<u64>| value.map(|v| format::group_thousands(v as f64)).unwrap_or_else(|| "-".to_string());
    view! {
        <section class="report__card report__community">
            <h3>"Community"</h3>
            <div class="report__stats">
                {stat("Reddit Subscribers", format::group_thousands(community.reddit_subscribers as f64))}
                {stat("Active Accounts (48h)", format::group_thousands(community.reddit_accounts_active_48h))}
                {stat("Posts (48h)", format!("{:.1}", community.reddit_average_posts_48h))}
                {stat("Comments (48h)", format!("{:.1}", community.reddit_average_comments_48h))}
                {stat("Telegram Members", optional(community.telegram_channel_user_count))}
                {stat("Facebook Likes", optional(community.facebook_likes))}
            </div>
        </section>
    }
}

fn developer_section(developer: DeveloperData) -> impl IntoView {
    let changes = &developer.code_additions_deletions_4_weeks;
    let code_changes = format!(
        "+{} / {}",
        changes.additions.unwrap_or_default(),
        changes.deletions.unwrap_or_default()
    );
    view! {
        <section class="report__card report__developer">
            <h3>"Developer Activity"</h3>
            <div class="report__stats">
                {stat("Stars", format::group_thousands(developer.stars as f64))}
                {stat("Forks", format::group_thousands(developer.forks as f64))}
                {stat("Commits (4 weeks)", developer.commit_count_4_weeks.to_string())}
                {stat("Merged PRs", developer.pull_requests_merged.to_string())}
                {stat("Contributors", developer.pull_request_contributors.to_string())}
                {stat("Issues Closed", format!("{}/{}", developer.closed_issues, developer.total_issues))}
                {stat("Code Changes (4 weeks)", code_changes)}
            </div>
        </section>
    }
}
