//! Analysis Models
//!
//! The report itself is computed by the backend; these types only carry it.
//! Every part of `resultData` is optional so a partial report still renders.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::null_as_default;
use super::pagination::{push_number, push_text, QueryParams};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnalysisStatus {
    Pending,
    Processing,
    Completed,
    Failed,
}

impl AnalysisStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisStatus::Pending => "PENDING",
            AnalysisStatus::Processing => "PROCESSING",
            AnalysisStatus::Completed => "COMPLETED",
            AnalysisStatus::Failed => "FAILED",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AnalysisStatus::Pending => "Pending",
            AnalysisStatus::Processing => "Processing",
            AnalysisStatus::Completed => "Completed",
            AnalysisStatus::Failed => "Failed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "PENDING" => Some(AnalysisStatus::Pending),
            "PROCESSING" => Some(AnalysisStatus::Processing),
            "COMPLETED" => Some(AnalysisStatus::Completed),
            "FAILED" => Some(AnalysisStatus::Failed),
            _ => None,
        }
    }
}

/// Analysis state as the token page shows it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AnalysisUiStatus {
    #[default]
    Idle,
    Loading,
    Completed,
    Error,
}

impl AnalysisUiStatus {
    pub fn from_status(status: AnalysisStatus) -> Self {
        match status {
            AnalysisStatus::Pending | AnalysisStatus::Processing => AnalysisUiStatus::Loading,
            AnalysisStatus::Completed => AnalysisUiStatus::Completed,
            AnalysisStatus::Failed => AnalysisUiStatus::Error,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisProjectRef {
    pub id: String,
    pub name: String,
    pub symbol: Option<String>,
    pub image_url: Option<String>,
    pub slug: Option<String>,
    pub coingecko_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub id: String,
    pub organization_id: String,
    pub project_id: String,
    pub created_by: String,
    pub status: AnalysisStatus,
    pub result_data: Option<AnalysisResultData>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ai_token_usage: u64,
    pub error_message: Option<String>,
    pub created_at: String,
    pub project: Option<AnalysisProjectRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAnalysisPayload {
    pub project_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisUser {
    pub id: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisListItem {
    pub id: String,
    pub status: AnalysisStatus,
    pub created_at: String,
    pub risk_level: Option<String>,
    pub total_score: Option<f64>,
    pub max_score: Option<f64>,
    pub project: AnalysisProjectRef,
    pub user: Option<AnalysisUser>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListAnalysesParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub project_id: Option<String>,
}

impl QueryParams for ListAnalysesParams {
    fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        push_number(&mut pairs, "page", self.page);
        push_number(&mut pairs, "limit", self.limit);
        push_text(&mut pairs, "projectId", self.project_id.as_deref());
        pairs
    }
}

// ========================
// Report payload
// ========================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalysisResultData {
    pub coin_data: Option<CoinData>,
    pub top_holders_data: Option<TopHoldersData>,
    pub treasury_data: Option<TreasuryData>,
    pub inflow_outflow_data: Option<InflowOutflowData>,
    pub ai_insights: Option<AiInsights>,
    pub detailed_analysis: Option<DetailedAnalysis>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CoinData {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub symbol: String,
    #[serde(deserialize_with = "null_as_default")]
    pub image: CoinImage,
    #[serde(deserialize_with = "null_as_default")]
    pub links: CoinLinks,
    #[serde(deserialize_with = "null_as_default")]
    pub tickers: Vec<Ticker>,
    pub market_data: Option<MarketData>,
    pub wti_analysis: Option<WtiAnalysis>,
    pub community_data: Option<CommunityData>,
    pub developer_data: Option<DeveloperData>,
    pub genesis_date: Option<String>,
}

impl CoinData {
    /// Exchanges ordered by converted volume, largest first
    pub fn top_exchanges(&self, limit: usize) -> Vec<&Ticker> {
        let mut tickers: Vec<&Ticker> = self.tickers.iter().collect();
        tickers.sort_by(|a, b| b.converted_volume.total_cmp(&a.converted_volume));
        tickers.truncate(limit);
        tickers
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoinImage {
    #[serde(deserialize_with = "null_as_default")]
    pub large: String,
    #[serde(deserialize_with = "null_as_default")]
    pub small: String,
    #[serde(deserialize_with = "null_as_default")]
    pub thumb: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CoinLinks {
    #[serde(deserialize_with = "null_as_default")]
    pub homepage: Vec<String>,
    pub whitepaper: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub repos_url: ReposUrl,
    #[serde(deserialize_with = "null_as_default")]
    pub blockchain_site: Vec<String>,
    pub twitter_screen_name: Option<String>,
    pub subreddit_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReposUrl {
    #[serde(deserialize_with = "null_as_default")]
    pub github: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub bitbucket: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Ticker {
    #[serde(deserialize_with = "null_as_default")]
    pub base: String,
    #[serde(deserialize_with = "null_as_default")]
    pub target: String,
    #[serde(deserialize_with = "null_as_default")]
    pub market: TickerMarket,
    pub trade_url: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub wti_score: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub converted_last: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub converted_volume: f64,
    pub bid_ask_spread_percentage: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TickerMarket {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MarketData {
    #[serde(deserialize_with = "null_as_default")]
    pub current_price: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub price_change_24h: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub price_change_percentage_24h: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub market_cap: f64,
    pub market_cap_rank: Option<u32>,
    pub fully_diluted_valuation: Option<f64>,
    #[serde(deserialize_with = "null_as_default")]
    pub total_volume: f64,
    pub total_supply: Option<f64>,
    /// None means uncapped
    pub max_supply: Option<f64>,
    #[serde(deserialize_with = "null_as_default")]
    pub circulating_supply: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub high_24h: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub low_24h: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub ath: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub ath_change_percentage: f64,
    pub ath_date: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub atl: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub atl_change_percentage: f64,
    pub atl_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WtiAnalysis {
    #[serde(deserialize_with = "null_as_default")]
    pub score: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub verdict: String,
    #[serde(deserialize_with = "null_as_default")]
    pub risk_level: String,
    #[serde(deserialize_with = "null_as_default")]
    pub details: WtiDetails,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WtiDetails {
    #[serde(deserialize_with = "null_as_default")]
    pub turnover_ratio: String,
    #[serde(deserialize_with = "null_as_default")]
    pub turnover_status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub weighted_spread: String,
    #[serde(deserialize_with = "null_as_default")]
    pub penalty_multiplier: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub analyzed_ticker_count: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CommunityData {
    #[serde(deserialize_with = "null_as_default")]
    pub reddit_subscribers: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub reddit_average_posts_48h: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub reddit_accounts_active_48h: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub reddit_average_comments_48h: f64,
    pub telegram_channel_user_count: Option<u64>,
    pub facebook_likes: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeveloperData {
    #[serde(deserialize_with = "null_as_default")]
    pub forks: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub stars: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub subscribers: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_issues: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub closed_issues: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub commit_count_4_weeks: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub pull_requests_merged: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub pull_request_contributors: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub code_additions_deletions_4_weeks: CodeChanges,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodeChanges {
    pub additions: Option<i64>,
    pub deletions: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TopHoldersData {
    #[serde(deserialize_with = "null_as_default")]
    pub token: TokenRef,
    /// Keyed by chain name
    #[serde(deserialize_with = "null_as_default")]
    pub address_top_holders: BTreeMap<String, ChainHolders>,
}

impl TopHoldersData {
    /// Holders across all chains ordered by share of market cap
    pub fn top_holders(&self, limit: usize) -> Vec<&Holder> {
        let mut holders: Vec<&Holder> = self
            .address_top_holders
            .values()
            .flat_map(|chain| chain.holders.iter())
            .collect();
        holders.sort_by(|a, b| b.pct_of_cap.total_cmp(&a.pct_of_cap));
        holders.truncate(limit);
        holders
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenRef {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub symbol: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChainHolders {
    #[serde(deserialize_with = "null_as_default")]
    pub holders: Vec<Holder>,
    #[serde(deserialize_with = "null_as_default")]
    pub total_pct_of_cap: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Holder {
    #[serde(deserialize_with = "null_as_default")]
    pub address: HolderAddress,
    #[serde(deserialize_with = "null_as_default")]
    pub balance: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub usd: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub pct_of_cap: f64,
}

impl Holder {
    /// Entity name, then address label, then the raw address
    pub fn label(&self) -> &str {
        self.address
            .entity
            .as_ref()
            .map(|e| e.name.as_str())
            .or(self.address.label.as_ref().map(|l| l.name.as_str()))
            .unwrap_or(&self.address.address)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HolderAddress {
    #[serde(deserialize_with = "null_as_default")]
    pub chain: String,
    #[serde(deserialize_with = "null_as_default")]
    pub address: String,
    #[serde(deserialize_with = "null_as_default")]
    pub contract: bool,
    pub label: Option<HolderLabel>,
    pub entity: Option<HolderEntity>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HolderLabel {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HolderEntity {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
    pub website: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TreasuryData {
    #[serde(deserialize_with = "null_as_default")]
    pub companies: Vec<CompanyHolding>,
    #[serde(deserialize_with = "null_as_default")]
    pub total_holdings: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_value_usd: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub market_cap_dominance: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompanyHolding {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub country: String,
    #[serde(deserialize_with = "null_as_default")]
    pub total_holdings: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_entry_value_usd: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_current_value_usd: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub percentage_of_total_supply: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InflowOutflowData {
    #[serde(deserialize_with = "null_as_default")]
    pub token: FlowToken,
    #[serde(deserialize_with = "null_as_default")]
    pub current: FlowSnapshot,
    #[serde(deserialize_with = "null_as_default")]
    pub previous: FlowSnapshot,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FlowToken {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub symbol: String,
    #[serde(deserialize_with = "null_as_default")]
    pub market_cap: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FlowSnapshot {
    #[serde(deserialize_with = "null_as_default")]
    pub price: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub inflow_cex_volume: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub outflow_cex_volume: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub inflow_dex_volume: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub outflow_dex_volume: f64,
}

/// One row of the inflow/outflow table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowRow {
    pub label: &'static str,
    pub previous_24h: f64,
    pub current: f64,
}

impl InflowOutflowData {
    pub fn rows(&self) -> [FlowRow; 4] {
        let (p, c) = (&self.previous, &self.current);
        [
            FlowRow { label: "DEX Inf", previous_24h: p.inflow_dex_volume, current: c.inflow_dex_volume },
            FlowRow { label: "DEX Outf", previous_24h: p.outflow_dex_volume, current: c.outflow_dex_volume },
            FlowRow { label: "CEX Inf", previous_24h: p.inflow_cex_volume, current: c.inflow_cex_volume },
            FlowRow { label: "CEX Outf", previous_24h: p.outflow_cex_volume, current: c.outflow_cex_volume },
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiInsights {
    #[serde(deserialize_with = "null_as_default")]
    pub data: AiInsightsBody,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AiInsightsBody {
    #[serde(deserialize_with = "null_as_default")]
    pub summary: String,
    #[serde(deserialize_with = "null_as_default")]
    pub insights: Vec<AiInsight>,
    pub generated_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiInsight {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub summary: String,
    #[serde(deserialize_with = "null_as_default")]
    pub category: String,
    pub details: serde_json::Value,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetailedAnalysis {
    #[serde(deserialize_with = "null_as_default")]
    pub data: DetailedAnalysisBody,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DetailedAnalysisBody {
    #[serde(deserialize_with = "null_as_default")]
    pub analysis: Assessment,
    #[serde(deserialize_with = "null_as_default")]
    pub max_score: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_score: f64,
    pub generated_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Assessment {
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub criteria: Vec<Criteria>,
    #[serde(deserialize_with = "null_as_default")]
    pub risk_level: String,
    #[serde(deserialize_with = "null_as_default")]
    pub overall_assessment: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Criteria {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub score: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub max_score: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub analysis: String,
    #[serde(deserialize_with = "null_as_default")]
    pub strengths: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub weaknesses: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_partial_result_data_parses() {
        let json = serde_json::json!({
            "coinData": {
                "name": "Bitcoin",
                "symbol": "btc",
                "marketData": { "currentPrice": 65000.5, "marketCap": 1.2e12, "maxSupply": null }
            },
            "aiInsights": { "data": { "summary": "Solid", "insights": [] } }
        });
        let data: AnalysisResultData = serde_json::from_value(json).unwrap();

        let coin = data.coin_data.unwrap();
        assert_eq!(coin.name, "Bitcoin");
        let market = coin.market_data.unwrap();
        assert_eq!(market.current_price, 65000.5);
        assert_eq!(market.max_supply, None);
        assert_eq!(data.ai_insights.unwrap().data.summary, "Solid");
        assert!(data.treasury_data.is_none());
    }

    #[test]
    fn test_top_holders_across_chains() {
        let json = serde_json::json!({
            "token": { "name": "Token", "symbol": "TKN" },
            "addressTopHolders": {
                "ethereum": { "holders": [
                    { "address": { "chain": "ethereum", "address": "0xaaa", "contract": false }, "balance": 1.0, "usd": 1.0, "pctOfCap": 2.5 },
                    { "address": { "chain": "ethereum", "address": "0xbbb", "contract": false, "label": { "name": "Binance 7" } }, "balance": 1.0, "usd": 1.0, "pctOfCap": 9.0 }
                ], "totalPctOfCap": 11.5 },
                "solana": { "holders": [
                    { "address": { "chain": "solana", "address": "So1", "contract": false, "entity": { "name": "Jump", "type": "fund" } }, "balance": 1.0, "usd": 1.0, "pctOfCap": 4.0 }
                ], "totalPctOfCap": 4.0 }
            }
        });
        let data: TopHoldersData = serde_json::from_value(json).unwrap();
        let labels: Vec<&str> = data.top_holders(2).iter().map(|h| h.label()).collect();

        assert_eq!(labels, vec!["Binance 7", "Jump"]);
    }

    #[test]
    fn test_top_exchanges_by_volume() {
        let coin = CoinData {
            tickers: vec![
                Ticker { market: TickerMarket { name: "Small".into() }, converted_volume: 10.0, ..Ticker::default() },
                Ticker { market: TickerMarket { name: "Big".into() }, converted_volume: 1000.0, ..Ticker::default() },
                Ticker { market: TickerMarket { name: "Mid".into() }, converted_volume: 100.0, ..Ticker::default() },
            ],
            ..CoinData::default()
        };
        let names: Vec<&str> = coin.top_exchanges(2).iter().map(|t| t.market.name.as_str()).collect();
        assert_eq!(names, vec!["Big", "Mid"]);
    }

    #[test]
    fn test_flow_rows_order() {
        let data = InflowOutflowData {
            current: FlowSnapshot { inflow_dex_volume: 1.0, outflow_dex_volume: 2.0, inflow_cex_volume: 3.0, outflow_cex_volume: 4.0, price: 0.0 },
            ..InflowOutflowData::default()
        };
        let rows = data.rows();
        assert_eq!(rows.map(|r| r.label), ["DEX Inf", "DEX Outf", "CEX Inf", "CEX Outf"]);
        assert_eq!(rows.map(|r| r.current), [1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_ui_status_mapping() {
        assert_eq!(AnalysisUiStatus::from_status(AnalysisStatus::Processing), AnalysisUiStatus::Loading);
        assert_eq!(AnalysisUiStatus::from_status(AnalysisStatus::Completed), AnalysisUiStatus::Completed);
        assert_eq!(AnalysisUiStatus::from_status(AnalysisStatus::Failed), AnalysisUiStatus::Error);
    }
}
