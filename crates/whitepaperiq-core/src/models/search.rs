//! Search Models

use serde::{Deserialize, Serialize};

use super::null_as_default;
use super::pagination::Pagination;

/// Coin match from `GET /search` (snake_case fields, as sent by the backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub market_cap_rank: Option<u32>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchCategory {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub projects: Vec<SearchResult>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub categories: Vec<SearchCategory>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendingCoin {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub market_cap_rank: Option<u32>,
    pub image: Option<String>,
    pub thumb: Option<String>,
    pub large: Option<String>,
    pub market_cap: Option<f64>,
    pub price_change_24h: Option<f64>,
    pub price_btc: Option<f64>,
    pub score: Option<u32>,
}

impl TrendingCoin {
    pub fn image(&self) -> Option<&str> {
        self.image
            .as_deref()
            .or(self.large.as_deref())
            .or(self.thumb.as_deref())
    }
}

/// `data` of `GET /search/trending`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub(crate) struct TrendingPage {
    #[serde(default, deserialize_with = "null_as_default")]
    pub projects: Vec<TrendingCoin>,
    pub pagination: Option<Pagination>,
}
