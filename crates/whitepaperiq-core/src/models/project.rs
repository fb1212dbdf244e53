//! Project Models

use serde::{Deserialize, Serialize};

use super::analysis::{Analysis, AnalysisStatus};
use super::null_as_default;
use super::pagination::{push_number, push_text, QueryParams};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub symbol: Option<String>,
    pub slug: Option<String>,
    pub coingecko_id: Option<String>,
    pub image_url: Option<String>,
    pub data_source: Option<String>,
    pub created_at: Option<String>,
}

impl Project {
    /// Identifier used in `/token/:ticker` routes
    pub fn route_key(&self) -> &str {
        self.coingecko_id
            .as_deref()
            .or(self.slug.as_deref())
            .unwrap_or(&self.id)
    }

    pub fn symbol_upper(&self) -> String {
        self.symbol.as_deref().unwrap_or_default().to_uppercase()
    }
}

/// Either a CoinGecko id or manual project fields
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coingecko_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whitepaper_url: Option<String>,
}

impl CreateProjectPayload {
    pub fn from_coingecko(id: &str) -> Self {
        Self {
            coingecko_id: Some(id.to_string()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectResponse {
    pub project: Project,
    /// false when an existing project was returned
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_new: bool,
}

/// Short analysis record used in lists and history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisSummary {
    pub id: String,
    pub status: AnalysisStatus,
    pub created_at: String,
    pub risk_level: Option<String>,
    pub total_score: Option<f64>,
    pub max_score: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectListItem {
    #[serde(flatten)]
    pub project: Project,
    pub latest_analysis: Option<AnalysisSummary>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub analysis_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectWithLatestAnalysis {
    #[serde(flatten)]
    pub project: Project,
    pub latest_analysis: Option<Analysis>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListProjectsParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub data_source: Option<String>,
    pub search: Option<String>,
    pub analysis_status: Option<AnalysisStatus>,
}

impl QueryParams for ListProjectsParams {
    fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        push_number(&mut pairs, "page", self.page);
        push_number(&mut pairs, "limit", self.limit);
        push_text(&mut pairs, "dataSource", self.data_source.as_deref());
        push_text(&mut pairs, "search", self.search.as_deref());
        push_text(&mut pairs, "analysisStatus", self.analysis_status.map(|s| s.as_str()));
        pairs
    }
}
