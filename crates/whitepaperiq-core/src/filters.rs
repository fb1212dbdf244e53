//! List filters for the analyses and search views

use crate::models::{AnalysisListItem, AnalysisStatus};

pub const AUTOCOMPLETE_MIN_CHARS: usize = 2;
pub const AUTOCOMPLETE_LIMIT: u32 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskBucket {
    Low,
    Medium,
    High,
    Unknown,
}

impl RiskBucket {
    /// CSS modifier and display text
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskBucket::Low => "low",
            RiskBucket::Medium => "medium",
            RiskBucket::High => "high",
            RiskBucket::Unknown => "unknown",
        }
    }
}

/// Free-form risk text from the backend into a bucket
pub fn normalize_risk_level(risk: Option<&str>) -> RiskBucket {
    let Some(value) = risk.filter(|r| !r.is_empty()) else {
        return RiskBucket::Unknown;
    };
    let value = value.to_lowercase();
    if value.contains("high") {
        RiskBucket::High
    } else if value.contains("medium") || value.contains("moderate") {
        RiskBucket::Medium
    } else if value.contains("low") {
        RiskBucket::Low
    } else {
        RiskBucket::Unknown
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserOption {
    pub id: String,
    pub label: String,
}

/// Users that appear in the list, in first-seen order
pub fn distinct_users(analyses: &[AnalysisListItem]) -> Vec<UserOption> {
    let mut users: Vec<UserOption> = Vec::new();
    for user in analyses.iter().filter_map(|a| a.user.as_ref()) {
        let label = user
            .full_name
            .as_deref()
            .filter(|n| !n.is_empty())
            .or(user.email.as_deref().filter(|e| !e.is_empty()))
            .unwrap_or("Unknown user")
            .to_string();
        match users.iter_mut().find(|u| u.id == user.id) {
            Some(existing) => existing.label = label,
            None => users.push(UserOption { id: user.id.clone(), label }),
        }
    }
    users
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum UserFilter {
    #[default]
    All,
    User(String),
}

impl UserFilter {
    /// Select value `"all"` means no filter
    pub fn from_select(value: &str) -> Self {
        if value == "all" || value.is_empty() {
            UserFilter::All
        } else {
            UserFilter::User(value.to_string())
        }
    }

    pub fn select_value(&self) -> &str {
        match self {
            UserFilter::All => "all",
            UserFilter::User(id) => id,
        }
    }
}

/// Drop failed analyses, then filter by user and project name/symbol
pub fn filter_analyses<'a>(
    analyses: &'a [AnalysisListItem],
    user: &UserFilter,
    search: &str,
) -> Vec<&'a AnalysisListItem> {
    let term = (!search.trim().is_empty()).then(|| search.to_lowercase());

    analyses
        .iter()
        .filter(|a| match user {
            UserFilter::All => true,
            UserFilter::User(id) => a.user.as_ref().is_some_and(|u| &u.id == id),
        })
        .filter(|a| a.status != AnalysisStatus::Failed)
        .filter(|a| {
            let Some(term) = &term else { return true };
            let name = a.project.name.to_lowercase();
            let symbol = a.project.symbol.as_deref().unwrap_or_default().to_lowercase();
            name.contains(term.as_str()) || symbol.contains(term.as_str())
        })
        .collect()
}

/// Query to autocomplete, or `None` while the input is too short
pub fn autocomplete_term(input: &str) -> Option<&str> {
    let trimmed = input.trim();
    (trimmed.chars().count() >= AUTOCOMPLETE_MIN_CHARS).then_some(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AnalysisProjectRef, AnalysisUser};
    use pretty_assertions::assert_eq;

    fn item(id: &str, name: &str, symbol: &str, status: AnalysisStatus, user: Option<(&str, Option<&str>, Option<&str>)>) -> AnalysisListItem {
        AnalysisListItem {
            id: id.into(),
            status,
            created_at: "2025-01-05T10:00:00Z".into(),
            risk_level: None,
            total_score: None,
            max_score: None,
            project: AnalysisProjectRef {
                id: format!("p-{id}"),
                name: name.into(),
                symbol: Some(symbol.into()),
                image_url: None,
                slug: None,
                coingecko_id: None,
            },
            user: user.map(|(id, full_name, email)| AnalysisUser {
                id: id.into(),
                full_name: full_name.map(Into::into),
                email: email.map(Into::into),
            }),
        }
    }

    fn sample() -> Vec<AnalysisListItem> {
        vec![
            item("1", "Bitcoin", "btc", AnalysisStatus::Completed, Some(("u1", Some("Ana"), Some("ana@x.io")))),
            item("2", "Ethereum", "eth", AnalysisStatus::Failed, Some(("u2", None, Some("bo@x.io")))),
            item("3", "Tether", "usdt", AnalysisStatus::Processing, Some(("u2", None, Some("bo@x.io")))),
            item("4", "Solana", "sol", AnalysisStatus::Completed, None),
        ]
    }

    #[test]
    fn test_normalize_risk_level() {
        assert_eq!(normalize_risk_level(Some("HIGH RISK")), RiskBucket::High);
        assert_eq!(normalize_risk_level(Some("Moderate")), RiskBucket::Medium);
        assert_eq!(normalize_risk_level(Some("medium")), RiskBucket::Medium);
        assert_eq!(normalize_risk_level(Some("low")), RiskBucket::Low);
        assert_eq!(normalize_risk_level(Some("n/a")), RiskBucket::Unknown);
        assert_eq!(normalize_risk_level(None), RiskBucket::Unknown);
    }

    #[test]
    fn test_distinct_users() {
        let users = distinct_users(&sample());
        assert_eq!(
            users,
            vec![
                UserOption { id: "u1".into(), label: "Ana".into() },
                UserOption { id: "u2".into(), label: "bo@x.io".into() },
            ]
        );
    }

    #[test]
    fn test_failed_are_dropped() {
        let analyses = sample();
        let ids: Vec<&str> = filter_analyses(&analyses, &UserFilter::All, "")
            .iter()
            .map(|a| a.id.as_str())
            .collect();
        assert_eq!(ids, vec!["1", "3", "4"]);
    }

    #[test]
    fn test_filter_by_user_and_search() {
        let analyses = sample();
        let by_user: Vec<&str> = filter_analyses(&analyses, &UserFilter::User("u2".into()), "")
            .iter()
            .map(|a| a.id.as_str())
            .collect();
        assert_eq!(by_user, vec!["3"]);

        let by_symbol: Vec<&str> = filter_analyses(&analyses, &UserFilter::All, "SOL")
            .iter()
            .map(|a| a.id.as_str())
            .collect();
        assert_eq!(by_symbol, vec!["4"]);

        let by_name: Vec<&str> = filter_analyses(&analyses, &UserFilter::All, "coin")
            .iter()
            .map(|a| a.id.as_str())
            .collect();
        assert_eq!(by_name, vec!["1"]);
    }

    #[test]
    fn test_user_filter_select_values() {
        assert_eq!(UserFilter::from_select("all"), UserFilter::All);
        assert_eq!(UserFilter::from_select("u1").select_value(), "u1");
    }

    #[test]
    fn test_autocomplete_term() {
        assert_eq!(autocomplete_term(" b "), None);
        assert_eq!(autocomplete_term(" bt "), Some("bt"));
    }
}
