//! App route and link builders

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::models::{AnalysisProjectRef, Project};

/// Characters `encodeURIComponent` leaves alone
const COMPONENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT_ENCODE_SET).to_string()
}

/// Shareable link for a pending invitation
pub fn invite_link(origin: &str, token: &str) -> String {
    format!("{}/invite/{}", origin.trim_end_matches('/'), encode_component(token))
}

pub fn search_results_path(query: &str) -> String {
    format!("/search/results?q={}", encode_component(query.trim()))
}

/// `/token/<key>`, optionally pinned to a known project
pub fn token_path(key: &str, project_id: Option<&str>) -> String {
    let mut path = format!("/token/{}", encode_component(key));
    if let Some(id) = project_id.filter(|id| !id.is_empty()) {
        path.push_str("?projectId=");
        path.push_str(&encode_component(id));
    }
    path
}

pub fn project_path(project: &Project) -> String {
    token_path(project.route_key(), Some(&project.id))
}

pub fn analysis_project_path(project: &AnalysisProjectRef) -> String {
    let key = project
        .coingecko_id
        .as_deref()
        .or(project.slug.as_deref())
        .unwrap_or(&project.id);
    token_path(key, Some(&project.id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_component() {
        assert_eq!(encode_component("bitcoin cash"), "bitcoin%20cash");
        assert_eq!(encode_component("a/b?c=d&e"), "a%2Fb%3Fc%3Dd%26e");
        assert_eq!(encode_component("it's-ok_(1).~*!"), "it's-ok_(1).~*!");
    }

    #[test]
    fn test_invite_link() {
        assert_eq!(
            invite_link("https://app.example.com/", "abc123"),
            "https://app.example.com/invite/abc123"
        );
    }

    #[test]
    fn test_search_results_path_trims() {
        assert_eq!(search_results_path("  shiba inu "), "/search/results?q=shiba%20inu");
    }

    #[test]
    fn test_analysis_project_path_prefers_coingecko_id() {
        let mut project = AnalysisProjectRef {
            id: "p-1".into(),
            name: "Ethereum".into(),
            symbol: Some("eth".into()),
            image_url: None,
            slug: Some("ethereum-slug".into()),
            coingecko_id: Some("ethereum".into()),
        };
        assert_eq!(analysis_project_path(&project), "/token/ethereum?projectId=p-1");

        project.coingecko_id = None;
        assert_eq!(analysis_project_path(&project), "/token/ethereum-slug?projectId=p-1");

        project.slug = None;
        assert_eq!(analysis_project_path(&project), "/token/p-1?projectId=p-1");
    }

    #[test]
    fn test_token_path_without_project() {
        assert_eq!(token_path("solana", None), "/token/solana");
        assert_eq!(token_path("solana", Some("")), "/token/solana");
    }
}
