//! Pagination
//!
//! List endpoints put `pagination` next to `data` in the envelope. When the
//! backend leaves it out, a single page is synthesized from the data.

use serde::{Deserialize, Serialize};

pub(crate) const DEFAULT_PAGE_SIZE: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: u32,
    pub total_pages: u32,
}

impl Pagination {
    /// Pagination for a response that did not carry one
    pub fn synthesize(page: Option<u32>, limit: Option<u32>, len: usize) -> Self {
        let limit = limit.filter(|l| *l > 0).unwrap_or(DEFAULT_PAGE_SIZE);
        let total = u32::try_from(len).unwrap_or(u32::MAX);
        Self {
            page: page.filter(|p| *p > 0).unwrap_or(1),
            limit,
            total,
            total_pages: total.div_ceil(limit),
        }
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Number of page buttons to show, never more than `max`
    pub fn visible_pages(&self, max: u32) -> u32 {
        self.total_pages.min(max)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub pagination: Pagination,
}

/// Turns a params struct into query pairs; unset values are skipped
pub trait QueryParams {
    fn query_pairs(&self) -> Vec<(String, String)>;
}

pub(crate) fn push_number(pairs: &mut Vec<(String, String)>, key: &str, value: Option<u32>) {
    if let Some(value) = value.filter(|v| *v > 0) {
        pairs.push((key.to_string(), value.to_string()));
    }
}

pub(crate) fn push_text(pairs: &mut Vec<(String, String)>, key: &str, value: Option<&str>) {
    if let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) {
        pairs.push((key.to_string(), value.to_string()));
    }
}

/// Page/limit only, as used by history endpoints
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HistoryParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl QueryParams for HistoryParams {
    fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        push_number(&mut pairs, "page", self.page);
        push_number(&mut pairs, "limit", self.limit);
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthesize_defaults() {
        let pagination = Pagination::synthesize(None, None, 23);
        assert_eq!(pagination, Pagination { page: 1, limit: 10, total: 23, total_pages: 3 });
        assert!(pagination.has_next());
        assert!(!pagination.has_previous());
    }

    #[test]
    fn test_synthesize_empty() {
        let pagination = Pagination::synthesize(Some(2), Some(20), 0);
        assert_eq!(pagination.total_pages, 0);
        assert_eq!(pagination.page, 2);
        assert!(!pagination.has_next());
    }

    #[test]
    fn test_visible_pages_capped() {
        let pagination = Pagination { page: 1, limit: 20, total: 500, total_pages: 25 };
        assert_eq!(pagination.visible_pages(10), 10);
        let small = Pagination { page: 1, limit: 20, total: 30, total_pages: 2 };
        assert_eq!(small.visible_pages(10), 2);
    }

    #[test]
    fn test_history_params_skip_unset() {
        assert!(HistoryParams::default().query_pairs().is_empty());
        let pairs = HistoryParams { page: Some(2), limit: Some(0) }.query_pairs();
        assert_eq!(pairs, vec![("page".to_string(), "2".to_string())]);
    }
}
