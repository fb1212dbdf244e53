//! Response Envelope
//!
//! Every JSON endpoint answers `{ success, data, message?, pagination? }`.

use serde::Deserialize;

use crate::error::{ApiError, ApiResult};
use crate::models::{Paginated, Pagination};

#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
    pub pagination: Option<Pagination>,
}

impl<T> Envelope<T> {
    /// `data` when the server reported success, else the server message
    /// (or `fallback` when it sent none).
    pub fn into_data(self, fallback: &str) -> ApiResult<T> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            _ => Err(rejected(self.message, fallback)),
        }
    }

    /// Only the success flag matters (e.g. invitations return no data)
    pub fn into_ack(self, fallback: &str) -> ApiResult<()> {
        if self.success {
            Ok(())
        } else {
            Err(rejected(self.message, fallback))
        }
    }
}

impl<T> Envelope<Vec<T>> {
    /// List data plus pagination, synthesizing one page when absent
    pub fn into_page(self, page: Option<u32>, limit: Option<u32>, fallback: &str) -> ApiResult<Paginated<T>> {
        let pagination = self.pagination;
        let data = self.into_data(fallback)?;
        let pagination = pagination.unwrap_or_else(|| Pagination::synthesize(page, limit, data.len()));
        Ok(Paginated { data, pagination })
    }
}

fn rejected(message: Option<String>, fallback: &str) -> ApiError {
    ApiError::Rejected(
        message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| fallback.to_string()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse<T: for<'de> Deserialize<'de>>(json: &str) -> Envelope<T> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_success_with_data() {
        let envelope: Envelope<String> = parse(r#"{"success":true,"data":"ok"}"#);
        assert_eq!(envelope.into_data("fallback").unwrap(), "ok");
    }

    #[test]
    fn test_success_without_data_is_rejected() {
        let envelope: Envelope<String> = parse(r#"{"success":true}"#);
        assert_eq!(envelope.into_data("Failed to fetch"), Err(ApiError::Rejected("Failed to fetch".into())));
    }

    #[test]
    fn test_failure_prefers_server_message() {
        let envelope: Envelope<String> = parse(r#"{"success":false,"data":"x","message":"Quota exceeded"}"#);
        assert_eq!(envelope.into_data("fallback").unwrap_err().to_string(), "Quota exceeded");
    }

    #[test]
    fn test_ack_ignores_data() {
        let envelope: Envelope<serde_json::Value> = parse(r#"{"success":true,"message":"Invitation sent"}"#);
        assert!(envelope.into_ack("fallback").is_ok());
    }

    #[test]
    fn test_page_uses_server_pagination() {
        let envelope: Envelope<Vec<u32>> =
            parse(r#"{"success":true,"data":[1,2],"pagination":{"page":3,"limit":2,"total":9,"totalPages":5}}"#);
        let page = envelope.into_page(Some(1), Some(10), "fallback").unwrap();
        assert_eq!(page.pagination, Pagination { page: 3, limit: 2, total: 9, total_pages: 5 });
    }

    #[test]
    fn test_page_synthesized_when_missing() {
        let envelope: Envelope<Vec<u32>> = parse(r#"{"success":true,"data":[1,2,3]}"#);
        let page = envelope.into_page(Some(2), Some(2), "fallback").unwrap();
        assert_eq!(page.data, vec![1, 2, 3]);
        assert_eq!(page.pagination, Pagination { page: 2, limit: 2, total: 3, total_pages: 2 });
    }
}
