//! Search endpoints

use crate::client::ApiClient;
use crate::error::ApiResult;
use crate::models::{Paginated, Pagination, SearchResponse, TrendingCoin, TrendingPage};
use crate::storage::SessionStorage;
use crate::transport::{HttpTransport, Method};

pub const DEFAULT_SEARCH_LIMIT: u32 = 10;

impl<T: HttpTransport, S: SessionStorage> ApiClient<T, S> {
    pub async fn search(&self, query: &str, limit: u32) -> ApiResult<SearchResponse> {
        let request = self.request(Method::Get, "/search").query(vec![
            ("q".to_string(), query.to_string()),
            ("limit".to_string(), limit.to_string()),
        ]);
        self.fetch_data(request, "Failed to fetch search results").await
    }

    pub async fn trending(&self, page: u32, limit: u32) -> ApiResult<Paginated<TrendingCoin>> {
        let request = self.request(Method::Get, "/search/trending").query(vec![
            ("page".to_string(), page.to_string()),
            ("limit".to_string(), limit.to_string()),
        ]);
        let data: TrendingPage = self.fetch_data(request, "Failed to fetch trending tokens").await?;
        let pagination = data
            .pagination
            .unwrap_or_else(|| Pagination::synthesize(Some(page), Some(limit), data.projects.len()));
        Ok(Paginated {
            data: data.projects,
            pagination,
        })
    }
}
