//! Analysis endpoints

use crate::client::ApiClient;
use crate::error::ApiResult;
use crate::links::encode_component;
use crate::models::{Analysis, AnalysisListItem, CreateAnalysisPayload, ListAnalysesParams, Paginated, QueryParams};
use crate::storage::SessionStorage;
use crate::transport::{HttpTransport, Method};

impl<T: HttpTransport, S: SessionStorage> ApiClient<T, S> {
    /// Runs the analysis synchronously on the backend; uses the long timeout
    pub async fn create_analysis(&self, project_id: &str) -> ApiResult<Analysis> {
        let payload = CreateAnalysisPayload {
            project_id: project_id.to_string(),
        };
        let request = self
            .request(Method::Post, "/analyses")
            .json(&payload)?
            .timeout(self.config().analysis_timeout);
        self.fetch_data(request, "Failed to create analysis").await
    }

    pub async fn analysis(&self, id: &str) -> ApiResult<Analysis> {
        let path = format!("/analyses/{}", encode_component(id));
        self.fetch_data(self.request(Method::Get, path), "Failed to fetch analysis")
            .await
    }

    pub async fn list_analyses(&self, params: &ListAnalysesParams) -> ApiResult<Paginated<AnalysisListItem>> {
        let request = self.request(Method::Get, "/analyses").query(params.query_pairs());
        self.fetch::<Vec<AnalysisListItem>>(request)
            .await?
            .into_page(params.page, params.limit, "Failed to fetch analyses")
    }

    /// PDF report bytes (not enveloped)
    pub async fn download_analysis_pdf(&self, id: &str) -> ApiResult<Vec<u8>> {
        let path = format!("/analyses/{}/pdf", encode_component(id));
        let response = self.execute(self.request(Method::Get, path)).await?;
        Ok(response.body)
    }
}
