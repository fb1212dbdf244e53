//! Project endpoints

use crate::client::ApiClient;
use crate::error::ApiResult;
use crate::links::encode_component;
use crate::models::{
    AnalysisSummary, CreateProjectPayload, CreateProjectResponse, HistoryParams, ListProjectsParams, Paginated,
    ProjectListItem, ProjectWithLatestAnalysis, QueryParams,
};
use crate::storage::SessionStorage;
use crate::transport::{HttpTransport, Method};

impl<T: HttpTransport, S: SessionStorage> ApiClient<T, S> {
    /// Find-or-create; `is_new` tells which happened
    pub async fn create_project(&self, payload: &CreateProjectPayload) -> ApiResult<CreateProjectResponse> {
        let request = self.request(Method::Post, "/projects").json(payload)?;
        self.fetch_data(request, "Failed to create or fetch project").await
    }

    pub async fn list_projects(&self, params: &ListProjectsParams) -> ApiResult<Paginated<ProjectListItem>> {
        let request = self.request(Method::Get, "/projects").query(params.query_pairs());
        self.fetch::<Vec<ProjectListItem>>(request)
            .await?
            .into_page(params.page, params.limit, "Failed to fetch projects")
    }

    pub async fn project(&self, id: &str) -> ApiResult<ProjectWithLatestAnalysis> {
        let path = format!("/projects/{}", encode_component(id));
        self.fetch_data(self.request(Method::Get, path), "Failed to fetch project")
            .await
    }

    pub async fn project_history(&self, id: &str, params: &HistoryParams) -> ApiResult<Paginated<AnalysisSummary>> {
        let path = format!("/projects/{}/history", encode_component(id));
        let request = self.request(Method::Get, path).query(params.query_pairs());
        self.fetch::<Vec<AnalysisSummary>>(request)
            .await?
            .into_page(params.page, params.limit, "Failed to fetch project history")
    }
}
