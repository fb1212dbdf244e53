//! API Client
//!
//! Shared request pipeline for every service: attaches the stored bearer
//! token, sends through the transport, classifies failures and applies the
//! session rules for 401 responses.

use std::rc::Rc;

use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::envelope::Envelope;
use crate::error::{ApiError, ApiResult};
use crate::storage::{self, SessionStorage};
use crate::transport::{ApiRequest, HttpTransport, Method, RawResponse};

type Hook = Rc<dyn Fn()>;

/// Typed access to the backend.
///
/// Service operations (`login`, `list_projects`, ...) are defined on this
/// type in the `services` modules.
#[derive(Clone)]
pub struct ApiClient<T, S> {
    transport: T,
    storage: S,
    config: ClientConfig,
    on_unauthorized: Option<Hook>,
}

impl<T: HttpTransport, S: SessionStorage> ApiClient<T, S> {
    pub fn new(transport: T, storage: S, config: ClientConfig) -> Self {
        Self {
            transport,
            storage,
            config,
            on_unauthorized: None,
        }
    }

    /// Called after a 401 on a non-auth endpoint has cleared the session
    pub fn with_unauthorized_hook(mut self, hook: impl Fn() + 'static) -> Self {
        self.on_unauthorized = Some(Rc::new(hook));
        self
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// New request with the default timeout and the stored bearer token
    pub(crate) fn request(&self, method: Method, path: impl Into<String>) -> ApiRequest {
        let mut request = ApiRequest::new(method, path).timeout(self.config.timeout);
        request.bearer = storage::token(&self.storage);
        request
    }

    /// Send and turn non-2xx answers into errors
    pub(crate) async fn execute(&self, request: ApiRequest) -> ApiResult<RawResponse> {
        if self.config.log_requests {
            tracing::info!(target: "api", "{} {}", request.method.as_str(), request.path);
        } else {
            tracing::debug!(target: "api", "{} {}", request.method.as_str(), request.path);
        }

        let path = request.path.clone();
        let response = match self.transport.send(request).await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(target: "api", path = %path, error = ?e, "network error - no response received");
                return Err(e);
            }
        };

        if response.is_success() {
            return Ok(response);
        }

        let error = ApiError::from_response(response.status, &response.body);
        self.intercept(&path, &error);
        Err(error)
    }

    fn intercept(&self, path: &str, error: &ApiError) {
        match error {
            ApiError::Unauthorized(_) if is_auth_endpoint(path) => {}
            ApiError::Unauthorized(_) => {
                tracing::warn!(target: "api", path = %path, "session rejected, signing out");
                storage::clear(&self.storage);
                if let Some(hook) = &self.on_unauthorized {
                    hook();
                }
            }
            ApiError::Forbidden(_) => tracing::error!(target: "api", path = %path, "access forbidden"),
            ApiError::NotFound(_) => tracing::error!(target: "api", path = %path, "resource not found"),
            ApiError::Server { status, .. } => {
                tracing::error!(target: "api", path = %path, status, "server error")
            }
            other => tracing::error!(target: "api", path = %path, status = ?other.status(), "request failed"),
        }
    }

    /// Send and decode the envelope
    pub(crate) async fn fetch<D: DeserializeOwned>(&self, request: ApiRequest) -> ApiResult<Envelope<D>> {
        let response = self.execute(request).await?;
        serde_json::from_slice(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Send, decode and unwrap `data`
    pub(crate) async fn fetch_data<D: DeserializeOwned>(&self, request: ApiRequest, fallback: &str) -> ApiResult<D> {
        self.fetch(request).await?.into_data(fallback)
    }

    /// `true` when the API root answers 200
    pub async fn health(&self) -> bool {
        match self.execute(self.request(Method::Get, "/")).await {
            Ok(response) => response.status == 200,
            Err(_) => false,
        }
    }
}

fn is_auth_endpoint(path: &str) -> bool {
    path.contains("/auth/")
}
