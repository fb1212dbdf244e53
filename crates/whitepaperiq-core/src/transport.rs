//! HTTP Transport
//!
//! [`HttpTransport`] is the seam between the typed services and the wire.
//! [`ReqwestTransport`] is the real implementation (native and wasm).

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

use crate::error::{ApiError, ApiResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

/// A request relative to the API base URL
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path below the base URL, starting with `/`
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
    pub bearer: Option<String>,
    pub timeout: Duration,
    /// Send cookies along (refresh token lives in an http-only cookie)
    pub with_credentials: bool,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            bearer: None,
            timeout: Duration::from_secs(30),
            with_credentials: false,
        }
    }

    pub fn query(mut self, pairs: Vec<(String, String)>) -> Self {
        self.query.extend(pairs);
        self
    }

    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> ApiResult<Self> {
        let value = serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.body = Some(value);
        Ok(self)
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_credentials(mut self) -> Self {
        self.with_credentials = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a request and returns the raw status and body.
///
/// Non-2xx statuses are NOT errors at this level; only failures to get any
/// response at all are.
#[async_trait(?Send)]
pub trait HttpTransport {
    async fn send(&self, request: ApiRequest) -> ApiResult<RawResponse>;
}

/// `reqwest`-backed transport
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    base_url: String,
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Request builder for `request`; the timeout applies on every target
    fn prepare(&self, request: &ApiRequest) -> reqwest::RequestBuilder {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self
            .client
            .request(method, self.url(&request.path))
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .timeout(request.timeout);

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(token) = &request.bearer {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        #[cfg(target_arch = "wasm32")]
        {
            if request.with_credentials {
                builder = builder.fetch_credentials_include();
            }
        }

        builder
    }
}

#[async_trait(?Send)]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> ApiResult<RawResponse> {
        let builder = self.prepare(&request);
        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(RawResponse { status, body: body.to_vec() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_base_and_path() {
        let transport = ReqwestTransport::new("http://localhost:3000/api/v1/");
        assert_eq!(transport.url("/auth/login"), "http://localhost:3000/api/v1/auth/login");
    }

    #[test]
    fn test_request_builder() {
        let request = ApiRequest::new(Method::Post, "/auth/refresh")
            .json(&serde_json::json!({}))
            .unwrap()
            .with_credentials()
            .timeout(Duration::from_secs(5));

        assert_eq!(request.method.as_str(), "POST");
        assert_eq!(request.body, Some(serde_json::json!({})));
        assert!(request.with_credentials);
        assert_eq!(request.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_prepared_request_carries_timeout() {
        let transport = ReqwestTransport::new("http://localhost:3000/api/v1");
        let request = ApiRequest::new(Method::Post, "/analyses")
            .timeout(Duration::from_secs(120));

        let built = transport.prepare(&request).build().unwrap();

        assert_eq!(built.timeout(), Some(&Duration::from_secs(120)));
        assert_eq!(built.url().as_str(), "http://localhost:3000/api/v1/analyses");
        assert_eq!(built.method(), &reqwest::Method::POST);
    }
}
