//! Test doubles shared by the unit tests

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;

use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::{User, UserRole};
use crate::storage::MemoryStorage;
use crate::transport::{ApiRequest, HttpTransport, RawResponse};
use crate::ApiClient;

/// Transport that replays queued responses and records every request
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    responses: Rc<RefCell<VecDeque<ApiResult<RawResponse>>>>,
    requests: Rc<RefCell<Vec<ApiRequest>>>,
}

impl ScriptedTransport {
    pub fn respond(&self, status: u16, body: serde_json::Value) -> &Self {
        self.responses.borrow_mut().push_back(Ok(json_response(status, body)));
        self
    }

    pub fn respond_bytes(&self, status: u16, body: &[u8]) -> &Self {
        self.responses.borrow_mut().push_back(Ok(RawResponse {
            status,
            body: body.to_vec(),
        }));
        self
    }

    pub fn fail(&self, message: &str) -> &Self {
        self.responses
            .borrow_mut()
            .push_back(Err(ApiError::Network(message.to_string())));
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    pub fn last_request(&self) -> ApiRequest {
        self.requests.borrow().last().cloned().expect("no request was sent")
    }
}

#[async_trait(?Send)]
impl HttpTransport for ScriptedTransport {
    async fn send(&self, request: ApiRequest) -> ApiResult<RawResponse> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no scripted response".to_string())))
    }
}

pub fn json_response(status: u16, body: serde_json::Value) -> RawResponse {
    RawResponse {
        status,
        body: serde_json::to_vec(&body).expect("serializable body"),
    }
}

pub fn sample_user() -> User {
    User {
        id: "user-1".to_string(),
        email: "owner@acme.com".to_string(),
        full_name: Some("Olivia Owner".to_string()),
        role: UserRole::Owner,
        is_active: true,
        organization_id: "org-1".to_string(),
        created_at: "2025-01-05T10:00:00.000Z".to_string(),
    }
}

pub fn sample_user_json() -> serde_json::Value {
    serde_json::json!({
        "id": "user-1",
        "email": "owner@acme.com",
        "fullName": "Olivia Owner",
        "role": "OWNER",
        "isActive": true,
        "organizationId": "org-1",
        "createdAt": "2025-01-05T10:00:00.000Z"
    })
}

pub fn client() -> (ApiClient<ScriptedTransport, MemoryStorage>, ScriptedTransport, MemoryStorage) {
    let transport = ScriptedTransport::default();
    let storage = MemoryStorage::new();
    let client = ApiClient::new(transport.clone(), storage.clone(), ClientConfig::default());
    (client, transport, storage)
}
