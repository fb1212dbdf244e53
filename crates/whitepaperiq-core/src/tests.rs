use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use pretty_assertions::assert_eq;
use serde_json::json;

use crate::models::{
    AcceptInvitationPayload, AnalysisStatus, HistoryParams, InviteMemberPayload, ListAnalysesParams,
    ListProjectsParams, LoginCredentials, MemberRole, Pagination, RegisterCredentials, SearchResponse,
    UpdateProfilePayload,
};
use crate::storage::{self, SessionStorage};
use crate::testing::{client, sample_user, sample_user_json};
use crate::transport::Method;
use crate::ApiError;

fn credentials() -> LoginCredentials {
    LoginCredentials {
        email: "owner@acme.com".to_string(),
        password: "secret1".to_string(),
    }
}

#[tokio::test]
async fn test_login_stores_session() {
    let (client, transport, storage) = client();
    transport.respond(
        200,
        json!({ "success": true, "data": { "user": sample_user_json(), "accessToken": "jwt-1" } }),
    );

    let auth = client.login(&credentials()).await.unwrap();

    assert_eq!(auth.access_token, "jwt-1");
    assert_eq!(storage::token(&storage).as_deref(), Some("jwt-1"));
    assert_eq!(storage::current_user(&storage), Some(sample_user()));

    let request = transport.last_request();
    assert_eq!(request.method, Method::Post);
    assert_eq!(request.path, "/auth/login");
    assert_eq!(request.body, Some(json!({ "email": "owner@acme.com", "password": "secret1" })));
    assert_eq!(request.bearer, None);
}

#[tokio::test]
async fn test_register_stores_session() {
    let (client, transport, storage) = client();
    transport.respond(
        201,
        json!({ "success": true, "data": { "user": sample_user_json(), "accessToken": "jwt-new" } }),
    );

    let credentials = RegisterCredentials {
        organization_name: "Acme".to_string(),
        email: "owner@acme.com".to_string(),
        password: "password1".to_string(),
        full_name: None,
    };
    client.register(&credentials).await.unwrap();

    assert_eq!(storage::token(&storage).as_deref(), Some("jwt-new"));
    assert_eq!(
        transport.last_request().body,
        Some(json!({ "organizationName": "Acme", "email": "owner@acme.com", "password": "password1" }))
    );
}

#[tokio::test]
async fn test_bearer_token_attached() {
    let (client, transport, storage) = client();
    storage::store_token(&storage, "jwt-1");
    transport.respond(200, json!({ "success": true, "data": sample_user_json() }));

    client.current_user().await.unwrap();

    let request = transport.last_request();
    assert_eq!(request.path, "/users/me");
    assert_eq!(request.bearer.as_deref(), Some("jwt-1"));
    assert_eq!(request.timeout, Duration::from_secs(30));
}

#[tokio::test]
async fn test_failed_login_keeps_storage_and_skips_hook() {
    let (client, transport, storage) = client();
    let fired = Rc::new(Cell::new(false));
    let hook_fired = fired.clone();
    let client = client.with_unauthorized_hook(move || hook_fired.set(true));
    storage.set("unrelated", "kept");
    transport.respond(401, json!({ "success": false, "message": "Invalid credentials" }));

    let err = client.login(&credentials()).await.unwrap_err();

    assert_eq!(err, ApiError::Unauthorized("Invalid credentials".to_string()));
    assert!(!fired.get());
    assert!(!storage::is_authenticated(&storage));
    assert_eq!(storage.get("unrelated").as_deref(), Some("kept"));
}

#[tokio::test]
async fn test_unauthorized_on_protected_endpoint_clears_session() {
    let (client, transport, storage) = client();
    let fired = Rc::new(Cell::new(0));
    let hook_fired = fired.clone();
    let client = client.with_unauthorized_hook(move || hook_fired.set(hook_fired.get() + 1));
    storage::store_auth(&storage, "expired", &sample_user());
    transport.respond(401, json!({ "message": "Token expired" }));

    let err = client.organization().await.unwrap_err();

    assert_eq!(err.to_string(), "Token expired");
    assert_eq!(fired.get(), 1);
    assert!(!storage::is_authenticated(&storage));
    assert_eq!(storage::current_user(&storage), None);
}

#[tokio::test]
async fn test_rejected_envelope_uses_fallback() {
    let (client, transport, _) = client();
    transport.respond(200, json!({ "success": false }));

    let err = client.organization().await.unwrap_err();

    assert_eq!(err, ApiError::Rejected("Failed to fetch organization".to_string()));
}

#[tokio::test]
async fn test_invalid_invitation() {
    let (client, transport, _) = client();
    transport.respond(404, json!({ "success": false, "message": "Invitation expired or not found" }));

    let err = client.invitation_details("tok/en 1").await.unwrap_err();

    assert_eq!(err.to_string(), "Invitation expired or not found");
    assert_eq!(transport.last_request().path, "/auth/invitations/tok%2Fen%201");
}

#[tokio::test]
async fn test_accept_invitation_omits_blank_name() {
    let (client, transport, storage) = client();
    transport.respond(
        200,
        json!({ "success": true, "data": { "user": sample_user_json(), "accessToken": "jwt-2" } }),
    );

    client
        .accept_invitation(&AcceptInvitationPayload::new("abc", "password1", "  "))
        .await
        .unwrap();

    assert_eq!(
        transport.last_request().body,
        Some(json!({ "token": "abc", "password": "password1" }))
    );
    assert_eq!(storage::token(&storage).as_deref(), Some("jwt-2"));
}

#[tokio::test]
async fn test_logout_clears_even_when_server_fails() {
    let (client, transport, storage) = client();
    storage::store_auth(&storage, "jwt-1", &sample_user());
    transport.fail("connection refused");

    client.logout().await;

    assert!(!storage::is_authenticated(&storage));
    assert_eq!(storage::current_user(&storage), None);
    let request = transport.last_request();
    assert_eq!(request.path, "/auth/logout");
    assert!(request.with_credentials);
}

#[tokio::test]
async fn test_refresh_token() {
    let (client, transport, storage) = client();
    storage::store_token(&storage, "old");
    transport
        .respond(200, json!({ "success": true, "data": { "accessToken": "new" } }))
        .respond(500, json!({ "message": "boom" }));

    assert_eq!(client.refresh_token().await.as_deref(), Some("new"));
    assert_eq!(storage::token(&storage).as_deref(), Some("new"));
    assert!(transport.last_request().with_credentials);

    assert_eq!(client.refresh_token().await, None);
    assert_eq!(storage::token(&storage).as_deref(), Some("new"));
}

#[tokio::test]
async fn test_list_projects_builds_query_and_synthesizes_pagination() {
    let (client, transport, _) = client();
    transport.respond(
        200,
        json!({ "success": true, "data": [
            { "id": "p1", "name": "Bitcoin", "symbol": "btc", "analysisCount": 2,
              "latestAnalysis": { "id": "a1", "status": "COMPLETED", "createdAt": "2025-01-05T10:00:00Z" } },
            { "id": "p2", "name": "Ethereum" }
        ] }),
    );

    let params = ListProjectsParams {
        page: Some(1),
        limit: Some(20),
        search: Some(" bit ".to_string()),
        analysis_status: Some(AnalysisStatus::Completed),
        ..ListProjectsParams::default()
    };
    let page = client.list_projects(&params).await.unwrap();

    assert_eq!(page.data.len(), 2);
    assert_eq!(page.data[0].analysis_count, 2);
    assert_eq!(page.pagination, Pagination { page: 1, limit: 20, total: 2, total_pages: 1 });

    let query = transport.last_request().query;
    assert_eq!(
        query,
        vec![
            ("page".to_string(), "1".to_string()),
            ("limit".to_string(), "20".to_string()),
            ("search".to_string(), "bit".to_string()),
            ("analysisStatus".to_string(), "COMPLETED".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_history_and_analyses_pagination() {
    let (client, transport, _) = client();
    transport
        .respond(200, json!({ "success": true, "data": [] }))
        .respond(
            200,
            json!({ "success": true, "data": [], "pagination": { "page": 2, "limit": 20, "total": 40, "totalPages": 2 } }),
        );

    let history = client.project_history("p1", &HistoryParams::default()).await.unwrap();
    assert_eq!(history.pagination, Pagination { page: 1, limit: 10, total: 0, total_pages: 0 });
    assert_eq!(transport.last_request().path, "/projects/p1/history");

    let params = ListAnalysesParams {
        page: Some(2),
        limit: Some(20),
        project_id: None,
    };
    let analyses = client.list_analyses(&params).await.unwrap();
    assert_eq!(analyses.pagination.total, 40);
}

#[tokio::test]
async fn test_create_analysis_uses_long_timeout() {
    let (client, transport, _) = client();
    transport.respond(
        200,
        json!({ "success": true, "data": {
            "id": "a1", "organizationId": "org-1", "projectId": "p1", "createdBy": "user-1",
            "status": "COMPLETED", "resultData": null, "aiTokenUsage": 1200, "errorMessage": null,
            "createdAt": "2025-01-05T10:00:00Z"
        } }),
    );

    let analysis = client.create_analysis("p1").await.unwrap();

    assert_eq!(analysis.status, AnalysisStatus::Completed);
    let request = transport.last_request();
    assert_eq!(request.timeout, Duration::from_secs(120));
    assert_eq!(request.body, Some(json!({ "projectId": "p1" })));
}

#[tokio::test]
async fn test_download_pdf_returns_raw_bytes() {
    let (client, transport, _) = client();
    transport.respond_bytes(200, b"%PDF-1.7");

    let bytes = client.download_analysis_pdf("a1").await.unwrap();

    assert_eq!(bytes, b"%PDF-1.7".to_vec());
    assert_eq!(transport.last_request().path, "/analyses/a1/pdf");
}

#[tokio::test]
async fn test_search_defaults_missing_lists() {
    let (client, transport, _) = client();
    transport.respond(200, json!({ "success": true, "data": {} }));

    let response = client.search("btc", 7).await.unwrap();

    assert!(response.projects.is_empty());
    assert!(response.categories.is_empty());
    assert_eq!(
        transport.last_request().query,
        vec![("q".to_string(), "btc".to_string()), ("limit".to_string(), "7".to_string())]
    );
}

#[tokio::test]
async fn test_search_treats_null_lists_as_empty() {
    let (client, transport, _) = client();
    transport.respond(200, json!({ "success": true, "data": { "projects": null, "categories": null } }));

    let response = client.search("btc", 7).await.unwrap();

    assert_eq!(response, SearchResponse::default());
}

#[tokio::test]
async fn test_trending_null_projects() {
    let (client, transport, _) = client();
    transport.respond(200, json!({ "success": true, "data": { "projects": null } }));

    let page = client.trending(2, 20).await.unwrap();

    assert!(page.data.is_empty());
    assert_eq!(page.pagination.page, 2);
}

#[tokio::test]
async fn test_analysis_with_null_report_fields() {
    let (client, transport, _) = client();
    transport.respond(
        200,
        json!({ "success": true, "data": {
            "id": "a1", "organizationId": "org-1", "projectId": "p1", "createdBy": "user-1",
            "status": "COMPLETED", "aiTokenUsage": null, "errorMessage": null,
            "createdAt": "2025-01-05T10:00:00Z",
            "resultData": {
                "coinData": {
                    "name": "Thin", "symbol": "thn", "image": null, "tickers": null,
                    "marketData": { "currentPrice": 0.02, "high24h": null, "circulatingSupply": null },
                    "communityData": { "redditSubscribers": null, "telegramChannelUserCount": null },
                    "developerData": { "stars": null, "codeAdditionsDeletions4Weeks": null }
                },
                "topHoldersData": { "token": null, "addressTopHolders": {
                    "ethereum": { "holders": [
                        { "address": { "chain": "ethereum", "address": "0xaaa", "contract": null }, "balance": null, "usd": 12.5, "pctOfCap": null }
                    ], "totalPctOfCap": null }
                } },
                "detailedAnalysis": { "data": { "analysis": { "criteria": [
                    { "id": 1, "name": "Team", "score": null, "maxScore": 10, "strengths": null }
                ] }, "totalScore": null } }
            }
        } }),
    );

    let analysis = client.analysis("a1").await.unwrap();

    assert_eq!(analysis.ai_token_usage, 0);
    let data = analysis.result_data.unwrap();
    let coin = data.coin_data.unwrap();
    assert_eq!(coin.name, "Thin");
    assert!(coin.tickers.is_empty());
    let market = coin.market_data.unwrap();
    assert_eq!(market.current_price, 0.02);
    assert_eq!(market.high_24h, 0.0);
    assert_eq!(market.circulating_supply, 0.0);
    assert_eq!(coin.community_data.unwrap().reddit_subscribers, 0);
    assert_eq!(coin.developer_data.unwrap().stars, 0);
    let holders = data.top_holders_data.unwrap();
    let top = holders.top_holders(10);
    assert_eq!(top.len(), 1);
    assert_eq!(top[0].label(), "0xaaa");
    assert_eq!(top[0].pct_of_cap, 0.0);
    let criteria = &data.detailed_analysis.unwrap().data.analysis.criteria[0];
    assert_eq!(criteria.score, 0.0);
    assert!(criteria.strengths.is_empty());
}

#[tokio::test]
async fn test_trending_synthesizes_pagination() {
    let (client, transport, _) = client();
    transport.respond(
        200,
        json!({ "success": true, "data": { "projects": [
            { "id": "pepe", "name": "Pepe", "symbol": "PEPE", "marketCapRank": 30, "large": "https://img/pepe.png" }
        ] } }),
    );

    let page = client.trending(1, 20).await.unwrap();

    assert_eq!(page.data[0].image(), Some("https://img/pepe.png"));
    assert_eq!(page.pagination.total_pages, 1);
    assert_eq!(transport.last_request().path, "/search/trending");
}

#[tokio::test]
async fn test_invite_member_surfaces_message() {
    let (client, transport, _) = client();
    transport
        .respond(200, json!({ "success": true, "message": "Invitation created and sent successfully" }))
        .respond(200, json!({ "success": false, "message": "Member limit reached" }));
    let payload = InviteMemberPayload {
        email: "new@acme.com".to_string(),
        role: MemberRole::Analyst,
    };

    client.invite_member(&payload).await.unwrap();
    assert_eq!(transport.last_request().body, Some(json!({ "email": "new@acme.com", "role": "analyst" })));

    let err = client.invite_member(&payload).await.unwrap_err();
    assert_eq!(err.to_string(), "Member limit reached");
}

#[tokio::test]
async fn test_update_profile_rewrites_stored_user() {
    let (client, transport, storage) = client();
    let mut updated = sample_user_json();
    updated["fullName"] = json!("Olivia O.");
    transport.respond(200, json!({ "success": true, "data": updated }));

    let payload = UpdateProfilePayload {
        full_name: Some("Olivia O.".to_string()),
    };
    client.update_profile(&payload).await.unwrap();

    let stored = storage::current_user(&storage).unwrap();
    assert_eq!(stored.full_name.as_deref(), Some("Olivia O."));
}

#[tokio::test]
async fn test_health() {
    let (client, transport, _) = client();
    transport.respond(200, json!({ "status": "ok" })).fail("offline");

    assert!(client.health().await);
    assert!(!client.health().await);
}

#[tokio::test]
async fn test_network_error_message() {
    let (client, transport, _) = client();
    transport.fail("connection refused");

    let err = client.members().await.unwrap_err();

    assert_eq!(err.to_string(), "Network error - no response received");
    assert_eq!(err, ApiError::Network("connection refused".to_string()));
    assert_eq!(err.status(), None);
}
