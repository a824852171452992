//! Tests for fetch module

use super::*;
use crate::error::Error;
use crate::http::{HttpClient, HttpClientConfig};
use crate::pagination::Cursor;
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> Arc<HttpClient> {
    let config = HttpClientConfig::builder()
        .base_url(server.uri())
        .max_retries(0)
        .no_rate_limit()
        .build();
    Arc::new(HttpClient::with_config(config).unwrap())
}

// ============================================================================
// FetchArgs Tests
// ============================================================================

#[test]
fn test_fetch_args_builder() {
    let args = FetchArgs::new()
        .param("from", "2024-01-01")
        .param("to", "2024-01-31");

    assert_eq!(args.len(), 2);
    assert_eq!(args.get("from"), Some("2024-01-01"));
    assert_eq!(args.get("missing"), None);
    assert!(!args.is_empty());
}

#[test]
fn test_fetch_args_from_map_and_iter() {
    let mut map = HashMap::new();
    map.insert("from".to_string(), "2024-02-01".to_string());
    let args = FetchArgs::from(map);
    assert_eq!(args.get("from"), Some("2024-02-01"));

    let args: FetchArgs = [("a", "1"), ("b", "2")].into_iter().collect();
    let mut pairs: Vec<_> = args.iter().collect();
    pairs.sort_unstable();
    assert_eq!(pairs, vec![("a", "1"), ("b", "2")]);

    assert!(FetchArgs::new().is_empty());
}

// ============================================================================
// HttpPageFetcher Tests
// ============================================================================

#[tokio::test]
async fn test_http_fetcher_first_page_has_no_cursor() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/meetings/meeting_summaries"))
        .and(query_param("from", "2024-01-01"))
        .and(query_param("page_size", "300"))
        .and(query_param_is_missing("next_page_token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "summaries": [{"meeting_uuid": "u1"}],
            "next_page_token": "tok2"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let fetcher = HttpPageFetcher::new(client_for(&mock_server), "/meetings/meeting_summaries");
    let args = FetchArgs::new().param("from", "2024-01-01");

    let body = fetcher.fetch_page(&args, None).await.unwrap();
    assert_eq!(body["next_page_token"], "tok2");
    assert_eq!(fetcher.path(), "/meetings/meeting_summaries");
}

#[tokio::test]
async fn test_http_fetcher_forwards_cursor() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/me/recordings"))
        .and(query_param("next_page_token", "tok2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "meetings": [],
            "next_page_token": ""
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let fetcher = HttpPageFetcher::new(client_for(&mock_server), "/users/me/recordings");
    let cursor = Cursor::new("tok2").unwrap();

    let body = fetcher
        .fetch_page(&FetchArgs::new(), Some(&cursor))
        .await
        .unwrap();
    assert_eq!(body["next_page_token"], "");
}

#[tokio::test]
async fn test_http_fetcher_custom_params() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/items"))
        .and(query_param("cursor", "c9"))
        .and(query_param("limit", "50"))
        .and(query_param_is_missing("page_size"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let fetcher = HttpPageFetcher::new(client_for(&mock_server), "/items")
        .with_cursor_param("cursor")
        .with_page_size_param("limit")
        .with_page_size(Some(50));

    fetcher
        .fetch_page(&FetchArgs::new(), Cursor::new("c9").as_ref())
        .await
        .unwrap();
}

#[tokio::test]
async fn test_http_fetcher_without_page_size() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/items"))
        .and(query_param_is_missing("page_size"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let fetcher = HttpPageFetcher::new(client_for(&mock_server), "/items").with_page_size(None);
    fetcher.fetch_page(&FetchArgs::new(), None).await.unwrap();
}

#[tokio::test]
async fn test_http_fetcher_owns_cursor_and_page_size_params() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/items"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
        .expect(2)
        .mount(&mock_server)
        .await;

    let fetcher = HttpPageFetcher::new(client_for(&mock_server), "/items");
    let args = FetchArgs::new()
        .param("from", "2024-01-01")
        .param("page_size", "5")
        .param("next_page_token", "stale");

    fetcher.fetch_page(&args, None).await.unwrap();
    fetcher
        .fetch_page(&args, Cursor::new("c2").as_ref())
        .await
        .unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    let values = |index: usize, key: &str| -> Vec<String> {
        requests[index]
            .url
            .query_pairs()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
            .collect()
    };

    assert_eq!(values(0, "page_size"), vec!["300"]);
    assert!(values(0, "next_page_token").is_empty());
    assert_eq!(values(0, "from"), vec!["2024-01-01"]);
    assert_eq!(values(1, "page_size"), vec!["300"]);
    assert_eq!(values(1, "next_page_token"), vec!["c2"]);
}

#[tokio::test]
async fn test_http_fetcher_passes_page_size_arg_when_unset() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/items"))
        .and(query_param("page_size", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let fetcher = HttpPageFetcher::new(client_for(&mock_server), "/items").with_page_size(None);
    let args = FetchArgs::new().param("page_size", "5");
    fetcher.fetch_page(&args, None).await.unwrap();
}

#[tokio::test]
async fn test_http_fetcher_propagates_errors() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/nobody/recordings"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "code": 1001,
            "message": "User does not exist: nobody."
        })))
        .mount(&mock_server)
        .await;

    let fetcher = HttpPageFetcher::new(client_for(&mock_server), "/users/nobody/recordings");
    let err = fetcher.fetch_page(&FetchArgs::new(), None).await.unwrap_err();

    assert!(matches!(err, Error::HttpStatus { status: 404, .. }));
}

#[tokio::test]
async fn test_fetcher_blanket_impls() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/items"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": [1]})))
        .expect(3)
        .mount(&mock_server)
        .await;

    let fetcher = HttpPageFetcher::new(client_for(&mock_server), "/items");
    let args = FetchArgs::new();

    let shared: Arc<dyn PageFetcher> = Arc::new(fetcher.clone());
    let boxed: Box<dyn PageFetcher> = Box::new(fetcher.clone());
    let borrowed = &fetcher;

    assert_eq!(shared.fetch_page(&args, None).await.unwrap()["items"][0], 1);
    assert_eq!(boxed.fetch_page(&args, None).await.unwrap()["items"][0], 1);
    assert_eq!(borrowed.fetch_page(&args, None).await.unwrap()["items"][0], 1);
}
