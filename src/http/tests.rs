//! Tests for the HTTP client module

use super::*;
use crate::auth::BasicAuth;
use crate::error::Error;
use bytes::Bytes;
use reqwest::Method;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{body_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn test_http_client_config_default() {
    let config = HttpClientConfig::default();
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert!(config.base_url.is_none());
    assert!(config.user_agent.starts_with("stashpull/"));
}

#[test]
fn test_http_client_config_builder() {
    let config = HttpClientConfig::builder()
        .base_url("https://stash.example.com")
        .timeout(Duration::from_secs(60))
        .header("X-Atlassian-Token", "no-check")
        .user_agent("test-agent/1.0")
        .build();

    assert_eq!(config.base_url, Some("https://stash.example.com".to_string()));
    assert_eq!(config.timeout, Duration::from_secs(60));
    assert_eq!(
        config.default_headers.get("X-Atlassian-Token"),
        Some(&"no-check".to_string())
    );
    assert_eq!(config.user_agent, "test-agent/1.0");
}

#[test]
fn test_missing_base_url() {
    let err = HttpClient::with_config(HttpClientConfig::default()).unwrap_err();
    assert!(matches!(err, Error::MissingConfigField { ref field } if field == "base_url"));
}

#[test]
fn test_invalid_base_url() {
    assert!(matches!(
        HttpClient::new("not a url").unwrap_err(),
        Error::InvalidUrl(_)
    ));
    assert!(matches!(
        HttpClient::new("mailto:joe@example.com").unwrap_err(),
        Error::InvalidConfigValue { .. }
    ));
}

#[test]
fn test_endpoint_under_api_root() {
    let client = HttpClient::new("https://stash.example.com").unwrap();
    let url = client
        .endpoint(&["projects", "PROJ", "repos", "repo", "pull-requests"])
        .unwrap();
    assert_eq!(
        url.as_str(),
        "https://stash.example.com/rest/api/1.0/projects/PROJ/repos/repo/pull-requests"
    );
}

#[test]
fn test_endpoint_keeps_context_path() {
    let client = HttpClient::new("https://example.com/bitbucket/").unwrap();
    let url = client.endpoint(&["projects"]).unwrap();
    assert_eq!(url.as_str(), "https://example.com/bitbucket/rest/api/1.0/projects");
}

#[test]
fn test_endpoint_encodes_segments() {
    let client = HttpClient::new("https://stash.example.com").unwrap();
    let url = client.endpoint(&["projects", "a/b c"]).unwrap();
    assert_eq!(url.path(), "/rest/api/1.0/projects/a%2Fb%20c");
}

#[test]
fn test_build_request_applies_auth_and_headers() {
    let config = HttpClientConfig::builder()
        .base_url("https://stash.example.com")
        .header("X-Custom", "value")
        .build();
    let client = HttpClient::with_config(config)
        .unwrap()
        .with_authenticator(Arc::new(BasicAuth::new("user", "pass").unwrap()));

    let url = client.endpoint(&["projects"]).unwrap();
    let request = client
        .build_request(Method::POST, url, Some(Bytes::from_static(b"{}")))
        .unwrap();

    assert_eq!(request.method(), Method::POST);
    assert_eq!(request.headers().get("X-Custom").unwrap(), "value");
    assert_eq!(request.headers().get("Accept").unwrap(), "application/json");
    assert_eq!(
        request.headers().get("Content-Type").unwrap(),
        "application/json"
    );
    assert_eq!(
        request.headers().get("Authorization").unwrap(),
        "Basic dXNlcjpwYXNz"
    );
}

#[tokio::test]
async fn test_get_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/api/1.0/projects"))
        .and(query_param("start", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"ok":true}"#))
        .mount(&mock_server)
        .await;

    let client = HttpClient::new(&mock_server.uri()).unwrap();
    let mut url = client.endpoint(&["projects"]).unwrap();
    url.query_pairs_mut().append_pair("start", "0");

    let response = client.get(url).await.unwrap();
    assert!(response.is_success());
    assert_eq!(response.text(), r#"{"ok":true}"#);
}

#[tokio::test]
async fn test_bad_status_is_not_a_transport_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/api/1.0/projects"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no such project"))
        .mount(&mock_server)
        .await;

    let client = HttpClient::new(&mock_server.uri()).unwrap();
    let response = client
        .get(client.endpoint(&["projects"]).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status, 404);
    assert!(!response.is_success());
    assert_eq!(response.text(), "no such project");
}

#[tokio::test]
async fn test_post_sends_body_and_auth() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/api/1.0/projects"))
        .and(header("Authorization", "Basic dXNlcjpwYXNz"))
        .and(body_string(r#"{"key":"PROJ"}"#))
        .respond_with(ResponseTemplate::new(201).set_body_string("{}"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = HttpClient::new(&mock_server.uri())
        .unwrap()
        .with_authenticator(Arc::new(BasicAuth::new("user", "pass").unwrap()));

    let response = client
        .execute(
            Method::POST,
            client.endpoint(&["projects"]).unwrap(),
            Some(Bytes::from_static(br#"{"key":"PROJ"}"#)),
        )
        .await
        .unwrap();

    assert_eq!(response.status, 201);
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    // Bind then drop to get a port nothing listens on
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = HttpClient::new(&format!("http://{addr}")).unwrap();
    let err = client
        .get(client.endpoint(&["projects"]).unwrap())
        .await
        .unwrap_err();

    assert!(err.is_transport());
}

#[test]
fn test_raw_response_success_range() {
    assert!(RawResponse::new(200, "").is_success());
    assert!(RawResponse::new(299, "").is_success());
    assert!(!RawResponse::new(199, "").is_success());
    assert!(!RawResponse::new(300, "").is_success());
}
