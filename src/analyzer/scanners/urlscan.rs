//! urlscan.io scan submission.

use super::Scanner;
use crate::config::ApiKeys;
use crate::error::Error;
use crate::indicator::IndicatorType;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{info, warn};

const API_URL: &str = "https://urlscan.io/api/v1/scan/";
const REPORT_BASE: &str = "https://urlscan.io/result/";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Serialize)]
struct SubmitRequest<'a> {
    url: &'a str,
    public: &'a str,
}

#[derive(Deserialize)]
struct SubmitResponse {
    uuid: String,
}

#[derive(Deserialize)]
struct ErrorResponse {
    message: String,
}

/// Submits the selection to urlscan.io and resolves to the result page.
pub struct UrlscanScanner;

impl UrlscanScanner {
    /// POST the query to `endpoint` and build the result URL from the
    /// returned scan UUID.
    async fn submit(endpoint: &str, query: &str, key: &str) -> Result<String, Error> {
        let upstream = |message: String| Error::Upstream {
            scanner: "urlscan.io",
            message,
        };

        info!(query, "submitting scan to urlscan.io");
        let response = reqwest::Client::new()
            .post(endpoint)
            .header("API-Key", key)
            .json(&SubmitRequest {
                url: query,
                public: "on",
            })
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|e| upstream(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // urlscan.io error bodies carry a human-readable message field.
            let message = serde_json::from_str::<ErrorResponse>(&body)
                .map(|e| e.message)
                .unwrap_or_else(|_| format!("unexpected status {status}"));
            warn!(%status, "urlscan.io rejected the submission");
            return Err(upstream(message));
        }

        let parsed: SubmitResponse = response.json().await.map_err(|e| upstream(e.to_string()))?;
        Ok(format!("{REPORT_BASE}{}/", parsed.uuid))
    }
}

#[async_trait]
impl Scanner for UrlscanScanner {
    fn name(&self) -> &'static str {
        "urlscan.io"
    }

    fn types(&self) -> &'static [IndicatorType] {
        &[IndicatorType::Url, IndicatorType::Ip, IndicatorType::Domain]
    }

    async fn scan(&self, query: &str, keys: &ApiKeys) -> Result<String, Error> {
        let key = keys.urlscan.as_deref().ok_or(Error::MissingCredential {
            scanner: "urlscan.io",
            slot: "urlscan",
            env_var: "SPYGLASS_URLSCAN_KEY",
        })?;
        Self::submit(API_URL, query, key).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_submit_resolves_to_result_page() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/scan/"))
            .and(header("API-Key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "uuid": "0e37e828-a9d9-45c0-ac50-1ca579b86c72",
                "message": "Submission successful"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let endpoint = format!("{}/api/v1/scan/", server.uri());
        let url = UrlscanScanner::submit(&endpoint, "https://example.com", "test-key")
            .await
            .unwrap();
        assert_eq!(
            url,
            "https://urlscan.io/result/0e37e828-a9d9-45c0-ac50-1ca579b86c72/"
        );
    }

    #[tokio::test]
    async fn test_upstream_error_carries_remote_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "message": "DNS Error - Could not resolve domain",
                "status": 400
            })))
            .mount(&server)
            .await;

        let endpoint = format!("{}/api/v1/scan/", server.uri());
        let err = UrlscanScanner::submit(&endpoint, "nonexistent.invalid", "test-key")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Upstream { .. }));
        assert!(err.to_string().contains("DNS Error"));
    }

    #[tokio::test]
    async fn test_non_json_error_body_falls_back_to_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("gateway exploded"))
            .mount(&server)
            .await;

        let endpoint = format!("{}/api/v1/scan/", server.uri());
        let err = UrlscanScanner::submit(&endpoint, "https://example.com", "test-key")
            .await
            .unwrap_err();
        assert!(err.to_string().contains("500"));
    }

    #[tokio::test]
    async fn test_missing_key_means_no_network_call() {
        let err = UrlscanScanner
            .scan("https://example.com", &ApiKeys::default())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::MissingCredential { .. }));
        assert!(err.to_string().contains("SPYGLASS_URLSCAN_KEY"));
    }
}
