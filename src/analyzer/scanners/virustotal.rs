//! VirusTotal URL scan submission.

use super::Scanner;
use crate::config::ApiKeys;
use crate::error::Error;
use crate::indicator::IndicatorType;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::{info, warn};

const API_URL: &str = "https://www.virustotal.com/vtapi/v2/url/scan";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Deserialize)]
struct SubmitResponse {
    permalink: Option<String>,
    verbose_msg: Option<String>,
}

/// Submits a URL to VirusTotal and resolves to the analysis permalink.
pub struct VirusTotalScanner;

impl VirusTotalScanner {
    async fn submit(endpoint: &str, query: &str, key: &str) -> Result<String, Error> {
        let upstream = |message: String| Error::Upstream {
            scanner: "VirusTotal",
            message,
        };

        info!(query, "submitting scan to VirusTotal");
        let response = reqwest::Client::new()
            .post(endpoint)
            .form(&[("apikey", key), ("url", query)])
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|e| upstream(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "VirusTotal rejected the submission");
            return Err(upstream(format!("unexpected status {status}")));
        }

        let parsed: SubmitResponse = response.json().await.map_err(|e| upstream(e.to_string()))?;
        parsed.permalink.ok_or_else(|| {
            upstream(
                parsed
                    .verbose_msg
                    .unwrap_or_else(|| "response carried no permalink".to_string()),
            )
        })
    }
}

#[async_trait]
impl Scanner for VirusTotalScanner {
    fn name(&self) -> &'static str {
        "VirusTotal"
    }

    fn types(&self) -> &'static [IndicatorType] {
        &[IndicatorType::Url]
    }

    async fn scan(&self, query: &str, keys: &ApiKeys) -> Result<String, Error> {
        let key = keys.virustotal.as_deref().ok_or(Error::MissingCredential {
            scanner: "VirusTotal",
            slot: "virustotal",
            env_var: "SPYGLASS_VT_KEY",
        })?;
        Self::submit(API_URL, query, key).await
    }
}
