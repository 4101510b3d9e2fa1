use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;

use crate::config::ServiceConfig;
use crate::extractor::VideoId;
use crate::service::error::SummaryError;
use crate::service::SummaryService;

/// Path of the summary endpoint relative to the service origin.
pub const SUMMARY_PATH: &str = "summary";

/// Longest slice of an error body kept for diagnostics.
const MAX_ERROR_BODY: usize = 200;

#[derive(Debug, Deserialize)]
struct SummaryResponse {
    summary: String,
}

/// HTTP client for `GET {base_url}/summary?video_id=<id>`.
#[derive(Debug, Clone)]
pub struct SummaryClient {
    client: Client,
    endpoint: Url,
}

impl SummaryClient {
    pub fn new(config: &ServiceConfig) -> Result<Self, SummaryError> {
        let endpoint = summary_endpoint(&config.base_url)?;

        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = config.connect_timeout() {
            builder = builder.connect_timeout(timeout);
        }
        let client = builder.build().map_err(|e| SummaryError::Connection {
            endpoint: endpoint.to_string(),
            source: e,
        })?;

        Ok(Self { client, endpoint })
    }

    /// The endpoint requests are sent to, without the query string.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Full request URL for `video_id`.
    pub fn request_url(&self, video_id: &VideoId) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .clear()
            .append_pair("video_id", video_id.as_str());
        url
    }

    fn classify(&self, err: reqwest::Error) -> SummaryError {
        if err.is_timeout() {
            SummaryError::Timeout { source: err }
        } else {
            SummaryError::Connection {
                endpoint: self.endpoint.to_string(),
                source: err,
            }
        }
    }
}

#[async_trait]
impl SummaryService for SummaryClient {
    async fn fetch_summary(&self, video_id: &VideoId) -> Result<String, SummaryError> {
        let url = self.request_url(video_id);
        tracing::debug!(url = %url, "GET summary");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SummaryError::Status {
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        let payload: SummaryResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                SummaryError::Timeout { source: e }
            } else {
                SummaryError::Decode { source: e }
            }
        })?;

        Ok(payload.summary)
    }
}

fn summary_endpoint(base_url: &str) -> Result<Url, SummaryError> {
    let joined = format!("{}/{}", base_url.trim_end_matches('/'), SUMMARY_PATH);
    Url::parse(&joined).map_err(|e| SummaryError::InvalidEndpoint {
        endpoint: base_url.to_string(),
        reason: e.to_string(),
    })
}

fn truncate_body(body: &str) -> String {
    if body.chars().count() <= MAX_ERROR_BODY {
        body.to_string()
    } else {
        let head: String = body.chars().take(MAX_ERROR_BODY).collect();
        format!("{}...", head)
    }
}
