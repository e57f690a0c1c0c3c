use crate::models::Feedback;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Shown to the browser when a sentence could not be fetched
pub const FETCH_ERROR_MESSAGE: &str = "There was an issue connecting to the server.";

/// Shown to the browser when feedback could not be delivered
pub const SUBMIT_ERROR_MESSAGE: &str = "There was an issue posting a new sentence";

/// Errors that can occur when talking to the upstream sentence API
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Upstream returned status {0}")]
    Status(StatusCode),

    #[error("Invalid response body: {0}")]
    InvalidBody(String),

    #[error("Upstream host is not configured")]
    HostNotConfigured,
}

/// The uniform failure the proxy hands back to the browser
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ProxyError {
    pub message: String,
}

impl ProxyError {
    pub fn fetch() -> Self {
        Self { message: FETCH_ERROR_MESSAGE.to_string() }
    }

    pub fn submit() -> Self {
        Self { message: SUBMIT_ERROR_MESSAGE.to_string() }
    }
}

/// Body relayed verbatim from the upstream
#[derive(Debug, Clone)]
pub struct RelayedBody {
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Client for the upstream sentence API
///
/// The host is fixed when the client is built and never changes afterwards.
pub struct UpstreamClient {
    host: Option<String>,
    client: Client,
}

impl UpstreamClient {
    /// Create a new upstream client
    pub fn new(host: Option<String>, timeout: Duration) -> Result<Self, UpstreamError> {
        let client = Client::builder().timeout(timeout).build()?;

        let host = host.filter(|h| !h.trim().is_empty());
        if host.is_none() {
            tracing::warn!("No upstream host configured, sentence requests will fail");
        }

        Ok(Self { host, client })
    }

    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    fn sentence_url(&self) -> Result<String, UpstreamError> {
        let host = self.host.as_deref().ok_or(UpstreamError::HostNotConfigured)?;
        let host = host.trim_end_matches('/');
        if host.starts_with("http://") || host.starts_with("https://") {
            Ok(format!("{}/sentence", host))
        } else {
            Ok(format!("http://{}/sentence", host))
        }
    }

    /// GET a fresh sentence from the upstream, parsed as JSON
    pub async fn get_sentence(&self) -> Result<Value, UpstreamError> {
        let url = self.sentence_url()?;

        tracing::debug!("Fetching sentence from: {}", url);

        let response = self.client.get(&url).send().await?;

        if response.status() != StatusCode::OK {
            return Err(UpstreamError::Status(response.status()));
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body)
            .map_err(|e| UpstreamError::InvalidBody(format!("Failed to parse sentence: {}", e)))
    }

    /// POST feedback to the upstream as form fields
    ///
    /// Any status is relayed; only transport failures are errors.
    pub async fn post_feedback(&self, feedback: &Feedback) -> Result<RelayedBody, UpstreamError> {
        let url = self.sentence_url()?;

        let response = self
            .client
            .post(&url)
            .form(&feedback.form_fields())
            .send()
            .await?;

        if !response.status().is_success() {
            tracing::warn!("Upstream answered feedback with {}", response.status());
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let bytes = response.bytes().await?.to_vec();

        tracing::debug!("Relayed feedback for {:?} (wasFunny: {})", feedback.sentence.as_str(), feedback.was_funny);

        Ok(RelayedBody { content_type, bytes })
    }

    /// `fetchSentence`: upstream JSON on success, the fixed connection message otherwise
    pub async fn fetch_sentence(&self) -> Result<Value, ProxyError> {
        self.get_sentence().await.map_err(|e| {
            tracing::error!("Failed to fetch sentence: {}", e);
            ProxyError::fetch()
        })
    }

    /// `submitFeedback`: upstream body on success, the fixed posting message otherwise
    pub async fn submit_feedback(&self, feedback: &Feedback) -> Result<RelayedBody, ProxyError> {
        self.post_feedback(feedback).await.map_err(|e| {
            tracing::error!("Failed to submit feedback: {}", e);
            ProxyError::submit()
        })
    }
}
