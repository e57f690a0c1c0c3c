use crate::models::{Feedback, Sentence};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Errors seen by the page when talking to the proxy
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The proxy answered with an `{"error": ...}` envelope
    #[error("{0}")]
    Envelope(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl ClientError {
    /// Text suitable for `#feedback`; `fallback` stands in for anything but an envelope
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ClientError::Envelope(message) => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

/// The two calls the page makes
#[async_trait]
pub trait SentenceApi: Send + Sync {
    async fn fetch_sentence(&self) -> Result<Sentence, ClientError>;

    async fn submit_feedback(&self, feedback: &Feedback) -> Result<(), ClientError>;
}

/// Talks to the proxy over HTTP
pub struct ProxyClient {
    base_url: String,
    client: Client,
}

impl ProxyClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ClientError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    fn sentence_url(&self) -> String {
        format!("{}/sentence", self.base_url.trim_end_matches('/'))
    }
}

/// Pull the error message out of an envelope, if the body is one
pub fn envelope_error(body: &Value) -> Option<String> {
    body.get("error").map(|e| match e.as_str() {
        Some(message) => message.to_string(),
        None => e.to_string(),
    })
}

/// Read `{"sentence": ...}` from a proxy body
///
/// Older deployments wrap the upstream JSON in a JSON string, which is
/// unwrapped once.
pub fn parse_sentence(body: Value) -> Result<Sentence, ClientError> {
    let body = match body {
        Value::String(inner) => serde_json::from_str(&inner)
            .map_err(|e| ClientError::InvalidResponse(format!("Failed to parse sentence: {}", e)))?,
        other => other,
    };

    if let Some(message) = envelope_error(&body) {
        return Err(ClientError::Envelope(message));
    }

    body.get("sentence")
        .and_then(|s| s.as_str())
        .map(Sentence::new)
        .ok_or_else(|| ClientError::InvalidResponse("Missing sentence field".into()))
}

#[async_trait]
impl SentenceApi for ProxyClient {
    async fn fetch_sentence(&self) -> Result<Sentence, ClientError> {
        let response = self.client.get(self.sentence_url()).send().await?;
        let body: Value = response.json().await?;
        parse_sentence(body)
    }

    async fn submit_feedback(&self, feedback: &Feedback) -> Result<(), ClientError> {
        let response = self
            .client
            .post(self.sentence_url())
            .form(&feedback.form_fields())
            .send()
            .await?;

        // The proxy relays the upstream body untouched; only an envelope means failure
        let bytes = response.bytes().await?;
        if let Ok(body) = serde_json::from_slice::<Value>(&bytes) {
            if let Some(message) = envelope_error(&body) {
                return Err(ClientError::Envelope(message));
            }
        }

        Ok(())
    }
}
