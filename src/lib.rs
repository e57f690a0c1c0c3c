//! Sentence Site - proxy, page controller and sentence engine for the
//! generated-sentence demo site.
//!
//! The proxy forwards `GET /sentence` and `POST /sentence` to the upstream
//! sentence API and answers the browser with JSON. The client module holds
//! the page's generate/feedback state machine and hero layout arithmetic.
//! The core module is the Markov generator and funny-sentence classifier
//! served by the reference upstream.

pub mod client;
pub mod config;
pub mod core;
pub mod logging;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use client::{Controller, Driver, Event, Phase, View};
pub use core::{SentenceClassifier, SentenceGenerator};
pub use models::{ErrorEnvelope, Feedback, Sentence, SentenceResponse};
pub use services::{ProxyError, UpstreamClient};
