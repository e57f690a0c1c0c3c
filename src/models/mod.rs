// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Feedback, Sentence};
pub use requests::FeedbackForm;
pub use responses::{ErrorEnvelope, ErrorResponse, FeedbackAck, HealthResponse, HelloResponse, SentenceResponse};
