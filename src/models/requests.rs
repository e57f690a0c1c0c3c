use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{Feedback, Sentence};

/// Form body of `POST /sentence`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FeedbackForm {
    #[validate(length(min = 1))]
    pub sentence: String,
    #[serde(alias = "was_funny", rename = "wasFunny")]
    pub was_funny: bool,
}

impl From<FeedbackForm> for Feedback {
    fn from(form: FeedbackForm) -> Self {
        Feedback::new(Sentence::new(form.sentence), form.was_funny)
    }
}
