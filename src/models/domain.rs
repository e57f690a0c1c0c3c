use serde::{Deserialize, Serialize};

/// A generated sentence. It carries no id; two sentences are the same
/// exactly when their text is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sentence(String);

impl Sentence {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for Sentence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Sentence {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A reaction to the sentence that was on screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub sentence: Sentence,
    #[serde(rename = "wasFunny")]
    pub was_funny: bool,
}

impl Feedback {
    pub fn new(sentence: Sentence, was_funny: bool) -> Self {
        Self { sentence, was_funny }
    }

    /// Form fields as the upstream API expects them
    pub fn form_fields(&self) -> [(&'static str, String); 2] {
        [
            ("sentence", self.sentence.as_str().to_string()),
            ("wasFunny", self.was_funny.to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feedback_form_fields() {
        let feedback = Feedback::new(Sentence::new("X"), true);
        let fields = feedback.form_fields();
        assert_eq!(fields[0], ("sentence", "X".to_string()));
        assert_eq!(fields[1], ("wasFunny", "true".to_string()));
    }

    #[test]
    fn test_feedback_serializes_camel_case() {
        let feedback = Feedback::new(Sentence::new("I put a tuple in firebase."), false);
        let json = serde_json::to_value(&feedback).unwrap();
        assert_eq!(json["sentence"], "I put a tuple in firebase.");
        assert_eq!(json["wasFunny"], false);
    }
}
