use crate::core::classifier::SentenceClassifier;
use crate::core::text::is_end_word;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeMap;
use thiserror::Error;

/// Default number of walks before generation gives up
pub const DEFAULT_MAX_ATTEMPTS: usize = 10_000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("'{0}' was not found")]
    UnknownWord(String),

    #[error("Model has not been trained yet")]
    EmptyModel,

    #[error("Error could not generate sentence.")]
    Exhausted,
}

/// Bigram Markov model over whitespace-separated words
///
/// Each word maps to every word that followed it in training, with
/// repeats, so frequent transitions are proportionally more likely.
#[derive(Debug, Clone)]
pub struct SentenceGenerator {
    model: BTreeMap<String, Vec<String>>,
    classifier: SentenceClassifier,
    max_attempts: usize,
}

impl Default for SentenceGenerator {
    fn default() -> Self {
        Self::new(SentenceClassifier::new())
    }
}

impl SentenceGenerator {
    pub fn new(classifier: SentenceClassifier) -> Self {
        Self {
            model: BTreeMap::new(),
            classifier,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    pub fn model(&self) -> &BTreeMap<String, Vec<String>> {
        &self.model
    }

    pub fn classifier(&self) -> &SentenceClassifier {
        &self.classifier
    }

    pub fn classifier_mut(&mut self) -> &mut SentenceClassifier {
        &mut self.classifier
    }

    /// Add the transitions of one phrase
    ///
    /// A "." is appended to the last word when it carries no terminal punctuation.
    pub fn train(&mut self, phrase: &str) {
        tracing::trace!("Training generator on '{}'", phrase);

        let mut words: Vec<String> = phrase.split_whitespace().map(str::to_string).collect();

        if let Some(last) = words.last_mut() {
            if !is_end_word(last) {
                last.push('.');
            }
        }

        for pair in words.windows(2) {
            self.model
                .entry(pair[0].clone())
                .or_default()
                .push(pair[1].clone());
        }
    }

    pub fn train_all<I, S>(&mut self, phrases: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for phrase in phrases {
            self.train(phrase.as_ref());
        }
    }

    /// Walk the model until a sentence the classifier finds funny comes out
    ///
    /// Without an initial word every walk starts from a random known word.
    /// An untrained classifier accepts the first sentence.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        initial_word: Option<&str>,
        rng: &mut R,
    ) -> Result<String, GeneratorError> {
        let states: Vec<&String> = self.model.keys().collect();
        if states.is_empty() {
            return Err(GeneratorError::EmptyModel);
        }

        if let Some(word) = initial_word {
            if !self.model.contains_key(word) {
                return Err(GeneratorError::UnknownWord(word.to_string()));
            }
        }

        let pick_start = |rng: &mut R| -> String {
            match initial_word {
                Some(word) => word.to_string(),
                None => states.choose(rng).map(|s| s.to_string()).unwrap_or_default(),
            }
        };

        let mut current = pick_start(rng);

        for _ in 0..self.max_attempts {
            let sentence = self.walk(current, rng);

            let accepted = match self.classifier.classify(&sentence) {
                Ok(funny) => funny,
                Err(_) => true,
            };
            if accepted {
                tracing::debug!("Successfully generated a sentence!");
                return Ok(sentence);
            }

            current = pick_start(rng);
        }

        Err(GeneratorError::Exhausted)
    }

    fn walk<R: Rng + ?Sized>(&self, start: String, rng: &mut R) -> String {
        let mut words = vec![start];

        loop {
            let current = &words[words.len() - 1];
            if is_end_word(current) {
                break;
            }
            let Some(next) = self.model.get(current).and_then(|nexts| nexts.choose(rng)) else {
                break;
            };
            words.push(next.clone());
        }

        words.join(" ")
    }

    /// The model as a JSON object of word to successors
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(&self.model).unwrap_or_default()
    }
}
