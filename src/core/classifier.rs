use crate::core::text::clean_words;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("Classifier has not been trained yet")]
    Untrained,

    #[error("Failed to read training file: {0}")]
    Io(#[from] std::io::Error),
}

/// A word or an adjacent word pair
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Feature {
    Word(String),
    Bigram(String, String),
}

type Counts = HashMap<Feature, f64>;

/// Naive Bayes classifier deciding whether a sentence is funny
#[derive(Debug, Clone, Default)]
pub struct SentenceClassifier {
    vocab: Counts,
    funny: Counts,
    not_funny: Counts,
    num_funny: f64,
    num_not_funny: f64,
}

impl SentenceClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_trained(&self) -> bool {
        !self.vocab.is_empty()
    }

    /// Record one labelled sentence
    pub fn train(&mut self, sentence: &str, funny: bool) {
        let counts = count_features(sentence);

        add_counts(&mut self.vocab, &counts);
        if funny {
            add_counts(&mut self.funny, &counts);
            self.num_funny += 1.0;
        } else {
            add_counts(&mut self.not_funny, &counts);
            self.num_not_funny += 1.0;
        }
    }

    /// Train on a file holding one sentence per line
    pub fn train_from_file(&mut self, path: impl AsRef<Path>, funny: bool) -> Result<usize, ClassifierError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let mut trained = 0;
        for sentence in contents.lines() {
            self.train(sentence, funny);
            trained += 1;
        }

        tracing::debug!("Trained classifier on {} sentences from {}", trained, path.as_ref().display());
        Ok(trained)
    }

    /// Compare the log likelihood of both classes given the sentence's features
    pub fn classify(&self, sentence: &str) -> Result<bool, ClassifierError> {
        if !self.is_trained() {
            return Err(ClassifierError::Untrained);
        }

        let counts = count_features(sentence);

        let total_sentences = self.num_funny + self.num_not_funny;
        let mut ll_funny = (self.num_funny / total_sentences).ln();
        let mut ll_not_funny = (self.num_not_funny / total_sentences).ln();

        let sum_funny: f64 = self.funny.values().sum();
        let sum_not_funny: f64 = self.not_funny.values().sum();
        let sum_both = sum_funny + sum_not_funny;

        for (feature, count) in &counts {
            let Some(vocab_count) = self.vocab.get(feature) else {
                continue;
            };

            let p_given_funny = self.funny.get(feature).copied().unwrap_or(0.0) / sum_funny;
            let p_given_not_funny = self.not_funny.get(feature).copied().unwrap_or(0.0) / sum_not_funny;
            // The feature's own probability is not constant across features
            let p_feature = vocab_count / sum_both;

            if p_given_funny > 0.0 {
                ll_funny += (count * p_given_funny / p_feature).ln();
            }
            if p_given_not_funny > 0.0 {
                ll_not_funny += (count * p_given_not_funny / p_feature).ln();
            }
        }

        Ok(ll_funny > ll_not_funny)
    }
}

fn add_counts(into: &mut Counts, from: &Counts) {
    for (feature, count) in from {
        *into.entry(feature.clone()).or_insert(0.0) += count;
    }
}

/// Word and bigram counts of the cleaned sentence
pub fn count_features(sentence: &str) -> Counts {
    let words = clean_words(sentence);
    let mut counts = Counts::new();

    for word in &words {
        *counts.entry(Feature::Word(word.clone())).or_insert(0.0) += 1.0;
    }
    for pair in words.windows(2) {
        *counts
            .entry(Feature::Bigram(pair[0].clone(), pair[1].clone()))
            .or_insert(0.0) += 1.0;
    }

    counts
}
