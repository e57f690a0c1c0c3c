// Sentence engine exports
pub mod classifier;
pub mod markov;
pub mod text;

pub use classifier::{ClassifierError, SentenceClassifier};
pub use markov::{GeneratorError, SentenceGenerator};
pub use text::{clean_phrase, clean_words, is_end_word};
