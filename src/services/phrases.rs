use crate::core::clean_phrase;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while loading training phrases
#[derive(Debug, Error)]
pub enum PhraseStoreError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Failed to read corpus {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No phrase source configured")]
    NotConfigured,
}

/// Source of the phrases the Markov model is trained on
pub enum PhraseStore {
    Postgres(PgPool),
    Corpus(PathBuf),
}

impl PhraseStore {
    /// Connect to the scraped-phrases database
    pub async fn connect(database_url: &str) -> Result<Self, PhraseStoreError> {
        tracing::info!("Connecting to PostgreSQL for training phrases");

        let pool = PgPoolOptions::new()
            .max_connections(2)
            .acquire_timeout(Duration::from_secs(5))
            .connect(database_url)
            .await?;

        Ok(Self::Postgres(pool))
    }

    pub fn corpus(path: impl AsRef<Path>) -> Self {
        Self::Corpus(path.as_ref().to_path_buf())
    }

    /// Pick Postgres when a URL is configured, else the corpus file
    pub async fn from_settings(
        database_url: Option<&str>,
        corpus_path: Option<&str>,
    ) -> Result<Self, PhraseStoreError> {
        match (database_url, corpus_path) {
            (Some(url), _) => Self::connect(url).await,
            (None, Some(path)) => Ok(Self::corpus(path)),
            (None, None) => Err(PhraseStoreError::NotConfigured),
        }
    }

    /// Newest phrases first, cleaned and with blanks dropped
    pub async fn fetch_phrases(&self) -> Result<Vec<String>, PhraseStoreError> {
        let raw = match self {
            Self::Postgres(pool) => {
                tracing::debug!("Querying phrases from the DB...");
                let rows = sqlx::query("SELECT phrase FROM phrases ORDER BY fetch_date DESC")
                    .fetch_all(pool)
                    .await?;

                let phrases = rows
                    .iter()
                    .map(|row| row.try_get::<String, _>("phrase"))
                    .collect::<Result<Vec<_>, _>>()?;

                tracing::debug!("Fetched {} phrases", phrases.len());
                phrases
            }
            Self::Corpus(path) => read_lines(path)?,
        };

        Ok(raw
            .iter()
            .map(|phrase| clean_phrase(phrase).trim().to_string())
            .filter(|phrase| !phrase.is_empty())
            .collect())
    }
}

/// Non-empty lines of a text file
pub fn read_lines(path: &Path) -> Result<Vec<String>, PhraseStoreError> {
    let contents = std::fs::read_to_string(path).map_err(|source| PhraseStoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}
