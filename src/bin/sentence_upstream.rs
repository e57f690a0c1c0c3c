//! Reference upstream sentence API: Markov generator filtered by the
//! funny classifier, trained from Postgres or a corpus file at start.

use actix_web::{middleware, web, App, HttpServer};
use sentence_site::config::Settings;
use sentence_site::core::{SentenceClassifier, SentenceGenerator};
use sentence_site::routes::{self, engine::EngineState};
use sentence_site::services::PhraseStore;
use tracing::{error, info, warn};

fn io_error(e: impl std::fmt::Display) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::Other, e.to_string())
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();

    let settings = Settings::load().map_err(|e| {
        eprintln!("Configuration error: {}", e);
        io_error(e)
    })?;

    sentence_site::logging::init(&settings.logging);

    info!("Starting sentence upstream...");

    let engine = &settings.engine;

    let mut classifier = SentenceClassifier::new();
    for (path, funny) in [(&engine.funny_path, true), (&engine.not_funny_path, false)] {
        if let Some(path) = path {
            match classifier.train_from_file(path, funny) {
                Ok(n) => info!("Trained classifier on {} sentences from {}", n, path),
                Err(e) => warn!("Skipping classifier training file {}: {}", path, e),
            }
        }
    }
    if !classifier.is_trained() {
        warn!("Classifier is untrained, every generated sentence will be accepted");
    }

    let store = PhraseStore::from_settings(engine.database_url.as_deref(), engine.corpus_path.as_deref())
        .await
        .map_err(|e| {
            error!("Failed to open phrase store: {}", e);
            io_error(e)
        })?;

    let phrases = store.fetch_phrases().await.map_err(|e| {
        error!("Failed to load training phrases: {}", e);
        io_error(e)
    })?;

    let mut generator = SentenceGenerator::new(classifier).with_max_attempts(engine.max_attempts);
    generator.train_all(&phrases);

    info!("Generator trained on {} phrases ({} states)", phrases.len(), generator.model().len());

    let state = EngineState::new(generator);
    let host = settings.server.host.clone();
    let port = engine.port;

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(middleware::Logger::default())
            .configure(routes::configure_upstream_routes)
    })
    .workers(settings.server.workers.unwrap_or(2))
    .bind((host, port))?
    .run()
    .await
}
