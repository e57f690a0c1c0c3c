use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use tokio::sync::RwLock;
use validator::Validate;

use crate::core::{GeneratorError, SentenceGenerator};
use crate::models::{ErrorEnvelope, ErrorResponse, FeedbackAck, FeedbackForm, HealthResponse, HelloResponse, SentenceResponse};

/// State of the reference upstream
#[derive(Clone)]
pub struct EngineState {
    pub generator: Arc<RwLock<SentenceGenerator>>,
}

impl EngineState {
    pub fn new(generator: SentenceGenerator) -> Self {
        Self {
            generator: Arc::new(RwLock::new(generator)),
        }
    }
}

/// Configure the upstream sentence API routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(hello))
        .route("/health", web::get().to(health_check))
        .route("/sentence", web::get().to(generate_sentence))
        .route("/sentence", web::post().to(record_feedback));
}

async fn hello() -> impl Responder {
    HttpResponse::Ok().json(HelloResponse {
        response: "hello world!".to_string(),
    })
}

async fn health_check(state: web::Data<EngineState>) -> impl Responder {
    let trained = !state.generator.read().await.model().is_empty();
    let status = if trained { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// GET /sentence
///
/// A request can walk the model up to `max_attempts` times, so it runs on
/// the blocking pool instead of the worker thread.
async fn generate_sentence(state: web::Data<EngineState>) -> impl Responder {
    let generator = Arc::clone(&state.generator);
    let result = web::block(move || {
        let generator = generator.blocking_read();
        generator.generate(None, &mut rand::thread_rng())
    })
    .await;

    match result {
        Ok(Ok(sentence)) => {
            tracing::debug!("Generated: {}", sentence);
            HttpResponse::Ok().json(SentenceResponse { sentence })
        }
        Ok(Err(e)) => {
            tracing::error!("Sentence generation failed: {}", e);
            HttpResponse::InternalServerError().json(ErrorEnvelope::new(e.to_string()))
        }
        Err(e) => {
            tracing::error!("Generation task failed: {}", e);
            HttpResponse::InternalServerError()
                .json(ErrorEnvelope::new(GeneratorError::Exhausted.to_string()))
        }
    }
}

/// POST /sentence
///
/// Feeds the reaction back into the funny classifier.
async fn record_feedback(
    state: web::Data<EngineState>,
    form: web::Form<FeedbackForm>,
) -> impl Responder {
    if let Err(errors) = form.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let mut generator = state.generator.write().await;
    generator
        .classifier_mut()
        .train(&form.sentence, form.was_funny);

    tracing::info!("Recorded feedback (wasFunny: {})", form.was_funny);

    HttpResponse::Ok().json(FeedbackAck { success: true })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SentenceClassifier;
    use actix_web::{test, App};

    fn state_with(phrases: &[&str]) -> EngineState {
        let mut generator = SentenceGenerator::default();
        generator.train_all(phrases);
        EngineState::new(generator)
    }

    macro_rules! engine_app {
        ($state:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($state.clone()))
                    .configure(crate::routes::configure_upstream_routes),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_hello() {
        let state = state_with(&[]);
        let app = engine_app!(state);
        let req = test::TestRequest::get().uri("/").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, serde_json::json!({"response": "hello world!"}));
    }

    #[actix_web::test]
    async fn test_generate_from_trained_model() {
        let state = state_with(&["I put a tuple in firebase."]);
        let app = engine_app!(state);
        let req = test::TestRequest::get().uri("/sentence").to_request();
        let body: SentenceResponse = test::call_and_read_body_json(&app, req).await;
        assert!(body.sentence.ends_with("firebase."));
    }

    #[actix_web::test]
    async fn test_generate_from_empty_model() {
        let state = state_with(&[]);
        let app = engine_app!(state);
        let req = test::TestRequest::get().uri("/sentence").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 500);
    }

    #[actix_web::test]
    async fn test_exhausted_generation_releases_the_model() {
        // A classifier that has only seen unfunny sentences rejects every walk
        let mut classifier = SentenceClassifier::new();
        classifier.train("I put a tuple in firebase.", false);
        let mut generator = SentenceGenerator::new(classifier).with_max_attempts(50);
        generator.train("I put a tuple in firebase.");
        let state = EngineState::new(generator);
        let app = engine_app!(state);

        let req = test::TestRequest::get().uri("/sentence").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 500);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body, serde_json::json!({"error": "Error could not generate sentence."}));

        let req = test::TestRequest::post()
            .uri("/sentence")
            .set_form([("sentence", "I put a tuple in firebase."), ("wasFunny", "true")])
            .to_request();
        let ack: FeedbackAck = test::call_and_read_body_json(&app, req).await;
        assert!(ack.success);
    }

    #[actix_web::test]
    async fn test_feedback_trains_classifier() {
        let state = state_with(&["I put a tuple in firebase."]);
        let app = engine_app!(state);
        let req = test::TestRequest::post()
            .uri("/sentence")
            .set_form([("sentence", "I put a tuple in firebase."), ("wasFunny", "true")])
            .to_request();
        let ack: FeedbackAck = test::call_and_read_body_json(&app, req).await;
        assert!(ack.success);
        assert!(state.generator.read().await.classifier().is_trained());
    }

    #[actix_web::test]
    async fn test_malformed_feedback() {
        let state = state_with(&[]);
        let app = engine_app!(state);
        let req = test::TestRequest::post()
            .uri("/sentence")
            .set_form([("sentence", "X"), ("wasFunny", "maybe")])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
    }
}
