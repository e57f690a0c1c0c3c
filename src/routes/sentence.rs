use actix_web::{http::header, web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::models::{ErrorEnvelope, Feedback, FeedbackForm, HealthResponse};
use crate::services::UpstreamClient;

/// Proxy state shared across all handlers
#[derive(Clone)]
pub struct ProxyState {
    pub upstream: Arc<UpstreamClient>,
}

/// Configure the proxy routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/sentence", web::get().to(get_sentence))
        .route("/sentence", web::post().to(post_sentence));
}

async fn health_check(state: web::Data<ProxyState>) -> impl Responder {
    let status = if state.upstream.host().is_some() { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Fetch a new sentence
///
/// GET /sentence
///
/// Upstream JSON on success. Failures answer 200 with
/// `{"error": "There was an issue connecting to the server."}`.
async fn get_sentence(state: web::Data<ProxyState>) -> impl Responder {
    match state.upstream.fetch_sentence().await {
        Ok(body) => HttpResponse::Ok().json(body),
        Err(e) => HttpResponse::Ok().json(ErrorEnvelope::new(e.message)),
    }
}

/// Report whether a sentence was funny
///
/// POST /sentence
///
/// Form fields `sentence` and `wasFunny`. The upstream body is relayed
/// as-is; transport failures answer 200 with
/// `{"error": "There was an issue posting a new sentence"}`.
async fn post_sentence(
    state: web::Data<ProxyState>,
    form: web::Form<FeedbackForm>,
) -> impl Responder {
    if let Err(errors) = form.validate() {
        tracing::info!("Validation failed for feedback: {:?}", errors);
        return HttpResponse::BadRequest().json(crate::models::ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let feedback = Feedback::from(form.into_inner());
    tracing::info!("Forwarding feedback (wasFunny: {})", feedback.was_funny);

    match state.upstream.submit_feedback(&feedback).await {
        Ok(relayed) => {
            let content_type = relayed
                .content_type
                .unwrap_or_else(|| "application/json".to_string());
            HttpResponse::Ok()
                .insert_header((header::CONTENT_TYPE, content_type))
                .body(relayed.bytes)
        }
        Err(e) => HttpResponse::Ok().json(ErrorEnvelope::new(e.message)),
    }
}
