// Route exports
pub mod engine;
pub mod sentence;

use actix_web::{error, http::StatusCode, web, HttpRequest, HttpResponse};

/// JSON error response for malformed request payloads
#[derive(Debug, serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST))
            .json(self)
    }
}

/// Handle form payload errors
pub fn handle_form_payload_error(err: error::UrlencodedError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("Form payload error on {}: {}", req.path(), err);
    JsonError {
        error: "invalid_form".to_string(),
        message: format!("Invalid form: {}", err),
        status_code: 400,
    }
    .into()
}

/// Form error handler shared by both servers
pub fn configure_payloads(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::FormConfig::default().error_handler(handle_form_payload_error));
}

/// Routes of the browser-facing proxy
pub fn configure_proxy_routes(cfg: &mut web::ServiceConfig) {
    configure_payloads(cfg);
    sentence::configure(cfg);
}

/// Routes of the reference upstream sentence API
pub fn configure_upstream_routes(cfg: &mut web::ServiceConfig) {
    configure_payloads(cfg);
    engine::configure(cfg);
}
