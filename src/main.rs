use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use sentence_site::config::Settings;
use sentence_site::routes::{self, sentence::ProxyState};
use sentence_site::services::UpstreamClient;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    sentence_site::logging::init(&settings.logging);

    info!("Starting sentence proxy...");

    let upstream = UpstreamClient::new(
        settings.upstream.host.clone(),
        Duration::from_secs(settings.upstream.timeout_secs),
    )
    .map_err(|e| {
        error!("Failed to build upstream client: {}", e);
        std::io::Error::new(std::io::ErrorKind::Other, e.to_string())
    })?;

    info!(
        "Forwarding /sentence to {}",
        upstream.host().unwrap_or("<unset>")
    );

    let state = ProxyState {
        upstream: Arc::new(upstream),
    };

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_proxy_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
