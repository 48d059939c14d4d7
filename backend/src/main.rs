mod config;
mod error;
mod services;

use crate::config::Config;
use crate::services::analysis::gemini::GeminiClient;
use crate::services::analysis::StructuredGenerator;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::{error, info};
use mime_guess::from_path;
use std::io;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Upper bound for JSON request bodies. Uploads are truncated client-side,
/// so real requests stay far below it.
pub(crate) const JSON_BODY_LIMIT: usize = 10 * 1024 * 1024; // 10 MB

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let path = req.path().trim_start_matches('/');
    let file_path = if path.is_empty() { "index.html" } else { path };

    match STATIC_DIR.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match STATIC_DIR.get_file("index.html") {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => HttpResponse::NotFound().body("Not Found"),
        },
    }
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    // Without a credential nothing can be analyzed; refuse to start.
    let config = Config::from_env().map_err(|e| {
        error!("Configuration error: {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e.to_string())
    })?;
    info!("Loaded configuration: {:?}", config);

    let gemini = GeminiClient::new(&config).map_err(|e| {
        error!("Could not build HTTP client: {}", e);
        io::Error::new(io::ErrorKind::Other, e.to_string())
    })?;
    let generator: Arc<dyn StructuredGenerator> = Arc::new(gemini);
    let generator = web::Data::from(generator);

    let url = config.url();
    if config.open_browser {
        let url_clone = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            let _ = webbrowser::open(&url_clone);
        });
    }

    info!("Server running at {}", url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::JsonConfig::default().limit(JSON_BODY_LIMIT))
            .app_data(generator.clone())
            .service(services::analysis::configure_routes())
            .default_service(web::route().to(serve_embedded))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
