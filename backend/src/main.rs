mod config;
mod error;
mod features;
mod inference;
mod presenter;
mod routes;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use config::ServerConfig;
use inference::Model;
use routes::configure_routes;
use shared::WeatherType;
use std::env;
use strum::IntoEnumIterator;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    if let Ok(current_dir) = env::current_dir() {
        log::info!("Current working directory: {}", current_dir.display());
    } else {
        log::error!("Failed to get the current working directory.");
    }

    let config = match ServerConfig::load() {
        Ok((config, Some(path))) => {
            log::info!("Loaded configuration from {}", path.display());
            config
        }
        Ok((config, None)) => {
            log::info!("No configuration file found, using defaults and environment");
            config
        }
        Err(e) => {
            log::error!("Failed to load configuration: {}", e);
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("Configuration failed: {}", e),
            ));
        }
    };

    let model = match Model::load(&config.model_path) {
        Ok(model) => model,
        Err(e) => {
            log::error!("Failed to load model at startup: {}", e);
            return Err(std::io::Error::other(format!("Model loading failed: {}", e)));
        }
    };
    log::info!(
        "Loaded decision tree from {} ({} nodes, {} leaves, depth {}, sha256 {})",
        config.model_path.display(),
        model.tree().node_count(),
        model.tree().leaf_count(),
        model.tree().depth(),
        model.fingerprint()
    );

    for weather in WeatherType::iter() {
        let image = config.assets_dir.join(weather.image_file());
        if !image.is_file() {
            log::warn!("Missing image for {}: {}", weather, image.display());
        }
    }
    if !config.frontend_dir.join("index.html").is_file() {
        log::warn!(
            "Frontend not built: {} has no index.html",
            config.frontend_dir.display()
        );
    }

    let bind_address = config.bind_address();
    log::info!("Starting server on {}", bind_address);

    let assets_dir = config.assets_dir.clone();
    let frontend_dir = config.frontend_dir.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allowed_methods(vec!["GET", "POST", "OPTIONS"])
                    .allowed_headers(vec![
                        actix_web::http::header::ACCEPT,
                        actix_web::http::header::CONTENT_TYPE,
                    ])
                    .max_age(3600),
            )
            .app_data(web::Data::new(model.clone()))
            .configure(|cfg| configure_routes(cfg, &assets_dir, &frontend_dir))
    })
    .bind(&bind_address)?
    .run()
    .await
}
