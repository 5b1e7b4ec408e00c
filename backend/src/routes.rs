use actix_files::Files;
use actix_web::error::JsonPayloadError;
use actix_web::{web, HttpRequest, HttpResponse};
use log::{error, info, warn};
use shared::{FormSchema, HealthResponse, RawInput};
use std::path::Path;

use crate::error::ApiError;
use crate::features::FeatureVector;
use crate::inference::Model;
use crate::presenter::{render_prediction, ASSETS_MOUNT};

pub fn configure_routes(cfg: &mut web::ServiceConfig, assets_dir: &Path, frontend_dir: &Path) {
    configure_api(cfg);
    cfg.service(Files::new(ASSETS_MOUNT, assets_dir.to_path_buf()))
        .service(Files::new("/", frontend_dir.to_path_buf()).index_file("index.html"));
}

pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(web::resource("/api/predict").route(web::post().to(handle_predict)))
        .service(web::resource("/api/form").route(web::get().to(form_schema)))
        .service(web::resource("/api/health").route(web::get().to(health)));
}

fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    warn!("Rejected body for {}: {}", req.path(), err);
    ApiError::BadRequest(err.to_string()).into()
}

async fn handle_predict(
    model: web::Data<Model>,
    input: web::Json<RawInput>,
) -> Result<HttpResponse, ApiError> {
    let input = input.into_inner();
    if let Err(e) = input.validate() {
        warn!("Rejected input: {}", e);
        return Err(e.into());
    }

    let features = FeatureVector::from_input(&input);
    let weather = model.inference(&features).map_err(|e| {
        error!("Model inference error: {}", e);
        ApiError::from(e)
    })?;

    let response = render_prediction(weather, &features);
    info!(
        "Prediction {}: {} (heat_index={:.2}, wind_chill={:.2}, uv={})",
        response.request_id,
        weather,
        response.derived.heat_index,
        response.derived.wind_chill,
        response.derived.uv_index_bin
    );

    Ok(HttpResponse::Ok().json(response))
}

async fn form_schema() -> HttpResponse {
    HttpResponse::Ok().json(FormSchema::default())
}

async fn health(model: web::Data<Model>) -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        model_fingerprint: model.fingerprint().to_string(),
        model_nodes: model.tree().node_count(),
    })
}
