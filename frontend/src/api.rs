use gloo_net::http::Request;
use shared::{ErrorResponse, PredictionResponse, RawInput};

pub async fn request_prediction(input: &RawInput) -> Result<PredictionResponse, String> {
    let request = Request::post("/api/predict")
        .json(input)
        .map_err(|e| format!("Failed to build request: {}", e))?;

    let response = request
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if response.ok() {
        response
            .json::<PredictionResponse>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))
    } else {
        let status = response.status();
        match response.json::<ErrorResponse>().await {
            Ok(body) => Err(body.error),
            Err(_) => Err(format!("Server error: {}", status)),
        }
    }
}
