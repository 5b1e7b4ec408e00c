use chrono::Utc;
use shared::{PredictionResponse, WeatherType};
use uuid::Uuid;

use crate::features::FeatureVector;

/// URL prefix the weather images are served under.
pub const ASSETS_MOUNT: &str = "/assets";

pub fn image_url(weather: WeatherType) -> String {
    format!("{}/{}", ASSETS_MOUNT, weather.image_file())
}

pub fn render_prediction(weather: WeatherType, features: &FeatureVector) -> PredictionResponse {
    PredictionResponse {
        request_id: Uuid::new_v4(),
        class_id: weather.class_id(),
        weather_type: weather,
        message: format!("The predicted weather type is: {}", weather.label()),
        image_url: image_url(weather),
        derived: features.derived().clone(),
        features: features.as_slice().to_vec(),
        predicted_at: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::RawInput;

    #[test]
    fn image_urls_live_under_assets() {
        assert_eq!(image_url(WeatherType::Cloudy), "/assets/cloudy.jpg");
        assert_eq!(image_url(WeatherType::Snowy), "/assets/snowy.jpg");
    }

    #[test]
    fn response_carries_label_image_and_features() {
        let features = FeatureVector::from_input(&RawInput::default());
        let response = render_prediction(WeatherType::Sunny, &features);

        assert_eq!(response.class_id, 3);
        assert_eq!(response.weather_type, WeatherType::Sunny);
        assert_eq!(response.message, "The predicted weather type is: Sunny");
        assert_eq!(response.image_url, "/assets/sunny.jpg");
        assert_eq!(response.features.len(), 21);
        assert_eq!(&response.derived, features.derived());
    }
}
