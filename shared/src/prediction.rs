use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};
use uuid::Uuid;

use crate::input::UvIndexBin;

/// Classifier output categories, indexed by class id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString, AsRefStr)]
pub enum WeatherType {
    Cloudy,
    Rainy,
    Snowy,
    Sunny,
}

impl WeatherType {
    pub fn from_class_id(class_id: u8) -> Option<Self> {
        match class_id {
            0 => Some(WeatherType::Cloudy),
            1 => Some(WeatherType::Rainy),
            2 => Some(WeatherType::Snowy),
            3 => Some(WeatherType::Sunny),
            _ => None,
        }
    }

    pub fn class_id(&self) -> u8 {
        match self {
            WeatherType::Cloudy => 0,
            WeatherType::Rainy => 1,
            WeatherType::Snowy => 2,
            WeatherType::Sunny => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WeatherType::Cloudy => "Cloudy",
            WeatherType::Rainy => "Rainy",
            WeatherType::Snowy => "Snowy",
            WeatherType::Sunny => "Sunny",
        }
    }

    pub fn image_file(&self) -> &'static str {
        match self {
            WeatherType::Cloudy => "cloudy.jpg",
            WeatherType::Rainy => "rainy.jpg",
            WeatherType::Snowy => "snowy.jpg",
            WeatherType::Sunny => "sunny.jpg",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedIndices {
    pub heat_index: f64,
    pub wind_chill: f64,
    pub uv_index_bin: UvIndexBin,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub request_id: Uuid,
    pub class_id: u8,
    pub weather_type: WeatherType,
    pub message: String,
    pub image_url: String,
    pub derived: DerivedIndices,
    pub features: Vec<f64>,
    pub predicted_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub model_fingerprint: String,
    pub model_nodes: usize,
}
