//! Turns a form submission into the classifier's input vector.
//!
//! [`FEATURE_NAMES`] is the column order the tree was fitted on. Model
//! artifacts that declare their feature names are checked against it at load.

pub mod encoding;
pub mod indices;

use ndarray::ArrayView1;
use shared::{DerivedIndices, RawInput};

use encoding::one_hot;
pub use indices::{heat_index, wind_chill};

pub const FEATURE_COUNT: usize = 21;

pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "precipitation",
    "atmospheric_pressure",
    "visibility",
    "heat_index",
    "wind_chill",
    "cloud_cover_clear",
    "cloud_cover_cloudy",
    "cloud_cover_overcast",
    "cloud_cover_partly_cloudy",
    "season_autumn",
    "season_spring",
    "season_summer",
    "season_winter",
    "location_coastal",
    "location_inland",
    "location_mountain",
    "uv_index_low",
    "uv_index_moderate",
    "uv_index_high",
    "uv_index_very_high",
    "uv_index_extreme",
];

#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    values: [f64; FEATURE_COUNT],
    derived: DerivedIndices,
}

impl FeatureVector {
    pub fn from_input(input: &RawInput) -> Self {
        let derived = DerivedIndices {
            heat_index: heat_index(input.temperature, f64::from(input.humidity)),
            wind_chill: wind_chill(input.temperature, input.wind_speed),
            uv_index_bin: input.uv_index_bin(),
        };

        let mut values = [0.0; FEATURE_COUNT];
        let columns = [
            input.precipitation,
            input.atmospheric_pressure,
            input.visibility,
            derived.heat_index,
            derived.wind_chill,
        ]
        .into_iter()
        .chain(one_hot(input.cloud_cover))
        .chain(one_hot(input.season))
        .chain(one_hot(input.location))
        .chain(one_hot(derived.uv_index_bin));

        for (slot, value) in values.iter_mut().zip(columns) {
            *slot = value;
        }

        Self { values, derived }
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn to_array(&self) -> ArrayView1<'_, f64> {
        ArrayView1::from(&self.values[..])
    }

    pub fn names() -> &'static [&'static str] {
        &FEATURE_NAMES
    }

    pub fn derived(&self) -> &DerivedIndices {
        &self.derived
    }
}
