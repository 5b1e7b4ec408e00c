use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumIter, EnumString, AsRefStr,
)]
pub enum CloudCover {
    #[default]
    #[serde(rename = "clear")]
    #[strum(serialize = "clear")]
    Clear,
    #[serde(rename = "cloudy")]
    #[strum(serialize = "cloudy")]
    Cloudy,
    #[serde(rename = "overcast")]
    #[strum(serialize = "overcast")]
    Overcast,
    #[serde(rename = "partly cloudy")]
    #[strum(serialize = "partly cloudy")]
    PartlyCloudy,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumIter, EnumString, AsRefStr,
)]
pub enum Season {
    #[default]
    Autumn,
    Spring,
    Summer,
    Winter,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumIter, EnumString, AsRefStr,
)]
pub enum Location {
    #[default]
    #[serde(rename = "coastal")]
    #[strum(serialize = "coastal")]
    Coastal,
    #[serde(rename = "inland")]
    #[strum(serialize = "inland")]
    Inland,
    #[serde(rename = "mountain")]
    #[strum(serialize = "mountain")]
    Mountain,
}

/// UV index bucket. Intervals are right-open: `[0,2) [2,5) [5,7) [7,10) [10,inf)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter, EnumString, AsRefStr)]
pub enum UvIndexBin {
    Low,
    Moderate,
    High,
    #[serde(rename = "Very High")]
    #[strum(serialize = "Very High")]
    VeryHigh,
    Extreme,
}

impl UvIndexBin {
    pub fn from_value(uv_index: f64) -> Self {
        if uv_index < 2.0 {
            UvIndexBin::Low
        } else if uv_index < 5.0 {
            UvIndexBin::Moderate
        } else if uv_index < 7.0 {
            UvIndexBin::High
        } else if uv_index < 10.0 {
            UvIndexBin::VeryHigh
        } else {
            UvIndexBin::Extreme
        }
    }
}

/// Widget bounds for one numeric form field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NumericBounds {
    pub field: &'static str,
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    pub default: f64,
    pub step: f64,
}

impl NumericBounds {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.default;
        }
        value.clamp(self.min, self.max)
    }

    fn check(&self, value: f64) -> Result<(), InputError> {
        if !value.is_finite() {
            return Err(InputError::NotFinite { field: self.field });
        }
        if !self.contains(value) {
            return Err(InputError::OutOfRange {
                field: self.field,
                value,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

pub mod bounds {
    use super::NumericBounds;

    pub const TEMPERATURE: NumericBounds = NumericBounds {
        field: "temperature",
        label: "Temperature (°C)",
        min: -50.0,
        max: 50.0,
        default: 25.0,
        step: 0.1,
    };

    pub const HUMIDITY: NumericBounds = NumericBounds {
        field: "humidity",
        label: "Humidity (%)",
        min: 0.0,
        max: 100.0,
        default: 50.0,
        step: 1.0,
    };

    pub const WIND_SPEED: NumericBounds = NumericBounds {
        field: "wind_speed",
        label: "Wind Speed (km/h)",
        min: 0.0,
        max: 150.0,
        default: 10.0,
        step: 0.1,
    };

    pub const PRECIPITATION: NumericBounds = NumericBounds {
        field: "precipitation",
        label: "Precipitation (%)",
        min: 0.0,
        max: 100.0,
        default: 50.0,
        step: 0.1,
    };

    pub const ATMOSPHERIC_PRESSURE: NumericBounds = NumericBounds {
        field: "atmospheric_pressure",
        label: "Atmospheric Pressure (hPa)",
        min: 870.0,
        max: 1100.0,
        default: 1013.0,
        step: 0.1,
    };

    pub const UV_INDEX: NumericBounds = NumericBounds {
        field: "uv_index",
        label: "UV Index",
        min: 0.0,
        max: 15.0,
        default: 5.0,
        step: 0.1,
    };

    pub const VISIBILITY: NumericBounds = NumericBounds {
        field: "visibility",
        label: "Visibility (km)",
        min: 0.0,
        max: 20.0,
        default: 10.0,
        step: 0.1,
    };

    /// Numeric fields in form order.
    pub const ALL: [NumericBounds; 7] = [
        TEMPERATURE,
        HUMIDITY,
        WIND_SPEED,
        PRECIPITATION,
        ATMOSPHERIC_PRESSURE,
        UV_INDEX,
        VISIBILITY,
    ];
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputError {
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },
}

/// One form submission.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawInput {
    pub temperature: f64,
    pub humidity: u8,
    pub wind_speed: f64,
    pub precipitation: f64,
    pub cloud_cover: CloudCover,
    pub atmospheric_pressure: f64,
    pub uv_index: f64,
    pub season: Season,
    pub visibility: f64,
    pub location: Location,
}

impl Default for RawInput {
    fn default() -> Self {
        Self {
            temperature: bounds::TEMPERATURE.default,
            humidity: bounds::HUMIDITY.default as u8,
            wind_speed: bounds::WIND_SPEED.default,
            precipitation: bounds::PRECIPITATION.default,
            cloud_cover: CloudCover::default(),
            atmospheric_pressure: bounds::ATMOSPHERIC_PRESSURE.default,
            uv_index: bounds::UV_INDEX.default,
            season: Season::default(),
            visibility: bounds::VISIBILITY.default,
            location: Location::default(),
        }
    }
}

impl RawInput {
    /// Checks every numeric field against its widget bounds, first failure wins.
    pub fn validate(&self) -> Result<(), InputError> {
        bounds::TEMPERATURE.check(self.temperature)?;
        bounds::HUMIDITY.check(f64::from(self.humidity))?;
        bounds::WIND_SPEED.check(self.wind_speed)?;
        bounds::PRECIPITATION.check(self.precipitation)?;
        bounds::ATMOSPHERIC_PRESSURE.check(self.atmospheric_pressure)?;
        bounds::UV_INDEX.check(self.uv_index)?;
        bounds::VISIBILITY.check(self.visibility)?;
        Ok(())
    }

    pub fn uv_index_bin(&self) -> UvIndexBin {
        UvIndexBin::from_value(self.uv_index)
    }

    /// Reads a numeric field by its wire name.
    pub fn numeric(&self, field: &str) -> Option<f64> {
        match field {
            "temperature" => Some(self.temperature),
            "humidity" => Some(f64::from(self.humidity)),
            "wind_speed" => Some(self.wind_speed),
            "precipitation" => Some(self.precipitation),
            "atmospheric_pressure" => Some(self.atmospheric_pressure),
            "uv_index" => Some(self.uv_index),
            "visibility" => Some(self.visibility),
            _ => None,
        }
    }

    /// Writes a numeric field by its wire name, clamped to its bounds.
    /// Returns false for unknown field names.
    pub fn set_numeric(&mut self, field: &str, value: f64) -> bool {
        match field {
            "temperature" => self.temperature = bounds::TEMPERATURE.clamp(value),
            "humidity" => self.humidity = bounds::HUMIDITY.clamp(value).round() as u8,
            "wind_speed" => self.wind_speed = bounds::WIND_SPEED.clamp(value),
            "precipitation" => self.precipitation = bounds::PRECIPITATION.clamp(value),
            "atmospheric_pressure" => {
                self.atmospheric_pressure = bounds::ATMOSPHERIC_PRESSURE.clamp(value)
            }
            "uv_index" => self.uv_index = bounds::UV_INDEX.clamp(value),
            "visibility" => self.visibility = bounds::VISIBILITY.clamp(value),
            _ => return false,
        }
        true
    }
}

/// Everything a client needs to render the input form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormSchema {
    pub numeric: Vec<NumericBounds>,
    pub cloud_cover: Vec<String>,
    pub season: Vec<String>,
    pub location: Vec<String>,
    pub defaults: RawInput,
}

impl Default for FormSchema {
    fn default() -> Self {
        Self {
            numeric: bounds::ALL.to_vec(),
            cloud_cover: CloudCover::iter().map(|c| c.to_string()).collect(),
            season: Season::iter().map(|s| s.to_string()).collect(),
            location: Location::iter().map(|l| l.to_string()).collect(),
            defaults: RawInput::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn uv_index_bins_are_right_open() {
        assert_eq!(UvIndexBin::from_value(0.0), UvIndexBin::Low);
        assert_eq!(UvIndexBin::from_value(1.9), UvIndexBin::Low);
        assert_eq!(UvIndexBin::from_value(2.0), UvIndexBin::Moderate);
        assert_eq!(UvIndexBin::from_value(4.99), UvIndexBin::Moderate);
        assert_eq!(UvIndexBin::from_value(5.0), UvIndexBin::High);
        assert_eq!(UvIndexBin::from_value(6.9), UvIndexBin::High);
        assert_eq!(UvIndexBin::from_value(7.0), UvIndexBin::VeryHigh);
        assert_eq!(UvIndexBin::from_value(9.99), UvIndexBin::VeryHigh);
        assert_eq!(UvIndexBin::from_value(10.0), UvIndexBin::Extreme);
        assert_eq!(UvIndexBin::from_value(15.0), UvIndexBin::Extreme);
    }

    #[test]
    fn default_input_is_valid() {
        let input = RawInput::default();
        assert_eq!(input.validate(), Ok(()));
        assert_eq!(input.humidity, 50);
        assert_eq!(input.cloud_cover, CloudCover::Clear);
        assert_eq!(input.season, Season::Autumn);
        assert_eq!(input.location, Location::Coastal);
        assert_eq!(input.uv_index_bin(), UvIndexBin::High);
    }

    #[test]
    fn validate_reports_first_out_of_range_field() {
        let input = RawInput {
            wind_speed: 150.5,
            visibility: -1.0,
            ..RawInput::default()
        };
        match input.validate() {
            Err(InputError::OutOfRange { field, value, .. }) => {
                assert_eq!(field, "wind_speed");
                assert_eq!(value, 150.5);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn validate_accepts_bounds_inclusive() {
        let input = RawInput {
            temperature: -50.0,
            humidity: 100,
            atmospheric_pressure: 1100.0,
            uv_index: 15.0,
            ..RawInput::default()
        };
        assert_eq!(input.validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_humidity_over_100() {
        let input = RawInput {
            humidity: 101,
            ..RawInput::default()
        };
        assert!(matches!(
            input.validate(),
            Err(InputError::OutOfRange { field: "humidity", .. })
        ));
    }

    #[test]
    fn validate_rejects_nan() {
        let input = RawInput {
            precipitation: f64::NAN,
            ..RawInput::default()
        };
        assert_eq!(
            input.validate(),
            Err(InputError::NotFinite {
                field: "precipitation"
            })
        );
    }

    #[test]
    fn set_numeric_clamps_to_bounds() {
        let mut input = RawInput::default();
        assert!(input.set_numeric("temperature", 80.0));
        assert_eq!(input.temperature, 50.0);
        assert!(input.set_numeric("humidity", 42.6));
        assert_eq!(input.humidity, 43);
        assert!(input.set_numeric("uv_index", f64::NAN));
        assert_eq!(input.uv_index, bounds::UV_INDEX.default);
        assert!(!input.set_numeric("dew_point", 3.0));
        assert_eq!(input.numeric("humidity"), Some(43.0));
    }

    #[test]
    fn categories_use_form_spelling() {
        assert_eq!(CloudCover::PartlyCloudy.to_string(), "partly cloudy");
        assert_eq!(
            CloudCover::from_str("partly cloudy").ok(),
            Some(CloudCover::PartlyCloudy)
        );
        assert_eq!(UvIndexBin::VeryHigh.as_ref(), "Very High");

        let json = serde_json::to_string(&CloudCover::PartlyCloudy).unwrap();
        assert_eq!(json, "\"partly cloudy\"");
        let season: Season = serde_json::from_str("\"Winter\"").unwrap();
        assert_eq!(season, Season::Winter);
        let location: Location = serde_json::from_str("\"mountain\"").unwrap();
        assert_eq!(location, Location::Mountain);
        assert!(serde_json::from_str::<Location>("\"desert\"").is_err());
    }

    #[test]
    fn form_schema_lists_categories_in_encoding_order() {
        let schema = FormSchema::default();
        assert_eq!(
            schema.cloud_cover,
            vec!["clear", "cloudy", "overcast", "partly cloudy"]
        );
        assert_eq!(schema.season, vec!["Autumn", "Spring", "Summer", "Winter"]);
        assert_eq!(schema.location, vec!["coastal", "inland", "mountain"]);
        assert_eq!(schema.numeric.len(), 7);
        assert_eq!(schema.numeric[0].field, "temperature");
    }
}
