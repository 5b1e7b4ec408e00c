mod input;
mod prediction;

pub use input::{
    bounds, CloudCover, FormSchema, InputError, Location, NumericBounds, RawInput, Season,
    UvIndexBin,
};
pub use prediction::{
    DerivedIndices, ErrorResponse, HealthResponse, PredictionResponse, WeatherType,
};
