pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use adapters::geocoding::NominatimGeocoder;
pub use adapters::prediction::{HttpPredictionProvider, MockPredictionProvider};
pub use self::core::{service::PredictionService, validator::RequestValidator};
pub use domain::model::{
    CropType, PredictionReport, PredictionRequest, PredictionResult, RawNumber,
    RawPredictionInput, Season,
};
pub use utils::error::{Field, Result, ValidationError, YieldError};
