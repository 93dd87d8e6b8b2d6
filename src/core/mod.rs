pub mod metrics;
pub mod service;
pub mod validator;

pub use crate::domain::model::{PredictionReport, PredictionRequest, PredictionResult};
pub use crate::domain::ports::{ConfigProvider, PredictionProvider, ReverseGeocoder};
pub use crate::utils::error::Result;
