use crate::domain::model::{PredictionRequest, PredictionResult};
use crate::utils::error::Result;
use async_trait::async_trait;

/// 由座標查詢地名
#[async_trait]
pub trait ReverseGeocoder: Send + Sync {
    async fn reverse(&self, latitude: f64, longitude: f64) -> Result<String>;
}

/// 產量預測後端
#[async_trait]
pub trait PredictionProvider: Send + Sync {
    async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResult>;
}

#[async_trait]
impl<T: PredictionProvider + ?Sized> PredictionProvider for Box<T> {
    async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResult> {
        (**self).predict(request).await
    }
}

pub trait ConfigProvider: Send + Sync {
    fn geocoding_enabled(&self) -> bool;
    fn geocoding_endpoint(&self) -> &str;
    fn user_agent(&self) -> &str;
    fn use_mock(&self) -> bool;
    fn prediction_endpoint(&self) -> Option<&str>;
    fn mock_delay_ms(&self) -> u64;
    fn mock_seed(&self) -> Option<u64>;
    fn request_timeout_seconds(&self) -> u64;
}
