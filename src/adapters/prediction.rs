use crate::domain::model::{
    FeatureContribution, HistoricalPoint, PredictionRequest, PredictionResult,
};
use crate::domain::ports::PredictionProvider;
use crate::utils::error::{Result, YieldError};
use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use reqwest::Client;
use std::time::Duration;

/// 將請求以 JSON POST 到預測後端
pub struct HttpPredictionProvider {
    endpoint: String,
    client: Client,
}

impl HttpPredictionProvider {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            endpoint: endpoint.into(),
            client,
        })
    }
}

#[async_trait]
impl PredictionProvider for HttpPredictionProvider {
    async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResult> {
        tracing::debug!("Making prediction request to: {}", self.endpoint);
        let response = self.client.post(&self.endpoint).json(request).send().await?;

        let status = response.status();
        tracing::debug!("Prediction response status: {}", status);
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(YieldError::PredictionError {
                message: format!("Backend returned HTTP {}: {}", status, body.trim()),
            });
        }

        let text = response.text().await?;
        let result = serde_json::from_str(&text)?;
        Ok(result)
    }
}

/// 模擬後端：延遲後回傳隨機數字
#[derive(Debug, Clone)]
pub struct MockPredictionProvider {
    delay: Duration,
    seed: Option<u64>,
}

impl MockPredictionProvider {
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(2000);

    pub fn new(delay: Duration) -> Self {
        Self { delay, seed: None }
    }

    /// 固定種子，輸出可重現
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    fn generate(&self) -> PredictionResult {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        PredictionResult {
            predicted_yield: 3.45 + rng.gen::<f64>() * 1.5,
            confidence: 85.0 + rng.gen::<f64>() * 12.0,
            data_sources_used: vec![
                "NASA Earth Data (MODIS)".to_string(),
                "OpenWeatherMap API".to_string(),
                "FAO Soils Portal".to_string(),
            ],
            feature_contributions: [
                ("Rainfall", 0.28),
                ("Temperature", 0.22),
                ("NDVI", 0.18),
                ("Soil pH", 0.15),
                ("Soil Nitrogen", 0.17),
            ]
            .into_iter()
            .map(|(name, value)| FeatureContribution {
                name: name.to_string(),
                value,
            })
            .collect(),
            historical_comparison: [
                ("Jan", 3.2),
                ("Feb", 3.4),
                ("Mar", 3.6),
                ("Apr", 3.8),
                ("May", 4.0),
                ("Jun", 3.9),
            ]
            .into_iter()
            .map(|(period, yield_value)| HistoricalPoint {
                period: period.to_string(),
                yield_value,
            })
            .collect(),
        }
    }
}

impl Default for MockPredictionProvider {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY)
    }
}

#[async_trait]
impl PredictionProvider for MockPredictionProvider {
    async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResult> {
        tracing::warn!(
            "Using simulated prediction for {} ({}), not a real model",
            request.crop_type(),
            request.season()
        );
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(self.generate())
    }
}
