use crate::adapters::geocoding::NominatimGeocoder;
use crate::adapters::prediction::{HttpPredictionProvider, MockPredictionProvider};
use crate::core::metrics::{fallback_location, total_yield};
use crate::core::validator::RequestValidator;
use crate::domain::model::{ConfidenceLevel, PredictionReport, RawPredictionInput};
use crate::domain::ports::{ConfigProvider, PredictionProvider, ReverseGeocoder};
use crate::utils::error::{Result, YieldError};
use std::time::Duration;

/// 串起驗證、地理編碼與預測的流程
pub struct PredictionService<P: PredictionProvider> {
    validator: RequestValidator,
    geocoder: Option<Box<dyn ReverseGeocoder>>,
    provider: P,
}

impl<P: PredictionProvider> PredictionService<P> {
    pub fn new(provider: P) -> Self {
        Self {
            validator: RequestValidator::new(),
            geocoder: None,
            provider,
        }
    }

    pub fn with_geocoder(mut self, geocoder: impl ReverseGeocoder + 'static) -> Self {
        self.geocoder = Some(Box::new(geocoder));
        self
    }

    pub async fn predict(&self, input: &RawPredictionInput) -> Result<PredictionReport> {
        // 驗證失敗時不呼叫任何外部服務
        let request = self.validator.validate(input)?;
        tracing::debug!(
            "Validated request: crop={}, season={}, area={}ha",
            request.crop_type(),
            request.season(),
            request.area()
        );

        let location = self
            .resolve_location(request.latitude(), request.longitude())
            .await;
        tracing::info!("📍 Location: {}", location);

        let result = self.provider.predict(&request).await.map_err(|e| {
            tracing::error!("❌ Prediction provider failed: {}", e);
            e
        })?;
        tracing::info!(
            "🌾 Predicted yield {:.2} t/ha (confidence {:.1}%)",
            result.predicted_yield,
            result.confidence
        );

        Ok(PredictionReport {
            total_yield: total_yield(&result, &request),
            confidence_level: ConfidenceLevel::from_score(result.confidence),
            generated_at: chrono::Utc::now(),
            request,
            location,
            result,
        })
    }

    pub fn validator(&self) -> &RequestValidator {
        &self.validator
    }

    async fn resolve_location(&self, latitude: f64, longitude: f64) -> String {
        let Some(geocoder) = &self.geocoder else {
            return fallback_location(latitude, longitude);
        };

        match geocoder.reverse(latitude, longitude).await {
            Ok(name) => name,
            Err(e) => {
                tracing::warn!("⚠️ Geocoding failed, using coordinates: {}", e);
                fallback_location(latitude, longitude)
            }
        }
    }
}

impl PredictionService<Box<dyn PredictionProvider>> {
    /// 依配置組裝地理編碼與預測後端
    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let timeout = Duration::from_secs(config.request_timeout_seconds());

        let provider: Box<dyn PredictionProvider> = if config.use_mock() {
            let mut mock =
                MockPredictionProvider::new(Duration::from_millis(config.mock_delay_ms()));
            if let Some(seed) = config.mock_seed() {
                mock = mock.with_seed(seed);
            }
            tracing::info!("🧪 Using simulated prediction backend");
            Box::new(mock)
        } else {
            let endpoint = config
                .prediction_endpoint()
                .ok_or_else(|| YieldError::MissingConfigError {
                    field: "prediction.endpoint".to_string(),
                })?;
            tracing::info!("🔗 Using prediction backend at {}", endpoint);
            Box::new(HttpPredictionProvider::new(endpoint, timeout)?)
        };

        let mut service = PredictionService::new(provider);
        if config.geocoding_enabled() {
            service = service.with_geocoder(NominatimGeocoder::new(
                config.geocoding_endpoint(),
                config.user_agent(),
                timeout,
            )?);
        }

        Ok(service)
    }
}
