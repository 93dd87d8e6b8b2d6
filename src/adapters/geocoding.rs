use crate::domain::ports::ReverseGeocoder;
use crate::utils::error::{Result, YieldError};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org";
pub const DEFAULT_USER_AGENT: &str = concat!("crop-yield/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Deserialize)]
struct ReverseResponse {
    display_name: Option<String>,
    error: Option<String>,
}

/// OpenStreetMap Nominatim 反向地理編碼
pub struct NominatimGeocoder {
    base_url: String,
    client: Client,
}

impl NominatimGeocoder {
    pub fn new(base_url: impl Into<String>, user_agent: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }
}

#[async_trait]
impl ReverseGeocoder for NominatimGeocoder {
    async fn reverse(&self, latitude: f64, longitude: f64) -> Result<String> {
        let url = format!("{}/reverse", self.base_url);
        tracing::debug!("Reverse geocoding ({}, {}) via {}", latitude, longitude, url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("format", "json".to_string()),
                ("lat", latitude.to_string()),
                ("lon", longitude.to_string()),
            ])
            .send()
            .await
            .map_err(|e| YieldError::GeocodingError {
                message: e.to_string(),
            })?;

        let status = response.status();
        tracing::debug!("Geocoding response status: {}", status);
        if !status.is_success() {
            return Err(YieldError::GeocodingError {
                message: format!("HTTP {}", status),
            });
        }

        let body: ReverseResponse =
            response
                .json()
                .await
                .map_err(|e| YieldError::GeocodingError {
                    message: format!("Malformed response: {}", e),
                })?;

        // Nominatim 查無結果時回傳 200 與 {"error": "..."}
        match body.display_name {
            Some(name) if !name.trim().is_empty() => Ok(name),
            _ => Err(YieldError::GeocodingError {
                message: body
                    .error
                    .unwrap_or_else(|| "No display name in response".to_string()),
            }),
        }
    }
}
