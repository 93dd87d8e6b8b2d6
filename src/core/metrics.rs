use crate::domain::model::{ConfidenceLevel, PredictionRequest, PredictionResult};

/// 整塊田的預估總產量（公噸）
pub fn total_yield(result: &PredictionResult, request: &PredictionRequest) -> f64 {
    result.predicted_yield * request.area()
}

/// 地理編碼失敗時使用的座標標籤
pub fn fallback_location(latitude: f64, longitude: f64) -> String {
    format!("{}°N, {}°E", latitude, longitude)
}

impl ConfidenceLevel {
    pub fn from_score(confidence: f64) -> Self {
        if confidence >= 90.0 {
            ConfidenceLevel::High
        } else if confidence >= 75.0 {
            ConfidenceLevel::Good
        } else {
            ConfidenceLevel::Moderate
        }
    }

    pub fn interpretation(&self) -> &'static str {
        match self {
            ConfidenceLevel::High => "High reliability - Excellent data quality from all sources",
            ConfidenceLevel::Good => "Good reliability - Sufficient data coverage",
            ConfidenceLevel::Moderate => "Moderate reliability - Limited data availability",
        }
    }
}
