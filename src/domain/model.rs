use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CropType {
    Rice,
    Wheat,
    Maize,
    Soybean,
    Cotton,
    Sugarcane,
}

impl CropType {
    pub const ALL: [CropType; 6] = [
        CropType::Rice,
        CropType::Wheat,
        CropType::Maize,
        CropType::Soybean,
        CropType::Cotton,
        CropType::Sugarcane,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CropType::Rice => "rice",
            CropType::Wheat => "wheat",
            CropType::Maize => "maize",
            CropType::Soybean => "soybean",
            CropType::Cotton => "cotton",
            CropType::Sugarcane => "sugarcane",
        }
    }

    /// 不分大小寫比對選單值
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|crop| crop.as_str().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for CropType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    /// Monsoon
    Kharif,
    /// Winter
    Rabi,
    /// Summer
    Zaid,
}

impl Season {
    pub const ALL: [Season; 3] = [Season::Kharif, Season::Rabi, Season::Zaid];

    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Kharif => "kharif",
            Season::Rabi => "rabi",
            Season::Zaid => "zaid",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|season| season.as_str().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 表單送來的數值：可能是使用者輸入的文字，也可能已經是數字
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawNumber {
    Number(f64),
    Text(String),
}

impl RawNumber {
    /// 解析失敗、空字串或非有限值一律回傳 None
    pub fn parse(&self) -> Option<f64> {
        let value = match self {
            RawNumber::Number(n) => *n,
            RawNumber::Text(text) => text.trim().parse::<f64>().ok()?,
        };
        value.is_finite().then_some(value)
    }
}

impl fmt::Display for RawNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawNumber::Number(n) => write!(f, "{}", n),
            RawNumber::Text(text) => f.write_str(text),
        }
    }
}

impl From<&str> for RawNumber {
    fn from(text: &str) -> Self {
        RawNumber::Text(text.to_string())
    }
}

impl From<String> for RawNumber {
    fn from(text: String) -> Self {
        RawNumber::Text(text)
    }
}

impl From<f64> for RawNumber {
    fn from(value: f64) -> Self {
        RawNumber::Number(value)
    }
}

/// 尚未驗證的表單輸入
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPredictionInput {
    #[serde(default)]
    pub crop_type: String,
    pub latitude: RawNumber,
    pub longitude: RawNumber,
    pub area: RawNumber,
    #[serde(default)]
    pub season: String,
}

impl RawPredictionInput {
    pub fn new(
        crop_type: impl Into<String>,
        latitude: impl Into<RawNumber>,
        longitude: impl Into<RawNumber>,
        area: impl Into<RawNumber>,
        season: impl Into<String>,
    ) -> Self {
        Self {
            crop_type: crop_type.into(),
            latitude: latitude.into(),
            longitude: longitude.into(),
            area: area.into(),
            season: season.into(),
        }
    }
}

/// 驗證通過的預測請求。只能由 `RequestValidator` 建立，建立後不可變更。
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionRequest {
    crop_type: CropType,
    latitude: f64,
    longitude: f64,
    area: f64,
    season: Season,
}

impl PredictionRequest {
    pub(crate) fn new(
        crop_type: CropType,
        latitude: f64,
        longitude: f64,
        area: f64,
        season: Season,
    ) -> Self {
        Self {
            crop_type,
            latitude,
            longitude,
            area,
            season,
        }
    }

    pub fn crop_type(&self) -> CropType {
        self.crop_type
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Hectares.
    pub fn area(&self) -> f64 {
        self.area
    }

    pub fn season(&self) -> Season {
        self.season
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureContribution {
    pub name: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalPoint {
    #[serde(rename = "month")]
    pub period: String,
    #[serde(rename = "yield")]
    pub yield_value: f64,
}

/// 預測服務回傳的結果，形狀不另外驗證
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    /// Tonnes per hectare.
    pub predicted_yield: f64,
    /// 0-100.
    pub confidence: f64,
    #[serde(default)]
    pub data_sources_used: Vec<String>,
    #[serde(default)]
    pub feature_contributions: Vec<FeatureContribution>,
    #[serde(default)]
    pub historical_comparison: Vec<HistoricalPoint>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceLevel {
    High,
    Good,
    Moderate,
}

/// 交給顯示層的完整報告
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionReport {
    pub request: PredictionRequest,
    pub location: String,
    pub result: PredictionResult,
    /// Tonnes over the whole area.
    pub total_yield: f64,
    pub confidence_level: ConfidenceLevel,
    pub generated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_number_parses_text_and_numbers() {
        assert_eq!(RawNumber::from("28.6139").parse(), Some(28.6139));
        assert_eq!(RawNumber::from(" 10.5 ").parse(), Some(10.5));
        assert_eq!(RawNumber::from(-2.0).parse(), Some(-2.0));
    }

    #[test]
    fn test_raw_number_rejects_non_numeric_and_non_finite() {
        assert_eq!(RawNumber::from("").parse(), None);
        assert_eq!(RawNumber::from("ten").parse(), None);
        assert_eq!(RawNumber::from("NaN").parse(), None);
        assert_eq!(RawNumber::from("inf").parse(), None);
        assert_eq!(RawNumber::from(f64::NAN).parse(), None);
    }

    #[test]
    fn test_raw_input_deserializes_strings_and_numbers() {
        let json = serde_json::json!({
            "cropType": "rice",
            "latitude": "28.6139",
            "longitude": 77.209,
            "area": "10.5",
            "season": "kharif"
        });

        let input: RawPredictionInput = serde_json::from_value(json).unwrap();
        assert_eq!(input.latitude, RawNumber::Text("28.6139".to_string()));
        assert_eq!(input.longitude, RawNumber::Number(77.209));
    }

    #[test]
    fn test_crop_and_season_lookup() {
        assert_eq!(CropType::from_name("Rice"), Some(CropType::Rice));
        assert_eq!(CropType::from_name("barley"), None);
        assert_eq!(Season::from_name(" rabi "), Some(Season::Rabi));
        assert_eq!(Season::from_name("monsoon"), None);
    }

    #[test]
    fn test_prediction_result_uses_wire_names() {
        let json = serde_json::json!({
            "predictedYield": 4.1,
            "confidence": 91.5,
            "dataSourcesUsed": ["FAO Soils Portal"],
            "featureContributions": [{"name": "NDVI", "value": 0.18}],
            "historicalComparison": [{"month": "Jan", "yield": 3.2}]
        });

        let result: PredictionResult = serde_json::from_value(json).unwrap();
        assert_eq!(result.historical_comparison[0].period, "Jan");
        assert_eq!(result.historical_comparison[0].yield_value, 3.2);
        assert_eq!(result.feature_contributions[0].name, "NDVI");
    }
}
