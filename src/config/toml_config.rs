use crate::adapters::geocoding::{DEFAULT_NOMINATIM_URL, DEFAULT_USER_AGENT};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, YieldError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub geocoding: GeocodingConfig,
    pub prediction: PredictionConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeocodingConfig {
    pub enabled: bool,
    pub endpoint: String,
    pub user_agent: String,
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: DEFAULT_NOMINATIM_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PredictionMode {
    Mock,
    Http,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictionConfig {
    pub mode: PredictionMode,
    pub endpoint: Option<String>,
    pub mock_delay_ms: u64,
    pub seed: Option<u64>,
    pub timeout_seconds: u64,
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            mode: PredictionMode::Mock,
            endpoint: None,
            mock_delay_ms: 2000,
            seed: None,
            timeout_seconds: 30,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub format: LogFormat,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(YieldError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| YieldError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${PREDICTION_URL})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = regex::Regex::new(r"\$\{([^}]+)\}").map_err(|e| YieldError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if self.geocoding.enabled {
            validation::validate_url("geocoding.endpoint", &self.geocoding.endpoint)?;
            validation::validate_non_empty_string("geocoding.user_agent", &self.geocoding.user_agent)?;
        }

        if self.prediction.mode == PredictionMode::Http {
            let endpoint = validation::validate_required_field(
                "prediction.endpoint",
                &self.prediction.endpoint,
            )?;
            validation::validate_url("prediction.endpoint", endpoint)?;
        }

        validation::validate_range(
            "prediction.timeout_seconds",
            self.prediction.timeout_seconds,
            1,
            300,
        )?;
        validation::validate_range(
            "prediction.mock_delay_ms",
            self.prediction.mock_delay_ms,
            0,
            60_000,
        )?;

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn geocoding_enabled(&self) -> bool {
        self.geocoding.enabled
    }

    fn geocoding_endpoint(&self) -> &str {
        &self.geocoding.endpoint
    }

    fn user_agent(&self) -> &str {
        &self.geocoding.user_agent
    }

    fn use_mock(&self) -> bool {
        self.prediction.mode == PredictionMode::Mock
    }

    fn prediction_endpoint(&self) -> Option<&str> {
        self.prediction.endpoint.as_deref()
    }

    fn mock_delay_ms(&self) -> u64 {
        self.prediction.mock_delay_ms
    }

    fn mock_seed(&self) -> Option<u64> {
        self.prediction.seed
    }

    fn request_timeout_seconds(&self) -> u64 {
        self.prediction.timeout_seconds
    }
}
