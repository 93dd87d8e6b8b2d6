use std::fmt;
use thiserror::Error;

/// 表單欄位，依驗證順序排列
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    CropType,
    Latitude,
    Longitude,
    Area,
    Season,
}

impl Field {
    /// 欄位在表單與 JSON 中的名稱
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::CropType => "cropType",
            Field::Latitude => "latitude",
            Field::Longitude => "longitude",
            Field::Area => "area",
            Field::Season => "season",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 單一欄位的驗證失敗
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{message}")]
    FieldMissing { field: Field, message: String },

    #[error("{message}")]
    FieldOutOfRange {
        field: Field,
        value: String,
        message: String,
    },

    #[error("{message}")]
    FieldUnrecognized {
        field: Field,
        value: String,
        message: String,
    },
}

impl ValidationError {
    pub fn field(&self) -> Field {
        match self {
            ValidationError::FieldMissing { field, .. }
            | ValidationError::FieldOutOfRange { field, .. }
            | ValidationError::FieldUnrecognized { field, .. } => *field,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ValidationError::FieldMissing { message, .. }
            | ValidationError::FieldOutOfRange { message, .. }
            | ValidationError::FieldUnrecognized { message, .. } => message,
        }
    }
}

#[derive(Error, Debug)]
pub enum YieldError {
    #[error("Invalid input for '{field}': {0}", field = .0.field())]
    Validation(#[from] ValidationError),

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid configuration value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Reverse geocoding failed: {message}")]
    GeocodingError { message: String },

    #[error("Prediction failed: {message}")]
    PredictionError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Network,
    Backend,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl YieldError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            YieldError::Validation(_) => ErrorCategory::Input,
            YieldError::ConfigError { .. }
            | YieldError::MissingConfigError { .. }
            | YieldError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            YieldError::ApiError(_) | YieldError::GeocodingError { .. } => ErrorCategory::Network,
            YieldError::PredictionError { .. } | YieldError::SerializationError(_) => {
                ErrorCategory::Backend
            }
            YieldError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 地理編碼失敗可以退回座標字串
            YieldError::GeocodingError { .. } => ErrorSeverity::Low,
            YieldError::ApiError(_)
            | YieldError::PredictionError { .. }
            | YieldError::SerializationError(_) => ErrorSeverity::Medium,
            YieldError::Validation(_)
            | YieldError::ConfigError { .. }
            | YieldError::MissingConfigError { .. }
            | YieldError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            YieldError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            YieldError::Validation(e) => format!("Validation Error: {}", e.message()),
            YieldError::ConfigError { message } => format!("Configuration problem: {}", message),
            YieldError::MissingConfigError { field } => {
                format!("Configuration value '{}' is required", field)
            }
            YieldError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, reason)
            }
            YieldError::GeocodingError { .. } => {
                "Could not resolve a place name for these coordinates".to_string()
            }
            YieldError::ApiError(_)
            | YieldError::PredictionError { .. }
            | YieldError::SerializationError(_) => {
                "Unable to generate prediction. Please check your backend connection.".to_string()
            }
            YieldError::IoError(e) => format!("System error: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => "Correct the highlighted field and submit again",
            ErrorCategory::Configuration => "Check the configuration file and command-line flags",
            ErrorCategory::Network => "Check network connectivity and the service endpoint",
            ErrorCategory::Backend => "Make sure the prediction backend is running, or use --mock",
            ErrorCategory::System => "Check file permissions and available disk space",
        }
    }
}

pub type Result<T> = std::result::Result<T, YieldError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_exposes_field_and_message() {
        let err = ValidationError::FieldOutOfRange {
            field: Field::Area,
            value: "-2".to_string(),
            message: "Area must be positive".to_string(),
        };

        assert_eq!(err.field(), Field::Area);
        assert_eq!(err.field().as_str(), "area");
        assert_eq!(err.to_string(), "Area must be positive");
    }

    #[test]
    fn test_validation_wraps_into_yield_error() {
        let err: YieldError = ValidationError::FieldMissing {
            field: Field::CropType,
            message: "Please select a crop type".to_string(),
        }
        .into();

        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(
            err.to_string(),
            "Invalid input for 'cropType': Please select a crop type"
        );
        assert_eq!(
            err.user_friendly_message(),
            "Validation Error: Please select a crop type"
        );
    }

    #[test]
    fn test_geocoding_error_is_low_severity() {
        let err = YieldError::GeocodingError {
            message: "timeout".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert_eq!(err.category(), ErrorCategory::Network);
    }
}
