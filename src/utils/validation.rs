use crate::utils::error::{Result, YieldError};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(YieldError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(YieldError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(YieldError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| YieldError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(YieldError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(YieldError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("geocoding.endpoint", "https://example.com").is_ok());
        assert!(validate_url("geocoding.endpoint", "http://localhost:8000/predict").is_ok());
        assert!(validate_url("geocoding.endpoint", "").is_err());
        assert!(validate_url("geocoding.endpoint", "invalid-url").is_err());
        assert!(validate_url("geocoding.endpoint", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("prediction.timeout_seconds", 30, 1, 300).is_ok());
        assert!(validate_range("prediction.timeout_seconds", 0, 1, 300).is_err());
        assert!(validate_range("prediction.timeout_seconds", 301, 1, 300).is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some("https://backend".to_string());
        let missing: Option<String> = None;
        assert!(validate_required_field("prediction.endpoint", &present).is_ok());
        assert!(validate_required_field("prediction.endpoint", &missing).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("geocoding.user_agent", "crop-yield/0.1").is_ok());
        assert!(validate_non_empty_string("geocoding.user_agent", "  ").is_err());
    }
}
