use crate::domain::model::{CropType, PredictionRequest, RawNumber, RawPredictionInput, Season};
use crate::utils::error::{Field, ValidationError};

pub const LATITUDE_RANGE: (f64, f64) = (-90.0, 90.0);
pub const LONGITUDE_RANGE: (f64, f64) = (-180.0, 180.0);

/// 將表單輸入轉為 `PredictionRequest`。
///
/// 依 cropType、latitude、longitude、area、season 的順序檢查，
/// 遇到第一個錯誤即回傳，不彙整多個錯誤。純函式，不做任何 I/O。
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestValidator;

impl RequestValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn validate(
        &self,
        input: &RawPredictionInput,
    ) -> std::result::Result<PredictionRequest, ValidationError> {
        let crop_type = select_option(
            Field::CropType,
            &input.crop_type,
            "Please select a crop type",
            CropType::from_name,
        )?;
        let latitude = number_in_range(Field::Latitude, &input.latitude, LATITUDE_RANGE)?;
        let longitude = number_in_range(Field::Longitude, &input.longitude, LONGITUDE_RANGE)?;
        let area = positive_number(Field::Area, &input.area)?;
        let season = select_option(
            Field::Season,
            &input.season,
            "Please select a season",
            Season::from_name,
        )?;

        Ok(PredictionRequest::new(
            crop_type, latitude, longitude, area, season,
        ))
    }
}

fn select_option<T>(
    field: Field,
    value: &str,
    missing_message: &str,
    lookup: impl Fn(&str) -> Option<T>,
) -> std::result::Result<T, ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::FieldMissing {
            field,
            message: missing_message.to_string(),
        });
    }

    lookup(value).ok_or_else(|| ValidationError::FieldUnrecognized {
        field,
        value: value.to_string(),
        message: format!("Unknown {} '{}'", field, value.trim()),
    })
}

fn number_in_range(
    field: Field,
    raw: &RawNumber,
    (min, max): (f64, f64),
) -> std::result::Result<f64, ValidationError> {
    match raw.parse() {
        Some(value) if (min..=max).contains(&value) => Ok(value),
        _ => Err(ValidationError::FieldOutOfRange {
            field,
            value: raw.to_string(),
            message: format!("{} must be between {} and {}", label(field), min, max),
        }),
    }
}

fn positive_number(field: Field, raw: &RawNumber) -> std::result::Result<f64, ValidationError> {
    match raw.parse() {
        Some(value) if value > 0.0 => Ok(value),
        _ => Err(ValidationError::FieldOutOfRange {
            field,
            value: raw.to_string(),
            message: format!("{} must be positive", label(field)),
        }),
    }
}

fn label(field: Field) -> &'static str {
    match field {
        Field::CropType => "Crop type",
        Field::Latitude => "Latitude",
        Field::Longitude => "Longitude",
        Field::Area => "Area",
        Field::Season => "Season",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(crop: &str, lat: &str, lon: &str, area: &str, season: &str) -> RawPredictionInput {
        RawPredictionInput::new(crop, lat, lon, area, season)
    }

    fn failed_field(raw: &RawPredictionInput) -> Field {
        RequestValidator::new().validate(raw).unwrap_err().field()
    }

    #[test]
    fn test_valid_input_is_parsed_exactly() {
        let raw = input("rice", "28.6139", "77.2090", "10.5", "kharif");
        let request = RequestValidator::new().validate(&raw).unwrap();

        assert_eq!(request.crop_type(), CropType::Rice);
        assert_eq!(request.latitude(), 28.6139);
        assert_eq!(request.longitude(), 77.209);
        assert_eq!(request.area(), 10.5);
        assert_eq!(request.season(), Season::Kharif);
    }

    #[test]
    fn test_empty_crop_type_is_missing() {
        let err = RequestValidator::new()
            .validate(&input("", "10", "10", "5", "rabi"))
            .unwrap_err();

        assert!(matches!(
            err,
            ValidationError::FieldMissing {
                field: Field::CropType,
                ..
            }
        ));
        assert_eq!(err.message(), "Please select a crop type");
    }

    #[test]
    fn test_whitespace_season_is_missing() {
        let err = RequestValidator::new()
            .validate(&input("wheat", "10", "10", "5", "   "))
            .unwrap_err();

        assert!(matches!(err, ValidationError::FieldMissing { .. }));
        assert_eq!(err.field(), Field::Season);
        assert_eq!(err.message(), "Please select a season");
    }

    #[test]
    fn test_negative_area_is_out_of_range() {
        let err = RequestValidator::new()
            .validate(&input("wheat", "10", "10", "-2", "rabi"))
            .unwrap_err();

        assert!(matches!(err, ValidationError::FieldOutOfRange { .. }));
        assert_eq!(err.field(), Field::Area);
        assert_eq!(err.message(), "Area must be positive");
    }

    #[test]
    fn test_zero_and_text_area_share_the_same_error() {
        let zero = RequestValidator::new()
            .validate(&input("wheat", "10", "10", "0", "rabi"))
            .unwrap_err();
        let text = RequestValidator::new()
            .validate(&input("wheat", "10", "10", "lots", "rabi"))
            .unwrap_err();

        assert_eq!(zero.field(), Field::Area);
        assert_eq!(text.field(), Field::Area);
        assert_eq!(zero.message(), text.message());
    }

    #[test]
    fn test_latitude_bounds_are_inclusive() {
        let validator = RequestValidator::new();
        assert!(validator.validate(&input("maize", "90", "0", "1", "zaid")).is_ok());
        assert!(validator.validate(&input("maize", "-90", "0", "1", "zaid")).is_ok());
        assert_eq!(
            failed_field(&input("maize", "90.0001", "0", "1", "zaid")),
            Field::Latitude
        );
    }

    #[test]
    fn test_longitude_bounds_are_inclusive() {
        let validator = RequestValidator::new();
        assert!(validator.validate(&input("cotton", "0", "180", "1", "kharif")).is_ok());
        assert!(validator.validate(&input("cotton", "0", "-180", "1", "kharif")).is_ok());

        let err = validator
            .validate(&input("cotton", "0", "-180.5", "1", "kharif"))
            .unwrap_err();
        assert_eq!(err.field(), Field::Longitude);
        assert_eq!(err.message(), "Longitude must be between -180 and 180");
    }

    #[test]
    fn test_non_numeric_latitude_reports_range() {
        let err = RequestValidator::new()
            .validate(&input("rice", "north", "10", "1", "rabi"))
            .unwrap_err();

        assert!(matches!(err, ValidationError::FieldOutOfRange { .. }));
        assert_eq!(err.message(), "Latitude must be between -90 and 90");
    }

    #[test]
    fn test_first_failing_field_wins() {
        assert_eq!(
            failed_field(&input("", "500", "500", "-1", "")),
            Field::CropType
        );
        assert_eq!(
            failed_field(&input("rice", "500", "500", "-1", "")),
            Field::Latitude
        );
        assert_eq!(
            failed_field(&input("rice", "0", "500", "-1", "")),
            Field::Longitude
        );
        assert_eq!(failed_field(&input("rice", "0", "0", "-1", "")), Field::Area);
        assert_eq!(failed_field(&input("rice", "0", "0", "1", "")), Field::Season);
    }

    #[test]
    fn test_unknown_crop_is_unrecognized() {
        let err = RequestValidator::new()
            .validate(&input("barley", "10", "10", "5", "rabi"))
            .unwrap_err();

        assert!(matches!(
            err,
            ValidationError::FieldUnrecognized {
                field: Field::CropType,
                ..
            }
        ));
    }

    #[test]
    fn test_numeric_inputs_are_accepted() {
        let raw = RawPredictionInput::new("soybean", 12.5, -45.25, 3.0, "zaid");
        let request = RequestValidator::new().validate(&raw).unwrap();
        assert_eq!(request.longitude(), -45.25);
    }

    #[test]
    fn test_validation_is_idempotent() {
        let validator = RequestValidator::new();
        let good = input("sugarcane", "1.5", "2.5", "3.5", "kharif");
        let bad = input("sugarcane", "1.5", "2.5", "0", "kharif");

        assert_eq!(validator.validate(&good), validator.validate(&good));
        assert_eq!(validator.validate(&bad), validator.validate(&bad));
    }
}
