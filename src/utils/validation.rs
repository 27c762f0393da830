use crate::core::calculators::vehicle_char_value;
use crate::domain::model::Domain;
use crate::utils::error::{NumerologyError, Result};
use regex::Regex;

pub const MOBILE_NUMBER_LENGTH: usize = 10;
pub const DEFAULT_NAME_MAX_LENGTH: usize = 50;
pub const DEFAULT_VEHICLE_MAX_LENGTH: usize = 12;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// 呼叫引擎前的輸入檢查規則
#[derive(Debug, Clone)]
pub struct ValidationRules {
    pub name_max_length: usize,
    pub vehicle_max_length: usize,
    pub vehicle_plate_pattern: Option<Regex>,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            name_max_length: DEFAULT_NAME_MAX_LENGTH,
            vehicle_max_length: DEFAULT_VEHICLE_MAX_LENGTH,
            vehicle_plate_pattern: None,
        }
    }
}

impl ValidationRules {
    pub fn with_plate_pattern(mut self, pattern: &str) -> Result<Self> {
        self.vehicle_plate_pattern = Some(compile_pattern("validation.vehicle_plate_pattern", pattern)?);
        Ok(self)
    }

    pub fn check(&self, domain: Domain, raw: &str) -> Result<()> {
        match domain {
            Domain::Mobile => validate_mobile_number(raw),
            Domain::Name => validate_name(raw, self.name_max_length),
            Domain::Vehicle => {
                validate_vehicle_number(raw, self.vehicle_max_length, self.vehicle_plate_pattern.as_ref())
            }
        }
    }
}

pub fn validate_mobile_number(raw: &str) -> Result<()> {
    let field = Domain::Mobile.input_field();
    let number = raw.trim();

    if number.len() != MOBILE_NUMBER_LENGTH || !number.bytes().all(|b| b.is_ascii_digit()) {
        return Err(NumerologyError::validation(
            field,
            raw,
            format!("must be exactly {} digits", MOBILE_NUMBER_LENGTH),
        ));
    }

    if number.bytes().all(|b| b == b'0') {
        return Err(NumerologyError::validation(
            field,
            raw,
            "must contain at least one non-zero digit",
        ));
    }

    Ok(())
}

pub fn validate_name(raw: &str, max_length: usize) -> Result<()> {
    let field = Domain::Name.input_field();
    validate_non_empty_string(field, raw)?;

    let name = raw.trim();
    if name.chars().count() > max_length {
        return Err(NumerologyError::validation(
            field,
            raw,
            format!("must not exceed {} characters", max_length),
        ));
    }

    if !name.chars().any(|c| c.is_ascii_alphabetic()) {
        return Err(NumerologyError::validation(
            field,
            raw,
            "must contain at least one letter A-Z",
        ));
    }

    Ok(())
}

pub fn validate_vehicle_number(raw: &str, max_length: usize, plate_pattern: Option<&Regex>) -> Result<()> {
    let field = Domain::Vehicle.input_field();
    validate_non_empty_string(field, raw)?;

    let plate = raw.trim();
    if plate.chars().count() > max_length {
        return Err(NumerologyError::validation(
            field,
            raw,
            format!("must not exceed {} characters", max_length),
        ));
    }

    if !plate.chars().all(|c| c.is_ascii_alphanumeric() || is_plate_separator(c)) {
        return Err(NumerologyError::validation(
            field,
            raw,
            "may only contain letters, digits, spaces and '-'",
        ));
    }

    if plate.chars().map(vehicle_char_value).sum::<u64>() == 0 {
        return Err(NumerologyError::validation(
            field,
            raw,
            "must contain a letter or a non-zero digit",
        ));
    }

    if let Some(pattern) = plate_pattern {
        let normalized: String = plate
            .chars()
            .filter(|c| !is_plate_separator(*c))
            .map(|c| c.to_ascii_uppercase())
            .collect();
        if !pattern.is_match(&normalized) {
            return Err(NumerologyError::validation(
                field,
                raw,
                format!("does not match the plate format {}", pattern.as_str()),
            ));
        }
    }

    Ok(())
}

fn is_plate_separator(c: char) -> bool {
    c == ' ' || c == '-'
}

pub fn compile_pattern(field_name: &str, pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| NumerologyError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: pattern.to_string(),
        reason: format!("Invalid regular expression: {}", e),
    })
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(NumerologyError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(NumerologyError::ValidationError {
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
        return Err(NumerologyError::InvalidConfigValueError {
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
    fn test_validate_mobile_number() {
        assert!(validate_mobile_number("9876543210").is_ok());
        assert!(validate_mobile_number(" 9876543210 ").is_ok());
        assert!(validate_mobile_number("987654321").is_err());
        assert!(validate_mobile_number("98765432101").is_err());
        assert!(validate_mobile_number("98765-4321").is_err());
        assert!(validate_mobile_number("").is_err());
        assert!(validate_mobile_number("0000000000").is_err());
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("Ada Lovelace", 50).is_ok());
        assert!(validate_name("   ", 50).is_err());
        assert!(validate_name("12345", 50).is_err());
        assert!(validate_name(&"a".repeat(51), 50).is_err());
        assert!(validate_name(&"a".repeat(50), 50).is_ok());
    }

    #[test]
    fn test_validate_vehicle_number() {
        assert!(validate_vehicle_number("KA01AB1234", 12, None).is_ok());
        assert!(validate_vehicle_number("KA-01 AB-1234", 13, None).is_ok());
        assert!(validate_vehicle_number("KA01AB12345678", 12, None).is_err());
        assert!(validate_vehicle_number("KA#01", 12, None).is_err());
        assert!(validate_vehicle_number("00-00", 12, None).is_err());
        assert!(validate_vehicle_number("", 12, None).is_err());
    }

    #[test]
    fn test_plate_pattern_is_applied_to_normalized_plate() {
        let rules = ValidationRules::default()
            .with_plate_pattern(r"^[A-Z]{2}[0-9]{2}[A-Z]{2}[0-9]{4}$")
            .unwrap();

        assert!(rules.check(Domain::Vehicle, "ka01-ab1234").is_ok());
        assert!(rules.check(Domain::Vehicle, "KA01A1234").is_err());
    }

    #[test]
    fn test_invalid_pattern_is_config_error() {
        let err = ValidationRules::default().with_plate_pattern("[A-Z").unwrap_err();
        assert!(matches!(err, NumerologyError::InvalidConfigValueError { .. }));
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("server.port", 8080u16, 1, u16::MAX).is_ok());
        assert!(validate_range("server.port", 0u16, 1, u16::MAX).is_err());
    }
}
