use crate::utils::error::{Result, TransformError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(TransformError::InvalidConfigValue {
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
        return Err(TransformError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// NaN fails the range check as well, since every comparison with it is false.
pub fn validate_probability(field_name: &str, value: f64) -> Result<()> {
    if value.is_nan() {
        return Err(TransformError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Probability must be a number".to_string(),
        });
    }
    validate_range(field_name, value, 0.0, 1.0)
}
