use crate::utils::error::{SigmaError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(SigmaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
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
        return Err(SigmaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// Checks `min <= max` for a pair of bound fields.
pub fn validate_ordered_bounds(
    min_field: &str,
    min: usize,
    max_field: &str,
    max: usize,
) -> Result<()> {
    if min > max {
        return Err(SigmaError::ConfigValidationError {
            field: max_field.to_string(),
            message: format!(
                "{} ({}) must not exceed {} ({})",
                min_field, min, max_field, max
            ),
        });
    }
    Ok(())
}
