use crate::utils::error::{BedtimeError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(BedtimeError::invalid_input(
            field_name,
            path,
            "Path cannot be empty",
        ));
    }

    if path.contains('\0') {
        return Err(BedtimeError::invalid_input(
            field_name,
            path,
            "Path contains null bytes",
        ));
    }

    Ok(())
}

pub fn validate_finite(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(BedtimeError::invalid_input(
            field_name,
            value,
            "Value must be a finite number",
        ));
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    // Written so that NaN fails too.
    if !(value >= min && value <= max) {
        return Err(BedtimeError::invalid_input(
            field_name,
            value,
            format!("Value must be between {} and {}", min, max),
        ));
    }
    Ok(())
}

/// Checks that `value` sits on the grid `origin + k * step`.
pub fn validate_step(field_name: &str, value: f64, origin: f64, step: f64) -> Result<()> {
    let steps = (value - origin) / step;
    if (steps - steps.round()).abs() > 1e-9 {
        return Err(BedtimeError::invalid_input(
            field_name,
            value,
            format!("Value must be a multiple of {}", step),
        ));
    }
    Ok(())
}
