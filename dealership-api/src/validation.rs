use dealership_shared::FIELD_SEPARATOR;

use crate::error::AppError;

/// Text that ends up in a flat-file record must be present and must not
/// contain the field separator.
pub(crate) fn require_text(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::ValidationError(format!("{} must not be empty", field)));
    }
    if value.contains(FIELD_SEPARATOR) || value.contains(['\n', '\r']) {
        return Err(AppError::ValidationError(format!(
            "{} must not contain '{}' or line breaks",
            field, FIELD_SEPARATOR
        )));
    }
    Ok(())
}

pub(crate) fn require_amount(field: &str, value: f64) -> Result<(), AppError> {
    if !value.is_finite() || value < 0.0 {
        return Err(AppError::ValidationError(format!("{} must be a non-negative amount", field)));
    }
    Ok(())
}
