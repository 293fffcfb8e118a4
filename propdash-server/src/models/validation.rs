//! Validation error type and field-level checks shared by the request models

use std::fmt;

use chrono::NaiveDate;

/// Calendar date format accepted for lease and payment dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Validation error for domain models
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Field is empty when it shouldn't be
    Empty { field: &'static str },

    /// Field exceeds maximum length
    TooLong { field: &'static str, max: usize },

    /// String doesn't match required format (e.g., email, date)
    InvalidFormat { field: &'static str, reason: &'static str },

    /// Invalid enum variant
    InvalidVariant { field: &'static str, value: String },

    /// Numeric value outside the accepted range
    OutOfRange { field: &'static str, reason: &'static str },

    /// Request body could not be decoded into the expected shape
    Malformed { reason: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::TooLong { field, max } => {
                write!(f, "{} exceeds maximum length of {} characters", field, max)
            }
            Self::InvalidFormat { field, reason } => {
                write!(f, "{}: {}", field, reason)
            }
            Self::InvalidVariant { field, value } => {
                write!(f, "invalid {} value: '{}'", field, value)
            }
            Self::OutOfRange { field, reason } => write!(f, "{} {}", field, reason),
            Self::Malformed { reason } => write!(f, "malformed request body: {}", reason),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Trim and bound a required text field.
pub(crate) fn required_text(
    field: &'static str,
    value: &str,
    max: usize,
) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    if trimmed.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(trimmed.to_owned())
}

/// Trim and bound an optional text field. Blank input collapses to `None`.
pub(crate) fn optional_text(
    field: &'static str,
    value: Option<&str>,
    max: usize,
) -> Result<Option<String>, ValidationError> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) => required_text(field, v, max).map(Some),
    }
}

/// Currency amounts must be finite and non-negative.
pub(crate) fn money(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::OutOfRange {
            field,
            reason: "must be a finite number",
        });
    }
    if value < 0.0 {
        return Err(ValidationError::OutOfRange {
            field,
            reason: "cannot be negative",
        });
    }
    Ok(value)
}

/// Row identifiers are assigned from 1 upwards.
pub(crate) fn reference_id(field: &'static str, value: i64) -> Result<i64, ValidationError> {
    if value < 1 {
        return Err(ValidationError::OutOfRange {
            field,
            reason: "must be a positive id",
        });
    }
    Ok(value)
}

/// Parse an ISO calendar date, returning it alongside its canonical text form.
pub(crate) fn calendar_date(
    field: &'static str,
    value: &str,
) -> Result<(NaiveDate, String), ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    let date = NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|_| {
        ValidationError::InvalidFormat {
            field,
            reason: "expected a YYYY-MM-DD date",
        }
    })?;
    Ok((date, date.format(DATE_FORMAT).to_string()))
}
