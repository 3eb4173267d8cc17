//! Library error types

use thiserror::Error;

pub type Result<T> = std::result::Result<T, BrewError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BrewError {
    /// A field was outside its physically plausible range at construction time.
    #[error("invalid value for {field}: {value} ({reason})")]
    InvalidIngredientValue {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// A computed property needs at least one ingredient of a category that is absent.
    #[error("recipe has no {0}")]
    MissingIngredient(&'static str),

    /// A required parameter is unset or unusable for the requested computation.
    #[error("insufficient data: {0}")]
    InsufficientData(&'static str),
}

/// Reject NaN, infinities and negative amounts.
pub(crate) fn check_non_negative(field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(BrewError::InvalidIngredientValue {
            field,
            value,
            reason: "must be a finite number",
        });
    }
    if value < 0.0 {
        return Err(BrewError::InvalidIngredientValue {
            field,
            value,
            reason: "must not be negative",
        });
    }
    Ok(())
}

/// Reject anything outside [0, 1]. Percentages are carried as decimal fractions.
pub(crate) fn check_fraction(field: &'static str, value: f64) -> Result<()> {
    check_non_negative(field, value)?;
    if value > 1.0 {
        return Err(BrewError::InvalidIngredientValue {
            field,
            value,
            reason: "must be a fraction between 0 and 1",
        });
    }
    Ok(())
}
