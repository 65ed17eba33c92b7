//! Input sanitisation for callers of the estimator
//!
//! The estimator accepts anything well-typed. Front ends run these checks
//! first so out-of-domain numbers are rejected with a field name instead of
//! producing a meaningless estimate.

use crate::errors::{EstimatorError, Result};
use crate::estimator::EstimateInput;

/// Longest job accepted, in feet
///
/// With [`MAX_LABOR_RATE`] and [`crate::pricing::table::MAX_UNIT_PRICE`] this
/// keeps every count well inside `u64` and every cost inside `Decimal`.
pub const MAX_FOOTAGE_FEET: f64 = 1e9;

/// Highest labor rate accepted, in $/hr
pub const MAX_LABOR_RATE: f64 = 1e6;

/// Reject input the estimator is not defined for. Reports the first bad field.
pub fn validate_input(input: &EstimateInput) -> Result<()> {
    bounded("footage_feet", input.footage_feet, MAX_FOOTAGE_FEET)?;
    bounded("labor_rate_per_hour", input.labor_rate_per_hour, MAX_LABOR_RATE)?;

    if !input.trade_size_inches.is_finite() || input.trade_size_inches <= 0.0 {
        return Err(EstimatorError::invalid_input(
            "trade_size_inches",
            format!("must be a positive number, got {}", input.trade_size_inches),
        ));
    }

    input.prices.validate()
}

fn bounded(field: &str, value: f64, max: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(EstimatorError::invalid_input(
            field,
            format!("must be a finite number, got {}", value),
        ));
    }
    if value < 0.0 {
        return Err(EstimatorError::invalid_input(
            field,
            format!("must not be negative, got {}", value),
        ));
    }
    if value > max {
        return Err(EstimatorError::invalid_input(
            field,
            format!("must be at most {}, got {}", max, value),
        ));
    }
    Ok(())
}
