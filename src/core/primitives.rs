use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{ChartError, ChartResult};

pub fn decimal_to_f64(value: Decimal, field_name: &'static str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::invalid_parameter(field_name, "cannot be represented as f64")
    })
}

/// Symmetric percent difference between two prices.
///
/// Returns `0.0` when the mean of both inputs is zero.
#[must_use]
pub fn percent_difference(a: f64, b: f64) -> f64 {
    let mean = (a + b) / 2.0;
    if mean == 0.0 {
        return 0.0;
    }
    ((a - b).abs() / mean) * 100.0
}
