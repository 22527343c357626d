use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    /// A caller supplied a value that would break a derived pixel scale or
    /// another configuration invariant.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("invalid chart config: {0}")]
    Config(#[from] serde_json::Error),
}

impl ChartError {
    pub(crate) fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

/// Rejects values that cannot serve as a divisor for a pixel scale.
pub(crate) fn ensure_positive(name: &'static str, value: f64) -> ChartResult<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ChartError::invalid_parameter(
            name,
            format!("must be finite and > 0, got {value}"),
        ));
    }
    Ok(value)
}
