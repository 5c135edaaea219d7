//! Layout error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LayoutError {
    /// A chip was measured with a negative or non-finite dimension.
    #[error("invalid item at index {index}: {width}x{height}")]
    InvalidInput {
        index: usize,
        width: f32,
        height: f32,
    },

    /// A layout parameter (max width, a margin, a badge width) is negative
    /// or non-finite.
    #[error("invalid layout parameter {name}: {value}")]
    InvalidParameter {
        name: &'static str,
        value: f32,
    },

    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Accepts zero, rejects negatives, NaN and infinities.
pub(crate) fn is_valid_extent(value: f32) -> bool {
    value.is_finite() && value >= 0.0
}

pub(crate) fn check_parameter(name: &'static str, value: f32) -> Result<f32, LayoutError> {
    if is_valid_extent(value) {
        Ok(value)
    } else {
        tracing::debug!("rejecting layout parameter {}={}", name, value);
        Err(LayoutError::InvalidParameter { name, value })
    }
}

/// Like `check_parameter`, but `f32::INFINITY` is accepted as "never wrap".
pub(crate) fn check_max_width(value: f32) -> Result<f32, LayoutError> {
    if value == f32::INFINITY {
        Ok(value)
    } else {
        check_parameter("max_width", value)
    }
}
