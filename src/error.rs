//! Error type for geometry validation.
//!
//! Every failure in this crate is returned as a [`GeometryError`] to the
//! immediate caller. The library never logs, retries, or suppresses an
//! error; what to surface (and whether to continue) is the caller's choice.

use thiserror::Error;

/// Error produced by the geometry validation layer.
///
/// Each variant carries a fixed human-readable message that callers may
/// surface verbatim.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum GeometryError {
    /// A dimension was not usable for constructing a shape.
    #[error("Invalid dimension provided")]
    InvalidDimension,

    /// A dimension that must be positive was zero or negative.
    /// Carries the offending value.
    #[error("Negative value not allowed: {0}")]
    NegativeValue(f64),

    /// A shape kind name outside the supported set.
    /// Carries the unrecognized name.
    #[error("Unknown shape: {0}")]
    UnknownShape(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_dimension_message() {
        assert_eq!(
            GeometryError::InvalidDimension.to_string(),
            "Invalid dimension provided"
        );
    }

    #[test]
    fn test_negative_value_message() {
        assert_eq!(
            GeometryError::NegativeValue(-3.5).to_string(),
            "Negative value not allowed: -3.5"
        );
    }

    #[test]
    fn test_unknown_shape_message() {
        assert_eq!(
            GeometryError::UnknownShape("hexagon".into()).to_string(),
            "Unknown shape: hexagon"
        );
    }
}
