//! Error type for the public clustering entry point.

use std::fmt;

/// Errors reported by [`link`](crate::link).
///
/// Only parameter validation can fail. Everything below the driver is
/// infallible: inner components either succeed or their caller broke a
/// documented precondition.
#[derive(Debug, Clone, PartialEq)]
pub enum FofError {
    /// The periodic box side was zero, negative, or not finite.
    BadBoxSize(f32),
    /// The linking length was zero, negative, or not finite.
    BadLinkingLength(f32),
    /// The search grid resolution was zero.
    ZeroGridRes,
    /// The linking length is wider than one search-grid cell, so a 27-cell
    /// neighborhood query could miss pairs.
    LinkingLengthExceedsCell { linking_length: f32, cell: f32 },
    /// More points than the signed 32-bit group labels can address.
    TooManyPoints(usize),
}

impl fmt::Display for FofError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FofError::BadBoxSize(l) => {
                write!(f, "box size must be positive and finite, got {l}")
            }
            FofError::BadLinkingLength(r) => {
                write!(f, "linking length must be positive and finite, got {r}")
            }
            FofError::ZeroGridRes => write!(f, "grid resolution must be at least 1"),
            FofError::LinkingLengthExceedsCell {
                linking_length,
                cell,
            } => write!(
                f,
                "linking length {linking_length} exceeds the grid cell width {cell}; \
                 lower the grid resolution"
            ),
            FofError::TooManyPoints(n) => {
                write!(f, "{n} points exceed the i32::MAX group label range")
            }
        }
    }
}

impl std::error::Error for FofError {}
