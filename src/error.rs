//! Error types for symbol encoding and SVG rendering.
//!
//! All fallible public entry points return [`Result`]. Input validation
//! failures and capacity limits are reported as variants here; internal
//! invariant violations (a half-built matrix, a broken contour walk) are
//! bugs and panic via `debug_assert!` instead of surfacing as errors.

use thiserror::Error;

/// Errors produced while validating options, encoding content or
/// rendering a symbol.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The content string was empty.
    #[error("expected content to be non-empty")]
    EmptyContent,

    /// The requested output size was zero or negative.
    #[error("expected size to be greater than zero, got {size}")]
    InvalidSize {
        /// The rejected size value.
        size: f64,
    },

    /// The error correction level string was not one of `L`, `M`, `Q`, `H`.
    #[error("unknown error correction level: {0}")]
    UnknownEcLevel(String),

    /// The content does not fit the largest symbol at the requested level.
    #[error("content too long: expected at most {limit} bytes but got {length}")]
    CapacityExceeded {
        /// Estimated payload length in bytes.
        length: usize,
        /// Byte capacity of the version 40 symbol at the requested level.
        limit: usize,
    },

    /// The bit stream exceeded the symbol's data capacity before padding.
    #[error("code length overflow ({bits} > {capacity} bits)")]
    Overflow {
        /// Number of bits produced by the segment.
        bits: usize,
        /// Data capacity of the selected symbol in bits.
        capacity: usize,
    },
}

impl Error {
    /// True when the error means the input cannot fit the symbol.
    pub fn is_capacity_error(&self) -> bool {
        matches!(
            self,
            Error::CapacityExceeded { .. } | Error::Overflow { .. }
        )
    }
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
