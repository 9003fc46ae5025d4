//! Error types for the betavol library.
//!
//! The plain `f64` entry points ([`evaluate_surface`](crate::surface::evaluate_surface),
//! [`price_put`](crate::pricing::price_put)) never fail: domain-invalid inputs
//! come back as NaN or infinity. Everything else returns
//! `Result<T, BetaVolError>` so callers can tell which input was at fault.

use thiserror::Error;

/// Convenience type alias for results in this crate.
pub type Result<T> = std::result::Result<T, BetaVolError>;

/// Errors raised by the checked surface and pricing API.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BetaVolError {
    /// Maturity is zero, negative, or not finite.
    #[error("invalid maturity: must be positive and finite, got {value}")]
    InvalidMaturity { value: f64 },

    /// Volatility is zero, negative, or not finite.
    #[error("invalid volatility: must be positive and finite, got {value}")]
    InvalidVolatility { value: f64 },

    /// Forward or strike is zero, negative, or not finite.
    #[error("invalid price: {name} must be positive and finite, got {value}")]
    InvalidPrice {
        /// Which price input was rejected ("forward" or "strike").
        name: &'static str,
        value: f64,
    },

    /// Any other malformed input (mismatched array lengths, bad configuration).
    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    /// The model produced a non-finite or otherwise unusable value.
    #[error("numerical error: {message}")]
    NumericalError { message: String },
}
