//! Input validation helpers for the checked API.
//!
//! Uses `!is_finite()` to reject NaN, +Inf, and -Inf uniformly.

use crate::error::{BetaVolError, Result};

/// Maturity must be strictly positive and finite.
pub(crate) fn validate_maturity(value: f64) -> Result<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(BetaVolError::InvalidMaturity { value });
    }
    Ok(value)
}

/// Volatility must be strictly positive and finite.
pub(crate) fn validate_volatility(value: f64) -> Result<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(BetaVolError::InvalidVolatility { value });
    }
    Ok(value)
}

/// Forward and strike must be strictly positive and finite.
pub(crate) fn validate_price(value: f64, name: &'static str) -> Result<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(BetaVolError::InvalidPrice { name, value });
    }
    Ok(value)
}

/// Validate that a value is strictly positive and finite.
pub(crate) fn validate_positive(value: f64, name: &str) -> Result<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(BetaVolError::InvalidInput {
            message: format!("{name} must be positive and finite, got {value}"),
        });
    }
    Ok(value)
}

/// Validate that a value is finite (allows zero and negatives).
pub(crate) fn validate_finite(value: f64, name: &str) -> Result<f64> {
    if !value.is_finite() {
        return Err(BetaVolError::InvalidInput {
            message: format!("{name} must be finite, got {value}"),
        });
    }
    Ok(value)
}

/// Resolve the output length of a numpy-style 1-D broadcast.
///
/// Every input length must equal the common length or be 1.
pub(crate) fn broadcast_len(lens: &[(&str, usize)]) -> Result<usize> {
    let n = lens
        .iter()
        .map(|&(_, len)| len)
        .find(|&len| len != 1)
        .unwrap_or(1);
    for &(name, len) in lens {
        if len != 1 && len != n {
            return Err(BetaVolError::InvalidInput {
                message: format!("{name} has length {len}, cannot broadcast to length {n}"),
            });
        }
    }
    Ok(n)
}

/// Element `i` of a broadcast input (length-1 inputs repeat).
#[inline]
pub(crate) fn broadcast_at(values: &[f64], i: usize) -> f64 {
    if values.len() == 1 { values[0] } else { values[i] }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maturity_rejects_zero_negative_and_nan() {
        for t in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                validate_maturity(t),
                Err(BetaVolError::InvalidMaturity { .. })
            ));
        }
        assert_eq!(validate_maturity(0.5).unwrap(), 0.5);
    }

    #[test]
    fn price_reports_name() {
        match validate_price(0.0, "strike") {
            Err(BetaVolError::InvalidPrice { name, .. }) => assert_eq!(name, "strike"),
            other => panic!("expected InvalidPrice, got {other:?}"),
        }
    }

    #[test]
    fn finite_allows_negative() {
        assert_eq!(validate_finite(-3.0, "rate").unwrap(), -3.0);
        assert!(validate_finite(f64::NEG_INFINITY, "rate").is_err());
    }

    #[test]
    fn broadcast_equal_lengths() {
        assert_eq!(broadcast_len(&[("m", 4), ("t", 4)]).unwrap(), 4);
    }

    #[test]
    fn broadcast_scalar_against_array() {
        assert_eq!(broadcast_len(&[("m", 1), ("t", 7)]).unwrap(), 7);
        assert_eq!(broadcast_len(&[("m", 1), ("t", 1)]).unwrap(), 1);
    }

    #[test]
    fn broadcast_empty_against_scalar() {
        assert_eq!(broadcast_len(&[("m", 0), ("t", 1)]).unwrap(), 0);
    }

    #[test]
    fn broadcast_rejects_mismatch() {
        let r = broadcast_len(&[("m", 3), ("t", 2)]);
        assert!(matches!(r, Err(BetaVolError::InvalidInput { .. })));
    }

    #[test]
    fn broadcast_at_repeats_scalar() {
        assert_eq!(broadcast_at(&[2.0], 5), 2.0);
        assert_eq!(broadcast_at(&[1.0, 2.0, 3.0], 2), 3.0);
    }
}
