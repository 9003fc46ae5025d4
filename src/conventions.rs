//! Model conventions and moneyness transforms.
//!
//! [`SurfaceConventions`] holds the two fixed maturities of the beta surface:
//! the term-structure decay scale and the long end at which the smile and
//! smirk terms switch sign. Both are deserializable so a surface's
//! configuration can live next to its beta vector.

use serde::{Deserialize, Serialize};

use crate::error::{BetaVolError, Result};
use crate::validate::validate_positive;

/// Term-structure decay scale `T_CONV` in years.
pub const T_CONV: f64 = 0.25;

/// Reference long maturity `T_MAX` in years. `ln(T / T_MAX)` is zero here.
pub const T_MAX: f64 = 5.0;

/// Maturity constants used by the beta surface.
///
/// # Examples
/// ```
/// use betavol::conventions::SurfaceConventions;
///
/// let conv: SurfaceConventions = serde_json::from_str(r#"{"t_conv":0.5,"t_max":10.0}"#)?;
/// assert_eq!(conv.t_max(), 10.0);
/// assert!(serde_json::from_str::<SurfaceConventions>(r#"{"t_conv":0.0,"t_max":5.0}"#).is_err());
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SurfaceConventionsRaw", into = "SurfaceConventionsRaw")]
pub struct SurfaceConventions {
    t_conv: f64,
    t_max: f64,
}

#[derive(Serialize, Deserialize)]
struct SurfaceConventionsRaw {
    t_conv: f64,
    t_max: f64,
}

impl TryFrom<SurfaceConventionsRaw> for SurfaceConventions {
    type Error = BetaVolError;
    fn try_from(raw: SurfaceConventionsRaw) -> std::result::Result<Self, Self::Error> {
        Self::new(raw.t_conv, raw.t_max)
    }
}

impl From<SurfaceConventions> for SurfaceConventionsRaw {
    fn from(c: SurfaceConventions) -> Self {
        Self {
            t_conv: c.t_conv,
            t_max: c.t_max,
        }
    }
}

impl SurfaceConventions {
    /// Create conventions with custom maturities.
    ///
    /// # Errors
    /// Returns [`BetaVolError::InvalidInput`] if either value is not
    /// positive and finite.
    pub fn new(t_conv: f64, t_max: f64) -> Result<Self> {
        validate_positive(t_conv, "t_conv")?;
        validate_positive(t_max, "t_max")?;
        Ok(Self { t_conv, t_max })
    }

    /// Term-structure decay scale.
    pub fn t_conv(&self) -> f64 {
        self.t_conv
    }

    /// Reference long maturity.
    pub fn t_max(&self) -> f64 {
        self.t_max
    }
}

impl Default for SurfaceConventions {
    fn default() -> Self {
        Self {
            t_conv: T_CONV,
            t_max: T_MAX,
        }
    }
}

/// Convert a strike to log-moneyness: m = ln(K / F).
pub fn log_moneyness(strike: f64, forward: f64) -> f64 {
    (strike / forward).ln()
}

/// Invert [`log_moneyness`]: K = F · exp(m).
pub fn strike_from_log_moneyness(moneyness: f64, forward: f64) -> f64 {
    forward * moneyness.exp()
}

/// Compute forward price from spot: F = S · exp(r · T).
pub fn forward_price(spot: f64, rate: f64, expiry: f64) -> f64 {
    spot * (rate * expiry).exp()
}
