//! One expiry of a beta surface, seen in strike space.
//!
//! Strikes map to surface moneyness through `M = ln(K / F)`, so the downside
//! wing (K < F) is where the smirk term loads.

use crate::conventions::log_moneyness;
use crate::error::{self, BetaVolError};
use crate::pricing::price_put;
use crate::smile::SmileSection;
use crate::smile::arbitrage::{ArbitrageReport, ButterflyViolation};
use crate::surface::{BetaSurface, VolSurface};
use crate::types::Vol;
use crate::validate::{validate_maturity, validate_price};

/// Strike-space smile of a [`BetaSurface`] at a fixed expiry and forward.
///
/// # Examples
/// ```
/// use betavol::smile::{BetaSmile, SmileSection};
/// use betavol::surface::{BetaSurface, BetaVector};
///
/// let surface = BetaSurface::new(BetaVector::new([0.2, 0.0, 0.0, 0.0, 0.0])?);
/// let smile = BetaSmile::new(surface, 1.0, 100.0)?;
/// assert!((smile.vol(80.0)?.0 - 0.2).abs() < 1e-15);
/// assert!(smile.density(100.0)? > 0.0);
/// # Ok::<(), betavol::BetaVolError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BetaSmile {
    surface: BetaSurface,
    expiry: f64,
    forward: f64,
}

impl BetaSmile {
    /// Slice `surface` at `expiry` for an underlying with the given forward.
    ///
    /// # Errors
    /// Returns [`BetaVolError::InvalidMaturity`] or [`BetaVolError::InvalidPrice`]
    /// for non-positive expiry or forward.
    pub fn new(surface: BetaSurface, expiry: f64, forward: f64) -> error::Result<Self> {
        validate_maturity(expiry)?;
        validate_price(forward, "forward")?;
        Ok(Self {
            surface,
            expiry,
            forward,
        })
    }

    /// The underlying surface.
    pub fn surface(&self) -> &BetaSurface {
        &self.surface
    }

    /// Undiscounted put price at `strike`, with vol read off the smile.
    fn undiscounted_put(&self, strike: f64) -> error::Result<f64> {
        let sigma = self.vol(strike)?.0;
        if sigma <= 0.0 {
            return Err(BetaVolError::NumericalError {
                message: format!("beta smile vol is non-positive at K={strike}: {sigma}"),
            });
        }
        Ok(price_put(self.forward, strike, self.expiry, 0.0, sigma))
    }
}

impl SmileSection for BetaSmile {
    fn vol(&self, strike: f64) -> error::Result<Vol> {
        validate_price(strike, "strike")?;
        self.surface
            .black_vol(self.expiry, log_moneyness(strike, self.forward))
    }

    /// Risk-neutral density from the second strike difference of
    /// undiscounted put prices:
    ///
    /// ```text
    /// q(K) ≈ [P(K + h) − 2·P(K) + P(K − h)] / h²
    /// ```
    ///
    /// with `h = min(10⁻³·F, K/2)`.
    ///
    /// # Errors
    /// Returns [`BetaVolError::NumericalError`] if the vol at any stencil
    /// strike is non-positive or not finite.
    fn density(&self, strike: f64) -> error::Result<f64> {
        validate_price(strike, "strike")?;
        let h = (1e-3 * self.forward).min(0.5 * strike);
        let p_m = self.undiscounted_put(strike - h)?;
        let p_0 = self.undiscounted_put(strike)?;
        let p_p = self.undiscounted_put(strike + h)?;
        Ok((p_p - 2.0 * p_0 + p_m) / (h * h))
    }

    fn forward(&self) -> f64 {
        self.forward
    }

    fn expiry(&self) -> f64 {
        self.expiry
    }

    /// Scan 200 log-moneyness points on \[−1.5, 1.5\] for negative density.
    ///
    /// Points where the smile has no usable vol are recorded as unusable
    /// and keep the report from certifying the smile.
    fn is_arbitrage_free(&self) -> error::Result<ArbitrageReport> {
        const N: usize = 200;
        const M_MIN: f64 = -1.5;
        const M_MAX: f64 = 1.5;
        /// Absorbs rounding in the second difference of deep in-the-money puts.
        const TOL: f64 = 1e-8;

        let mut violations = Vec::new();
        let mut unusable = Vec::new();
        for i in 0..N {
            let m = M_MIN + (M_MAX - M_MIN) * (i as f64) / ((N - 1) as f64);
            let strike = self.forward * m.exp();
            let density = match self.density(strike) {
                Ok(d) => d,
                Err(_e) => {
                    #[cfg(feature = "logging")]
                    tracing::debug!(strike, error = %_e, "unusable strike in butterfly scan");
                    unusable.push(strike);
                    continue;
                }
            };
            if density < -TOL {
                violations.push(ButterflyViolation {
                    strike,
                    density,
                    magnitude: density.abs(),
                });
            }
        }

        Ok(ArbitrageReport::from_scan(violations, unusable))
    }
}
