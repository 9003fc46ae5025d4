//! Single-expiry views of a volatility surface.
//!
//! A smile is the relationship between strike and implied volatility at a
//! fixed expiry and forward. [`BetaSmile`] slices a
//! [`BetaSurface`](crate::surface::BetaSurface) this way.

pub mod arbitrage;
pub mod beta;

pub use arbitrage::{ArbitrageReport, ButterflyViolation};
pub use beta::BetaSmile;

use crate::error;
use crate::types::{Variance, Vol};

/// A single-tenor volatility smile in strike space.
///
/// # Thread Safety
/// All implementations must be `Send + Sync` for use in concurrent pricing.
pub trait SmileSection: Send + Sync {
    /// Implied Black volatility σ at the given strike.
    fn vol(&self, strike: f64) -> error::Result<Vol>;

    /// Total Black variance σ²T at the given strike.
    fn variance(&self, strike: f64) -> error::Result<Variance> {
        let v = self.vol(strike)?;
        Ok(Variance(v.0 * v.0 * self.expiry()))
    }

    /// Risk-neutral probability density q(K) via Breeden-Litzenberger.
    fn density(&self, strike: f64) -> error::Result<f64>;

    /// Forward price F at this tenor.
    fn forward(&self) -> f64;

    /// Time to expiry T in years.
    fn expiry(&self) -> f64;

    /// Scan this smile for butterfly arbitrage.
    fn is_arbitrage_free(&self) -> error::Result<ArbitrageReport>;
}
