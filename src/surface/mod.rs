//! Parametric volatility surface.
//!
//! The surface maps (maturity, moneyness) → implied vol through five shape
//! functions weighted by a [`BetaVector`]:
//!
//! - [`evaluate_surface`] / [`evaluate_surface_batch`] — plain `f64`
//!   evaluation, no validation
//! - [`BetaSurface`] — validated surface implementing [`VolSurface`]
//! - [`surface_terms`] — per-term decomposition of a surface value

pub mod arbitrage;
pub mod beta;
pub mod model;

pub use arbitrage::{CalendarViolation, NonPositiveVol, SurfaceDiagnostics};
pub use beta::BetaVector;
pub use model::{BetaSurface, SurfaceTerms, evaluate_surface, evaluate_surface_batch, surface_terms};

use crate::error;
use crate::smile::SmileSection;
use crate::types::{Variance, Vol};

/// A full volatility surface: (expiry, moneyness) → vol.
///
/// Moneyness is log-moneyness `ln(K / F)`. Implementations must be
/// `Send + Sync` and immutable after construction.
pub trait VolSurface: Send + Sync + std::fmt::Debug {
    /// Black implied volatility σ(T, M).
    fn black_vol(&self, expiry: f64, moneyness: f64) -> error::Result<Vol>;

    /// Black total variance σ²(T, M) · T.
    fn black_variance(&self, expiry: f64, moneyness: f64) -> error::Result<Variance> {
        let v = self.black_vol(expiry, moneyness)?;
        Ok(Variance(v.0 * v.0 * expiry))
    }

    /// The smile at `expiry` in strike space for the given forward.
    fn smile_at(&self, expiry: f64, forward: f64) -> error::Result<Box<dyn SmileSection>>;

    /// Surface-level arbitrage diagnostics (butterfly + calendar).
    fn diagnostics(&self) -> error::Result<SurfaceDiagnostics>;
}
