//! # betavol
//!
//! Five-factor parametric implied volatility surface and Black-Scholes put
//! pricing on a forward.
//!
//! A beta vector `(β1, .., β5)` (level, term-structure slope, moneyness
//! slope, smile attenuation, smirk) maps log-moneyness and maturity to an
//! implied vol; the put pricer consumes that vol.
//!
//! ## Architecture
//!
//! - **`surface`** — The beta surface: plain evaluation, term decomposition,
//!   validated [`BetaSurface`] and calendar diagnostics
//! - **`smile`** — Strike-space slices of the surface with density and
//!   butterfly checks
//! - **`pricing`** — Black-Scholes put on a forward, plain and checked
//! - **`conventions`** — Maturity constants and moneyness transforms
//!
//! ## Design
//!
//! - **Two tiers.** [`evaluate_surface`](surface::evaluate_surface) and
//!   [`price_put`](pricing::price_put) take and return bare `f64` and never
//!   fail: invalid inputs come back as NaN or infinity. The checked API
//!   ([`BetaSurface`], [`try_price_put`](pricing::try_price_put)) validates
//!   inputs and returns [`Result`].
//! - **Newtypes for outputs, bare `f64` for inputs.** [`Vol`], [`Variance`]
//!   and [`Price`] wrap values returned by the checked API.
//! - **No panics.** Library code never calls `unwrap()` or `expect()`.
//! - **Immutable and thread-safe.** Every type is a plain value; surfaces
//!   can be shared across pricing threads.
//! - **Serializable.** Beta vectors, conventions and surfaces implement Serde
//!   with validation on deserialization.
//!
//! ## Example
//!
//! ```
//! use betavol::pricing::price_put_on_surface;
//! use betavol::surface::{BetaSurface, BetaVector, VolSurface};
//!
//! let beta = BetaVector::new([0.2, 0.05, -0.1, 0.01, 0.02])?;
//! let surface = BetaSurface::new(beta);
//!
//! let vol = surface.black_vol(0.5, (90.0_f64 / 100.0).ln())?;
//! let put = price_put_on_surface(&surface, 100.0, 90.0, 0.5, 0.01)?;
//! assert!(vol.0 > 0.0 && put.0 > 0.0);
//! # Ok::<(), betavol::BetaVolError>(())
//! ```

pub mod conventions;
pub mod error;
pub mod pricing;
pub mod smile;
pub mod surface;
pub mod types;
mod validate;

#[doc(inline)]
pub use error::{BetaVolError, Result};
#[doc(inline)]
pub use smile::SmileSection;
#[doc(inline)]
pub use surface::{BetaSurface, BetaVector, VolSurface};
#[doc(inline)]
pub use types::{Price, Variance, Vol};
