//! European put under Black-Scholes on a forward.
//!
//! ```text
//! d₁ = (ln(F/K) + (r + σ²/2)·T) / (σ√T)
//! d₂ = d₁ − σ√T
//! P  = K·e^(−rT)·Φ(−d₂) − F·Φ(−d₁)
//! ```
//!
//! Only the strike leg is discounted; `F` enters undiscounted. With `r = 0`
//! this is the undiscounted Black put.

use crate::conventions::log_moneyness;
use crate::error::{self, BetaVolError};
use crate::pricing::normal::norm_cdf;
use crate::surface::VolSurface;
use crate::types::Price;
use crate::validate::{
    broadcast_at, broadcast_len, validate_finite, validate_maturity, validate_price,
    validate_volatility,
};

/// Black-Scholes European put price.
///
/// Inputs are not validated: a non-positive `forward`, `strike`, `maturity`
/// or `sigma` propagates as NaN or infinity.
///
/// # Examples
/// ```
/// use betavol::pricing::price_put;
///
/// let p = price_put(100.0, 100.0, 1.0, 0.0, 0.2);
/// assert!((p - 7.965_567_455_405_804).abs() < 1e-9);
/// ```
pub fn price_put(forward: f64, strike: f64, maturity: f64, rate: f64, sigma: f64) -> f64 {
    let sd = sigma * maturity.sqrt();
    let d1 = ((forward / strike).ln() + (rate + 0.5 * sigma * sigma) * maturity) / sd;
    let d2 = d1 - sd;
    strike * (-rate * maturity).exp() * norm_cdf(-d2) - forward * norm_cdf(-d1)
}

/// Put prices over broadcast arrays of inputs.
///
/// Every input must have the common length or length 1.
///
/// # Errors
/// Returns [`BetaVolError::InvalidInput`] if the lengths cannot broadcast.
pub fn put_prices(
    forwards: &[f64],
    strikes: &[f64],
    maturities: &[f64],
    rates: &[f64],
    sigmas: &[f64],
) -> error::Result<Vec<f64>> {
    let n = broadcast_len(&[
        ("forward", forwards.len()),
        ("strike", strikes.len()),
        ("maturity", maturities.len()),
        ("rate", rates.len()),
        ("sigma", sigmas.len()),
    ])?;
    Ok((0..n)
        .map(|i| {
            price_put(
                broadcast_at(forwards, i),
                broadcast_at(strikes, i),
                broadcast_at(maturities, i),
                broadcast_at(rates, i),
                broadcast_at(sigmas, i),
            )
        })
        .collect())
}

/// Black-Scholes put price with input checks.
///
/// # Errors
/// - [`BetaVolError::InvalidPrice`] if `forward` or `strike` is not positive
/// - [`BetaVolError::InvalidMaturity`] if `maturity` is not positive
/// - [`BetaVolError::InvalidVolatility`] if `sigma` is not positive
/// - [`BetaVolError::InvalidInput`] if `rate` is not finite
/// - [`BetaVolError::NumericalError`] if the price is not finite
pub fn try_price_put(
    forward: f64,
    strike: f64,
    maturity: f64,
    rate: f64,
    sigma: f64,
) -> error::Result<Price> {
    let checked = validate_price(forward, "forward")
        .and_then(|_| validate_price(strike, "strike"))
        .and_then(|_| validate_maturity(maturity))
        .and_then(|_| validate_volatility(sigma))
        .and_then(|_| validate_finite(rate, "rate"));
    if let Err(e) = checked {
        #[cfg(feature = "logging")]
        tracing::debug!(forward, strike, maturity, rate, sigma, error = %e, "put pricing rejected");
        return Err(e);
    }

    let price = price_put(forward, strike, maturity, rate, sigma);
    if !price.is_finite() {
        return Err(BetaVolError::NumericalError {
            message: format!(
                "put price is not finite (F={forward}, K={strike}, T={maturity}, r={rate}, σ={sigma}): {price}"
            ),
        });
    }
    Ok(Price(price))
}

/// Price a put with the vol read off a surface at `M = ln(K / F)`.
///
/// # Examples
/// ```
/// use betavol::pricing::{price_put, price_put_on_surface};
/// use betavol::surface::{BetaSurface, BetaVector};
///
/// let surface = BetaSurface::new(BetaVector::new([0.2, 0.0, 0.0, 0.0, 0.0])?);
/// let p = price_put_on_surface(&surface, 100.0, 100.0, 1.0, 0.0)?;
/// assert_eq!(p.0, price_put(100.0, 100.0, 1.0, 0.0, 0.2));
/// # Ok::<(), betavol::BetaVolError>(())
/// ```
///
/// # Errors
/// Propagates validation errors from the surface and from [`try_price_put`];
/// a surface vol that is not positive yields
/// [`BetaVolError::InvalidVolatility`].
pub fn price_put_on_surface<S: VolSurface + ?Sized>(
    surface: &S,
    forward: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
) -> error::Result<Price> {
    validate_price(forward, "forward")?;
    validate_price(strike, "strike")?;
    let sigma = surface.black_vol(expiry, log_moneyness(strike, forward))?;
    try_price_put(forward, strike, expiry, rate, sigma.0)
}
