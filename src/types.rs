//! Core domain types.
//!
//! These newtypes wrap `f64` so values returned by the checked API cannot be
//! silently swapped (a volatility passed where a variance is expected).
//!
//! **Outputs use newtypes**, **inputs use bare `f64`**: `black_vol(expiry,
//! moneyness)` takes raw floats and returns a [`Vol`].
//!
//! # Why no `Eq` or `Ord`?
//! `f64` has no total order because of `NaN`. We derive `PartialEq` and
//! `PartialOrd` only.

use serde::{Deserialize, Serialize};

/// Implied volatility `σ`, annualized. 0.20 is 20%.
///
/// # Examples
/// ```
/// use betavol::types::Vol;
/// let vol = Vol(0.20);
/// assert_eq!(vol.0, 0.20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Vol(pub f64);

/// Total variance `σ²T`.
///
/// Calendar checks compare total variance across tenors because it must be
/// non-decreasing in time.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Variance(pub f64);

/// Option premium, in the units of the forward and strike.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Price(pub f64);
