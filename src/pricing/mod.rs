//! Black-Scholes pricing on a forward.
//!
//! - [`price_put`] / [`put_prices`] — plain `f64` put pricing, no validation
//! - [`try_price_put`] — the same formula with input checks
//! - [`price_put_on_surface`] — vol read off a [`VolSurface`](crate::surface::VolSurface)

pub mod black;
pub mod normal;

pub use black::{price_put, price_put_on_surface, put_prices, try_price_put};
pub use normal::{norm_cdf, norm_pdf};
