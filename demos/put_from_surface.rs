//! Price European puts with vols read off a beta surface.
//!
//! Shows how to:
//!   - Price a put directly with Black-Scholes on a forward
//!   - Price a strip of puts using surface vols
//!   - Handle invalid inputs through the checked API
//!
//! Run with: `cargo run --example put_from_surface`

use betavol::BetaVolError;
use betavol::conventions::{forward_price, log_moneyness};
use betavol::pricing::{price_put, price_put_on_surface, try_price_put};
use betavol::surface::{BetaSurface, BetaVector, VolSurface};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let spot = 100.0;
    let rate = 0.03;
    let expiry = 0.5;
    let forward = forward_price(spot, rate, expiry);

    // ---------------------------------------------------------------
    // 1. Plain Black-Scholes put
    // ---------------------------------------------------------------

    let atm = price_put(100.0, 100.0, 1.0, 0.0, 0.2);
    println!("ATM put (F=K=100, T=1, r=0, σ=20%): {atm:.6}");

    // ---------------------------------------------------------------
    // 2. Strip of puts priced off the surface
    // ---------------------------------------------------------------

    let surface = BetaSurface::new(BetaVector::new([0.20, 0.06, -0.12, 0.015, 0.03])?);

    println!("\n--- Put strip, T={expiry}y, F={forward:.4} ---\n");
    println!("{:>8} {:>10} {:>10} {:>12}", "Strike", "M", "Vol", "Put");
    println!("{}", "-".repeat(43));
    for strike in [80.0, 85.0, 90.0, 95.0, 100.0, 105.0, 110.0] {
        let m = log_moneyness(strike, forward);
        let vol = surface.black_vol(expiry, m)?;
        let put = price_put_on_surface(&surface, forward, strike, expiry, rate)?;
        println!(
            "{strike:>8.0} {m:>10.4} {:>9.2}% {:>12.6}",
            vol.0 * 100.0,
            put.0
        );
    }

    // ---------------------------------------------------------------
    // 3. Invalid inputs
    // ---------------------------------------------------------------

    println!("\n--- Checked pricing ---\n");
    println!("  plain, σ=0:   {}", price_put(100.0, 100.0, 1.0, 0.0, 0.0));
    match try_price_put(100.0, 100.0, 1.0, 0.0, 0.0) {
        Err(e @ BetaVolError::InvalidVolatility { .. }) => println!("  checked, σ=0: {e}"),
        other => println!("  checked, σ=0: unexpected {other:?}"),
    }

    Ok(())
}
