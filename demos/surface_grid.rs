//! Evaluate a beta surface on a (maturity x moneyness) grid.
//!
//! Shows how to:
//!   - Load a beta vector from one row of a beta timeseries (JSON)
//!   - Print the implied vol grid
//!   - Break one point into its five terms
//!   - Run arbitrage diagnostics
//!
//! Run with: `cargo run --example surface_grid`

use betavol::surface::{BetaSurface, BetaVector, VolSurface, evaluate_surface_batch};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ---------------------------------------------------------------
    // 1. Beta vector as produced by an external estimation
    // ---------------------------------------------------------------

    let row = r#"{"beta1":0.20,"beta2":0.06,"beta3":-0.12,"beta4":0.015,"beta5":0.03}"#;
    let beta: BetaVector = serde_json::from_str(row)?;
    let surface = BetaSurface::new(beta);

    println!("Beta vector");
    println!("  level             {:>8.4}", beta.level());
    println!("  maturity slope    {:>8.4}", beta.maturity_slope());
    println!("  moneyness slope   {:>8.4}", beta.moneyness_slope());
    println!("  smile attenuation {:>8.4}", beta.smile_attenuation());
    println!("  smirk             {:>8.4}", beta.smirk());

    // ---------------------------------------------------------------
    // 2. Vol grid
    // ---------------------------------------------------------------

    let moneyness = [-0.4, -0.2, -0.1, 0.0, 0.1, 0.2, 0.4];
    let maturities = [0.1, 0.25, 0.5, 1.0, 2.0, 5.0];

    println!("\n--- Vol grid (T x M) ---\n");
    print!("{:>6}", "T\\M");
    for m in moneyness {
        print!("{m:>9.2}");
    }
    println!();
    println!("{}", "-".repeat(6 + 9 * moneyness.len()));

    for t in maturities {
        let row = evaluate_surface_batch(&moneyness, &[t], beta.as_array())?;
        print!("{t:>6.2}");
        for sigma in row {
            print!("{:>8.2}%", sigma * 100.0);
        }
        println!();
    }

    // ---------------------------------------------------------------
    // 3. Term decomposition
    // ---------------------------------------------------------------

    let terms = surface.terms(0.5, -0.2)?;
    println!("\n--- Terms at T=0.5, M=-0.2 ---\n");
    println!("  level           {:>9.5}", terms.level);
    println!("  term structure  {:>9.5}", terms.term_structure);
    println!("  moneyness slope {:>9.5}", terms.moneyness_slope);
    println!("  smile           {:>9.5}", terms.smile);
    println!("  smirk           {:>9.5}", terms.smirk);
    println!("  total           {:>9.5}", terms.total());

    // ---------------------------------------------------------------
    // 4. Diagnostics
    // ---------------------------------------------------------------

    let diag = surface.diagnostics()?;
    println!("\n--- Diagnostics ---\n");
    println!("  arbitrage-free:      {}", diag.is_free);
    println!("  calendar violations: {}", diag.calendar_violations.len());
    println!("  butterfly violations: {}", diag.butterfly_violation_count());
    println!("  non-positive vols:   {}", diag.non_positive_vols.len());

    Ok(())
}
