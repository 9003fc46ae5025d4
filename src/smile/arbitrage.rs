//! Butterfly arbitrage reporting for smiles.
//!
//! A smile admits butterfly arbitrage where the risk-neutral density implied
//! by its option prices turns negative.
//!
//! # References
//! - Breeden, D.T. & Litzenberger, R.H. "Prices of State-Contingent Claims
//!   Implicit in Option Prices" (1978)

use serde::{Deserialize, Serialize};

/// Result of scanning one smile for butterfly arbitrage.
///
/// A scan only certifies a smile when every strike on its grid could be
/// priced. Strikes with a non-positive or non-finite vol land in
/// `unusable_strikes` and keep `is_free` false.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArbitrageReport {
    /// Whether every scanned strike was usable and none violated.
    pub is_free: bool,
    /// Strikes where the density came out negative.
    pub butterfly_violations: Vec<ButterflyViolation>,
    /// Strikes the scan could not evaluate.
    #[serde(default)]
    pub unusable_strikes: Vec<f64>,
}

impl ArbitrageReport {
    /// Build a report from a scan's violations and the strikes it had to skip.
    pub fn from_scan(
        butterfly_violations: Vec<ButterflyViolation>,
        unusable_strikes: Vec<f64>,
    ) -> Self {
        Self {
            is_free: butterfly_violations.is_empty() && unusable_strikes.is_empty(),
            butterfly_violations,
            unusable_strikes,
        }
    }

    /// Build a report from violations alone, every strike having been usable.
    pub fn from_violations(butterfly_violations: Vec<ButterflyViolation>) -> Self {
        Self::from_scan(butterfly_violations, Vec::new())
    }

    /// The violation with the largest magnitude, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use betavol::smile::{ArbitrageReport, ButterflyViolation};
    ///
    /// let report = ArbitrageReport::from_violations(vec![
    ///     ButterflyViolation { strike: 150.0, density: -0.0002, magnitude: 0.0002 },
    ///     ButterflyViolation { strike: 170.0, density: -0.0009, magnitude: 0.0009 },
    /// ]);
    /// assert!(!report.is_free);
    /// assert_eq!(report.worst_violation().unwrap().strike, 170.0);
    /// ```
    pub fn worst_violation(&self) -> Option<&ButterflyViolation> {
        self.butterfly_violations
            .iter()
            .max_by(|a, b| a.magnitude.total_cmp(&b.magnitude))
    }
}

/// Negative density at one strike.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ButterflyViolation {
    pub strike: f64,
    /// Risk-neutral density (negative).
    pub density: f64,
    /// `|density|`.
    pub magnitude: f64,
}
