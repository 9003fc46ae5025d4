//! Five-factor parametric implied volatility surface.
//!
//! The surface is a sum of five shape functions of moneyness `M` and
//! maturity `T`, each scaled by one beta component:
//!
//! ```text
//! σ(M, T) = β1
//!         + β2 · exp(−√(T / T_CONV))
//!         + β3 · (M            if M ≥ 0
//!                 tanh(M)      if M < 0)
//!         + β4 · (1 − exp(−M²)) · ln(T / T_MAX)
//!         + β5 · (1 − exp((3M)³)) · ln(T / T_MAX)   only when M < 0
//! ```
//!
//! with `T_CONV = 0.25` and `T_MAX = 5`. The negative moneyness branch of the
//! slope is bounded by `tanh`, the smile term is symmetric in `M`, and the
//! smirk only loads the downside wing.

use serde::{Deserialize, Serialize};

use crate::conventions::SurfaceConventions;
use crate::error::{self, BetaVolError};
use crate::smile::{BetaSmile, SmileSection};
use crate::surface::VolSurface;
use crate::surface::arbitrage::{CalendarViolation, NonPositiveVol, SurfaceDiagnostics};
use crate::surface::beta::BetaVector;
use crate::types::Vol;
use crate::validate::{broadcast_at, broadcast_len, validate_finite, validate_maturity};

/// Contribution of each shape function to the surface value at one point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceTerms {
    /// β1.
    pub level: f64,
    /// β2 · exp(−√(T / T_CONV)).
    pub term_structure: f64,
    /// β3 · slope(M).
    pub moneyness_slope: f64,
    /// β4 · (1 − exp(−M²)) · ln(T / T_MAX).
    pub smile: f64,
    /// β5 · smirk(M, T), zero for M ≥ 0.
    pub smirk: f64,
}

impl SurfaceTerms {
    /// Sum of the five contributions, i.e. the surface value.
    pub fn total(&self) -> f64 {
        self.level + self.term_structure + self.moneyness_slope + self.smile + self.smirk
    }
}

/// Decompose the surface value at `(moneyness, maturity)` into its five terms.
///
/// No validation: a non-positive maturity yields NaN or infinite terms.
pub fn surface_terms(
    moneyness: f64,
    maturity: f64,
    beta: &[f64; 5],
    conventions: &SurfaceConventions,
) -> SurfaceTerms {
    let [b1, b2, b3, b4, b5] = *beta;
    let m = moneyness;
    let log_t = (maturity / conventions.t_max()).ln();

    let slope = if m >= 0.0 { m } else { m.tanh() };
    // Only the downside branch is evaluated: exp((3M)³) overflows for large
    // positive M and that value would be discarded anyway.
    let smirk = if m < 0.0 {
        b5 * (1.0 - (3.0 * m).powi(3).exp()) * log_t
    } else {
        0.0
    };

    SurfaceTerms {
        level: b1,
        term_structure: b2 * (-(maturity / conventions.t_conv()).sqrt()).exp(),
        moneyness_slope: b3 * slope,
        smile: b4 * (1.0 - (-m * m).exp()) * log_t,
        smirk,
    }
}

/// Implied volatility of the beta surface at `(moneyness, maturity)`.
///
/// Uses the default [`SurfaceConventions`]. Inputs are not validated:
/// `maturity ≤ 0` propagates as NaN or infinity.
///
/// # Examples
/// ```
/// use betavol::surface::evaluate_surface;
///
/// // At T = T_CONV the term-structure factor is exp(−1).
/// let sigma = evaluate_surface(0.0, 0.25, &[0.0, 0.2, 0.0, 0.0, 0.0]);
/// assert!((sigma - 0.2 * (-1.0_f64).exp()).abs() < 1e-15);
/// ```
pub fn evaluate_surface(moneyness: f64, maturity: f64, beta: &[f64; 5]) -> f64 {
    surface_terms(moneyness, maturity, beta, &SurfaceConventions::default()).total()
}

/// Evaluate the surface over arrays of moneyness and maturity.
///
/// Inputs broadcast like 1-D numpy arrays: each must have the common length
/// or length 1.
///
/// # Errors
/// Returns [`BetaVolError::InvalidInput`] if the lengths cannot broadcast.
pub fn evaluate_surface_batch(
    moneyness: &[f64],
    maturity: &[f64],
    beta: &[f64; 5],
) -> error::Result<Vec<f64>> {
    let n = broadcast_len(&[("moneyness", moneyness.len()), ("maturity", maturity.len())])?;
    let conventions = SurfaceConventions::default();
    Ok((0..n)
        .map(|i| {
            surface_terms(
                broadcast_at(moneyness, i),
                broadcast_at(maturity, i),
                beta,
                &conventions,
            )
            .total()
        })
        .collect())
}

/// Beta surface with validated parameters.
///
/// # Examples
/// ```
/// use betavol::surface::{BetaSurface, BetaVector, VolSurface};
///
/// let beta = BetaVector::new([0.2, 0.05, -0.1, 0.01, 0.02])?;
/// let surface = BetaSurface::new(beta);
///
/// let vol = surface.black_vol(1.0, -0.1)?;
/// assert!(vol.0 > 0.0);
///
/// let var = surface.black_variance(1.0, -0.1)?;
/// assert!((var.0 - vol.0 * vol.0).abs() < 1e-15);
///
/// assert!(surface.black_vol(0.0, 0.0).is_err());
/// # Ok::<(), betavol::BetaVolError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BetaSurface {
    beta: BetaVector,
    #[serde(default)]
    conventions: SurfaceConventions,
}

impl BetaSurface {
    /// Surface with the default maturity conventions.
    pub fn new(beta: BetaVector) -> Self {
        Self::with_conventions(beta, SurfaceConventions::default())
    }

    /// Surface with custom maturity conventions.
    pub fn with_conventions(beta: BetaVector, conventions: SurfaceConventions) -> Self {
        Self { beta, conventions }
    }

    /// The beta vector driving the surface.
    pub fn beta(&self) -> &BetaVector {
        &self.beta
    }

    /// The maturity conventions.
    pub fn conventions(&self) -> &SurfaceConventions {
        &self.conventions
    }

    /// Per-term decomposition at `(expiry, moneyness)`.
    ///
    /// # Errors
    /// Returns [`BetaVolError::InvalidMaturity`] for a non-positive expiry
    /// and [`BetaVolError::InvalidInput`] for non-finite moneyness.
    pub fn terms(&self, expiry: f64, moneyness: f64) -> error::Result<SurfaceTerms> {
        let checked =
            validate_maturity(expiry).and_then(|_| validate_finite(moneyness, "moneyness"));
        if let Err(e) = checked {
            #[cfg(feature = "logging")]
            tracing::debug!(expiry, moneyness, error = %e, "beta surface query rejected");
            return Err(e);
        }
        Ok(surface_terms(
            moneyness,
            expiry,
            self.beta.as_array(),
            &self.conventions,
        ))
    }

    /// Surface vol at every (tenor, moneyness) node of a grid.
    ///
    /// Row `i` holds the vols for `tenors[i]`.
    fn vol_grid(&self, tenors: &[f64], moneyness: &[f64]) -> error::Result<Vec<Vec<f64>>> {
        tenors
            .iter()
            .map(|&t| {
                moneyness
                    .iter()
                    .map(|&m| self.black_vol(t, m).map(|v| v.0))
                    .collect()
            })
            .collect()
    }
}

impl VolSurface for BetaSurface {
    fn black_vol(&self, expiry: f64, moneyness: f64) -> error::Result<Vol> {
        let sigma = self.terms(expiry, moneyness)?.total();
        if !sigma.is_finite() {
            return Err(BetaVolError::NumericalError {
                message: format!(
                    "beta surface is not finite at (T={expiry}, M={moneyness}): {sigma}"
                ),
            });
        }
        Ok(Vol(sigma))
    }

    fn smile_at(&self, expiry: f64, forward: f64) -> error::Result<Box<dyn SmileSection>> {
        Ok(Box::new(BetaSmile::new(*self, expiry, forward)?))
    }

    /// Calendar and butterfly scan over a fixed grid.
    ///
    /// Tenors: 0.1, 0.25, 0.5, 1, 2, 3, 5 years. Moneyness: 21 points on
    /// \[−1, 1\]. Butterfly checks use a forward of 100; the density sign
    /// does not depend on the forward scale.
    fn diagnostics(&self) -> error::Result<SurfaceDiagnostics> {
        const TENORS: [f64; 7] = [0.1, 0.25, 0.5, 1.0, 2.0, 3.0, 5.0];
        const N_MONEYNESS: usize = 21;
        const M_MIN: f64 = -1.0;
        const M_MAX: f64 = 1.0;
        const FORWARD: f64 = 100.0;
        /// Tolerance for decreasing total variance.
        const TOL: f64 = 1e-12;

        let moneyness: Vec<f64> = (0..N_MONEYNESS)
            .map(|i| M_MIN + (M_MAX - M_MIN) * (i as f64) / ((N_MONEYNESS - 1) as f64))
            .collect();
        let vols = self.vol_grid(&TENORS, &moneyness)?;

        let mut non_positive_vols = Vec::new();
        for (i, &t) in TENORS.iter().enumerate() {
            for (j, &m) in moneyness.iter().enumerate() {
                if vols[i][j] <= 0.0 {
                    non_positive_vols.push(NonPositiveVol {
                        tenor: t,
                        moneyness: m,
                        vol: vols[i][j],
                    });
                }
            }
        }

        let mut calendar_violations = Vec::new();
        for i in 0..TENORS.len() - 1 {
            for (j, &m) in moneyness.iter().enumerate() {
                let (v_short, v_long) = (vols[i][j], vols[i + 1][j]);
                if v_short <= 0.0 || v_long <= 0.0 {
                    continue;
                }
                let w_short = v_short * v_short * TENORS[i];
                let w_long = v_long * v_long * TENORS[i + 1];
                if w_long < w_short - TOL {
                    calendar_violations.push(CalendarViolation {
                        moneyness: m,
                        tenor_short: TENORS[i],
                        tenor_long: TENORS[i + 1],
                        variance_short: w_short,
                        variance_long: w_long,
                    });
                }
            }
        }

        let smile_reports = TENORS
            .iter()
            .map(|&t| BetaSmile::new(*self, t, FORWARD)?.is_arbitrage_free())
            .collect::<error::Result<Vec<_>>>()?;

        let diagnostics =
            SurfaceDiagnostics::from_checks(smile_reports, calendar_violations, non_positive_vols);

        #[cfg(feature = "logging")]
        tracing::debug!(
            is_free = diagnostics.is_free,
            n_non_positive = diagnostics.non_positive_vols.len(),
            n_calendar = diagnostics.calendar_violations.len(),
            n_butterfly = diagnostics.butterfly_violation_count(),
            "beta surface diagnostics complete"
        );

        Ok(diagnostics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const BETA: [f64; 5] = [0.2, 0.05, -0.1, 0.01, 0.02];

    fn conv() -> SurfaceConventions {
        SurfaceConventions::default()
    }

    fn make_surface() -> BetaSurface {
        BetaSurface::new(BetaVector::new(BETA).unwrap())
    }

    // --- Faithful evaluation ---

    #[test]
    fn level_only_at_t_conv() {
        assert_eq!(evaluate_surface(0.0, 0.25, &[0.2, 0.0, 0.0, 0.0, 0.0]), 0.2);
    }

    #[test]
    fn term_structure_only_at_t_conv() {
        let sigma = evaluate_surface(0.0, 0.25, &[0.0, 0.2, 0.0, 0.0, 0.0]);
        assert_eq!(sigma, 0.2 * (-1.0_f64).exp());
        assert_abs_diff_eq!(sigma, 0.0736, epsilon = 1e-4);
    }

    #[test]
    fn hand_computed_point() {
        let (m, t) = (-0.2_f64, 0.5_f64);
        let log_t = (t / 5.0).ln();
        let expected = 0.2
            + 0.05 * (-(t / 0.25).sqrt()).exp()
            + -0.1 * m.tanh()
            + 0.01 * (1.0 - (-m * m).exp()) * log_t
            + 0.02 * (1.0 - ((3.0 * m).powi(3)).exp()) * log_t;
        assert_abs_diff_eq!(evaluate_surface(m, t, &BETA), expected, epsilon = 1e-15);
    }

    #[test]
    fn positive_moneyness_slope_is_linear() {
        let t = surface_terms(0.7, 1.0, &[0.0, 0.0, 2.0, 0.0, 0.0], &conv());
        assert_eq!(t.moneyness_slope, 1.4);
    }

    #[test]
    fn negative_moneyness_slope_is_tanh() {
        let m = -0.7_f64;
        let t = surface_terms(m, 1.0, &[0.0, 0.0, 1.0, 0.0, 0.0], &conv());
        let logistic = ((2.0 * m).exp() - 1.0) / ((2.0 * m).exp() + 1.0);
        assert_abs_diff_eq!(t.moneyness_slope, logistic, epsilon = 1e-15);
        assert!(t.moneyness_slope > -1.0);
    }

    #[test]
    fn negative_slope_bounded_deep_downside() {
        let t = surface_terms(-50.0, 1.0, &[0.0, 0.0, 1.0, 0.0, 0.0], &conv());
        assert_eq!(t.moneyness_slope, -1.0);
    }

    #[test]
    fn smirk_zero_for_non_negative_moneyness() {
        for m in [0.0, 0.1, 1.0, 5.0] {
            let t = surface_terms(m, 0.5, &[0.0, 0.0, 0.0, 0.0, 1e6], &conv());
            assert_eq!(t.smirk, 0.0, "smirk should be gated at M={m}");
        }
    }

    #[test]
    fn large_positive_moneyness_stays_finite() {
        // exp((3M)³) would overflow at M = 10
        let sigma = evaluate_surface(10.0, 1.0, &[0.2, 0.0, 0.0, 0.0, 1.0]);
        assert_eq!(sigma, 0.2);
    }

    #[test]
    fn smirk_sign_below_t_max() {
        // M < 0 and T < T_MAX: (1 − exp(negative)) > 0 and ln(T/T_MAX) < 0
        let t = surface_terms(-0.3, 1.0, &[0.0, 0.0, 0.0, 0.0, 1.0], &conv());
        assert!(t.smirk < 0.0);
    }

    #[test]
    fn smile_vanishes_at_t_max() {
        let t = surface_terms(1.0, 5.0, &[0.2, 0.1, 0.3, 0.4, 0.0], &conv());
        assert_eq!(t.smile, 0.0);
    }

    #[test]
    fn smile_term_symmetric() {
        for m in [0.05, 0.3, 1.2] {
            let up = surface_terms(m, 0.7, &BETA, &conv());
            let down = surface_terms(-m, 0.7, &BETA, &conv());
            assert_eq!(up.smile, down.smile);
        }
    }

    #[test]
    fn continuous_at_zero_moneyness() {
        let at = evaluate_surface(0.0, 1.0, &BETA);
        let left = evaluate_surface(-1e-12, 1.0, &BETA);
        let right = evaluate_surface(1e-12, 1.0, &BETA);
        assert_abs_diff_eq!(at, left, epsilon = 1e-10);
        assert_abs_diff_eq!(at, right, epsilon = 1e-10);
    }

    #[test]
    fn non_positive_maturity_is_not_finite() {
        assert!(!evaluate_surface(0.0, 0.0, &BETA).is_finite());
        assert!(evaluate_surface(0.0, -1.0, &BETA).is_nan());
    }

    #[test]
    fn custom_conventions_shift_smile_zero() {
        let c = SurfaceConventions::new(0.25, 2.0).unwrap();
        let t = surface_terms(0.5, 2.0, &[0.0, 0.0, 0.0, 1.0, 0.0], &c);
        assert_eq!(t.smile, 0.0);
    }

    // --- Batch ---

    #[test]
    fn batch_matches_scalar() {
        let ms = [-0.5, -0.1, 0.0, 0.2, 0.8];
        let ts = [0.1, 0.5, 1.0, 2.0, 5.0];
        let out = evaluate_surface_batch(&ms, &ts, &BETA).unwrap();
        for i in 0..ms.len() {
            assert_eq!(out[i], evaluate_surface(ms[i], ts[i], &BETA));
        }
    }

    #[test]
    fn batch_broadcasts_scalar_maturity() {
        let ms = [-0.5, 0.0, 0.5];
        let out = evaluate_surface_batch(&ms, &[1.0], &BETA).unwrap();
        assert_eq!(out.len(), 3);
        assert_eq!(out[2], evaluate_surface(0.5, 1.0, &BETA));
    }

    #[test]
    fn batch_rejects_mismatched_lengths() {
        let r = evaluate_surface_batch(&[0.0, 0.1], &[1.0, 2.0, 3.0], &BETA);
        assert!(matches!(r, Err(BetaVolError::InvalidInput { .. })));
    }

    // --- Checked surface ---

    #[test]
    fn black_vol_matches_free_function() {
        let s = make_surface();
        let v = s.black_vol(0.75, -0.2).unwrap();
        assert_eq!(v.0, evaluate_surface(-0.2, 0.75, &BETA));
    }

    #[test]
    fn black_vol_rejects_zero_expiry() {
        let r = make_surface().black_vol(0.0, 0.0);
        assert!(matches!(r, Err(BetaVolError::InvalidMaturity { .. })));
    }

    #[test]
    fn black_vol_rejects_nan_moneyness() {
        let r = make_surface().black_vol(1.0, f64::NAN);
        assert!(matches!(r, Err(BetaVolError::InvalidInput { .. })));
    }

    #[test]
    fn black_variance_is_vol_squared_times_t() {
        let s = make_surface();
        let v = s.black_vol(2.0, 0.3).unwrap();
        let w = s.black_variance(2.0, 0.3).unwrap();
        assert_abs_diff_eq!(w.0, v.0 * v.0 * 2.0, epsilon = 1e-15);
    }

    #[test]
    fn terms_total_equals_black_vol() {
        let s = make_surface();
        let terms = s.terms(1.5, -0.4).unwrap();
        assert_eq!(terms.total(), s.black_vol(1.5, -0.4).unwrap().0);
    }

    #[test]
    fn smile_at_uses_log_moneyness() {
        let s = make_surface();
        let smile = s.smile_at(1.0, 100.0).unwrap();
        let v = smile.vol(90.0).unwrap();
        assert_abs_diff_eq!(
            v.0,
            evaluate_surface((0.9_f64).ln(), 1.0, &BETA),
            epsilon = 1e-15
        );
    }

    #[test]
    fn serde_round_trip() {
        let s = make_surface();
        let json = serde_json::to_string(&s).unwrap();
        let s2: BetaSurface = serde_json::from_str(&json).unwrap();
        assert_eq!(s, s2);
    }

    #[test]
    fn serde_defaults_conventions() {
        let json = r#"{"beta":{"beta1":0.2,"beta2":0.0,"beta3":0.0,"beta4":0.0,"beta5":0.0}}"#;
        let s: BetaSurface = serde_json::from_str(json).unwrap();
        assert_eq!(*s.conventions(), SurfaceConventions::default());
    }

    // --- Diagnostics ---

    #[test]
    fn flat_surface_is_arbitrage_free() {
        let s = BetaSurface::new(BetaVector::new([0.2, 0.0, 0.0, 0.0, 0.0]).unwrap());
        let d = s.diagnostics().unwrap();
        assert!(d.is_free, "flat surface flagged: {d:?}");
        assert_eq!(d.smile_reports.len(), 7);
    }

    #[test]
    fn steep_short_end_has_calendar_violation() {
        // σ(0.25) ≈ 0.378, σ(0.5) ≈ 0.253: σ²T drops from 0.0357 to 0.0320
        let s = BetaSurface::new(BetaVector::new([0.01, 1.0, 0.0, 0.0, 0.0]).unwrap());
        let d = s.diagnostics().unwrap();
        assert!(!d.is_free);
        assert!(d.calendar_violations.iter().any(|v| v.tenor_short == 0.25
            && v.tenor_long == 0.5
            && v.variance_long < v.variance_short));
    }

    #[test]
    fn negative_level_surface_is_not_certified() {
        let s = BetaSurface::new(BetaVector::new([-0.2, 0.0, 0.0, 0.0, 0.0]).unwrap());
        let d = s.diagnostics().unwrap();
        assert!(!d.is_free);
        assert_eq!(d.non_positive_vols.len(), 7 * 21);
        assert!(d.calendar_violations.is_empty());
        assert!(d.smile_reports.iter().all(|r| !r.is_free));
        assert!(d.non_positive_vols.iter().all(|n| n.vol == -0.2));
    }

    #[test]
    fn downside_negative_vols_are_located() {
        // σ = 0.05 + tanh(M): negative on the grid from M = −0.1 down
        let s = BetaSurface::new(BetaVector::new([0.05, 0.0, 1.0, 0.0, 0.0]).unwrap());
        let d = s.diagnostics().unwrap();
        assert!(!d.is_free);
        assert_eq!(d.non_positive_vols.len(), 7 * 10);
        assert!(d.non_positive_vols.iter().all(|n| n.moneyness < 0.0));
    }
}
