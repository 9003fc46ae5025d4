//! Standard normal distribution functions.

use std::f64::consts::{FRAC_1_SQRT_2, PI};

use statrs::function::erf::erfc;

/// Standard normal CDF Φ(x).
///
/// Computed as `erfc(−x / √2) / 2`, which keeps full relative precision in
/// the lower tail.
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * erfc(-x * FRAC_1_SQRT_2)
}

/// Standard normal PDF φ(x).
pub fn norm_pdf(x: f64) -> f64 {
    (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn cdf_at_zero_is_half() {
        assert_abs_diff_eq!(norm_cdf(0.0), 0.5, epsilon = 1e-15);
    }

    #[test]
    fn cdf_known_values() {
        assert_abs_diff_eq!(norm_cdf(1.0), 0.841_344_746_068_543, epsilon = 1e-14);
        assert_abs_diff_eq!(norm_cdf(-1.96), 0.024_997_895_148_220, epsilon = 1e-14);
        assert_abs_diff_eq!(norm_cdf(0.1), 0.539_827_837_277_029, epsilon = 1e-14);
    }

    #[test]
    fn cdf_symmetry() {
        for x in [0.3, 1.1, 2.5, 4.0] {
            assert_abs_diff_eq!(norm_cdf(x) + norm_cdf(-x), 1.0, epsilon = 1e-15);
        }
    }

    #[test]
    fn cdf_lower_tail_keeps_precision() {
        // Φ(−10) ≈ 7.6199e-24
        assert_relative_eq!(norm_cdf(-10.0), 7.619_853_024_160_593e-24, max_relative = 1e-10);
    }

    #[test]
    fn cdf_handles_infinities_and_nan() {
        assert_eq!(norm_cdf(f64::INFINITY), 1.0);
        assert_eq!(norm_cdf(f64::NEG_INFINITY), 0.0);
        assert!(norm_cdf(f64::NAN).is_nan());
    }

    #[test]
    fn pdf_peak() {
        assert_abs_diff_eq!(norm_pdf(0.0), 0.398_942_280_401_432_7, epsilon = 1e-15);
        assert_eq!(norm_pdf(1.5), norm_pdf(-1.5));
    }
}
