//! Whole-surface diagnostics.
//!
//! A beta surface is scanned on a fixed (tenor, moneyness) grid. Three
//! things can go wrong there: the surface vol can be non-positive, total
//! variance can fall between consecutive tenors, and a tenor's smile can
//! imply a negative density.

use crate::smile::ArbitrageReport;
use serde::{Deserialize, Serialize};

/// Outcome of a grid scan of a surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurfaceDiagnostics {
    /// Butterfly scan of each tenor's smile, in tenor order.
    pub smile_reports: Vec<ArbitrageReport>,
    /// Tenor pairs where total variance decreases.
    pub calendar_violations: Vec<CalendarViolation>,
    /// Grid nodes where the surface vol is not a usable Black vol.
    #[serde(default)]
    pub non_positive_vols: Vec<NonPositiveVol>,
    /// True only when all three lists are clean.
    pub is_free: bool,
}

impl SurfaceDiagnostics {
    /// Assemble diagnostics and derive `is_free` from the individual checks.
    pub fn from_checks(
        smile_reports: Vec<ArbitrageReport>,
        calendar_violations: Vec<CalendarViolation>,
        non_positive_vols: Vec<NonPositiveVol>,
    ) -> Self {
        let is_free = non_positive_vols.is_empty()
            && calendar_violations.is_empty()
            && smile_reports.iter().all(|r| r.is_free);
        Self {
            smile_reports,
            calendar_violations,
            non_positive_vols,
            is_free,
        }
    }

    /// Negative-density points across all tenors.
    pub fn butterfly_violation_count(&self) -> usize {
        self.smile_reports
            .iter()
            .map(|r| r.butterfly_violations.len())
            .sum()
    }

    /// The calendar violation with the largest variance drop, if any.
    pub fn worst_calendar_violation(&self) -> Option<&CalendarViolation> {
        self.calendar_violations
            .iter()
            .max_by(|a, b| a.variance_drop().total_cmp(&b.variance_drop()))
    }
}

/// Total variance falling from `tenor_short` to `tenor_long` at one moneyness.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarViolation {
    pub moneyness: f64,
    pub tenor_short: f64,
    pub tenor_long: f64,
    /// `σ²T` at the shorter tenor.
    pub variance_short: f64,
    /// `σ²T` at the longer tenor.
    pub variance_long: f64,
}

impl CalendarViolation {
    /// `variance_short − variance_long`, positive for a violation.
    pub fn variance_drop(&self) -> f64 {
        self.variance_short - self.variance_long
    }
}

/// A grid node whose surface vol is zero or negative.
///
/// Squaring such a vol would hide it from the calendar check, so these nodes
/// are reported separately and left out of the variance comparison.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NonPositiveVol {
    pub tenor: f64,
    pub moneyness: f64,
    pub vol: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calendar(short: f64, long: f64) -> CalendarViolation {
        CalendarViolation {
            moneyness: 0.0,
            tenor_short: 1.0,
            tenor_long: 2.0,
            variance_short: short,
            variance_long: long,
        }
    }

    #[test]
    fn empty_checks_are_free() {
        let d = SurfaceDiagnostics::from_checks(Vec::new(), Vec::new(), Vec::new());
        assert!(d.is_free);
        assert_eq!(d.butterfly_violation_count(), 0);
        assert!(d.worst_calendar_violation().is_none());
    }

    #[test]
    fn non_positive_vol_alone_blocks_certification() {
        let node = NonPositiveVol {
            tenor: 1.0,
            moneyness: 0.0,
            vol: -0.2,
        };
        let d = SurfaceDiagnostics::from_checks(
            vec![ArbitrageReport::from_violations(Vec::new())],
            Vec::new(),
            vec![node],
        );
        assert!(!d.is_free);
    }

    #[test]
    fn unusable_smile_blocks_certification() {
        let d = SurfaceDiagnostics::from_checks(
            vec![ArbitrageReport::from_scan(Vec::new(), vec![100.0])],
            Vec::new(),
            Vec::new(),
        );
        assert!(!d.is_free);
    }

    #[test]
    fn worst_calendar_violation_has_largest_drop() {
        let d = SurfaceDiagnostics::from_checks(
            Vec::new(),
            vec![calendar(0.05, 0.04), calendar(0.09, 0.03), calendar(0.02, 0.019)],
            Vec::new(),
        );
        let worst = d.worst_calendar_violation().unwrap();
        assert_eq!(worst.variance_short, 0.09);
        assert!((worst.variance_drop() - 0.06).abs() < 1e-15);
    }
}
