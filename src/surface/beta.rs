//! The five-factor beta vector.
//!
//! Each component has a fixed economic meaning:
//!
//! | component | meaning                         |
//! |-----------|---------------------------------|
//! | β1        | level                           |
//! | β2        | time-to-maturity slope weight   |
//! | β3        | moneyness slope weight          |
//! | β4        | smile attenuation weight        |
//! | β5        | smirk weight                    |
//!
//! Vectors are estimated elsewhere and consumed as-is. Serialized field names
//! are `beta1` .. `beta5`, matching the columns of a beta timeseries.

use serde::{Deserialize, Serialize};

use crate::error::{BetaVolError, Result};
use crate::validate::validate_finite;

/// A calibrated beta vector `(β1, .., β5)`.
///
/// # Examples
/// ```
/// use betavol::surface::BetaVector;
///
/// let beta = BetaVector::new([0.2, 0.05, -0.1, 0.01, 0.02])?;
/// assert_eq!(beta.level(), 0.2);
/// assert_eq!(beta.smirk(), 0.02);
/// # Ok::<(), betavol::BetaVolError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BetaVectorRaw", into = "BetaVectorRaw")]
pub struct BetaVector([f64; 5]);

#[derive(Serialize, Deserialize)]
struct BetaVectorRaw {
    beta1: f64,
    beta2: f64,
    beta3: f64,
    beta4: f64,
    beta5: f64,
}

impl TryFrom<BetaVectorRaw> for BetaVector {
    type Error = BetaVolError;
    fn try_from(raw: BetaVectorRaw) -> std::result::Result<Self, Self::Error> {
        Self::new([raw.beta1, raw.beta2, raw.beta3, raw.beta4, raw.beta5])
    }
}

impl From<BetaVector> for BetaVectorRaw {
    fn from(b: BetaVector) -> Self {
        let [beta1, beta2, beta3, beta4, beta5] = b.0;
        Self {
            beta1,
            beta2,
            beta3,
            beta4,
            beta5,
        }
    }
}

impl TryFrom<[f64; 5]> for BetaVector {
    type Error = BetaVolError;
    fn try_from(values: [f64; 5]) -> std::result::Result<Self, Self::Error> {
        Self::new(values)
    }
}

impl TryFrom<&[f64]> for BetaVector {
    type Error = BetaVolError;
    fn try_from(values: &[f64]) -> std::result::Result<Self, Self::Error> {
        let arr: [f64; 5] = values.try_into().map_err(|_| BetaVolError::InvalidInput {
            message: format!("beta vector needs exactly 5 components, got {}", values.len()),
        })?;
        Self::new(arr)
    }
}

impl BetaVector {
    /// Wrap five beta components.
    ///
    /// # Errors
    /// Returns [`BetaVolError::InvalidInput`] if any component is NaN or
    /// infinite.
    pub fn new(values: [f64; 5]) -> Result<Self> {
        for (i, &v) in values.iter().enumerate() {
            validate_finite(v, &format!("beta{}", i + 1))?;
        }
        Ok(Self(values))
    }

    /// The raw components in order β1..β5.
    pub fn as_array(&self) -> &[f64; 5] {
        &self.0
    }

    /// β1: flat level.
    pub fn level(&self) -> f64 {
        self.0[0]
    }

    /// β2: weight of the decaying term-structure component.
    pub fn maturity_slope(&self) -> f64 {
        self.0[1]
    }

    /// β3: weight of the moneyness slope.
    pub fn moneyness_slope(&self) -> f64 {
        self.0[2]
    }

    /// β4: smile attenuation weight.
    pub fn smile_attenuation(&self) -> f64 {
        self.0[3]
    }

    /// β5: downside smirk weight.
    pub fn smirk(&self) -> f64 {
        self.0[4]
    }
}
