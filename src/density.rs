use crate::error::{Result, RocError};
use crate::roc::{RocCurve, RocPoint};
use serde::{Deserialize, Serialize};
use statrs::distribution::{Continuous, Normal};

/// Closed-form Gaussian parameters of the two class-score
/// distributions, discretized on the integer axis 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GaussianPair {
    /// Mean of the negative-class score distribution.
    pub mu_neg: f64,
    /// Mean of the positive-class score distribution.
    pub mu_pos: f64,
    /// Shared standard deviation.
    pub sigma: f64,
}

/// Upper bound of the discretized score axis (inclusive).
pub const AXIS_MAX: usize = 100;

/// Gaussian density evaluated at each integer of the score axis.
///
/// # Errors
///
/// `InvalidInput` when `sigma` is not a positive finite number.
pub fn gaussian_density(mu: f64, sigma: f64) -> Result<Vec<f64>> {
    let normal = Normal::new(mu, sigma)
        .map_err(|e| RocError::InvalidInput(format!("bad Gaussian ({}, {}): {}", mu, sigma, e)))?;
    Ok((0..=AXIS_MAX).map(|x| normal.pdf(x as f64)).collect())
}

/// Fraction of a density's mass at or above index `t`.
///
/// Returns 0.0 when the total mass is zero, so a distribution that
/// lies entirely outside the axis degrades to an all-zero rate instead
/// of failing.
pub fn tail_mass_ratio(density: &[f64], t: usize) -> f64 {
    let total: f64 = density.iter().sum();
    if total > 0.0 {
        density[t.min(density.len())..].iter().sum::<f64>() / total
    } else {
        0.0
    }
}

/// (FPR, TPR) of one integer threshold under the rule
/// "positive iff score ≥ t": the tail-mass ratios of the negative and
/// positive densities.
pub fn density_rates_at(neg: &[f64], pos: &[f64], t: usize) -> (f64, f64) {
    (tail_mass_ratio(neg, t), tail_mass_ratio(pos, t))
}

/// Sweep the integer threshold across the whole axis, producing the
/// smooth theoretical ROC curve of two discretized densities.
///
/// Thresholds run from 0 (everything positive, the (1,1) corner) to
/// one past the axis end (nothing positive, the (0,0) corner), so the
/// curve is emitted with FPR descending. [`crate::auc::compute_auc`]
/// re-sorts before integrating.
///
/// # Errors
///
/// `InvalidInput` when the two densities have different lengths or are
/// empty.
pub fn sweep_density(neg: &[f64], pos: &[f64]) -> Result<RocCurve> {
    if neg.is_empty() || neg.len() != pos.len() {
        return Err(RocError::InvalidInput(format!(
            "density lengths must match and be non-empty, got {} and {}",
            neg.len(),
            pos.len()
        )));
    }
    let points = (0..=neg.len())
        .map(|t| {
            let (fpr, tpr) = density_rates_at(neg, pos, t);
            RocPoint::new(t as f64, fpr, tpr)
        })
        .collect();
    Ok(RocCurve { points })
}

impl GaussianPair {
    /// Discretize both class densities and sweep the threshold axis.
    pub fn roc_curve(&self) -> Result<RocCurve> {
        let neg = gaussian_density(self.mu_neg, self.sigma)?;
        let pos = gaussian_density(self.mu_pos, self.sigma)?;
        sweep_density(&neg, &pos)
    }
}
