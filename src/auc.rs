use crate::error::{Result, RocError};
use crate::roc::{RocCurve, RocPoint};
use std::cmp::Ordering;

/// Area under an ROC curve by the trapezoidal rule.
///
/// Points may arrive in either sweep direction (the density sweep
/// walks thresholds upward and emits FPR descending), so they are
/// always re-sorted by FPR ascending before integration. For each
/// consecutive pair the trapezoid (x1-x0)·(y0+y1)/2 is accumulated.
///
/// # Errors
///
/// `InsufficientData` for fewer than two points: a single point spans
/// no area.
pub fn compute_auc(points: &[RocPoint]) -> Result<f64> {
    if points.len() < 2 {
        return Err(RocError::InsufficientData(format!(
            "AUC needs at least 2 curve points, got {}",
            points.len()
        )));
    }

    let mut sorted: Vec<&RocPoint> = points.iter().collect();
    sorted.sort_by(|a, b| a.fpr.partial_cmp(&b.fpr).unwrap_or(Ordering::Equal));

    let mut auc = 0.0;
    for w in sorted.windows(2) {
        auc += (w[1].fpr - w[0].fpr) * (w[0].tpr + w[1].tpr) / 2.0;
    }
    Ok(auc)
}

impl RocCurve {
    /// Trapezoidal AUC of this curve. See [`compute_auc`].
    pub fn auc(&self) -> Result<f64> {
        compute_auc(&self.points)
    }
}
