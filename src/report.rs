use crate::confusion::{ConfusionCounts, ConfusionMetrics};
use crate::param::Param;
use crate::roc::RocCurve;
use serde::{Deserialize, Serialize};

/// Aggregated result of one full analysis run: the empirical curve of
/// the simulated population, the theoretical density curve, their
/// AUCs, and the confusion view at the configured threshold. This is
/// the complete numeric payload a rendering collaborator needs; it
/// carries enough provenance (parameters, version, timestamp) to
/// reproduce the run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub id: String,
    pub roclab_version: String,
    pub timestamp: String,

    pub parameters: Param,

    pub empirical_curve: RocCurve,
    pub empirical_auc: f64,

    pub threshold_counts: ConfusionCounts,
    pub threshold_metrics: ConfusionMetrics,

    pub density_curve: RocCurve,
    pub density_auc: f64,

    pub execution_time: f64,
}

/// Crate version, extended with the short git SHA when the build
/// script could resolve one.
pub fn version() -> String {
    match option_env!("ROCLAB_GIT_SHA") {
        Some(sha) => format!("{}#{}", env!("CARGO_PKG_VERSION"), sha),
        None => env!("CARGO_PKG_VERSION").to_string(),
    }
}

impl Report {
    /// Serialize the whole report for the rendering side.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// One-line human summary for the log.
    pub fn summary(&self) -> String {
        format!(
            "{}: empirical AUC {:.3} ({} points), density AUC {:.3}, TPR {:.3} / FPR {:.3} at threshold {:.2}",
            self.id,
            self.empirical_auc,
            self.empirical_curve.len(),
            self.density_auc,
            self.threshold_metrics.tpr,
            self.threshold_metrics.fpr,
            self.parameters.general.threshold
        )
    }
}
