use serde::{Deserialize, Serialize};

/// The four cells of a binary confusion matrix.
///
/// Counts are `usize`, so negative inputs are excluded by construction.
/// Every rate whose denominator is zero is defined as 0.0 rather than
/// NaN, since interactive inputs can trivially empty a whole class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionCounts {
    pub tp: usize,
    pub fn_count: usize,
    pub fp: usize,
    pub tn: usize,
}

/// Derived rates for one confusion matrix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfusionMetrics {
    pub tpr: f64,
    pub fpr: f64,
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    pub specificity: f64,
}

impl ConfusionCounts {
    pub fn new(tp: usize, fn_count: usize, fp: usize, tn: usize) -> ConfusionCounts {
        ConfusionCounts {
            tp,
            fn_count,
            fp,
            tn,
        }
    }

    /// Total actual positives (TP + FN).
    pub fn positives(&self) -> usize {
        self.tp + self.fn_count
    }

    /// Total actual negatives (FP + TN).
    pub fn negatives(&self) -> usize {
        self.fp + self.tn
    }

    /// True positive rate TP/P, 0.0 when P = 0.
    pub fn tpr(&self) -> f64 {
        let p = self.positives();
        if p > 0 {
            self.tp as f64 / p as f64
        } else {
            0.0
        }
    }

    /// False positive rate FP/N, 0.0 when N = 0.
    pub fn fpr(&self) -> f64 {
        let n = self.negatives();
        if n > 0 {
            self.fp as f64 / n as f64
        } else {
            0.0
        }
    }

    /// Specificity TN/N, 0.0 when N = 0. Equals 1 - FPR otherwise.
    pub fn specificity(&self) -> f64 {
        let n = self.negatives();
        if n > 0 {
            self.tn as f64 / n as f64
        } else {
            0.0
        }
    }

    /// Accuracy (TP+TN)/(P+N), 0.0 when the matrix is empty.
    pub fn accuracy(&self) -> f64 {
        let total = self.positives() + self.negatives();
        if total > 0 {
            (self.tp + self.tn) as f64 / total as f64
        } else {
            0.0
        }
    }

    /// Precision TP/(TP+FP), 0.0 when nothing is predicted positive.
    pub fn precision(&self) -> f64 {
        let predicted_pos = self.tp + self.fp;
        if predicted_pos > 0 {
            self.tp as f64 / predicted_pos as f64
        } else {
            0.0
        }
    }

    /// F1 score, the harmonic mean of precision and recall.
    ///
    /// Defined as 0.0 when precision + recall = 0 instead of the
    /// naive division by zero.
    pub fn f1(&self) -> f64 {
        let p = self.precision();
        let r = self.tpr();
        if p + r > 0.0 {
            2.0 * p * r / (p + r)
        } else {
            0.0
        }
    }

    /// Computes every derived rate in one pass.
    ///
    /// # Returns
    ///
    /// A [`ConfusionMetrics`] with TPR, FPR, accuracy, precision,
    /// recall (identical to TPR), F1 and specificity. All rates fall
    /// back to 0.0 on an empty denominator.
    pub fn metrics(&self) -> ConfusionMetrics {
        let tpr = self.tpr();
        ConfusionMetrics {
            tpr,
            fpr: self.fpr(),
            accuracy: self.accuracy(),
            precision: self.precision(),
            recall: tpr,
            f1: self.f1(),
            specificity: self.specificity(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_metrics_reference_scenario() {
        let counts = ConfusionCounts::new(50, 10, 10, 90);
        let m = counts.metrics();
        assert_eq!(counts.positives(), 60, "P should be TP+FN");
        assert_eq!(counts.negatives(), 100, "N should be FP+TN");
        assert!(
            (m.tpr - 50.0 / 60.0).abs() < EPS,
            "TPR should be 50/60, got {}",
            m.tpr
        );
        assert!((m.fpr - 0.10).abs() < EPS, "FPR should be 0.10, got {}", m.fpr);
        assert!(
            (m.accuracy - 140.0 / 160.0).abs() < EPS,
            "accuracy should be 140/160, got {}",
            m.accuracy
        );
        assert!(
            (m.precision - 50.0 / 60.0).abs() < EPS,
            "precision should be 50/60, got {}",
            m.precision
        );
    }

    #[test]
    fn test_recall_equals_tpr() {
        let m = ConfusionCounts::new(7, 3, 2, 8).metrics();
        assert_eq!(m.recall, m.tpr, "recall and TPR are the same definition");
    }

    #[test]
    fn test_complementary_rates() {
        // TPR + FNR = 1 and FPR + specificity = 1 whenever P > 0 and N > 0.
        for (tp, fn_count, fp, tn) in [(1, 0, 0, 1), (5, 5, 3, 7), (10, 1, 1, 10)] {
            let c = ConfusionCounts::new(tp, fn_count, fp, tn);
            let fnr = fn_count as f64 / c.positives() as f64;
            assert!(
                (c.tpr() + fnr - 1.0).abs() < EPS,
                "TPR + FNR should be 1.0 for {:?}",
                c
            );
            assert!(
                (c.fpr() + c.specificity() - 1.0).abs() < EPS,
                "FPR + specificity should be 1.0 for {:?}",
                c
            );
        }
    }

    #[test]
    fn test_zero_positive_class_defaults_to_zero() {
        let m = ConfusionCounts::new(0, 0, 5, 5).metrics();
        assert_eq!(m.tpr, 0.0, "TPR with P=0 should be the 0.0 default, not NaN");
        assert_eq!(m.recall, 0.0);
        assert!((m.fpr - 0.5).abs() < EPS, "FPR should still be FP/N");
    }

    #[test]
    fn test_empty_matrix_all_zero() {
        let m = ConfusionCounts::new(0, 0, 0, 0).metrics();
        assert_eq!(m.accuracy, 0.0);
        assert_eq!(m.precision, 0.0);
        assert_eq!(m.f1, 0.0, "F1 with precision+recall=0 is defined as 0.0");
    }

    #[test]
    fn test_f1_harmonic_mean() {
        // TP=2 FN=1 FP=1 TN=2: precision = 2/3, recall = 2/3, F1 = 2/3.
        let m = ConfusionCounts::new(2, 1, 1, 2).metrics();
        assert!((m.f1 - 2.0 / 3.0).abs() < EPS, "F1 should be 2/3, got {}", m.f1);
    }
}
