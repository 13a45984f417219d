use crate::confusion::ConfusionCounts;
use crate::data::ScoredData;
use crate::error::{Result, RocError};
use log::debug;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Decision rule applied at a threshold τ.
///
/// Both conventions are in common use: "positive iff score ≥ τ" and
/// "positive iff score > τ". The rule is an explicit option instead of
/// a hardcoded choice, since they disagree exactly on tied scores.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[allow(non_camel_case_types)]
pub enum ComparisonMode {
    gte,
    gt,
}

impl ComparisonMode {
    /// True when `score` is classified positive at threshold `tau`.
    pub fn predicts_positive(&self, score: f64, tau: f64) -> bool {
        match self {
            ComparisonMode::gte => score >= tau,
            ComparisonMode::gt => score > tau,
        }
    }
}

/// One point of an ROC curve, annotated with the threshold that
/// produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RocPoint {
    pub threshold: f64,
    pub fpr: f64,
    pub tpr: f64,
}

impl RocPoint {
    pub fn new(threshold: f64, fpr: f64, tpr: f64) -> RocPoint {
        RocPoint { threshold, fpr, tpr }
    }
}

/// An ordered sequence of ROC points, from (0,0) to (1,1) when built
/// by a full sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RocCurve {
    pub points: Vec<RocPoint>,
}

impl RocCurve {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// FPR coordinates in curve order.
    pub fn fpr_vec(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.fpr).collect()
    }

    /// TPR coordinates in curve order.
    pub fn tpr_vec(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.tpr).collect()
    }
}

/// Build the empirical step-function ROC curve of a scored dataset.
///
/// Examples are sorted by score descending and swept once,
/// accumulating TP and FP counts. Same-score examples are batched into
/// one combined step: a tie group containing both classes moves the
/// curve diagonally instead of producing spurious sub-steps, so the
/// result does not depend on input order within a group.
///
/// With `gte` each distinct score s contributes the point reached
/// after its group, i.e. the rates of the rule "positive iff
/// score ≥ s". With `gt` each group contributes the point *before* it
/// (tied scores are not positive at their own threshold) and the curve
/// is closed with a terminal (1,1) at threshold −∞. Both modes start
/// at (0,0) with threshold +∞ and end at (1,1).
///
/// # Errors
///
/// `InvalidInput` when the dataset is empty or contains only one
/// class: rates against an absent class are undefined and a curve
/// would be meaningless.
pub fn build_empirical_roc(data: &ScoredData, comparison: ComparisonMode) -> Result<RocCurve> {
    let p = data.positives();
    let n = data.negatives();
    if p == 0 || n == 0 {
        return Err(RocError::InvalidInput(format!(
            "empirical ROC needs both classes, got {} positives / {} negatives",
            p, n
        )));
    }

    let mut order: Vec<usize> = (0..data.sample_len).collect();
    order.sort_by(|&a, &b| {
        data.scores[b]
            .partial_cmp(&data.scores[a])
            .unwrap_or(Ordering::Equal)
    });

    let p_total = p as f64;
    let n_total = n as f64;

    let mut points = vec![RocPoint::new(f64::INFINITY, 0.0, 0.0)];
    let mut tp = 0usize;
    let mut fp = 0usize;

    let mut i = 0;
    while i < order.len() {
        let group_score = data.scores[order[i]];
        if comparison == ComparisonMode::gt {
            points.push(RocPoint::new(
                group_score,
                fp as f64 / n_total,
                tp as f64 / p_total,
            ));
        }
        while i < order.len() && data.scores[order[i]] == group_score {
            if data.y[order[i]] == 1 {
                tp += 1;
            } else {
                fp += 1;
            }
            i += 1;
        }
        if comparison == ComparisonMode::gte {
            points.push(RocPoint::new(
                group_score,
                fp as f64 / n_total,
                tp as f64 / p_total,
            ));
        }
    }
    if comparison == ComparisonMode::gt {
        points.push(RocPoint::new(f64::NEG_INFINITY, 1.0, 1.0));
    }

    debug!(
        "Empirical ROC: {} points from {} samples ({:?})",
        points.len(),
        data.sample_len,
        comparison
    );
    Ok(RocCurve { points })
}

/// Confusion counts of one fixed threshold: partition the dataset by
/// the decision rule and tally the four cells. The per-threshold inner
/// computation of the sweep, exposed for the single-point view.
pub fn confusion_at_threshold(
    data: &ScoredData,
    tau: f64,
    comparison: ComparisonMode,
) -> ConfusionCounts {
    let mut counts = ConfusionCounts::new(0, 0, 0, 0);
    for (score, &label) in data.scores.iter().zip(data.y.iter()) {
        let predicted_positive = comparison.predicts_positive(*score, tau);
        match (label, predicted_positive) {
            (1, true) => counts.tp += 1,
            (1, false) => counts.fn_count += 1,
            (0, true) => counts.fp += 1,
            (0, false) => counts.tn += 1,
            _ => unreachable!("labels are validated at construction"),
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn four_examples() -> ScoredData {
        ScoredData::from_pairs(vec![0.9, 0.8, 0.7, 0.6], vec![1, 0, 1, 0]).unwrap()
    }

    fn assert_point(point: &RocPoint, fpr: f64, tpr: f64) {
        assert!(
            (point.fpr - fpr).abs() < EPS && (point.tpr - tpr).abs() < EPS,
            "expected ({}, {}), got ({}, {})",
            fpr,
            tpr,
            point.fpr,
            point.tpr
        );
    }

    #[test]
    fn test_four_example_curve_gte() {
        let curve = build_empirical_roc(&four_examples(), ComparisonMode::gte).unwrap();
        assert_eq!(curve.len(), 5, "4 distinct scores should yield 5 points");
        assert_point(&curve.points[0], 0.0, 0.0);
        assert_point(&curve.points[1], 0.0, 0.5);
        assert_point(&curve.points[2], 0.5, 0.5);
        assert_point(&curve.points[3], 0.5, 1.0);
        assert_point(&curve.points[4], 1.0, 1.0);
        assert_eq!(
            curve.points[1].threshold, 0.9,
            "gte points carry the group score as threshold"
        );
    }

    #[test]
    fn test_four_example_curve_gt_same_shape() {
        // Under > each group contributes its before-point, so the same
        // rate sequence appears shifted, with the terminal point added.
        let curve = build_empirical_roc(&four_examples(), ComparisonMode::gt).unwrap();
        assert_eq!(curve.len(), 6);
        assert_point(&curve.points[0], 0.0, 0.0);
        assert_point(&curve.points[1], 0.0, 0.0);
        assert_point(&curve.points[2], 0.0, 0.5);
        assert_point(&curve.points[3], 0.5, 0.5);
        assert_point(&curve.points[4], 0.5, 1.0);
        assert_point(&curve.points[5], 1.0, 1.0);
        assert_eq!(curve.points[5].threshold, f64::NEG_INFINITY);
    }

    #[test]
    fn test_curve_endpoints_and_monotonicity() {
        let data = ScoredData::demo();
        for comparison in [ComparisonMode::gte, ComparisonMode::gt] {
            let curve = build_empirical_roc(&data, comparison).unwrap();
            assert_point(&curve.points[0], 0.0, 0.0);
            assert_point(curve.points.last().unwrap(), 1.0, 1.0);
            for w in curve.points.windows(2) {
                assert!(
                    w[1].fpr >= w[0].fpr && w[1].tpr >= w[0].tpr,
                    "curve must be non-decreasing in both axes, got {:?} then {:?}",
                    w[0],
                    w[1]
                );
            }
        }
    }

    #[test]
    fn test_demo_curve_point_count() {
        // 20 distinct scores: start point + one point per example.
        let curve = build_empirical_roc(&ScoredData::demo(), ComparisonMode::gte).unwrap();
        assert_eq!(curve.len(), 21);
    }

    #[test]
    fn test_tied_scores_are_one_combined_step() {
        let data = ScoredData::from_pairs(vec![0.9, 0.5, 0.5, 0.1], vec![1, 1, 0, 0]).unwrap();
        let curve = build_empirical_roc(&data, ComparisonMode::gte).unwrap();
        // The 0.5 group holds one positive and one negative: a single
        // diagonal step, never an intermediate corner.
        assert_eq!(curve.len(), 4, "3 distinct scores should yield 4 points");
        assert_point(&curve.points[1], 0.0, 0.5);
        assert_point(&curve.points[2], 0.5, 1.0);
        assert_point(&curve.points[3], 1.0, 1.0);
    }

    #[test]
    fn test_tie_order_does_not_change_curve() {
        let a = ScoredData::from_pairs(vec![0.9, 0.5, 0.5, 0.1], vec![1, 1, 0, 0]).unwrap();
        let b = ScoredData::from_pairs(vec![0.9, 0.5, 0.5, 0.1], vec![1, 0, 1, 0]).unwrap();
        let curve_a = build_empirical_roc(&a, ComparisonMode::gte).unwrap();
        let curve_b = build_empirical_roc(&b, ComparisonMode::gte).unwrap();
        assert_eq!(
            curve_a, curve_b,
            "grouped ties make the curve independent of within-group order"
        );
    }

    #[test]
    fn test_sweep_is_idempotent() {
        let data = ScoredData::demo();
        let first = build_empirical_roc(&data, ComparisonMode::gte).unwrap();
        let second = build_empirical_roc(&data, ComparisonMode::gte).unwrap();
        assert_eq!(first, second, "the sweep holds no hidden state");
    }

    #[test]
    fn test_single_class_is_invalid_input() {
        let all_pos = ScoredData::from_pairs(vec![0.9, 0.8], vec![1, 1]).unwrap();
        let all_neg = ScoredData::from_pairs(vec![0.9, 0.8], vec![0, 0]).unwrap();
        let empty = ScoredData::new();
        for data in [all_pos, all_neg, empty] {
            assert!(
                matches!(
                    build_empirical_roc(&data, ComparisonMode::gte),
                    Err(RocError::InvalidInput(_))
                ),
                "sweep over {:?} should be InvalidInput",
                data
            );
        }
    }

    #[test]
    fn test_confusion_at_threshold_gte_vs_gt() {
        let data = four_examples();
        // At τ = 0.7, gte counts the 0.7 example positive, gt does not.
        let gte = confusion_at_threshold(&data, 0.7, ComparisonMode::gte);
        assert_eq!((gte.tp, gte.fp, gte.tn, gte.fn_count), (2, 1, 1, 0));
        let gt = confusion_at_threshold(&data, 0.7, ComparisonMode::gt);
        assert_eq!((gt.tp, gt.fp, gt.tn, gt.fn_count), (1, 1, 1, 1));
    }

    #[test]
    fn test_confusion_at_threshold_matches_sweep_point() {
        let data = ScoredData::demo();
        let curve = build_empirical_roc(&data, ComparisonMode::gte).unwrap();
        for point in &curve.points[1..] {
            let m = confusion_at_threshold(&data, point.threshold, ComparisonMode::gte).metrics();
            assert!(
                (m.fpr - point.fpr).abs() < EPS && (m.tpr - point.tpr).abs() < EPS,
                "sweep point at τ={} should match the direct partition",
                point.threshold
            );
        }
    }
}
