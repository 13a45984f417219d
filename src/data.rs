use crate::error::{Result, RocError};
use log::info;
use rand::distributions::Distribution;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use statrs::distribution::Normal;
use std::fmt;

/// A collection of scored, binary-labeled examples.
///
/// `y` uses 0 for the negative class and 1 for the positive class,
/// aligned index-by-index with `scores`. Construction validates the
/// labels; everything downstream can then assume they are clean.
#[derive(Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoredData {
    pub scores: Vec<f64>,
    pub y: Vec<u8>,
    pub classes: Vec<String>,
    pub sample_len: usize,
}

impl ScoredData {
    /// Create a new empty `ScoredData` instance.
    pub fn new() -> ScoredData {
        ScoredData {
            scores: Vec::new(),
            y: Vec::new(),
            classes: vec!["negative".to_string(), "positive".to_string()],
            sample_len: 0,
        }
    }

    /// Build a dataset from parallel score and label vectors.
    ///
    /// # Arguments
    ///
    /// * `scores` - One finite score per example
    /// * `y` - One label per example, 0 (negative) or 1 (positive)
    ///
    /// # Returns
    ///
    /// The validated dataset, or `InvalidInput` when the vectors have
    /// different lengths, a label is outside {0, 1}, or a score is not
    /// finite.
    pub fn from_pairs(scores: Vec<f64>, y: Vec<u8>) -> Result<ScoredData> {
        if scores.len() != y.len() {
            return Err(RocError::InvalidInput(format!(
                "scores length {} != labels length {}",
                scores.len(),
                y.len()
            )));
        }
        if let Some(bad) = y.iter().find(|&&label| label > 1) {
            return Err(RocError::InvalidInput(format!(
                "label {} is outside {{0, 1}}",
                bad
            )));
        }
        if let Some(bad) = scores.iter().find(|s| !s.is_finite()) {
            return Err(RocError::InvalidInput(format!("score {} is not finite", bad)));
        }
        let sample_len = scores.len();
        Ok(ScoredData {
            scores,
            y,
            classes: vec!["negative".to_string(), "positive".to_string()],
            sample_len,
        })
    }

    /// Rename the two classes (index 0 = negative, index 1 = positive).
    pub fn set_classes(&mut self, negative: &str, positive: &str) {
        self.classes = vec![negative.to_string(), positive.to_string()];
    }

    /// Number of positive examples.
    pub fn positives(&self) -> usize {
        self.y.iter().filter(|&&label| label == 1).count()
    }

    /// Number of negative examples.
    pub fn negatives(&self) -> usize {
        self.sample_len - self.positives()
    }

    /// The fixed 20-example demonstration dataset used to illustrate
    /// the jagged empirical curve. Scores are distinct and roughly
    /// sorted by label so the curve has a readable shape.
    pub fn demo() -> ScoredData {
        let scores = vec![
            0.95, 0.91, 0.85, 0.81, 0.78, 0.75, 0.72, 0.68, 0.65, 0.61, 0.58, 0.55, 0.52, 0.49,
            0.45, 0.42, 0.38, 0.35, 0.31, 0.10,
        ];
        let y = vec![1, 1, 0, 1, 1, 0, 1, 0, 0, 1, 0, 0, 1, 0, 0, 0, 1, 0, 1, 0];
        // Hand-written constants, so validation cannot fail here.
        ScoredData::from_pairs(scores, y).unwrap()
    }

    /// Simulate a two-class population with Gaussian score
    /// distributions, the "diagnostic marker" scenario: negatives
    /// centered on 0.0, positives centered on `separation`, shared
    /// standard deviation `noise`.
    ///
    /// # Arguments
    ///
    /// * `n_per_class` - Number of examples drawn for each class
    /// * `separation` - Mean of the positive class
    /// * `noise` - Standard deviation of both classes (must be > 0)
    /// * `rng` - Seeded generator, so identical seeds reproduce the
    ///   same population
    pub fn simulate(
        n_per_class: usize,
        separation: f64,
        noise: f64,
        rng: &mut ChaCha8Rng,
    ) -> Result<ScoredData> {
        if n_per_class == 0 {
            return Err(RocError::InvalidInput(
                "n_per_class must be at least 1".to_string(),
            ));
        }
        let negative = Normal::new(0.0, noise)
            .map_err(|e| RocError::InvalidInput(format!("bad noise {}: {}", noise, e)))?;
        let positive = Normal::new(separation, noise)
            .map_err(|e| RocError::InvalidInput(format!("bad separation {}: {}", separation, e)))?;

        let mut scores = Vec::with_capacity(2 * n_per_class);
        let mut y = Vec::with_capacity(2 * n_per_class);
        for _ in 0..n_per_class {
            scores.push(negative.sample(rng));
            y.push(0u8);
        }
        for _ in 0..n_per_class {
            scores.push(positive.sample(rng));
            y.push(1u8);
        }

        info!(
            "Simulated {} samples per class (separation {}, noise {})",
            n_per_class, separation, noise
        );
        ScoredData::from_pairs(scores, y)
    }
}

impl fmt::Debug for ScoredData {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "ScoredData with {} samples: {} {} / {} {}",
            self.sample_len,
            self.positives(),
            self.classes[1],
            self.negatives(),
            self.classes[0]
        )
    }
}
