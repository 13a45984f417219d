use crate::roc::ComparisonMode;
use log::warn;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::BufReader;

// Field definitions and associated default values

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Param {
    #[serde(default)]
    pub general: General,
    #[serde(default)]
    pub simulation: Simulation,
    #[serde(default)]
    pub distribution: Distribution,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct General {
    #[serde(default = "seed_default")]
    pub seed: u64,
    #[serde(default = "log_base_default")]
    pub log_base: String,
    #[serde(default = "log_suffix_default")]
    pub log_suffix: String,
    #[serde(default = "log_level_default")]
    pub log_level: String,
    #[serde(default = "comparison_default")]
    pub comparison: ComparisonMode,
    /// Decision threshold for the single-point confusion view.
    #[serde(default = "threshold_default")]
    pub threshold: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Simulation {
    /// Samples drawn per class.
    #[serde(default = "n_samples_default")]
    pub n_samples: usize,
    /// Mean of the positive class (negatives are centered on 0).
    #[serde(default = "separation_default")]
    pub separation: f64,
    /// Shared standard deviation of both classes.
    #[serde(default = "noise_default")]
    pub noise: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Distribution {
    #[serde(default = "mu_neg_default")]
    pub mu_neg: f64,
    #[serde(default = "mu_pos_default")]
    pub mu_pos: f64,
    #[serde(default = "sigma_default")]
    pub sigma: f64,
}

impl Default for General {
    fn default() -> General {
        General {
            seed: seed_default(),
            log_base: log_base_default(),
            log_suffix: log_suffix_default(),
            log_level: log_level_default(),
            comparison: comparison_default(),
            threshold: threshold_default(),
        }
    }
}

impl Default for Simulation {
    fn default() -> Simulation {
        Simulation {
            n_samples: n_samples_default(),
            separation: separation_default(),
            noise: noise_default(),
        }
    }
}

impl Default for Distribution {
    fn default() -> Distribution {
        Distribution {
            mu_neg: mu_neg_default(),
            mu_pos: mu_pos_default(),
            sigma: sigma_default(),
        }
    }
}

impl Default for Param {
    fn default() -> Self {
        serde_json::from_value(serde_json::json!({})).unwrap()
    }
}

impl Param {
    pub fn new() -> Self {
        Self::default()
    }
}

fn seed_default() -> u64 {
    42
}

fn log_base_default() -> String {
    String::new()
}

fn log_suffix_default() -> String {
    "log".to_string()
}

fn log_level_default() -> String {
    "info".to_string()
}

fn comparison_default() -> ComparisonMode {
    ComparisonMode::gte
}

fn threshold_default() -> f64 {
    1.0
}

fn n_samples_default() -> usize {
    500
}

fn separation_default() -> f64 {
    2.0
}

fn noise_default() -> f64 {
    1.0
}

fn mu_neg_default() -> f64 {
    30.0
}

fn mu_pos_default() -> f64 {
    60.0
}

fn sigma_default() -> f64 {
    10.0
}

pub fn get(param_file: String) -> Result<Param, Box<dyn Error>> {
    let param_file_reader = File::open(param_file)?;
    let param_reader = BufReader::new(param_file_reader);

    let config: Param = serde_yaml::from_reader(param_reader)?;

    validate(&config)?;

    Ok(config)
}

pub fn validate(param: &Param) -> Result<(), String> {
    if param.simulation.n_samples == 0 {
        return Err("n_samples must be at least 1.".to_string());
    }
    if param.simulation.noise <= 0.0 {
        return Err(format!(
            "Invalid noise={:.3}. Must be > 0.",
            param.simulation.noise
        ));
    }
    if param.distribution.sigma <= 0.0 {
        return Err(format!(
            "Invalid sigma={:.3}. Must be > 0.",
            param.distribution.sigma
        ));
    }
    for (name, mu) in [
        ("mu_neg", param.distribution.mu_neg),
        ("mu_pos", param.distribution.mu_pos),
    ] {
        if !(0.0..=100.0).contains(&mu) {
            return Err(format!(
                "Invalid {}={:.1}. Must lie on the score axis 0..=100.",
                name, mu
            ));
        }
    }

    if param.distribution.mu_pos < param.distribution.mu_neg {
        warn!(
            "mu_pos={:.1} < mu_neg={:.1}: positives score below negatives, the density curve will lie under the diagonal.",
            param.distribution.mu_pos, param.distribution.mu_neg
        );
    }
    if param.simulation.separation < 0.0 {
        warn!(
            "separation={:.2} is negative: the simulated classifier will perform worse than chance.",
            param.simulation.separation
        );
    }
    let far = param.simulation.separation.abs() + 4.0 * param.simulation.noise;
    if param.general.threshold.abs() > far {
        warn!(
            "threshold={:.2} lies outside the simulated score range (~±{:.2}): one predicted class will be empty.",
            param.general.threshold, far
        );
    }

    Ok(())
}
