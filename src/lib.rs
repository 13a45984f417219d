//! Numeric core for ROC analysis: confusion-matrix metrics, empirical
//! threshold sweeps, Gaussian density sweeps and trapezoidal AUC. All
//! computations are pure functions over immutable inputs; the
//! rendering layer feeds parameters in and draws the arrays that come
//! back.

pub mod auc;
pub mod confusion;
pub mod data;
pub mod density;
pub mod error;
pub mod param;
pub mod report;
pub mod roc;

use crate::data::ScoredData;
use crate::density::GaussianPair;
use crate::error::Result;
use crate::param::Param;
use crate::report::Report;
use crate::roc::{build_empirical_roc, confusion_at_threshold};
use chrono::Local;
use log::info;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Run the full analysis on parameters alone: simulate the two-class
/// population from `param.simulation`, then delegate to
/// [`run_on_data`].
pub fn run(param: &Param) -> Result<Report> {
    let mut rng = ChaCha8Rng::seed_from_u64(param.general.seed);
    let data = ScoredData::simulate(
        param.simulation.n_samples,
        param.simulation.separation,
        param.simulation.noise,
        &mut rng,
    )?;
    run_on_data(&data, param)
}

/// Run the full analysis on an existing dataset: empirical curve and
/// AUC, confusion metrics at the configured threshold, and the
/// theoretical curve of the configured Gaussian pair.
pub fn run_on_data(data: &ScoredData, param: &Param) -> Result<Report> {
    let start = std::time::Instant::now();
    let timestamp = Local::now().format("%Y-%m-%d_%H-%M-%S").to_string();

    info!("{:?}", data);

    let empirical_curve = build_empirical_roc(data, param.general.comparison)?;
    let empirical_auc = empirical_curve.auc()?;

    let threshold_counts =
        confusion_at_threshold(data, param.general.threshold, param.general.comparison);
    let threshold_metrics = threshold_counts.metrics();

    let pair = GaussianPair {
        mu_neg: param.distribution.mu_neg,
        mu_pos: param.distribution.mu_pos,
        sigma: param.distribution.sigma,
    };
    let density_curve = pair.roc_curve()?;
    let density_auc = density_curve.auc()?;

    let report = Report {
        id: format!("roclab_{}", timestamp),
        roclab_version: report::version(),
        timestamp,

        parameters: param.clone(),

        empirical_curve,
        empirical_auc,

        threshold_counts,
        threshold_metrics,

        density_curve,
        density_auc,

        execution_time: start.elapsed().as_secs_f64(),
    };
    info!("{}", report.summary());
    Ok(report)
}
