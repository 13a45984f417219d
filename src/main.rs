use flexi_logger::{FileSpec, Logger};
use log::{info, warn};
use roclab::param::{self, Param};
use std::env;
use std::path::Path;
use std::process::exit;

/// Load parameters from the file given on the command line (default
/// `param.yaml`), falling back to defaults when no file exists.
fn load_param() -> Param {
    let param_path = env::args().nth(1).unwrap_or_else(|| "param.yaml".to_string());
    if Path::new(&param_path).exists() {
        match param::get(param_path.clone()) {
            Ok(param) => param,
            Err(e) => {
                eprintln!("Cannot read {}: {}", param_path, e);
                exit(1);
            }
        }
    } else {
        Param::new()
    }
}

fn main() {
    let param = load_param();

    let logger = Logger::try_with_env_or_str(&param.general.log_level)
        .expect("Invalid log level");
    if param.general.log_base.is_empty() {
        logger.start().expect("Cannot start logger");
    } else {
        logger
            .log_to_file(
                FileSpec::default()
                    .basename(param.general.log_base.as_str())
                    .suffix(param.general.log_suffix.as_str()),
            )
            .start()
            .expect("Cannot start logger");
    }

    info!("roclab v{}", roclab::report::version());
    if env::args().nth(1).is_none() {
        warn!("No parameter file given, using defaults");
    }

    match roclab::run(&param) {
        Ok(report) => match report.to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Cannot serialize report: {}", e);
                exit(1);
            }
        },
        Err(e) => {
            eprintln!("Analysis failed: {}", e);
            exit(1);
        }
    }
}
