pub mod average;
pub mod error;
pub mod io_utils;

use std::{env, path::Path, sync::OnceLock};

use log::{LevelFilter, info};

pub use crate::average::compute_average;
pub use crate::error::{AverageError, ValueProblem};

/// Simulation output averaged by the binary.
pub const INPUT_PATH: &str = "/root/chain/tests/simulation_results.csv";
/// Header of the column being averaged.
pub const TARGET_COLUMN: &str = "Black Box Age";

static LOGGER: OnceLock<()> = OnceLock::new();

fn init_logging() {
    LOGGER.get_or_init(|| {
        let mut builder = env_logger::Builder::from_env(env_logger::Env::default());
        if env::var("RUST_LOG").is_err() {
            builder.filter_module("black_box_age", LevelFilter::Warn);
        }
        let _ = builder.format_timestamp_millis().try_init();
    });
}

/// Averages the fixed column of the fixed input file and prints one line to stdout.
///
/// Every failure is reported as a message; nothing propagates to the caller.
pub fn run() {
    init_logging();
    let path = Path::new(INPUT_PATH);
    let outcome = compute_average(path, TARGET_COLUMN);
    if let Err(err) = &outcome {
        info!("Averaging '{TARGET_COLUMN}' in {path:?} failed: {err:#}");
    }
    println!("{}", render_outcome(path, &outcome));
}

/// Renders the result of [`compute_average`] as the single line shown to the user.
pub fn render_outcome(path: &Path, outcome: &Result<f64, AverageError>) -> String {
    match outcome {
        Ok(mean) => format!("The average {TARGET_COLUMN} is: {mean:.2}"),
        Err(AverageError::NotFound { .. }) => {
            format!("Error: The file '{}' was not found.", path.display())
        }
        Err(AverageError::Value(problem)) => format!("Error: {problem}"),
        Err(AverageError::Unexpected(err)) => format!("An unexpected error occurred: {err:#}"),
    }
}
