pub mod config;
pub mod error;
pub mod forecast; // Risk scoring, delivery model, progression, orchestration
pub mod models; // Visit + patient records, JSON coercion
pub mod reference; // BMI population averages + deviation analysis

pub use error::ForecastError;
pub use forecast::{generate_prediction, generate_prediction_with_rng, PredictionResult};

use tracing_subscriber::EnvFilter;

/// Install a stderr `fmt` subscriber filtered by `RUST_LOG`, falling back to
/// [`config::default_log_filter`]. The library never calls this itself.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();
}
