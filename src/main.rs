use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use prenatal_forecast::config::{self, ForecastConfig};
use prenatal_forecast::forecast::engine::{rng_for, PredictionRequest};
use prenatal_forecast::models::BmiCategory;
use prenatal_forecast::reference::get_formatted_averages;
use prenatal_forecast::ForecastError;

#[derive(Debug, Parser)]
#[command(
    name = "prenatal-forecast",
    version,
    about = "Rule-based obstetric risk and delivery-outcome prediction",
    long_about = "Reads a JSON request { \"visits\": [...], \"patient\": {...} } and prints the \
        prediction as JSON.\n\n\
        Set PRENATAL_FORECAST_SEED to make the projected trajectories reproducible."
)]
struct Cli {
    /// Request file; reads stdin when omitted or `-`
    request: Option<PathBuf>,

    /// Print the reference averages for a BMI category instead of predicting
    #[arg(long, value_name = "CATEGORY", conflicts_with = "request")]
    bmi_averages: Option<BmiCategory>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    prenatal_forecast::init_tracing();
    tracing::debug!("{} v{} starting", config::APP_NAME, config::APP_VERSION);

    match run(&cli) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<String, ForecastError> {
    if let Some(category) = cli.bmi_averages {
        return Ok(serde_json::to_string_pretty(&get_formatted_averages(category))?);
    }

    let request_json = match cli.request.as_deref() {
        None => read_stdin()?,
        Some(path) if path == Path::new("-") => read_stdin()?,
        Some(path) => std::fs::read_to_string(path)?,
    };
    predict(&request_json)
}

fn predict(request_json: &str) -> Result<String, ForecastError> {
    let request = PredictionRequest::from_json(request_json)?;
    let config = ForecastConfig::from_env();
    let mut rng = rng_for(&config);
    let result = request.predict(&config, &mut rng);
    Ok(serde_json::to_string_pretty(&result)?)
}

fn read_stdin() -> Result<String, ForecastError> {
    let mut buf = String::new();
    std::io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}
