use serde::{Deserialize, Serialize};

/// Application-level constants
pub const APP_NAME: &str = "prenatal-forecast";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable holding an optional jitter seed.
pub const SEED_ENV_VAR: &str = "PRENATAL_FORECAST_SEED";

/// Log filter used when `RUST_LOG` is unset or invalid.
pub fn default_log_filter() -> &'static str {
    "prenatal_forecast=info,warn"
}

// ═══════════════════════════════════════════════════════════
// Forecast tunables
// ═══════════════════════════════════════════════════════════

/// Tunable defaults for a prediction run.
///
/// Baselines stand in for vitals missing from the latest visit; the
/// no-data fallback projects from `no_data_start_week` using only these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastConfig {
    /// Gestational week treated as term; projection stops here.
    pub term_week: u32,
    /// Starting week of the default trajectory when no visit is usable.
    pub no_data_start_week: u32,
    pub baseline_weight_kg: f64,
    pub baseline_hemoglobin: f64,
    pub baseline_fetal_heart_rate: f64,
    /// Tag written to `metadata.source` for personalized results.
    pub source: String,
    /// Tag written to `metadata.source` for fallback results.
    pub fallback_source: String,
    /// Seed for the jitter generator. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            term_week: 40,
            no_data_start_week: 12,
            baseline_weight_kg: 65.0,
            baseline_hemoglobin: 11.5,
            baseline_fetal_heart_rate: 145.0,
            source: "rule-based".into(),
            fallback_source: "fallback".into(),
            seed: None,
        }
    }
}

impl ForecastConfig {
    /// Defaults, with the seed taken from `PRENATAL_FORECAST_SEED` when set.
    pub fn from_env() -> Self {
        let seed = std::env::var(SEED_ENV_VAR).ok().and_then(|raw| parse_seed(&raw));
        Self {
            seed,
            ..Self::default()
        }
    }
}

fn parse_seed(raw: &str) -> Option<u64> {
    match raw.trim().parse::<u64>() {
        Ok(seed) => Some(seed),
        Err(e) => {
            tracing::warn!(var = SEED_ENV_VAR, error = %e, "Ignoring unparsable seed");
            None
        }
    }
}
