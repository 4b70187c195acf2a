use thiserror::Error;

/// Errors raised at the crate's fallible edges.
///
/// The prediction pipeline itself never fails; these cover request parsing,
/// strict enum lookups and the command-line wrapper.
#[derive(Error, Debug)]
pub enum ForecastError {
    #[error("Invalid value for {field}: {value}")]
    InvalidEnum { field: String, value: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
