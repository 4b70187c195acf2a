//! Rule-based prediction pipeline.
//!
//! Stages, in order: visit normalization (in `models`), risk scoring,
//! delivery-type and delivery-mode distributions, expected outcome,
//! progression projection and summary text. `engine` composes them and owns
//! the fallback policy for missing or at-term data.

pub mod delivery;
pub mod engine;
pub mod helpers;
pub mod outcome;
pub mod progression;
pub mod risk;
pub mod summary;
pub mod trend;
pub mod types;

pub use engine::{
    generate_prediction, generate_prediction_with_rng, PredictionRequest, PredictionRun,
    PredictionState,
};
pub use helpers::{parse_blood_pressure, round_probability, round_value, BloodPressure};
pub use types::{
    DeliveryModeDistribution, DeliveryTypeDistribution, PredictionMetadata, PredictionResult,
    ProgressionPoint, ProgressionSeries, RiskScoreSet,
};
