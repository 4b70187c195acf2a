use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::ForecastConfig;
use crate::error::ForecastError;
use crate::models::{latest_visit, normalize_visits, PatientRecord, VisitRecord};

use super::delivery::{delivery_mode_distribution, delivery_type_distribution};
use super::outcome::estimate_expected_outcome;
use super::progression::{project_progression, ProjectionBaseline};
use super::risk::calculate_risk_scores;
use super::summary::{generate_summary, primary_risk};
use super::types::{
    DeliveryModeDistribution, DeliveryTypeDistribution, PredictionMetadata, PredictionResult,
    ProgressionSeries,
};

/// Advisory text carried by every fallback result.
pub const FALLBACK_SUMMARY: &str = "There is not enough visit data for a personalized \
     prediction yet. The figures shown are population averages; keep attending your \
     scheduled prenatal check-ups.";

const FALLBACK_DELIVERY_TYPE: DeliveryTypeDistribution = DeliveryTypeDistribution {
    full_term: 0.80,
    premature: 0.15,
    mortality_risk: 0.05,
};
const FALLBACK_DELIVERY_MODE: DeliveryModeDistribution = DeliveryModeDistribution {
    normal: 0.70,
    c_section: 0.30,
};
const FALLBACK_GESTATIONAL_AGE: f64 = 39.0;
const FALLBACK_BIRTH_WEIGHT_KG: f64 = 3.2;

// ---------------------------------------------------------------------------
// PredictionState
// ---------------------------------------------------------------------------

/// Which path a prediction takes, decided once from the validated visits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictionState {
    /// No usable visit: population trajectory from the default start week.
    NoData,
    /// Latest visit at or past term: fallback without a trajectory.
    AtTerm,
    /// Full personalized pipeline.
    Normal,
}

impl PredictionState {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NoData => "NO_DATA",
            Self::AtTerm => "AT_TERM",
            Self::Normal => "NORMAL",
        }
    }
}

// ---------------------------------------------------------------------------
// PredictionRun
// ---------------------------------------------------------------------------

/// One prediction request. Visits are validated once at construction and the
/// run is consumed by [`PredictionRun::execute`], so it cannot leak into
/// another request.
pub struct PredictionRun<'a> {
    visits: Vec<VisitRecord>,
    patient: PatientRecord,
    config: &'a ForecastConfig,
}

impl<'a> PredictionRun<'a> {
    /// Validate raw JSON input. A non-array `visits` value counts as empty.
    pub fn from_json(visits: &Value, patient: &Value, config: &'a ForecastConfig) -> Self {
        let raw = visits.as_array().map(Vec::as_slice).unwrap_or_default();
        Self::new(normalize_visits(raw), PatientRecord::from_value(patient), config)
    }

    /// Build from already-typed records. Visits without a positive gestational
    /// age are dropped here as well.
    pub fn new(
        visits: Vec<VisitRecord>,
        patient: PatientRecord,
        config: &'a ForecastConfig,
    ) -> Self {
        let visits = visits
            .into_iter()
            .filter(|v| v.gestational_age > 0.0)
            .collect();
        Self {
            visits,
            patient,
            config,
        }
    }

    pub fn visits(&self) -> &[VisitRecord] {
        &self.visits
    }

    pub fn state(&self) -> PredictionState {
        match latest_visit(&self.visits) {
            None => PredictionState::NoData,
            Some(latest) if latest.gestational_age >= f64::from(self.config.term_week) => {
                PredictionState::AtTerm
            }
            Some(_) => PredictionState::Normal,
        }
    }

    /// Run the pipeline, drawing projection jitter from `rng`.
    pub fn execute<R: Rng>(self, rng: &mut R) -> PredictionResult {
        let state = self.state();
        tracing::debug!(
            state = state.as_str(),
            visit_count = self.visits.len(),
            "Prediction state selected"
        );

        match (state, latest_visit(&self.visits)) {
            (PredictionState::Normal, Some(latest)) => self.personalized(latest, rng),
            (PredictionState::AtTerm, Some(latest)) => self.fallback(
                latest.gestational_age,
                ProgressionSeries::default(),
            ),
            _ => {
                let start = self.config.no_data_start_week;
                let baseline = ProjectionBaseline::population_default(start, self.config);
                let progression = project_progression(&baseline, rng);
                self.fallback(f64::from(start), progression)
            }
        }
    }

    fn personalized<R: Rng>(&self, latest: &VisitRecord, rng: &mut R) -> PredictionResult {
        let risk_scores = calculate_risk_scores(&self.visits, &self.patient);
        let delivery_type = delivery_type_distribution(&risk_scores);
        let delivery_mode = delivery_mode_distribution(&risk_scores, &self.patient);
        let outcome = estimate_expected_outcome(&risk_scores, &delivery_type);

        let baseline = ProjectionBaseline::from_visits(&self.visits, latest, self.config);
        let progression = project_progression(&baseline, rng);
        let summary = generate_summary(&risk_scores, &delivery_type, &delivery_mode);

        let (primary, primary_score) = primary_risk(&risk_scores);
        tracing::info!(
            visit_count = self.visits.len(),
            gestational_age = latest.gestational_age,
            primary_risk = primary,
            primary_score,
            weeks_projected = progression.weeks_projected(),
            "Personalized prediction generated"
        );

        PredictionResult {
            delivery_type,
            delivery_mode,
            metadata: PredictionMetadata {
                current_gestational_age: latest.gestational_age,
                weeks_projected: progression.weeks_projected(),
                visit_count: self.visits.len(),
                generated_at: Utc::now(),
                source: self.config.source.clone(),
            },
            progression,
            summary,
            expected_gestational_age: outcome.gestational_age,
            expected_birth_weight: outcome.birth_weight,
            risk_scores: Some(risk_scores),
            is_fallback: false,
        }
    }

    fn fallback(
        &self,
        current_gestational_age: f64,
        progression: ProgressionSeries,
    ) -> PredictionResult {
        tracing::info!(
            visit_count = self.visits.len(),
            current_gestational_age,
            weeks_projected = progression.weeks_projected(),
            "Fallback prediction generated"
        );

        PredictionResult {
            delivery_type: FALLBACK_DELIVERY_TYPE,
            delivery_mode: FALLBACK_DELIVERY_MODE,
            metadata: PredictionMetadata {
                current_gestational_age,
                weeks_projected: progression.weeks_projected(),
                visit_count: self.visits.len(),
                generated_at: Utc::now(),
                source: self.config.fallback_source.clone(),
            },
            progression,
            summary: FALLBACK_SUMMARY.to_string(),
            expected_gestational_age: FALLBACK_GESTATIONAL_AGE,
            expected_birth_weight: FALLBACK_BIRTH_WEIGHT_KG,
            risk_scores: None,
            is_fallback: true,
        }
    }
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Predict from raw JSON visits and patient. Never fails; insufficient data
/// yields a fallback result.
pub fn generate_prediction(visits: &Value, patient: &Value) -> PredictionResult {
    let config = ForecastConfig::default();
    let mut rng = rng_for(&config);
    generate_prediction_with_rng(visits, patient, &config, &mut rng)
}

/// Same as [`generate_prediction`] with explicit configuration and jitter source.
pub fn generate_prediction_with_rng<R: Rng>(
    visits: &Value,
    patient: &Value,
    config: &ForecastConfig,
    rng: &mut R,
) -> PredictionResult {
    PredictionRun::from_json(visits, patient, config).execute(rng)
}

/// Jitter source for a configuration: seeded when `config.seed` is set.
pub fn rng_for(config: &ForecastConfig) -> StdRng {
    match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Request envelope as sent by the calling layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PredictionRequest {
    #[serde(default)]
    pub visits: Value,
    #[serde(default)]
    pub patient: Value,
}

impl PredictionRequest {
    pub fn from_json(json: &str) -> Result<Self, ForecastError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn predict<R: Rng>(&self, config: &ForecastConfig, rng: &mut R) -> PredictionResult {
        generate_prediction_with_rng(&self.visits, &self.patient, config, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn seeded() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn predict(visits: Value, patient: Value) -> PredictionResult {
        generate_prediction_with_rng(&visits, &patient, &ForecastConfig::default(), &mut seeded())
    }

    #[test]
    fn no_visits_returns_default_trajectory() {
        let result = predict(json!([]), json!({}));
        assert!(result.is_fallback);
        assert_eq!(result.expected_gestational_age, 39.0);
        assert_eq!(result.expected_birth_weight, 3.2);
        assert_eq!(result.delivery_type, FALLBACK_DELIVERY_TYPE);
        assert_eq!(result.delivery_mode, FALLBACK_DELIVERY_MODE);
        assert!(result.risk_scores.is_none());
        assert_eq!(result.progression.weeks_projected(), 28);
        assert_eq!(result.progression.fetal_heart_rate.len(), 28);
        assert_eq!(result.metadata.current_gestational_age, 12.0);
        assert_eq!(result.metadata.visit_count, 0);
        assert_eq!(result.metadata.source, "fallback");
        assert_eq!(result.summary, FALLBACK_SUMMARY);
    }

    #[test]
    fn only_invalid_visits_is_no_data() {
        let result = predict(
            json!([{ "GESTATIONAL_AGE": 0 }, { "MATERNAL_WEIGHT": 60 }]),
            json!({}),
        );
        assert!(result.is_fallback);
        assert_eq!(result.progression.weeks_projected(), 28);
    }

    #[test]
    fn non_array_visits_is_no_data() {
        let result = predict(json!({ "GESTATIONAL_AGE": 20 }), json!(null));
        assert!(result.is_fallback);
    }

    #[test]
    fn at_term_returns_fallback_without_progression() {
        let result = predict(json!([{ "GESTATIONAL_AGE": 41 }]), json!({}));
        assert!(result.is_fallback);
        assert!(result.progression.is_empty());
        assert_eq!(result.metadata.current_gestational_age, 41.0);
        assert_eq!(result.metadata.weeks_projected, 0);
        assert_eq!(result.metadata.visit_count, 1);
        assert_eq!(result.expected_gestational_age, 39.0);
    }

    #[test]
    fn exactly_week_40_is_at_term() {
        let config = ForecastConfig::default();
        let run = PredictionRun::from_json(
            &json!([{ "GESTATIONAL_AGE": 40 }]),
            &json!({}),
            &config,
        );
        assert_eq!(run.state(), PredictionState::AtTerm);
    }

    #[test]
    fn normal_path_runs_full_pipeline() {
        let result = predict(
            json!([
                { "GESTATIONAL_AGE": 20, "MATERNAL_WEIGHT": 62, "HEMOGLOBIN_LEVEL": 11.8 },
                {
                    "GESTATIONAL_AGE": 30,
                    "MATERNAL_WEIGHT": 66,
                    "HEMOGLOBIN_LEVEL": 9.5,
                    "BLOOD_PRESSURE": "150/95",
                    "FUNDAL_HEIGHT": 36,
                    "FETAL_HEART_RATE": 140
                }
            ]),
            json!({ "AGE": 29, "BMI_VALUE": 32, "PARITY": 0 }),
        );

        assert!(!result.is_fallback);
        let scores = result.risk_scores.unwrap();
        assert_eq!(scores.anemia, 0.8);
        assert_eq!(scores.hypertension, 0.9);
        assert_eq!(scores.growth_restriction, 0.7);
        assert_eq!(scores.bmi_risk, 0.5);
        assert_eq!(result.delivery_mode.normal, 0.3);
        assert_eq!(result.delivery_mode.c_section, 0.7);
        assert_eq!(result.metadata.weeks_projected, 10);
        assert_eq!(result.metadata.visit_count, 2);
        assert_eq!(result.metadata.source, "rule-based");
        assert!(result.summary.starts_with("High hypertension risk"));
        assert!((result.delivery_type.total() - 1.0).abs() <= 0.02);
    }

    #[test]
    fn tied_latest_visits_score_and_trend_from_same_record() {
        let result = predict(
            json!([
                { "GESTATIONAL_AGE": 20, "HEMOGLOBIN_LEVEL": 12, "MATERNAL_WEIGHT": 60 },
                { "GESTATIONAL_AGE": 30, "HEMOGLOBIN_LEVEL": 9.5, "MATERNAL_WEIGHT": 62 },
                { "GESTATIONAL_AGE": 30, "HEMOGLOBIN_LEVEL": 12, "MATERNAL_WEIGHT": 70 }
            ]),
            json!({}),
        );
        let scores = result.risk_scores.unwrap();
        assert_eq!(scores.anemia, 0.1);
        // Baseline 70 kg from the last tied visit, trend 1 kg/week up to it.
        let first_week = &result.progression.weight[0];
        assert_eq!(first_week.week, 31);
        assert!((first_week.value - 70.4).abs() <= 0.11, "{}", first_week.value);
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let visits = json!([{ "GESTATIONAL_AGE": 24, "BLOOD_PRESSURE": "118/75" }]);
        let a = predict(visits.clone(), json!({}));
        let b = predict(visits, json!({}));
        assert_eq!(a.progression, b.progression);
        assert_eq!(a.summary, b.summary);
    }

    #[test]
    fn caller_input_is_not_reordered() {
        let visits = json!([{ "GESTATIONAL_AGE": 30 }, { "GESTATIONAL_AGE": 10 }]);
        let before = visits.clone();
        let _ = predict(visits.clone(), json!({}));
        assert_eq!(visits, before);

        let config = ForecastConfig::default();
        let run = PredictionRun::from_json(&visits, &json!({}), &config);
        assert_eq!(run.visits()[0].gestational_age, 30.0);
    }

    #[test]
    fn typed_constructor_drops_non_positive_weeks() {
        let config = ForecastConfig::default();
        let run = PredictionRun::new(
            vec![VisitRecord::at_week(-1.0), VisitRecord::at_week(18.0)],
            PatientRecord::default(),
            &config,
        );
        assert_eq!(run.visits().len(), 1);
        assert_eq!(run.state(), PredictionState::Normal);
    }

    #[test]
    fn request_parses_envelope() {
        let request = PredictionRequest::from_json(
            r#"{ "visits": [{ "GESTATIONAL_AGE": 22 }], "patient": { "AGE": 30 } }"#,
        )
        .unwrap();
        let result = request.predict(&ForecastConfig::default(), &mut seeded());
        assert!(!result.is_fallback);
        assert_eq!(result.metadata.weeks_projected, 18);
    }

    #[test]
    fn request_without_fields_is_fallback() {
        let request = PredictionRequest::from_json("{}").unwrap();
        let result = request.predict(&ForecastConfig::default(), &mut seeded());
        assert!(result.is_fallback);
    }

    #[test]
    fn malformed_request_is_an_error() {
        assert!(matches!(
            PredictionRequest::from_json("{ visits: "),
            Err(ForecastError::Json(_))
        ));
    }

    #[test]
    fn seeded_config_builds_reproducible_rng() {
        let config = ForecastConfig {
            seed: Some(11),
            ..ForecastConfig::default()
        };
        let a: u64 = rng_for(&config).gen();
        let b: u64 = rng_for(&config).gen();
        assert_eq!(a, b);
    }
}
