use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ---------------------------------------------------------------------------
// RiskScoreSet
// ---------------------------------------------------------------------------

/// Six independent risk scores in [0, 1]. Higher is worse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskScoreSet {
    pub anemia: f64,
    pub hypertension: f64,
    pub growth_restriction: f64,
    pub preterm_risk: f64,
    pub maternal_age_risk: f64,
    pub bmi_risk: f64,
}

impl RiskScoreSet {
    /// Scores keyed by their wire names, in declaration order.
    pub fn entries(&self) -> [(&'static str, f64); 6] {
        [
            ("anemia", self.anemia),
            ("hypertension", self.hypertension),
            ("growthRestriction", self.growth_restriction),
            ("pretermRisk", self.preterm_risk),
            ("maternalAgeRisk", self.maternal_age_risk),
            ("bmiRisk", self.bmi_risk),
        ]
    }

    /// Mean of the six scores.
    pub fn average(&self) -> f64 {
        let entries = self.entries();
        entries.iter().map(|(_, score)| score).sum::<f64>() / entries.len() as f64
    }
}

// ---------------------------------------------------------------------------
// Distributions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeliveryTypeDistribution {
    #[serde(rename = "FullTerm")]
    pub full_term: f64,
    #[serde(rename = "Premature")]
    pub premature: f64,
    #[serde(rename = "MortalityRisk")]
    pub mortality_risk: f64,
}

impl DeliveryTypeDistribution {
    pub fn total(&self) -> f64 {
        self.full_term + self.premature + self.mortality_risk
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeliveryModeDistribution {
    #[serde(rename = "Normal")]
    pub normal: f64,
    #[serde(rename = "CSection")]
    pub c_section: f64,
}

impl DeliveryModeDistribution {
    pub fn total(&self) -> f64 {
        self.normal + self.c_section
    }
}

// ---------------------------------------------------------------------------
// Progression
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressionPoint {
    pub week: u32,
    pub value: f64,
}

/// Week-by-week projected trajectories. Empty series are omitted on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProgressionSeries {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub weight: Vec<ProgressionPoint>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fundal_height: Vec<ProgressionPoint>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub hemoglobin: Vec<ProgressionPoint>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub systolic: Vec<ProgressionPoint>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub diastolic: Vec<ProgressionPoint>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fetal_heart_rate: Vec<ProgressionPoint>,
}

impl ProgressionSeries {
    pub fn is_empty(&self) -> bool {
        self.weeks_projected() == 0
    }

    /// Number of projected weeks (all six series share one length).
    pub fn weeks_projected(&self) -> usize {
        self.weight.len()
    }
}

// ---------------------------------------------------------------------------
// PredictionResult
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionMetadata {
    pub current_gestational_age: f64,
    pub weeks_projected: usize,
    pub visit_count: usize,
    pub generated_at: DateTime<Utc>,
    pub source: String,
}

/// Everything a single prediction call returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    pub delivery_type: DeliveryTypeDistribution,
    pub delivery_mode: DeliveryModeDistribution,
    pub progression: ProgressionSeries,
    pub summary: String,
    pub expected_gestational_age: f64,
    pub expected_birth_weight: f64,
    /// `None` on fallback results, serialized as `{}`.
    #[serde(
        serialize_with = "some_or_empty_object",
        deserialize_with = "empty_object_as_none",
        default
    )]
    pub risk_scores: Option<RiskScoreSet>,
    pub metadata: PredictionMetadata,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_fallback: bool,
}

fn some_or_empty_object<S, T>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: Serialize,
{
    use serde::ser::SerializeMap;

    match value {
        Some(inner) => inner.serialize(serializer),
        None => serializer.serialize_map(Some(0))?.end(),
    }
}

fn empty_object_as_none<'de, D>(deserializer: D) -> Result<Option<RiskScoreSet>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::Object(ref map) if map.is_empty() => Ok(None),
        other => serde_json::from_value(other)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}
