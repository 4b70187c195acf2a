use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::coerce;
use super::enums::BmiCategory;

/// Age assumed when the record carries none.
pub const DEFAULT_AGE: f64 = 25.0;

/// Demographic and obstetric attributes of the patient.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", default)]
pub struct PatientRecord {
    pub age: Option<f64>,
    pub bmi_value: Option<f64>,
    pub bmi_status: BmiCategory,
    pub gravida: Option<f64>,
    /// Prior births. Zero is a real value here, not "unknown".
    pub parity: Option<f64>,
    pub medical_history: Option<String>,
    /// Parity recorded as exactly `0` or `"0"`.
    #[serde(skip)]
    pub first_birth: bool,
}

impl PatientRecord {
    /// Coerce a raw patient object. Anything that is not an object yields
    /// the empty record.
    pub fn from_value(raw: &Value) -> Self {
        let Some(obj) = raw.as_object() else {
            return Self::default();
        };

        Self {
            age: coerce::measurement(obj.get("AGE")),
            bmi_value: coerce::measurement(obj.get("BMI_VALUE")),
            bmi_status: BmiCategory::from_status(obj.get("BMI_STATUS").and_then(Value::as_str)),
            gravida: coerce::count(obj.get("GRAVIDA")),
            parity: coerce::count(obj.get("PARITY")),
            medical_history: coerce::text(obj.get("MEDICAL_HISTORY")),
            first_birth: coerce::is_literal_zero(obj.get("PARITY")),
        }
    }

    pub fn age_or_default(&self) -> f64 {
        self.age.unwrap_or(DEFAULT_AGE)
    }

    pub fn is_nulliparous(&self) -> bool {
        self.first_birth
    }

    /// Prior births on record and a history mentioning preterm delivery.
    pub fn has_preterm_history(&self) -> bool {
        let parous = self.parity.is_some_and(|p| p > 0.0);
        let mentions_preterm = self
            .medical_history
            .as_deref()
            .is_some_and(|h| h.to_lowercase().contains("preterm"));
        parous && mentions_preterm
    }
}
