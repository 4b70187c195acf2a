use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::coerce;

/// A single prenatal visit after normalization.
///
/// Only `gestational_age` is guaranteed; every other field is `None` when
/// the source record left it blank, zero or unparsable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct VisitRecord {
    /// Weeks of gestation, always > 0.
    pub gestational_age: f64,
    pub maternal_weight: Option<f64>,
    pub fundal_height: Option<f64>,
    pub hemoglobin_level: Option<f64>,
    /// Raw "systolic/diastolic" text, parsed on demand.
    pub blood_pressure: Option<String>,
    pub fetal_heart_rate: Option<f64>,
    pub complications: Option<String>,
    pub visit_date: Option<String>,
}

impl VisitRecord {
    /// Visit at the given gestational age with nothing else recorded.
    pub fn at_week(gestational_age: f64) -> Self {
        Self {
            gestational_age,
            maternal_weight: None,
            fundal_height: None,
            hemoglobin_level: None,
            blood_pressure: None,
            fetal_heart_rate: None,
            complications: None,
            visit_date: None,
        }
    }

    /// Extract the recognized fields from a raw visit object.
    ///
    /// Returns `None` for non-objects and for records without a positive
    /// gestational age. Unrecognized keys are ignored.
    pub fn from_value(raw: &Value) -> Option<Self> {
        let obj = raw.as_object()?;
        let gestational_age = coerce::measurement(obj.get("GESTATIONAL_AGE"))?;
        if gestational_age <= 0.0 {
            return None;
        }

        Some(Self {
            gestational_age,
            maternal_weight: coerce::measurement(obj.get("MATERNAL_WEIGHT")),
            fundal_height: coerce::measurement(obj.get("FUNDAL_HEIGHT")),
            hemoglobin_level: coerce::measurement(obj.get("HEMOGLOBIN_LEVEL")),
            blood_pressure: coerce::text(obj.get("BLOOD_PRESSURE")),
            fetal_heart_rate: coerce::measurement(obj.get("FETAL_HEART_RATE")),
            complications: coerce::text(obj.get("COMPLICATIONS")),
            visit_date: coerce::text(obj.get("VISIT_DATE")),
        })
    }
}

/// Filter and coerce raw visits into validated records, preserving input order.
pub fn normalize_visits(raw: &[Value]) -> Vec<VisitRecord> {
    let visits: Vec<VisitRecord> = raw.iter().filter_map(VisitRecord::from_value).collect();

    let discarded = raw.len() - visits.len();
    if discarded > 0 {
        tracing::debug!(
            kept = visits.len(),
            discarded,
            "Discarded visits without a usable gestational age"
        );
    }

    visits
}

/// The visit with the highest gestational age. Ties resolve to the last
/// entry, matching the tail of [`sorted_by_gestational_age`].
pub fn latest_visit(visits: &[VisitRecord]) -> Option<&VisitRecord> {
    visits
        .iter()
        .max_by(|a, b| a.gestational_age.total_cmp(&b.gestational_age))
}

/// A copy of the visits ordered by ascending gestational age (stable).
pub fn sorted_by_gestational_age(visits: &[VisitRecord]) -> Vec<VisitRecord> {
    let mut sorted = visits.to_vec();
    sorted.sort_by(|a, b| a.gestational_age.total_cmp(&b.gestational_age));
    sorted
}
