use serde::{Deserialize, Serialize};

use crate::forecast::helpers::parse_blood_pressure;
use crate::models::{sorted_by_gestational_age, BmiCategory, ReferenceMetric, VisitRecord};

use super::tables::averages_for;

/// One patient observation for deviation analysis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub week: f64,
    #[serde(default)]
    pub value: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviationRecord {
    pub week: f64,
    pub patient_value: f64,
    pub average_value: f64,
    /// patient - average
    pub deviation: f64,
    pub deviation_percent: f64,
}

/// Compare patient observations with the reference series for `category`.
///
/// Points pair with reference values by position, not by week: the n-th
/// patient point is compared with the n-th reference value. Points past the
/// end of the reference series, and points without a usable value, are
/// skipped.
pub fn calculate_deviation(
    patient_series: &[DataPoint],
    category: BmiCategory,
    metric: ReferenceMetric,
) -> Vec<DeviationRecord> {
    let (_, averages) = averages_for(category).series(metric);

    patient_series
        .iter()
        .zip(averages)
        .filter_map(|(point, &average_value)| {
            let patient_value = point.value.filter(|v| *v != 0.0 && v.is_finite())?;
            let deviation = patient_value - average_value;
            Some(DeviationRecord {
                week: point.week,
                patient_value,
                average_value,
                deviation,
                deviation_percent: deviation / average_value * 100.0,
            })
        })
        .collect()
}

/// Patient series for `metric` built from visit history, earliest visit first.
/// Blood-pressure metrics read only visits that recorded a reading.
pub fn visit_series(visits: &[VisitRecord], metric: ReferenceMetric) -> Vec<DataPoint> {
    sorted_by_gestational_age(visits)
        .iter()
        .map(|visit| DataPoint {
            week: visit.gestational_age,
            value: metric_value(visit, metric),
        })
        .collect()
}

fn metric_value(visit: &VisitRecord, metric: ReferenceMetric) -> Option<f64> {
    match metric {
        ReferenceMetric::Weight => visit.maternal_weight,
        ReferenceMetric::Fundal => visit.fundal_height,
        ReferenceMetric::Hemoglobin => visit.hemoglobin_level,
        ReferenceMetric::Systolic => visit
            .blood_pressure
            .as_deref()
            .map(|bp| parse_blood_pressure(Some(bp)).systolic),
        ReferenceMetric::Diastolic => visit
            .blood_pressure
            .as_deref()
            .map(|bp| parse_blood_pressure(Some(bp)).diastolic),
    }
}
