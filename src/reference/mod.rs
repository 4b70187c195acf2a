//! BMI-stratified reference trajectories for comparing a patient against
//! population averages.

pub mod deviation;
pub mod tables;

use serde::{Deserialize, Serialize};

use crate::models::{BmiCategory, ReferenceMetric};

pub use deviation::{calculate_deviation, visit_series, DataPoint, DeviationRecord};
pub use tables::{averages_for, BmiAverageTable, MEASUREMENT_WEEKS, WEIGHT_WEEKS};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeekValue {
    pub week: u32,
    pub value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeekBloodPressure {
    pub week: u32,
    pub systolic: f64,
    pub diastolic: f64,
}

/// Week-tagged reference series for one BMI category, ready for charting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedAverages {
    pub average_weight: Vec<WeekValue>,
    pub average_fundal: Vec<WeekValue>,
    pub average_hemoglobin: Vec<WeekValue>,
    pub average_blood_pressure: Vec<WeekBloodPressure>,
}

pub fn get_formatted_averages(category: BmiCategory) -> FormattedAverages {
    let table = averages_for(category);
    let tagged = |metric: ReferenceMetric| -> Vec<WeekValue> {
        let (weeks, values) = table.series(metric);
        weeks
            .iter()
            .zip(values)
            .map(|(&week, &value)| WeekValue { week, value })
            .collect()
    };

    let average_blood_pressure = MEASUREMENT_WEEKS
        .iter()
        .zip(table.systolic.iter().zip(&table.diastolic))
        .map(|(&week, (&systolic, &diastolic))| WeekBloodPressure {
            week,
            systolic,
            diastolic,
        })
        .collect();

    FormattedAverages {
        average_weight: tagged(ReferenceMetric::Weight),
        average_fundal: tagged(ReferenceMetric::Fundal),
        average_hemoglobin: tagged(ReferenceMetric::Hemoglobin),
        average_blood_pressure,
    }
}

/// Lenient variant taking the status text as stored on the patient record;
/// unknown names use the `Normal` table.
pub fn get_formatted_averages_for_status(bmi_status: Option<&str>) -> FormattedAverages {
    get_formatted_averages(BmiCategory::from_status(bmi_status))
}
