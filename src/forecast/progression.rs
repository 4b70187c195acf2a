//! Week-by-week projection of maternal and fetal vitals up to term.
//!
//! Weight and hemoglobin follow fixed drifts nudged by the patient's observed
//! trends. Fundal height, blood pressure and fetal heart rate carry small
//! uniform jitter drawn from a caller-supplied generator, so a seeded
//! generator always reproduces the same trajectory.

use rand::Rng;

use crate::config::ForecastConfig;
use crate::models::VisitRecord;

use super::helpers::{parse_blood_pressure, round_value};
use super::trend::{calculate_trend, VisitMetric};
use super::types::{ProgressionPoint, ProgressionSeries};

const WEIGHT_GAIN_PER_WEEK: f64 = 0.35;
const HEMOGLOBIN_DROP_PER_WEEK: f64 = 0.05;
const HEMOGLOBIN_FLOOR: f64 = 10.5;
const SYSTOLIC_RISE_PER_WEEK: f64 = 0.25;
const DIASTOLIC_RISE_PER_WEEK: f64 = 0.15;
const FETAL_HEART_RATE_MIN: f64 = 120.0;
const FETAL_HEART_RATE_MAX: f64 = 160.0;

/// Starting point and drift inputs for a projection.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionBaseline {
    /// Last completed gestational week; the first projected week is one later.
    pub start_week: u32,
    pub weeks_to_project: u32,
    pub weight: f64,
    pub hemoglobin: f64,
    pub systolic: f64,
    pub diastolic: f64,
    pub fetal_heart_rate: f64,
    /// kg per gestational week across the visit history.
    pub weight_trend: f64,
    /// g/dL per gestational week across the visit history.
    pub hemoglobin_trend: f64,
}

impl ProjectionBaseline {
    /// Population defaults from `start_week` to term, with flat trends.
    pub fn population_default(start_week: u32, config: &ForecastConfig) -> Self {
        let bp = parse_blood_pressure(None);
        Self {
            start_week,
            weeks_to_project: config.term_week.saturating_sub(start_week),
            weight: config.baseline_weight_kg,
            hemoglobin: config.baseline_hemoglobin,
            systolic: bp.systolic,
            diastolic: bp.diastolic,
            fetal_heart_rate: config.baseline_fetal_heart_rate,
            weight_trend: 0.0,
            hemoglobin_trend: 0.0,
        }
    }

    /// Baseline from the latest visit, with trends over the whole history.
    /// Vitals missing from the latest visit fall back to the configured defaults.
    pub fn from_visits(
        visits: &[VisitRecord],
        latest: &VisitRecord,
        config: &ForecastConfig,
    ) -> Self {
        let start_week = latest.gestational_age.floor().max(0.0) as u32;
        let bp = parse_blood_pressure(latest.blood_pressure.as_deref());

        Self {
            start_week,
            weeks_to_project: config.term_week.saturating_sub(start_week).max(1),
            weight: latest.maternal_weight.unwrap_or(config.baseline_weight_kg),
            hemoglobin: latest.hemoglobin_level.unwrap_or(config.baseline_hemoglobin),
            systolic: bp.systolic,
            diastolic: bp.diastolic,
            fetal_heart_rate: latest
                .fetal_heart_rate
                .unwrap_or(config.baseline_fetal_heart_rate),
            weight_trend: calculate_trend(visits, VisitMetric::MaternalWeight),
            hemoglobin_trend: calculate_trend(visits, VisitMetric::HemoglobinLevel),
        }
    }
}

/// Project all six series for `baseline.weeks_to_project` weeks.
///
/// Jitter is drawn per week in a fixed order: fundal height, systolic,
/// diastolic, fetal heart rate.
pub fn project_progression<R: Rng>(
    baseline: &ProjectionBaseline,
    rng: &mut R,
) -> ProgressionSeries {
    let capacity = baseline.weeks_to_project as usize;
    let mut series = ProgressionSeries {
        weight: Vec::with_capacity(capacity),
        fundal_height: Vec::with_capacity(capacity),
        hemoglobin: Vec::with_capacity(capacity),
        systolic: Vec::with_capacity(capacity),
        diastolic: Vec::with_capacity(capacity),
        fetal_heart_rate: Vec::with_capacity(capacity),
    };

    for i in 1..=baseline.weeks_to_project {
        let week = baseline.start_week + i;
        let elapsed = f64::from(i);

        let weight = baseline.weight
            + WEIGHT_GAIN_PER_WEEK * elapsed
            + elapsed * baseline.weight_trend * 0.1;

        let fundal_height = f64::from(week) + rng.gen_range(-1.0..=1.0);

        let hemoglobin = (baseline.hemoglobin - HEMOGLOBIN_DROP_PER_WEEK * elapsed)
            .max(HEMOGLOBIN_FLOOR)
            + elapsed * baseline.hemoglobin_trend * 0.02;

        let systolic =
            baseline.systolic + SYSTOLIC_RISE_PER_WEEK * elapsed + rng.gen_range(-1.0..=1.0);
        let diastolic =
            baseline.diastolic + DIASTOLIC_RISE_PER_WEEK * elapsed + rng.gen_range(-1.0..=1.0);

        let fetal_heart_rate = (baseline.fetal_heart_rate
            + 2.0 * (elapsed / 3.0).sin()
            + rng.gen_range(-1.5..=1.5))
        .clamp(FETAL_HEART_RATE_MIN, FETAL_HEART_RATE_MAX);

        let point = |value: f64| ProgressionPoint { week, value };
        series.weight.push(point(round_value(weight, 1)));
        series.fundal_height.push(point(round_value(fundal_height, 1)));
        series.hemoglobin.push(point(round_value(hemoglobin, 1)));
        series.systolic.push(point(systolic.round()));
        series.diastolic.push(point(diastolic.round()));
        series.fetal_heart_rate.push(point(fetal_heart_rate.round()));
    }

    series
}
