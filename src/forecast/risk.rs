//! Piecewise risk scoring from the most recent visit.
//!
//! Each score is independent. A score whose input was never recorded stays at
//! 0, which is distinct from the low-risk band (0.1) reached by a recorded
//! value inside normal limits.

use crate::models::{latest_visit, PatientRecord, VisitRecord};

use super::helpers::parse_blood_pressure;
use super::types::RiskScoreSet;

/// Score the latest visit (highest gestational age) against patient attributes.
pub fn calculate_risk_scores(visits: &[VisitRecord], patient: &PatientRecord) -> RiskScoreSet {
    let Some(latest) = latest_visit(visits) else {
        return RiskScoreSet::default();
    };

    RiskScoreSet {
        anemia: anemia_risk(latest.hemoglobin_level),
        hypertension: hypertension_risk(latest.blood_pressure.as_deref()),
        growth_restriction: growth_restriction_risk(latest.fundal_height, latest.gestational_age),
        preterm_risk: preterm_risk(latest.gestational_age, patient),
        maternal_age_risk: maternal_age_risk(patient.age_or_default()),
        bmi_risk: bmi_risk(patient.bmi_value),
    }
}

fn anemia_risk(hemoglobin: Option<f64>) -> f64 {
    match hemoglobin {
        Some(hb) if hb < 10.0 => 0.8,
        Some(hb) if hb < 11.0 => 0.4,
        Some(_) => 0.1,
        None => 0.0,
    }
}

fn hypertension_risk(reading: Option<&str>) -> f64 {
    if reading.is_none() {
        return 0.0;
    }
    let bp = parse_blood_pressure(reading);
    if bp.systolic >= 140.0 || bp.diastolic >= 90.0 {
        0.9
    } else if bp.systolic >= 130.0 || bp.diastolic >= 85.0 {
        0.6
    } else {
        0.1
    }
}

fn growth_restriction_risk(fundal_height: Option<f64>, gestational_age: f64) -> f64 {
    let Some(fundal) = fundal_height else {
        return 0.0;
    };
    let gap = (fundal - gestational_age).abs();
    if gap > 4.0 {
        0.7
    } else if gap > 2.0 {
        0.3
    } else {
        0.1
    }
}

fn preterm_risk(gestational_age: f64, patient: &PatientRecord) -> f64 {
    if gestational_age < 37.0 && patient.has_preterm_history() {
        0.6
    } else if gestational_age < 32.0 {
        0.3
    } else {
        0.1
    }
}

fn maternal_age_risk(age: f64) -> f64 {
    if !(18.0..=35.0).contains(&age) {
        0.4
    } else {
        0.1
    }
}

fn bmi_risk(bmi: Option<f64>) -> f64 {
    match bmi {
        Some(b) if !(18.5..=30.0).contains(&b) => 0.5,
        Some(b) if b > 25.0 => 0.3,
        Some(_) => 0.1,
        None => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn visit(week: f64) -> VisitRecord {
        VisitRecord::at_week(week)
    }

    #[test]
    fn high_risk_latest_visit() {
        let mut latest = visit(30.0);
        latest.hemoglobin_level = Some(9.5);
        latest.blood_pressure = Some("150/95".into());
        latest.fundal_height = Some(36.0);
        let patient = PatientRecord::from_value(&json!({ "BMI_VALUE": 32, "PARITY": 0 }));

        let scores = calculate_risk_scores(&[latest], &patient);
        assert_eq!(scores.anemia, 0.8);
        assert_eq!(scores.hypertension, 0.9);
        assert_eq!(scores.growth_restriction, 0.7);
        assert_eq!(scores.bmi_risk, 0.5);
        assert_eq!(scores.preterm_risk, 0.3);
        assert_eq!(scores.maternal_age_risk, 0.1);
    }

    #[test]
    fn only_latest_visit_is_scored() {
        let mut early = visit(12.0);
        early.hemoglobin_level = Some(8.0);
        let mut late = visit(33.0);
        late.hemoglobin_level = Some(12.0);
        let scores = calculate_risk_scores(&[late, early], &PatientRecord::default());
        assert_eq!(scores.anemia, 0.1);
    }

    #[test]
    fn absent_fields_score_zero() {
        let scores = calculate_risk_scores(&[visit(34.0)], &PatientRecord::default());
        assert_eq!(scores.anemia, 0.0);
        assert_eq!(scores.hypertension, 0.0);
        assert_eq!(scores.growth_restriction, 0.0);
        assert_eq!(scores.bmi_risk, 0.0);
        // Age defaults to 25, gestational age is always present.
        assert_eq!(scores.maternal_age_risk, 0.1);
        assert_eq!(scores.preterm_risk, 0.1);
    }

    /// Known boundary case: a recorded hemoglobin of 0 is dropped during
    /// normalization and scores as absent rather than most severe.
    #[test]
    fn zero_hemoglobin_scores_as_absent() {
        let raw = json!({ "GESTATIONAL_AGE": 30, "HEMOGLOBIN_LEVEL": 0 });
        let visits = crate::models::normalize_visits(&[raw]);
        let scores = calculate_risk_scores(&visits, &PatientRecord::default());
        assert_eq!(scores.anemia, 0.0);
    }

    #[test]
    fn anemia_bands() {
        assert_eq!(anemia_risk(Some(9.99)), 0.8);
        assert_eq!(anemia_risk(Some(10.0)), 0.4);
        assert_eq!(anemia_risk(Some(10.99)), 0.4);
        assert_eq!(anemia_risk(Some(11.0)), 0.1);
    }

    #[test]
    fn hypertension_bands() {
        assert_eq!(hypertension_risk(Some("140/70")), 0.9);
        assert_eq!(hypertension_risk(Some("120/90")), 0.9);
        assert_eq!(hypertension_risk(Some("130/70")), 0.6);
        assert_eq!(hypertension_risk(Some("120/85")), 0.6);
        assert_eq!(hypertension_risk(Some("129/84")), 0.1);
        // Unparsable text still counts as a reading and scores the 115/70 default.
        assert_eq!(hypertension_risk(Some("n/a")), 0.1);
    }

    #[test]
    fn growth_restriction_bands() {
        assert_eq!(growth_restriction_risk(Some(25.0), 30.0), 0.7);
        assert_eq!(growth_restriction_risk(Some(33.0), 30.0), 0.3);
        assert_eq!(growth_restriction_risk(Some(32.0), 30.0), 0.1);
    }

    #[test]
    fn preterm_history_dominates_before_37_weeks() {
        let patient = PatientRecord::from_value(&json!({
            "PARITY": "1",
            "MEDICAL_HISTORY": "previous Preterm delivery"
        }));
        assert_eq!(preterm_risk(36.0, &patient), 0.6);
        assert_eq!(preterm_risk(37.0, &patient), 0.1);
        assert_eq!(preterm_risk(30.0, &PatientRecord::default()), 0.3);
    }

    #[test]
    fn maternal_age_bands() {
        assert_eq!(maternal_age_risk(17.0), 0.4);
        assert_eq!(maternal_age_risk(18.0), 0.1);
        assert_eq!(maternal_age_risk(35.0), 0.1);
        assert_eq!(maternal_age_risk(36.0), 0.4);
    }

    #[test]
    fn bmi_bands() {
        assert_eq!(bmi_risk(Some(18.0)), 0.5);
        assert_eq!(bmi_risk(Some(30.5)), 0.5);
        assert_eq!(bmi_risk(Some(30.0)), 0.3);
        assert_eq!(bmi_risk(Some(25.5)), 0.3);
        assert_eq!(bmi_risk(Some(25.0)), 0.1);
        assert_eq!(bmi_risk(None), 0.0);
    }

    #[test]
    fn every_score_within_unit_interval() {
        let mut latest = visit(20.0);
        latest.hemoglobin_level = Some(7.0);
        latest.blood_pressure = Some("190/120".into());
        latest.fundal_height = Some(40.0);
        let patient = PatientRecord::from_value(&json!({
            "AGE": 44,
            "BMI_VALUE": 41,
            "PARITY": 3,
            "MEDICAL_HISTORY": "preterm x2"
        }));
        let scores = calculate_risk_scores(&[latest], &patient);
        for (key, score) in scores.entries() {
            assert!((0.0..=1.0).contains(&score), "{key} = {score}");
        }
    }
}
