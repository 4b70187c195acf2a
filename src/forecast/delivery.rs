use crate::models::PatientRecord;

use super::helpers::round_probability;
use super::types::{DeliveryModeDistribution, DeliveryTypeDistribution, RiskScoreSet};

/// Upper bound on the C-section probability.
const MAX_C_SECTION_RISK: f64 = 0.7;

/// Full-term / premature / mortality-risk split driven by the mean risk.
///
/// The raw weights are renormalized to sum to 1, then each share is rounded
/// to two decimals on its own; the rounded total may drift by up to 0.02.
pub fn delivery_type_distribution(scores: &RiskScoreSet) -> DeliveryTypeDistribution {
    let total_risk = scores.average();

    let full_term = (0.80 - 0.3 * total_risk).max(0.4);
    let premature = (0.15 + 0.2 * total_risk).min(0.4);
    let mortality_risk = (0.05 + 0.1 * total_risk).min(0.2);
    let sum = full_term + premature + mortality_risk;

    DeliveryTypeDistribution {
        full_term: round_probability(full_term / sum),
        premature: round_probability(premature / sum),
        mortality_risk: round_probability(mortality_risk / sum),
    }
}

/// Vaginal vs. C-section split from the hypertension, growth and BMI scores,
/// with a bump for a first birth.
pub fn delivery_mode_distribution(
    scores: &RiskScoreSet,
    patient: &PatientRecord,
) -> DeliveryModeDistribution {
    let first_birth = if patient.is_nulliparous() { 0.1 } else { 0.0 };
    let c_section = (0.4 * scores.hypertension
        + 0.3 * scores.growth_restriction
        + 0.2 * scores.bmi_risk
        + first_birth)
        .min(MAX_C_SECTION_RISK);

    DeliveryModeDistribution {
        normal: round_probability(1.0 - c_section),
        c_section: round_probability(c_section),
    }
}
