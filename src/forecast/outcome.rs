use super::helpers::round_value;
use super::types::{DeliveryTypeDistribution, RiskScoreSet};

const BASELINE_GESTATIONAL_AGE: f64 = 39.2;
const BASELINE_BIRTH_WEIGHT_KG: f64 = 3.3;

/// Expected gestational age (weeks) and birth weight (kg) at delivery.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpectedOutcome {
    pub gestational_age: f64,
    pub birth_weight: f64,
}

pub fn estimate_expected_outcome(
    scores: &RiskScoreSet,
    delivery_type: &DeliveryTypeDistribution,
) -> ExpectedOutcome {
    let gestational_age = if delivery_type.premature > 0.3 {
        36.5
    } else if delivery_type.premature > 0.15 {
        38.0
    } else {
        BASELINE_GESTATIONAL_AGE
    };

    let mut birth_weight = BASELINE_BIRTH_WEIGHT_KG;
    if scores.growth_restriction > 0.5 {
        birth_weight -= 0.5;
    }
    if scores.hypertension > 0.5 {
        birth_weight -= 0.3;
    }
    if scores.anemia > 0.5 {
        birth_weight -= 0.2;
    }
    if gestational_age < 37.5 {
        birth_weight -= 0.4;
    }

    ExpectedOutcome {
        gestational_age: round_value(gestational_age.clamp(35.0, 40.0), 1),
        birth_weight: round_value(birth_weight.clamp(2.5, 4.0), 1),
    }
}
