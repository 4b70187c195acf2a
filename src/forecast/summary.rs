use super::types::{DeliveryModeDistribution, DeliveryTypeDistribution, RiskScoreSet};

/// Overall level of the dominant risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    pub fn from_score(score: f64) -> Self {
        if score > 0.7 {
            Self::High
        } else if score > 0.4 {
            Self::Moderate
        } else {
            Self::Low
        }
    }
}

/// Patient-facing name for a risk key. Unknown keys are returned unchanged.
pub fn risk_display_name(key: &str) -> &str {
    match key {
        "anemia" => "anemia",
        "hypertension" => "hypertension",
        "growthRestriction" => "fetal growth restriction",
        "pretermRisk" => "preterm birth",
        "maternalAgeRisk" => "maternal age",
        "bmiRisk" => "BMI-related",
        other => other,
    }
}

/// The highest-scoring risk. Ties keep the first key in declaration order.
pub fn primary_risk(scores: &RiskScoreSet) -> (&'static str, f64) {
    let entries = scores.entries();
    let mut best = entries[0];
    for entry in &entries[1..] {
        if entry.1 > best.1 {
            best = *entry;
        }
    }
    best
}

/// One-sentence summary keyed on the dominant risk.
///
/// The delivery-mode split is accepted but not yet reflected in the text.
pub fn generate_summary(
    scores: &RiskScoreSet,
    delivery_type: &DeliveryTypeDistribution,
    _delivery_mode: &DeliveryModeDistribution,
) -> String {
    let (key, score) = primary_risk(scores);
    let risk_name = risk_display_name(key);
    let full_term_pct = percent(delivery_type.full_term);
    let premature_pct = percent(delivery_type.premature);

    match RiskLevel::from_score(score) {
        RiskLevel::High => format!(
            "High {risk_name} risk detected; there is an estimated {premature_pct}% chance \
             of premature delivery, so close monitoring is recommended."
        ),
        RiskLevel::Moderate => format!(
            "Moderate {risk_name} risk noted; full-term delivery is {full_term_pct}% likely \
             with regular monitoring."
        ),
        RiskLevel::Low => format!(
            "Overall risk is low (main factor: {risk_name}); full-term delivery is \
             {full_term_pct}% likely."
        ),
    }
}

fn percent(probability: f64) -> i64 {
    (probability * 100.0).round() as i64
}
