use crate::models::{sorted_by_gestational_age, VisitRecord};

/// Numeric visit fields a trend can be computed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitMetric {
    MaternalWeight,
    FundalHeight,
    HemoglobinLevel,
    FetalHeartRate,
}

impl VisitMetric {
    pub fn value(self, visit: &VisitRecord) -> Option<f64> {
        match self {
            Self::MaternalWeight => visit.maternal_weight,
            Self::FundalHeight => visit.fundal_height,
            Self::HemoglobinLevel => visit.hemoglobin_level,
            Self::FetalHeartRate => visit.fetal_heart_rate,
        }
    }
}

/// Slope of `metric` per gestational week, from the earliest to the latest visit.
///
/// Returns 0 with fewer than two visits, when either endpoint lacks the
/// metric, or when both endpoints share a gestational age.
pub fn calculate_trend(visits: &[VisitRecord], metric: VisitMetric) -> f64 {
    if visits.len() < 2 {
        return 0.0;
    }

    let sorted = sorted_by_gestational_age(visits);
    let (Some(first), Some(last)) = (sorted.first(), sorted.last()) else {
        return 0.0;
    };
    let (Some(first_value), Some(last_value)) = (metric.value(first), metric.value(last)) else {
        return 0.0;
    };

    let span = last.gestational_age - first.gestational_age;
    if span == 0.0 {
        return 0.0;
    }
    (last_value - first_value) / span
}
