use serde::{Deserialize, Serialize};

/// Systolic used when a reading is missing or unparsable.
pub const DEFAULT_SYSTOLIC: f64 = 115.0;
/// Diastolic used when a reading is missing or unparsable.
pub const DEFAULT_DIASTOLIC: f64 = 70.0;

/// Round to `decimals` places, halves away from zero.
pub fn round_value(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Round a probability to two decimal places.
pub fn round_probability(value: f64) -> f64 {
    round_value(value, 2)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BloodPressure {
    pub systolic: f64,
    pub diastolic: f64,
}

impl Default for BloodPressure {
    fn default() -> Self {
        Self {
            systolic: DEFAULT_SYSTOLIC,
            diastolic: DEFAULT_DIASTOLIC,
        }
    }
}

/// Parse a "systolic/diastolic" reading.
///
/// Never fails: each half that is missing, unparsable or zero falls back
/// to its own default, so "abc" yields 115/70 and "130/" yields 130/70.
pub fn parse_blood_pressure(reading: Option<&str>) -> BloodPressure {
    let Some(reading) = reading else {
        return BloodPressure::default();
    };

    let mut halves = reading.split('/');
    let systolic = halves.next().and_then(parse_component);
    let diastolic = halves.next().and_then(parse_component);

    BloodPressure {
        systolic: systolic.unwrap_or(DEFAULT_SYSTOLIC),
        diastolic: diastolic.unwrap_or(DEFAULT_DIASTOLIC),
    }
}

fn parse_component(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v != 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_value_one_decimal() {
        assert_eq!(round_value(3.14159, 1), 3.1);
        assert_eq!(round_value(2.45, 0), 2.0);
        assert_eq!(round_value(140.6, 0), 141.0);
    }

    #[test]
    fn round_probability_two_decimals() {
        assert_eq!(round_probability(0.6666), 0.67);
        assert_eq!(round_probability(0.3), 0.3);
    }

    #[test]
    fn parses_well_formed_reading() {
        let bp = parse_blood_pressure(Some("120/80"));
        assert_eq!(bp.systolic, 120.0);
        assert_eq!(bp.diastolic, 80.0);
    }

    #[test]
    fn tolerates_whitespace() {
        let bp = parse_blood_pressure(Some(" 132 / 84 "));
        assert_eq!(bp, BloodPressure { systolic: 132.0, diastolic: 84.0 });
    }

    #[test]
    fn absent_or_garbage_uses_defaults() {
        for reading in [None, Some(""), Some("abc"), Some("/")] {
            assert_eq!(parse_blood_pressure(reading), BloodPressure::default(), "{reading:?}");
        }
    }

    #[test]
    fn partial_reading_defaults_per_component() {
        assert_eq!(
            parse_blood_pressure(Some("130/")),
            BloodPressure { systolic: 130.0, diastolic: 70.0 }
        );
        assert_eq!(
            parse_blood_pressure(Some("/88")),
            BloodPressure { systolic: 115.0, diastolic: 88.0 }
        );
        assert_eq!(
            parse_blood_pressure(Some("145")),
            BloodPressure { systolic: 145.0, diastolic: 70.0 }
        );
    }
}
