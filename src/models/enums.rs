use crate::error::ForecastError;
use serde::{Deserialize, Serialize};

/// Macro to generate enum with as_str + std::str::FromStr pattern.
/// Parsing ignores ASCII case.
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = ForecastError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                $(
                    if trimmed.eq_ignore_ascii_case($s) {
                        return Ok(Self::$variant);
                    }
                )+
                Err(ForecastError::InvalidEnum {
                    field: stringify!($name).into(),
                    value: s.into(),
                })
            }
        }
    };
}

str_enum!(BmiCategory {
    Underweight => "Underweight",
    Normal => "Normal",
    Overweight => "Overweight",
    Obese => "Obese",
});

impl Default for BmiCategory {
    fn default() -> Self {
        Self::Normal
    }
}

impl BmiCategory {
    pub const ALL: [BmiCategory; 4] = [
        BmiCategory::Underweight,
        BmiCategory::Normal,
        BmiCategory::Overweight,
        BmiCategory::Obese,
    ];

    /// Lenient lookup: unknown or missing names resolve to `Normal`.
    pub fn from_status(status: Option<&str>) -> Self {
        status
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    /// Classify a raw BMI value. Never applied implicitly by the engine.
    pub fn from_bmi_value(bmi: f64) -> Self {
        if bmi < 18.5 {
            Self::Underweight
        } else if bmi < 25.0 {
            Self::Normal
        } else if bmi < 30.0 {
            Self::Overweight
        } else {
            Self::Obese
        }
    }
}

str_enum!(ReferenceMetric {
    Weight => "weight",
    Fundal => "fundal",
    Hemoglobin => "hemoglobin",
    Systolic => "systolic",
    Diastolic => "diastolic",
});

impl ReferenceMetric {
    pub const ALL: [ReferenceMetric; 5] = [
        ReferenceMetric::Weight,
        ReferenceMetric::Fundal,
        ReferenceMetric::Hemoglobin,
        ReferenceMetric::Systolic,
        ReferenceMetric::Diastolic,
    ];
}
