//! Population-average trajectories per BMI category.
//!
//! Weight is sampled every two weeks from week 10; the other metrics every two
//! weeks from week 12. Index `i` of a series lines up with index `i` of its
//! week schedule.

use crate::models::{BmiCategory, ReferenceMetric};

pub static WEIGHT_WEEKS: [u32; 16] = [
    10, 12, 14, 16, 18, 20, 22, 24, 26, 28, 30, 32, 34, 36, 38, 40,
];
pub static MEASUREMENT_WEEKS: [u32; 15] = [
    12, 14, 16, 18, 20, 22, 24, 26, 28, 30, 32, 34, 36, 38, 40,
];

#[derive(Debug)]
pub struct BmiAverageTable {
    /// kg
    pub weight: [f64; 16],
    /// cm
    pub fundal: [f64; 15],
    /// g/dL
    pub hemoglobin: [f64; 15],
    /// mmHg
    pub systolic: [f64; 15],
    /// mmHg
    pub diastolic: [f64; 15],
}

impl BmiAverageTable {
    /// Reference values for one metric, paired with their week schedule.
    pub fn series(&self, metric: ReferenceMetric) -> (&'static [u32], &[f64]) {
        match metric {
            ReferenceMetric::Weight => (WEIGHT_WEEKS.as_slice(), self.weight.as_slice()),
            ReferenceMetric::Fundal => (MEASUREMENT_WEEKS.as_slice(), self.fundal.as_slice()),
            ReferenceMetric::Hemoglobin => {
                (MEASUREMENT_WEEKS.as_slice(), self.hemoglobin.as_slice())
            }
            ReferenceMetric::Systolic => (MEASUREMENT_WEEKS.as_slice(), self.systolic.as_slice()),
            ReferenceMetric::Diastolic => (MEASUREMENT_WEEKS.as_slice(), self.diastolic.as_slice()),
        }
    }
}

static UNDERWEIGHT: BmiAverageTable = BmiAverageTable {
    weight: [
        48.0, 48.5, 49.2, 50.0, 50.9, 51.8, 52.8, 53.8, 54.8, 55.9, 57.0, 58.2, 59.3, 60.5, 61.8,
        63.0,
    ],
    fundal: [
        11.4, 13.4, 15.4, 17.4, 19.4, 21.4, 23.4, 25.4, 27.4, 29.4, 31.2, 32.8, 34.2, 35.2, 35.9,
    ],
    hemoglobin: [
        12.2, 12.0, 11.7, 11.5, 11.3, 11.1, 11.0, 10.9, 10.9, 10.9, 11.0, 11.0, 11.1, 11.2, 11.2,
    ],
    systolic: [
        107.0, 106.0, 105.0, 104.0, 104.0, 105.0, 106.0, 107.0, 108.0, 109.0, 110.0, 111.0, 112.0,
        113.0, 115.0,
    ],
    diastolic: [
        68.0, 67.0, 66.0, 65.0, 65.0, 65.0, 66.0, 67.0, 68.0, 69.0, 70.0, 70.0, 71.0, 72.0, 73.0,
    ],
};

static NORMAL: BmiAverageTable = BmiAverageTable {
    weight: [
        60.0, 60.4, 61.0, 61.7, 62.5, 63.3, 64.1, 65.0, 65.9, 66.9, 67.8, 68.8, 69.8, 70.9, 71.9,
        73.0,
    ],
    fundal: [
        12.0, 14.0, 16.0, 18.0, 20.0, 22.0, 24.0, 26.0, 28.0, 30.0, 31.8, 33.4, 34.8, 35.8, 36.5,
    ],
    hemoglobin: [
        12.5, 12.3, 12.0, 11.8, 11.6, 11.4, 11.3, 11.2, 11.2, 11.2, 11.3, 11.3, 11.4, 11.5, 11.5,
    ],
    systolic: [
        110.0, 109.0, 108.0, 107.0, 107.0, 108.0, 109.0, 110.0, 111.0, 112.0, 113.0, 114.0, 115.0,
        116.0, 118.0,
    ],
    diastolic: [
        70.0, 69.0, 68.0, 67.0, 67.0, 67.0, 68.0, 69.0, 70.0, 71.0, 72.0, 72.0, 73.0, 74.0, 75.0,
    ],
};

static OVERWEIGHT: BmiAverageTable = BmiAverageTable {
    weight: [
        72.0, 72.3, 72.8, 73.3, 73.9, 74.5, 75.2, 75.9, 76.6, 77.3, 78.0, 78.8, 79.6, 80.4, 81.2,
        82.0,
    ],
    fundal: [
        12.6, 14.6, 16.6, 18.6, 20.6, 22.6, 24.6, 26.6, 28.6, 30.6, 32.4, 34.0, 35.4, 36.4, 37.1,
    ],
    hemoglobin: [
        12.6, 12.4, 12.1, 11.9, 11.7, 11.5, 11.4, 11.3, 11.3, 11.3, 11.4, 11.4, 11.5, 11.6, 11.6,
    ],
    systolic: [
        115.0, 114.0, 113.0, 112.0, 112.0, 113.0, 114.0, 115.0, 116.0, 117.0, 118.0, 119.0, 120.0,
        121.0, 123.0,
    ],
    diastolic: [
        73.0, 72.0, 71.0, 70.0, 70.0, 70.0, 71.0, 72.0, 73.0, 74.0, 75.0, 75.0, 76.0, 77.0, 78.0,
    ],
};

static OBESE: BmiAverageTable = BmiAverageTable {
    weight: [
        88.0, 88.2, 88.6, 88.9, 89.3, 89.8, 90.2, 90.7, 91.2, 91.7, 92.2, 92.8, 93.3, 93.9, 94.4,
        95.0,
    ],
    fundal: [
        13.2, 15.2, 17.2, 19.2, 21.2, 23.2, 25.2, 27.2, 29.2, 31.2, 33.0, 34.6, 36.0, 37.0, 37.7,
    ],
    hemoglobin: [
        12.4, 12.2, 11.9, 11.7, 11.5, 11.3, 11.2, 11.1, 11.1, 11.1, 11.2, 11.2, 11.3, 11.4, 11.4,
    ],
    systolic: [
        120.0, 119.0, 118.0, 117.0, 117.0, 118.0, 119.0, 120.0, 121.0, 122.0, 123.0, 124.0, 125.0,
        126.0, 128.0,
    ],
    diastolic: [
        76.0, 75.0, 74.0, 73.0, 73.0, 73.0, 74.0, 75.0, 76.0, 77.0, 78.0, 78.0, 79.0, 80.0, 81.0,
    ],
};

pub fn averages_for(category: BmiCategory) -> &'static BmiAverageTable {
    match category {
        BmiCategory::Underweight => &UNDERWEIGHT,
        BmiCategory::Normal => &NORMAL,
        BmiCategory::Overweight => &OVERWEIGHT,
        BmiCategory::Obese => &OBESE,
    }
}
