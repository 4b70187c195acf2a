pub mod coerce;
pub mod enums;
pub mod patient;
pub mod visit;

pub use enums::{BmiCategory, ReferenceMetric};
pub use patient::PatientRecord;
pub use visit::{latest_visit, normalize_visits, sorted_by_gestational_age, VisitRecord};
