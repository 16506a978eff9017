//! Export formats for clinic records.

mod discharge;

pub use discharge::{DischargeSummary, TreatmentDayEntry};
