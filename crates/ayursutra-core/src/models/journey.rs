//! Treatment journey and vitals records.
//!
//! A patient's inpatient course is tracked as numbered days, each optionally
//! tied to a therapy session, with vitals recorded alongside. The journey
//! feeds the day-wise treatment plan in the discharge summary.

use serde::{Deserialize, Serialize};

/// One day of a patient's treatment journey.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JourneyDay {
    /// Unique record ID
    pub id: String,
    /// Patient foreign key
    pub patient_id: String,
    /// Day number within the course (1-based)
    pub day_number: u32,
    /// Therapy performed that day, if any
    pub therapy_id: Option<String>,
    /// Whether the day's session was completed
    pub session_completed: bool,
    /// Diet prescribed for the day
    pub prescribed_diet: Option<String>,
    /// Clinical notes
    pub notes: Option<String>,
    /// When the session was marked complete
    pub completed_at: Option<String>,
    /// Creation timestamp
    pub created_at: String,
}

impl JourneyDay {
    /// Create a new, not-yet-completed journey day.
    pub fn new(patient_id: String, day_number: u32) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            patient_id,
            day_number,
            therapy_id: None,
            session_completed: false,
            prescribed_diet: None,
            notes: None,
            completed_at: None,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Mark the day's session complete, stamping the completion time.
    pub fn complete(&mut self) {
        self.session_completed = true;
        self.completed_at = Some(chrono::Utc::now().to_rfc3339());
    }
}

/// Vitals recorded on a given journey day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VitalsRecord {
    /// Unique record ID
    pub id: String,
    /// Patient foreign key
    pub patient_id: String,
    /// Day number within the course (1-based)
    pub day_number: u32,
    /// Pulse rate, beats per minute
    pub pulse: Option<u16>,
    /// Systolic blood pressure, mmHg
    pub bp_systolic: Option<u16>,
    /// Diastolic blood pressure, mmHg
    pub bp_diastolic: Option<u16>,
    /// Appetite observation (e.g., "good", "reduced")
    pub appetite: Option<String>,
    /// Clinical notes
    pub notes: Option<String>,
    /// Recording timestamp
    pub recorded_at: String,
}

impl VitalsRecord {
    /// Create a new vitals record for a journey day.
    pub fn new(patient_id: String, day_number: u32) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            patient_id,
            day_number,
            pulse: None,
            bp_systolic: None,
            bp_diastolic: None,
            appetite: None,
            notes: None,
            recorded_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}
