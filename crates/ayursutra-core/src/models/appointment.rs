//! Appointment records and derived status vocabulary.

use serde::{Deserialize, Serialize};

/// Status of a single appointment, derived from current time vs the stored
/// start/end times. Never stored as mutable state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppointmentStatus {
    Scheduled,
    InProgress,
    Completed,
}

impl AppointmentStatus {
    /// Display label (as surfaced on the schedule board).
    pub fn label(&self) -> &'static str {
        match self {
            AppointmentStatus::Scheduled => "Scheduled",
            AppointmentStatus::InProgress => "In Progress",
            AppointmentStatus::Completed => "Completed",
        }
    }
}

/// Overall patient status, derived by scanning the patient's appointments.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PatientStatus {
    New,
    Scheduled,
    InTreatment,
    Completed,
}

impl PatientStatus {
    /// Display label (as shown on patient cards).
    pub fn label(&self) -> &'static str {
        match self {
            PatientStatus::New => "New",
            PatientStatus::Scheduled => "Scheduled",
            PatientStatus::InTreatment => "In Treatment",
            PatientStatus::Completed => "Completed",
        }
    }
}

/// Derive a patient's status from their appointment statuses.
///
/// Any in-progress appointment wins; otherwise a scheduled one wins over past
/// completed ones; otherwise completed if any exists; otherwise the patient
/// is new.
pub fn derive_patient_status(appointments: &[AppointmentStatus]) -> PatientStatus {
    if appointments
        .iter()
        .any(|s| *s == AppointmentStatus::InProgress)
    {
        return PatientStatus::InTreatment;
    }
    if appointments
        .iter()
        .any(|s| *s == AppointmentStatus::Scheduled)
    {
        return PatientStatus::Scheduled;
    }
    if appointments
        .iter()
        .any(|s| *s == AppointmentStatus::Completed)
    {
        return PatientStatus::Completed;
    }
    PatientStatus::New
}

/// A persisted appointment row, as exchanged with the data store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppointmentRecord {
    /// Unique appointment ID
    pub id: String,
    /// Calendar date, ISO "YYYY-MM-DD"
    pub date: String,
    /// Start time, "HH:MM"
    pub start_time: String,
    /// End time, "HH:MM" (start + therapy duration)
    pub end_time: String,
    /// Patient foreign key
    pub patient_id: String,
    /// Therapist foreign key
    pub therapist_id: String,
    /// Therapy foreign key
    pub therapy_id: String,
    /// Room foreign key
    pub room_id: String,
    /// Stored status (always "scheduled" at creation; display status is derived)
    pub status: String,
    /// Free-form notes
    pub notes: Option<String>,
    /// Creation timestamp
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patient_status_precedence() {
        use AppointmentStatus::*;

        assert_eq!(derive_patient_status(&[]), PatientStatus::New);
        assert_eq!(
            derive_patient_status(&[Completed]),
            PatientStatus::Completed
        );
        assert_eq!(
            derive_patient_status(&[Completed, Scheduled]),
            PatientStatus::Scheduled
        );
        assert_eq!(
            derive_patient_status(&[Completed, Scheduled, InProgress]),
            PatientStatus::InTreatment
        );
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(AppointmentStatus::InProgress.label(), "In Progress");
        assert_eq!(PatientStatus::InTreatment.label(), "In Treatment");
    }
}
