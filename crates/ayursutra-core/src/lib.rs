//! AyurSutra Core Library
//!
//! Management core for a Panchakarma treatment center: patient registry,
//! Prakriti (constitution) assessment, therapy scheduling with conflict
//! rules, inventory, and discharge summaries.
//!
//! # Architecture
//!
//! ```text
//! Registration form ──validate──▶ patients
//!                                    │
//! Trait checklist ──score/classify──▶ prakriti_assessments
//!                                    │
//! Booking request ──conflict check──▶ appointments ──▶ daily board
//!                                    │
//!                     treatment_journey / vitals ──▶ discharge summary
//! ```
//!
//! # Modules
//!
//! - [`db`]: SQLite database layer
//! - [`models`]: Domain types (Patient, Therapy, AppointmentRecord, etc.)
//! - [`prakriti`]: Trait catalogue, dosha scoring, and classification
//! - [`scheduling`]: Slot grid, conflict rules, and the daily board
//! - [`matching`]: Fuzzy inventory name matching for restocking
//! - [`export`]: Discharge summary export

pub mod db;
pub mod export;
pub mod matching;
pub mod models;
pub mod prakriti;
pub mod scheduling;

// Re-export commonly used types
pub use db::Database;
pub use export::DischargeSummary;
pub use models::{
    AppointmentRecord, AppointmentStatus, FieldError, Gender, InventoryItem, JourneyDay, Patient,
    PatientDraft, PatientStatus, PrakritiAssessment, Room, Therapist, Therapy, VitalsRecord,
};
pub use prakriti::{classify, score, Classification, Dosha, DoshaScores};
pub use scheduling::{
    check_conflict, BookedSession, Conflict, DailyBoard, PersonRef, ScheduleBook, SessionRequest,
    SlotTime, TherapySlot,
};

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use models::derive_patient_status;
use scheduling::{status_at, ParseTimeError};

// =========================================================================
// Error Type
// =========================================================================

#[derive(Debug, thiserror::Error)]
pub enum ClinicError {
    #[error("Database error: {0}")]
    Database(#[from] db::DbError),

    #[error("Validation failed: {}", format_field_errors(.0))]
    Validation(Vec<FieldError>),

    #[error(transparent)]
    Conflict(#[from] Conflict),

    #[error("Invalid time: {0}")]
    Time(#[from] ParseTimeError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Lock poisoned: {0}")]
    Lock(String),
}

fn format_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

impl<T> From<std::sync::PoisonError<T>> for ClinicError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        ClinicError::Lock(e.to_string())
    }
}

// =========================================================================
// Factory Functions
// =========================================================================

/// Open or create a clinic database at the given path.
pub fn open_clinic<P: AsRef<std::path::Path>>(path: P) -> Result<ClinicCore, ClinicError> {
    let db = Database::open(path)?;
    Ok(ClinicCore {
        db: Arc::new(Mutex::new(db)),
    })
}

/// Create a clinic on an in-memory database (for testing).
pub fn open_clinic_in_memory() -> Result<ClinicCore, ClinicError> {
    let db = Database::open_in_memory()?;
    Ok(ClinicCore {
        db: Arc::new(Mutex::new(db)),
    })
}

// =========================================================================
// Booking Request
// =========================================================================

/// A request to book one therapy session.
#[derive(Debug, Clone)]
pub struct BookingRequest {
    /// Calendar date, ISO "YYYY-MM-DD"
    pub date: String,
    /// Start time, "HH:MM"
    pub start_time: String,
    pub patient_id: String,
    pub therapist_id: String,
    pub therapy_id: String,
    pub room_id: String,
    pub notes: Option<String>,
}

/// The result of recording a Prakriti assessment.
#[derive(Debug, Clone)]
pub struct AssessmentOutcome {
    /// The persisted record
    pub assessment: PrakritiAssessment,
    /// Per-dosha percentages
    pub scores: DoshaScores,
    /// Derived constitution
    pub classification: Classification,
}

// =========================================================================
// Main API Object
// =========================================================================

/// Thread-safe clinic API.
///
/// Booking holds the database lock across the conflict check and the insert,
/// so two concurrent requests for the same slot cannot both pass the check.
/// The unique slot indexes in the schema back that up at the storage level.
pub struct ClinicCore {
    db: Arc<Mutex<Database>>,
}

impl ClinicCore {
    // =========================================================================
    // Patient Operations
    // =========================================================================

    /// Validate and register a new patient.
    pub fn register_patient(&self, draft: PatientDraft) -> Result<Patient, ClinicError> {
        let patient = draft.into_patient().map_err(ClinicError::Validation)?;
        let db = self.db.lock()?;
        db.insert_patient(&patient)?;
        Ok(patient)
    }

    /// Get a patient by ID.
    pub fn get_patient(&self, id: &str) -> Result<Option<Patient>, ClinicError> {
        let db = self.db.lock()?;
        Ok(db.get_patient(id)?)
    }

    /// All registered patients, newest first.
    pub fn list_patients(&self) -> Result<Vec<Patient>, ClinicError> {
        let db = self.db.lock()?;
        Ok(db.list_patients()?)
    }

    /// Search patients by name.
    pub fn search_patients(&self, query: &str, limit: usize) -> Result<Vec<Patient>, ClinicError> {
        let db = self.db.lock()?;
        Ok(db.search_patients(query, limit)?)
    }

    /// Overall patient status, derived from their appointments.
    ///
    /// Past dates count as completed and future dates as scheduled; today's
    /// appointments take their status from `now`.
    pub fn patient_status(
        &self,
        patient_id: &str,
        today: &str,
        now: &str,
    ) -> Result<PatientStatus, ClinicError> {
        let now: SlotTime = now.parse()?;
        let db = self.db.lock()?;
        let appointments = db.list_appointments_for_patient(patient_id)?;

        let mut statuses = Vec::with_capacity(appointments.len());
        for record in &appointments {
            // ISO dates compare correctly as strings
            let status = if record.date.as_str() < today {
                AppointmentStatus::Completed
            } else if record.date.as_str() > today {
                AppointmentStatus::Scheduled
            } else {
                status_at(record.start_time.parse()?, record.end_time.parse()?, now)
            };
            statuses.push(status);
        }

        Ok(derive_patient_status(&statuses))
    }

    // =========================================================================
    // Catalog Operations
    // =========================================================================

    /// Add or update a therapy.
    pub fn upsert_therapy(&self, therapy: &Therapy) -> Result<(), ClinicError> {
        let db = self.db.lock()?;
        Ok(db.upsert_therapy(therapy)?)
    }

    /// All therapies offered.
    pub fn list_therapies(&self) -> Result<Vec<Therapy>, ClinicError> {
        let db = self.db.lock()?;
        Ok(db.list_therapies()?)
    }

    /// Add or update a therapist.
    pub fn upsert_therapist(&self, therapist: &Therapist) -> Result<(), ClinicError> {
        let db = self.db.lock()?;
        Ok(db.upsert_therapist(therapist)?)
    }

    /// Therapists currently taking appointments.
    pub fn list_active_therapists(&self) -> Result<Vec<Therapist>, ClinicError> {
        let db = self.db.lock()?;
        Ok(db.list_active_therapists()?)
    }

    /// Add or update a room.
    pub fn upsert_room(&self, room: &Room) -> Result<(), ClinicError> {
        let db = self.db.lock()?;
        Ok(db.upsert_room(room)?)
    }

    /// All treatment rooms.
    pub fn list_rooms(&self) -> Result<Vec<Room>, ClinicError> {
        let db = self.db.lock()?;
        Ok(db.list_rooms()?)
    }

    // =========================================================================
    // Prakriti Assessment Operations
    // =========================================================================

    /// Score a trait selection, classify it, and persist the assessment.
    pub fn record_assessment(
        &self,
        patient_id: &str,
        selected_traits: &[String],
    ) -> Result<AssessmentOutcome, ClinicError> {
        let db = self.db.lock()?;
        db.get_patient(patient_id)?
            .ok_or_else(|| ClinicError::NotFound(format!("patient {patient_id}")))?;

        let selection: HashSet<String> = selected_traits.iter().cloned().collect();
        let scores = score(&selection);
        let classification = classify(&scores);

        let assessment = PrakritiAssessment::new(
            patient_id.to_string(),
            scores.vata,
            scores.pitta,
            scores.kapha,
            selected_traits.to_vec(),
        );
        db.insert_assessment(&assessment)?;

        Ok(AssessmentOutcome {
            assessment,
            scores,
            classification,
        })
    }

    /// The patient's most recent assessment, if any.
    pub fn latest_assessment(
        &self,
        patient_id: &str,
    ) -> Result<Option<PrakritiAssessment>, ClinicError> {
        let db = self.db.lock()?;
        Ok(db.latest_assessment_for(patient_id)?)
    }

    // =========================================================================
    // Scheduling Operations
    // =========================================================================

    /// Book a therapy session, running the conflict rules first.
    ///
    /// On conflict nothing is written and the reason is returned for display.
    pub fn book_appointment(
        &self,
        booking: BookingRequest,
    ) -> Result<AppointmentRecord, ClinicError> {
        let start: SlotTime = booking.start_time.parse()?;
        let db = self.db.lock()?;

        let therapy = db
            .get_therapy(&booking.therapy_id)?
            .ok_or_else(|| ClinicError::NotFound(format!("therapy {}", booking.therapy_id)))?;
        let therapist = db
            .get_therapist(&booking.therapist_id)?
            .ok_or_else(|| ClinicError::NotFound(format!("therapist {}", booking.therapist_id)))?;
        let patient = db
            .get_patient(&booking.patient_id)?
            .ok_or_else(|| ClinicError::NotFound(format!("patient {}", booking.patient_id)))?;
        let room = db
            .get_room(&booking.room_id)?
            .ok_or_else(|| ClinicError::NotFound(format!("room {}", booking.room_id)))?;

        // All sessions under comparison share the booking date, so the grid
        // day index is arbitrary.
        let existing = sessions_for_date(&db, &booking.date)?;
        let request = SessionRequest {
            day: 0,
            start,
            therapy: TherapySlot {
                name: therapy.name.clone(),
                duration_minutes: therapy.duration_minutes,
                gender_restricted: therapy.gender_restriction,
            },
            patient: PersonRef {
                name: patient.name.clone(),
                gender: patient.gender,
            },
            therapist: PersonRef {
                name: therapist.name.clone(),
                gender: therapist.gender,
            },
            room: room.room_number.clone(),
        };

        if let Some(conflict) = check_conflict(&request, &existing) {
            return Err(conflict.into());
        }

        let booked = request.into_booked();
        let record = AppointmentRecord {
            id: uuid::Uuid::new_v4().to_string(),
            date: booking.date,
            start_time: booked.start.to_string(),
            end_time: booked.end.to_string(),
            patient_id: booking.patient_id,
            therapist_id: booking.therapist_id,
            therapy_id: booking.therapy_id,
            room_id: booking.room_id,
            status: "scheduled".to_string(),
            notes: booking.notes,
            created_at: chrono::Utc::now().to_rfc3339(),
        };
        db.insert_appointment(&record)?;
        Ok(record)
    }

    /// Appointments for one date, raw records.
    pub fn appointments_on(&self, date: &str) -> Result<Vec<AppointmentRecord>, ClinicError> {
        let db = self.db.lock()?;
        Ok(db.list_appointments_for_date(date)?)
    }

    /// The daily schedule board for one date, grouped by room with
    /// session statuses derived from `now`.
    pub fn day_schedule(&self, date: &str, now: &str) -> Result<DailyBoard, ClinicError> {
        let now: SlotTime = now.parse()?;
        let db = self.db.lock()?;
        let sessions = sessions_for_date(&db, date)?;
        Ok(DailyBoard::build(&sessions, 0, now))
    }

    /// Sessions occupying one slot on a date, for the slot detail view.
    pub fn slot_sessions(
        &self,
        date: &str,
        start_time: &str,
    ) -> Result<Vec<BookedSession>, ClinicError> {
        let start: SlotTime = start_time.parse()?;
        let db = self.db.lock()?;
        let book = ScheduleBook::with_sessions(sessions_for_date(&db, date)?);
        Ok(book.sessions_for_slot(0, start).into_iter().cloned().collect())
    }

    // =========================================================================
    // Inventory Operations
    // =========================================================================

    /// Add or update an inventory item.
    pub fn upsert_inventory_item(&self, item: &InventoryItem) -> Result<(), ClinicError> {
        let db = self.db.lock()?;
        Ok(db.upsert_inventory_item(item)?)
    }

    /// The full inventory.
    pub fn list_inventory(&self) -> Result<Vec<InventoryItem>, ClinicError> {
        let db = self.db.lock()?;
        Ok(db.list_inventory()?)
    }

    /// Items below their minimum stock level.
    pub fn low_stock_items(&self) -> Result<Vec<InventoryItem>, ClinicError> {
        let db = self.db.lock()?;
        Ok(db.low_stock_items()?)
    }

    /// Restock an item by typed name, fuzzy-matched against the inventory so
    /// spelling variants land on the existing item.
    pub fn restock_item(&self, typed_name: &str, quantity: f64) -> Result<InventoryItem, ClinicError> {
        let db = self.db.lock()?;
        let items = db.list_inventory()?;
        let (matched, _) = matching::best_inventory_match(typed_name, &items)
            .ok_or_else(|| ClinicError::NotFound(format!("inventory item matching {typed_name:?}")))?;

        let mut item = matched.clone();
        item.restock(quantity);
        db.upsert_inventory_item(&item)?;
        Ok(item)
    }

    // =========================================================================
    // Treatment Journey Operations
    // =========================================================================

    /// Record or update a treatment journey day.
    pub fn record_journey_day(&self, day: &JourneyDay) -> Result<(), ClinicError> {
        let db = self.db.lock()?;
        Ok(db.upsert_journey_day(day)?)
    }

    /// A patient's journey days in course order.
    pub fn treatment_journey(&self, patient_id: &str) -> Result<Vec<JourneyDay>, ClinicError> {
        let db = self.db.lock()?;
        Ok(db.journey_for_patient(patient_id)?)
    }

    /// Record a vitals reading.
    pub fn record_vitals(&self, vitals: &VitalsRecord) -> Result<(), ClinicError> {
        let db = self.db.lock()?;
        Ok(db.insert_vitals(vitals)?)
    }

    /// A patient's vitals readings in course order.
    pub fn vitals_for(&self, patient_id: &str) -> Result<Vec<VitalsRecord>, ClinicError> {
        let db = self.db.lock()?;
        Ok(db.vitals_for_patient(patient_id)?)
    }

    // =========================================================================
    // Reporting Accessors
    // =========================================================================

    /// Every appointment on record, chronological, for the analytics charts.
    pub fn all_appointments(&self) -> Result<Vec<AppointmentRecord>, ClinicError> {
        let db = self.db.lock()?;
        Ok(db.list_appointments()?)
    }

    /// Every assessment on record, oldest first, for the analytics charts.
    pub fn all_assessments(&self) -> Result<Vec<PrakritiAssessment>, ClinicError> {
        let db = self.db.lock()?;
        Ok(db.list_assessments()?)
    }

    // =========================================================================
    // Export Operations
    // =========================================================================

    /// Assemble the discharge summary for a patient.
    pub fn discharge_summary(&self, patient_id: &str) -> Result<DischargeSummary, ClinicError> {
        let db = self.db.lock()?;
        let patient = db
            .get_patient(patient_id)?
            .ok_or_else(|| ClinicError::NotFound(format!("patient {patient_id}")))?;
        let assessments = db.list_assessments_for(patient_id)?;
        let journey = db.journey_for_patient(patient_id)?;

        let therapy_names: HashMap<String, String> = db
            .list_therapies()?
            .into_iter()
            .map(|t| (t.id, t.name))
            .collect();

        Ok(DischargeSummary::assemble(
            &patient,
            &assessments,
            &journey,
            |id| therapy_names.get(id).cloned(),
        ))
    }

    /// The discharge summary as pretty JSON.
    pub fn export_discharge_json(&self, patient_id: &str) -> Result<String, ClinicError> {
        let summary = self.discharge_summary(patient_id)?;
        Ok(summary.to_json()?)
    }
}

/// Load one date's appointments as grid sessions (all on day 0), resolving
/// the referenced names the conflict rules compare.
fn sessions_for_date(db: &Database, date: &str) -> Result<Vec<BookedSession>, ClinicError> {
    let records = db.list_appointments_for_date(date)?;

    let therapies: HashMap<String, Therapy> =
        db.list_therapies()?.into_iter().map(|t| (t.id.clone(), t)).collect();
    let rooms: HashMap<String, Room> =
        db.list_rooms()?.into_iter().map(|r| (r.id.clone(), r)).collect();

    let mut sessions = Vec::with_capacity(records.len());
    for record in records {
        let therapy = therapies
            .get(&record.therapy_id)
            .ok_or_else(|| ClinicError::NotFound(format!("therapy {}", record.therapy_id)))?;
        let room = rooms
            .get(&record.room_id)
            .ok_or_else(|| ClinicError::NotFound(format!("room {}", record.room_id)))?;
        let therapist = db
            .get_therapist(&record.therapist_id)?
            .ok_or_else(|| ClinicError::NotFound(format!("therapist {}", record.therapist_id)))?;
        let patient = db
            .get_patient(&record.patient_id)?
            .ok_or_else(|| ClinicError::NotFound(format!("patient {}", record.patient_id)))?;

        sessions.push(BookedSession {
            day: 0,
            start: record.start_time.parse()?,
            end: record.end_time.parse()?,
            therapy: TherapySlot {
                name: therapy.name.clone(),
                duration_minutes: therapy.duration_minutes,
                gender_restricted: therapy.gender_restriction,
            },
            patient: PersonRef {
                name: patient.name.clone(),
                gender: patient.gender,
            },
            therapist: PersonRef {
                name: therapist.name.clone(),
                gender: therapist.gender,
            },
            room: room.room_number.clone(),
        });
    }

    Ok(sessions)
}
