//! Treatment journey and vitals database operations.

use rusqlite::{params, Row};

use super::{Database, DbResult};
use crate::models::{JourneyDay, VitalsRecord};

fn journey_from_row(row: &Row<'_>) -> rusqlite::Result<JourneyDay> {
    Ok(JourneyDay {
        id: row.get(0)?,
        patient_id: row.get(1)?,
        day_number: row.get(2)?,
        therapy_id: row.get(3)?,
        session_completed: row.get(4)?,
        prescribed_diet: row.get(5)?,
        notes: row.get(6)?,
        completed_at: row.get(7)?,
        created_at: row.get(8)?,
    })
}

fn vitals_from_row(row: &Row<'_>) -> rusqlite::Result<VitalsRecord> {
    Ok(VitalsRecord {
        id: row.get(0)?,
        patient_id: row.get(1)?,
        day_number: row.get(2)?,
        pulse: row.get(3)?,
        bp_systolic: row.get(4)?,
        bp_diastolic: row.get(5)?,
        appetite: row.get(6)?,
        notes: row.get(7)?,
        recorded_at: row.get(8)?,
    })
}

impl Database {
    /// Add or update a treatment journey day.
    pub fn upsert_journey_day(&self, day: &JourneyDay) -> DbResult<()> {
        self.conn.execute(
            r#"
            INSERT INTO treatment_journey (
                id, patient_id, day_number, therapy_id, session_completed,
                prescribed_diet, notes, completed_at, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            ON CONFLICT(id) DO UPDATE SET
                therapy_id = excluded.therapy_id,
                session_completed = excluded.session_completed,
                prescribed_diet = excluded.prescribed_diet,
                notes = excluded.notes,
                completed_at = excluded.completed_at
            "#,
            params![
                day.id,
                day.patient_id,
                day.day_number,
                day.therapy_id,
                day.session_completed,
                day.prescribed_diet,
                day.notes,
                day.completed_at,
                day.created_at,
            ],
        )?;
        Ok(())
    }

    /// A patient's journey days in course order.
    pub fn journey_for_patient(&self, patient_id: &str) -> DbResult<Vec<JourneyDay>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, patient_id, day_number, therapy_id, session_completed,
                    prescribed_diet, notes, completed_at, created_at
             FROM treatment_journey WHERE patient_id = ? ORDER BY day_number",
        )?;
        let days = stmt
            .query_map([patient_id], journey_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(days)
    }

    /// Record a vitals reading.
    pub fn insert_vitals(&self, vitals: &VitalsRecord) -> DbResult<()> {
        self.conn.execute(
            r#"
            INSERT INTO vitals (
                id, patient_id, day_number, pulse, bp_systolic,
                bp_diastolic, appetite, notes, recorded_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            "#,
            params![
                vitals.id,
                vitals.patient_id,
                vitals.day_number,
                vitals.pulse,
                vitals.bp_systolic,
                vitals.bp_diastolic,
                vitals.appetite,
                vitals.notes,
                vitals.recorded_at,
            ],
        )?;
        Ok(())
    }

    /// A patient's vitals readings in course order.
    pub fn vitals_for_patient(&self, patient_id: &str) -> DbResult<Vec<VitalsRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, patient_id, day_number, pulse, bp_systolic,
                    bp_diastolic, appetite, notes, recorded_at
             FROM vitals WHERE patient_id = ? ORDER BY day_number, recorded_at",
        )?;
        let records = stmt
            .query_map([patient_id], vitals_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Gender, Patient, PatientDraft};

    fn seed_patient(db: &Database) -> Patient {
        let patient = PatientDraft {
            name: "Meera Nair".into(),
            age: Some(52),
            gender: Some(Gender::Female),
            contact: "9812345678".into(),
            ..Default::default()
        }
        .into_patient()
        .unwrap();
        db.insert_patient(&patient).unwrap();
        patient
    }

    #[test]
    fn test_journey_ordered_by_day() {
        let db = Database::open_in_memory().unwrap();
        let patient = seed_patient(&db);

        for n in [3u32, 1, 2] {
            let day = JourneyDay::new(patient.id.clone(), n);
            db.upsert_journey_day(&day).unwrap();
        }

        let days = db.journey_for_patient(&patient.id).unwrap();
        let numbers: Vec<u32> = days.iter().map(|d| d.day_number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_upsert_marks_session_complete() {
        let db = Database::open_in_memory().unwrap();
        let patient = seed_patient(&db);

        let mut day = JourneyDay::new(patient.id.clone(), 1);
        db.upsert_journey_day(&day).unwrap();

        day.complete();
        db.upsert_journey_day(&day).unwrap();

        let days = db.journey_for_patient(&patient.id).unwrap();
        assert_eq!(days.len(), 1);
        assert!(days[0].session_completed);
        assert!(days[0].completed_at.is_some());
    }

    #[test]
    fn test_vitals_roundtrip() {
        let db = Database::open_in_memory().unwrap();
        let patient = seed_patient(&db);

        let mut vitals = VitalsRecord::new(patient.id.clone(), 2);
        vitals.pulse = Some(72);
        vitals.bp_systolic = Some(120);
        vitals.bp_diastolic = Some(80);
        vitals.appetite = Some("good".into());
        db.insert_vitals(&vitals).unwrap();

        let records = db.vitals_for_patient(&patient.id).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].pulse, Some(72));
        assert_eq!(records[0].appetite.as_deref(), Some("good"));
    }
}
