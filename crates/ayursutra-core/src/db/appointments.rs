//! Appointment database operations.

use rusqlite::{params, Row};

use super::{Database, DbError, DbResult};
use crate::models::AppointmentRecord;

fn appointment_from_row(row: &Row<'_>) -> rusqlite::Result<AppointmentRecord> {
    Ok(AppointmentRecord {
        id: row.get(0)?,
        date: row.get(1)?,
        start_time: row.get(2)?,
        end_time: row.get(3)?,
        patient_id: row.get(4)?,
        therapist_id: row.get(5)?,
        therapy_id: row.get(6)?,
        room_id: row.get(7)?,
        status: row.get(8)?,
        notes: row.get(9)?,
        created_at: row.get(10)?,
    })
}

const APPOINTMENT_COLUMNS: &str = "id, date, start_time, end_time, patient_id, therapist_id, \
                                   therapy_id, room_id, status, notes, created_at";

impl Database {
    /// Insert a committed appointment.
    ///
    /// The unique slot indexes reject a second appointment for the same
    /// (date, start_time, room) or (date, start_time, therapist); that case
    /// is reported as a constraint violation rather than a generic SQLite
    /// error so callers can surface it distinctly.
    pub fn insert_appointment(&self, appointment: &AppointmentRecord) -> DbResult<()> {
        let result = self.conn.execute(
            r#"
            INSERT INTO appointments (
                id, date, start_time, end_time, patient_id, therapist_id,
                therapy_id, room_id, status, notes, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
            "#,
            params![
                appointment.id,
                appointment.date,
                appointment.start_time,
                appointment.end_time,
                appointment.patient_id,
                appointment.therapist_id,
                appointment.therapy_id,
                appointment.room_id,
                appointment.status,
                appointment.notes,
                appointment.created_at,
            ],
        );

        match result {
            Ok(_) => Ok(()),
            Err(rusqlite::Error::SqliteFailure(e, msg))
                if e.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                Err(DbError::Constraint(
                    msg.unwrap_or_else(|| "slot already taken".into()),
                ))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// All appointments on a calendar date, ordered by start time.
    pub fn list_appointments_for_date(&self, date: &str) -> DbResult<Vec<AppointmentRecord>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {APPOINTMENT_COLUMNS} FROM appointments WHERE date = ? ORDER BY start_time"
        ))?;
        let appointments = stmt
            .query_map([date], appointment_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(appointments)
    }

    /// All appointments for one patient, chronological.
    pub fn list_appointments_for_patient(
        &self,
        patient_id: &str,
    ) -> DbResult<Vec<AppointmentRecord>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {APPOINTMENT_COLUMNS} FROM appointments
             WHERE patient_id = ? ORDER BY date, start_time"
        ))?;
        let appointments = stmt
            .query_map([patient_id], appointment_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(appointments)
    }

    /// All appointments, for reporting.
    pub fn list_appointments(&self) -> DbResult<Vec<AppointmentRecord>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {APPOINTMENT_COLUMNS} FROM appointments ORDER BY date, start_time"
        ))?;
        let appointments = stmt
            .query_map([], appointment_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(appointments)
    }
}
