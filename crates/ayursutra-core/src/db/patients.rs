//! Patient database operations.

use rusqlite::{params, OptionalExtension, Row};

use super::{Database, DbResult};
use crate::models::Patient;

fn patient_from_row(row: &Row<'_>) -> rusqlite::Result<Patient> {
    Ok(Patient {
        id: row.get(0)?,
        name: row.get(1)?,
        age: row.get(2)?,
        gender: row.get(3)?,
        contact: row.get(4)?,
        abha_id: row.get(5)?,
        blood_group: row.get(6)?,
        address: row.get(7)?,
        created_at: row.get(8)?,
        updated_at: row.get(9)?,
    })
}

const PATIENT_COLUMNS: &str =
    "id, name, age, gender, contact, abha_id, blood_group, address, created_at, updated_at";

impl Database {
    /// Insert a new patient.
    pub fn insert_patient(&self, patient: &Patient) -> DbResult<()> {
        self.conn.execute(
            r#"
            INSERT INTO patients (
                id, name, age, gender, contact, abha_id, blood_group, address,
                created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
            "#,
            params![
                patient.id,
                patient.name,
                patient.age,
                patient.gender,
                patient.contact,
                patient.abha_id,
                patient.blood_group,
                patient.address,
                patient.created_at,
                patient.updated_at,
            ],
        )?;
        Ok(())
    }

    /// Update an existing patient, stamping `updated_at`.
    pub fn update_patient(&self, patient: &Patient) -> DbResult<bool> {
        // RFC3339, like every other timestamp column
        let updated_at = chrono::Utc::now().to_rfc3339();
        let rows_affected = self.conn.execute(
            r#"
            UPDATE patients SET
                name = ?2,
                age = ?3,
                gender = ?4,
                contact = ?5,
                abha_id = ?6,
                blood_group = ?7,
                address = ?8,
                updated_at = ?9
            WHERE id = ?1
            "#,
            params![
                patient.id,
                patient.name,
                patient.age,
                patient.gender,
                patient.contact,
                patient.abha_id,
                patient.blood_group,
                patient.address,
                updated_at,
            ],
        )?;
        Ok(rows_affected > 0)
    }

    /// Get a patient by ID.
    pub fn get_patient(&self, id: &str) -> DbResult<Option<Patient>> {
        self.conn
            .query_row(
                &format!("SELECT {PATIENT_COLUMNS} FROM patients WHERE id = ?"),
                [id],
                patient_from_row,
            )
            .optional()
            .map_err(Into::into)
    }

    /// List all patients, most recently registered first.
    pub fn list_patients(&self) -> DbResult<Vec<Patient>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {PATIENT_COLUMNS} FROM patients ORDER BY created_at DESC"
        ))?;
        let patients = stmt
            .query_map([], patient_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(patients)
    }

    /// Search patients by name substring, case-insensitive.
    pub fn search_patients(&self, query: &str, limit: usize) -> DbResult<Vec<Patient>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {PATIENT_COLUMNS} FROM patients
             WHERE name LIKE '%' || ?1 || '%' COLLATE NOCASE
             ORDER BY name LIMIT ?2"
        ))?;
        let patients = stmt
            .query_map(params![query, limit as i64], patient_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(patients)
    }
}
