//! Prakriti assessment database operations.
//!
//! The raw trait selection is stored as a JSON array in the `responses`
//! column and round-tripped through serde_json.

use rusqlite::{params, OptionalExtension, Row};

use super::{Database, DbResult};
use crate::models::PrakritiAssessment;

fn assessment_from_row(row: &Row<'_>) -> rusqlite::Result<(PrakritiAssessment, String)> {
    // Raw JSON is returned alongside and parsed by the caller, which can
    // produce a DbError; rusqlite row mappers cannot.
    let raw_responses: String = row.get(5)?;
    Ok((
        PrakritiAssessment {
            id: row.get(0)?,
            patient_id: row.get(1)?,
            vata_score: row.get(2)?,
            pitta_score: row.get(3)?,
            kapha_score: row.get(4)?,
            responses: Vec::new(),
            assessment_date: row.get(6)?,
        },
        raw_responses,
    ))
}

fn attach_responses(
    (mut assessment, raw): (PrakritiAssessment, String),
) -> DbResult<PrakritiAssessment> {
    assessment.responses = serde_json::from_str(&raw)?;
    Ok(assessment)
}

const ASSESSMENT_COLUMNS: &str =
    "id, patient_id, vata_score, pitta_score, kapha_score, responses, assessment_date";

impl Database {
    /// Insert an assessment record.
    pub fn insert_assessment(&self, assessment: &PrakritiAssessment) -> DbResult<()> {
        self.conn.execute(
            r#"
            INSERT INTO prakriti_assessments (
                id, patient_id, vata_score, pitta_score, kapha_score, responses, assessment_date
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
            params![
                assessment.id,
                assessment.patient_id,
                assessment.vata_score,
                assessment.pitta_score,
                assessment.kapha_score,
                serde_json::to_string(&assessment.responses)?,
                assessment.assessment_date,
            ],
        )?;
        Ok(())
    }

    /// Most recent assessment for a patient, if any.
    pub fn latest_assessment_for(&self, patient_id: &str) -> DbResult<Option<PrakritiAssessment>> {
        let row = self
            .conn
            .query_row(
                &format!(
                    "SELECT {ASSESSMENT_COLUMNS} FROM prakriti_assessments
                     WHERE patient_id = ? ORDER BY assessment_date DESC, rowid DESC LIMIT 1"
                ),
                [patient_id],
                assessment_from_row,
            )
            .optional()?;
        row.map(attach_responses).transpose()
    }

    /// All assessments for a patient, oldest first. Ties on the recorded
    /// date fall back to insertion order.
    pub fn list_assessments_for(&self, patient_id: &str) -> DbResult<Vec<PrakritiAssessment>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {ASSESSMENT_COLUMNS} FROM prakriti_assessments
             WHERE patient_id = ? ORDER BY assessment_date, rowid"
        ))?;
        let rows = stmt
            .query_map([patient_id], assessment_from_row)?
            .map(|r| attach_responses(r?))
            .collect();
        rows
    }

    /// All assessments, for reporting.
    pub fn list_assessments(&self) -> DbResult<Vec<PrakritiAssessment>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {ASSESSMENT_COLUMNS} FROM prakriti_assessments ORDER BY assessment_date, rowid"
        ))?;
        let rows = stmt
            .query_map([], assessment_from_row)?
            .map(|r| attach_responses(r?))
            .collect();
        rows
    }
}
