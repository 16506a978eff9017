//! Discharge summary export.
//!
//! Assembles a printable discharge summary from the patient record, the
//! Prakriti assessment history, and the treatment journey. JSON output for
//! downstream systems, plain text for the printed handout.

use serde::{Deserialize, Serialize};

use crate::models::{JourneyDay, Patient, PrakritiAssessment};
use crate::prakriti::{classify, DoshaScores};

/// One row of the day-wise treatment plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreatmentDayEntry {
    /// Day number within the course (1-based)
    pub day_number: u32,
    /// Therapy performed that day, by name
    pub therapy: Option<String>,
    /// Whether the session was completed
    pub completed: bool,
    /// Diet prescribed for the day
    pub prescribed_diet: Option<String>,
    /// Clinical notes
    pub notes: Option<String>,
}

/// Discharge summary for a completed treatment course.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DischargeSummary {
    /// Patient name
    pub patient_name: String,
    /// Patient ID
    pub patient_id: String,
    /// Age in years
    pub age: u16,
    /// Gender
    pub gender: String,
    /// ABHA ID, if registered
    pub abha_id: Option<String>,
    /// Admission date ("YYYY-MM-DD")
    pub admission_date: Option<String>,
    /// Discharge date ("YYYY-MM-DD")
    pub discharge_date: Option<String>,
    /// Diagnosis at admission
    pub diagnosis: Option<String>,
    /// Treating doctor
    pub doctor: Option<String>,
    /// Prakriti constitution label, from the latest assessment
    pub prakriti: Option<String>,
    /// Dosha percentages at admission (earliest assessment)
    pub initial_dosha_scores: Option<DoshaScores>,
    /// Dosha percentages at discharge (latest assessment)
    pub final_dosha_scores: Option<DoshaScores>,
    /// Day-wise treatment plan
    pub treatment_days: Vec<TreatmentDayEntry>,
    /// Diet advice on discharge
    pub diet_advice: Option<String>,
    /// Follow-up instructions
    pub follow_up: Option<String>,
    /// Generation timestamp
    pub generated_at: String,
}

fn scores_of(assessment: &PrakritiAssessment) -> DoshaScores {
    DoshaScores {
        vata: assessment.vata_score,
        pitta: assessment.pitta_score,
        kapha: assessment.kapha_score,
    }
}

impl DischargeSummary {
    /// Assemble a summary from the patient, their assessment history
    /// (oldest first), and their journey days. Therapy names are resolved by
    /// the caller so the summary stays store-independent.
    pub fn assemble(
        patient: &Patient,
        assessments: &[PrakritiAssessment],
        journey: &[JourneyDay],
        therapy_name: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let initial_dosha_scores = assessments.first().map(scores_of);
        let final_dosha_scores = assessments.last().map(scores_of);
        let prakriti = final_dosha_scores.map(|scores| classify(&scores).label);

        let treatment_days = journey
            .iter()
            .map(|day| TreatmentDayEntry {
                day_number: day.day_number,
                therapy: day.therapy_id.as_deref().and_then(&therapy_name),
                completed: day.session_completed,
                prescribed_diet: day.prescribed_diet.clone(),
                notes: day.notes.clone(),
            })
            .collect();

        Self {
            patient_name: patient.name.clone(),
            patient_id: patient.id.clone(),
            age: patient.age,
            gender: patient.gender.as_str().to_string(),
            abha_id: patient.abha_id.clone(),
            admission_date: None,
            discharge_date: None,
            diagnosis: None,
            doctor: None,
            prakriti,
            initial_dosha_scores,
            final_dosha_scores,
            treatment_days,
            diet_advice: None,
            follow_up: None,
            generated_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Export to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Render as a plain-text printable summary.
    pub fn to_text(&self) -> String {
        let mut out = String::new();

        out.push_str("DISCHARGE SUMMARY\n");
        out.push_str("=================\n\n");

        out.push_str(&format!("Patient:   {}\n", self.patient_name));
        out.push_str(&format!("Age / Sex: {} / {}\n", self.age, self.gender));
        if let Some(abha) = &self.abha_id {
            out.push_str(&format!("ABHA ID:   {abha}\n"));
        }
        if let Some(date) = &self.admission_date {
            out.push_str(&format!("Admitted:  {date}\n"));
        }
        if let Some(date) = &self.discharge_date {
            out.push_str(&format!("Discharged: {date}\n"));
        }
        if let Some(diagnosis) = &self.diagnosis {
            out.push_str(&format!("Diagnosis: {diagnosis}\n"));
        }
        if let Some(doctor) = &self.doctor {
            out.push_str(&format!("Doctor:    {doctor}\n"));
        }

        if let Some(prakriti) = &self.prakriti {
            out.push_str(&format!("\nConstitution: {prakriti}\n"));
        }
        if let Some(scores) = &self.initial_dosha_scores {
            out.push_str(&format!(
                "Initial dosha scores: Vata {}%  Pitta {}%  Kapha {}%\n",
                scores.vata, scores.pitta, scores.kapha,
            ));
        }
        if let Some(scores) = &self.final_dosha_scores {
            out.push_str(&format!(
                "Final dosha scores:   Vata {}%  Pitta {}%  Kapha {}%\n",
                scores.vata, scores.pitta, scores.kapha,
            ));
        }

        if !self.treatment_days.is_empty() {
            out.push_str("\nTreatment plan:\n");
            for day in &self.treatment_days {
                let therapy = day.therapy.as_deref().unwrap_or("Rest day");
                let status = if day.completed { "done" } else { "pending" };
                out.push_str(&format!("  Day {:>2}: {therapy} [{status}]", day.day_number));
                if let Some(diet) = &day.prescribed_diet {
                    out.push_str(&format!("  Diet: {diet}"));
                }
                out.push('\n');
            }
        }

        if let Some(advice) = &self.diet_advice {
            out.push_str(&format!("\nDiet advice: {advice}\n"));
        }
        if let Some(follow_up) = &self.follow_up {
            out.push_str(&format!("Follow-up:  {follow_up}\n"));
        }

        out
    }
}
