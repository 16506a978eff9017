//! Prakriti assessment records.

use serde::{Deserialize, Serialize};

/// A persisted Prakriti assessment: three dosha percentages plus the raw
/// trait selection it was scored from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PrakritiAssessment {
    /// Unique assessment ID
    pub id: String,
    /// Patient foreign key
    pub patient_id: String,
    /// Vata percentage (0-100)
    pub vata_score: u8,
    /// Pitta percentage (0-100)
    pub pitta_score: u8,
    /// Kapha percentage (0-100)
    pub kapha_score: u8,
    /// Raw selection payload: the trait ids that were ticked
    pub responses: Vec<String>,
    /// Assessment timestamp
    pub assessment_date: String,
}

impl PrakritiAssessment {
    /// Create an assessment record from a scored selection.
    pub fn new(patient_id: String, vata: u8, pitta: u8, kapha: u8, responses: Vec<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            patient_id,
            vata_score: vata,
            pitta_score: pitta,
            kapha_score: kapha,
            responses,
            assessment_date: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_assessment() {
        let a = PrakritiAssessment::new("p1".into(), 55, 30, 15, vec!["frame-v1".into()]);
        assert_eq!(a.patient_id, "p1");
        assert_eq!(a.vata_score, 55);
        assert_eq!(a.responses.len(), 1);
        assert_eq!(a.id.len(), 36);
    }
}
