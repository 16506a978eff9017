//! Patient models and registration validation.

use serde::{Deserialize, Serialize};

/// Patient or therapist gender.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// Canonical display name (as stored and shown).
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }

    /// Lowercase form used in conflict messages ("assign a female therapist").
    pub fn lowercase(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }

    /// Parse the stored form back into the enum.
    pub fn parse(s: &str) -> Option<Gender> {
        match s.trim().to_lowercase().as_str() {
            "male" => Some(Gender::Male),
            "female" => Some(Gender::Female),
            "other" => Some(Gender::Other),
            _ => None,
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A registered patient record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Patient {
    /// Unique patient ID
    pub id: String,
    /// Full name
    pub name: String,
    /// Age in years
    pub age: u16,
    /// Gender
    pub gender: Gender,
    /// 10-digit mobile number
    pub contact: String,
    /// Ayushman Bharat Health Account ID (14 digits)
    pub abha_id: Option<String>,
    /// Blood group (e.g., "O+")
    pub blood_group: Option<String>,
    /// Residential address
    pub address: Option<String>,
    /// Creation timestamp
    pub created_at: String,
    /// Last update timestamp
    pub updated_at: String,
}

/// Unvalidated registration form data, as entered.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatientDraft {
    pub name: String,
    pub age: Option<u16>,
    pub gender: Option<Gender>,
    pub contact: String,
    pub abha_id: Option<String>,
    pub blood_group: Option<String>,
    pub address: Option<String>,
}

/// A single per-field validation failure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldError {
    /// Form field name (e.g., "contact")
    pub field: &'static str,
    /// Human-readable message shown next to the field
    pub message: String,
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl PatientDraft {
    /// Validate all fields, collecting every failure rather than stopping at
    /// the first. An empty Vec means the draft can be submitted.
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(FieldError {
                field: "name",
                message: "Patient name is required".into(),
            });
        }

        match self.age {
            Some(age) if age <= 150 => {}
            _ => errors.push(FieldError {
                field: "age",
                message: "Valid age is required".into(),
            }),
        }

        if self.gender.is_none() {
            errors.push(FieldError {
                field: "gender",
                message: "Gender is required".into(),
            });
        }

        if !is_exact_digits(&self.contact, 10) {
            errors.push(FieldError {
                field: "contact",
                message: "Valid 10-digit mobile number required".into(),
            });
        }

        if let Some(abha) = &self.abha_id {
            if !abha.trim().is_empty() && !is_exact_digits(abha, 14) {
                errors.push(FieldError {
                    field: "abha_id",
                    message: "ABHA ID must be 14 digits".into(),
                });
            }
        }

        errors
    }

    /// Build the patient record from a draft that passed [`validate`].
    ///
    /// Returns the per-field errors unchanged if validation fails.
    ///
    /// [`validate`]: PatientDraft::validate
    pub fn into_patient(self) -> Result<Patient, Vec<FieldError>> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(errors);
        }

        let now = chrono::Utc::now().to_rfc3339();
        Ok(Patient {
            id: uuid::Uuid::new_v4().to_string(),
            name: self.name.trim().to_string(),
            // validate() guarantees both are present
            age: self.age.unwrap_or_default(),
            gender: self.gender.unwrap_or(Gender::Other),
            contact: strip_whitespace(&self.contact),
            abha_id: self
                .abha_id
                .filter(|a| !a.trim().is_empty())
                .map(|a| strip_whitespace(&a)),
            blood_group: self.blood_group.filter(|b| !b.trim().is_empty()),
            address: self.address.filter(|a| !a.trim().is_empty()),
            created_at: now.clone(),
            updated_at: now,
        })
    }
}

/// Check that a field holds exactly `count` ASCII digits once whitespace is
/// removed (the forms allow grouping spaces).
fn is_exact_digits(value: &str, count: usize) -> bool {
    let stripped = strip_whitespace(value);
    stripped.len() == count && stripped.bytes().all(|b| b.is_ascii_digit())
}

fn strip_whitespace(value: &str) -> String {
    value.chars().filter(|c| !c.is_whitespace()).collect()
}
