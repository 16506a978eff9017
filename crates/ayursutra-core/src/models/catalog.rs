//! Therapy, therapist, and room catalog models.

use serde::{Deserialize, Serialize};

use super::Gender;

/// A therapy offered by the center.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Therapy {
    /// Unique therapy ID
    pub id: String,
    /// Therapy name (e.g., "Abhyanga")
    pub name: String,
    /// Session duration in minutes
    pub duration_minutes: u32,
    /// Base cost per session
    pub base_cost: f64,
    /// Whether the therapist's gender must match the patient's
    pub gender_restriction: bool,
    /// Optional description
    pub description: Option<String>,
    /// Creation timestamp
    pub created_at: String,
}

impl Therapy {
    /// Create a new therapy with required fields.
    pub fn new(name: String, duration_minutes: u32, base_cost: f64) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            duration_minutes,
            base_cost,
            gender_restriction: false,
            description: None,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Mark this therapy as requiring a same-gender therapist.
    pub fn gender_restricted(mut self) -> Self {
        self.gender_restriction = true;
        self
    }
}

/// A therapist on staff.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Therapist {
    /// Unique therapist ID
    pub id: String,
    /// Full name
    pub name: String,
    /// Gender (checked against patients for restricted therapies)
    pub gender: Gender,
    /// Specialization (e.g., "Panchakarma")
    pub specialization: Option<String>,
    /// Whether the therapist is currently taking appointments
    pub is_active: bool,
    /// Creation timestamp
    pub created_at: String,
}

impl Therapist {
    /// Create a new active therapist.
    pub fn new(name: String, gender: Gender) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            gender,
            specialization: None,
            is_active: true,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// A treatment room.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Room {
    /// Unique room ID
    pub id: String,
    /// Display number (e.g., "Room 101")
    pub room_number: String,
    /// Room type (e.g., "Therapy", "Consultation")
    pub room_type: String,
    /// Availability status (e.g., "available", "maintenance")
    pub status: String,
    /// Creation timestamp
    pub created_at: String,
}

impl Room {
    /// Create a new available room.
    pub fn new(room_number: String, room_type: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            room_number,
            room_type,
            status: "available".into(),
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}
