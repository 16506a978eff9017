//! Conflict detection for proposed therapy sessions.
//!
//! Rules are evaluated in fixed priority order, first match wins:
//! gender restriction, then room collision, then therapist collision.
//! Collisions key on exact (day, start time) equality only; overlapping but
//! distinct start times are deliberately not flagged, and patients are never
//! checked for double-booking.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::Gender;

use super::SlotTime;

/// The therapy fields the checker needs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TherapySlot {
    pub name: String,
    pub duration_minutes: u32,
    pub gender_restricted: bool,
}

/// A named participant with the gender the rules compare.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PersonRef {
    pub name: String,
    pub gender: Gender,
}

/// A proposed session, before any checks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionRequest {
    /// Day-of-week index on the weekly grid (0 = Monday)
    pub day: u8,
    /// Proposed start time
    pub start: SlotTime,
    pub therapy: TherapySlot,
    pub patient: PersonRef,
    pub therapist: PersonRef,
    /// Room display name (e.g., "Room 101")
    pub room: String,
}

/// A committed session on the weekly grid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookedSession {
    pub day: u8,
    pub start: SlotTime,
    /// start + therapy duration
    pub end: SlotTime,
    pub therapy: TherapySlot,
    pub patient: PersonRef,
    pub therapist: PersonRef,
    pub room: String,
}

impl SessionRequest {
    /// Commit the request, computing the end time from the therapy duration.
    pub fn into_booked(self) -> BookedSession {
        let end = self.start.plus_minutes(self.therapy.duration_minutes);
        BookedSession {
            day: self.day,
            start: self.start,
            end,
            therapy: self.therapy,
            patient: self.patient,
            therapist: self.therapist,
            room: self.room,
        }
    }
}

/// Why a proposed session cannot be booked, with the human-readable reason
/// surfaced to the user.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Conflict {
    #[error("{therapy} requires same-gender therapist. Please assign a {} therapist.", .required.lowercase())]
    GenderRestriction { therapy: String, required: Gender },

    #[error("{room} is already booked at this time.")]
    RoomBooked { room: String },

    #[error("{therapist} is already scheduled at this time.")]
    TherapistBooked { therapist: String },
}

/// Check a proposed session against the committed sessions.
///
/// Returns the first conflict in priority order, or `None` when the slot is
/// free and the assignment is valid.
pub fn check_conflict(proposed: &SessionRequest, existing: &[BookedSession]) -> Option<Conflict> {
    if proposed.therapy.gender_restricted && proposed.patient.gender != proposed.therapist.gender {
        return Some(Conflict::GenderRestriction {
            therapy: proposed.therapy.name.clone(),
            required: proposed.patient.gender,
        });
    }

    if existing
        .iter()
        .any(|s| s.day == proposed.day && s.start == proposed.start && s.room == proposed.room)
    {
        return Some(Conflict::RoomBooked {
            room: proposed.room.clone(),
        });
    }

    if existing.iter().any(|s| {
        s.day == proposed.day && s.start == proposed.start && s.therapist.name == proposed.therapist.name
    }) {
        return Some(Conflict::TherapistBooked {
            therapist: proposed.therapist.name.clone(),
        });
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn therapy(name: &str, duration: u32, restricted: bool) -> TherapySlot {
        TherapySlot {
            name: name.into(),
            duration_minutes: duration,
            gender_restricted: restricted,
        }
    }

    fn person(name: &str, gender: Gender) -> PersonRef {
        PersonRef {
            name: name.into(),
            gender,
        }
    }

    fn request(day: u8, start: &str, room: &str) -> SessionRequest {
        SessionRequest {
            day,
            start: start.parse().unwrap(),
            therapy: therapy("Shirodhara", 45, false),
            patient: person("Priya Sharma", Gender::Female),
            therapist: person("Dr. Meera", Gender::Female),
            room: room.into(),
        }
    }

    fn booked(day: u8, start: &str, therapist: &str, room: &str) -> BookedSession {
        SessionRequest {
            day,
            start: start.parse().unwrap(),
            therapy: therapy("Abhyanga", 60, true),
            patient: person("Rajesh Kumar", Gender::Male),
            therapist: person(therapist, Gender::Male),
            room: room.into(),
        }
        .into_booked()
    }

    #[test]
    fn test_no_conflict_on_free_slot() {
        let existing = vec![booked(0, "09:00", "Dr. Anil", "Room 101")];
        let proposed = request(0, "10:30", "Room 102");
        assert_eq!(check_conflict(&proposed, &existing), None);
    }

    #[test]
    fn test_gender_restriction_names_therapy_and_required_gender() {
        let mut proposed = request(0, "09:00", "Room 102");
        proposed.therapy = therapy("Abhyanga", 60, true);
        proposed.therapist = person("Dr. Anil", Gender::Male);

        let conflict = check_conflict(&proposed, &[]).unwrap();
        assert_eq!(
            conflict.to_string(),
            "Abhyanga requires same-gender therapist. Please assign a female therapist."
        );
    }

    #[test]
    fn test_room_collision_names_room() {
        let existing = vec![booked(0, "09:00", "Dr. Anil", "Room 101")];
        let proposed = request(0, "09:00", "Room 101");

        let conflict = check_conflict(&proposed, &existing).unwrap();
        assert_eq!(conflict.to_string(), "Room 101 is already booked at this time.");
    }

    #[test]
    fn test_therapist_collision_names_therapist() {
        let existing = vec![booked(0, "09:00", "Dr. Meera", "Room 101")];
        let mut proposed = request(0, "09:00", "Room 102");
        proposed.therapist = person("Dr. Meera", Gender::Female);

        let conflict = check_conflict(&proposed, &existing).unwrap();
        assert_eq!(
            conflict.to_string(),
            "Dr. Meera is already scheduled at this time."
        );
    }

    #[test]
    fn test_gender_rule_short_circuits_room_collision() {
        // Violates both the gender restriction and the room booking; the
        // gender reason must win.
        let existing = vec![booked(0, "09:00", "Dr. Anil", "Room 101")];
        let mut proposed = request(0, "09:00", "Room 101");
        proposed.therapy = therapy("Basti", 90, true);
        proposed.therapist = person("Dr. Rajan", Gender::Male);

        let conflict = check_conflict(&proposed, &existing).unwrap();
        assert!(matches!(conflict, Conflict::GenderRestriction { .. }));
    }

    #[test]
    fn test_overlapping_but_distinct_starts_do_not_conflict() {
        // 09:00-10:00 already in Room 101; a 09:30 start in the same room
        // overlaps in wall-clock terms but is keyed differently, so it books.
        let existing = vec![booked(0, "09:00", "Dr. Anil", "Room 101")];
        let proposed = request(0, "09:30", "Room 101");
        assert_eq!(check_conflict(&proposed, &existing), None);
    }

    #[test]
    fn test_same_time_different_day_is_free() {
        let existing = vec![booked(0, "09:00", "Dr. Anil", "Room 101")];
        let proposed = request(1, "09:00", "Room 101");
        assert_eq!(check_conflict(&proposed, &existing), None);
    }

    #[test]
    fn test_end_time_computed_with_rollover() {
        let session = SessionRequest {
            day: 1,
            start: "14:00".parse().unwrap(),
            therapy: therapy("Basti", 90, true),
            patient: person("Amit Verma", Gender::Male),
            therapist: person("Dr. Rajan", Gender::Male),
            room: "Room 103".into(),
        }
        .into_booked();
        assert_eq!(session.end.to_string(), "15:30");
    }
}
