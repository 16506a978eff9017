//! The weekly schedule book and the daily board view.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::AppointmentStatus;

use super::{check_conflict, BookedSession, Conflict, SessionRequest, SlotTime};

/// In-memory weekly appointment book.
///
/// Booking is check-then-commit in one synchronous call: the conflict rules
/// run against the committed sessions and the session is appended only when
/// they all pass. The collection only grows; there is no edit or cancel path.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduleBook {
    sessions: Vec<BookedSession>,
}

impl ScheduleBook {
    /// Create an empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a book from already-committed sessions.
    pub fn with_sessions(sessions: Vec<BookedSession>) -> Self {
        Self { sessions }
    }

    /// All committed sessions.
    pub fn sessions(&self) -> &[BookedSession] {
        &self.sessions
    }

    /// Sessions occupying one grid slot (exact day and start time).
    pub fn sessions_for_slot(&self, day: u8, start: SlotTime) -> Vec<&BookedSession> {
        self.sessions
            .iter()
            .filter(|s| s.day == day && s.start == start)
            .collect()
    }

    /// Attempt to book a session. On conflict the book is unchanged and the
    /// reason is returned for display.
    pub fn try_book(&mut self, request: SessionRequest) -> Result<&BookedSession, Conflict> {
        if let Some(conflict) = check_conflict(&request, &self.sessions) {
            return Err(conflict);
        }
        self.sessions.push(request.into_booked());
        Ok(self.sessions.last().unwrap_or_else(|| unreachable!()))
    }
}

/// Derive a session's display status from the current time.
pub fn status_at(start: SlotTime, end: SlotTime, now: SlotTime) -> AppointmentStatus {
    if now >= end {
        AppointmentStatus::Completed
    } else if now >= start {
        AppointmentStatus::InProgress
    } else {
        AppointmentStatus::Scheduled
    }
}

/// One entry on the daily board.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BoardEntry {
    pub start: SlotTime,
    pub end: SlotTime,
    pub therapy: String,
    pub patient: String,
    pub therapist: String,
    pub status: AppointmentStatus,
}

/// The daily schedule, grouped by room with session-status counts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyBoard {
    /// Room name to its sessions, ordered by start time
    pub rooms: BTreeMap<String, Vec<BoardEntry>>,
    pub completed: usize,
    pub in_progress: usize,
    pub upcoming: usize,
}

impl DailyBoard {
    /// Build the board for one day from the committed sessions, deriving each
    /// session's status from `now`.
    pub fn build(sessions: &[BookedSession], day: u8, now: SlotTime) -> Self {
        let mut rooms: BTreeMap<String, Vec<BoardEntry>> = BTreeMap::new();
        let mut completed = 0;
        let mut in_progress = 0;
        let mut upcoming = 0;

        for session in sessions.iter().filter(|s| s.day == day) {
            let status = status_at(session.start, session.end, now);
            match status {
                AppointmentStatus::Completed => completed += 1,
                AppointmentStatus::InProgress => in_progress += 1,
                AppointmentStatus::Scheduled => upcoming += 1,
            }
            rooms.entry(session.room.clone()).or_default().push(BoardEntry {
                start: session.start,
                end: session.end,
                therapy: session.therapy.name.clone(),
                patient: session.patient.name.clone(),
                therapist: session.therapist.name.clone(),
                status,
            });
        }

        for entries in rooms.values_mut() {
            entries.sort_by_key(|e| e.start);
        }

        Self {
            rooms,
            completed,
            in_progress,
            upcoming,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Gender;
    use crate::scheduling::{PersonRef, TherapySlot};

    fn request(day: u8, start: &str, room: &str, therapist: &str) -> SessionRequest {
        SessionRequest {
            day,
            start: start.parse().unwrap(),
            therapy: TherapySlot {
                name: "Shirodhara".into(),
                duration_minutes: 45,
                gender_restricted: false,
            },
            patient: PersonRef {
                name: "Priya Sharma".into(),
                gender: Gender::Female,
            },
            therapist: PersonRef {
                name: therapist.into(),
                gender: Gender::Female,
            },
            room: room.into(),
        }
    }

    #[test]
    fn test_try_book_appends_on_success() {
        let mut book = ScheduleBook::new();
        let session = book.try_book(request(0, "09:00", "Room 101", "Dr. Meera")).unwrap();
        assert_eq!(session.end.to_string(), "09:45");
        assert_eq!(book.sessions().len(), 1);
    }

    #[test]
    fn test_try_book_leaves_book_unchanged_on_conflict() {
        let mut book = ScheduleBook::new();
        book.try_book(request(0, "09:00", "Room 101", "Dr. Meera")).unwrap();

        let err = book
            .try_book(request(0, "09:00", "Room 101", "Dr. Priya"))
            .unwrap_err();
        assert!(matches!(err, Conflict::RoomBooked { .. }));
        assert_eq!(book.sessions().len(), 1);
    }

    #[test]
    fn test_status_at_boundaries() {
        let start: SlotTime = "09:00".parse().unwrap();
        let end: SlotTime = "10:00".parse().unwrap();

        assert_eq!(
            status_at(start, end, "08:59".parse().unwrap()),
            AppointmentStatus::Scheduled
        );
        assert_eq!(
            status_at(start, end, "09:00".parse().unwrap()),
            AppointmentStatus::InProgress
        );
        assert_eq!(
            status_at(start, end, "10:00".parse().unwrap()),
            AppointmentStatus::Completed
        );
    }

    #[test]
    fn test_daily_board_groups_by_room_and_counts() {
        let mut book = ScheduleBook::new();
        book.try_book(request(0, "08:00", "Room 101", "Dr. Meera")).unwrap();
        book.try_book(request(0, "09:30", "Room 101", "Dr. Priya")).unwrap();
        book.try_book(request(0, "11:00", "Room 102", "Dr. Meera")).unwrap();
        // Different day, must not appear
        book.try_book(request(1, "08:00", "Room 101", "Dr. Meera")).unwrap();

        let board = DailyBoard::build(book.sessions(), 0, "09:40".parse().unwrap());
        assert_eq!(board.rooms["Room 101"].len(), 2);
        assert_eq!(board.rooms["Room 102"].len(), 1);
        assert_eq!(board.completed, 1);
        assert_eq!(board.in_progress, 1);
        assert_eq!(board.upcoming, 1);
    }
}
