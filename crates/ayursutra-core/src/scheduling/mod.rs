//! Therapy scheduling: conflict rules, the weekly book, and board views.
//!
//! Booking is a synchronous check-then-commit: rule evaluation and insertion
//! happen in one call, so the no-double-booking invariant holds as long as a
//! single writer performs both steps (the [`crate::ClinicCore`] facade runs
//! them inside one lock for the persistent path).

mod board;
mod conflict;
mod time;

pub use board::*;
pub use conflict::*;
pub use time::*;
