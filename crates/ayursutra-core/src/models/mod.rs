//! Domain models for the ayursutra system.

mod appointment;
mod assessment;
mod catalog;
mod inventory;
mod journey;
mod patient;

pub use appointment::*;
pub use assessment::*;
pub use catalog::*;
pub use inventory::*;
pub use journey::*;
pub use patient::*;
