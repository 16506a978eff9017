//! Prakriti constitutional assessment.
//!
//! A patient's constitution is expressed as the relative dominance of the
//! three doshas. The assessor ticks observable traits from a fixed catalogue
//! of clinical categories; each trait is tagged with exactly one dosha, and
//! each dosha has the same fixed trait count as its percentage denominator.
//!
//! Pipeline: trait selection → per-dosha percentages → classification label.
//!
//! Both steps are pure functions over immutable inputs; an empty selection is
//! a valid (all-zero) result, not an error.

mod catalogue;
mod scorer;

pub use catalogue::*;
pub use scorer::*;

use serde::{Deserialize, Serialize};

/// One of the three constitutional categories.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Dosha {
    Vata,
    Pitta,
    Kapha,
}

impl Dosha {
    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Dosha::Vata => "Vata",
            Dosha::Pitta => "Pitta",
            Dosha::Kapha => "Kapha",
        }
    }

    /// Short clinical characterization used in classification descriptions.
    pub fn qualities(&self) -> &'static str {
        match self {
            Dosha::Vata => "light, mobile and creative",
            Dosha::Pitta => "sharp, intense and goal-driven",
            Dosha::Kapha => "steady, grounded and calm",
        }
    }

    /// All doshas in the fixed preference order (ties resolve in this order).
    pub const ALL: [Dosha; 3] = [Dosha::Vata, Dosha::Pitta, Dosha::Kapha];
}

impl std::fmt::Display for Dosha {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
