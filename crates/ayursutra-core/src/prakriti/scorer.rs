//! Scoring and classification of trait selections.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::{dosha_total, find_trait, Dosha};

/// Percentage-point gap below which the top two doshas form a dual
/// constitution.
const DUAL_THRESHOLD: u8 = 10;

/// Per-dosha percentages for one assessment.
///
/// Each dosha is scored against its own trait-count denominator, so the three
/// values are independent and need not sum to 100.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DoshaScores {
    pub vata: u8,
    pub pitta: u8,
    pub kapha: u8,
}

impl DoshaScores {
    /// Percentage for one dosha.
    pub fn get(&self, dosha: Dosha) -> u8 {
        match dosha {
            Dosha::Vata => self.vata,
            Dosha::Pitta => self.pitta,
            Dosha::Kapha => self.kapha,
        }
    }
}

/// The constitution label derived from a score.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Classification {
    /// Display label, e.g. "Pure Vata Prakriti" or "Vata-Pitta Prakriti"
    pub label: String,
    /// Clinical description naming the constitution(s)
    pub description: String,
    /// Dominant dosha
    pub primary: Dosha,
    /// Second dosha when the constitution is dual
    pub secondary: Option<Dosha>,
}

/// Score a trait selection against the catalogue.
///
/// Counts the selected options per dosha and converts each count to a
/// percentage of that dosha's fixed trait total, rounded to the nearest
/// integer (half up). Ids not present in the catalogue are ignored, and the
/// selection is a set, so ordering and duplicate insertions cannot affect the
/// result.
pub fn score(selection: &HashSet<String>) -> DoshaScores {
    let mut counts = [0u32; 3];
    for id in selection {
        if let Some(option) = find_trait(id) {
            match option.dosha {
                Dosha::Vata => counts[0] += 1,
                Dosha::Pitta => counts[1] += 1,
                Dosha::Kapha => counts[2] += 1,
            }
        }
    }

    DoshaScores {
        vata: percentage(counts[0], dosha_total(Dosha::Vata)),
        pitta: percentage(counts[1], dosha_total(Dosha::Pitta)),
        kapha: percentage(counts[2], dosha_total(Dosha::Kapha)),
    }
}

fn percentage(count: u32, total: u32) -> u8 {
    ((100.0 * count as f64) / total as f64).round() as u8
}

/// Classify a score into a constitution label.
///
/// Doshas are ranked by percentage descending; ties keep the fixed preference
/// order Vata, Pitta, Kapha. A gap of less than 10 percentage points between
/// the top two yields a dual constitution; a gap of 10 or more yields a pure
/// one. An all-zero score therefore classifies as "Vata-Pitta Prakriti".
pub fn classify(scores: &DoshaScores) -> Classification {
    let mut ranked = Dosha::ALL;
    // Stable sort preserves the Vata, Pitta, Kapha preference order on ties.
    ranked.sort_by(|a, b| scores.get(*b).cmp(&scores.get(*a)));

    let primary = ranked[0];
    let secondary = ranked[1];
    let gap = scores.get(primary) - scores.get(secondary);

    if gap < DUAL_THRESHOLD {
        Classification {
            label: format!("{}-{} Prakriti", primary.name(), secondary.name()),
            description: format!(
                "Dual constitution combining {} ({}) with {} ({}) in near-equal measure.",
                primary.name(),
                primary.qualities(),
                secondary.name(),
                secondary.qualities()
            ),
            primary,
            secondary: Some(secondary),
        }
    } else {
        Classification {
            label: format!("Pure {} Prakriti", primary.name()),
            description: format!(
                "Single dominant constitution: {} ({}).",
                primary.name(),
                primary.qualities()
            ),
            primary,
            secondary: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prakriti::{CATALOGUE, TRAITS_PER_DOSHA};

    fn selection(ids: &[&str]) -> HashSet<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    /// All trait ids tagged with the given dosha.
    fn ids_for(dosha: Dosha) -> Vec<&'static str> {
        CATALOGUE
            .iter()
            .flat_map(|c| c.options.iter())
            .filter(|o| o.dosha == dosha)
            .map(|o| o.id)
            .collect()
    }

    #[test]
    fn test_empty_selection_scores_zero() {
        let scores = score(&HashSet::new());
        assert_eq!(
            scores,
            DoshaScores {
                vata: 0,
                pitta: 0,
                kapha: 0
            }
        );
    }

    #[test]
    fn test_single_vata_trait_rounds_to_three() {
        // round(100 * 1/32) = 3
        let scores = score(&selection(&["frame-v1"]));
        assert_eq!(scores.vata, 3);
        assert_eq!(scores.pitta, 0);
        assert_eq!(scores.kapha, 0);
    }

    #[test]
    fn test_full_dosha_selection_scores_hundred() {
        let ids = ids_for(Dosha::Kapha);
        assert_eq!(ids.len() as u32, TRAITS_PER_DOSHA);
        let scores = score(&ids.iter().map(|s| s.to_string()).collect());
        assert_eq!(scores.kapha, 100);
        assert_eq!(scores.vata, 0);
    }

    #[test]
    fn test_unknown_ids_are_ignored() {
        let scores = score(&selection(&["frame-v1", "bogus-id"]));
        assert_eq!(scores.vata, 3);
    }

    #[test]
    fn test_tied_score_classifies_vata_pitta() {
        let scores = DoshaScores {
            vata: 0,
            pitta: 0,
            kapha: 0,
        };
        let c = classify(&scores);
        assert_eq!(c.label, "Vata-Pitta Prakriti");
        assert_eq!(c.primary, Dosha::Vata);
        assert_eq!(c.secondary, Some(Dosha::Pitta));
    }

    #[test]
    fn test_dual_threshold_boundary() {
        // gap 9 -> dual
        let dual = classify(&DoshaScores {
            vata: 50,
            pitta: 41,
            kapha: 10,
        });
        assert_eq!(dual.label, "Vata-Pitta Prakriti");

        // gap exactly 10 -> pure
        let pure = classify(&DoshaScores {
            vata: 50,
            pitta: 40,
            kapha: 10,
        });
        assert_eq!(pure.label, "Pure Vata Prakriti");
        assert!(pure.secondary.is_none());

        // gap 11 -> pure
        let wide = classify(&DoshaScores {
            vata: 51,
            pitta: 40,
            kapha: 10,
        });
        assert_eq!(wide.label, "Pure Vata Prakriti");
    }

    #[test]
    fn test_secondary_tie_prefers_earlier_dosha() {
        // Kapha leads; Vata and Pitta tie for second, Vata wins the tie.
        let c = classify(&DoshaScores {
            vata: 45,
            pitta: 45,
            kapha: 50,
        });
        assert_eq!(c.label, "Kapha-Vata Prakriti");
    }

    #[test]
    fn test_description_names_constitutions() {
        let c = classify(&DoshaScores {
            vata: 60,
            pitta: 20,
            kapha: 10,
        });
        assert!(c.description.contains("Vata"));

        let d = classify(&DoshaScores {
            vata: 40,
            pitta: 38,
            kapha: 10,
        });
        assert!(d.description.contains("Vata") && d.description.contains("Pitta"));
    }
}
