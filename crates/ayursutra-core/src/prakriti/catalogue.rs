//! The fixed trait catalogue for Prakriti assessment.
//!
//! 17 clinical categories; each trait option carries exactly one dosha tag.
//! The catalogue is balanced so every dosha has [`TRAITS_PER_DOSHA`] traits
//! in total, which is the denominator for percentage scoring.

use super::Dosha;

/// Identifier of a single trait option within the catalogue.
pub type TraitId = &'static str;

/// One selectable trait, tagged with the dosha it indicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraitOption {
    /// Stable identifier, persisted in assessment responses
    pub id: TraitId,
    /// Wording shown on the assessment form
    pub label: &'static str,
    /// The dosha this trait counts toward
    pub dosha: Dosha,
}

/// An ordered group of trait options under one clinical heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    /// Heading shown on the assessment form
    pub name: &'static str,
    /// Options in display order
    pub options: &'static [TraitOption],
}

/// Fixed per-dosha trait count; the percentage denominator.
pub const TRAITS_PER_DOSHA: u32 = 32;

const fn opt(id: TraitId, label: &'static str, dosha: Dosha) -> TraitOption {
    TraitOption { id, label, dosha }
}

use Dosha::{Kapha, Pitta, Vata};

/// The complete assessment catalogue, in form display order.
pub const CATALOGUE: &[Category] = &[
    Category {
        name: "Body Frame",
        options: &[
            opt("frame-v1", "Thin, lean build", Vata),
            opt("frame-v2", "Prominent joints and tendons", Vata),
            opt("frame-p1", "Medium, proportionate build", Pitta),
            opt("frame-p2", "Moderate muscle development", Pitta),
            opt("frame-k1", "Broad, sturdy build", Kapha),
            opt("frame-k2", "Well-developed body mass", Kapha),
        ],
    },
    Category {
        name: "Body Weight",
        options: &[
            opt("weight-v1", "Low weight, hard to gain", Vata),
            opt("weight-v2", "Loses weight easily", Vata),
            opt("weight-p1", "Moderate, stable weight", Pitta),
            opt("weight-p2", "Gains and loses evenly", Pitta),
            opt("weight-k1", "Gains weight easily", Kapha),
            opt("weight-k2", "Difficult to lose weight", Kapha),
        ],
    },
    Category {
        name: "Skin",
        options: &[
            opt("skin-v1", "Dry, rough skin", Vata),
            opt("skin-v2", "Cool to touch, cracks easily", Vata),
            opt("skin-p1", "Warm, slightly oily skin", Pitta),
            opt("skin-p2", "Prone to rashes and moles", Pitta),
            opt("skin-k1", "Thick, smooth skin", Kapha),
            opt("skin-k2", "Soft, moist and pale", Kapha),
        ],
    },
    Category {
        name: "Hair",
        options: &[
            opt("hair-v1", "Dry, frizzy hair", Vata),
            opt("hair-v2", "Brittle, prone to split ends", Vata),
            opt("hair-p1", "Fine, soft hair", Pitta),
            opt("hair-p2", "Early greying or thinning", Pitta),
            opt("hair-k1", "Thick, oily hair", Kapha),
            opt("hair-k2", "Lustrous, wavy hair", Kapha),
        ],
    },
    Category {
        name: "Eyes",
        options: &[
            opt("eyes-v1", "Small, dry eyes", Vata),
            opt("eyes-v2", "Restless, darting gaze", Vata),
            opt("eyes-p1", "Sharp, penetrating eyes", Pitta),
            opt("eyes-p2", "Light-sensitive, redden easily", Pitta),
            opt("eyes-k1", "Large, moist eyes", Kapha),
            opt("eyes-k2", "Calm, steady gaze", Kapha),
        ],
    },
    Category {
        name: "Appetite",
        options: &[
            opt("appetite-v1", "Irregular, variable appetite", Vata),
            opt("appetite-v2", "Forgets meals when busy", Vata),
            opt("appetite-p1", "Strong, sharp appetite", Pitta),
            opt("appetite-p2", "Irritable when meals are delayed", Pitta),
            opt("appetite-k1", "Mild, steady appetite", Kapha),
            opt("appetite-k2", "Comfortably skips meals", Kapha),
        ],
    },
    Category {
        name: "Digestion",
        options: &[
            opt("digestion-v1", "Prone to gas and bloating", Vata),
            opt("digestion-v2", "Irregular bowel habit", Vata),
            opt("digestion-p1", "Fast digestion, prone to acidity", Pitta),
            opt("digestion-p2", "Loose stools when aggravated", Pitta),
            opt("digestion-k1", "Slow, heavy digestion", Kapha),
            opt("digestion-k2", "Feels heavy after meals", Kapha),
        ],
    },
    Category {
        name: "Thirst",
        options: &[
            opt("thirst-v1", "Variable, often forgets to drink", Vata),
            opt("thirst-p1", "Excessive thirst", Pitta),
            opt("thirst-k1", "Rarely feels thirsty", Kapha),
        ],
    },
    Category {
        name: "Sleep",
        options: &[
            opt("sleep-v1", "Light, easily broken sleep", Vata),
            opt("sleep-v2", "Difficulty falling asleep", Vata),
            opt("sleep-p1", "Moderate, sound sleep", Pitta),
            opt("sleep-p2", "Wakes alert and refreshed", Pitta),
            opt("sleep-k1", "Deep, prolonged sleep", Kapha),
            opt("sleep-k2", "Hard to wake in the morning", Kapha),
        ],
    },
    Category {
        name: "Dreams",
        options: &[
            opt("dreams-v1", "Flying, running, restless dreams", Vata),
            opt("dreams-p1", "Vivid, fiery, intense dreams", Pitta),
            opt("dreams-k1", "Calm, watery, gentle dreams", Kapha),
        ],
    },
    Category {
        name: "Speech",
        options: &[
            opt("speech-v1", "Fast, talkative speech", Vata),
            opt("speech-v2", "Jumps between topics", Vata),
            opt("speech-p1", "Sharp, precise, convincing", Pitta),
            opt("speech-p2", "Cutting or sarcastic under stress", Pitta),
            opt("speech-k1", "Slow, measured speech", Kapha),
            opt("speech-k2", "Speaks little but thoughtfully", Kapha),
        ],
    },
    Category {
        name: "Memory",
        options: &[
            opt("memory-v1", "Learns quickly, forgets quickly", Vata),
            opt("memory-v2", "Short attention span", Vata),
            opt("memory-p1", "Sharp, selective memory", Pitta),
            opt("memory-p2", "Remembers details that matter", Pitta),
            opt("memory-k1", "Learns slowly, retains long", Kapha),
            opt("memory-k2", "Rarely forgets a face", Kapha),
        ],
    },
    Category {
        name: "Mental State",
        options: &[
            opt("mind-v1", "Restless, creative mind", Vata),
            opt("mind-v2", "Imaginative, many parallel ideas", Vata),
            opt("mind-p1", "Focused, ambitious mind", Pitta),
            opt("mind-p2", "Competitive, goal-driven", Pitta),
            opt("mind-k1", "Calm, methodical mind", Kapha),
            opt("mind-k2", "Content, steady temperament", Kapha),
        ],
    },
    Category {
        name: "Emotional Response",
        options: &[
            opt("emotion-v1", "Anxiety or worry under stress", Vata),
            opt("emotion-v2", "Fearful when insecure", Vata),
            opt("emotion-p1", "Anger or irritability under stress", Pitta),
            opt("emotion-p2", "Impatient with obstacles", Pitta),
            opt("emotion-k1", "Withdrawal under stress", Kapha),
            opt("emotion-k2", "Strong attachment, slow to let go", Kapha),
        ],
    },
    Category {
        name: "Physical Activity",
        options: &[
            opt("activity-v1", "Quick, erratic movements", Vata),
            opt("activity-v2", "Bursts of energy, tires quickly", Vata),
            opt("activity-p1", "Purposeful, brisk movements", Pitta),
            opt("activity-p2", "Good stamina when motivated", Pitta),
            opt("activity-k1", "Slow, deliberate movements", Kapha),
            opt("activity-k2", "Excellent sustained endurance", Kapha),
        ],
    },
    Category {
        name: "Climate Preference",
        options: &[
            opt("climate-v1", "Prefers warm, humid weather", Vata),
            opt("climate-v2", "Dislikes cold and wind", Vata),
            opt("climate-p1", "Prefers cool, ventilated places", Pitta),
            opt("climate-p2", "Dislikes heat and direct sun", Pitta),
            opt("climate-k1", "Prefers warm, dry weather", Kapha),
            opt("climate-k2", "Dislikes damp and cold", Kapha),
        ],
    },
    Category {
        name: "Perspiration",
        options: &[
            opt("sweat-v1", "Scanty perspiration", Vata),
            opt("sweat-v2", "Little body odour", Vata),
            opt("sweat-p1", "Profuse perspiration", Pitta),
            opt("sweat-p2", "Strong body odour", Pitta),
            opt("sweat-k1", "Moderate, cold perspiration", Kapha),
            opt("sweat-k2", "Sweats with little exertion", Kapha),
        ],
    },
];

/// Look up a trait option by id.
pub fn find_trait(id: &str) -> Option<&'static TraitOption> {
    CATALOGUE
        .iter()
        .flat_map(|c| c.options.iter())
        .find(|o| o.id == id)
}

/// Count the catalogue's traits for one dosha.
pub fn dosha_total(dosha: Dosha) -> u32 {
    CATALOGUE
        .iter()
        .flat_map(|c| c.options.iter())
        .filter(|o| o.dosha == dosha)
        .count() as u32
}
