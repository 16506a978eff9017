//! Fuzzy name matching for inventory restocking.
//!
//! Restock entries arrive as free-typed item names ("dhanwantaram thailam",
//! "Triphala churna"). Matching them against the stored inventory keeps typos
//! and spelling variants from creating duplicate items.

use strsim::{jaro_winkler, normalized_levenshtein};

use crate::models::InventoryItem;

/// Minimum combined similarity for a name to count as the same item.
const MATCH_THRESHOLD: f64 = 0.85;

/// Compute fuzzy string similarity using combined metrics.
fn fuzzy_match(a: &str, b: &str) -> f64 {
    // Combine Jaro-Winkler (good for typos) and Levenshtein (good for overall similarity)
    let jw = jaro_winkler(a, b);
    let lev = normalized_levenshtein(a, b);

    // Weight Jaro-Winkler more heavily as it's better for prefix matching
    jw * 0.6 + lev * 0.4
}

/// Similarity between a typed name and a stored item name, case-insensitive.
pub fn name_similarity(query: &str, item_name: &str) -> f64 {
    fuzzy_match(
        query.trim().to_lowercase().as_str(),
        item_name.trim().to_lowercase().as_str(),
    )
}

/// Find the inventory item best matching a typed name.
///
/// Returns the item and its similarity, or `None` when nothing clears the
/// match threshold (the caller should create a new item in that case).
pub fn best_inventory_match<'a>(
    query: &str,
    items: &'a [InventoryItem],
) -> Option<(&'a InventoryItem, f64)> {
    items
        .iter()
        .map(|item| (item, name_similarity(query, &item.item_name)))
        .filter(|(_, score)| *score >= MATCH_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
}
