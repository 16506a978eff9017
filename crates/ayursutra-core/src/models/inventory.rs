//! Inventory models and stock-health thresholds.

use serde::{Deserialize, Serialize};

/// Display bands for stock levels on the inventory screen.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum StockHealth {
    Critical,
    Low,
    Moderate,
    Good,
}

impl StockHealth {
    /// Band label shown next to the stock bar.
    pub fn label(&self) -> &'static str {
        match self {
            StockHealth::Critical => "Critical",
            StockHealth::Low => "Low",
            StockHealth::Moderate => "Moderate",
            StockHealth::Good => "Good",
        }
    }
}

/// A stocked item: medicines, oils, and supplies.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InventoryItem {
    /// Unique item ID
    pub id: String,
    /// Item name (e.g., "Dhanwantaram Tailam")
    pub item_name: String,
    /// Category (e.g., "Tailam", "Churna", "Kashayam")
    pub category: String,
    /// Current quantity on hand
    pub quantity: f64,
    /// Unit of measure (e.g., "liters", "kg")
    pub unit: String,
    /// Threshold below which the item appears in the low-stock alert list
    pub min_stock_level: f64,
    /// Purchase cost per unit
    pub cost_per_unit: Option<f64>,
    /// Supplier name
    pub supplier: Option<String>,
    /// Last restock timestamp
    pub last_restocked_at: Option<String>,
    /// Creation timestamp
    pub created_at: String,
    /// Last update timestamp
    pub updated_at: String,
}

impl InventoryItem {
    /// Create a new inventory item with required fields.
    pub fn new(item_name: String, category: String, quantity: f64, unit: String) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            item_name,
            category,
            quantity,
            unit,
            min_stock_level: 15.0,
            cost_per_unit: None,
            supplier: None,
            last_restocked_at: None,
            created_at: now.clone(),
            updated_at: now,
        }
    }

    /// Whether this item belongs in the low-stock alert list.
    pub fn is_low_stock(&self) -> bool {
        self.quantity < self.min_stock_level
    }

    /// Display band for the stock bar: <10 Critical, <25 Low, <50 Moderate,
    /// else Good.
    pub fn stock_health(&self) -> StockHealth {
        if self.quantity < 10.0 {
            StockHealth::Critical
        } else if self.quantity < 25.0 {
            StockHealth::Low
        } else if self.quantity < 50.0 {
            StockHealth::Moderate
        } else {
            StockHealth::Good
        }
    }

    /// Record a restock: add to quantity and stamp the restock time.
    pub fn restock(&mut self, added: f64) {
        let now = chrono::Utc::now().to_rfc3339();
        self.quantity += added;
        self.last_restocked_at = Some(now.clone());
        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_low_stock_threshold() {
        let mut item = InventoryItem::new("Triphala Churna".into(), "Churna".into(), 8.0, "kg".into());
        item.min_stock_level = 15.0;
        assert!(item.is_low_stock());

        item.quantity = 45.0;
        assert!(!item.is_low_stock());

        // Exactly at the threshold is not low
        item.quantity = 15.0;
        assert!(!item.is_low_stock());
    }

    #[test]
    fn test_stock_health_bands() {
        let mut item = InventoryItem::new("Ksheerabala Tailam".into(), "Tailam".into(), 8.0, "liters".into());
        assert_eq!(item.stock_health(), StockHealth::Critical);

        item.quantity = 12.0;
        assert_eq!(item.stock_health(), StockHealth::Low);

        item.quantity = 28.0;
        assert_eq!(item.stock_health(), StockHealth::Moderate);

        item.quantity = 72.0;
        assert_eq!(item.stock_health(), StockHealth::Good);
    }

    #[test]
    fn test_restock_updates_quantity_and_timestamp() {
        let mut item = InventoryItem::new("Brahmi Gulika".into(), "Gulika".into(), 10.0, "bottles".into());
        assert!(item.last_restocked_at.is_none());

        item.restock(20.0);
        assert_eq!(item.quantity, 30.0);
        assert!(item.last_restocked_at.is_some());
    }
}
