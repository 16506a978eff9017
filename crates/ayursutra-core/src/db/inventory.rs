//! Inventory database operations.

use rusqlite::{params, OptionalExtension, Row};

use super::{Database, DbResult};
use crate::models::InventoryItem;

fn item_from_row(row: &Row<'_>) -> rusqlite::Result<InventoryItem> {
    Ok(InventoryItem {
        id: row.get(0)?,
        item_name: row.get(1)?,
        category: row.get(2)?,
        quantity: row.get(3)?,
        unit: row.get(4)?,
        min_stock_level: row.get(5)?,
        cost_per_unit: row.get(6)?,
        supplier: row.get(7)?,
        last_restocked_at: row.get(8)?,
        created_at: row.get(9)?,
        updated_at: row.get(10)?,
    })
}

const ITEM_COLUMNS: &str = "id, item_name, category, quantity, unit, min_stock_level, \
                            cost_per_unit, supplier, last_restocked_at, created_at, updated_at";

impl Database {
    /// Add or update an inventory item.
    pub fn upsert_inventory_item(&self, item: &InventoryItem) -> DbResult<()> {
        self.conn.execute(
            r#"
            INSERT INTO inventory (
                id, item_name, category, quantity, unit, min_stock_level,
                cost_per_unit, supplier, last_restocked_at, created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
            ON CONFLICT(id) DO UPDATE SET
                item_name = excluded.item_name,
                category = excluded.category,
                quantity = excluded.quantity,
                unit = excluded.unit,
                min_stock_level = excluded.min_stock_level,
                cost_per_unit = excluded.cost_per_unit,
                supplier = excluded.supplier,
                last_restocked_at = excluded.last_restocked_at,
                updated_at = excluded.updated_at
            "#,
            params![
                item.id,
                item.item_name,
                item.category,
                item.quantity,
                item.unit,
                item.min_stock_level,
                item.cost_per_unit,
                item.supplier,
                item.last_restocked_at,
                item.created_at,
                item.updated_at,
            ],
        )?;
        Ok(())
    }

    /// Get an item by ID.
    pub fn get_inventory_item(&self, id: &str) -> DbResult<Option<InventoryItem>> {
        self.conn
            .query_row(
                &format!("SELECT {ITEM_COLUMNS} FROM inventory WHERE id = ?"),
                [id],
                item_from_row,
            )
            .optional()
            .map_err(Into::into)
    }

    /// List the full inventory, alphabetically.
    pub fn list_inventory(&self) -> DbResult<Vec<InventoryItem>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {ITEM_COLUMNS} FROM inventory ORDER BY item_name"
        ))?;
        let items = stmt
            .query_map([], item_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(items)
    }

    /// Items whose quantity has fallen below their minimum stock level.
    pub fn low_stock_items(&self) -> DbResult<Vec<InventoryItem>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {ITEM_COLUMNS} FROM inventory
             WHERE quantity < min_stock_level ORDER BY item_name"
        ))?;
        let items = stmt
            .query_map([], item_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(items)
    }
}
