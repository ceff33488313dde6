/// Data access for inventory records
///
/// This module handles:
/// - The `StockStore` trait the report service reads through
/// - Loading an `Inventory` from a TOML or JSON file
/// - An in-memory store over a loaded inventory
use crate::types::{Inventory, Mate, StockRecord, StockType};
use log::debug;
use std::fs;
use std::path::Path;

/// Read access to stock records
pub trait StockStore {
    /// Known stock types: declared ones first, then undeclared ones in the
    /// order records first mention them
    fn stock_types(&self) -> Vec<StockType>;

    /// Known owners, ordered like `stock_types`
    fn mates(&self) -> Vec<Mate>;

    fn find_records_by_type(&self, stock_type: &StockType) -> Vec<StockRecord>;

    fn find_records_by_owner(&self, owner: &Mate) -> Vec<StockRecord>;
}

/// Store backed by an inventory held in memory
#[derive(Debug, Clone, Default)]
pub struct InventoryStore {
    inventory: Inventory,
}

impl InventoryStore {
    pub fn new(inventory: Inventory) -> Self {
        Self { inventory }
    }

    /// Load an inventory file; the format is picked by extension
    /// (`.json`, anything else is read as TOML).
    pub fn load(path: &Path) -> Result<Self, String> {
        debug!("Loading inventory from {:?}", path);
        let text = fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;

        let is_json = path.extension().and_then(|e| e.to_str()).is_some_and(|e| e.eq_ignore_ascii_case("json"));
        let inventory: Inventory = if is_json {
            serde_json::from_str(&text).map_err(|e| format!("Invalid inventory {}: {}", path.display(), e))?
        } else {
            toml::from_str(&text).map_err(|e| format!("Invalid inventory {}: {}", path.display(), e))?
        };

        debug!(
            "Loaded {} records, {} declared types, {} declared mates",
            inventory.stocks.len(),
            inventory.types.len(),
            inventory.mates.len()
        );
        Ok(Self::new(inventory))
    }
}

/// Append items not yet present, keeping first-seen order
fn merge_unique<T: PartialEq + Clone>(declared: &[T], seen: impl Iterator<Item = T>) -> Vec<T> {
    let mut out = declared.to_vec();
    for item in seen {
        if !out.contains(&item) {
            out.push(item);
        }
    }
    out
}

impl StockStore for InventoryStore {
    fn stock_types(&self) -> Vec<StockType> {
        merge_unique(&self.inventory.types, self.inventory.stocks.iter().map(|s| s.stock_type.clone()))
    }

    fn mates(&self) -> Vec<Mate> {
        merge_unique(&self.inventory.mates, self.inventory.stocks.iter().map(|s| s.owner.clone()))
    }

    fn find_records_by_type(&self, stock_type: &StockType) -> Vec<StockRecord> {
        self.inventory.stocks.iter().filter(|s| &s.stock_type == stock_type).cloned().collect()
    }

    fn find_records_by_owner(&self, owner: &Mate) -> Vec<StockRecord> {
        self.inventory.stocks.iter().filter(|s| &s.owner == owner).cloned().collect()
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;
