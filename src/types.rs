/// Core data structures for inventory records
///
/// This module defines the snapshot types read from storage. The renderer
/// never mutates them; every render call borrows a fresh view.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A kind of resource that owners can stock (e.g. "ORE")
///
/// The key is an internal identifier resolved to a display name through the
/// resource table's item namespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StockType {
    pub name: String,
}

#[cfg(test)]
impl StockType {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// An owner of stock (a guild mate)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mate {
    pub name: String,
}

#[cfg(test)]
impl Mate {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A quantity of one resource type held by one owner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockRecord {
    pub owner: Mate,
    #[serde(rename = "type")]
    pub stock_type: StockType,
    pub amount: u64,
    pub updated: DateTime<Utc>,
}

/// Everything loaded from an inventory file
///
/// `types` and `mates` are the standing data declared up front; records may
/// reference types and owners that are not declared.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    #[serde(default)]
    pub types: Vec<StockType>,
    #[serde(default)]
    pub mates: Vec<Mate>,
    #[serde(default)]
    pub stocks: Vec<StockRecord>,
}
