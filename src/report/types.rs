//! Report type definitions shared by the aggregation and rendering steps.

use crate::board::Align;
use crate::locale::ResourceTable;
use chrono::{DateTime, Utc};

/// One table row: formatted cell strings, one per column
pub type TableRow = Vec<String>;

/// Placeholder cell used when a group has no records
pub const SENTINEL_CELL: &str = "-";

/// Column alignment shared by every stock table:
/// name left, amount and age right.
pub const COLUMN_ALIGNS: [Align; 3] = [Align::MiddleLeft, Align::MiddleRight, Align::MiddleRight];

/// Everything needed to turn records into localized text.
///
/// `now` is the reference instant record ages are measured against; it is
/// fixed per request so every row of a report agrees on it.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub resources: &'a ResourceTable,
    pub locale: &'a str,
    pub now: DateTime<Utc>,
}

impl<'a> RenderContext<'a> {
    pub fn new(resources: &'a ResourceTable, locale: &'a str, now: DateTime<Utc>) -> Self {
        Self { resources, locale, now }
    }

    pub fn string(&self, key: &str) -> String {
        self.resources.get_string(key, self.locale)
    }

    pub fn item(&self, key: &str) -> String {
        self.resources.get_item(key, self.locale)
    }

    /// Format an amount or a total; totals of `u64` amounts may exceed `u64::MAX`
    pub fn amount(&self, value: u128) -> String {
        self.resources.format_amount(value, self.locale)
    }
}

/// Rows produced for one group, plus the summary row when the group kind
/// has one
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedRows {
    pub rows: Vec<TableRow>,
    pub summary: Option<TableRow>,
}
