//! Row aggregation: stock records to table rows.
//!
//! Every group yields at least one row. A group without records yields a
//! single sentinel row of dashes so no table is ever rendered empty.

use super::types::{AggregatedRows, RenderContext, SENTINEL_CELL, TableRow};
use crate::duration::format_age;
use crate::types::{StockRecord, StockType};

/// Rows for one stock type: `[owner, amount, age]` per record, summed into
/// a `[type name, total, ""]` summary row.
pub fn aggregate_by_type(stock_type: &StockType, records: &[StockRecord], ctx: &RenderContext) -> AggregatedRows {
    let mut rows = Vec::with_capacity(records.len().max(1));
    let mut total: u128 = 0;

    for record in records {
        rows.push(vec![
            ctx.item(&record.owner.name),
            ctx.amount(u128::from(record.amount)),
            format_age(record.updated, ctx.now),
        ]);
        total += u128::from(record.amount);
    }
    if rows.is_empty() {
        rows.push(sentinel_row());
    }

    let summary = vec![ctx.item(&stock_type.name), ctx.amount(total), String::new()];
    AggregatedRows { rows, summary: Some(summary) }
}

/// Rows for one owner: `[type name, amount, age]` per record.
///
/// Amounts of different types do not add up, so there is no summary row.
pub fn aggregate_by_owner(records: &[StockRecord], ctx: &RenderContext) -> AggregatedRows {
    let mut rows: Vec<TableRow> = records
        .iter()
        .map(|record| {
            vec![
                ctx.item(&record.stock_type.name),
                ctx.amount(u128::from(record.amount)),
                format_age(record.updated, ctx.now),
            ]
        })
        .collect();
    if rows.is_empty() {
        rows.push(sentinel_row());
    }

    AggregatedRows { rows, summary: None }
}

fn sentinel_row() -> TableRow {
    vec![SENTINEL_CELL.to_string(); 3]
}
