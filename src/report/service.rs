//! Report entry points.
//!
//! Each entry point takes the groups to show (stock types or owners), and
//! either returns the localized no-data text when there are none, or builds
//! one table per group and composes them under the size budget.

use super::aggregate::{aggregate_by_owner, aggregate_by_type};
use super::compose::{MAX_REPORT_LEN, compose};
use super::table::{RenderableTable, build_table, fence_safe, fit_column_widths};
use super::types::{AggregatedRows, COLUMN_ALIGNS, RenderContext};
use crate::store::StockStore;
use crate::types::{Mate, StockType};
use log::{debug, error, warn};

pub const RESOURCE_UNKNOWN: &str = "RESOURCE_UNKNOWN";
pub const USER_UNKNOWN: &str = "USER_UNKNOWN";
pub const NO_DATA: &str = "NO_DATA";

pub struct ReportService<'a, S: StockStore + ?Sized> {
    store: &'a S,
    ctx: RenderContext<'a>,
    max_len: usize,
}

impl<'a, S: StockStore + ?Sized> ReportService<'a, S> {
    pub fn new(store: &'a S, ctx: RenderContext<'a>) -> Self {
        Self { store, ctx, max_len: MAX_REPORT_LEN }
    }

    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = max_len;
        self
    }

    /// One table per stock type listing every owner's amount, with a total
    pub fn render_by_type(&self, types: &[StockType]) -> String {
        let headers = self.headers("USER");
        self.render_groups(types, RESOURCE_UNKNOWN, |stock_type| {
            let records = self.store.find_records_by_type(stock_type);
            let aggregated = aggregate_by_type(stock_type, &records, &self.ctx);
            self.table(self.ctx.item(&stock_type.name), headers.clone(), aggregated)
        })
    }

    /// One table per owner listing every stock type they hold
    pub fn render_by_owner(&self, mates: &[Mate]) -> String {
        let headers = self.headers("RAW_MATERIAL");
        self.render_groups(mates, USER_UNKNOWN, |mate| {
            let records = self.store.find_records_by_owner(mate);
            let aggregated = aggregate_by_owner(&records, &self.ctx);
            self.table(mate.name.clone(), headers.clone(), aggregated)
        })
    }

    /// Plain fenced list of type display names, one per line.
    ///
    /// The fences count toward the budget; if not even the empty list fits,
    /// the result is empty.
    pub fn render_type_index(&self, types: &[StockType]) -> String {
        const OPEN: &str = "```\n";
        const CLOSE: &str = "\n```\n";

        let mut body = String::new();
        if types.is_empty() {
            body.push_str(&fence_safe(&self.ctx.string(NO_DATA)));
        }

        let mut used = OPEN.chars().count() + body.chars().count() + CLOSE.chars().count();
        if used > self.max_len {
            warn!("Type index needs {} chars, budget is {}", used, self.max_len);
            return String::new();
        }

        for (i, stock_type) in types.iter().enumerate() {
            let line = format!("{}\n", fence_safe(&self.ctx.item(&stock_type.name)));
            let len = line.chars().count();
            if used + len > self.max_len {
                debug!("Type index truncated at {} of {} types", i, types.len());
                break;
            }
            body.push_str(&line);
            used += len;
        }

        format!("{}{}{}", OPEN, body, CLOSE)
    }

    /// Stock types matching `names` by key or display name; all types when
    /// `names` is empty
    pub fn select_types(&self, names: &[String]) -> Vec<StockType> {
        let all = self.store.stock_types();
        if names.is_empty() {
            return all;
        }
        all.into_iter()
            .filter(|t| {
                let display = self.ctx.item(&t.name);
                names.iter().any(|n| n.eq_ignore_ascii_case(&t.name) || n.eq_ignore_ascii_case(&display))
            })
            .collect()
    }

    /// Owners matching `names`; all owners when `names` is empty
    pub fn select_mates(&self, names: &[String]) -> Vec<Mate> {
        let all = self.store.mates();
        if names.is_empty() {
            return all;
        }
        all.into_iter().filter(|m| names.iter().any(|n| n.eq_ignore_ascii_case(&m.name))).collect()
    }

    /// Shared skeleton of the table reports: no groups means the localized
    /// `fallback_key` text (empty if even that exceeds the budget), otherwise
    /// one table per group under the budget.
    /// Groups whose table cannot be built are left out.
    fn render_groups<G, F>(&self, groups: &[G], fallback_key: &str, build: F) -> String
    where
        F: Fn(&G) -> Result<RenderableTable, String>,
    {
        if groups.is_empty() {
            let text = self.ctx.string(fallback_key);
            if text.chars().count() > self.max_len {
                warn!("'{}' text does not fit in {} chars", fallback_key, self.max_len);
                return String::new();
            }
            return text;
        }

        let tables: Vec<Option<RenderableTable>> = groups
            .iter()
            .map(|group| match build(group) {
                Ok(table) => Some(table),
                Err(e) => {
                    error!("Dropping malformed table: {}", e);
                    None
                }
            })
            .collect();

        debug!("Composing {} tables (budget {} chars)", tables.len(), self.max_len);
        compose(&tables, self.max_len)
    }

    fn headers(&self, first_column: &str) -> Vec<String> {
        vec![self.ctx.string(first_column), self.ctx.string("AMOUNT"), self.ctx.string("UPDATED")]
    }

    fn table(&self, title: String, headers: Vec<String>, aggregated: AggregatedRows) -> Result<RenderableTable, String> {
        let AggregatedRows { rows, summary } = aggregated;
        let widths = fit_column_widths(&title, &headers, &rows, summary.as_ref());
        build_table(title, summary, headers, rows, widths, COLUMN_ALIGNS.to_vec())
    }
}

#[cfg(test)]
#[path = "service_test.rs"]
mod service_test;
