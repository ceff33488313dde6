//! Budget-checked concatenation of rendered tables.
//!
//! Chat messages are capped at `MAX_REPORT_LEN` characters. Tables are
//! rendered one at a time in input order; the first table that would push
//! the report over the cap is dropped together with everything after it, so
//! the output is always a prefix of whole fenced blocks.

use super::table::RenderableTable;
use log::{debug, error, warn};

/// Message size ceiling of the chat transport, in characters
pub const MAX_REPORT_LEN: usize = 2000;

/// Render and concatenate `tables`, skipping absent entries.
///
/// A table that fails to render is logged and treated as absent.
pub fn compose(tables: &[Option<RenderableTable>], max_len: usize) -> String {
    let blocks = tables.iter().map(|table| {
        table.as_ref().and_then(|t| match t.render() {
            Ok(block) => Some(block),
            Err(e) => {
                error!("Skipping table: {}", e);
                None
            }
        })
    });
    compose_blocks(blocks, max_len)
}

/// Concatenate pre-rendered blocks while the total stays within `max_len`
/// characters. Stops at the first block that does not fit.
pub fn compose_blocks<I>(blocks: I, max_len: usize) -> String
where
    I: IntoIterator<Item = Option<String>>,
{
    let mut output = String::new();
    let mut used = 0;

    for (i, block) in blocks.into_iter().enumerate() {
        let Some(block) = block else {
            continue;
        };

        let len = block.chars().count();
        if used + len > max_len {
            warn!("Report budget of {} chars reached at table {}; dropping it and the rest", max_len, i);
            return output;
        }

        output.push_str(&block);
        used += len;
    }

    debug!("Composed report of {} chars", used);
    output
}

#[cfg(test)]
#[path = "compose_test.rs"]
mod compose_test;
