//! Renderable tables.
//!
//! A `RenderableTable` carries everything one chat table needs. Building one
//! checks that rows, headers, widths and alignments agree on the column
//! count; rendering hands the parts to the board layout engine and wraps the
//! result in a fenced code block.

use super::types::TableRow;
use crate::board::{Align, Block, Board, display_width};
use log::debug;

/// Info string of the fenced block; gives the table a light highlight in chat
pub const FENCE_LANG: &str = "dsconfig";

/// Widest the name column's content may get before cells are cut with "...".
/// Amount and age columns are never cut.
pub const MAX_CELL_WIDTH: usize = 24;

/// Stands in for backticks in cell text so names cannot close the fence
const BACKTICK_REPLACEMENT: &str = "'";

/// Padding columns around each cell's content
const CELL_PADDING: usize = 2;

#[derive(Debug, Clone, PartialEq)]
pub struct RenderableTable {
    pub title: String,
    pub summary: Option<TableRow>,
    pub headers: TableRow,
    pub rows: Vec<TableRow>,
    /// Inner width of each column, padding included
    pub widths: Vec<usize>,
    pub aligns: Vec<Align>,
}

/// Assemble a table, rejecting any row whose arity differs from the headers.
pub fn build_table(
    title: impl Into<String>,
    summary: Option<TableRow>,
    headers: TableRow,
    rows: Vec<TableRow>,
    widths: Vec<usize>,
    aligns: Vec<Align>,
) -> Result<RenderableTable, String> {
    let title = fence_safe(&title.into());
    let headers: TableRow = headers.iter().map(|h| fence_safe(h)).collect();
    let rows: Vec<TableRow> = rows.iter().map(|r| r.iter().map(|c| fence_safe(c)).collect()).collect();
    let summary: Option<TableRow> = summary.map(|r| r.iter().map(|c| fence_safe(c)).collect());
    let columns = headers.len();

    if columns == 0 {
        return Err(format!("table '{}' has no columns", title));
    }
    if widths.len() != columns || aligns.len() != columns {
        return Err(format!(
            "table '{}' has {} headers but {} widths and {} alignments",
            title,
            columns,
            widths.len(),
            aligns.len()
        ));
    }
    if let Some(i) = rows.iter().position(|r| r.len() != columns) {
        return Err(format!("table '{}' row {} has {} cells, expected {}", title, i, rows[i].len(), columns));
    }
    if let Some(summary) = &summary
        && summary.len() != columns
    {
        return Err(format!("table '{}' summary has {} cells, expected {}", title, summary.len(), columns));
    }

    Ok(RenderableTable { title, summary, headers, rows, widths, aligns })
}

/// Replace backticks so user-supplied text never ends the surrounding fence.
/// Every backtick maps to a single-width character, so display widths are kept.
pub fn fence_safe(text: &str) -> String {
    text.replace('`', BACKTICK_REPLACEMENT)
}

/// Column widths that fit every header, row and summary cell.
///
/// Only the first (name) column is capped at `MAX_CELL_WIDTH`. If the title
/// is wider than the resulting grid, the first column absorbs the difference
/// (up to the cap).
pub fn fit_column_widths(title: &str, headers: &[String], rows: &[TableRow], summary: Option<&TableRow>) -> Vec<usize> {
    let mut content: Vec<usize> = headers.iter().map(|h| display_width(h)).collect();
    for row in rows.iter().chain(summary) {
        for (width, cell) in content.iter_mut().zip(row) {
            *width = (*width).max(display_width(cell));
        }
    }

    let mut widths: Vec<usize> = content
        .into_iter()
        .enumerate()
        .map(|(i, w)| (if i == 0 { w.min(MAX_CELL_WIDTH) } else { w }) + CELL_PADDING)
        .collect();

    let grid_inner = widths.iter().sum::<usize>() + widths.len().saturating_sub(1);
    let title_inner = display_width(title).min(MAX_CELL_WIDTH) + CELL_PADDING;
    if let Some(first) = widths.first_mut()
        && title_inner > grid_inner
    {
        *first += title_inner - grid_inner;
    }
    widths
}

impl RenderableTable {
    /// Board width: columns, one border between each, one on each side
    pub fn width(&self) -> usize {
        self.widths.iter().sum::<usize>() + self.widths.len() + 1
    }

    /// Lay the table out and return it as a fenced chat block
    pub fn render(&self) -> Result<String, String> {
        let mut board = Board::new(self.width());
        board.set_header(Block::new(board.usable_width(), 1, self.title.as_str()).with_align(Align::MiddleLeft));
        board.append_table(&self.headers, &self.rows, &self.widths, &self.aligns);
        if let Some(summary) = &self.summary {
            board.append_footer(summary, &self.widths, &self.aligns);
        }
        board.build().map_err(|e| format!("table '{}': {}", self.title, e))?;

        debug!("Rendered table '{}' ({} rows, width {})", self.title, self.rows.len(), self.width());
        Ok(format!("```{}\n{}```\n", FENCE_LANG, board.preview()))
    }
}

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;
