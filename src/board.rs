/// Grid layout engine - Pure rendering concerns
///
/// A `Board` is a fixed-width text canvas made of:
/// - an optional header block spanning the whole usable width
/// - a grid of cell blocks addressed by (row, column)
///
/// Rows are grouped into sections; a horizontal rule is drawn between
/// sections. All grid rows share the same column widths, which together with
/// the vertical borders must add up to the board width.
///
/// ```text
/// ┌──────────────────────┐
/// │ Ore                  │
/// ├───────┬────────┬─────┤
/// │ User  │ Amount │ Upd │
/// ├───────┼────────┼─────┤
/// │ alice │  1,500 │  1d │
/// └───────┴────────┴─────┘
/// ```
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Horizontal border characters
const H: &str = "─";
const V: &str = "│";

/// Text alignment inside a block
///
/// Stock tables only place cells middle-left and middle-right; the other
/// positions are for multi-line blocks.
#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    TopLeft,
    TopCenter,
    TopRight,
    #[default]
    MiddleLeft,
    MiddleCenter,
    MiddleRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Horizontal {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Vertical {
    Top,
    Middle,
    Bottom,
}

impl Align {
    fn horizontal(self) -> Horizontal {
        match self {
            Align::TopLeft | Align::MiddleLeft | Align::BottomLeft => Horizontal::Left,
            Align::TopCenter | Align::MiddleCenter | Align::BottomCenter => Horizontal::Center,
            Align::TopRight | Align::MiddleRight | Align::BottomRight => Horizontal::Right,
        }
    }

    fn vertical(self) -> Vertical {
        match self {
            Align::TopLeft | Align::TopCenter | Align::TopRight => Vertical::Top,
            Align::MiddleLeft | Align::MiddleCenter | Align::MiddleRight => Vertical::Middle,
            Align::BottomLeft | Align::BottomCenter | Align::BottomRight => Vertical::Bottom,
        }
    }
}

/// A rectangular piece of text
///
/// `width` is the inner width between borders, including one column of
/// padding on each side. `height` is the number of text lines.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub width: usize,
    pub height: usize,
    pub text: String,
    pub align: Align,
}

impl Block {
    pub fn new(width: usize, height: usize, text: impl Into<String>) -> Self {
        Self { width, height: height.max(1), text: text.into(), align: Align::default() }
    }

    pub fn with_align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Render to exactly `rows` lines of exactly `width` display columns.
    ///
    /// Text lines beyond the block height are dropped; `rows` larger than the
    /// block height adds blank lines according to the vertical alignment.
    fn render_lines(&self, rows: usize) -> Vec<String> {
        let content_width = self.width.saturating_sub(2);
        let text_lines: Vec<&str> = self.text.lines().take(self.height).collect();
        let rows = rows.max(self.height);
        let spare = rows - text_lines.len();
        let top = match self.align.vertical() {
            Vertical::Top => 0,
            Vertical::Middle => spare / 2,
            Vertical::Bottom => spare,
        };

        let blank = " ".repeat(self.width);
        let mut lines = vec![blank; rows];
        for (i, text) in text_lines.iter().enumerate() {
            lines[top + i] = pad_cell(&fit(text, content_width, self.align.horizontal()), self.width);
        }
        lines
    }
}

/// Surround fitted content with the one-column padding of a cell
fn pad_cell(content: &str, width: usize) -> String {
    if width < 2 {
        return " ".repeat(width);
    }
    format!(" {} ", content)
}

/// One grid row; `rule_above` draws a horizontal rule before it
#[derive(Debug, Clone)]
struct GridRow {
    cells: Vec<Block>,
    rule_above: bool,
}

/// Fixed-width text canvas
#[derive(Debug, Clone)]
pub struct Board {
    width: usize,
    header: Option<Block>,
    rows: Vec<GridRow>,
    preview: String,
}

impl Board {
    pub fn new(width: usize) -> Self {
        Self { width, header: None, rows: Vec::new(), preview: String::new() }
    }

    /// Width available inside the outer borders
    pub fn usable_width(&self) -> usize {
        self.width.saturating_sub(2)
    }

    /// Place a block above the grid, spanning the usable width
    pub fn set_header(&mut self, block: Block) {
        self.header = Some(block);
    }

    /// Append a table below everything placed so far: a header row, a rule,
    /// then the body rows.
    pub fn append_table(&mut self, headers: &[String], rows: &[Vec<String>], widths: &[usize], aligns: &[Align]) {
        self.append_section(std::iter::once(headers.to_vec()), widths, aligns);
        self.append_section(rows.iter().cloned(), widths, aligns);
    }

    /// Append a single row, separated from the rows above by a rule
    pub fn append_footer(&mut self, cells: &[String], widths: &[usize], aligns: &[Align]) {
        self.append_section(std::iter::once(cells.to_vec()), widths, aligns);
    }

    fn append_section<I>(&mut self, rows: I, widths: &[usize], aligns: &[Align])
    where
        I: IntoIterator<Item = Vec<String>>,
    {
        for (i, row) in rows.into_iter().enumerate() {
            let cells = row
                .into_iter()
                .zip(widths.iter().zip(aligns.iter()))
                .map(|(text, (&width, &align))| Block::new(width, 1, text).with_align(align))
                .collect();
            self.rows.push(GridRow { cells, rule_above: i == 0 });
        }
    }

    /// Cell at (row, column) of the grid, header excluded
    pub fn cell(&self, row: usize, column: usize) -> Option<&Block> {
        self.rows.get(row).and_then(|r| r.cells.get(column))
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Lay out every block and render the preview text.
    ///
    /// Fails if the header or any grid row does not span exactly the usable
    /// width, or if grid rows disagree on column widths.
    pub fn build(&mut self) -> Result<(), String> {
        let usable = self.usable_width();
        if let Some(header) = &self.header
            && header.width != usable
        {
            return Err(format!("header block is {} wide, board needs {}", header.width, usable));
        }

        let columns: Option<Vec<usize>> = self.rows.first().map(|r| r.cells.iter().map(|c| c.width).collect());
        if let Some(columns) = &columns {
            let spanned = columns.iter().sum::<usize>() + columns.len().saturating_sub(1);
            if spanned != usable {
                return Err(format!("grid spans {} columns, board needs {}", spanned, usable));
            }
            self.check_grid(columns)?;
        }

        let mut out = String::new();
        let full = [usable];
        let grid = columns.as_deref().unwrap_or(&full[..]);

        match &self.header {
            Some(header) => {
                out.push_str(&rule("┌", &full, "┬", "┐"));
                for line in header.render_lines(header.height) {
                    out.push_str(&format!("{}{}{}\n", V, line, V));
                }
            }
            None if self.rows.is_empty() => out.push_str(&rule("┌", &full, "┬", "┐")),
            None => {}
        }

        for (i, row) in self.rows.iter().enumerate() {
            if i == 0 {
                if self.header.is_some() {
                    out.push_str(&rule("├", grid, "┬", "┤"));
                } else {
                    out.push_str(&rule("┌", grid, "┬", "┐"));
                }
            } else if row.rule_above {
                out.push_str(&rule("├", grid, "┼", "┤"));
            }

            let height = row.cells.iter().map(|c| c.height).max().unwrap_or(1);
            let rendered: Vec<Vec<String>> = row.cells.iter().map(|c| c.render_lines(height)).collect();
            for line in 0..height {
                let cells: Vec<&str> = rendered.iter().map(|c| c[line].as_str()).collect();
                out.push_str(&format!("{}{}{}\n", V, cells.join(V), V));
            }
        }

        let bottom = if self.rows.is_empty() { &full[..] } else { grid };
        out.push_str(&rule("└", bottom, "┴", "┘"));

        self.preview = out;
        Ok(())
    }

    /// Every grid row must have exactly the column widths of the first row
    fn check_grid(&self, columns: &[usize]) -> Result<(), String> {
        for row in 0..self.row_count() {
            for (column, &expected) in columns.iter().enumerate() {
                match self.cell(row, column) {
                    Some(cell) if cell.width == expected => {}
                    Some(cell) => {
                        return Err(format!("cell ({}, {}) is {} wide, expected {}", row, column, cell.width, expected));
                    }
                    None => return Err(format!("grid row {} has no column {}", row, column)),
                }
            }
            if self.cell(row, columns.len()).is_some() {
                return Err(format!("grid row {} has more than {} columns", row, columns.len()));
            }
        }
        Ok(())
    }

    /// Text produced by the last successful `build`
    pub fn preview(&self) -> &str {
        &self.preview
    }
}

/// Horizontal rule with junctions at the column boundaries
fn rule(left: &str, widths: &[usize], junction: &str, right: &str) -> String {
    let segments: Vec<String> = widths.iter().map(|w| H.repeat(*w)).collect();
    format!("{}{}{}\n", left, segments.join(junction), right)
}

//
// Text Formatting Utilities
//

/// Count the display width of a string, accounting for wide Unicode characters
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Truncate (with "...") or pad `s` to exactly `width` display columns
fn fit(s: &str, width: usize, align: Horizontal) -> String {
    let display_w = display_width(s);

    if display_w > width {
        let mut result = String::new();
        let mut current_width = 0;

        // Reserve space for "..."
        let target_width = if width >= 3 { width - 3 } else { width };

        for c in s.chars() {
            let c_width = UnicodeWidthChar::width(c).unwrap_or(1);
            if current_width + c_width > target_width {
                break;
            }
            result.push(c);
            current_width += c_width;
        }

        if width >= 3 {
            result.push_str("...");
            current_width += 3;
        }

        // A wide char may leave one column free
        if current_width < width {
            result.push_str(&" ".repeat(width - current_width));
        }

        result
    } else {
        let padding = width - display_w;
        match align {
            Horizontal::Left => format!("{}{}", s, " ".repeat(padding)),
            Horizontal::Right => format!("{}{}", " ".repeat(padding), s),
            Horizontal::Center => {
                let left = padding / 2;
                format!("{}{}{}", " ".repeat(left), s, " ".repeat(padding - left))
            }
        }
    }
}

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;
