//! Report generation module - Data transformations and table rendering.
//!
//! This module handles:
//! - Aggregating stock records into table rows and summaries
//! - Building renderable tables and laying them out on a board
//! - Composing tables into one report under the chat size budget
//! - The report entry points (by type, by owner, type index)
//!
//! # Module Organization
//!
//! - `types` - Shared rendering types (RenderContext, AggregatedRows)
//! - `aggregate` - Records to rows
//! - `table` - RenderableTable construction and rendering
//! - `compose` - Budget-checked concatenation
//! - `service` - ReportService entry points

mod aggregate;
mod compose;
mod service;
mod table;
mod types;

pub use service::ReportService;
pub use types::RenderContext;
