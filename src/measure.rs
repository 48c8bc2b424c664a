//! Width measurement for tables.
//!
//! A table resolves one column width shared by every column: either the
//! configured width or the widest stringified item across the header and
//! all columns. The overall table width is the largest of three candidates:
//!
//! - the title plus two cells of border padding,
//! - the header row,
//! - every column at the resolved width plus its border.
//!
//! The header candidate is asymmetric on purpose. With an automatic width
//! each header item contributes its own width plus one; with a configured
//! width each header item contributes the configured width plus one.
//!
//! Width arithmetic saturates, so an oversized configured width yields
//! `usize::MAX` instead of overflowing.

use std::cmp::max;

use crate::cells;
use crate::item::Item;

/// Resolved widths for one render of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TableMeasurement {
    /// Width every cell is right-justified to.
    pub column_width: usize,
    /// Length of the horizontal rules.
    pub table_width: usize,
    /// Whether `column_width` was derived from the content.
    pub automatic: bool,
}

impl TableMeasurement {
    /// Measure a table from its parts.
    #[must_use]
    pub fn measure(
        title: Option<&str>,
        header: Option<&[Item]>,
        columns: &[Vec<Item>],
        configured_width: Option<usize>,
    ) -> Self {
        let column_width =
            configured_width.unwrap_or_else(|| auto_column_width(header, columns));
        let table_width = max(
            max(
                title_width(title),
                header_width(header, configured_width),
            ),
            columns_width(columns.len(), column_width),
        );

        Self {
            column_width,
            table_width,
            automatic: configured_width.is_none(),
        }
    }
}

/// Widest stringified item across the header and every column, 0 when empty.
#[must_use]
pub fn auto_column_width(header: Option<&[Item]>, columns: &[Vec<Item>]) -> usize {
    header
        .into_iter()
        .flatten()
        .chain(columns.iter().flatten())
        .map(Item::width)
        .max()
        .unwrap_or(0)
}

/// Width claimed by the title line: the title plus two cells of padding.
#[must_use]
pub fn title_width(title: Option<&str>) -> usize {
    title.map_or(0, |title| cells::cell_len(title).saturating_add(2))
}

/// Width claimed by the header row.
#[must_use]
pub fn header_width(header: Option<&[Item]>, configured_width: Option<usize>) -> usize {
    let Some(header) = header else {
        return 0;
    };
    match configured_width {
        Some(width) => columns_width(header.len(), width),
        None => header
            .iter()
            .fold(0, |total: usize, item| total.saturating_add(item.width() + 1)),
    }
}

/// Width claimed by the data columns, each followed by a border.
#[must_use]
pub const fn columns_width(column_count: usize, column_width: usize) -> usize {
    column_width.saturating_add(1).saturating_mul(column_count)
}
