//! Table - columns of items rendered as a fixed-width text grid.
//!
//! A [`Table`] holds a list of columns, an optional header row and an
//! optional title. Every cell is right-justified to one shared column
//! width and closed by a vertical border; horizontal rules separate the
//! title, the header and the data.
//!
//! - Columns may have different lengths; short columns are padded with
//!   empty cells when rendered.
//! - The column width is either fixed with [`Table::column_width`] or
//!   derived from the widest item every time the table is rendered.
//! - Content wider than a fixed column width is never truncated.
//!
//! # Examples
//!
//! ## Basic Table
//!
//! ```
//! use simple_table::table::Table;
//!
//! let table = Table::new([vec!["a", "bb"], vec!["ccc"]]);
//! assert_eq!(
//!     table.to_string(),
//!     "--------\n  a|ccc|\n bb|   |\n--------\n"
//! );
//! ```
//!
//! ## Header, Title and Transpose
//!
//! ```
//! use simple_table::table::Table;
//!
//! let mut table = Table::new([vec!["Z80", "1KB"], vec!["Z80", "48KB"]])
//!     .header(["ZX-81", "ZX-Spectrum"])
//!     .title("Computers");
//! assert_eq!(table.len(), 3);
//!
//! table.transpose();
//! assert_eq!(table.columns().len(), 3);
//! ```
//!
//! # Concurrency
//!
//! A table is plain owned data with no interior mutability. It can be read
//! from several threads at once, but mutation needs exclusive access like
//! any other value.

use std::fmt;

use crate::border::{ASCII, BorderChars};
use crate::cells;
use crate::error::TableError;
use crate::item::Item;
use crate::measure::{self, TableMeasurement};
use crate::options::TableOptions;
use crate::transpose;
use crate::value::Value;

/// A plain-text table.
#[derive(Debug, Clone)]
pub struct Table {
    /// Data columns.
    columns: Vec<Vec<Item>>,
    /// Header labels, nominally one per column.
    header: Option<Vec<Item>>,
    /// Title line.
    title: Option<String>,
    /// Fixed column width; derived from the content when absent.
    column_width: Option<usize>,
    /// Border characters.
    border: &'static BorderChars,
}

impl Default for Table {
    fn default() -> Self {
        Self {
            columns: Vec::new(),
            header: None,
            title: None,
            column_width: None,
            border: &ASCII,
        }
    }
}

impl Table {
    /// Create a table from columns of items.
    #[must_use]
    pub fn new<C, T>(columns: impl IntoIterator<Item = C>) -> Self
    where
        C: IntoIterator<Item = T>,
        T: Into<Item>,
    {
        let columns: Vec<Vec<Item>> = columns
            .into_iter()
            .map(|column| column.into_iter().map(Into::into).collect())
            .collect();
        log::debug!("table created with {} columns", columns.len());
        Self {
            columns,
            ..Self::default()
        }
    }

    /// Create a table from columns and options.
    #[must_use]
    pub fn with_options<C, T>(columns: impl IntoIterator<Item = C>, options: TableOptions) -> Self
    where
        C: IntoIterator<Item = T>,
        T: Into<Item>,
    {
        let mut table = Self::new(columns);
        table.set(options);
        table
    }

    /// Create a table from runtime-typed columns and keyword-style options.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::ColumnNotIterable`] when a column is a scalar
    /// value, and [`TableError::TypeConstraint`] when an option has the
    /// wrong type (see [`TableOptions::from_pairs`]).
    ///
    /// ```
    /// use simple_table::error::TableError;
    /// use simple_table::table::Table;
    /// use simple_table::value::Value;
    ///
    /// let err = Table::from_values(
    ///     [Value::from(vec![1, 2])],
    ///     [("columnwidth", Value::from("wide"))],
    /// )
    /// .unwrap_err();
    /// assert_eq!(err.option(), Some("columnwidth"));
    ///
    /// let err = Table::from_values([Value::from(3)], Vec::<(&str, Value)>::new()).unwrap_err();
    /// assert_eq!(err, TableError::ColumnNotIterable { index: 0 });
    /// ```
    pub fn from_values<K, V>(
        columns: impl IntoIterator<Item = Value>,
        options: impl IntoIterator<Item = (K, V)>,
    ) -> Result<Self, TableError>
    where
        K: AsRef<str>,
        V: Into<Value>,
    {
        let columns = columns
            .into_iter()
            .enumerate()
            .map(|(index, value)| {
                value
                    .into_sequence()
                    .ok_or(TableError::ColumnNotIterable { index })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let options = TableOptions::from_pairs(options)?;
        Ok(Self::with_options(columns, options))
    }

    /// Set the title (builder pattern).
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the header labels (builder pattern).
    #[must_use]
    pub fn header<T: Into<Item>>(mut self, header: impl IntoIterator<Item = T>) -> Self {
        self.header = Some(header.into_iter().map(Into::into).collect());
        self
    }

    /// Set a fixed column width (builder pattern).
    #[must_use]
    pub fn column_width(mut self, width: usize) -> Self {
        self.column_width = Some(width);
        self
    }

    /// Set the border characters (builder pattern).
    #[must_use]
    pub fn border(mut self, border: &'static BorderChars) -> Self {
        self.border = border;
        self
    }

    /// Apply the settings present in `options`, keeping the others.
    pub fn set(&mut self, options: TableOptions) -> &mut Self {
        log::debug!(
            "updating table: title={} header={} column_width={:?}",
            options.title.is_some(),
            options.header.is_some(),
            options.column_width
        );
        let mut current = TableOptions {
            title: self.title.take(),
            header: self.header.take(),
            column_width: self.column_width,
        };
        current.merge(options);
        self.title = current.title;
        self.header = current.header;
        self.column_width = current.column_width;
        self
    }

    /// Apply keyword-style settings, keeping the others.
    ///
    /// Nothing changes when an option fails to parse.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::TypeConstraint`] when an option has the wrong
    /// type.
    pub fn set_from_pairs<K, V>(
        &mut self,
        options: impl IntoIterator<Item = (K, V)>,
    ) -> Result<&mut Self, TableError>
    where
        K: AsRef<str>,
        V: Into<Value>,
    {
        let options = TableOptions::from_pairs(options)?;
        Ok(self.set(options))
    }

    /// The data columns.
    #[must_use]
    pub fn columns(&self) -> &[Vec<Item>] {
        &self.columns
    }

    /// The header labels, if any.
    #[must_use]
    pub fn header_items(&self) -> Option<&[Item]> {
        self.header.as_deref()
    }

    /// The title, if any.
    #[must_use]
    pub fn title_text(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// The fixed column width, if one was set.
    #[must_use]
    pub fn configured_width(&self) -> Option<usize> {
        self.column_width
    }

    /// The border characters.
    #[must_use]
    pub fn border_chars(&self) -> &'static BorderChars {
        self.border
    }

    /// Column width used for rendering: the fixed width, or the widest
    /// stringified item across the header and all columns.
    #[must_use]
    pub fn resolved_column_width(&self) -> usize {
        self.column_width
            .unwrap_or_else(|| measure::auto_column_width(self.header.as_deref(), &self.columns))
    }

    /// Measure the table as it would be rendered now.
    #[must_use]
    pub fn measure(&self) -> TableMeasurement {
        TableMeasurement::measure(
            self.title.as_deref(),
            self.header.as_deref(),
            &self.columns,
            self.column_width,
        )
    }

    /// The data rows, with short columns padded by empty items.
    #[must_use]
    pub fn rows(&self) -> Vec<Vec<Item>> {
        transpose::zip_longest(&self.columns)
    }

    /// Length of the longest column, plus one when a header is present.
    #[must_use]
    pub fn len(&self) -> usize {
        let longest = self.columns.iter().map(Vec::len).max().unwrap_or(0);
        longest + usize::from(self.header.is_some())
    }

    /// Returns true when there are no data rows and no header.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Exchange rows and columns in place.
    ///
    /// With a header the labels are folded into the data first, and the
    /// first item of every new column becomes the new header. Ragged
    /// columns are padded with empty items, so transposing twice only
    /// restores a rectangular table.
    pub fn transpose(&mut self) {
        let columns = std::mem::take(&mut self.columns);
        let (columns, header) = transpose::transpose(columns, self.header.take());
        log::debug!(
            "transposed table to {} columns (header: {})",
            columns.len(),
            header.is_some()
        );
        self.columns = columns;
        self.header = header;
    }

    /// Render the table to a string of newline-terminated lines.
    #[must_use]
    pub fn render(&self) -> String {
        let measurement = self.measure();
        log::trace!(
            "rendering table: column_width={} ({}) table_width={}",
            measurement.column_width,
            if measurement.automatic { "auto" } else { "fixed" },
            measurement.table_width
        );

        let width = measurement.column_width;
        let vertical = self.border.vertical;
        let rule = cells::fill(self.border.rule, measurement.table_width);
        let mut out = String::new();

        let push_rule = |out: &mut String| {
            out.push_str(&rule);
            out.push('\n');
        };
        let push_cells = |out: &mut String, items: &[Item]| {
            for item in items {
                out.push_str(&cells::right_justify(&item.to_string(), width));
                out.push(vertical);
            }
            out.push('\n');
        };

        if let Some(title) = &self.title {
            push_rule(&mut out);
            let title_width = measurement.table_width.saturating_sub(1);
            out.push_str(&cells::center(title, title_width));
            out.push(vertical);
            out.push('\n');
        }

        if let Some(header) = &self.header {
            push_rule(&mut out);
            push_cells(&mut out, header);
        }

        push_rule(&mut out);
        for row in self.rows() {
            push_cells(&mut out, &row);
        }
        push_rule(&mut out);

        out
    }

    /// Constructor-call representation of the table.
    ///
    /// ```
    /// use simple_table::table::Table;
    ///
    /// let table = Table::new([vec!["a"], vec!["b", "c"]]).title("T").column_width(4);
    /// assert_eq!(table.repr(), "Table(['a'],['b', 'c'],title = 'T',columnwidth = 4)");
    /// ```
    #[must_use]
    pub fn repr(&self) -> String {
        let mut out = String::from("Table(");
        for column in &self.columns {
            out.push_str(&repr_items(column));
            out.push(',');
        }
        if let Some(header) = &self.header {
            out.push_str("header = ");
            out.push_str(&repr_items(header));
            out.push(',');
        }
        if let Some(title) = &self.title {
            out.push_str("title = '");
            out.push_str(title);
            out.push_str("',");
        }
        if let Some(width) = self.column_width {
            out.push_str("columnwidth = ");
            out.push_str(&width.to_string());
        }
        out.push(')');
        out
    }
}

fn repr_items(items: &[Item]) -> String {
    let inner: Vec<String> = items.iter().map(Item::repr).collect();
    format!("[{}]", inner.join(", "))
}

/// Tables compare equal when their columns, header and title match.
/// The column width and border characters are not compared.
impl PartialEq for Table {
    fn eq(&self, other: &Self) -> bool {
        self.columns == other.columns && self.header == other.header && self.title == other.title
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
