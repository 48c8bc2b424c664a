//! Table configuration.
//!
//! [`TableOptions`] carries the three settings a table understands: the
//! title, the header row and a fixed column width. Every field is optional
//! and an unset field leaves the table's current setting untouched when the
//! options are applied with [`Table::set`](crate::table::Table::set).
//!
//! # Keyword-style input
//!
//! [`TableOptions::from_pairs`] accepts `(name, value)` pairs whose values are
//! only typed at runtime. Recognized names are `title`, `header` and
//! `columnwidth` (`column_width` is accepted as an alias). Other names are
//! ignored. A value of the wrong type fails with
//! [`TableError::TypeConstraint`] naming the option.
//!
//! ```
//! use simple_table::options::TableOptions;
//! use simple_table::value::Value;
//!
//! let options = TableOptions::from_pairs([
//!     ("title", Value::from("Computers of the past")),
//!     ("columnwidth", Value::from(14)),
//!     ("colour", Value::from("ignored")),
//! ])
//! .unwrap();
//! assert_eq!(options.column_width, Some(14));
//!
//! let err = TableOptions::from_pairs([("columnwidth", Value::from("wide"))]).unwrap_err();
//! assert_eq!(err.to_string(), "columnwidth must be of type int");
//! ```

use crate::error::TableError;
use crate::item::Item;
use crate::value::Value;

/// Optional table settings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableOptions {
    /// Title displayed centered above the table.
    pub title: Option<String>,
    /// Header labels, one per column.
    pub header: Option<Vec<Item>>,
    /// Fixed width for every column.
    pub column_width: Option<usize>,
}

impl TableOptions {
    /// Create empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the header labels.
    #[must_use]
    pub fn header<T: Into<Item>>(mut self, header: impl IntoIterator<Item = T>) -> Self {
        self.header = Some(header.into_iter().map(Into::into).collect());
        self
    }

    /// Set a fixed column width.
    #[must_use]
    pub fn column_width(mut self, width: usize) -> Self {
        self.column_width = Some(width);
        self
    }

    /// Returns true when no setting is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.header.is_none() && self.column_width.is_none()
    }

    /// Overlay the settings present in `other` onto `self`.
    pub fn merge(&mut self, other: Self) {
        if other.title.is_some() {
            self.title = other.title;
        }
        if other.header.is_some() {
            self.header = other.header;
        }
        if other.column_width.is_some() {
            self.column_width = other.column_width;
        }
    }

    /// Parse keyword-style `(name, value)` pairs.
    ///
    /// Later pairs override earlier ones with the same name. Parsing is
    /// all-or-nothing: the first type mismatch is returned and no options
    /// are produced.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::TypeConstraint`] when `title` is not a string,
    /// `header` is not a sequence, or `columnwidth` is not a non-negative
    /// integer.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Result<Self, TableError>
    where
        K: AsRef<str>,
        V: Into<Value>,
    {
        let mut options = Self::default();
        for (name, value) in pairs {
            let name = name.as_ref();
            match name {
                "title" => options.title = Some(parse_title(name, value.into())?),
                "header" => options.header = Some(parse_header(name, value.into())?),
                "columnwidth" | "column_width" => {
                    options.column_width = Some(parse_column_width(name, value.into())?);
                }
                _ => log::trace!("ignoring unknown table option {name:?}"),
            }
        }
        Ok(options)
    }
}

fn parse_title(name: &str, value: Value) -> Result<String, TableError> {
    match value {
        Value::Scalar(Item::Text(title)) => Ok(title),
        _ => Err(TableError::type_constraint(name, "string")),
    }
}

fn parse_header(name: &str, value: Value) -> Result<Vec<Item>, TableError> {
    value
        .into_sequence()
        .ok_or_else(|| TableError::type_constraint(name, "sequence"))
}

fn parse_column_width(name: &str, value: Value) -> Result<usize, TableError> {
    match value {
        Value::Scalar(Item::Int(width)) => usize::try_from(width)
            .map_err(|_| TableError::type_constraint(name, "non-negative int")),
        _ => Err(TableError::type_constraint(name, "int")),
    }
}
