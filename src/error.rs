//! Errors raised while building or reconfiguring a [`Table`](crate::table::Table).
//!
//! Every failure is a type constraint violated at the input boundary.
//! Rendering, transposing and measuring an already-built table never fail.

use std::fmt;

/// Error returned when table input does not have the required shape or type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// A column input was a single value instead of a sequence of items.
    ColumnNotIterable {
        /// Position of the offending column among the inputs.
        index: usize,
    },
    /// A configuration option had the wrong type.
    TypeConstraint {
        /// Name of the option as it was given.
        option: String,
        /// Human readable description of the accepted type.
        expected: &'static str,
    },
}

impl TableError {
    pub(crate) fn type_constraint(option: &str, expected: &'static str) -> Self {
        Self::TypeConstraint {
            option: option.to_string(),
            expected,
        }
    }

    /// Name of the option that failed, if the error concerns an option.
    #[must_use]
    pub fn option(&self) -> Option<&str> {
        match self {
            Self::ColumnNotIterable { .. } => None,
            Self::TypeConstraint { option, .. } => Some(option),
        }
    }
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ColumnNotIterable { index } => {
                write!(f, "column must be iterable (column {index})")
            }
            Self::TypeConstraint { option, expected } => {
                write!(f, "{option} must be of type {expected}")
            }
        }
    }
}

impl std::error::Error for TableError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_not_iterable_message() {
        let err = TableError::ColumnNotIterable { index: 2 };
        assert_eq!(err.to_string(), "column must be iterable (column 2)");
        assert_eq!(err.option(), None);
    }

    #[test]
    fn test_type_constraint_names_option() {
        let err = TableError::type_constraint("columnwidth", "int");
        assert_eq!(err.to_string(), "columnwidth must be of type int");
        assert_eq!(err.option(), Some("columnwidth"));
    }

    #[test]
    fn test_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(TableError::type_constraint("title", "string"));
        assert!(err.source().is_none());
    }
}
