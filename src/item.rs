//! Item - a single stringifiable table value.
//!
//! Columns and headers hold [`Item`]s. An item keeps the value it was built
//! from so that equality stays typed (`1` and `"1"` differ), while rendering
//! and width computation always go through its string form.
//!
//! ```
//! use simple_table::item::Item;
//!
//! assert_eq!(Item::from(42).to_string(), "42");
//! assert_eq!(Item::from("Z80").to_string(), "Z80");
//! assert_eq!(Item::from(1.5).to_string(), "1.5");
//! assert_ne!(Item::from(1), Item::from("1"));
//! ```

use std::fmt;

use crate::cells;

/// A value that can be placed in a table cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    /// Plain text.
    Text(String),
    /// Signed integer.
    Int(i64),
    /// Floating point number.
    Float(f64),
    /// Boolean.
    Bool(bool),
}

impl Item {
    /// The empty-string item used to pad ragged columns.
    #[must_use]
    pub fn empty() -> Self {
        Self::Text(String::new())
    }

    /// Stringify any displayable value into a text item.
    #[must_use]
    pub fn display(value: impl fmt::Display) -> Self {
        Self::Text(value.to_string())
    }

    /// Width of the stringified item in characters.
    #[must_use]
    pub fn width(&self) -> usize {
        match self {
            Self::Text(text) => cells::cell_len(text),
            other => cells::cell_len(&other.to_string()),
        }
    }

    /// Literal form of the item: text is single-quoted, everything else is
    /// shown as displayed.
    #[must_use]
    pub fn repr(&self) -> String {
        match self {
            Self::Text(text) => format!("'{text}'"),
            other => other.to_string(),
        }
    }
}

impl Default for Item {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.pad(text),
            Self::Int(value) => f.pad(&value.to_string()),
            Self::Float(value) => f.pad(&float_text(*value)),
            Self::Bool(value) => f.pad(if *value { "True" } else { "False" }),
        }
    }
}

/// Shortest round-trip text of a float with a signed, two-digit exponent
/// (`1e+16`, `1.5e-05`) and lowercase `nan`/`inf`.
fn float_text(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    // Debug keeps the fractional part of whole numbers ("1.0", not "1") and
    // switches to exponent form below 1e-4 and from 1e16 up.
    let text = format!("{value:?}");
    let Some((mantissa, exponent)) = text.split_once('e') else {
        return text;
    };
    let (sign, digits) = exponent
        .strip_prefix('-')
        .map_or(('+', exponent), |digits| ('-', digits));
    format!("{mantissa}e{sign}{digits:0>2}")
}

impl From<&str> for Item {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Item {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for Item {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<char> for Item {
    fn from(value: char) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<bool> for Item {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f32> for Item {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for Item {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

macro_rules! item_from_small_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Item {
                fn from(value: $ty) -> Self {
                    Self::Int(i64::from(value))
                }
            }
        )*
    };
}

item_from_small_int!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! item_from_wide_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Item {
                fn from(value: $ty) -> Self {
                    i64::try_from(value).map_or_else(|_| Self::display(value), Self::Int)
                }
            }
        )*
    };
}

item_from_wide_int!(u64, usize, isize, i128, u128);
