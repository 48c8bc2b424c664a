//! Value - dynamically typed table input.
//!
//! The typed API (`Table::new`, [`TableOptions`](crate::options::TableOptions)
//! setters) cannot be handed a value of the wrong shape. [`Value`] is the
//! boundary for input whose shape is only known at runtime, such as
//! keyword-style configuration or columns read from another source. Shape
//! errors surface when the value is converted, as a
//! [`TableError`](crate::error::TableError).

use crate::item::Item;

/// A scalar item or an ordered sequence of items.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A single item.
    Scalar(Item),
    /// An ordered sequence of items.
    Sequence(Vec<Item>),
}

impl Value {
    /// Build a sequence value from any iterable of items.
    pub fn sequence<T: Into<Item>>(items: impl IntoIterator<Item = T>) -> Self {
        Self::Sequence(items.into_iter().map(Into::into).collect())
    }

    /// Name of the value's type, as used in error messages.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Scalar(Item::Text(_)) => "string",
            Self::Scalar(Item::Int(_)) => "int",
            Self::Scalar(Item::Float(_)) => "float",
            Self::Scalar(Item::Bool(_)) => "bool",
            Self::Sequence(_) => "sequence",
        }
    }

    /// The items of a sequence value.
    #[must_use]
    pub fn as_sequence(&self) -> Option<&[Item]> {
        match self {
            Self::Sequence(items) => Some(items),
            Self::Scalar(_) => None,
        }
    }

    /// Take the items of a sequence value.
    #[must_use]
    pub fn into_sequence(self) -> Option<Vec<Item>> {
        match self {
            Self::Sequence(items) => Some(items),
            Self::Scalar(_) => None,
        }
    }
}

macro_rules! value_from_scalar {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::Scalar(Item::from(value))
                }
            }
        )*
    };
}

value_from_scalar!(&str, String, char, bool, f32, f64, i8, i16, i32, i64, u8, u16, u32, u64, usize);

impl From<Item> for Value {
    fn from(item: Item) -> Self {
        Self::Scalar(item)
    }
}

impl<T: Into<Item>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::sequence(items)
    }
}

impl<T: Into<Item>, const N: usize> From<[T; N]> for Value {
    fn from(items: [T; N]) -> Self {
        Self::sequence(items)
    }
}
