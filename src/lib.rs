//! # simple_table
//!
//! Fixed-width plain-text tables: columns of items, an optional header row
//! and an optional title, drawn with rule and border characters, plus an
//! in-place transpose.
//!
//! ## Quick Start
//!
//! ```rust
//! use simple_table::prelude::*;
//!
//! let mut table = Table::new([
//!     vec!["CPU", "RAM"],
//!     vec!["Z80", "1KB"],
//!     vec!["Z80", "48KB"],
//! ])
//! .header(["", "ZX-81", "ZX-Spectrum"]);
//!
//! table.set(TableOptions::new().title("Computers of the past").column_width(12));
//! println!("{table}");
//!
//! table.transpose();
//! println!("{table}");
//! ```
//!
//! ## Core Concepts
//!
//! - **Item**: a stringifiable cell value
//! - **Table**: columns of items with optional header and title
//! - **TableOptions**: title, header and column width, applied at
//!   construction or later with [`Table::set`]
//! - **Value**: runtime-typed input, validated into a [`Table`] or
//!   [`TableOptions`] with a [`TableError`] on shape mismatches
//!
//! ## Concurrency
//!
//! Tables are plain owned values without internal synchronization. They are
//! not safe for concurrent mutation; share them read-only or hand them off.

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod border;
pub mod cells;
pub mod error;
pub mod item;
pub mod logging;
pub mod measure;
pub mod options;
pub mod sync;
pub mod table;
pub mod transpose;
pub mod value;

/// Re-exports for convenient usage
pub mod prelude {
    pub use crate::border::{ASCII, BorderChars, HEAVY, UNICODE};
    pub use crate::error::TableError;
    pub use crate::item::Item;
    pub use crate::measure::TableMeasurement;
    pub use crate::options::TableOptions;
    pub use crate::table::Table;
    pub use crate::value::Value;
}

// Re-export key types at crate root
pub use error::TableError;
pub use item::Item;
pub use options::TableOptions;
pub use table::Table;
pub use value::Value;
