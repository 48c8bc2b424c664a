//! Golden file (snapshot) tests for exact rendered output.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test golden_test
//!
//! # Update snapshots when intentional changes are made
//! cargo insta test --accept
//! ```

mod common;

use common::init_test_logging;
use simple_table::prelude::*;

fn computers() -> Table {
    let mut table = Table::new([
        vec![
            "CPU",
            "RAM",
            "Storage",
            "screen",
            "Disk OS",
            "Prog. language",
            "sound",
            "colors",
        ],
        vec!["Z80", "1KB", "Cassette", "TV", "", "Sinclair basic", "B/W"],
        vec![
            "Z80",
            "48KB",
            "Cassette",
            "TV",
            "",
            "Sinclair basic",
            "beeps",
            "16 colors?",
        ],
        vec![
            "Z80",
            "128KB",
            "3.5\" floppy",
            "Monitor",
            "MSX-DOS",
            "MSX-BASIC",
            "soundchip",
            "256 colors",
        ],
    ])
    .header(["", "ZX-81", "ZX-Spectrum", "MSX2"]);
    table.set(
        TableOptions::new()
            .column_width(14)
            .title("Computers of the past"),
    );
    table
}

#[test]
fn golden_computers() {
    init_test_logging();
    let table = computers();
    insta::assert_snapshot!("computers", table.render());
}

#[test]
fn golden_computers_transposed() {
    init_test_logging();
    let mut table = computers();
    table.transpose();
    insta::assert_snapshot!("computers_transposed", table.render());
}

#[test]
fn golden_header_and_title() {
    init_test_logging();
    let table = Table::new([vec!["Z80", "1KB"], vec!["Z80", "48KB"]])
        .header(["ZX-81", "ZX-Spectrum"])
        .title("Computers");
    insta::assert_snapshot!("header_and_title", table.render());
}

#[test]
fn golden_transposed_header_wider_than_columns() {
    init_test_logging();
    let mut table = Table::new([vec!["a", "b"], vec!["c"]]).header(["H1", "H2", "H3"]);
    table.transpose();
    insta::assert_snapshot!("transposed_header_wider_than_columns", table.render());
}

#[test]
fn golden_mixed_values_title() {
    init_test_logging();
    let table = Table::new([
        vec![Item::from(1), Item::from(2), Item::from(3)],
        vec![Item::from(4.5), Item::from(true)],
    ])
    .title("Mixed values in a long title");
    insta::assert_snapshot!("mixed_values_title", table.render());
}
