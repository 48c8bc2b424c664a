//! Character cell width calculations.
//!
//! Widths are plain character counts: every `char` occupies one cell.
//! Justification pads with spaces and never truncates, so text wider than
//! the requested width is returned unchanged.

/// Get the cell width of a string.
#[must_use]
pub fn cell_len(text: &str) -> usize {
    text.chars().count()
}

/// Right-justify `text` within `width` cells.
#[must_use]
pub fn right_justify(text: &str, width: usize) -> String {
    format!("{text:>width$}")
}

/// Center `text` within `width` cells.
///
/// When the padding is odd the extra space goes to the right.
#[must_use]
pub fn center(text: &str, width: usize) -> String {
    format!("{text:^width$}")
}

/// Repeat a single character to fill `width` cells.
#[must_use]
pub fn fill(ch: char, width: usize) -> String {
    std::iter::repeat_n(ch, width).collect()
}
