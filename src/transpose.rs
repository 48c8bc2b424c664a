//! Row/column exchange for table data.
//!
//! Columns may have unequal lengths. Both [`zip_longest`] and [`transpose`]
//! pad the short columns with the empty-string item, so a ragged table
//! comes out rectangular. That padding cannot be told apart from a real
//! empty string afterwards: transposing a ragged table twice yields the
//! padded shape, not the original one.

use crate::item::Item;

/// Zip columns positionally into rows.
///
/// Row `i` holds item `i` of every column, or the empty-string item where a
/// column is shorter than `i + 1`. The number of rows is the length of the
/// longest column.
#[must_use]
pub fn zip_longest(columns: &[Vec<Item>]) -> Vec<Vec<Item>> {
    let row_count = columns.iter().map(Vec::len).max().unwrap_or(0);
    (0..row_count)
        .map(|index| {
            columns
                .iter()
                .map(|column| column.get(index).cloned().unwrap_or_default())
                .collect()
        })
        .collect()
}

/// Exchange rows and columns, carrying the header along.
///
/// Without a header the columns are simply zipped into rows, which become
/// the new columns.
///
/// With a header every label is first pushed onto the front of the column
/// at the same position; labels past the last column start new one-item
/// columns. After zipping, the first item of each new column becomes its
/// header label and the rest its data.
#[must_use]
pub fn transpose(
    mut columns: Vec<Vec<Item>>,
    header: Option<Vec<Item>>,
) -> (Vec<Vec<Item>>, Option<Vec<Item>>) {
    let Some(header) = header else {
        return (zip_longest(&columns), None);
    };

    for (index, label) in header.into_iter().enumerate() {
        match columns.get_mut(index) {
            Some(column) => column.insert(0, label),
            None => columns.push(vec![label]),
        }
    }

    let rows = zip_longest(&columns);
    let mut new_header = Vec::with_capacity(rows.len());
    let mut new_columns = Vec::with_capacity(rows.len());
    for row in rows {
        let mut items = row.into_iter();
        new_header.push(items.next().unwrap_or_default());
        new_columns.push(items.collect());
    }

    (new_columns, Some(new_header))
}
