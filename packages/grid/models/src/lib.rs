#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Cell addressing types for the hotspot data grids.
//!
//! The published hotspot tables tag every data cell with a class attribute
//! of the form `data row{R} col{C}`. [`CellAddress`] is the typed form of
//! that label and owns the codec in both directions.

use serde::{Deserialize, Serialize};

/// HTML tag name of a data cell.
pub const DATA_CELL_TAG: &str = "td";

/// Class token shared by every data cell, preceding the row/column tokens.
pub const DATA_CELL_CLASS: &str = "data";

/// A zero-based (row, column) position in a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CellAddress {
    /// Zero-based row index.
    pub row: u32,
    /// Zero-based column index.
    pub col: u32,
}

impl CellAddress {
    /// Creates a new address.
    #[must_use]
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Renders the full class attribute value carried by the cell at this
    /// address, e.g. `"data row3 col11"`.
    #[must_use]
    pub fn class_label(&self) -> String {
        format!("{DATA_CELL_CLASS} row{} col{}", self.row, self.col)
    }

    /// Parses a class attribute value produced by [`Self::class_label`].
    ///
    /// The value must consist of the `data` token followed by one `row{R}`
    /// and one `col{C}` token, with no leading zeros on either number.
    /// Tokens are separated by any ASCII whitespace, as in an HTML class
    /// list.
    #[must_use]
    pub fn parse_class_label(label: &str) -> Option<Self> {
        let mut tokens = label.split_ascii_whitespace();

        if tokens.next()? != DATA_CELL_CLASS {
            return None;
        }
        let row = parse_index(tokens.next()?.strip_prefix("row")?)?;
        let col = parse_index(tokens.next()?.strip_prefix("col")?)?;

        if tokens.next().is_some() {
            return None;
        }

        Some(Self { row, col })
    }
}

impl std::fmt::Display for CellAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "row{} col{}", self.row, self.col)
    }
}

/// Parses a decimal index with no sign and no leading zeros.
fn parse_index(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if s.len() > 1 && s.starts_with('0') {
        return None;
    }
    s.parse().ok()
}
