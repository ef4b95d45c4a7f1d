#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Grid extraction over rendered hotspot tables.
//!
//! A [`Grid`] is a sparse, read-only table addressed by [`CellAddress`].
//! Absent addresses are normal: every lookup answers `None` rather than
//! failing. Two backends are provided:
//!
//! * [`HtmlGrid`] indexes the data cells of a published HTML page.
//! * [`MemoryGrid`] holds cells built directly in memory.
//!
//! Source pages sometimes emit more than one cell for the same address, so
//! the trait exposes every cell at an address in document order. [`lookup`]
//! keeps only the first; [`lookup_all`] keeps every numeric one.

pub mod html;
pub mod memory;

pub use focos_grid_models::CellAddress;
pub use html::HtmlGrid;
pub use memory::MemoryGrid;

/// A sparse table of trimmed cell texts.
pub trait Grid {
    /// Returns the trimmed text of every cell at `addr`, in document order.
    ///
    /// An empty slice means the address does not exist in this grid.
    fn cells(&self, addr: CellAddress) -> &[String];
}

/// Parses a hotspot count.
///
/// The trimmed text must be a non-empty run of ASCII digits. Signs,
/// separators, decimals and values overflowing `u64` are all rejected so
/// that malformed cells read as absent, never as zero.
#[must_use]
pub fn parse_count(text: &str) -> Option<u64> {
    let text = text.trim();
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

/// Returns the count at `addr`, or `None` when no usable value exists.
///
/// When several cells share the address the first one in document order
/// wins, even if it is non-numeric and a later duplicate is not.
#[must_use]
pub fn lookup(grid: &(impl Grid + ?Sized), addr: CellAddress) -> Option<u64> {
    let first = grid.cells(addr).first()?;
    let value = parse_count(first);
    if value.is_none() {
        log::trace!("Non-numeric cell at {addr}: {first:?}");
    }
    value
}

/// Returns every numeric count at `addr` in document order.
///
/// Non-numeric duplicates are skipped.
#[must_use]
pub fn lookup_all(grid: &(impl Grid + ?Sized), addr: CellAddress) -> Vec<u64> {
    grid.cells(addr)
        .iter()
        .filter_map(|text| {
            let value = parse_count(text);
            if value.is_none() {
                log::trace!("Skipping non-numeric cell at {addr}: {text:?}");
            }
            value
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(row: u32, col: u32) -> CellAddress {
        CellAddress::new(row, col)
    }

    #[test]
    fn parses_plain_digits() {
        assert_eq!(parse_count("0"), Some(0));
        assert_eq!(parse_count("1234"), Some(1234));
        assert_eq!(parse_count("  87\n"), Some(87));
    }

    #[test]
    fn rejects_non_integer_text() {
        for text in ["", "   ", "-", "-3", "+3", "1.5", "1,204", "1 204", "n/d", "12a"] {
            assert_eq!(parse_count(text), None, "{text:?} should be absent");
        }
    }

    #[test]
    fn rejects_overflowing_count() {
        assert_eq!(parse_count("99999999999999999999999"), None);
    }

    #[test]
    fn missing_address_is_absent_not_zero() {
        let grid = MemoryGrid::new().with_cell(at(0, 0), "5");
        assert_eq!(lookup(&grid, at(0, 1)), None);
        assert_eq!(lookup(&grid, at(7, 0)), None);
        assert!(lookup_all(&grid, at(7, 0)).is_empty());
    }

    #[test]
    fn non_numeric_cell_is_absent() {
        let grid = MemoryGrid::new().with_cell(at(1, 2), "-");
        assert_eq!(lookup(&grid, at(1, 2)), None);
    }

    #[test]
    fn first_duplicate_wins() {
        let grid = MemoryGrid::new()
            .with_cell(at(1, 2), "40")
            .with_cell(at(1, 2), "99");
        assert_eq!(lookup(&grid, at(1, 2)), Some(40));
    }

    #[test]
    fn non_numeric_first_duplicate_hides_later_values() {
        let grid = MemoryGrid::new()
            .with_cell(at(1, 2), "n/d")
            .with_cell(at(1, 2), "99");
        assert_eq!(lookup(&grid, at(1, 2)), None);
    }

    #[test]
    fn lookup_all_keeps_numeric_duplicates_in_order() {
        let grid = MemoryGrid::new()
            .with_cell(at(30, 4), "10")
            .with_cell(at(30, 4), "x")
            .with_cell(at(30, 4), "30")
            .with_cell(at(30, 4), "20");
        assert_eq!(lookup_all(&grid, at(30, 4)), vec![10, 30, 20]);
    }
}
