//! In-memory grid backend.

use std::collections::BTreeMap;

use focos_grid_models::CellAddress;

use crate::Grid;

/// A [`Grid`] whose cells are inserted directly.
///
/// Cells pushed to the same address are kept in insertion order, which
/// stands in for document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryGrid {
    cells: BTreeMap<CellAddress, Vec<String>>,
}

impl MemoryGrid {
    /// Creates an empty grid.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a cell at `addr`. The text is trimmed on insertion.
    pub fn push(&mut self, addr: CellAddress, text: &str) {
        self.cells
            .entry(addr)
            .or_default()
            .push(text.trim().to_owned());
    }

    /// Appends a cell at `addr` and returns the grid.
    #[must_use]
    pub fn with_cell(mut self, addr: CellAddress, text: &str) -> Self {
        self.push(addr, text);
        self
    }

    /// Appends a whole row of cells starting at column 0.
    #[must_use]
    pub fn with_row(mut self, row: u32, texts: &[&str]) -> Self {
        for (col, text) in (0..).zip(texts) {
            self.push(CellAddress::new(row, col), text);
        }
        self
    }

    /// Number of distinct addresses holding at least one cell.
    #[must_use]
    pub fn address_count(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if the grid holds no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl Grid for MemoryGrid {
    fn cells(&self, addr: CellAddress) -> &[String] {
        self.cells.get(&addr).map(Vec::as_slice).unwrap_or_default()
    }
}
