//! HTML grid backend.
//!
//! The hotspot pages are rendered tables whose data cells look like
//! `<td class="data row3 col11">412</td>`. [`HtmlGrid::parse`] walks the
//! document once and indexes every such cell by its address, so later
//! lookups never re-scan the markup.

use focos_grid_models::{CellAddress, DATA_CELL_TAG};
use scraper::{ElementRef, Html};

use crate::{Grid, MemoryGrid};

/// A [`Grid`] built from the data cells of an HTML document.
#[derive(Debug, Clone, Default)]
pub struct HtmlGrid {
    cells: MemoryGrid,
    ignored: usize,
}

impl HtmlGrid {
    /// Parses `markup` and indexes its data cells.
    ///
    /// Only `td` elements whose class attribute is a data-cell label (see
    /// [`CellAddress::parse_class_label`]) are indexed. Header cells,
    /// blank cells and anything else are counted in [`Self::ignored`].
    #[must_use]
    pub fn parse(markup: &str) -> Self {
        let document = Html::parse_document(markup);

        let mut cells = MemoryGrid::new();
        let mut ignored = 0;

        for element in document
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
            .filter(|el| el.value().name() == DATA_CELL_TAG)
        {
            let Some(addr) = element
                .value()
                .attr("class")
                .and_then(CellAddress::parse_class_label)
            else {
                ignored += 1;
                continue;
            };

            let text: String = element.text().collect();
            cells.push(addr, &text);
        }

        log::debug!(
            "Indexed {} cell address(es), ignored {ignored} cell(s)",
            cells.address_count()
        );

        Self { cells, ignored }
    }

    /// Number of `td` elements that were not data cells.
    #[must_use]
    pub const fn ignored(&self) -> usize {
        self.ignored
    }

    /// Number of distinct addresses found in the document.
    #[must_use]
    pub fn address_count(&self) -> usize {
        self.cells.address_count()
    }
}

impl Grid for HtmlGrid {
    fn cells(&self, addr: CellAddress) -> &[String] {
        self.cells.cells(addr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{lookup, lookup_all};

    const PAGE: &str = r#"
        <html><body>
        <table id="T_hist">
          <thead>
            <tr><th class="blank level0"></th><th class="col_heading level0 col0">Janeiro</th></tr>
          </thead>
          <tbody>
            <tr>
              <th class="row_heading level0 row0">1999</th>
              <td class="data row0 col0"> 120 </td>
              <td class="data row0 col1">-</td>
            </tr>
            <tr>
              <th class="row_heading level0 row1">2000</th>
              <td class="data row1 col0">
                87
              </td>
              <td class="data row1 col1"><span>1</span>4</td>
            </tr>
            <tr>
              <td class="data row30 col0">100</td>
              <td class="data row30 col0">200</td>
              <td class="data  row2 col0">55</td>
              <td>7</td>
            </tr>
          </tbody>
        </table>
        </body></html>
    "#;

    fn at(row: u32, col: u32) -> CellAddress {
        CellAddress::new(row, col)
    }

    #[test]
    fn reads_trimmed_cell_text() {
        let grid = HtmlGrid::parse(PAGE);
        assert_eq!(lookup(&grid, at(0, 0)), Some(120));
        assert_eq!(lookup(&grid, at(1, 0)), Some(87));
    }

    #[test]
    fn joins_nested_text() {
        let grid = HtmlGrid::parse(PAGE);
        assert_eq!(lookup(&grid, at(1, 1)), Some(14));
    }

    #[test]
    fn placeholder_cell_is_absent() {
        let grid = HtmlGrid::parse(PAGE);
        assert_eq!(grid.cells(at(0, 1)), ["-".to_owned()]);
        assert_eq!(lookup(&grid, at(0, 1)), None);
    }

    #[test]
    fn keeps_duplicate_cells_in_document_order() {
        let grid = HtmlGrid::parse(PAGE);
        assert_eq!(lookup_all(&grid, at(30, 0)), vec![100, 200]);
        assert_eq!(lookup(&grid, at(30, 0)), Some(100));
    }

    #[test]
    fn ignores_cells_without_data_label() {
        let grid = HtmlGrid::parse(PAGE);
        // Only the bare <td> is not a data cell.
        assert_eq!(grid.ignored(), 1);
    }

    #[test]
    fn normalizes_class_whitespace() {
        let grid = HtmlGrid::parse(PAGE);
        assert_eq!(lookup(&grid, at(2, 0)), Some(55));

        let grid = HtmlGrid::parse(
            "<table><tr><td class=\" data row1 col3\">8</td>\
             <td class=\"data row1 col4\n\">9</td>\
             <td class=\"data row1 col5 extra\">10</td></tr></table>",
        );
        assert_eq!(lookup(&grid, at(1, 3)), Some(8));
        assert_eq!(lookup(&grid, at(1, 4)), Some(9));
        assert_eq!(lookup(&grid, at(1, 5)), None);
        assert_eq!(grid.ignored(), 1);
    }

    #[test]
    fn empty_document_has_no_cells() {
        let grid = HtmlGrid::parse("");
        assert_eq!(grid.address_count(), 0);
        assert_eq!(lookup(&grid, at(0, 0)), None);
    }
}
