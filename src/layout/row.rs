use super::cell::{Cell, CellOptions};
use super::metrics::FontPair;
use crate::canvas::Canvas;
use crate::units::Pt;
use serde::{Deserialize, Serialize};

/// An ordered list of [`Cell`]s sharing one horizontal band of a table. Cells are laid out
/// left to right in insertion order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Row {
    #[serde(default)]
    pub cells: Vec<Cell>,
}

/// Where a cell lands within a table's column widths
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CellSlot {
    /// First column the cell occupies
    pub column: usize,
    /// Number of columns the cell occupies
    pub span: usize,
}

impl Row {
    pub fn new() -> Row {
        Row::default()
    }

    /// Append a cell to the end of the row
    pub fn add_cell<S: ToString>(&mut self, text: S, options: CellOptions) -> &mut Self {
        self.cells.push(Cell::with_options(text, options));
        self
    }

    pub fn push(&mut self, cell: Cell) -> &mut Self {
        self.cells.push(cell);
        self
    }

    /// Number of cells in the row
    pub fn column_count(&self) -> usize {
        self.cells.len()
    }

    /// Resolve which columns each cell occupies. Colspans are only honoured when
    /// `spanning` is set. A span is clamped so that it, and one column for each cell after
    /// it, fits within `columns`; the next cell starts after the clamped span. When the row
    /// has more cells than `columns`, the surplus cells share the last column.
    pub fn slots(&self, columns: usize, spanning: bool) -> Vec<CellSlot> {
        let count = self.cells.len();
        let mut column = 0usize;
        self.cells
            .iter()
            .enumerate()
            .map(|(index, cell)| {
                let declared = if spanning { cell.span() } else { 1 };
                let start = column.min(columns.saturating_sub(1));
                let after = count - index - 1;
                let available = columns.saturating_sub(start + after).max(1);
                let span = declared.min(available).max(1);
                if span < declared {
                    log::debug!("clamping colspan of {declared} to {span} at column {start}");
                }
                column = start + span;
                CellSlot {
                    column: start,
                    span,
                }
            })
            .collect()
    }

    /// Render every cell starting at `x`, returning the cursor moved down past the row.
    ///
    /// Each cell is given the summed widths of the columns it spans. The cursor moves down
    /// by the height of the tallest cell.
    pub fn render<C: Canvas>(
        &self,
        canvas: &mut C,
        fonts: &FontPair<'_, C::Font>,
        column_widths: &[Pt],
        spanning: bool,
        x: Pt,
        y: Pt,
    ) -> Pt {
        let mut cursor_x = x;
        let mut tallest = Pt(0.0);

        for (cell, slot) in self
            .cells
            .iter()
            .zip(self.slots(column_widths.len(), spanning))
        {
            let width: Pt = column_widths
                .iter()
                .skip(slot.column)
                .take(slot.span)
                .copied()
                .sum();
            let rendered = cell.render(canvas, fonts, cursor_x, y, width);
            cursor_x = rendered.next_x;
            tallest = tallest.max(rendered.height);
        }

        y - tallest
    }
}
