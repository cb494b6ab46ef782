use super::cell::{Cell, CellOptions};
use super::columns::{fit_to_width, justify, widen};
use super::cursor::{Cursor, PageGeometry};
use super::metrics::FontPair;
use super::row::Row;
use crate::canvas::{Canvas, Surface};
use crate::error::PDFError;
use crate::units::Pt;
use serde::{Deserialize, Serialize};

/// Horizontal placement of a whole table within the usable width
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TableAlign {
    /// Flush against the left margin
    #[default]
    Left,
    /// Centered between the side margins
    Center,
    /// Columns widened evenly until the table fills the usable width
    Justify,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct TableOptions {
    pub align: TableAlign,
}

/// Rows sharing one set of column widths. Rows render in insertion order.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Table {
    #[serde(default)]
    pub rows: Vec<Row>,
    #[serde(default)]
    pub options: TableOptions,
}

impl Table {
    pub fn new(options: TableOptions) -> Table {
        Table {
            rows: Vec::new(),
            options,
        }
    }

    /// Append an empty row and return it for filling
    pub fn add_row(&mut self) -> &mut Row {
        self.rows.push(Row::new());
        let index = self.rows.len() - 1;
        &mut self.rows[index]
    }

    /// Append a row holding a single empty cell, one line tall
    pub fn add_spacer_row(&mut self) -> &mut Self {
        self.add_row().add_cell("", CellOptions::default());
        self
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// The largest number of cells in any row
    pub fn max_cols(&self) -> usize {
        self.rows.iter().map(Row::column_count).max().unwrap_or(0)
    }

    /// Colspans only take effect once a table has more than one row
    pub fn spans_columns(&self) -> bool {
        self.rows.len() > 1
    }

    /// Number of logical columns, the cell count of the widest row. Colspans never add
    /// columns: a span is clamped so the row it sits in still fits, see [`Row::slots`].
    pub fn column_count(&self) -> usize {
        self.max_cols()
    }

    /// Resolve the width of every logical column.
    ///
    /// Each column starts at the widest natural width of the cells that land in it plus
    /// padding. A spanned cell asks each column it covers for its natural width times its
    /// colspan. The widths are then shrunk to fit `max_width` and, for justified tables,
    /// widened to fill it.
    pub fn column_widths<F: Copy>(
        &self,
        fonts: &FontPair<'_, F>,
        max_width: Pt,
    ) -> Result<Vec<Pt>, PDFError> {
        let columns = self.column_count();
        let spanning = self.spans_columns();
        let mut widths: Vec<Pt> = Vec::with_capacity(columns);

        for row in self.rows.iter() {
            for (cell, slot) in row.cells.iter().zip(row.slots(columns, spanning)) {
                let natural = cell.natural_width(fonts);
                let required = if slot.span > 1 {
                    natural * slot.span as f32
                } else {
                    natural
                };
                for column in slot.column..slot.column + slot.span {
                    widen(&mut widths, column, required);
                }
            }
        }

        fit_to_width(&mut widths, max_width)?;
        if self.options.align == TableAlign::Justify {
            justify(&mut widths, max_width);
        }
        Ok(widths)
    }

    /// Render every row, starting at `cursor`, and return the cursor below the last row.
    ///
    /// Before each row the cursor is checked against the page's break threshold, so a row
    /// that starts too low moves to a fresh page. Rows themselves are never split.
    pub fn render<S: Surface>(
        &self,
        surface: &mut S,
        fonts: &FontPair<'_, <S::Canvas as Canvas>::Font>,
        geometry: &PageGeometry,
        cursor: Cursor,
    ) -> Result<Cursor, PDFError> {
        let usable = geometry.usable_width();
        let widths = self.column_widths(fonts, usable)?;
        let spanning = self.spans_columns();

        let x = match self.options.align {
            TableAlign::Center => {
                let table_width: Pt = widths.iter().copied().sum();
                geometry.margins.left + ((usable - table_width) / 2.0).max(Pt(0.0))
            }
            TableAlign::Left | TableAlign::Justify => geometry.margins.left,
        };

        let mut cursor = cursor;
        for row in self.rows.iter() {
            cursor = geometry.break_if_needed(surface, cursor);
            let canvas = surface
                .page_mut(cursor.page)
                .ok_or(PDFError::PageMissing)?;
            cursor.y = row.render(canvas, fonts, &widths, spanning, x, cursor.y);
        }

        Ok(cursor)
    }
}

impl From<Vec<Row>> for Table {
    fn from(rows: Vec<Row>) -> Self {
        Table {
            rows,
            options: TableOptions::default(),
        }
    }
}

impl FromIterator<Vec<Cell>> for Table {
    fn from_iter<I: IntoIterator<Item = Vec<Cell>>>(iter: I) -> Self {
        iter.into_iter().map(|cells| Row { cells }).collect::<Vec<_>>().into()
    }
}
