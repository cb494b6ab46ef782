//! Table layout: measuring and wrapping text, resolving column widths and flowing rows
//! across pages.
//!
//! Layout is built from three nested pieces:
//!
//! - [`Cell`] - a piece of text with its presentation options. A cell wraps its text to the
//!   width it is given and reports how tall it ended up.
//! - [`Row`] - cells laid out left to right. A row is as tall as its tallest cell.
//! - [`Table`] - rows sharing one set of column widths, resolved once per table from the
//!   natural widths of all of its cells and fitted to the usable page width.
//!
//! Drawing goes through the [`Canvas`](crate::Canvas) and [`Surface`](crate::Surface) traits,
//! and text is measured through [`FontMetrics`], so layout can run against anything that
//! implements them. The vertical position on the page is carried by a [`Cursor`] that every
//! render call takes and hands back; a [`PageGeometry`] decides when it has run out of page.
//!
//! # Example
//!
//! ```no_run
//! use pdf_tableset::layout::{Cell, FontFace, FontPair, Margins, PageGeometry, Table, TableAlign};
//! use pdf_tableset::{pagesize, Document, Font, Page, Pt, StandardFont};
//!
//! let mut doc = Document::default();
//! let regular = doc.add_font(Font::Standard(StandardFont::Helvetica));
//! let bold = doc.add_font(Font::Standard(StandardFont::HelveticaBold));
//! let fonts = FontPair::new(
//!     FontFace::new(regular, &doc.fonts[regular]),
//!     FontFace::new(bold, &doc.fonts[bold]),
//! );
//!
//! let mut table: Table = vec![
//!     vec![Cell::new("Item").bold(), Cell::new("Amount").bold()],
//!     vec![Cell::new("Widgets"), Cell::new("12")],
//! ]
//! .into_iter()
//! .collect();
//! table.options.align = TableAlign::Justify;
//!
//! let geometry = PageGeometry::new(pagesize::LETTER, Margins::symmetric(Pt(54.0), Pt(36.0)));
//! let mut pages: Vec<Page> = Vec::new();
//! let start = geometry.new_page(&mut pages);
//! table.render(&mut pages, &fonts, &geometry, start).expect("table fits");
//!
//! doc.add_pages(pages);
//! doc.save("table.pdf").expect("can write pdf");
//! ```

mod cell;
mod columns;
mod cursor;
mod margins;
mod metrics;
mod row;
mod table;
mod wrap;

#[cfg(test)]
pub(crate) mod testing;

pub use cell::*;
pub use columns::{fit_to_width, justify, COLUMN_PADDING, MAX_FIT_ITERATIONS};
pub use cursor::*;
pub use margins::*;
pub use metrics::*;
pub use row::*;
pub use table::*;
pub use wrap::*;
