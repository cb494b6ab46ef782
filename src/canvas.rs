//! The drawing surface that table layout renders onto.
//!
//! Layout never talks to a PDF writer directly: it issues drawing instructions to a
//! [`Canvas`] (one per page) and asks a [`Surface`] for new pages when the current one
//! fills up. [`Page`](crate::Page) and `Vec<Page>` are the PDF-backed implementations;
//! anything else that records or paints these instructions can stand in for them.

use crate::colour::Colour;
use crate::layout::Margins;
use crate::pagesize::PageSize;
use crate::rect::Rect;
use crate::units::Pt;

/// Drawing primitives for a single page. Coordinates are PDF user space: the origin is the
/// bottom-left corner of the page and `y` grows upwards.
pub trait Canvas {
    /// Handle used to select a font when drawing text
    type Font: Copy;
    /// Handle used to refer to an image registered elsewhere
    type Image: Copy;

    fn set_font(&mut self, font: Self::Font, size: Pt);
    /// Colour used to fill text
    fn set_fill_colour(&mut self, colour: Colour);
    /// Colour used to stroke lines
    fn set_line_colour(&mut self, colour: Colour);
    /// Draw a single line of text with its baseline starting at `(x, y)`
    fn draw_text(&mut self, text: &str, x: Pt, y: Pt);
    fn draw_line(&mut self, from: (Pt, Pt), to: (Pt, Pt));
    /// Draw an image stretched to fill `area`
    fn draw_image(&mut self, image: Self::Image, area: Rect);
}

/// An ordered collection of pages that grows as layout proceeds. Pages are never removed or
/// reordered during layout.
pub trait Surface {
    type Canvas: Canvas;

    /// Append a new blank page, returning its 0-based index
    fn new_page(&mut self, size: PageSize, margins: &Margins) -> usize;

    /// Access a previously allocated page
    fn page_mut(&mut self, index: usize) -> Option<&mut Self::Canvas>;

    fn page_count(&self) -> usize;
}
