//! Test doubles for the layout engine: a font with uniform glyph widths and a canvas that
//! records what was drawn on it.

use super::{FontFace, FontMetrics, FontPair, Margins};
use crate::canvas::{Canvas, Surface};
use crate::colour::Colour;
use crate::error::PDFError;
use crate::pagesize::PageSize;
use crate::rect::Rect;
use crate::units::Pt;

pub(crate) struct FixedWidthFont {
    advance: u16,
    line_height: i32,
    missing: Vec<char>,
}

impl FixedWidthFont {
    pub(crate) fn new(advance: u16) -> Self {
        FixedWidthFont {
            advance,
            line_height: 900,
            missing: Vec::new(),
        }
    }

    pub(crate) fn with_line_height(mut self, line_height: i32) -> Self {
        self.line_height = line_height;
        self
    }

    pub(crate) fn without(mut self, ch: char) -> Self {
        self.missing.push(ch);
        self
    }
}

impl FontMetrics for FixedWidthFont {
    fn glyph_width(&self, ch: char) -> Result<u16, PDFError> {
        if self.missing.contains(&ch) {
            Err(PDFError::MissingGlyph(ch))
        } else {
            Ok(self.advance)
        }
    }

    fn units_per_em(&self) -> u16 {
        1000
    }

    fn line_height(&self) -> i32 {
        self.line_height
    }
}

pub(crate) fn font_pair<'a>(
    regular: &'a FixedWidthFont,
    bold: &'a FixedWidthFont,
) -> FontPair<'a, &'static str> {
    FontPair::new(
        FontFace::new("regular", regular),
        FontFace::new("bold", bold),
    )
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Op {
    Font(&'static str, Pt),
    Fill(Colour),
    Stroke(Colour),
    Text(String, Pt, Pt),
    Line((Pt, Pt), (Pt, Pt)),
    Image(u32, Rect),
}

#[derive(Debug, Default)]
pub(crate) struct RecordingCanvas {
    pub(crate) size: Option<PageSize>,
    pub(crate) ops: Vec<Op>,
}

impl RecordingCanvas {
    pub(crate) fn texts(&self) -> Vec<(String, Pt, Pt)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Text(text, x, y) => Some((text.clone(), *x, *y)),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn lines(&self) -> Vec<((Pt, Pt), (Pt, Pt))> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Line(from, to) => Some((*from, *to)),
                _ => None,
            })
            .collect()
    }
}

impl Canvas for RecordingCanvas {
    type Font = &'static str;
    type Image = u32;

    fn set_font(&mut self, font: Self::Font, size: Pt) {
        self.ops.push(Op::Font(font, size));
    }

    fn set_fill_colour(&mut self, colour: Colour) {
        self.ops.push(Op::Fill(colour));
    }

    fn set_line_colour(&mut self, colour: Colour) {
        self.ops.push(Op::Stroke(colour));
    }

    fn draw_text(&mut self, text: &str, x: Pt, y: Pt) {
        self.ops.push(Op::Text(text.to_string(), x, y));
    }

    fn draw_line(&mut self, from: (Pt, Pt), to: (Pt, Pt)) {
        self.ops.push(Op::Line(from, to));
    }

    fn draw_image(&mut self, image: Self::Image, area: Rect) {
        self.ops.push(Op::Image(image, area));
    }
}

#[derive(Debug, Default)]
pub(crate) struct RecordingSurface {
    pub(crate) pages: Vec<RecordingCanvas>,
}

impl Surface for RecordingSurface {
    type Canvas = RecordingCanvas;

    fn new_page(&mut self, size: PageSize, _margins: &Margins) -> usize {
        self.pages.push(RecordingCanvas {
            size: Some(size),
            ops: Vec::new(),
        });
        self.pages.len() - 1
    }

    fn page_mut(&mut self, index: usize) -> Option<&mut RecordingCanvas> {
        self.pages.get_mut(index)
    }

    fn page_count(&self) -> usize {
        self.pages.len()
    }
}
