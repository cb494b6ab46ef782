#![allow(dead_code)]

use pdf_tableset::layout::{FontFace, FontMetrics, FontPair, Margins};
use pdf_tableset::pagesize::PageSize;
use pdf_tableset::{Canvas, Colour, PDFError, Pt, Rect, Surface};

/// Every glyph is `advance` units wide on a 1000 unit em
pub struct MonoFont {
    pub advance: u16,
}

impl FontMetrics for MonoFont {
    fn glyph_width(&self, ch: char) -> Result<u16, PDFError> {
        if ch.is_control() {
            Err(PDFError::MissingGlyph(ch))
        } else {
            Ok(self.advance)
        }
    }

    fn units_per_em(&self) -> u16 {
        1000
    }

    fn line_height(&self) -> i32 {
        900
    }
}

pub fn fonts<'a>(regular: &'a MonoFont, bold: &'a MonoFont) -> FontPair<'a, char> {
    FontPair::new(FontFace::new('r', regular), FontFace::new('b', bold))
}

#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub text: String,
    pub font: Option<(char, Pt)>,
    pub fill: Option<Colour>,
    pub x: Pt,
    pub y: Pt,
}

#[derive(Debug, Default)]
pub struct Sheet {
    pub size: Option<PageSize>,
    pub texts: Vec<Text>,
    pub lines: Vec<((Pt, Pt), (Pt, Pt), Option<Colour>)>,
    pub images: Vec<(&'static str, Rect)>,
    font: Option<(char, Pt)>,
    fill: Option<Colour>,
    stroke: Option<Colour>,
}

impl Canvas for Sheet {
    type Font = char;
    type Image = &'static str;

    fn set_font(&mut self, font: char, size: Pt) {
        self.font = Some((font, size));
    }

    fn set_fill_colour(&mut self, colour: Colour) {
        self.fill = Some(colour);
    }

    fn set_line_colour(&mut self, colour: Colour) {
        self.stroke = Some(colour);
    }

    fn draw_text(&mut self, text: &str, x: Pt, y: Pt) {
        self.texts.push(Text {
            text: text.to_string(),
            font: self.font,
            fill: self.fill,
            x,
            y,
        });
    }

    fn draw_line(&mut self, from: (Pt, Pt), to: (Pt, Pt)) {
        self.lines.push((from, to, self.stroke));
    }

    fn draw_image(&mut self, image: &'static str, area: Rect) {
        self.images.push((image, area));
    }
}

#[derive(Debug, Default)]
pub struct Binder {
    pub sheets: Vec<Sheet>,
}

impl Surface for Binder {
    type Canvas = Sheet;

    fn new_page(&mut self, size: PageSize, _margins: &Margins) -> usize {
        self.sheets.push(Sheet {
            size: Some(size),
            ..Default::default()
        });
        self.sheets.len() - 1
    }

    fn page_mut(&mut self, index: usize) -> Option<&mut Sheet> {
        self.sheets.get_mut(index)
    }

    fn page_count(&self) -> usize {
        self.sheets.len()
    }
}
