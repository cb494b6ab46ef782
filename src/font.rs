use crate::{
    layout::FontMetrics,
    refs::{ObjectReferences, RefType},
    PDFError,
};
use id_arena::Id;
use owned_ttf_parser::{AsFaceRef, Face, OwnedFace};
use pdf_writer::{types::FontFlags, Name, Pdf, Ref, Str};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Text is drawn one byte per character in `WinAnsiEncoding`; these are the first and last
/// codes given a width in the font dictionary
const FIRST_CODE: u8 = 32;
const LAST_CODE: u8 = 255;

/// The characters `WinAnsiEncoding` places in 0x80..0xA0, where it departs from Latin-1
const WIN_ANSI_EXTRAS: [(char, u8); 27] = [
    ('€', 0x80),
    ('‚', 0x82),
    ('ƒ', 0x83),
    ('„', 0x84),
    ('…', 0x85),
    ('†', 0x86),
    ('‡', 0x87),
    ('ˆ', 0x88),
    ('‰', 0x89),
    ('Š', 0x8a),
    ('‹', 0x8b),
    ('Œ', 0x8c),
    ('Ž', 0x8e),
    ('‘', 0x91),
    ('’', 0x92),
    ('“', 0x93),
    ('”', 0x94),
    ('•', 0x95),
    ('–', 0x96),
    ('—', 0x97),
    ('˜', 0x98),
    ('™', 0x99),
    ('š', 0x9a),
    ('›', 0x9b),
    ('œ', 0x9c),
    ('ž', 0x9e),
    ('Ÿ', 0x9f),
];

/// The `WinAnsiEncoding` code for `ch`, if it has one
pub fn win_ansi_code(ch: char) -> Option<u8> {
    match ch {
        ' '..='~' | '\u{a0}'..='\u{ff}' => Some(ch as u8),
        _ => WIN_ANSI_EXTRAS
            .iter()
            .find(|(extra, _)| *extra == ch)
            .map(|&(_, code)| code),
    }
}

fn win_ansi_char(code: u8) -> Option<char> {
    match code {
        0x20..=0x7e | 0xa0..=0xff => Some(code as char),
        _ => WIN_ANSI_EXTRAS
            .iter()
            .find(|(_, extra)| *extra == code)
            .map(|&(ch, _)| ch),
    }
}

/// Encode `text` for a text-showing operator. Characters the encoding lacks are drawn as `?`.
pub(crate) fn encode_text(text: &str) -> Vec<u8> {
    text.chars()
        .map(|ch| win_ansi_code(ch).unwrap_or(b'?'))
        .collect()
}

/// Font families available to every PDF viewer without embedding, as offered for report
/// text
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StandardFamily {
    Courier,
    Helvetica,
    #[default]
    Times,
}

impl StandardFamily {
    pub fn regular(self) -> StandardFont {
        match self {
            StandardFamily::Courier => StandardFont::Courier,
            StandardFamily::Helvetica => StandardFont::Helvetica,
            StandardFamily::Times => StandardFont::TimesRoman,
        }
    }

    pub fn bold(self) -> StandardFont {
        match self {
            StandardFamily::Courier => StandardFont::CourierBold,
            StandardFamily::Helvetica => StandardFont::HelveticaBold,
            StandardFamily::Times => StandardFont::TimesBold,
        }
    }
}

/// One of the standard PDF fonts, with its advance widths for printable ASCII
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StandardFont {
    Courier,
    CourierBold,
    Helvetica,
    HelveticaBold,
    TimesRoman,
    TimesBold,
}

// advance widths for ' '..='~', in thousandths of an em
#[rustfmt::skip]
const HELVETICA_WIDTHS: &[u16] = &[
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    278, 278, 584, 584, 584, 556, 1015,
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    278, 278, 278, 469, 556, 333,
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
    334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: &[u16] = &[
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    333, 333, 584, 584, 584, 611, 975,
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    333, 278, 333, 584, 556, 333,
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    389, 280, 389, 584,
];

#[rustfmt::skip]
const TIMES_ROMAN_WIDTHS: &[u16] = &[
    250, 333, 408, 500, 500, 833, 778, 180, 333, 333, 500, 564, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500,
    278, 278, 564, 564, 564, 444, 921,
    722, 667, 667, 722, 611, 556, 722, 722, 333, 389, 722, 611, 889,
    722, 722, 556, 722, 667, 556, 611, 722, 722, 944, 722, 722, 611,
    333, 278, 333, 469, 500, 333,
    444, 500, 444, 500, 444, 333, 500, 500, 278, 278, 500, 278, 778,
    500, 500, 500, 500, 333, 389, 278, 500, 500, 722, 500, 500, 444,
    480, 200, 480, 541,
];

#[rustfmt::skip]
const TIMES_BOLD_WIDTHS: &[u16] = &[
    250, 333, 555, 500, 500, 1000, 833, 278, 333, 333, 500, 570, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500,
    333, 333, 570, 570, 570, 500, 930,
    722, 667, 722, 722, 667, 611, 778, 778, 389, 500, 778, 667, 944,
    722, 778, 611, 778, 722, 556, 667, 722, 722, 1000, 722, 722, 667,
    333, 278, 333, 581, 500, 333,
    500, 556, 444, 556, 444, 333, 500, 556, 278, 333, 556, 278, 833,
    556, 500, 556, 556, 444, 389, 333, 556, 500, 722, 500, 500, 444,
    394, 220, 394, 520,
];

impl StandardFont {
    /// The `BaseFont` name viewers know the font by
    pub fn base_font(self) -> &'static str {
        match self {
            StandardFont::Courier => "Courier",
            StandardFont::CourierBold => "Courier-Bold",
            StandardFont::Helvetica => "Helvetica",
            StandardFont::HelveticaBold => "Helvetica-Bold",
            StandardFont::TimesRoman => "Times-Roman",
            StandardFont::TimesBold => "Times-Bold",
        }
    }

    /// Advance of `ch` in thousandths of an em. Only printable ASCII is measured.
    pub fn advance(self, ch: char) -> Option<u16> {
        if !(' '..='~').contains(&ch) {
            return None;
        }
        let index = ch as usize - ' ' as usize;
        match self {
            StandardFont::Courier | StandardFont::CourierBold => Some(600),
            StandardFont::Helvetica => HELVETICA_WIDTHS.get(index).copied(),
            StandardFont::HelveticaBold => HELVETICA_BOLD_WIDTHS.get(index).copied(),
            StandardFont::TimesRoman => TIMES_ROMAN_WIDTHS.get(index).copied(),
            StandardFont::TimesBold => TIMES_BOLD_WIDTHS.get(index).copied(),
        }
    }

    /// Ascender and descender, in thousandths of an em
    fn extents(self) -> (i32, i32) {
        match self {
            StandardFont::Courier | StandardFont::CourierBold => (629, -157),
            StandardFont::Helvetica | StandardFont::HelveticaBold => (718, -207),
            StandardFont::TimesRoman | StandardFont::TimesBold => (683, -217),
        }
    }
}

/// A font text can be set in. Neither kind is embedded in the generated PDF:
///
/// * [`Font::Standard`] fonts are built into every PDF viewer
/// * [`Font::TrueType`] fonts are parsed for their metrics and referred to by name, so the
///   viewer draws them with its own copy of the font (or a substitute)
///
/// Fonts are referred to throughout layout by their [`Id`] within the document, and are
/// measured through their [`FontMetrics`] implementation
pub enum Font {
    Standard(StandardFont),
    TrueType(OwnedFace),
}

impl Font {
    /// Parse a TrueType or OpenType font from raw bytes
    pub fn load(bytes: Vec<u8>) -> Result<Font, PDFError> {
        let face = OwnedFace::from_vec(bytes, 0)?;
        Ok(Font::TrueType(face))
    }

    /// Read and parse a font file
    pub fn load_from_disk<P: AsRef<Path>>(path: P) -> Result<Font, PDFError> {
        let bytes = std::fs::read(path.as_ref())?;
        Font::load(bytes)
    }

    /// The name the font is referred to by in the PDF
    pub fn base_font(&self, font_index: usize) -> String {
        match self {
            Font::Standard(font) => font.base_font().to_string(),
            Font::TrueType(face) => find_name(face.as_face_ref(), owned_ttf_parser::name_id::POST_SCRIPT_NAME)
                .or_else(|| find_name(face.as_face_ref(), owned_ttf_parser::name_id::FULL_NAME))
                .map(|name| name.chars().filter(|ch| !ch.is_whitespace()).collect())
                .unwrap_or_else(|| format!("F{font_index}")),
        }
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, id: Id<Font>, writer: &mut Pdf) {
        let font_index = id.index();
        let font_id = refs.gen(RefType::Font(font_index));
        let base_font = self.base_font(font_index);

        match self {
            Font::Standard(_) => {
                writer
                    .type1_font(font_id)
                    .base_font(Name(base_font.as_bytes()))
                    .encoding_predefined(Name(b"WinAnsiEncoding"));
            }
            Font::TrueType(face) => {
                let face = face.as_face_ref();
                let descriptor_id = refs.gen(RefType::FontDescriptor(font_index));
                write_descriptor(face, &base_font, descriptor_id, writer);

                let scaling = 1000.0 / face.units_per_em().max(1) as f32;
                let widths = (FIRST_CODE..=LAST_CODE).map(|code| {
                    win_ansi_char(code)
                        .and_then(|ch| face.glyph_index(ch))
                        .and_then(|gid| face.glyph_hor_advance(gid))
                        .map(|advance| advance as f32 * scaling)
                        .unwrap_or(0.0)
                });

                let mut font = writer.truetype_font(font_id);
                font.base_font(Name(base_font.as_bytes()));
                font.encoding_predefined(Name(b"WinAnsiEncoding"));
                font.first_char(FIRST_CODE);
                font.last_char(LAST_CODE);
                font.widths(widths);
                font.font_descriptor(descriptor_id);
            }
        }
    }
}

fn find_name(face: &Face<'_>, name_id: u16) -> Option<String> {
    face.names()
        .into_iter()
        .find(|name| name.name_id == name_id && name.is_unicode())
        .and_then(|name| name.to_string())
}

/// The descriptor a viewer uses to pick a substitute when it lacks the named font
fn write_descriptor(face: &Face<'_>, base_font: &str, id: Ref, writer: &mut Pdf) {
    let scaling = 1000.0 / face.units_per_em().max(1) as f32;
    let bbox = face.global_bounding_box();
    let family = find_name(face, owned_ttf_parser::name_id::FAMILY)
        .unwrap_or_else(|| base_font.to_string());

    let mut flags = FontFlags::NON_SYMBOLIC;
    flags.set(FontFlags::FIXED_PITCH, face.is_monospaced());
    flags.set(FontFlags::ITALIC, face.is_italic());

    let mut descriptor = writer.font_descriptor(id);
    descriptor.name(Name(base_font.as_bytes()));
    descriptor.family(Str(family.as_bytes()));
    descriptor.weight(face.weight().to_number());
    descriptor.flags(flags);
    descriptor.bbox(pdf_writer::Rect {
        x1: bbox.x_min as f32 * scaling,
        y1: bbox.y_min as f32 * scaling,
        x2: bbox.x_max as f32 * scaling,
        y2: bbox.y_max as f32 * scaling,
    });
    descriptor.italic_angle(face.italic_angle());
    descriptor.ascent(face.ascender() as f32 * scaling);
    descriptor.descent(face.descender() as f32 * scaling);
    descriptor.cap_height(
        face.capital_height()
            .map(|height| height as f32 * scaling)
            .unwrap_or(face.ascender() as f32 * scaling),
    );
    // stem width is not recorded in TrueType fonts
    descriptor.stem_v(80.0);
}

impl FontMetrics for Font {
    fn glyph_width(&self, ch: char) -> Result<u16, PDFError> {
        let advance = match self {
            Font::Standard(font) => font.advance(ch),
            Font::TrueType(face) => {
                let face = face.as_face_ref();
                face.glyph_index(ch)
                    .and_then(|gid| face.glyph_hor_advance(gid))
            }
        };
        advance.ok_or(PDFError::MissingGlyph(ch))
    }

    fn units_per_em(&self) -> u16 {
        match self {
            Font::Standard(_) => 1000,
            Font::TrueType(face) => face.as_face_ref().units_per_em(),
        }
    }

    fn line_height(&self) -> i32 {
        match self {
            Font::Standard(font) => {
                let (ascent, descent) = font.extents();
                ascent - descent
            }
            Font::TrueType(face) => {
                let face = face.as_face_ref();
                face.ascender() as i32 - face.descender() as i32 + face.line_gap() as i32
            }
        }
    }
}
