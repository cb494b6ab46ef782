use crate::error::PDFError;
use crate::units::Pt;

/// Glyph measurements for a font, expressed in font design units.
///
/// [`Font`](crate::Font) implements this from the font's own tables; layout only ever
/// measures text through this trait.
pub trait FontMetrics {
    /// Horizontal advance of the glyph for `ch`. Fails with [`PDFError::MissingGlyph`] if the
    /// font has no glyph for the character.
    fn glyph_width(&self, ch: char) -> Result<u16, PDFError>;

    fn units_per_em(&self) -> u16;

    /// Distance between consecutive baselines (ascent - descent + line gap)
    fn line_height(&self) -> i32;
}

/// A font as seen by the layout engine: the handle to hand to a
/// [`Canvas`](crate::Canvas) plus the metrics used to measure text set in it
#[derive(Clone, Copy)]
pub struct FontFace<'a, F> {
    pub handle: F,
    pub metrics: &'a dyn FontMetrics,
}

impl<'a, F> FontFace<'a, F> {
    pub fn new(handle: F, metrics: &'a dyn FontMetrics) -> Self {
        FontFace { handle, metrics }
    }

    /// Spacing kept between a text baseline and the edge of its cell: the font's line
    /// height in ems, truncated to whole points.
    pub fn leading(&self) -> Pt {
        let units_per_em = self.metrics.units_per_em();
        if units_per_em == 0 {
            return Pt(0.0);
        }
        Pt((self.metrics.line_height() / units_per_em as i32).max(0) as f32)
    }
}

/// The regular and bold faces of the font family tables are set in
#[derive(Clone, Copy)]
pub struct FontPair<'a, F> {
    pub regular: FontFace<'a, F>,
    pub bold: FontFace<'a, F>,
}

impl<'a, F: Copy> FontPair<'a, F> {
    pub fn new(regular: FontFace<'a, F>, bold: FontFace<'a, F>) -> Self {
        FontPair { regular, bold }
    }

    pub fn face(&self, bold: bool) -> FontFace<'a, F> {
        if bold {
            self.bold
        } else {
            self.regular
        }
    }
}

/// Calculate the width of a given string of text given the font and font size.
///
/// Each character's advance is normalised by the font's units per em, the ratios are
/// summed, scaled by the font size and rounded to the nearest whole point. Characters the
/// font cannot resolve count as zero width.
pub fn width_of_text(text: &str, font: &dyn FontMetrics, size: Pt) -> Pt {
    let units_per_em = font.units_per_em();
    if units_per_em == 0 {
        return Pt(0.0);
    }
    let units_per_em = units_per_em as f32;

    let ems: f32 = text
        .chars()
        .map(|ch| match font.glyph_width(ch) {
            Ok(width) => width as f32 / units_per_em,
            Err(err) => {
                log::trace!("measuring {ch:?} as zero width: {err}");
                0.0
            }
        })
        .sum();

    (size * ems).round()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::testing::FixedWidthFont;

    #[test]
    fn width_sums_normalised_advances() {
        // 500 units per glyph on a 1000 unit em: half the font size per character
        let font = FixedWidthFont::new(500);
        assert_eq!(width_of_text("abcd", &font, Pt(10.0)), Pt(20.0));
        assert_eq!(width_of_text("", &font, Pt(10.0)), Pt(0.0));
    }

    #[test]
    fn width_is_rounded_to_whole_points() {
        let font = FixedWidthFont::new(556);
        // 3 * 0.556 * 10 = 16.68
        assert_eq!(width_of_text("abc", &font, Pt(10.0)), Pt(17.0));
    }

    #[test]
    fn multibyte_characters_count_once() {
        let font = FixedWidthFont::new(500);
        assert_eq!(
            width_of_text("ñé€", &font, Pt(10.0)),
            width_of_text("abc", &font, Pt(10.0))
        );
    }

    #[test]
    fn missing_glyphs_count_as_zero_width() {
        let font = FixedWidthFont::new(500).without('x');
        assert_eq!(width_of_text("axa", &font, Pt(10.0)), Pt(10.0));
    }

    #[test]
    fn leading_truncates_line_height_in_ems() {
        let tight = FixedWidthFont::new(500).with_line_height(900);
        let loose = FixedWidthFont::new(500).with_line_height(1150);
        assert_eq!(FontFace::new((), &tight).leading(), Pt(0.0));
        assert_eq!(FontFace::new((), &loose).leading(), Pt(1.0));
    }
}
