use super::metrics::{width_of_text, FontPair};
use super::wrap::wrap_text;
use crate::canvas::Canvas;
use crate::colour::{colours, Colour};
use crate::units::Pt;
use serde::{Deserialize, Serialize};

/// Lines are set slightly tighter than the font size to save vertical space
pub const LINE_HEIGHT_RATIO: f32 = 0.9;

/// Horizontal placement of text within its cell
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HorizontalAlign {
    #[default]
    Left,
    Right,
    Center,
}

/// Per-cell presentation options. Unknown keys are rejected when deserializing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct CellOptions {
    pub align: HorizontalAlign,
    /// Set the text in the bold face of the table font
    pub bold: bool,
    /// Extra space between the left edge of the cell and the text
    pub indent_left: Pt,
    pub border_left: Option<Colour>,
    pub border_right: Option<Colour>,
    pub border_top: Option<Colour>,
    pub border_bottom: Option<Colour>,
    /// Number of table columns this cell occupies
    pub colspan: usize,
    /// Text colour, black when unset
    pub color: Option<Colour>,
    /// Font size
    pub size: Pt,
}

impl Default for CellOptions {
    fn default() -> Self {
        CellOptions {
            align: HorizontalAlign::Left,
            bold: false,
            indent_left: Pt(0.0),
            border_left: None,
            border_right: None,
            border_top: None,
            border_bottom: None,
            colspan: 1,
            color: None,
            size: Pt(10.0),
        }
    }
}

/// A single piece of text in a [`Row`](crate::layout::Row)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Cell {
    text: String,
    #[serde(default)]
    options: CellOptions,
}

/// What rendering a cell produced
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CellRender {
    /// Horizontal cursor just past the right edge of the cell
    pub next_x: Pt,
    pub line_count: usize,
    pub height: Pt,
}

impl Cell {
    pub fn new<S: ToString>(text: S) -> Cell {
        Cell::with_options(text, CellOptions::default())
    }

    pub fn with_options<S: ToString>(text: S, options: CellOptions) -> Cell {
        Cell {
            text: text.to_string(),
            options,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn options(&self) -> &CellOptions {
        &self.options
    }

    pub fn align(mut self, align: HorizontalAlign) -> Self {
        self.options.align = align;
        self
    }

    pub fn bold(mut self) -> Self {
        self.options.bold = true;
        self
    }

    pub fn indent_left(mut self, indent: Pt) -> Self {
        self.options.indent_left = indent;
        self
    }

    pub fn colspan(mut self, colspan: usize) -> Self {
        self.options.colspan = colspan;
        self
    }

    pub fn color<C: Into<Colour>>(mut self, colour: C) -> Self {
        self.options.color = Some(colour.into());
        self
    }

    pub fn size(mut self, size: Pt) -> Self {
        self.options.size = size;
        self
    }

    /// Set the same border colour on all four sides
    pub fn border<C: Into<Colour>>(mut self, colour: C) -> Self {
        let colour = colour.into();
        self.options.border_left = Some(colour);
        self.options.border_right = Some(colour);
        self.options.border_top = Some(colour);
        self.options.border_bottom = Some(colour);
        self
    }

    /// The declared colspan, never less than one column
    pub fn span(&self) -> usize {
        self.options.colspan.max(1)
    }

    /// Width the cell's text needs on a single line, including its indent
    pub fn natural_width<F: Copy>(&self, fonts: &FontPair<'_, F>) -> Pt {
        let face = fonts.face(self.options.bold);
        width_of_text(&self.text, face.metrics, self.options.size) + self.options.indent_left
    }

    /// Distance between the baselines of consecutive wrapped lines
    pub fn line_height(&self) -> Pt {
        self.options.size * LINE_HEIGHT_RATIO
    }

    /// The lines the cell's text wraps into at `width`
    pub fn lines<F: Copy>(&self, fonts: &FontPair<'_, F>, width: Pt) -> Vec<String> {
        let face = fonts.face(self.options.bold);
        wrap_text(&self.text, width, face.metrics, self.options.size)
    }

    /// Vertical space the cell takes when its text is wrapped into `line_count` lines. A cell
    /// without any lines still takes up one line.
    pub fn height<F: Copy>(&self, fonts: &FontPair<'_, F>, line_count: usize) -> Pt {
        let leading = fonts.face(self.options.bold).leading();
        self.line_height() * line_count.max(1) as f32 + leading
    }

    /// Draws the cell with its left edge at `x`, occupying `width`. `y` is the row cursor: the
    /// baseline of the first line sits one leading above it, and further lines step down by
    /// [`Cell::line_height`].
    pub fn render<C: Canvas>(
        &self,
        canvas: &mut C,
        fonts: &FontPair<'_, C::Font>,
        x: Pt,
        y: Pt,
        width: Pt,
    ) -> CellRender {
        let face = fonts.face(self.options.bold);
        let size = self.options.size;
        let lines = self.lines(fonts, width);

        canvas.set_fill_colour(self.options.color.unwrap_or(colours::BLACK));
        canvas.set_font(face.handle, size);

        let leading = face.leading();
        self.render_borders(canvas, x, y, width, lines.len(), leading);

        // alignment is based on the widest wrapped line, not the unwrapped text
        let longest = longest_line(&lines);
        let text_width = width_of_text(longest, face.metrics, size);
        let left = match self.options.align {
            HorizontalAlign::Left => x,
            HorizontalAlign::Right => x + (width - text_width),
            HorizontalAlign::Center => x + (width - text_width) / 2.0,
        } + self.options.indent_left;

        let mut baseline = y + leading;
        for line in lines.iter() {
            canvas.draw_text(line, left, baseline);
            baseline -= self.line_height();
        }

        CellRender {
            next_x: x + width,
            line_count: lines.len(),
            height: self.height(fonts, lines.len()),
        }
    }

    fn render_borders<C: Canvas>(
        &self,
        canvas: &mut C,
        x: Pt,
        y: Pt,
        width: Pt,
        line_count: usize,
        leading: Pt,
    ) {
        let top = y + self.options.size;
        let extra_lines = line_count.saturating_sub(1) as f32;
        let bottom = y - self.line_height() * extra_lines - leading;
        let right = x + width;

        let sides = [
            (self.options.border_left, (x, top), (x, bottom)),
            (self.options.border_right, (right, top), (right, bottom)),
            (self.options.border_top, (x, top), (right, top)),
            (self.options.border_bottom, (x, bottom), (right, bottom)),
        ];
        for (colour, from, to) in sides {
            if let Some(colour) = colour {
                canvas.set_line_colour(colour);
                canvas.draw_line(from, to);
            }
        }
    }
}

/// The line with the most characters, the first one on ties
fn longest_line(lines: &[String]) -> &str {
    lines
        .iter()
        .fold(None::<&String>, |longest, line| match longest {
            Some(l) if l.chars().count() >= line.chars().count() => Some(l),
            _ => Some(line),
        })
        .map(String::as_str)
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::testing::{font_pair, FixedWidthFont, Op, RecordingCanvas};

    #[test]
    fn options_default_to_ten_point_left_aligned_text() {
        let options = CellOptions::default();
        assert_eq!(options.size, Pt(10.0));
        assert_eq!(options.align, HorizontalAlign::Left);
        assert_eq!(options.colspan, 1);
        assert_eq!(options.color, None);
    }

    #[test]
    fn options_parse_with_kebab_case_keys() {
        let options: CellOptions = serde_json::from_str(
            r#"{ "align": "right", "bold": true, "indent-left": 6, "border-top": [0, 0, 1], "colspan": 2 }"#,
        )
        .expect("valid options");
        assert_eq!(options.align, HorizontalAlign::Right);
        assert!(options.bold);
        assert_eq!(options.indent_left, Pt(6.0));
        assert_eq!(options.border_top, Some(Colour::new_rgb(0.0, 0.0, 1.0)));
        assert_eq!(options.colspan, 2);
        assert_eq!(options.size, Pt(10.0));
    }

    #[test]
    fn unknown_options_are_rejected() {
        let err = serde_json::from_str::<CellOptions>(r#"{ "border-buttom": [0, 0, 0] }"#)
            .unwrap_err();
        assert!(err.to_string().contains("border-buttom"));
        assert!(serde_json::from_str::<CellOptions>(r#"{ "align": "justify" }"#).is_err());
    }

    #[test]
    fn natural_width_uses_the_bold_face_and_indent() {
        let regular = FixedWidthFont::new(500);
        let bold = FixedWidthFont::new(600);
        let fonts = font_pair(&regular, &bold);

        assert_eq!(Cell::new("abcd").natural_width(&fonts), Pt(20.0));
        assert_eq!(Cell::new("abcd").bold().natural_width(&fonts), Pt(24.0));
        assert_eq!(
            Cell::new("abcd").indent_left(Pt(3.0)).natural_width(&fonts),
            Pt(23.0)
        );
    }

    #[test]
    fn height_counts_lines_and_leading() {
        let regular = FixedWidthFont::new(500).with_line_height(1150);
        let fonts = font_pair(&regular, &regular);
        let cell = Cell::new("x").size(Pt(20.0));
        assert_eq!(cell.height(&fonts, 3), Pt(20.0 * 0.9 * 3.0 + 1.0));
        // empty cells still take a line
        assert_eq!(cell.height(&fonts, 0), cell.height(&fonts, 1));
    }

    #[test]
    fn render_draws_left_aligned_text_and_advances() {
        let regular = FixedWidthFont::new(500);
        let fonts = font_pair(&regular, &regular);
        let mut canvas = RecordingCanvas::default();

        let rendered = Cell::new("hello").render(&mut canvas, &fonts, Pt(36.0), Pt(700.0), Pt(80.0));

        assert_eq!(rendered.next_x, Pt(116.0));
        assert_eq!(rendered.line_count, 1);
        assert_eq!(rendered.height, Pt(9.0));
        assert_eq!(
            canvas.ops,
            vec![
                Op::Fill(colours::BLACK),
                Op::Font("regular", Pt(10.0)),
                Op::Text("hello".to_string(), Pt(36.0), Pt(700.0)),
            ]
        );
    }

    #[test]
    fn right_and_center_alignment_use_the_longest_line() {
        let regular = FixedWidthFont::new(500);
        let fonts = font_pair(&regular, &regular);

        let mut canvas = RecordingCanvas::default();
        Cell::new("abcd")
            .align(HorizontalAlign::Right)
            .render(&mut canvas, &fonts, Pt(0.0), Pt(100.0), Pt(50.0));
        assert_eq!(canvas.texts()[0].1, Pt(30.0));

        let mut canvas = RecordingCanvas::default();
        Cell::new("abcd")
            .align(HorizontalAlign::Center)
            .indent_left(Pt(2.0))
            .render(&mut canvas, &fonts, Pt(0.0), Pt(100.0), Pt(50.0));
        assert_eq!(canvas.texts()[0].1, Pt(17.0));

        // wrapped into "the quick" / "brown fox" / "jumps over": 10 characters is the widest
        let mut canvas = RecordingCanvas::default();
        Cell::new("the quick brown fox jumps over")
            .align(HorizontalAlign::Right)
            .render(&mut canvas, &fonts, Pt(0.0), Pt(100.0), Pt(50.0));
        assert!(canvas.texts().iter().all(|(_, x, _)| *x == Pt(0.0)));
    }

    #[test]
    fn wrapped_lines_step_down_the_page() {
        let regular = FixedWidthFont::new(500);
        let fonts = font_pair(&regular, &regular);
        let mut canvas = RecordingCanvas::default();

        let rendered = Cell::new("the quick brown fox jumps over the lazy dog")
            .color((1.0f32, 0.0f32, 0.0f32))
            .render(&mut canvas, &fonts, Pt(0.0), Pt(500.0), Pt(50.0));

        assert_eq!(rendered.line_count, 5);
        assert_eq!(rendered.height, Pt(45.0));
        assert_eq!(canvas.ops[0], Op::Fill(colours::RED));
        let ys: Vec<Pt> = canvas.texts().into_iter().map(|(_, _, y)| y).collect();
        assert_eq!(ys, vec![Pt(500.0), Pt(491.0), Pt(482.0), Pt(473.0), Pt(464.0)]);
    }

    #[test]
    fn borders_frame_the_cell() {
        let regular = FixedWidthFont::new(500).with_line_height(1150);
        let fonts = font_pair(&regular, &regular);
        let mut canvas = RecordingCanvas::default();

        Cell::new("framed")
            .border(colours::BLUE)
            .render(&mut canvas, &fonts, Pt(10.0), Pt(100.0), Pt(60.0));

        // top edge one font size above the cursor, bottom edge one leading below it
        assert_eq!(
            canvas.lines(),
            vec![
                ((Pt(10.0), Pt(110.0)), (Pt(10.0), Pt(99.0))),
                ((Pt(70.0), Pt(110.0)), (Pt(70.0), Pt(99.0))),
                ((Pt(10.0), Pt(110.0)), (Pt(70.0), Pt(110.0))),
                ((Pt(10.0), Pt(99.0)), (Pt(70.0), Pt(99.0))),
            ]
        );
        assert!(canvas.ops.contains(&Op::Stroke(colours::BLUE)));
    }

    #[test]
    fn empty_cells_draw_nothing_but_keep_their_height() {
        let regular = FixedWidthFont::new(500);
        let fonts = font_pair(&regular, &regular);
        let mut canvas = RecordingCanvas::default();

        let rendered = Cell::new("").render(&mut canvas, &fonts, Pt(0.0), Pt(100.0), Pt(50.0));
        assert!(canvas.texts().is_empty());
        assert_eq!(rendered.line_count, 0);
        assert_eq!(rendered.height, Pt(9.0));
    }
}
