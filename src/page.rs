use crate::canvas::{Canvas, Surface};
use crate::colour::{colours, Colour};
use crate::content::render_contents;
use crate::font::Font;
use crate::image::Image;
use crate::layout::Margins;
use crate::pagesize::PageSize;
use crate::rect::Rect;
use crate::refs::{ObjectReferences, RefType};
use crate::units::*;
use crate::PDFError;
use id_arena::{Arena, Id};
use pdf_writer::{Filter, Finish, Name, Pdf};

/// The font a span of text is set in
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SpanFont {
    /// The font as registered with [`Document::add_font`](crate::Document::add_font)
    pub id: Id<Font>,
    pub size: Pt,
}

/// A single line of text placed on a page, with its baseline starting at `coords`
#[derive(Clone, PartialEq, Debug)]
pub struct SpanLayout {
    pub text: String,
    pub font: SpanFont,
    pub colour: Colour,
    pub coords: (Pt, Pt),
}

/// An image stretched to fill `position`
#[derive(Clone, PartialEq, Debug)]
pub struct ImageLayout {
    pub image_id: Id<Image>,
    pub position: Rect,
}

/// A straight stroked line segment
#[derive(Clone, PartialEq, Debug)]
pub struct LineLayout {
    pub from: (Pt, Pt),
    pub to: (Pt, Pt),
    pub colour: Colour,
}

#[derive(Clone, PartialEq, Debug)]
pub enum PageContents {
    /// Consecutive spans of text, written in one text block
    Text(Vec<SpanLayout>),
    Image(ImageLayout),
    Line(LineLayout),
}

/// A single page of a document. Layout draws onto a page through its [`Canvas`] impl, which
/// tracks the current font and colours the same way a PDF graphics state would.
#[derive(Debug)]
pub struct Page {
    /// The size of the page
    pub media_box: Rect,
    /// Where content can live, i.e. within the margins
    pub content_box: Rect,
    /// The laid out content, in drawing order
    pub contents: Vec<PageContents>,
    font: Option<SpanFont>,
    fill: Colour,
    stroke: Colour,
}

impl Page {
    /// Create a new page with the given size. If margins are given, the content box (the
    /// `ArtBox` of the page) is inset by them
    pub fn new(size: PageSize, margins: Option<Margins>) -> Page {
        let (width, height) = size;
        let margins = margins.unwrap_or_else(Margins::empty);
        Page {
            media_box: Rect {
                x1: Pt(0.0),
                y1: Pt(0.0),
                x2: width,
                y2: height,
            },
            content_box: Rect {
                x1: margins.left,
                y1: margins.bottom,
                x2: width - margins.right,
                y2: height - margins.top,
            },
            contents: Vec::default(),
            font: None,
            fill: colours::BLACK,
            stroke: colours::BLACK,
        }
    }

    pub fn width(&self) -> Pt {
        self.media_box.width()
    }

    pub fn height(&self) -> Pt {
        self.media_box.height()
    }

    /// Add a span of text. Spans added back to back share a single text block.
    pub fn add_span(&mut self, span: SpanLayout) {
        match self.contents.last_mut() {
            Some(PageContents::Text(spans)) => spans.push(span),
            _ => self.contents.push(PageContents::Text(vec![span])),
        }
    }

    pub fn add_image(&mut self, image: ImageLayout) {
        self.contents.push(PageContents::Image(image));
    }

    pub fn add_line(&mut self, line: LineLayout) {
        self.contents.push(PageContents::Line(line));
    }

    /// All text drawn on the page, in drawing order
    pub fn spans(&self) -> impl Iterator<Item = &SpanLayout> {
        self.contents
            .iter()
            .filter_map(|content| match content {
                PageContents::Text(spans) => Some(spans.iter()),
                _ => None,
            })
            .flatten()
    }

    fn render(&self) -> Result<Vec<u8>, std::io::Error> {
        render_contents(&self.contents)
    }

    pub(crate) fn write(
        &self,
        refs: &mut ObjectReferences,
        page_index: usize,
        fonts: &Arena<Font>,
        images: &Arena<Image>,
        writer: &mut Pdf,
    ) -> Result<(), PDFError> {
        let id = refs.require(RefType::Page(page_index))?;
        let parent = refs.require(RefType::PageTree)?;
        let content_id = refs.gen(RefType::ContentForPage(page_index));

        let mut page = writer.page(id);
        page.media_box(self.media_box.into());
        page.art_box(self.content_box.into());
        page.parent(parent);

        let mut resources = page.resources();
        let mut resource_fonts = resources.fonts();
        for (font_id, _) in fonts.iter() {
            resource_fonts.pair(
                Name(format!("F{}", font_id.index()).as_bytes()),
                refs.require(RefType::Font(font_id.index()))?,
            );
        }
        resource_fonts.finish();
        let mut resource_xobjects = resources.x_objects();
        for (image_id, _) in images.iter() {
            resource_xobjects.pair(
                Name(format!("I{}", image_id.index()).as_bytes()),
                refs.require(RefType::Image(image_id.index()))?,
            );
        }
        resource_xobjects.finish();
        resources.finish();

        page.contents(content_id);
        page.finish();

        let rendered = self.render()?;
        let compressed = miniz_oxide::deflate::compress_to_vec_zlib(
            &rendered,
            miniz_oxide::deflate::CompressionLevel::DefaultCompression as u8,
        );
        writer
            .stream(content_id, compressed.as_slice())
            .filter(Filter::FlateDecode);

        Ok(())
    }
}

impl Canvas for Page {
    type Font = Id<Font>;
    type Image = Id<Image>;

    fn set_font(&mut self, font: Id<Font>, size: Pt) {
        self.font = Some(SpanFont { id: font, size });
    }

    fn set_fill_colour(&mut self, colour: Colour) {
        self.fill = colour;
    }

    fn set_line_colour(&mut self, colour: Colour) {
        self.stroke = colour;
    }

    fn draw_text(&mut self, text: &str, x: Pt, y: Pt) {
        let Some(font) = self.font else {
            log::warn!("no font selected, skipping text {text:?}");
            return;
        };
        self.add_span(SpanLayout {
            text: text.to_string(),
            font,
            colour: self.fill,
            coords: (x, y),
        });
    }

    fn draw_line(&mut self, from: (Pt, Pt), to: (Pt, Pt)) {
        self.add_line(LineLayout {
            from,
            to,
            colour: self.stroke,
        });
    }

    fn draw_image(&mut self, image: Id<Image>, area: Rect) {
        self.add_image(ImageLayout {
            image_id: image,
            position: area,
        });
    }
}

impl Surface for Vec<Page> {
    type Canvas = Page;

    fn new_page(&mut self, size: PageSize, margins: &Margins) -> usize {
        self.push(Page::new(size, Some(margins.clone())));
        self.len() - 1
    }

    fn page_mut(&mut self, index: usize) -> Option<&mut Page> {
        self.get_mut(index)
    }

    fn page_count(&self) -> usize {
        self.len()
    }
}
