//! Reports: a page setup plus a list of tables, rendered top to bottom across as many pages
//! as they need.
//!
//! A [`Report`] can be built in code or deserialized from configuration. Rendering is split
//! in two so the layout can be driven onto any [`Surface`]:
//!
//! - [`Report::render`] lays the report out onto a surface, given already loaded fonts and
//!   images
//! - [`Report::to_document`] loads the fonts and images named in the [`ReportConfig`],
//!   renders onto PDF pages and returns the finished [`Document`]
//!
//! # Example
//!
//! ```no_run
//! use pdf_tableset::layout::{CellOptions, TableOptions};
//! use pdf_tableset::{Report, ReportConfig};
//!
//! let config: ReportConfig = serde_json::from_str(
//!     r#"{ "paper": "letter", "font": { "family": "helvetica", "size": 9 } }"#,
//! ).expect("valid config");
//!
//! let mut report = Report::new(config);
//! let table = report.add_table(TableOptions::default());
//! table
//!     .add_row()
//!     .add_cell("Item", CellOptions { bold: true, ..Default::default() })
//!     .add_cell("Total", CellOptions { bold: true, ..Default::default() });
//! table.add_spacer_row();
//! report.build("report.pdf").expect("can write report");
//! ```

use crate::canvas::{Canvas, Surface};
use crate::document::Document;
use crate::error::PDFError;
use crate::font::{Font, StandardFamily};
use crate::image::Image;
use crate::info::Info;
use crate::layout::{Cursor, FontFace, FontPair, Margins, PageGeometry, Table, TableOptions};
use crate::page::Page;
use crate::pagesize::PaperSize;
use crate::rect::Rect;
use crate::units::Pt;
use id_arena::Id;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Image sizes are given in pixels at 96 dpi
pub const POINTS_PER_PIXEL: f32 = 0.75;

/// Footer images are scaled down to at most this width
pub const FOOTER_MAX_WIDTH: Pt = Pt(150.0);

/// Gap between the cursor and the top of the footer image
const FOOTER_GAP: Pt = Pt(5.0);

/// The fonts tables are set in. Text is set in a standard family unless a TrueType font file
/// is given, whose metrics are then used and whose name is referenced in the PDF.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct FontConfig {
    pub family: StandardFamily,
    /// Path to a regular TrueType face, replacing `family`
    pub regular: Option<PathBuf>,
    /// Path to a bold TrueType face, the regular face is used when unset
    pub bold: Option<PathBuf>,
    /// Base font size; the header image keeps two lines of this size free below it
    pub size: Pt,
}

impl Default for FontConfig {
    fn default() -> Self {
        FontConfig {
            family: StandardFamily::default(),
            regular: None,
            bold: None,
            size: Pt(10.0),
        }
    }
}

impl FontConfig {
    /// Load the regular and bold fonts
    pub fn load(&self) -> Result<(Font, Font), PDFError> {
        match &self.regular {
            Some(regular) => {
                let bold = self.bold.as_ref().unwrap_or(regular);
                Ok((Font::load_from_disk(regular)?, Font::load_from_disk(bold)?))
            }
            None => Ok((
                Font::Standard(self.family.regular()),
                Font::Standard(self.family.bold()),
            )),
        }
    }
}

/// Page setup and resources for a [`Report`]. Every field has a default, and unknown keys
/// are rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct ReportConfig {
    pub paper: PaperSize,
    /// Left and right margin
    pub side_margin: Pt,
    /// Top and bottom margin
    pub height_margin: Pt,
    pub font: FontConfig,
    /// Image centered at the top of the first page
    pub header_image: Option<PathBuf>,
    /// Signature image placed below the last table
    pub footer_image: Option<PathBuf>,
    pub info: Option<Info>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            paper: PaperSize::default(),
            side_margin: Pt(36.0),
            height_margin: Pt(54.0),
            font: FontConfig::default(),
            header_image: None,
            footer_image: None,
            info: None,
        }
    }
}

impl ReportConfig {
    /// Page size and margins every page of the report uses
    pub fn geometry(&self) -> PageGeometry {
        PageGeometry::new(
            self.paper.size(),
            Margins::symmetric(self.height_margin, self.side_margin),
        )
    }
}

/// An image that has been registered with a surface, along with its size in pixels
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ReportImage<I> {
    pub handle: I,
    pub width_px: f32,
    pub height_px: f32,
}

impl<I> ReportImage<I> {
    /// Natural size in points
    pub fn size(&self) -> (Pt, Pt) {
        (
            Pt(self.width_px * POINTS_PER_PIXEL),
            Pt(self.height_px * POINTS_PER_PIXEL),
        )
    }

    /// Natural size in points, scaled down proportionally to at most `max_width` wide
    fn size_within(&self, max_width: Pt) -> (Pt, Pt) {
        let (width, height) = self.size();
        if width > max_width && width > Pt(0.0) {
            let scale = max_width.0 / width.0;
            (max_width, height * scale)
        } else {
            (width, height)
        }
    }
}

/// Everything [`Report::render`] draws with that has to be loaded onto the surface first
pub struct RenderResources<'a, F, I> {
    pub fonts: FontPair<'a, F>,
    pub header: Option<ReportImage<I>>,
    pub footer: Option<ReportImage<I>>,
}

/// The [`RenderResources`] matching the font and image handles of surface `S`
pub type SurfaceResources<'a, S> = RenderResources<
    'a,
    <<S as Surface>::Canvas as Canvas>::Font,
    <<S as Surface>::Canvas as Canvas>::Image,
>;

/// A page setup and the tables to lay out with it, in order
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Report {
    pub config: ReportConfig,
    pub tables: Vec<Table>,
}

impl Report {
    pub fn new(config: ReportConfig) -> Report {
        Report {
            config,
            tables: Vec::new(),
        }
    }

    /// Append a table, returning it for filling with rows
    pub fn add_table(&mut self, options: TableOptions) -> &mut Table {
        self.tables.push(Table::new(options));
        let index = self.tables.len() - 1;
        &mut self.tables[index]
    }

    /// Lay the whole report out onto `surface`, starting on a new page, and return the
    /// cursor where layout stopped.
    ///
    /// The header image (if any) goes at the top of the first page, then every table is
    /// rendered in order, then the footer image (if any) is placed below the last table.
    pub fn render<S: Surface>(
        &self,
        surface: &mut S,
        resources: &SurfaceResources<'_, S>,
    ) -> Result<Cursor, PDFError> {
        let geometry = self.config.geometry();
        let mut cursor = geometry.new_page(surface);

        if let Some(header) = &resources.header {
            cursor = self.place_header(surface, &geometry, header, cursor)?;
        }

        for table in self.tables.iter() {
            cursor = table.render(surface, &resources.fonts, &geometry, cursor)?;
        }

        if let Some(footer) = &resources.footer {
            cursor = self.place_footer(surface, &geometry, footer, cursor)?;
        }

        log::debug!(
            "laid out {} tables over {} pages",
            self.tables.len(),
            surface.page_count()
        );
        Ok(cursor)
    }

    /// Center the header in the top margin, scaled down to the usable width, and move the
    /// cursor two lines below it
    fn place_header<S: Surface>(
        &self,
        surface: &mut S,
        geometry: &PageGeometry,
        header: &ReportImage<<S::Canvas as Canvas>::Image>,
        cursor: Cursor,
    ) -> Result<Cursor, PDFError> {
        let (width, height) = header.size_within(geometry.usable_width());
        let left = (geometry.width() - width) / 2.0;
        let top = geometry.height() - geometry.margins.top / 2.0;
        let bottom = top - height;

        surface
            .page_mut(cursor.page)
            .ok_or(PDFError::PageMissing)?
            .draw_image(header.handle, Rect::new(left, bottom, left + width, top));

        Ok(Cursor {
            page: cursor.page,
            y: bottom - self.config.font.size * 2.0,
        })
    }

    /// Place the footer at the left margin just below the cursor, on a new page if it would
    /// reach the bottom margin
    fn place_footer<S: Surface>(
        &self,
        surface: &mut S,
        geometry: &PageGeometry,
        footer: &ReportImage<<S::Canvas as Canvas>::Image>,
        cursor: Cursor,
    ) -> Result<Cursor, PDFError> {
        let (width, height) = footer.size_within(FOOTER_MAX_WIDTH);

        let mut cursor = cursor;
        if cursor.y - FOOTER_GAP - height <= geometry.break_threshold() {
            cursor = geometry.new_page(surface);
        }

        let left = geometry.margins.left;
        let top = cursor.y - FOOTER_GAP;
        let bottom = top - height;

        surface
            .page_mut(cursor.page)
            .ok_or(PDFError::PageMissing)?
            .draw_image(footer.handle, Rect::new(left, bottom, left + width, top));

        Ok(Cursor {
            page: cursor.page,
            y: bottom,
        })
    }

    /// Load the fonts and images named in the config and render the report into a new
    /// [`Document`]
    pub fn to_document(&self) -> Result<Document, PDFError> {
        let mut document = Document::default();
        if let Some(info) = &self.config.info {
            document.set_info(info.clone());
        }

        let (regular, bold) = self.config.font.load()?;
        let regular = document.add_font(regular);
        let bold = document.add_font(bold);

        let header = self
            .config
            .header_image
            .as_ref()
            .map(|path| load_image(&mut document, path))
            .transpose()?;
        let footer = self
            .config
            .footer_image
            .as_ref()
            .map(|path| load_image(&mut document, path))
            .transpose()?;

        let mut pages: Vec<Page> = Vec::new();
        let resources = RenderResources {
            fonts: FontPair::new(
                FontFace::new(regular, &document.fonts[regular]),
                FontFace::new(bold, &document.fonts[bold]),
            ),
            header,
            footer,
        };
        self.render(&mut pages, &resources)?;

        document.add_pages(pages);
        Ok(document)
    }

    /// Render the report and write it to a PDF file at `path`
    pub fn build<P: AsRef<Path>>(&self, path: P) -> Result<(), PDFError> {
        self.to_document()?.save(path)
    }
}

fn load_image(document: &mut Document, path: &Path) -> Result<ReportImage<Id<Image>>, PDFError> {
    let image = Image::load_from_disk(path)?;
    let (width_px, height_px) = (image.width, image.height);
    Ok(ReportImage {
        handle: document.add_image(image),
        width_px,
        height_px,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::testing::{font_pair, FixedWidthFont, Op, RecordingSurface};
    use crate::layout::{Cell, CellOptions};
    use crate::pagesize::LETTER;

    fn letter_config() -> ReportConfig {
        ReportConfig {
            paper: PaperSize::Letter,
            ..Default::default()
        }
    }

    fn abc_report() -> Report {
        let mut report = Report::new(letter_config());
        report
            .add_table(TableOptions::default())
            .add_row()
            .add_cell("A", CellOptions::default())
            .add_cell("B", CellOptions::default())
            .add_cell("C", CellOptions::default());
        report
    }

    fn images(surface: &RecordingSurface, page: usize) -> Vec<(u32, Rect)> {
        surface.pages[page]
            .ops
            .iter()
            .filter_map(|op| match op {
                Op::Image(handle, area) => Some((*handle, *area)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn config_defaults_match_a_plain_a4_report() {
        let config: ReportConfig = serde_json::from_str("{}").expect("empty config");
        assert_eq!(config, ReportConfig::default());
        assert_eq!(config.paper, PaperSize::A4);
        assert_eq!(config.side_margin, Pt(36.0));
        assert_eq!(config.height_margin, Pt(54.0));
        assert_eq!(config.font.size, Pt(10.0));
    }

    #[test]
    fn config_parses_kebab_case_keys() {
        let config: ReportConfig = serde_json::from_str(
            r#"{
                "paper": "letter-landscape",
                "side-margin": 20,
                "font": { "regular": "fonts/Regular.ttf", "size": 12 },
                "header-image": "header.png",
                "info": { "title": "Statement" }
            }"#,
        )
        .expect("valid config");
        assert_eq!(config.paper, PaperSize::LetterLandscape);
        assert_eq!(config.side_margin, Pt(20.0));
        assert_eq!(config.height_margin, Pt(54.0));
        assert_eq!(config.font.regular, Some(PathBuf::from("fonts/Regular.ttf")));
        assert_eq!(config.font.family, StandardFamily::Times);
        assert_eq!(config.font.bold, None);
        assert_eq!(config.header_image, Some(PathBuf::from("header.png")));
        assert_eq!(
            config.info.and_then(|info| info.title),
            Some("Statement".to_string())
        );
    }

    #[test]
    fn unknown_config_keys_are_rejected() {
        let err = serde_json::from_str::<ReportConfig>(r#"{ "margin": 10 }"#).unwrap_err();
        assert!(err.to_string().contains("margin"));
    }

    #[test]
    fn geometry_uses_side_and_height_margins() {
        let geometry = letter_config().geometry();
        assert_eq!(geometry.size, LETTER);
        assert_eq!(geometry.usable_width(), Pt(540.0));
        assert_eq!(geometry.top(), Pt(738.0));
    }

    #[test]
    fn single_row_drops_the_cursor_by_one_line() {
        let regular = FixedWidthFont::new(500);
        let resources = RenderResources {
            fonts: font_pair(&regular, &regular),
            header: None,
            footer: None,
        };
        let mut surface = RecordingSurface::default();

        let cursor = abc_report().render(&mut surface, &resources).unwrap();

        assert_eq!(surface.pages.len(), 1);
        assert_eq!(surface.pages[0].size, Some(LETTER));
        assert_eq!(cursor, Cursor { page: 0, y: Pt(738.0 - 9.0) });
        let texts: Vec<String> = surface.pages[0]
            .texts()
            .into_iter()
            .map(|(text, _, _)| text)
            .collect();
        assert_eq!(texts, vec!["A", "B", "C"]);
    }

    #[test]
    fn wide_headers_are_scaled_and_centered() {
        let regular = FixedWidthFont::new(500);
        let resources = RenderResources {
            fonts: font_pair(&regular, &regular),
            header: Some(ReportImage {
                handle: 7u32,
                width_px: 800.0,
                height_px: 100.0,
            }),
            footer: None,
        };
        let mut surface = RecordingSurface::default();

        let cursor = Report::new(letter_config())
            .render(&mut surface, &resources)
            .unwrap();

        // 600x75pt scaled to the 540pt usable width
        assert_eq!(
            images(&surface, 0),
            vec![(7, Rect::new(Pt(36.0), Pt(697.5), Pt(576.0), Pt(765.0)))]
        );
        assert_eq!(cursor.y, Pt(677.5));
    }

    #[test]
    fn narrow_headers_keep_their_size() {
        let regular = FixedWidthFont::new(500);
        let resources = RenderResources {
            fonts: font_pair(&regular, &regular),
            header: Some(ReportImage {
                handle: 1u32,
                width_px: 200.0,
                height_px: 100.0,
            }),
            footer: None,
        };
        let mut surface = RecordingSurface::default();

        abc_report().render(&mut surface, &resources).unwrap();

        assert_eq!(
            images(&surface, 0),
            vec![(1, Rect::new(Pt(231.0), Pt(690.0), Pt(381.0), Pt(765.0)))]
        );
        // the table starts two 10pt lines below the header
        assert_eq!(surface.pages[0].texts()[0].2, Pt(670.0));
    }

    #[test]
    fn footers_sit_below_the_last_table() {
        let regular = FixedWidthFont::new(500);
        let resources = RenderResources {
            fonts: font_pair(&regular, &regular),
            header: None,
            footer: Some(ReportImage {
                handle: 2u32,
                width_px: 400.0,
                height_px: 100.0,
            }),
        };
        let mut surface = RecordingSurface::default();

        let cursor = abc_report().render(&mut surface, &resources).unwrap();

        // 300x75pt scaled down to 150pt wide
        assert_eq!(
            images(&surface, 0),
            vec![(2, Rect::new(Pt(36.0), Pt(686.5), Pt(186.0), Pt(724.0)))]
        );
        assert_eq!(cursor, Cursor { page: 0, y: Pt(686.5) });
    }

    #[test]
    fn footers_that_do_not_fit_move_to_a_new_page() {
        let report = Report::new(letter_config());
        let geometry = report.config.geometry();
        let mut surface = RecordingSurface::default();
        let first = geometry.new_page(&mut surface);
        let footer = ReportImage {
            handle: 3u32,
            width_px: 200.0,
            height_px: 50.0,
        };

        let cursor = report
            .place_footer(&mut surface, &geometry, &footer, Cursor { page: first.page, y: Pt(60.0) })
            .unwrap();

        assert_eq!(surface.pages.len(), 2);
        assert!(images(&surface, 0).is_empty());
        assert_eq!(
            images(&surface, 1),
            vec![(3, Rect::new(Pt(36.0), Pt(695.5), Pt(186.0), Pt(733.0)))]
        );
        assert_eq!(cursor, Cursor { page: 1, y: Pt(695.5) });
    }

    #[test]
    fn tables_render_in_order_and_share_the_cursor() {
        let regular = FixedWidthFont::new(500);
        let resources = RenderResources {
            fonts: font_pair(&regular, &regular),
            header: None,
            footer: None,
        };
        let mut report = abc_report();
        report
            .add_table(TableOptions::default())
            .add_row()
            .push(Cell::new("second table"));
        let mut surface = RecordingSurface::default();

        let cursor = report.render(&mut surface, &resources).unwrap();

        assert_eq!(cursor.y, Pt(720.0));
        let second = surface.pages[0].texts().pop().unwrap();
        assert_eq!(second, ("second table".to_string(), Pt(36.0), Pt(729.0)));
    }

    #[test]
    fn reports_parse_from_json() {
        let report: Report = serde_json::from_str(
            r#"{
                "config": { "paper": "a4-landscape" },
                "tables": [
                    { "rows": [ { "cells": [ { "text": "Only cell" } ] } ] }
                ]
            }"#,
        )
        .expect("valid report");
        assert_eq!(report.config.paper, PaperSize::A4Landscape);
        assert_eq!(report.tables.len(), 1);
        assert_eq!(report.tables[0].rows[0].cells[0].text(), "Only cell");
    }

    #[test]
    fn missing_fonts_fail_to_build() {
        let mut config = letter_config();
        config.font.regular = Some(PathBuf::from("/nonexistent/Regular.ttf"));
        let err = Report::new(config).to_document().err();
        assert!(matches!(err, Some(PDFError::Io(_))));
    }

    #[test]
    fn standard_fonts_build_without_font_files() {
        let mut report = abc_report();
        report.config.font.family = StandardFamily::Helvetica;

        let document = report.to_document().unwrap();

        assert_eq!(document.fonts.len(), 2);
        assert_eq!(document.page_count(), 1);
        let mut out: Vec<u8> = Vec::new();
        document.write(&mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("/Helvetica-Bold"));
        assert!(!text.contains("/FontFile2"));
    }
}
