use crate::{
    font::Font,
    image::Image,
    info::Info,
    page::Page,
    refs::{ObjectReferences, RefType},
    PDFError,
};
use id_arena::{Arena, Id};
use pdf_writer::{Finish, Pdf, Ref};
use std::{fs::File, io::BufWriter, io::Write, path::Path};

#[derive(Default)]
/// A document is the main object that stores all the contents of the PDF
/// then renders it out with a call to [Document::write]
pub struct Document {
    pub info: Option<Info>,
    pub pages: Arena<Page>,
    pub page_order: Vec<Id<Page>>,
    pub fonts: Arena<Font>,
    pub images: Arena<Image>,
}

impl Document {
    /// Sets information about the document. If not provided, no information block will be
    /// written to the PDF
    pub fn set_info(&mut self, info: Info) {
        self.info = Some(info);
    }

    /// Add a page to the end of the document, returning its id
    pub fn add_page(&mut self, page: Page) -> Id<Page> {
        let id = self.pages.alloc(page);
        self.page_order.push(id);
        id
    }

    /// Add pages to the end of the document, keeping their order
    pub fn add_pages<I: IntoIterator<Item = Page>>(&mut self, pages: I) {
        for page in pages {
            self.add_page(page);
        }
    }

    pub fn page_count(&self) -> usize {
        self.page_order.len()
    }

    /// Get the 0-based index of a page given its ID
    pub fn index_of_page(&self, page: Id<Page>) -> Option<usize> {
        self.page_order.iter().position(|&p| p == page)
    }

    /// The page at `page_index` in document order
    pub fn page(&self, page_index: usize) -> Option<&Page> {
        self.page_order
            .get(page_index)
            .and_then(|&id| self.pages.get(id))
    }

    /// Add a font to the document structure. Fonts are stored "globally" within the
    /// document, such that any page can refer to it by the returned id.
    pub fn add_font(&mut self, font: Font) -> Id<Font> {
        self.fonts.alloc(font)
    }

    /// Add an image to the document structure. Images are stored "globally" within the
    /// document, such that any page can re-use an image by referring to the returned id.
    pub fn add_image(&mut self, image: Image) -> Id<Image> {
        self.images.alloc(image)
    }

    /// Write the entire document to the writer. Note: although this can write to arbitrary
    /// streams, the entire document is "rendered" in memory first.
    ///
    /// Until `write` is called, all references are un-resolved. Calling `write` will
    /// generate PDF objects and corresponding references to those objects.
    pub fn write<W: Write>(self, mut w: W) -> Result<(), PDFError> {
        let Document {
            info,
            pages,
            page_order,
            fonts,
            images,
        } = self;

        let mut refs = ObjectReferences::new();

        let catalog_id = refs.gen(RefType::Catalog);
        let page_tree_id = refs.gen(RefType::PageTree);

        let mut writer = Pdf::new();
        if let Some(info) = info {
            info.write(&mut refs, &mut writer);
        }

        // page refs are keyed by position in the document, not arena index
        let page_refs: Vec<Ref> = (0..page_order.len())
            .map(|i| refs.gen(RefType::Page(i)))
            .collect();

        writer
            .pages(page_tree_id)
            .count(page_refs.len() as i32)
            .kids(page_refs);

        for (i, font) in fonts.iter() {
            font.write(&mut refs, i, &mut writer);
        }

        for (i, image) in images.iter() {
            image.write(&mut refs, i.index(), &mut writer)?;
        }

        for (page_index, id) in page_order.iter().enumerate() {
            let page = pages.get(*id).ok_or(PDFError::PageMissing)?;
            page.write(&mut refs, page_index, &fonts, &images, &mut writer)?;
        }

        let mut catalog = writer.catalog(catalog_id);
        catalog.pages(page_tree_id);
        catalog.finish();

        w.write_all(writer.finish().as_slice()).map_err(Into::into)
    }

    /// Write the document to a file at `path`, replacing it if it exists
    pub fn save<P: AsRef<Path>>(self, path: P) -> Result<(), PDFError> {
        let file = File::create(path.as_ref())?;
        let mut out = BufWriter::new(file);
        self.write(&mut out)?;
        out.flush()?;
        log::debug!("wrote {}", path.as_ref().display());
        Ok(())
    }
}
