use crate::units::Pt;
use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum PDFError {
    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsingError(#[from] owned_ttf_parser::FaceParsingError),

    #[error(transparent)]
    /// [image] failed to parse the image
    Image(#[from] image::ImageError),

    #[error("page is missing from the document")]
    /// A page referenced by the layout cursor does not exist
    PageMissing,

    #[error("no PDF object was generated for {0}")]
    /// A PDF object was referenced before it was written
    UnresolvedReference(String),

    #[error("font has no glyph for {0:?}")]
    /// The font metrics could not resolve a glyph for a character
    MissingGlyph(char),

    #[error("column widths totalling {total} could not be fitted into {max_width} after {iterations} iterations")]
    /// Shrinking a table's columns to the usable page width did not converge, the page
    /// geometry cannot hold the table
    FitNonConvergence {
        iterations: usize,
        total: Pt,
        max_width: Pt,
    },
}
