mod canvas;
pub use canvas::*;

mod colour;
pub use colour::*;

pub(crate) mod content;

mod document;
pub use document::*;

mod font;
pub use font::*;

mod image;
pub use self::image::*;

mod info;
pub use info::*;

/// Table layout: text measurement and wrapping, column widths and pagination
pub mod layout;

mod page;
pub use page::*;

/// Paper sizes
pub mod pagesize;

mod rect;
pub use rect::*;

pub(crate) mod refs;

mod report;
pub use report::*;

mod units;
pub use units::*;

mod error;
pub use error::*;

/// Re-export PDF-writer functionality
pub use pdf_writer;
