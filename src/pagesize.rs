//! Paper sizes that reports can be laid out on.
//!
//! Sizes are provided in portrait orientation (width, height) where width ≤ height.
//! Use the [`PageOrientation`](crate::pagesize::PageOrientation) trait to convert between
//! portrait and landscape, or pick one of the [`PaperSize`](crate::pagesize::PaperSize)
//! variants which already carry an orientation.
//!
//! # Example
//!
//! ```
//! use pdf_tableset::pagesize::{PaperSize, PageOrientation, A4, LETTER};
//!
//! let landscape = A4.landscape();
//! assert_eq!(PaperSize::LetterLandscape.size(), LETTER.landscape());
//! ```

use crate::units::*;
use serde::{Deserialize, Serialize};

/// Page dimensions as (width, height) in points.
pub type PageSize = (Pt, Pt);

pub const LETTER: PageSize = (Pt(8.5 * 72.0), Pt(11.0 * 72.0));

// iso a-series (converted from mm to points)
pub const A4: PageSize = (Pt(210.0 * 72.0 / 25.4), Pt(297.0 * 72.0 / 25.4));

/// Convert page sizes between portrait and landscape orientations.
pub trait PageOrientation {
    /// Returns the size in portrait orientation (width ≤ height).
    fn portrait(self) -> Self;
    /// Returns the size in landscape orientation (width ≥ height).
    fn landscape(self) -> Self;
}

impl PageOrientation for PageSize {
    fn portrait(self) -> Self {
        if self.0 <= self.1 {
            self
        } else {
            (self.1, self.0)
        }
    }

    fn landscape(self) -> PageSize {
        if self.0 >= self.1 {
            self
        } else {
            (self.1, self.0)
        }
    }
}

/// The paper a report is printed on
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaperSize {
    #[default]
    A4,
    A4Landscape,
    Letter,
    LetterLandscape,
}

impl PaperSize {
    /// The (width, height) of the paper in points
    pub fn size(self) -> PageSize {
        match self {
            PaperSize::A4 => A4,
            PaperSize::A4Landscape => A4.landscape(),
            PaperSize::Letter => LETTER,
            PaperSize::LetterLandscape => LETTER.landscape(),
        }
    }
}
