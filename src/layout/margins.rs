use crate::units::Pt;
use serde::{Deserialize, Serialize};

/// Margins are used when laying out tables on a page. Tables use the left and right
/// margins as the side margin (the usable width is the page width minus both), the top
/// margin decides where the cursor restarts on a fresh page, and the bottom margin decides
/// when a page is full. The margins are also applied to [`Page`](crate::Page)s to determine
/// the `ArtBox` attribute of each page in the generated PDF
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: Pt,
    pub right: Pt,
    pub bottom: Pt,
    pub left: Pt,
}

impl Margins {
    /// Create margins by specifying individual components in a clockwise fashion
    /// starting at the top (in the same order as CSS margins)
    pub fn trbl(top: Pt, right: Pt, bottom: Pt, left: Pt) -> Margins {
        Margins {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Create margins where all values are equal
    pub fn all<D: Into<Pt>>(value: D) -> Margins {
        let value: Pt = value.into();
        Margins {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Create margins by specifying different values for vertical (top and bottom)
    /// and horizontal (left and right) margins
    pub fn symmetric(vertical: Pt, horizontal: Pt) -> Margins {
        Margins {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// Create margins where all values are 0.0
    pub fn empty() -> Margins {
        Margins::all(Pt(0.0))
    }
}
