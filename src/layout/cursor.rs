use super::Margins;
use crate::canvas::Surface;
use crate::pagesize::PageSize;
use crate::units::Pt;

/// Where layout currently is: which page, and how far down it. `y` is measured in PDF user
/// space, so it decreases as layout moves down the page.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Cursor {
    pub page: usize,
    pub y: Pt,
}

/// The size and margins shared by every page of a report
#[derive(Debug, Clone, PartialEq)]
pub struct PageGeometry {
    pub size: PageSize,
    pub margins: Margins,
}

impl PageGeometry {
    pub fn new(size: PageSize, margins: Margins) -> PageGeometry {
        PageGeometry { size, margins }
    }

    pub fn width(&self) -> Pt {
        self.size.0
    }

    pub fn height(&self) -> Pt {
        self.size.1
    }

    /// Page width minus the side margins
    pub fn usable_width(&self) -> Pt {
        self.width() - self.margins.left - self.margins.right
    }

    /// Where the cursor starts on a fresh page
    pub fn top(&self) -> Pt {
        self.height() - self.margins.top
    }

    /// A cursor at or below this height has run out of page
    pub fn break_threshold(&self) -> Pt {
        self.margins.bottom / 2.0
    }

    /// Allocate a new page and return a cursor at its top
    pub fn new_page<S: Surface>(&self, surface: &mut S) -> Cursor {
        let page = surface.new_page(self.size, &self.margins);
        Cursor {
            page,
            y: self.top(),
        }
    }

    /// Move to a new page if `cursor` has fallen to the break threshold. Pages only ever
    /// move forwards.
    pub fn break_if_needed<S: Surface>(&self, surface: &mut S, cursor: Cursor) -> Cursor {
        if cursor.y > self.break_threshold() {
            return cursor;
        }
        let next = self.new_page(surface);
        log::debug!(
            "cursor at {} on page {} reached the bottom margin, continuing on page {}",
            cursor.y,
            cursor.page,
            next.page
        );
        next
    }
}
