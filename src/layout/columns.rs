//! Column width resolution: natural widths, colspan blending, fitting to the page and
//! justification.

use crate::error::PDFError;
use crate::units::Pt;

/// Padding added to a column whenever a cell widens it
pub const COLUMN_PADDING: Pt = Pt(5.0);

/// Fitting gives up after this many shrink passes
pub const MAX_FIT_ITERATIONS: usize = 1000;

/// Widen `widths[column]` so it can hold `required`. A column that already holds it is left
/// untouched; a column that is widened also receives [`COLUMN_PADDING`].
pub(crate) fn widen(widths: &mut Vec<Pt>, column: usize, required: Pt) {
    if widths.len() <= column {
        widths.resize(column + 1, Pt(0.0));
        widths[column] = required + COLUMN_PADDING;
    } else if widths[column] < required {
        widths[column] = required + COLUMN_PADDING;
    }
}

/// Shrink `widths` until they sum to at most `max_width`.
///
/// Only columns wider than the fair share (`max_width / columns`, rounded down) are shrunk.
/// Each pass splits the remaining excess evenly across those columns, rounded up to whole
/// points, and never takes a column below the fair share. Every pass either removes the
/// excess or brings at least one column down to the fair share, so the loop settles within
/// one pass per column; if no column is left to shrink while the total is still too wide
/// the geometry cannot hold the table and [`PDFError::FitNonConvergence`] is returned.
pub fn fit_to_width(widths: &mut [Pt], max_width: Pt) -> Result<(), PDFError> {
    if widths.is_empty() {
        return Ok(());
    }

    let fair_share = (max_width / widths.len() as f32).floor().max(Pt(0.0));
    let mut total: Pt = widths.iter().copied().sum();
    let mut iterations = 0usize;

    while total > max_width {
        iterations += 1;
        let wide = widths.iter().filter(|&&w| w > fair_share).count();
        if wide == 0 || iterations > MAX_FIT_ITERATIONS {
            return Err(PDFError::FitNonConvergence {
                iterations,
                total,
                max_width,
            });
        }

        let excess = Pt(((total - max_width) / wide as f32).0.ceil().max(1.0));
        for width in widths.iter_mut().filter(|w| **w > fair_share) {
            *width = (*width - excess).max(fair_share);
        }

        total = widths.iter().copied().sum();
        log::debug!(
            "fit pass {iterations}: shrank {wide} columns by up to {excess}, total now {total} of {max_width}"
        );
    }

    Ok(())
}

/// Spread the space left over below `max_width` evenly across all columns. Each column gets
/// the surplus divided by the column count, rounded to the nearest whole point.
pub fn justify(widths: &mut [Pt], max_width: Pt) {
    if widths.is_empty() {
        return;
    }
    let total: Pt = widths.iter().copied().sum();
    let surplus = max_width - total;
    if surplus <= Pt(0.0) {
        return;
    }
    let add = (surplus / widths.len() as f32).round();
    for width in widths.iter_mut() {
        *width += add;
    }
}
