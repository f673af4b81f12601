//! Remap layout: keep each point's x, move its y onto the matching row.

use super::{AlignError, LayoutRow};
use crate::models::{Point, PointList};

/// Replace the y of point `i` with the offset of row `i`.
///
/// Rows and points pair up one to one; any difference in length is an
/// error rather than a truncated or padded line.
pub fn remap_points<R: LayoutRow>(existing: &PointList, rows: &[R]) -> Result<PointList, AlignError> {
    if rows.len() != existing.len() {
        return Err(AlignError::RowCountMismatch {
            rows: rows.len(),
            points: existing.len(),
        });
    }

    Ok(existing
        .iter()
        .zip(rows)
        .map(|(point, row)| Point::new(point.x, row.offset_top()))
        .collect())
}
