//! Scatter layout: one fresh point per row.
//!
//! Each row produces the pair `[offsetTop, randomInt(max)]`, which the
//! calendar page has always serialized swapped, as `"random,offset"`. The
//! resulting point therefore has the random value as x and the row offset
//! as y.

use super::LayoutRow;
use crate::models::{Point, PointList};
use crate::utils::random::RandomSource;

pub fn scatter_points<R, G>(rows: &[R], rng: &mut G, max: f64) -> PointList
where
    R: LayoutRow,
    G: RandomSource + ?Sized,
{
    rows.iter()
        .map(|row| {
            let (offset, random) = (row.offset_top(), rng.random_int(max));
            Point::new(random, offset)
        })
        .collect()
}
