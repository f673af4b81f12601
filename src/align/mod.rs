//! Polyline alignment
//!
//! Computes the polyline's new `points` and the SVG's `viewBox` from the
//! positions of the table rows, then writes both. The rows, the two target
//! elements, the page size and the random source are all passed in, so the
//! same pass runs against the live DOM (`crate::dom`), static markup
//! (`crate::markup`) or test doubles.
//!
//! # Module Structure
//!
//! - `remap`: keep existing x values, take y from the rows
//! - `scatter`: fresh point per row with a random x
//! - `errors`: `AlignError` and `ElementKind`

pub mod errors;
pub mod remap;
pub mod scatter;

pub use errors::{AlignError, ElementKind};
pub use remap::remap_points;
pub use scatter::scatter_points;

use crate::config::{AlignConfig, AlignMode};
use crate::models::{PointList, ViewBox};
use crate::utils::random::RandomSource;

pub const POINTS_ATTR: &str = "points";
pub const VIEW_BOX_ATTR: &str = "viewBox";

/// A row whose vertical position drives one polyline point.
pub trait LayoutRow {
    /// Distance in layout pixels from the row's top edge to its offset parent's.
    fn offset_top(&self) -> f64;
}

impl LayoutRow for f64 {
    fn offset_top(&self) -> f64 {
        *self
    }
}

impl<T: LayoutRow + ?Sized> LayoutRow for &T {
    fn offset_top(&self) -> f64 {
        (**self).offset_top()
    }
}

/// An element whose attributes can be read and written.
pub trait AttributeTarget {
    fn attribute(&self, name: &str) -> Option<String>;
    fn set_attribute(&mut self, name: &str, value: &str) -> Result<(), AlignError>;
}

/// Rendered size of the document
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Fully computed result of one pass, ready to be written
#[derive(Clone, Debug, PartialEq)]
pub struct Alignment {
    pub mode: AlignMode,
    pub row_count: usize,
    pub points: PointList,
    pub view_box: ViewBox,
}

impl Alignment {
    pub fn points_attr(&self) -> String {
        self.points.to_string()
    }

    pub fn view_box_attr(&self) -> String {
        self.view_box.to_string()
    }
}

/// Compute the new attribute values without touching any element.
///
/// `current_points` is the polyline's `points` attribute; only the remap
/// layout reads it.
pub fn plan<R, G>(
    rows: &[R],
    current_points: Option<&str>,
    viewport: Viewport,
    config: &AlignConfig,
    rng: &mut G,
) -> Result<Alignment, AlignError>
where
    R: LayoutRow,
    G: RandomSource + ?Sized,
{
    config.validate()?;

    if rows.is_empty() {
        return Err(AlignError::MissingElement(ElementKind::Rows));
    }

    if log::log_enabled!(log::Level::Debug) {
        let offsets: Vec<f64> = rows.iter().map(|row| row.offset_top()).collect();
        log::debug!("{} rows at offsets {:?}", rows.len(), offsets);
    }

    let (points, view_box) = match config.mode {
        AlignMode::Remap => {
            let current = current_points.ok_or(AlignError::MissingAttribute {
                element: ElementKind::Polyline,
                name: POINTS_ATTR,
            })?;
            let existing = PointList::parse(current);
            log::debug!("existing polyline points: {:?}", existing.as_slice());
            (remap_points(&existing, rows)?, ViewBox::legacy(viewport.height))
        }
        AlignMode::Scatter => (
            scatter_points(rows, rng, config.random_max),
            ViewBox::page(viewport.width, viewport.height),
        ),
    };

    Ok(Alignment {
        mode: config.mode,
        row_count: rows.len(),
        points,
        view_box,
    })
}

/// Write a computed alignment: `points` on the polyline, then `viewBox` on
/// the SVG.
///
/// The two writes are not transactional. If the polyline write fails the
/// SVG is untouched; if only the `viewBox` write fails the new `points`
/// stay in place and the error is returned.
pub fn apply<S, P>(alignment: &Alignment, svg: &mut S, polyline: &mut P) -> Result<(), AlignError>
where
    S: AttributeTarget + ?Sized,
    P: AttributeTarget + ?Sized,
{
    let view_box = alignment.view_box_attr();
    let points = alignment.points_attr();
    polyline.set_attribute(POINTS_ATTR, &points)?;
    svg.set_attribute(VIEW_BOX_ATTR, &view_box)?;
    log::debug!("polyline aligned: viewBox=\"{}\" points=\"{}\"", view_box, points);
    Ok(())
}

/// Plan and apply in one pass. Nothing is written unless planning succeeds.
pub fn align<R, S, P, G>(
    rows: &[R],
    svg: &mut S,
    polyline: &mut P,
    viewport: Viewport,
    config: &AlignConfig,
    rng: &mut G,
) -> Result<Alignment, AlignError>
where
    R: LayoutRow,
    S: AttributeTarget + ?Sized,
    P: AttributeTarget + ?Sized,
    G: RandomSource + ?Sized,
{
    let current = polyline.attribute(POINTS_ATTR);
    let alignment = plan(rows, current.as_deref(), viewport, config, rng)?;
    apply(&alignment, svg, polyline)?;
    Ok(alignment)
}
