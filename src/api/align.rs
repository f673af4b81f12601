//! WASM entry points for polyline alignment

use super::helpers::{align_error, deserialize, missing_global, read_config, serialize};
use super::types::AlignReport;
use crate::align::{self, Viewport};
use crate::dom::DomPage;
use crate::markup;
use crate::models::{Point, PointList};
use crate::utils::random::{MathRandom, SplitMix64};
use crate::{wasm_info, wasm_log};
use wasm_bindgen::prelude::*;

/// Align the page's polyline with its table rows
///
/// # Parameters
/// - `options`: optional `{ mode, rowSelector, randomMax }` object
///
/// # Returns
/// `{ mode, rowCount, points, viewBox }` describing what was written
#[wasm_bindgen(js_name = alignPolyline)]
pub fn align_polyline(options: JsValue) -> Result<JsValue, JsValue> {
    let config = read_config(options)?;
    wasm_info!("alignPolyline called: mode={:?}", config.mode);

    let window = web_sys::window().ok_or_else(|| missing_global("window"))?;
    let document = window.document().ok_or_else(|| missing_global("document"))?;

    let mut page = DomPage::locate(document, &config).map_err(align_error)?;
    let viewport = page.viewport().map_err(align_error)?;
    wasm_log!("  {} rows, viewport {}x{}", page.rows.len(), viewport.width, viewport.height);

    let alignment = align::align(
        &page.rows,
        &mut page.svg,
        &mut page.polyline,
        viewport,
        &config,
        &mut MathRandom,
    )
    .map_err(align_error)?;

    serialize(&AlignReport::from(&alignment), "Failed to serialize alignment report")
}

/// Align the polyline inside static SVG markup
///
/// # Parameters
/// - `svg`: markup containing an `<svg>` with a `<polyline>` inside
/// - `offsets`: row offsets from the top, in document order
/// - `width`, `height`: page size used for the viewBox
/// - `options`: optional alignment options
///
/// # Returns
/// The rewritten markup
#[wasm_bindgen(js_name = alignSvgMarkup)]
pub fn align_svg_markup(
    svg: &str,
    offsets: Vec<f64>,
    width: f64,
    height: f64,
    options: JsValue,
) -> Result<String, JsValue> {
    let config = read_config(options)?;
    wasm_info!("alignSvgMarkup called: {} offsets, mode={:?}", offsets.len(), config.mode);

    let mut rng = SplitMix64::from_entropy()
        .map_err(|e| JsValue::from_str(&format!("No entropy source: {}", e)))?;
    let (out, _) = markup::align_markup(svg, &offsets, Viewport::new(width, height), &config, &mut rng)
        .map_err(align_error)?;
    Ok(out)
}

/// Parse a `points` attribute into `[[x, y], ...]`
#[wasm_bindgen(js_name = parsePoints)]
pub fn parse_points(points: &str) -> Result<JsValue, JsValue> {
    let pairs: Vec<(f64, f64)> = PointList::parse(points).into_inner().into_iter().map(Into::into).collect();
    serialize(&pairs, "Failed to serialize points")
}

/// Format `[[x, y], ...]` as a `points` attribute
#[wasm_bindgen(js_name = formatPoints)]
pub fn format_points(points: JsValue) -> Result<String, JsValue> {
    let pairs: Vec<(f64, f64)> = deserialize(points, "Invalid points array")?;
    let list: PointList = pairs.into_iter().map(Point::from).collect();
    Ok(list.to_string())
}
