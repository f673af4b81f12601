//! WASM build test
//!
//! Runs the alignment pass against a real DOM in a headless browser.
//! Run with: wasm-pack test --headless --firefox

#![cfg(target_arch = "wasm32")]

use diary_wasm::api::{align_polyline, format_points, parse_points, AlignReport};
use diary_wasm::dom::DomPage;
use diary_wasm::{align, AlignConfig, AlignError, AlignMode, AttributeTarget, ElementKind, MathRandom, Viewport};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;
use web_sys::Document;

wasm_bindgen_test_configure!(run_in_browser);

const CALENDAR: &str = r#"
<table style="position: relative">
  <thead><tr><th>Week</th></tr></thead>
  <tbody>
    <tr style="height: 40px"><td>1</td></tr>
    <tr style="height: 40px"><td>2</td></tr>
    <tr style="height: 40px"><td>3</td></tr>
  </tbody>
</table>
<svg><polyline points="5,0 5,0 5,0"/></svg>
"#;

fn document_with(body: &str) -> Document {
    let document = web_sys::window().unwrap().document().unwrap();
    document.body().unwrap().set_inner_html(body);
    document
}

#[wasm_bindgen_test]
fn test_locate_finds_table_body_rows() {
    let document = document_with(CALENDAR);
    let page = DomPage::locate(document, &AlignConfig::default()).unwrap();
    assert_eq!(page.rows.len(), 3);
    assert_eq!(page.polyline.attribute("points").as_deref(), Some("5,0 5,0 5,0"));
}

#[wasm_bindgen_test]
fn test_scatter_counts_every_row() {
    let document = document_with(CALENDAR);
    let page = DomPage::locate(document, &AlignConfig::with_mode(AlignMode::Scatter)).unwrap();
    // The header row is matched by tag too
    assert_eq!(page.rows.len(), 4);
}

#[wasm_bindgen_test]
fn test_remap_follows_row_offsets() {
    let document = document_with(CALENDAR);
    let mut page = DomPage::locate(document, &AlignConfig::default()).unwrap();
    let viewport = page.viewport().unwrap();

    let alignment = align(&page.rows, &mut page.svg, &mut page.polyline, viewport, &AlignConfig::default(), &mut MathRandom).unwrap();

    let ys: Vec<f64> = alignment.points.iter().map(|p| p.y).collect();
    assert_eq!(ys.len(), 3);
    assert!(ys.windows(2).all(|w| w[0] < w[1]));
    assert!(alignment.points.iter().all(|p| p.x == 5.0));

    let view_box = page.svg.attribute("viewBox").unwrap();
    assert_eq!(view_box, format!("0 0 1 {}", viewport.height));
}

#[wasm_bindgen_test]
fn test_missing_polyline() {
    let document = document_with("<table><tbody><tr><td>1</td></tr></tbody></table><svg></svg>");
    let err = DomPage::locate(document, &AlignConfig::default()).err().unwrap();
    assert_eq!(err, AlignError::MissingElement(ElementKind::Polyline));
}

#[wasm_bindgen_test]
fn test_non_html_row_is_rejected() {
    let document = document_with(CALENDAR);
    let config = AlignConfig { row_selector: Some("tbody tr, polyline".to_string()), ..AlignConfig::default() };
    let err = DomPage::locate(document, &config).err().unwrap();
    assert!(matches!(err, AlignError::Dom(ref msg) if msg.contains("not an HTML element")));
}

#[wasm_bindgen_test]
fn test_mismatch_leaves_polyline_alone() {
    let document = document_with("<table><tbody><tr><td>1</td></tr></tbody></table><svg><polyline points=\"1,1 2,2\"/></svg>");
    let mut page = DomPage::locate(document, &AlignConfig::default()).unwrap();

    let err = align(&page.rows, &mut page.svg, &mut page.polyline, Viewport::new(1.0, 1.0), &AlignConfig::default(), &mut MathRandom).unwrap_err();

    assert_eq!(err, AlignError::RowCountMismatch { rows: 1, points: 2 });
    assert_eq!(page.polyline.attribute("points").as_deref(), Some("1,1 2,2"));
    assert!(page.svg.attribute("viewBox").is_none());
}

#[wasm_bindgen_test]
fn test_align_polyline_export() {
    document_with(CALENDAR);
    let report = align_polyline(JsValue::UNDEFINED).unwrap();
    let report: AlignReport = serde_wasm_bindgen::from_value(report).unwrap();
    assert_eq!(report.mode, AlignMode::Remap);
    assert_eq!(report.row_count, 3);
    assert!(report.view_box.starts_with("0 0 1 "));
}

#[wasm_bindgen_test]
fn test_align_polyline_rejects_bad_options() {
    document_with(CALENDAR);
    let options = js_sys::JSON::parse(r#"{"mode": "zigzag"}"#).unwrap();
    assert!(align_polyline(options).is_err());
}

#[wasm_bindgen_test]
fn test_points_exports_round_trip() {
    let parsed = parse_points("5,10 x,2").unwrap();
    assert_eq!(format_points(parsed).unwrap(), "5,10 NaN,2");
}
