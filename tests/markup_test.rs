//! Alignment over static SVG markup
//!
//! Runs the full pass natively and inspects the rewritten document with
//! roxmltree.

use diary_wasm::markup::{align_markup, SvgMarkup};
use diary_wasm::{AlignConfig, AlignError, AlignMode, ElementKind, RandomSource, SplitMix64, Viewport};

const CALENDAR: &str = r##"<?xml version="1.0" encoding="UTF-8"?>
<!-- rendered by the diary -->
<svg xmlns="http://www.w3.org/2000/svg" class="provider-trend" preserveAspectRatio="none">
  <title>Weekly activity &amp; trend</title>
  <g stroke="#333">
    <polyline points="5,0 12.5,0 3,0" fill="none"/>
  </g>
  <polyline points="9,9"/>
</svg>
"##;

struct Fixed(f64);

impl RandomSource for Fixed {
    fn next_unit(&mut self) -> f64 {
        0.0
    }

    fn random_int(&mut self, _max: f64) -> f64 {
        self.0
    }
}

fn first_attr<'a>(doc: &'a roxmltree::Document, tag: &str, attr: &str) -> Option<&'a str> {
    doc.descendants()
        .find(|n| n.has_tag_name(tag))
        .and_then(|n| n.attribute(attr))
}

#[test]
fn test_remap_rewrites_first_polyline_only() {
    let (out, alignment) = align_markup(
        CALENDAR,
        &[10.0, 50.0, 90.0],
        Viewport::new(1280.0, 800.0),
        &AlignConfig::default(),
        &mut Fixed(0.0),
    )
    .unwrap();

    assert_eq!(alignment.row_count, 3);

    let doc = roxmltree::Document::parse(&out).unwrap();
    assert_eq!(first_attr(&doc, "polyline", "points"), Some("5,10 12.5,50 3,90"));
    assert_eq!(first_attr(&doc, "svg", "viewBox"), Some("0 0 1 800"));
    assert_eq!(first_attr(&doc, "svg", "preserveAspectRatio"), Some("none"));

    let polylines: Vec<_> = doc.descendants().filter(|n| n.has_tag_name("polyline")).collect();
    assert_eq!(polylines.len(), 2);
    assert_eq!(polylines[1].attribute("points"), Some("9,9"));
}

#[test]
fn test_everything_else_is_preserved() {
    let (out, _) = align_markup(
        CALENDAR,
        &[1.0, 2.0, 3.0],
        Viewport::new(10.0, 10.0),
        &AlignConfig::default(),
        &mut Fixed(0.0),
    )
    .unwrap();

    assert!(out.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
    assert!(out.contains("<!-- rendered by the diary -->"));
    assert!(out.contains("<title>Weekly activity &amp; trend</title>"));
    assert!(out.contains(r##"<g stroke="#333">"##));
}

#[test]
fn test_scatter_uses_page_size() {
    let config = AlignConfig::with_mode(AlignMode::Scatter);
    let (out, _) = align_markup(CALENDAR, &[10.0, 50.0], Viewport::new(1024.0, 768.0), &config, &mut Fixed(7.0)).unwrap();

    let doc = roxmltree::Document::parse(&out).unwrap();
    assert_eq!(first_attr(&doc, "polyline", "points"), Some("7,10 7,50"));
    assert_eq!(first_attr(&doc, "svg", "viewBox"), Some("0 0 1024 768"));
}

#[test]
fn test_scatter_with_seeded_random() {
    let config = AlignConfig { random_max: 100.0, ..AlignConfig::with_mode(AlignMode::Scatter) };
    let rows = [0.0, 20.0, 40.0, 60.0];
    let (_, alignment) = align_markup(CALENDAR, &rows, Viewport::new(1.0, 1.0), &config, &mut SplitMix64::new(11)).unwrap();

    assert_eq!(alignment.points.len(), rows.len());
    for (point, row) in alignment.points.iter().zip(rows) {
        assert_eq!(point.y, row);
        assert!(point.x >= 0.0 && point.x < 100.0 && point.x.fract() == 0.0);
    }
}

#[test]
fn test_mismatch_reports_counts() {
    let err = align_markup(CALENDAR, &[10.0], Viewport::new(1.0, 1.0), &AlignConfig::default(), &mut Fixed(0.0)).unwrap_err();
    assert_eq!(err, AlignError::RowCountMismatch { rows: 1, points: 3 });
    assert_eq!(err.to_string(), "Row count mismatch: 1 rows for 3 polyline points");
}

#[test]
fn test_remap_requires_points_attribute() {
    let markup = r#"<svg><polyline/></svg>"#;
    let err = align_markup(markup, &[1.0], Viewport::new(1.0, 1.0), &AlignConfig::default(), &mut Fixed(0.0)).unwrap_err();
    assert_eq!(err, AlignError::MissingAttribute { element: ElementKind::Polyline, name: "points" });
}

#[test]
fn test_malformed_points_survive_as_nan() {
    let markup = r#"<svg><polyline points="a,0 4,0"/></svg>"#;
    let (out, _) = align_markup(markup, &[1.0, 2.0], Viewport::new(1.0, 5.0), &AlignConfig::default(), &mut Fixed(0.0)).unwrap();
    assert_eq!(out, r#"<svg viewBox="0 0 1 5"><polyline points="NaN,1 4,2"/></svg>"#);
}

#[test]
fn test_empty_svg_has_no_polyline() {
    let err = SvgMarkup::parse("<svg/>").unwrap_err();
    assert_eq!(err, AlignError::MissingElement(ElementKind::Polyline));
}

#[test]
fn test_untouched_attributes_keep_their_source_text() {
    let markup = r#"<svg data-note="line&#10;break" class='trend'  ><polyline points="5,0"/></svg>"#;
    let (out, _) = align_markup(markup, &[5.0], Viewport::new(1.0, 5.0), &AlignConfig::default(), &mut Fixed(0.0)).unwrap();

    assert_eq!(
        out,
        r#"<svg data-note="line&#10;break" class='trend' viewBox="0 0 1 5"  ><polyline points="5,5"/></svg>"#
    );

    let before = roxmltree::Document::parse(markup).unwrap();
    let after = roxmltree::Document::parse(&out).unwrap();
    assert_eq!(first_attr(&before, "svg", "data-note"), Some("line\nbreak"));
    assert_eq!(first_attr(&after, "svg", "data-note"), first_attr(&before, "svg", "data-note"));
    assert_eq!(first_attr(&after, "svg", "class"), Some("trend"));
}
