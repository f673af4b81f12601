//! Browser DOM adapter
//!
//! Wraps web-sys handles so the alignment pass can read row offsets and
//! write SVG attributes on the live page.

use crate::align::{AlignError, AttributeTarget, ElementKind, LayoutRow, Viewport};
use crate::config::{AlignConfig, RowQuery};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

/// A table row on the live page
pub struct DomRow(HtmlElement);

impl DomRow {
    pub fn new(element: HtmlElement) -> Self {
        Self(element)
    }
}

impl LayoutRow for DomRow {
    fn offset_top(&self) -> f64 {
        f64::from(self.0.offset_top())
    }
}

/// An element whose attributes are read and written in place
pub struct DomElement(Element);

impl DomElement {
    pub fn new(element: Element) -> Self {
        Self(element)
    }

    pub fn element(&self) -> &Element {
        &self.0
    }
}

impl AttributeTarget for DomElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn set_attribute(&mut self, name: &str, value: &str) -> Result<(), AlignError> {
        self.0
            .set_attribute(name, value)
            .map_err(|e| AlignError::Dom(format!("setAttribute({}) failed: {}", name, js_error_message(&e))))
    }
}

/// Everything the alignment pass needs from one document
pub struct DomPage {
    document: Document,
    pub rows: Vec<DomRow>,
    pub svg: DomElement,
    pub polyline: DomElement,
}

impl DomPage {
    /// Find the rows, the first `<svg>` and the first `<polyline>` inside it.
    pub fn locate(document: Document, config: &AlignConfig) -> Result<Self, AlignError> {
        let svg = document
            .get_elements_by_tag_name("svg")
            .item(0)
            .ok_or(AlignError::MissingElement(ElementKind::Svg))?;
        let polyline = svg
            .get_elements_by_tag_name("polyline")
            .item(0)
            .ok_or(AlignError::MissingElement(ElementKind::Polyline))?;
        let rows = collect_rows(&document, config.row_query())?;

        log::debug!("located {} rows, svg and polyline", rows.len());

        Ok(Self {
            document,
            rows,
            svg: DomElement::new(svg),
            polyline: DomElement::new(polyline),
        })
    }

    /// Rendered size of the document's root element.
    pub fn viewport(&self) -> Result<Viewport, AlignError> {
        let root = self
            .document
            .document_element()
            .ok_or(AlignError::MissingElement(ElementKind::Root))?;
        Ok(Viewport::new(f64::from(root.client_width()), f64::from(root.client_height())))
    }
}

/// Every matched row must be an HTML element; anything else (an SVG node
/// picked up by a broad selector) has no `offsetTop` and fails the lookup.
fn collect_rows(document: &Document, query: RowQuery<'_>) -> Result<Vec<DomRow>, AlignError> {
    let mut rows = Vec::new();
    match query {
        RowQuery::Selector(selector) => {
            let nodes = document
                .query_selector_all(selector)
                .map_err(|e| AlignError::Config(format!("bad row selector `{}`: {}", selector, js_error_message(&e))))?;
            for i in 0..nodes.length() {
                if let Some(node) = nodes.item(i) {
                    let element = node.dyn_into::<HtmlElement>().map_err(|_| {
                        AlignError::Dom(format!("row {} matched by `{}` is not an HTML element", i, selector))
                    })?;
                    rows.push(DomRow::new(element));
                }
            }
        }
        RowQuery::Tag(tag) => {
            let elements = document.get_elements_by_tag_name(tag);
            for i in 0..elements.length() {
                if let Some(element) = elements.item(i) {
                    let element = element
                        .dyn_into::<HtmlElement>()
                        .map_err(|_| AlignError::Dom(format!("<{}> {} is not an HTML element", tag, i)))?;
                    rows.push(DomRow::new(element));
                }
            }
        }
    }
    Ok(rows)
}

/// Best-effort message from a thrown JS value
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(s) = value.as_string() {
        return s;
    }
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    format!("{:?}", value)
}
