//! Static SVG markup adapter
//!
//! Runs the alignment pass over SVG text instead of a live page, for
//! pre-rendered calendars where the row offsets were measured elsewhere.
//! Only the `<svg>` and `<polyline>` start tags are ever rewritten; every
//! other event is copied through unchanged.

use crate::align::{self, AlignError, Alignment, AttributeTarget, ElementKind, LayoutRow, Viewport};
use crate::config::AlignConfig;
use crate::utils::random::RandomSource;
use quick_xml::events::{BytesStart, Event};
use quick_xml::{Reader, Writer};

/// One attribute of a start tag
#[derive(Debug, Clone)]
struct MarkupAttribute {
    key: String,
    value: String,
    /// Exact source text including leading whitespace; `None` once the value is set
    source: Option<String>,
}

/// Attributes of one start tag, addressed by its position among all start tags
#[derive(Debug, Clone)]
pub struct MarkupElement {
    tag_index: usize,
    attributes: Vec<MarkupAttribute>,
    /// Whitespace between the last attribute and the tag close
    tail: String,
    dirty: bool,
}

impl MarkupElement {
    fn from_start(tag_index: usize, start: &BytesStart<'_>) -> Result<Self, AlignError> {
        let raw = std::str::from_utf8(start.attributes_raw()).map_err(|e| AlignError::Markup(e.to_string()))?;
        let (spans, tail) = split_raw_attributes(raw)?;

        let mut attributes = Vec::with_capacity(spans.len());
        for attr in start.attributes() {
            let attr = attr.map_err(|e| AlignError::Markup(e.to_string()))?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr
                .unescape_value()
                .map_err(|e| AlignError::Markup(e.to_string()))?
                .into_owned();
            attributes.push(MarkupAttribute { key, value, source: None });
        }
        if attributes.len() != spans.len() {
            return Err(AlignError::Markup(format!(
                "expected {} attributes, scanned {}",
                attributes.len(),
                spans.len()
            )));
        }
        for (attribute, (key, span)) in attributes.iter_mut().zip(spans) {
            if attribute.key != key {
                return Err(AlignError::Markup(format!("attribute `{}` scanned as `{}`", attribute.key, key)));
            }
            attribute.source = Some(span);
        }

        Ok(Self { tag_index, attributes, tail, dirty: false })
    }

    /// Attribute names and unescaped values, in source order
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.attributes.iter().map(|a| (a.key.as_str(), a.value.as_str()))
    }

    /// Start tag content (name plus attributes) with set values re-escaped
    fn content(&self, name: &str) -> String {
        let mut content = String::from(name);
        for attribute in &self.attributes {
            match &attribute.source {
                Some(source) => content.push_str(source),
                None => {
                    content.push(' ');
                    content.push_str(&attribute.key);
                    content.push_str("=\"");
                    content.push_str(&escape_attribute(&attribute.value));
                    content.push('"');
                }
            }
        }
        content.push_str(&self.tail);
        content
    }
}

impl AttributeTarget for MarkupElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes
            .iter()
            .find(|a| a.key == name)
            .map(|a| a.value.clone())
    }

    fn set_attribute(&mut self, name: &str, value: &str) -> Result<(), AlignError> {
        match self.attributes.iter_mut().find(|a| a.key == name) {
            Some(existing) => {
                existing.value = value.to_string();
                existing.source = None;
            }
            None => self.attributes.push(MarkupAttribute {
                key: name.to_string(),
                value: value.to_string(),
                source: None,
            }),
        }
        self.dirty = true;
        Ok(())
    }
}

/// Split the raw attribute text of a start tag into `(key, source)` spans,
/// each span carrying its leading whitespace, plus the trailing whitespace.
fn split_raw_attributes(raw: &str) -> Result<(Vec<(String, String)>, String), AlignError> {
    let bytes = raw.as_bytes();
    let len = bytes.len();
    let mut spans = Vec::new();
    let mut pos = 0;

    loop {
        let span_start = pos;
        while pos < len && bytes[pos].is_ascii_whitespace() {
            pos += 1;
        }
        if pos == len {
            return Ok((spans, raw[span_start..].to_string()));
        }

        let key_start = pos;
        while pos < len && !bytes[pos].is_ascii_whitespace() && bytes[pos] != b'=' {
            pos += 1;
        }
        let key = &raw[key_start..pos];
        while pos < len && bytes[pos].is_ascii_whitespace() {
            pos += 1;
        }
        if bytes.get(pos) != Some(&b'=') {
            return Err(AlignError::Markup(format!("attribute `{}` has no value", key)));
        }
        pos += 1;
        while pos < len && bytes[pos].is_ascii_whitespace() {
            pos += 1;
        }
        let quote = match bytes.get(pos) {
            Some(&q) if q == b'"' || q == b'\'' => q as char,
            _ => return Err(AlignError::Markup(format!("attribute `{}` value is not quoted", key))),
        };
        pos += 1;
        let close = raw[pos..]
            .find(quote)
            .ok_or_else(|| AlignError::Markup(format!("attribute `{}` value is not closed", key)))?;
        pos += close + 1;

        spans.push((key.to_string(), raw[span_start..pos].to_string()));
    }
}

/// Escape for a double-quoted attribute; whitespace that attribute-value
/// normalization would fold into spaces is kept as character references.
fn escape_attribute(value: &str) -> String {
    quick_xml::escape::escape(value)
        .replace('\n', "&#10;")
        .replace('\r', "&#13;")
        .replace('\t', "&#9;")
}

/// Parsed SVG text with handles on its first `<svg>` and that svg's first `<polyline>`
#[derive(Debug, Clone)]
pub struct SvgMarkup {
    source: String,
    svg: MarkupElement,
    polyline: MarkupElement,
}

impl SvgMarkup {
    pub fn parse(source: impl Into<String>) -> Result<Self, AlignError> {
        let source = source.into();
        let (svg, polyline) = locate(&source)?;
        Ok(Self { source, svg, polyline })
    }

    pub fn svg(&self) -> &MarkupElement {
        &self.svg
    }

    pub fn polyline(&self) -> &MarkupElement {
        &self.polyline
    }

    /// Both handles at once, for passing to [`align::align`]
    pub fn elements_mut(&mut self) -> (&mut MarkupElement, &mut MarkupElement) {
        (&mut self.svg, &mut self.polyline)
    }

    /// Re-emit the document with any attribute changes applied.
    pub fn to_markup(&self) -> Result<String, AlignError> {
        let mut reader = Reader::from_str(&self.source);
        let mut writer = Writer::new(Vec::with_capacity(self.source.len()));
        let mut tag_index = 0;

        loop {
            let event = reader.read_event().map_err(|e| markup_error(&reader, e))?;
            let event = match event {
                Event::Eof => break,
                Event::Start(start) => {
                    let start = self.rewrite(tag_index, start)?;
                    tag_index += 1;
                    Event::Start(start)
                }
                Event::Empty(start) => {
                    let start = self.rewrite(tag_index, start)?;
                    tag_index += 1;
                    Event::Empty(start)
                }
                other => other,
            };
            writer
                .write_event(event)
                .map_err(|e| AlignError::Markup(e.to_string()))?;
        }

        String::from_utf8(writer.into_inner()).map_err(|e| AlignError::Markup(e.to_string()))
    }

    fn rewrite<'a>(&self, tag_index: usize, start: BytesStart<'a>) -> Result<BytesStart<'a>, AlignError> {
        let element = [&self.svg, &self.polyline]
            .into_iter()
            .find(|element| element.dirty && element.tag_index == tag_index);
        match element {
            Some(element) => {
                let name = std::str::from_utf8(start.name().as_ref())
                    .map_err(|e| AlignError::Markup(e.to_string()))?
                    .to_string();
                let name_len = name.len();
                Ok(BytesStart::from_content(element.content(&name), name_len))
            }
            None => Ok(start),
        }
    }
}

fn locate(source: &str) -> Result<(MarkupElement, MarkupElement), AlignError> {
    let mut reader = Reader::from_str(source);
    let mut tag_index = 0;
    let mut depth = 0usize;
    let mut svg: Option<(MarkupElement, usize)> = None;

    loop {
        let event = reader.read_event().map_err(|e| markup_error(&reader, e))?;
        match event {
            Event::Eof => break,
            Event::Start(ref start) | Event::Empty(ref start) => {
                let is_empty = matches!(event, Event::Empty(_));
                let local_name = start.local_name();
                if let Some((svg_element, _)) = &svg {
                    if local_name.as_ref() == b"polyline" {
                        let polyline = MarkupElement::from_start(tag_index, start)?;
                        return Ok((svg_element.clone(), polyline));
                    }
                } else if local_name.as_ref() == b"svg" {
                    if is_empty {
                        return Err(AlignError::MissingElement(ElementKind::Polyline));
                    }
                    svg = Some((MarkupElement::from_start(tag_index, start)?, depth));
                }
                tag_index += 1;
                if !is_empty {
                    depth += 1;
                }
            }
            Event::End(_) => {
                depth = depth.saturating_sub(1);
                if matches!(svg, Some((_, svg_depth)) if svg_depth == depth) {
                    // First svg closed without a polyline inside it
                    return Err(AlignError::MissingElement(ElementKind::Polyline));
                }
            }
            _ => {}
        }
    }

    match svg {
        Some(_) => Err(AlignError::MissingElement(ElementKind::Polyline)),
        None => Err(AlignError::MissingElement(ElementKind::Svg)),
    }
}

fn markup_error(reader: &Reader<&[u8]>, error: quick_xml::Error) -> AlignError {
    AlignError::Markup(format!("at byte {}: {}", reader.buffer_position(), error))
}

/// Align the polyline in `source` to rows at `offsets` and return the new markup.
pub fn align_markup<R, G>(
    source: &str,
    rows: &[R],
    viewport: Viewport,
    config: &AlignConfig,
    rng: &mut G,
) -> Result<(String, Alignment), AlignError>
where
    R: LayoutRow,
    G: RandomSource + ?Sized,
{
    let mut markup = SvgMarkup::parse(source)?;
    let (svg, polyline) = markup.elements_mut();
    let alignment = align::align(rows, svg, polyline, viewport, config, rng)?;
    Ok((markup.to_markup()?, alignment))
}
