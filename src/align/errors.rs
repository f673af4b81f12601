//! Error types for polyline alignment
//!
//! A malformed coordinate is not an error: it parses to NaN and is written
//! back as NaN. Everything here aborts the pass before any attribute is set.

use std::fmt;
use thiserror::Error;

/// Document element the alignment pass depends on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// The document's root element (source of the page size)
    Root,
    Svg,
    Polyline,
    Rows,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ElementKind::Root => "document root element",
            ElementKind::Svg => "<svg> element",
            ElementKind::Polyline => "<polyline> element",
            ElementKind::Rows => "table rows",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AlignError {
    #[error("Missing required element: {0}")]
    MissingElement(ElementKind),

    #[error("Missing attribute `{name}` on {element}")]
    MissingAttribute { element: ElementKind, name: &'static str },

    #[error("Row count mismatch: {rows} rows for {points} polyline points")]
    RowCountMismatch { rows: usize, points: usize },

    #[error("DOM operation failed: {0}")]
    Dom(String),

    #[error("Invalid SVG markup: {0}")]
    Markup(String),

    #[error("Invalid options: {0}")]
    Config(String),
}
