//! Alignment options
//!
//! Passed from JavaScript as a plain object (`{ mode: "scatter" }`) or read
//! from JSON. Every field has a default, so an empty object or `undefined`
//! gives the remap layout the calendar page uses.

use crate::align::AlignError;
use serde::{Deserialize, Serialize};

/// Rows under a table body, used by the remap layout.
pub const TABLE_BODY_ROWS: &str = "tbody tr";
/// Row tag matched document-wide by the scatter layout.
pub const ROW_TAG: &str = "tr";
/// Exclusive upper bound of the scatter layout's placeholder x coordinate.
pub const DEFAULT_RANDOM_MAX: f64 = 600.0;

/// How the polyline's points are produced
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AlignMode {
    /// Keep each existing x, take y from the matching row
    #[default]
    Remap,
    /// One fresh point per row with a random x
    Scatter,
}

/// How rows are located in the document
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowQuery<'a> {
    Selector(&'a str),
    Tag(&'a str),
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct AlignConfig {
    pub mode: AlignMode,

    /// CSS selector overriding the mode's default row lookup
    pub row_selector: Option<String>,

    pub random_max: f64,
}

impl Default for AlignConfig {
    fn default() -> Self {
        Self {
            mode: AlignMode::Remap,
            row_selector: None,
            random_max: DEFAULT_RANDOM_MAX,
        }
    }
}

impl AlignConfig {
    pub fn with_mode(mode: AlignMode) -> Self {
        Self { mode, ..Self::default() }
    }

    pub fn from_json(json: &str) -> Result<Self, AlignError> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| AlignError::Config(format!("invalid options JSON: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AlignError> {
        if !self.random_max.is_finite() || self.random_max < 1.0 {
            return Err(AlignError::Config(format!(
                "randomMax must be a finite number >= 1, got {}",
                self.random_max
            )));
        }
        if let Some(selector) = &self.row_selector {
            if selector.trim().is_empty() {
                return Err(AlignError::Config("rowSelector must not be empty".to_string()));
            }
        }
        Ok(())
    }

    /// Row lookup: the override selector if set, otherwise the mode's default.
    pub fn row_query(&self) -> RowQuery<'_> {
        match (&self.row_selector, self.mode) {
            (Some(selector), _) => RowQuery::Selector(selector),
            (None, AlignMode::Remap) => RowQuery::Selector(TABLE_BODY_ROWS),
            (None, AlignMode::Scatter) => RowQuery::Tag(ROW_TAG),
        }
    }
}
