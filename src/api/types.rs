//! Result types returned to JavaScript

use crate::align::Alignment;
use crate::config::AlignMode;

/// Summary of one alignment pass
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AlignReport {
    pub mode: AlignMode,
    pub row_count: usize,
    pub points: String,     // Value written to `points`
    pub view_box: String,   // Value written to `viewBox`
}

impl From<&Alignment> for AlignReport {
    fn from(alignment: &Alignment) -> Self {
        Self {
            mode: alignment.mode,
            row_count: alignment.row_count,
            points: alignment.points_attr(),
            view_box: alignment.view_box_attr(),
        }
    }
}
