//! SVG `viewBox` rectangle

use crate::utils::js_number::js_number_str;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewBox {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewBox {
    pub fn new(min_x: f64, min_y: f64, width: f64, height: f64) -> Self {
        Self { min_x, min_y, width, height }
    }

    /// Viewbox used by the remap layout: `0 0 1 <height>`.
    ///
    /// The width of 1 is what the calendar page has always shipped with.
    /// It looks like a defect but is kept until someone confirms the intent.
    pub fn legacy(height: f64) -> Self {
        Self::new(0.0, 0.0, 1.0, height)
    }

    /// Viewbox covering the whole rendered page.
    pub fn page(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }
}

impl fmt::Display for ViewBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = ryu_js::Buffer::new();
        let parts = [self.min_x, self.min_y, self.width, self.height];
        for (i, value) in parts.into_iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(js_number_str(value, &mut buf))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_viewbox_keeps_unit_width() {
        assert_eq!(ViewBox::legacy(800.0).to_string(), "0 0 1 800");
    }

    #[test]
    fn test_page_viewbox() {
        assert_eq!(ViewBox::page(1024.0, 768.0).to_string(), "0 0 1024 768");
    }

    #[test]
    fn test_fractional_dimensions() {
        assert_eq!(ViewBox::new(-0.0, 2.5, 10.0, 0.1).to_string(), "0 2.5 10 0.1");
    }
}
