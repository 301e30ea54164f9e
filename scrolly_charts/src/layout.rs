// Copyright 2025 the Scrolly Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plot-area layout inside a surface.

use kurbo::Rect;
use scrolly_core::Dimensions;

/// Margins around the plot area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Margins {
    /// Space above the plot.
    pub top: f64,
    /// Space right of the plot.
    pub right: f64,
    /// Space below the plot.
    pub bottom: f64,
    /// Space left of the plot.
    pub left: f64,
}

impl Margins {
    /// Equal margins on every side.
    pub const fn uniform(m: f64) -> Self {
        Self {
            top: m,
            right: m,
            bottom: m,
            left: m,
        }
    }

    /// Margins given as `(top, right, bottom, left)`.
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// The plot rectangle for a surface.
    ///
    /// Inner sizes clamp at zero, so small surfaces yield an empty plot at the margin corner
    /// rather than an inverted one.
    pub fn plot(&self, dims: Dimensions) -> Rect {
        let w = (dims.w() - self.left - self.right).max(0.0);
        let h = (dims.h() - self.top - self.bottom).max(0.0);
        Rect::new(self.left, self.top, self.left + w, self.top + h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plot_is_inset_by_margins() {
        let plot = Margins::new(100.0, 80.0, 80.0, 100.0).plot(Dimensions::square(500));
        assert_eq!(plot, Rect::new(100.0, 100.0, 420.0, 420.0), "inset plot");
    }

    #[test]
    fn small_surfaces_clamp_to_empty() {
        let plot = Margins::uniform(80.0).plot(Dimensions::square(100));
        assert_eq!(plot.width(), 0.0, "width clamps");
        assert_eq!(plot.height(), 0.0, "height clamps");
    }
}
