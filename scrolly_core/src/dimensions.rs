// Copyright 2025 the Scrolly Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawing-area dimensions.

use kurbo::Rect;

/// The pixel size of a drawing surface.
///
/// Both sides are at least one pixel; constructors clamp zero to one so draw procedures never
/// see a degenerate area.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Dimensions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Dimensions {
    /// Creates dimensions, clamping each side to at least one pixel.
    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            width: if width == 0 { 1 } else { width },
            height: if height == 0 { 1 } else { height },
        }
    }

    /// Creates square dimensions.
    pub const fn square(side: u32) -> Self {
        Self::new(side, side)
    }

    /// Width as `f64`.
    pub fn w(&self) -> f64 {
        f64::from(self.width)
    }

    /// Height as `f64`.
    pub fn h(&self) -> f64 {
        f64::from(self.height)
    }

    /// The full surface rectangle, anchored at the origin.
    pub fn rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.w(), self.h())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_sides_clamp_to_one() {
        let d = Dimensions::new(0, 0);
        assert_eq!(d, Dimensions::new(1, 1), "zero sides should clamp");
    }

    #[test]
    fn rect_spans_surface() {
        let d = Dimensions::new(300, 200);
        assert_eq!(d.rect(), Rect::new(0.0, 0.0, 300.0, 200.0), "rect mismatch");
    }
}
