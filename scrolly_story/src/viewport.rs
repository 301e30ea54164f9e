// Copyright 2025 the Scrolly Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Square drawing-area resolution.

use scrolly_core::Dimensions;

use crate::RenderHost;

/// Turns the chart container's measured size into a square drawing area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportResolver {
    /// Smallest side returned for a measurable container.
    pub min_side: f64,
    /// Side returned when the container is missing.
    pub fallback_side: u32,
}

impl Default for ViewportResolver {
    fn default() -> Self {
        Self {
            min_side: 100.0,
            fallback_side: 400,
        }
    }
}

impl ViewportResolver {
    /// Creates a resolver.
    pub fn new(min_side: f64, fallback_side: u32) -> Self {
        Self {
            min_side,
            fallback_side,
        }
    }

    /// Measures `host` and resolves its drawing area.
    pub fn resolve(&self, host: &impl RenderHost) -> Dimensions {
        self.resolve_size(host.measure())
    }

    /// Resolves a measured `(width, height)`.
    ///
    /// The side is `floor(max(min(width, height), min_side))`. Non-finite and negative sizes
    /// count as zero.
    pub fn resolve_size(&self, size: Option<(f64, f64)>) -> Dimensions {
        let Some((width, height)) = size else {
            return Dimensions::square(self.fallback_side);
        };
        let side = clean(width).min(clean(height)).max(self.min_side).floor();
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "side is finite, non-negative and floored"
        )]
        let side = side.min(f64::from(u32::MAX)) as u32;
        Dimensions::square(side)
    }
}

fn clean(v: f64) -> f64 {
    if v.is_finite() && v > 0.0 { v } else { 0.0 }
}
