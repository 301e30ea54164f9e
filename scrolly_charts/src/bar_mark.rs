// Copyright 2025 the Scrolly Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bar mark generation.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Rect;
use peniko::Brush;
use scrolly_core::{Attr, Mark, MarkId};

use crate::scale::{ScaleBand, ScaleLinear};
use crate::timing::Timing;

/// Which way bars extend from their baseline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BarOrient {
    /// Bars grow rightwards; bands are laid out along y.
    Horizontal,
    /// Bars grow upwards; bands are laid out along x.
    Vertical,
}

/// A bar mark spec.
///
/// Generates one [`scrolly_core::MarkKind::Rect`] mark per row, positioned by a band scale and
/// sized by a linear value scale. With [`BarMarkSpec::with_grow`], each bar also gets an entrance
/// transition that grows it out of the baseline.
#[derive(Clone, Debug)]
pub struct BarMarkSpec {
    /// Stable-id base; row `i` uses `id_base + i`.
    pub id_base: u64,
    /// Growth direction.
    pub orient: BarOrient,
    /// Band scale used for bar positions across the growth direction.
    pub band: ScaleBand,
    /// Linear scale used along the growth direction.
    pub value_scale: ScaleLinear,
    /// Offset added to every band position (for grouped bars).
    pub band_offset: f64,
    /// Bar thickness override; defaults to the band width.
    pub thickness: Option<f64>,
    /// Baseline in data units (typically `0.0`).
    pub baseline: f64,
    /// Fill paint for bars.
    pub fill: Brush,
    /// Corner radius.
    pub corner_radius: f64,
    /// Entrance transition timing.
    pub grow: Option<Timing>,
    /// Rendering order hint (`scrolly_core::Mark::z_index`).
    pub z_index: i32,
}

impl BarMarkSpec {
    /// Creates a bar mark spec with `baseline = 0` and a default fill.
    pub fn new(id_base: u64, orient: BarOrient, band: ScaleBand, value_scale: ScaleLinear) -> Self {
        Self {
            id_base,
            orient,
            band,
            value_scale,
            band_offset: 0.0,
            thickness: None,
            baseline: 0.0,
            fill: Brush::default(),
            corner_radius: 0.0,
            grow: None,
            z_index: crate::z_order::SERIES_FILL,
        }
    }

    /// Sets the band offset.
    pub fn with_band_offset(mut self, offset: f64) -> Self {
        self.band_offset = offset;
        self
    }

    /// Sets the bar thickness.
    pub fn with_thickness(mut self, thickness: f64) -> Self {
        self.thickness = Some(thickness);
        self
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets the corner radius.
    pub fn with_corner_radius(mut self, radius: f64) -> Self {
        self.corner_radius = radius;
        self
    }

    /// Grow bars out of the baseline with the given timing.
    pub fn with_grow(mut self, timing: Timing) -> Self {
        self.grow = Some(timing);
        self
    }

    /// Sets the z-index used for render ordering.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Mark id for a row.
    pub fn id(&self, row: usize) -> MarkId {
        MarkId::for_row(self.id_base, row)
    }

    /// Rest geometry of the bar for `row` with `value`.
    pub fn rect(&self, row: usize, value: f64) -> Rect {
        let across0 = self.band.x(row) + self.band_offset;
        let across1 = across0 + self.thickness.unwrap_or_else(|| self.band.band_width());
        let base = self.value_scale.map(self.baseline);
        let end = self.value_scale.map(value);
        match self.orient {
            BarOrient::Horizontal => Rect::new(base.min(end), across0, base.max(end), across1),
            BarOrient::Vertical => Rect::new(across0, end.min(base), across1, end.max(base)),
        }
    }

    /// Generates the mark for one row.
    pub fn mark(&self, row: usize, value: f64) -> Mark {
        let rect = self.rect(row, value);
        let mut builder = Mark::builder(self.id(row))
            .z_index(self.z_index)
            .fill(self.fill.clone())
            .rect(rect)
            .corner_radius(self.corner_radius);
        if let Some(timing) = self.grow {
            match self.orient {
                BarOrient::Horizontal => {
                    builder = builder.transition(timing.transition(Attr::Width, 0.0, rect.width()));
                }
                BarOrient::Vertical => {
                    let base = self.value_scale.map(self.baseline);
                    builder = builder
                        .transition(timing.transition(Attr::Y, base, rect.y0))
                        .transition(timing.transition(Attr::Height, 0.0, rect.height()));
                }
            }
        }
        builder.build()
    }

    /// Generates marks for every value, in row order.
    pub fn marks(&self, values: &[f64]) -> Vec<Mark> {
        values
            .iter()
            .enumerate()
            .map(|(row, v)| self.mark(row, *v))
            .collect()
    }
}
