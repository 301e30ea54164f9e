// Copyright 2025 the Scrolly Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis mark generation.
//!
//! Axes mirror d3's `axisBottom`/`axisLeft`: a domain path with outer ticks at both ends, one
//! inner tick per value, and a label offset from the tick by `tick_padding`.

extern crate alloc;

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use kurbo::BezPath;
use peniko::Brush;
use scrolly_core::{Mark, MarkId, Stroke, TextAnchor, TextBaseline};

use crate::format::format_tick_with_step;
use crate::palette;
use crate::scale::{ScaleBand, ScaleLinear};
use crate::z_order;

/// Axis styling.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisStyle {
    /// Paint for the domain path and tick lines.
    pub rule: Brush,
    /// Width of the domain path and tick lines.
    pub rule_width: f64,
    /// Fill paint for tick labels.
    pub label_fill: Brush,
    /// Font size for tick labels.
    pub label_font_size: f64,
}

impl Default for AxisStyle {
    fn default() -> Self {
        Self {
            rule: Brush::Solid(palette::AXIS),
            rule_width: 1.0,
            label_fill: Brush::Solid(palette::TEXT_MUTED),
            label_font_size: 11.0,
        }
    }
}

/// Axis orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisOrient {
    /// A horizontal axis with ticks and labels below the line.
    Bottom,
    /// A vertical axis with ticks and labels left of the line.
    Left,
}

/// The scale an axis annotates.
#[derive(Clone, Debug, PartialEq)]
pub enum AxisScale {
    /// Continuous values; ticks come from [`ScaleLinear::ticks`].
    Linear(ScaleLinear),
    /// Categories; one tick per band, centered in the band.
    Band(ScaleBand),
}

impl From<ScaleLinear> for AxisScale {
    fn from(value: ScaleLinear) -> Self {
        Self::Linear(value)
    }
}

impl From<ScaleBand> for AxisScale {
    fn from(value: ScaleBand) -> Self {
        Self::Band(value)
    }
}

/// An axis specification.
#[derive(Clone)]
pub struct AxisSpec {
    /// Stable-id base; each generated mark uses a deterministic offset from this base.
    pub id_base: u64,
    /// The annotated scale. Its range gives positions along the axis.
    pub scale: AxisScale,
    /// Axis placement.
    pub orient: AxisOrient,
    /// Cross-axis position of the domain line (`y` for bottom axes, `x` for left axes).
    pub position: f64,
    /// Approximate number of ticks for linear scales.
    pub tick_count: usize,
    /// Length of the per-value tick lines.
    pub tick_size_inner: f64,
    /// Length of the end ticks drawn by the domain path.
    pub tick_size_outer: f64,
    /// Distance between the tick end and its label.
    pub tick_padding: f64,
    /// Axis styling.
    pub style: AxisStyle,
    /// Optional tick label formatter for linear scales.
    ///
    /// The second argument is the tick step.
    pub tick_formatter: Option<Arc<dyn Fn(f64, f64) -> String>>,
}

impl core::fmt::Debug for AxisSpec {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AxisSpec")
            .field("id_base", &self.id_base)
            .field("scale", &self.scale)
            .field("orient", &self.orient)
            .field("position", &self.position)
            .field("tick_count", &self.tick_count)
            .field("tick_size_inner", &self.tick_size_inner)
            .field("tick_size_outer", &self.tick_size_outer)
            .field("tick_padding", &self.tick_padding)
            .field("style", &self.style)
            .field("tick_formatter", &self.tick_formatter.is_some())
            .finish()
    }
}

impl AxisSpec {
    /// Creates an axis with d3's defaults: 10 ticks, tick size 6, tick padding 3.
    pub fn new(id_base: u64, scale: impl Into<AxisScale>, orient: AxisOrient, position: f64) -> Self {
        Self {
            id_base,
            scale: scale.into(),
            orient,
            position,
            tick_count: 10,
            tick_size_inner: 6.0,
            tick_size_outer: 6.0,
            tick_padding: 3.0,
            style: AxisStyle::default(),
            tick_formatter: None,
        }
    }

    /// Convenience constructor for a bottom axis whose line sits at `y`.
    pub fn bottom(id_base: u64, scale: impl Into<AxisScale>, y: f64) -> Self {
        Self::new(id_base, scale, AxisOrient::Bottom, y)
    }

    /// Convenience constructor for a left axis whose line sits at `x`.
    pub fn left(id_base: u64, scale: impl Into<AxisScale>, x: f64) -> Self {
        Self::new(id_base, scale, AxisOrient::Left, x)
    }

    /// Set the approximate tick count.
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    /// Set both inner and outer tick sizes.
    pub fn with_tick_size(mut self, tick_size: f64) -> Self {
        self.tick_size_inner = tick_size;
        self.tick_size_outer = tick_size;
        self
    }

    /// Set tick padding.
    pub fn with_tick_padding(mut self, tick_padding: f64) -> Self {
        self.tick_padding = tick_padding;
        self
    }

    /// Set a custom tick label formatter.
    pub fn with_tick_formatter(mut self, f: impl Fn(f64, f64) -> String + 'static) -> Self {
        self.tick_formatter = Some(Arc::new(f));
        self
    }

    /// Set the axis style.
    pub fn with_style(mut self, style: AxisStyle) -> Self {
        self.style = style;
        self
    }

    /// Tick positions along the axis paired with their labels.
    pub fn ticks(&self) -> Vec<(f64, String)> {
        match &self.scale {
            AxisScale::Linear(s) => {
                let values = s.ticks(self.tick_count);
                let step = tick_step(&values);
                values
                    .into_iter()
                    .map(|v| (s.map(v), self.format_tick(v, step)))
                    .collect()
            }
            AxisScale::Band(s) => {
                let mut offset = (s.band_width().max(0.0)) * 0.5;
                if s.is_round() {
                    offset = offset.round();
                }
                s.labels()
                    .iter()
                    .enumerate()
                    .map(|(i, label)| (s.x(i) + offset, label.clone()))
                    .collect()
            }
        }
    }

    fn range(&self) -> (f64, f64) {
        match &self.scale {
            AxisScale::Linear(s) => s.range(),
            // The domain spans the full range, not just the bands.
            AxisScale::Band(s) => s.range(),
        }
    }

    fn format_tick(&self, v: f64, step: f64) -> String {
        match &self.tick_formatter {
            Some(f) => (f)(v, step),
            None => format_tick_with_step(v, step),
        }
    }

    /// Generates the axis marks.
    pub fn marks(&self) -> Vec<Mark> {
        let (r0, r1) = self.range();
        let k = self.tick_size_outer;
        let p = self.position;

        let mut domain = BezPath::new();
        match self.orient {
            AxisOrient::Bottom => {
                domain.move_to((r0, p + k));
                domain.line_to((r0, p));
                domain.line_to((r1, p));
                domain.line_to((r1, p + k));
            }
            AxisOrient::Left => {
                domain.move_to((p - k, r0));
                domain.line_to((p, r0));
                domain.line_to((p, r1));
                domain.line_to((p - k, r1));
            }
        }

        let rule = Stroke::solid(self.style.rule.clone(), self.style.rule_width);
        let mut out = alloc::vec![
            Mark::builder(MarkId::from_raw(self.id_base))
                .z_index(z_order::AXIS_RULES)
                .path(domain)
                .stroke(rule.clone())
                .build()
        ];

        let inner = self.tick_size_inner.max(0.0);
        let label_gap = inner + self.tick_padding;
        for (i, (at, label)) in self.ticks().into_iter().enumerate() {
            let mut tick = BezPath::new();
            let (label_pos, anchor, baseline) = match self.orient {
                AxisOrient::Bottom => {
                    tick.move_to((at, p));
                    tick.line_to((at, p + inner));
                    ((at, p + label_gap), TextAnchor::Middle, TextBaseline::Hanging)
                }
                AxisOrient::Left => {
                    tick.move_to((p, at));
                    tick.line_to((p - inner, at));
                    ((p - label_gap, at), TextAnchor::End, TextBaseline::Middle)
                }
            };
            out.push(
                Mark::builder(MarkId::from_raw(self.id_base + 1 + i as u64))
                    .z_index(z_order::AXIS_RULES)
                    .path(tick)
                    .stroke(rule.clone())
                    .build(),
            );
            out.push(
                Mark::builder(MarkId::from_raw(self.id_base + 1000 + i as u64))
                    .z_index(z_order::AXIS_LABELS)
                    .fill(self.style.label_fill.clone())
                    .text(label_pos, label)
                    .font_size(self.style.label_font_size)
                    .text_anchor(anchor)
                    .text_baseline(baseline)
                    .build(),
            );
        }
        out
    }
}

fn tick_step(ticks: &[f64]) -> f64 {
    let step = ticks
        .windows(2)
        .map(|w| (w[1] - w[0]).abs())
        .fold(f64::INFINITY, f64::min);
    if step.is_finite() { step } else { 0.0 }
}
