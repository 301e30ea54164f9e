// Copyright 2025 the Scrolly Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rectangle mark generation.

use kurbo::Rect;
use peniko::Brush;
use scrolly_core::{Mark, MarkId, Stroke};

/// A rectangle mark spec.
#[derive(Clone, Debug)]
pub struct RectMarkSpec {
    /// Stable mark id.
    pub id: MarkId,
    /// Rectangle geometry in surface coordinates.
    pub rect: Rect,
    /// Fill paint.
    pub fill: Brush,
    /// Optional outline.
    pub stroke: Option<Stroke>,
    /// Corner radius.
    pub corner_radius: f64,
    /// Rest opacity.
    pub opacity: f64,
    /// Rendering order hint (`scrolly_core::Mark::z_index`).
    pub z_index: i32,
}

impl RectMarkSpec {
    /// Creates a new rectangle mark spec.
    pub fn new(id: MarkId, rect: Rect) -> Self {
        Self {
            id,
            rect,
            fill: Brush::default(),
            stroke: None,
            corner_radius: 0.0,
            opacity: 1.0,
            z_index: crate::z_order::SERIES_FILL,
        }
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets the outline.
    pub fn with_stroke(mut self, stroke: Stroke) -> Self {
        self.stroke = Some(stroke);
        self
    }

    /// Sets the corner radius.
    pub fn with_corner_radius(mut self, radius: f64) -> Self {
        self.corner_radius = radius;
        self
    }

    /// Sets the rest opacity.
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    /// Sets the z-index used for render ordering.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Generates the mark.
    pub fn mark(&self) -> Mark {
        let mut builder = Mark::builder(self.id)
            .z_index(self.z_index)
            .fill(self.fill.clone())
            .rect(self.rect)
            .corner_radius(self.corner_radius)
            .opacity(self.opacity);
        if let Some(stroke) = &self.stroke {
            builder = builder.stroke(stroke.clone());
        }
        builder.build()
    }
}
