// Copyright 2025 the Scrolly Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text mark generation.

extern crate alloc;

use alloc::string::String;

use kurbo::Point;
use peniko::Brush;
use scrolly_core::{Mark, MarkId, TextAnchor, TextBaseline};

/// A text mark spec.
#[derive(Clone, Debug)]
pub struct TextMarkSpec {
    /// Stable mark id.
    pub id: MarkId,
    /// Anchor position in surface coordinates.
    pub pos: Point,
    /// Text content (unshaped).
    pub text: String,
    /// Font size in surface coordinates.
    pub font_size: f64,
    /// Font weight.
    pub font_weight: u16,
    /// Letter spacing in em.
    pub letter_spacing: f64,
    /// Horizontal anchor.
    pub anchor: TextAnchor,
    /// Vertical baseline.
    pub baseline: TextBaseline,
    /// Fill paint.
    pub fill: Brush,
    /// Rendering order hint (`scrolly_core::Mark::z_index`).
    pub z_index: i32,
}

impl TextMarkSpec {
    /// Creates a new text mark spec with default styling: 12px, normal weight, start-anchored on
    /// the alphabetic baseline.
    pub fn new(id: MarkId, pos: impl Into<Point>, text: impl Into<String>) -> Self {
        Self {
            id,
            pos: pos.into(),
            text: text.into(),
            font_size: 12.0,
            font_weight: 400,
            letter_spacing: 0.0,
            anchor: TextAnchor::Start,
            baseline: TextBaseline::Alphabetic,
            fill: Brush::default(),
            z_index: crate::z_order::ANNOTATIONS,
        }
    }

    /// Sets the font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Sets the font weight.
    pub fn with_font_weight(mut self, weight: u16) -> Self {
        self.font_weight = weight;
        self
    }

    /// Sets letter spacing in em.
    pub fn with_letter_spacing(mut self, em: f64) -> Self {
        self.letter_spacing = em;
        self
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets the text anchor.
    pub fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Sets the text baseline.
    pub fn with_baseline(mut self, baseline: TextBaseline) -> Self {
        self.baseline = baseline;
        self
    }

    /// Sets the z-index used for render ordering.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Generates the mark.
    pub fn mark(&self) -> Mark {
        Mark::builder(self.id)
            .z_index(self.z_index)
            .fill(self.fill.clone())
            .text(self.pos, self.text.clone())
            .font_size(self.font_size)
            .font_weight(self.font_weight)
            .letter_spacing(self.letter_spacing)
            .text_anchor(self.anchor)
            .text_baseline(self.baseline)
            .build()
    }
}
