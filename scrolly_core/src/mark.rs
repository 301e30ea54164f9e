// Copyright 2025 the Scrolly Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Marks: the retained shapes a chart draws onto a [`Surface`](crate::Surface).

extern crate alloc;

use alloc::string::String;

use kurbo::{BezPath, Point, Rect, Shape};
use peniko::{Brush, Color};
use smallvec::SmallVec;

use crate::tooltip::Tooltip;
use crate::transition::{Attr, Transition};

/// Stable identifier for a [`Mark`] within one surface.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkId(pub u64);

impl MarkId {
    /// Create a mark id from a raw value.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Id for the `row`-th mark of a series whose ids start at `base`.
    pub fn for_row(base: u64, row: usize) -> Self {
        Self(base + row as u64)
    }
}

/// The geometric kind of a mark.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarkKind {
    /// An axis-aligned rectangle, optionally with rounded corners.
    Rect,
    /// A circle.
    Circle,
    /// A single line of text.
    Text,
    /// A vector path.
    Path,
}

/// Horizontal anchoring for text.
///
/// In SVG terms, this maps to the `text-anchor` attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextAnchor {
    /// Anchor at the start (left in LTR).
    Start,
    /// Anchor in the middle.
    Middle,
    /// Anchor at the end (right in LTR).
    End,
}

/// Vertical alignment for text.
///
/// In SVG terms, this maps to the `dominant-baseline` attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextBaseline {
    /// Baseline is centered on the anchor point.
    Middle,
    /// Baseline is the font's alphabetic baseline.
    Alphabetic,
    /// Baseline is the font's hanging baseline.
    Hanging,
}

/// Stroke paint and geometry.
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    /// Stroke paint.
    pub brush: Brush,
    /// Stroke width in surface coordinates.
    pub width: f64,
    /// Dash pattern as `(dash, gap)`; `None` draws a solid line.
    pub dash: Option<(f64, f64)>,
    /// Offset into the dash pattern.
    pub dash_offset: f64,
    /// Whether line ends are rounded.
    pub round_cap: bool,
}

impl Stroke {
    /// Convenience for a solid stroke.
    pub fn solid(brush: impl Into<Brush>, width: f64) -> Self {
        Self {
            brush: brush.into(),
            width,
            dash: None,
            dash_offset: 0.0,
            round_cap: false,
        }
    }

    /// Sets a `(dash, gap)` pattern.
    pub fn with_dash(mut self, dash: f64, gap: f64) -> Self {
        self.dash = Some((dash, gap));
        self
    }

    /// Sets the dash offset.
    pub fn with_dash_offset(mut self, offset: f64) -> Self {
        self.dash_offset = offset;
        self
    }

    /// Enables round line caps.
    pub fn with_round_cap(mut self) -> Self {
        self.round_cap = true;
        self
    }
}

impl Default for Stroke {
    fn default() -> Self {
        Self::solid(Color::BLACK, 1.0)
    }
}

/// Rest geometry and paint for [`MarkKind::Rect`].
#[derive(Clone, Debug, PartialEq)]
pub struct RectChannels {
    /// Rectangle geometry in surface coordinates.
    pub rect: Rect,
    /// Corner radius.
    pub corner_radius: f64,
    /// Fill paint.
    pub fill: Brush,
    /// Optional outline.
    pub stroke: Option<Stroke>,
}

/// Rest geometry and paint for [`MarkKind::Circle`].
#[derive(Clone, Debug, PartialEq)]
pub struct CircleChannels {
    /// Circle center.
    pub center: Point,
    /// Circle radius.
    pub radius: f64,
    /// Fill paint.
    pub fill: Brush,
    /// Optional outline.
    pub stroke: Option<Stroke>,
}

/// Rest content and paint for [`MarkKind::Text`].
#[derive(Clone, Debug, PartialEq)]
pub struct TextChannels {
    /// Anchor position in surface coordinates.
    pub pos: Point,
    /// Text content (unshaped).
    pub text: String,
    /// Font size in surface coordinates.
    pub font_size: f64,
    /// Font weight (`400` normal, `700` bold).
    pub font_weight: u16,
    /// Extra spacing between glyphs, in em.
    pub letter_spacing: f64,
    /// Horizontal anchoring.
    pub anchor: TextAnchor,
    /// Vertical alignment.
    pub baseline: TextBaseline,
    /// Fill paint.
    pub fill: Brush,
}

/// Rest geometry and paint for [`MarkKind::Path`].
#[derive(Clone, Debug, PartialEq)]
pub struct PathChannels {
    /// The vector path geometry.
    pub path: BezPath,
    /// Fill paint.
    pub fill: Brush,
    /// Optional stroke.
    pub stroke: Option<Stroke>,
}

/// Per-kind channels of a mark.
#[derive(Clone, Debug, PartialEq)]
pub enum MarkPayload {
    /// An axis-aligned rectangle.
    Rect(RectChannels),
    /// A circle.
    Circle(CircleChannels),
    /// A text item positioned at a point.
    Text(TextChannels),
    /// A vector path.
    Path(PathChannels),
}

impl MarkPayload {
    /// Return the kind of this payload.
    pub fn kind(&self) -> MarkKind {
        match self {
            Self::Rect(_) => MarkKind::Rect,
            Self::Circle(_) => MarkKind::Circle,
            Self::Text(_) => MarkKind::Text,
            Self::Path(_) => MarkKind::Path,
        }
    }

    /// Bounds of the rest geometry, when known.
    ///
    /// Text is shaped downstream, so its bounds are unknown here.
    pub fn bounds(&self) -> Option<Rect> {
        match self {
            Self::Rect(r) => Some(r.rect),
            Self::Circle(c) => Some(Rect::new(
                c.center.x - c.radius,
                c.center.y - c.radius,
                c.center.x + c.radius,
                c.center.y + c.radius,
            )),
            Self::Text(_) => None,
            Self::Path(p) => Some(p.path.bounding_box()),
        }
    }

    fn stroke(&self) -> Option<&Stroke> {
        match self {
            Self::Rect(r) => r.stroke.as_ref(),
            Self::Circle(c) => c.stroke.as_ref(),
            Self::Path(p) => p.stroke.as_ref(),
            Self::Text(_) => None,
        }
    }

    fn stroke_mut(&mut self) -> Option<&mut Option<Stroke>> {
        match self {
            Self::Rect(r) => Some(&mut r.stroke),
            Self::Circle(c) => Some(&mut c.stroke),
            Self::Path(p) => Some(&mut p.stroke),
            Self::Text(_) => None,
        }
    }
}

/// A shape on a surface: payload plus presentation state.
#[derive(Clone, Debug, PartialEq)]
pub struct Mark {
    /// Stable identifier.
    pub id: MarkId,
    /// Z-ordering for rendering; higher values are drawn above lower values.
    pub z_index: i32,
    /// Rest geometry and paint.
    pub payload: MarkPayload,
    /// Rest opacity in `[0, 1]`.
    pub opacity: f64,
    /// Optional clip rectangle in surface coordinates.
    pub clip: Option<Rect>,
    /// Tooltip shown while the pointer is over this mark.
    pub tooltip: Option<Tooltip>,
    /// Entrance transitions, in the order they were attached.
    pub transitions: SmallVec<[Transition; 2]>,
}

impl Mark {
    /// Start building a mark. The default payload is an empty rectangle.
    pub fn builder(id: MarkId) -> MarkBuilder {
        MarkBuilder {
            mark: Self {
                id,
                z_index: 0,
                payload: MarkPayload::Rect(RectChannels {
                    rect: Rect::ZERO,
                    corner_radius: 0.0,
                    fill: Brush::Solid(Color::BLACK),
                    stroke: None,
                }),
                opacity: 1.0,
                clip: None,
                tooltip: None,
                transitions: SmallVec::new(),
            },
        }
    }

    /// The geometric kind of this mark.
    pub fn kind(&self) -> MarkKind {
        self.payload.kind()
    }

    /// Bounds of the rest geometry, when known.
    pub fn bounds(&self) -> Option<Rect> {
        self.payload.bounds()
    }

    /// Whether this mark responds to pointer hover.
    pub fn is_interactive(&self) -> bool {
        self.tooltip.is_some()
    }

    /// Rest value of an animatable attribute, if the mark has it.
    pub fn attr(&self, attr: Attr) -> Option<f64> {
        match (attr, &self.payload) {
            (Attr::Opacity, _) => Some(self.opacity),
            (Attr::ClipY, _) => self.clip.map(|c| c.y0),
            (Attr::ClipHeight, _) => self.clip.map(|c| c.height()),
            (Attr::DashOffset, payload) => payload.stroke().map(|s| s.dash_offset),
            (Attr::X, MarkPayload::Rect(r)) => Some(r.rect.x0),
            (Attr::Y, MarkPayload::Rect(r)) => Some(r.rect.y0),
            (Attr::Width, MarkPayload::Rect(r)) => Some(r.rect.width()),
            (Attr::Height, MarkPayload::Rect(r)) => Some(r.rect.height()),
            (Attr::Radius, MarkPayload::Circle(c)) => Some(c.radius),
            _ => None,
        }
    }

    /// Attribute value at the first frame: the earliest transition's start value, or the rest
    /// value when the attribute is not animated.
    pub fn start_attr(&self, attr: Attr) -> Option<f64> {
        self.transitions
            .iter()
            .filter(|t| t.attr == attr)
            .min_by_key(|t| t.delay_ms)
            .map(|t| t.from)
            .or_else(|| self.attr(attr))
    }
}

/// A chainable builder for [`Mark`].
#[derive(Debug)]
pub struct MarkBuilder {
    mark: Mark,
}

impl MarkBuilder {
    /// Set the mark z-index (rendering order).
    pub fn z_index(mut self, z_index: i32) -> Self {
        self.mark.z_index = z_index;
        self
    }

    /// Make this a rectangle mark.
    pub fn rect(mut self, rect: Rect) -> Self {
        let fill = self.take_fill();
        self.mark.payload = MarkPayload::Rect(RectChannels {
            rect,
            corner_radius: 0.0,
            fill,
            stroke: None,
        });
        self
    }

    /// Make this a circle mark.
    pub fn circle(mut self, center: impl Into<Point>, radius: f64) -> Self {
        let fill = self.take_fill();
        self.mark.payload = MarkPayload::Circle(CircleChannels {
            center: center.into(),
            radius,
            fill,
            stroke: None,
        });
        self
    }

    /// Make this a text mark.
    pub fn text(mut self, pos: impl Into<Point>, text: impl Into<String>) -> Self {
        let fill = self.take_fill();
        self.mark.payload = MarkPayload::Text(TextChannels {
            pos: pos.into(),
            text: text.into(),
            font_size: 12.0,
            font_weight: 400,
            letter_spacing: 0.0,
            anchor: TextAnchor::Start,
            baseline: TextBaseline::Alphabetic,
            fill,
        });
        self
    }

    /// Make this a path mark. Paths default to no fill.
    pub fn path(mut self, path: BezPath) -> Self {
        self.mark.payload = MarkPayload::Path(PathChannels {
            path,
            fill: Brush::Solid(Color::TRANSPARENT),
            stroke: None,
        });
        self
    }

    /// Set the fill paint.
    pub fn fill(mut self, fill: impl Into<Brush>) -> Self {
        let fill = fill.into();
        match &mut self.mark.payload {
            MarkPayload::Rect(r) => r.fill = fill,
            MarkPayload::Circle(c) => c.fill = fill,
            MarkPayload::Text(t) => t.fill = fill,
            MarkPayload::Path(p) => p.fill = fill,
        }
        self
    }

    /// Set the stroke. Ignored for text.
    pub fn stroke(mut self, stroke: Stroke) -> Self {
        if let Some(slot) = self.mark.payload.stroke_mut() {
            *slot = Some(stroke);
        }
        self
    }

    /// Set the corner radius of a rectangle.
    pub fn corner_radius(mut self, radius: f64) -> Self {
        if let MarkPayload::Rect(r) = &mut self.mark.payload {
            r.corner_radius = radius.max(0.0);
        }
        self
    }

    /// Set the font size of a text mark.
    pub fn font_size(mut self, font_size: f64) -> Self {
        if let MarkPayload::Text(t) = &mut self.mark.payload {
            t.font_size = font_size;
        }
        self
    }

    /// Set the font weight of a text mark.
    pub fn font_weight(mut self, weight: u16) -> Self {
        if let MarkPayload::Text(t) = &mut self.mark.payload {
            t.font_weight = weight;
        }
        self
    }

    /// Set the letter spacing (in em) of a text mark.
    pub fn letter_spacing(mut self, em: f64) -> Self {
        if let MarkPayload::Text(t) = &mut self.mark.payload {
            t.letter_spacing = em;
        }
        self
    }

    /// Set the horizontal anchor of a text mark.
    pub fn text_anchor(mut self, anchor: TextAnchor) -> Self {
        if let MarkPayload::Text(t) = &mut self.mark.payload {
            t.anchor = anchor;
        }
        self
    }

    /// Convenience for `text_anchor(TextAnchor::Middle)`.
    pub fn text_anchor_middle(self) -> Self {
        self.text_anchor(TextAnchor::Middle)
    }

    /// Convenience for `text_anchor(TextAnchor::End)`.
    pub fn text_anchor_end(self) -> Self {
        self.text_anchor(TextAnchor::End)
    }

    /// Set the vertical alignment of a text mark.
    pub fn text_baseline(mut self, baseline: TextBaseline) -> Self {
        if let MarkPayload::Text(t) = &mut self.mark.payload {
            t.baseline = baseline;
        }
        self
    }

    /// Set the rest opacity.
    pub fn opacity(mut self, opacity: f64) -> Self {
        self.mark.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    /// Clip the mark to a rectangle.
    pub fn clip(mut self, clip: Rect) -> Self {
        self.mark.clip = Some(clip);
        self
    }

    /// Attach a hover tooltip.
    pub fn tooltip(mut self, tooltip: Tooltip) -> Self {
        self.mark.tooltip = Some(tooltip);
        self
    }

    /// Attach an entrance transition.
    pub fn transition(mut self, transition: Transition) -> Self {
        self.mark.transitions.push(transition);
        self
    }

    /// Finish the mark.
    pub fn build(self) -> Mark {
        self.mark
    }

    fn take_fill(&mut self) -> Brush {
        let slot = match &mut self.mark.payload {
            MarkPayload::Rect(r) => &mut r.fill,
            MarkPayload::Circle(c) => &mut c.fill,
            MarkPayload::Text(t) => &mut t.fill,
            MarkPayload::Path(p) => &mut p.fill,
        };
        core::mem::replace(slot, Brush::Solid(Color::BLACK))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transition::Ease;

    #[test]
    fn fill_survives_kind_change() {
        let mark = Mark::builder(MarkId(1))
            .fill(Color::WHITE)
            .circle((10.0, 10.0), 4.0)
            .build();
        let MarkPayload::Circle(c) = &mark.payload else {
            panic!("expected circle payload");
        };
        assert_eq!(c.fill, Brush::Solid(Color::WHITE), "fill should carry over");
    }

    #[test]
    fn stroke_is_ignored_for_text() {
        let mark = Mark::builder(MarkId(1))
            .text((0.0, 0.0), "label")
            .stroke(Stroke::default())
            .build();
        assert_eq!(mark.attr(Attr::DashOffset), None, "text has no stroke");
    }

    #[test]
    fn start_attr_uses_earliest_transition() {
        let mark = Mark::builder(MarkId(1))
            .rect(Rect::new(0.0, 0.0, 50.0, 10.0))
            .transition(
                Transition::new(Attr::Width, 0.0, 50.0)
                    .with_delay(100)
                    .with_ease(Ease::ExpOut),
            )
            .build();
        assert_eq!(mark.start_attr(Attr::Width), Some(0.0), "animated start");
        assert_eq!(mark.start_attr(Attr::Height), Some(10.0), "static rest");
        assert_eq!(mark.attr(Attr::Width), Some(50.0), "rest width");
    }

    #[test]
    fn circle_bounds_cover_radius() {
        let mark = Mark::builder(MarkId(1)).circle((5.0, 5.0), 5.0).build();
        assert_eq!(
            mark.bounds(),
            Some(Rect::new(0.0, 0.0, 10.0, 10.0)),
            "circle bounds"
        );
    }
}
