// Copyright 2025 the Scrolly Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Line mark generation.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{BezPath, ParamCurveArclen, Point};
use peniko::{Brush, Color};
use scrolly_core::{Attr, Mark, MarkId, Stroke};

use crate::scale::ScaleLinear;
use crate::timing::Timing;

/// Interpolation between consecutive points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Curve {
    /// Straight segments.
    #[default]
    Linear,
    /// Cubic segments that preserve monotonicity in `y`, assuming monotone `x`
    /// (Steffen's method, as in d3's `curveMonotoneX`).
    MonotoneX,
}

/// A line mark spec.
///
/// This generates a single [`scrolly_core::MarkKind::Path`] mark through the scaled points.
#[derive(Clone, Debug)]
pub struct LineMarkSpec {
    /// Stable-id for the mark emitted by this spec.
    pub id: MarkId,
    /// Data points as `(x, y)` in data units.
    pub points: Vec<(f64, f64)>,
    /// X scale mapping data x into surface x.
    pub x_scale: ScaleLinear,
    /// Y scale mapping data y into surface y.
    pub y_scale: ScaleLinear,
    /// Interpolation.
    pub curve: Curve,
    /// Stroke for the line.
    pub stroke: Stroke,
    /// Timing of the draw-on animation, if any.
    pub draw_on: Option<Timing>,
    /// Rendering order hint (`scrolly_core::Mark::z_index`).
    pub z_index: i32,
}

impl LineMarkSpec {
    /// Creates a straight line mark spec with a black stroke at width 1.
    pub fn new(
        id: MarkId,
        points: impl IntoIterator<Item = (f64, f64)>,
        x_scale: ScaleLinear,
        y_scale: ScaleLinear,
    ) -> Self {
        Self {
            id,
            points: points.into_iter().collect(),
            x_scale,
            y_scale,
            curve: Curve::Linear,
            stroke: Stroke::solid(Color::BLACK, 1.0),
            draw_on: None,
            z_index: crate::z_order::SERIES_STROKE,
        }
    }

    /// Sets the interpolation.
    pub fn with_curve(mut self, curve: Curve) -> Self {
        self.curve = curve;
        self
    }

    /// Sets the stroke.
    pub fn with_stroke(mut self, stroke: Stroke) -> Self {
        self.stroke = stroke;
        self
    }

    /// Animates the line being drawn from its first point to its last.
    pub fn with_draw_on(mut self, timing: Timing) -> Self {
        self.draw_on = Some(timing);
        self
    }

    /// Sets the z-index used for render ordering.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// The line geometry in surface coordinates.
    pub fn path(&self) -> BezPath {
        let pts: Vec<Point> = self
            .points
            .iter()
            .map(|(x, y)| Point::new(self.x_scale.map(*x), self.y_scale.map(*y)))
            .collect();
        match self.curve {
            Curve::Linear => linear_path(&pts),
            Curve::MonotoneX => monotone_x_path(&pts),
        }
    }

    /// Generates the mark.
    ///
    /// A draw-on animation dashes the stroke with a single dash as long as the path and slides
    /// the dash offset from the full length down to zero.
    pub fn mark(&self) -> Mark {
        let path = self.path();
        let mut stroke = self.stroke.clone();
        let mut builder = Mark::builder(self.id).z_index(self.z_index);
        if let Some(timing) = self.draw_on {
            let len = path_length(&path);
            stroke = stroke.with_dash(len, len).with_dash_offset(0.0);
            builder = builder.transition(timing.transition(Attr::DashOffset, len, 0.0));
        }
        builder
            .path(path)
            .fill(Brush::Solid(Color::TRANSPARENT))
            .stroke(stroke)
            .build()
    }
}

/// Total arc length of a path.
pub fn path_length(path: &BezPath) -> f64 {
    path.segments().map(|seg| seg.arclen(1e-3)).sum()
}

fn linear_path(pts: &[Point]) -> BezPath {
    let mut p = BezPath::new();
    for (i, pt) in pts.iter().enumerate() {
        if i == 0 {
            p.move_to(*pt);
        } else {
            p.line_to(*pt);
        }
    }
    p
}

/// `-1` for negative values and `1` otherwise, so flat segments count as rising.
fn sign(v: f64) -> f64 {
    if v < 0.0 { -1.0 } else { 1.0 }
}

fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() { v } else { 0.0 }
}

/// Monotone cubic interpolation through `pts`.
pub fn monotone_x_path(pts: &[Point]) -> BezPath {
    let n = pts.len();
    if n < 3 {
        return linear_path(pts);
    }

    let h: Vec<f64> = pts.windows(2).map(|w| w[1].x - w[0].x).collect();
    let s: Vec<f64> = pts
        .windows(2)
        .zip(&h)
        .map(|(w, h)| finite_or_zero((w[1].y - w[0].y) / h))
        .collect();

    let mut t = alloc::vec![0.0; n];
    for i in 1..n - 1 {
        let (h0, h1) = (h[i - 1], h[i]);
        let (s0, s1) = (s[i - 1], s[i]);
        let p = (s0 * h1 + s1 * h0) / (h0 + h1);
        t[i] = finite_or_zero((sign(s0) + sign(s1)) * s0.abs().min(s1.abs()).min(0.5 * p.abs()));
    }
    t[0] = (3.0 * s[0] - t[1]) / 2.0;
    t[n - 1] = (3.0 * s[n - 2] - t[n - 2]) / 2.0;

    let mut path = BezPath::new();
    path.move_to(pts[0]);
    for i in 0..n - 1 {
        let (p0, p1) = (pts[i], pts[i + 1]);
        let dx = h[i] / 3.0;
        path.curve_to(
            Point::new(p0.x + dx, p0.y + dx * t[i]),
            Point::new(p1.x - dx, p1.y - dx * t[i + 1]),
            p1,
        );
    }
    path
}

#[cfg(test)]
mod tests {
    extern crate std;

    use kurbo::PathEl;
    use scrolly_core::MarkPayload;

    use super::*;

    fn scales() -> (ScaleLinear, ScaleLinear) {
        (
            ScaleLinear::new((0.0, 10.0), (0.0, 100.0)),
            ScaleLinear::new((0.0, 10.0), (100.0, 0.0)),
        )
    }

    #[test]
    fn monotone_curve_passes_through_points() {
        let pts = [
            Point::new(0.0, 0.0),
            Point::new(1.0, 2.0),
            Point::new(2.0, 3.0),
            Point::new(4.0, 3.5),
        ];
        let path = monotone_x_path(&pts);
        let ends: Vec<Point> = path
            .elements()
            .iter()
            .map(|el| match *el {
                PathEl::MoveTo(p) | PathEl::CurveTo(_, _, p) => p,
                _ => panic!("unexpected element {el:?}"),
            })
            .collect();
        assert_eq!(ends, pts, "segment endpoints are the data points");
    }

    #[test]
    fn monotone_curve_does_not_overshoot() {
        // A plateau: a monotone curve must stay within [1, 2] between the last two points.
        let pts = [
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(2.0, 2.0),
            Point::new(3.0, 2.0),
        ];
        let path = monotone_x_path(&pts);
        for el in path.elements() {
            if let PathEl::CurveTo(c1, c2, _) = *el {
                assert!(c1.y <= 2.0 + 1e-12 && c2.y <= 2.0 + 1e-12, "control overshoot: {el:?}");
            }
        }
    }

    #[test]
    fn two_points_draw_a_straight_segment() {
        let path = monotone_x_path(&[Point::new(0.0, 0.0), Point::new(3.0, 4.0)]);
        assert!((path_length(&path) - 5.0).abs() < 1e-9, "3-4-5 length");
    }

    #[test]
    fn draw_on_dashes_by_path_length() {
        let (x, y) = scales();
        let line = LineMarkSpec::new(MarkId(1), [(0.0, 0.0), (3.0, 4.0)], x, y)
            .with_stroke(Stroke::solid(Color::WHITE, 5.0).with_round_cap())
            .with_draw_on(Timing::new(2500));
        let mark = line.mark();
        let len = path_length(&line.path());
        assert!((len - 50.0).abs() < 1e-6, "scaled length");
        assert_eq!(mark.start_attr(Attr::DashOffset), Some(len), "starts hidden");
        assert_eq!(mark.attr(Attr::DashOffset), Some(0.0), "rests drawn");
        let MarkPayload::Path(p) = &mark.payload else {
            panic!("expected path payload");
        };
        let stroke = p.stroke.as_ref().expect("stroke");
        assert_eq!(stroke.dash, Some((len, len)), "single full-length dash");
        assert!(stroke.round_cap, "round cap kept");
    }
}
