// Copyright 2025 the Scrolly Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG serialization of a [`Surface`].
//!
//! Every element carries a `data-mark` attribute with its [`MarkId`], and every clip rectangle a
//! `data-clip` attribute, so frontends can look elements up when driving transitions and hover.

extern crate alloc;

use alloc::string::String;
use core::fmt::Write as _;

use kurbo::{BezPath, PathEl};
use peniko::Brush;

use crate::mark::{Mark, MarkId, MarkPayload, Stroke, TextAnchor, TextBaseline};
use crate::surface::Surface;
use crate::transition::Attr;

/// Which point of the entrance transitions to serialize.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SvgFrame {
    /// Values at the first frame, before any transition has run.
    Start,
    /// Rest values, after every transition has finished.
    Rest,
}

/// Serialize a surface to a standalone SVG document.
pub fn to_svg_string(surface: &Surface, frame: SvgFrame) -> String {
    let mut out = String::new();
    // Writing into a `String` cannot fail.
    let _ = write_svg(&mut out, surface, frame);
    out
}

/// Serialize a surface as SVG into `out`.
pub fn write_svg(out: &mut impl core::fmt::Write, surface: &Surface, frame: SvgFrame) -> core::fmt::Result {
    let d = surface.dimensions();
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" width="{w}" height="{h}">"#,
        w = d.width,
        h = d.height,
    )?;

    let order = surface.paint_order();
    if order.iter().any(|m| m.clip.is_some()) {
        out.write_str("<defs>\n")?;
        for mark in order.iter().filter(|m| m.clip.is_some()) {
            write_clip(out, mark, frame)?;
        }
        out.write_str("</defs>\n")?;
    }

    for mark in order {
        write_mark(out, mark, frame)?;
    }

    out.write_str("</svg>\n")
}

fn value(mark: &Mark, attr: Attr, frame: SvgFrame) -> f64 {
    let v = match frame {
        SvgFrame::Start => mark.start_attr(attr),
        SvgFrame::Rest => mark.attr(attr),
    };
    v.unwrap_or_default()
}

fn clip_id(id: MarkId) -> String {
    let mut s = String::new();
    let _ = write!(s, "clip-{}", id.0);
    s
}

fn write_clip(out: &mut impl core::fmt::Write, mark: &Mark, frame: SvgFrame) -> core::fmt::Result {
    let Some(clip) = mark.clip else {
        return Ok(());
    };
    writeln!(
        out,
        r#"<clipPath id="{}"><rect data-clip="{}" x="{}" y="{}" width="{}" height="{}"/></clipPath>"#,
        clip_id(mark.id),
        mark.id.0,
        clip.x0,
        value(mark, Attr::ClipY, frame),
        clip.width(),
        value(mark, Attr::ClipHeight, frame),
    )
}

fn write_mark(out: &mut impl core::fmt::Write, mark: &Mark, frame: SvgFrame) -> core::fmt::Result {
    match &mark.payload {
        MarkPayload::Rect(r) => {
            write!(
                out,
                r#"<rect data-mark="{}" x="{}" y="{}" width="{}" height="{}""#,
                mark.id.0,
                value(mark, Attr::X, frame),
                value(mark, Attr::Y, frame),
                value(mark, Attr::Width, frame).max(0.0),
                value(mark, Attr::Height, frame).max(0.0),
            )?;
            if r.corner_radius > 0.0 {
                write!(out, r#" rx="{}""#, r.corner_radius)?;
            }
            write_paint_attr(out, "fill", &r.fill)?;
            write_stroke(out, mark, r.stroke.as_ref(), frame)?;
            write_common(out, mark, frame)?;
            out.write_str("/>\n")
        }
        MarkPayload::Circle(c) => {
            write!(
                out,
                r#"<circle data-mark="{}" cx="{}" cy="{}" r="{}""#,
                mark.id.0,
                c.center.x,
                c.center.y,
                value(mark, Attr::Radius, frame).max(0.0),
            )?;
            write_paint_attr(out, "fill", &c.fill)?;
            write_stroke(out, mark, c.stroke.as_ref(), frame)?;
            write_common(out, mark, frame)?;
            out.write_str("/>\n")
        }
        MarkPayload::Text(t) => {
            let baseline = match t.baseline {
                TextBaseline::Middle => "middle",
                TextBaseline::Alphabetic => "alphabetic",
                TextBaseline::Hanging => "hanging",
            };
            write!(
                out,
                r#"<text data-mark="{}" x="{}" y="{}" font-size="{}" dominant-baseline="{}""#,
                mark.id.0, t.pos.x, t.pos.y, t.font_size, baseline
            )?;
            if t.font_weight != 400 {
                write!(out, r#" font-weight="{}""#, t.font_weight)?;
            }
            if t.letter_spacing != 0.0 {
                write!(out, r#" letter-spacing="{}em""#, t.letter_spacing)?;
            }
            out.write_str(match t.anchor {
                TextAnchor::Start => r#" text-anchor="start""#,
                TextAnchor::Middle => r#" text-anchor="middle""#,
                TextAnchor::End => r#" text-anchor="end""#,
            })?;
            write_paint_attr(out, "fill", &t.fill)?;
            write_common(out, mark, frame)?;
            out.write_char('>')?;
            write_escaped(out, &t.text)?;
            out.write_str("</text>\n")
        }
        MarkPayload::Path(p) => {
            write!(out, r#"<path data-mark="{}" d=""#, mark.id.0)?;
            write_path_data(out, &p.path)?;
            out.write_char('"')?;
            write_paint_attr(out, "fill", &p.fill)?;
            write_stroke(out, mark, p.stroke.as_ref(), frame)?;
            write_common(out, mark, frame)?;
            out.write_str("/>\n")
        }
    }
}

fn write_common(out: &mut impl core::fmt::Write, mark: &Mark, frame: SvgFrame) -> core::fmt::Result {
    let opacity = value(mark, Attr::Opacity, frame);
    if opacity < 1.0 {
        write!(out, r#" opacity="{opacity}""#)?;
    }
    if mark.clip.is_some() {
        write!(out, r#" clip-path="url(#{})""#, clip_id(mark.id))?;
    }
    if mark.is_interactive() {
        // Transparent hover targets are written with `fill="none"` and must still hit-test.
        out.write_str(r#" pointer-events="all""#)?;
    } else {
        // Hover targets may sit underneath decorative marks.
        out.write_str(r#" pointer-events="none""#)?;
    }
    Ok(())
}

fn write_stroke(
    out: &mut impl core::fmt::Write,
    mark: &Mark,
    stroke: Option<&Stroke>,
    frame: SvgFrame,
) -> core::fmt::Result {
    let Some(stroke) = stroke else {
        return Ok(());
    };
    write_paint_attr(out, "stroke", &stroke.brush)?;
    write!(out, r#" stroke-width="{}""#, stroke.width)?;
    if let Some((dash, gap)) = stroke.dash {
        write!(out, r#" stroke-dasharray="{dash},{gap}""#)?;
        let offset = value(mark, Attr::DashOffset, frame);
        if offset != 0.0 {
            write!(out, r#" stroke-dashoffset="{offset}""#)?;
        }
    }
    if stroke.round_cap {
        out.write_str(r#" stroke-linecap="round""#)?;
    }
    Ok(())
}

fn write_paint_attr(out: &mut impl core::fmt::Write, name: &str, brush: &Brush) -> core::fmt::Result {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            if rgba.a == 0 {
                return write!(out, r#" {name}="none""#);
            }
            write!(
                out,
                r##" {name}="#{:02x}{:02x}{:02x}""##,
                rgba.r, rgba.g, rgba.b
            )?;
            if rgba.a != 255 {
                write!(out, r#" {name}-opacity="{}""#, f64::from(rgba.a) / 255.0)?;
            }
            Ok(())
        }
        _ => write!(out, r#" {name}="none""#),
    }
}

/// Write SVG path data (`d` attribute contents) for a path.
pub fn write_path_data(out: &mut impl core::fmt::Write, path: &BezPath) -> core::fmt::Result {
    let mut first = true;
    for el in path.elements() {
        if !first {
            out.write_char(' ')?;
        }
        first = false;
        match *el {
            PathEl::MoveTo(p) => write!(out, "M{},{}", p.x, p.y)?,
            PathEl::LineTo(p) => write!(out, "L{},{}", p.x, p.y)?,
            PathEl::QuadTo(p1, p2) => write!(out, "Q{},{} {},{}", p1.x, p1.y, p2.x, p2.y)?,
            PathEl::CurveTo(p1, p2, p3) => write!(
                out,
                "C{},{} {},{} {},{}",
                p1.x, p1.y, p2.x, p2.y, p3.x, p3.y
            )?,
            PathEl::ClosePath => out.write_char('Z')?,
        }
    }
    Ok(())
}

/// Write `s` with XML special characters escaped.
pub fn write_escaped(out: &mut impl core::fmt::Write, s: &str) -> core::fmt::Result {
    for c in s.chars() {
        match c {
            '&' => out.write_str("&amp;")?,
            '<' => out.write_str("&lt;")?,
            '>' => out.write_str("&gt;")?,
            '"' => out.write_str("&quot;")?,
            '\'' => out.write_str("&apos;")?,
            _ => out.write_char(c)?,
        }
    }
    Ok(())
}
