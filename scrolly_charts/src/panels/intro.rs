// Copyright 2025 the Scrolly Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};
use peniko::Color;
use scrolly_core::{Attr, Dimensions, Ease, Mark, MarkId, Stroke, Surface, TextAnchor, Tone, Tooltip};

use crate::palette;
use crate::text_mark::TextMarkSpec;
use crate::timing::Timing;
use crate::z_order;

/// Share of the man's circle the woman's fill covers.
const WOMAN_SHARE: f64 = 0.82;

/// Two circles: a man's dollar, and a woman's 82 cents shown as a partially filled circle.
pub fn intro(surface: &mut Surface, dims: Dimensions) {
    let (w, h) = (dims.w(), dims.h());
    let radius = (w / 6.0).min(h / 3.5);
    let spacing = radius * 1.3;
    let man = Point::new(w / 2.0 - spacing, h / 2.0);
    let woman = Point::new(w / 2.0 + spacing, h / 2.0);
    let font_size = (radius / 5.5).max(10.0);

    surface.push(placeholder(MarkId(1), man, radius, palette::PLACEHOLDER_MEN));
    surface.push(
        Mark::builder(MarkId(2))
            .fill(palette::MEN)
            .circle(man, radius)
            .transition(
                Timing::new(1000)
                    .with_ease(Ease::ELASTIC_OUT)
                    .transition(Attr::Radius, 0.0, radius),
            )
            .build(),
    );
    surface.push(label(MarkId(3), man, radius, "MAN ($1.00)", palette::TEXT, font_size));

    surface.push(placeholder(MarkId(4), woman, radius, palette::PLACEHOLDER_WOMEN));
    surface.push(
        Mark::builder(MarkId(5))
            .fill(Color::TRANSPARENT)
            .circle(woman, radius)
            .build(),
    );
    surface.on_hover(
        MarkId(5),
        Tooltip::new(Tone::Women, "Wage Disparity", "Uncontrolled Gap", "-18%"),
    );

    // The clip rises from the bottom of the circle to cover 82% of its diameter.
    let filled = radius * 2.0 * WOMAN_SHARE;
    let bottom = woman.y + radius;
    surface.push(
        Mark::builder(MarkId(6))
            .fill(palette::WOMEN)
            .circle(woman, radius)
            .clip(Rect::new(woman.x - radius, bottom - filled, woman.x + radius, bottom))
            .build(),
    );
    let reveal = Timing::new(1500).with_ease(Ease::ExpOut);
    surface.animate(MarkId(6), reveal.transition(Attr::ClipY, bottom, bottom - filled));
    surface.animate(MarkId(6), reveal.transition(Attr::ClipHeight, 0.0, filled));
    surface.push(label(MarkId(7), woman, radius, "WOMAN ($0.82)", palette::WOMEN, font_size));
}

fn placeholder(id: MarkId, center: Point, radius: f64, fill: Color) -> Mark {
    Mark::builder(id)
        .z_index(z_order::BACKDROP)
        .fill(fill)
        .circle(center, radius)
        .stroke(Stroke::solid(palette::PLACEHOLDER_STROKE, 1.0).with_dash(4.0, 4.0))
        .build()
}

fn label(id: MarkId, center: Point, radius: f64, text: &str, fill: Color, font_size: f64) -> Mark {
    TextMarkSpec::new(id, (center.x, center.y + radius + 45.0), text)
        .with_anchor(TextAnchor::Middle)
        .with_fill(fill)
        .with_font_weight(600)
        .with_font_size(font_size)
        .mark()
}
