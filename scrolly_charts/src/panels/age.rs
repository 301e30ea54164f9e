// Copyright 2025 the Scrolly Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;

use peniko::Color;
use scrolly_core::{Dimensions, Ease, MarkId, Stroke, Surface};

use super::ids;
use crate::axis::AxisSpec;
use crate::data::LIFETIME_EARNINGS;
use crate::format::{format_dollars_k, format_number};
use crate::layout::Margins;
use crate::line_mark::{Curve, LineMarkSpec};
use crate::palette;
use crate::scale::ScaleLinear;
use crate::text_mark::TextMarkSpec;
use crate::timing::Timing;

/// Two earnings curves over a career, drawn on from left to right.
pub fn age(surface: &mut Surface, dims: Dimensions) {
    let plot = Margins::uniform(80.0).plot(dims);
    let x = ScaleLinear::new((20.0, 65.0), (plot.x0, plot.x1));
    let y = ScaleLinear::new((0.0, 110_000.0), (plot.y1, plot.y0));

    surface.extend(
        AxisSpec::bottom(ids::X_AXIS, x, plot.y1)
            .with_tick_count(5)
            .with_tick_formatter(|v, _| format!("{} yrs", format_number(v)))
            .marks(),
    );
    surface.extend(
        AxisSpec::left(ids::Y_AXIS, y, plot.x0)
            .with_tick_formatter(|v, _| format_dollars_k(v))
            .marks(),
    );

    let draw_on = Timing::new(2500).with_ease(Ease::CubicInOut);
    let series = [
        (
            palette::MEN,
            LIFETIME_EARNINGS.map(|d| (d.age, d.men)),
            "Men",
            105_000.0,
        ),
        (
            palette::WOMEN,
            LIFETIME_EARNINGS.map(|d| (d.age, d.women)),
            "Women",
            82_000.0,
        ),
    ];
    for (i, (color, points, name, label_at)) in series.into_iter().enumerate() {
        surface.push(
            LineMarkSpec::new(MarkId::for_row(ids::SERIES, i), points, x, y)
                .with_curve(Curve::MonotoneX)
                .with_stroke(Stroke::solid(color, 5.0).with_round_cap())
                .with_draw_on(draw_on)
                .mark(),
        );
        surface.push(series_label(i, (plot.x1 - 60.0, y.map(label_at)), name, color));
    }
}

fn series_label(i: usize, pos: (f64, f64), name: &str, color: Color) -> scrolly_core::Mark {
    TextMarkSpec::new(MarkId::for_row(ids::LABELS, i), pos, name)
        .with_fill(color)
        .with_font_size(14.0)
        .with_font_weight(700)
        .mark()
}
