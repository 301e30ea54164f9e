// Copyright 2025 the Scrolly Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;

use kurbo::Rect;
use scrolly_core::{Attr, Dimensions, Ease, MarkId, Stroke, Surface, TextAnchor, Tone, Tooltip};

use super::ids;
use crate::bar_mark::{BarMarkSpec, BarOrient};
use crate::data::LIFETIME_WEALTH;
use crate::format::format_dollars_m;
use crate::layout::Margins;
use crate::palette;
use crate::rect_mark::RectMarkSpec;
use crate::scale::{ScaleBand, ScaleLinear};
use crate::text_mark::TextMarkSpec;
use crate::timing::Timing;
use crate::z_order;

/// Lifetime earnings of men and women, with the missing wealth revealed as a dashed region.
pub fn conclusion(surface: &mut Surface, dims: Dimensions) {
    let plot = Margins::uniform(80.0).plot(dims);
    let [men, women] = LIFETIME_WEALTH;
    let y = ScaleBand::new(LIFETIME_WEALTH.iter().map(|d| d.label), (plot.y0, plot.y1)).with_padding(0.5);
    let x = ScaleLinear::new((0.0, men.value), (plot.x0, plot.x1));
    let bw = y.band_width();

    let gap_id = MarkId::from_raw(ids::ANNOTATIONS);
    let gap_y = y.position(women.label).unwrap_or(plot.y0);
    surface.push(
        RectMarkSpec::new(
            gap_id,
            Rect::new(x.map(women.value), gap_y, x.map(men.value), gap_y + bw),
        )
        .with_fill(palette::LOSS_FILL)
        .with_stroke(Stroke::solid(palette::LOSS_STROKE, 1.0).with_dash(2.0, 2.0))
        .with_corner_radius(4.0)
        .with_z_index(z_order::BACKDROP)
        .mark(),
    );
    surface.animate(
        gap_id,
        Timing::new(800).with_delay(1000).transition(Attr::Opacity, 0.0, 1.0),
    );
    let missing = men.value - women.value;
    surface.on_hover(
        gap_id,
        Tooltip::new(
            Tone::Loss,
            "Missing Wealth",
            "Cumulative Deficit",
            format!("-{}", format_dollars_m(missing, 1)),
        )
        .with_suffix(" over a career."),
    );

    let bars = BarMarkSpec::new(ids::SERIES, BarOrient::Horizontal, y.clone(), x)
        .with_corner_radius(4.0)
        .with_grow(Timing::new(2000).with_ease(Ease::ExpOut));
    surface.bind(&LIFETIME_WEALTH, |i, d| {
        bars.clone().with_fill(palette::tone(d.tone)).mark(i, d.value)
    });

    surface.bind(&LIFETIME_WEALTH, |i, d| {
        TextMarkSpec::new(
            MarkId::for_row(ids::LABELS, i),
            (plot.x0, y.x(i) - 12.0),
            format!("{}: {}", d.label, format_dollars_m(d.value, 2)),
        )
        .with_fill(palette::TEXT)
        .with_font_size(13.0)
        .with_font_weight(600)
        .mark()
    });

    surface.push(
        TextMarkSpec::new(
            MarkId::from_raw(ids::ANNOTATIONS + 1),
            ((plot.x0 + plot.x1) / 2.0, plot.y1 + 50.0),
            "ESTIMATED CUMULATIVE LIFETIME EARNINGS (HOVER GAP TO SEE LOSS)",
        )
        .with_anchor(TextAnchor::Middle)
        .with_fill(palette::TEXT_MUTED)
        .with_font_size(11.0)
        .with_letter_spacing(0.1)
        .with_z_index(z_order::TITLES)
        .mark(),
    );
}
