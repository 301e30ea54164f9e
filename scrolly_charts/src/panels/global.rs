// Copyright 2025 the Scrolly Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;

use scrolly_core::{Dimensions, Ease, Surface, Tone, Tooltip};

use super::ids;
use crate::axis::AxisSpec;
use crate::bar_mark::{BarMarkSpec, BarOrient};
use crate::data::GLOBAL_GAP;
use crate::format::format_number;
use crate::layout::Margins;
use crate::palette;
use crate::scale::{ScaleBand, ScaleLinear};
use crate::text_mark::TextMarkSpec;
use crate::timing::Timing;

/// Horizontal bars of the parity index per country.
pub fn global(surface: &mut Surface, dims: Dimensions) {
    let plot = Margins::new(80.0, 80.0, 80.0, 100.0).plot(dims);
    let x = ScaleLinear::new((0.0, 100.0), (plot.x0, plot.x1));
    let y = ScaleBand::new(GLOBAL_GAP.iter().map(|d| d.label), (plot.y0, plot.y1)).with_padding(0.4);

    surface.extend(
        AxisSpec::bottom(ids::X_AXIS, x, plot.y1)
            .with_tick_count(5)
            .with_tick_formatter(|v, _| format!("{}%", format_number(v)))
            .marks(),
    );
    surface.extend(AxisSpec::left(ids::Y_AXIS, y.clone(), plot.x0).with_tick_size(0.0).marks());

    let bw = y.band_width();
    let bars = BarMarkSpec::new(ids::SERIES, BarOrient::Horizontal, y.clone(), x)
        .with_fill(palette::WOMEN)
        .with_corner_radius(6.0)
        .with_grow(Timing::new(1200).with_ease(Ease::ExpOut));
    surface.bind(&GLOBAL_GAP, |i, d| bars.mark(i, d.value));
    for (i, d) in GLOBAL_GAP.iter().enumerate() {
        surface.on_hover(
            bars.id(i),
            Tooltip::new(
                Tone::Women,
                d.label,
                "Parity Index",
                format!("{}%", format_number(d.value)),
            ),
        );
    }

    surface.bind(&GLOBAL_GAP, |i, d| {
        TextMarkSpec::new(
            scrolly_core::MarkId::for_row(ids::LABELS, i),
            (x.map(d.value) + 12.0, y.x(i) + bw / 2.0 + 5.0),
            format!("{}%", format_number(d.value)),
        )
        .with_fill(palette::TEXT)
        .with_font_weight(600)
        .mark()
    });
}
