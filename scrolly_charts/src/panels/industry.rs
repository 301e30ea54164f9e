// Copyright 2025 the Scrolly Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;

use scrolly_core::{Dimensions, Ease, MarkId, Surface, TextAnchor, Tone, Tooltip};

use super::ids;
use crate::axis::AxisSpec;
use crate::bar_mark::{BarMarkSpec, BarOrient};
use crate::data::INDUSTRY_GAP;
use crate::format::format_number;
use crate::layout::Margins;
use crate::palette;
use crate::scale::{ScaleBand, ScaleLinear};
use crate::text_mark::TextMarkSpec;
use crate::timing::Timing;
use crate::z_order;

/// Horizontal bars of the wage gap per sector, springing out elastically.
pub fn industry(surface: &mut Surface, dims: Dimensions) {
    let plot = Margins::new(100.0, 80.0, 80.0, 100.0).plot(dims);
    let x = ScaleLinear::new((0.0, 30.0), (plot.x0, plot.x1));
    let y = ScaleBand::new(INDUSTRY_GAP.iter().map(|d| d.label), (plot.y0, plot.y1)).with_padding(0.3);

    surface.extend(
        AxisSpec::bottom(ids::X_AXIS, x, plot.y1)
            .with_tick_count(5)
            .with_tick_formatter(|v, _| format!("{}%", format_number(v)))
            .marks(),
    );
    surface.extend(AxisSpec::left(ids::Y_AXIS, y.clone(), plot.x0).marks());

    let bars = BarMarkSpec::new(ids::SERIES, BarOrient::Horizontal, y, x)
        .with_fill(palette::WOMEN)
        .with_corner_radius(6.0)
        .with_grow(Timing::new(1500).with_ease(Ease::ElasticOut {
            amplitude: 1.0,
            period: 0.6,
        }));
    surface.bind(&INDUSTRY_GAP, |i, d| bars.mark(i, d.value));
    for (i, d) in INDUSTRY_GAP.iter().enumerate() {
        surface.on_hover(
            bars.id(i),
            Tooltip::new(Tone::Women, d.label, "Wage Gap", format!("{}%", format_number(d.value))),
        );
    }

    surface.push(
        TextMarkSpec::new(
            MarkId::from_raw(ids::ANNOTATIONS),
            ((plot.x0 + plot.x1) / 2.0, plot.y0 - 30.0),
            "WAGE GAP INTENSITY BY SECTOR",
        )
        .with_anchor(TextAnchor::Middle)
        .with_font_size(11.0)
        .with_letter_spacing(0.1)
        .with_fill(palette::TEXT_MUTED)
        .with_z_index(z_order::TITLES)
        .mark(),
    );
}
