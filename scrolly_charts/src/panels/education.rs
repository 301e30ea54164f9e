// Copyright 2025 the Scrolly Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use scrolly_core::{Dimensions, Surface, Tone, Tooltip};

use super::ids;
use crate::axis::AxisSpec;
use crate::bar_mark::{BarMarkSpec, BarOrient};
use crate::data::EDUCATION_GAP;
use crate::format::{format_dollars, format_dollars_k};
use crate::layout::Margins;
use crate::palette;
use crate::scale::{ScaleBand, ScaleLinear};
use crate::timing::Timing;

/// Grouped columns of earnings per degree, men first and women shortly after.
pub fn education(surface: &mut Surface, dims: Dimensions) {
    let plot = Margins::uniform(80.0).plot(dims);
    let x0 = ScaleBand::new(EDUCATION_GAP.iter().map(|d| d.level), (plot.x0, plot.x1))
        .with_padding_inner(0.2)
        .with_round(true);
    let x1 = ScaleBand::new(["men", "women"], (0.0, x0.band_width()))
        .with_padding(0.05)
        .with_round(true);
    let y = ScaleLinear::new((0.0, 130_000.0), (plot.y1, plot.y0)).with_round(true);

    surface.extend(AxisSpec::bottom(ids::X_AXIS, x0.clone(), plot.y1).marks());
    surface.extend(
        AxisSpec::left(ids::Y_AXIS, y, plot.x0)
            .with_tick_count(5)
            .with_tick_formatter(|v, _| format_dollars_k(v))
            .marks(),
    );

    let groups = [
        (ids::SERIES, "men", Tone::Men, "Men", Timing::new(1000)),
        (
            ids::SERIES_ALT,
            "women",
            Tone::Women,
            "Women",
            Timing::new(1000).with_delay(300),
        ),
    ];
    for (id_base, key, tone, name, timing) in groups {
        let bars = BarMarkSpec::new(id_base, BarOrient::Vertical, x0.clone(), y)
            .with_band_offset(x1.position(key).unwrap_or(0.0))
            .with_thickness(x1.band_width())
            .with_fill(palette::tone(tone))
            .with_corner_radius(4.0)
            .with_grow(timing);
        surface.bind(&EDUCATION_GAP, |i, d| {
            let v = if tone == Tone::Men { d.men } else { d.women };
            bars.mark(i, v)
        });
        for (i, d) in EDUCATION_GAP.iter().enumerate() {
            let v = if tone == Tone::Men { d.men } else { d.women };
            surface.on_hover(bars.id(i), Tooltip::new(tone, d.level, name, format_dollars(v)));
        }
    }
}
