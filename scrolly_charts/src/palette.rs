// Copyright 2025 the Scrolly Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Story colours.

use peniko::Color;

/// Series colour for men.
pub const MEN: Color = Color::from_rgb8(0x3b, 0x82, 0xf6);
/// Series colour for women.
pub const WOMEN: Color = Color::from_rgb8(0xec, 0x48, 0x99);
/// Muted text for tick labels and captions.
pub const TEXT_MUTED: Color = Color::from_rgb8(0x9c, 0xa3, 0xaf);
/// Axis lines.
pub const AXIS: Color = Color::from_rgb8(0x37, 0x41, 0x51);
/// Primary label text.
pub const TEXT: Color = Color::WHITE;

/// Fill of the man's placeholder circle.
pub const PLACEHOLDER_MEN: Color = Color::from_rgb8(0x11, 0x11, 0x11);
/// Fill of the woman's placeholder circle.
pub const PLACEHOLDER_WOMEN: Color = Color::from_rgb8(0x1a, 0x1a, 0x1a);
/// Dashed outline of placeholder circles.
pub const PLACEHOLDER_STROKE: Color = Color::from_rgb8(0x33, 0x33, 0x33);

/// Fill of the lifetime-deficit region.
pub const LOSS_FILL: Color = Color::from_rgb8(0x2d, 0x1a, 0x24);
/// Outline of the lifetime-deficit region.
pub const LOSS_STROKE: Color = Color::from_rgb8(0x4b, 0x21, 0x31);
/// Accent for losses in tooltips.
pub const LOSS_TEXT: Color = Color::from_rgb8(0xf8, 0x71, 0x71);

/// Accent colour for a tooltip tone.
pub fn tone(tone: scrolly_core::Tone) -> Color {
    match tone {
        scrolly_core::Tone::Men => MEN,
        scrolly_core::Tone::Women => WOMEN,
        scrolly_core::Tone::Loss => LOSS_TEXT,
    }
}
