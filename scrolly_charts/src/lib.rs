// Copyright 2025 the Scrolly Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart building blocks and story panels for `scrolly_core`.
//!
//! This crate is a small layer above `scrolly_core`:
//! - **Scales** map data values into surface coordinates, following d3 conventions.
//! - **Axes** and **mark specs** generate `scrolly_core::Mark`s with stable ids.
//! - **Panels** are complete draw procedures, one per story visualization.
//!
//! Text shaping and layout are out of scope; text marks store unshaped strings.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod axis;
mod bar_mark;
pub mod data;
#[cfg(not(feature = "std"))]
mod float;
pub mod format;
mod layout;
mod line_mark;
pub mod palette;
pub mod panels;
mod rect_mark;
mod scale;
mod text_mark;
mod timing;
pub mod z_order;

pub use axis::{AxisOrient, AxisScale, AxisSpec, AxisStyle};
pub use bar_mark::{BarMarkSpec, BarOrient};
pub use layout::Margins;
pub use line_mark::{Curve, LineMarkSpec, monotone_x_path, path_length};
pub use rect_mark::RectMarkSpec;
pub use scale::{ScaleBand, ScaleLinear};
pub use text_mark::TextMarkSpec;
pub use timing::Timing;
