// Copyright 2025 the Scrolly Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Retained drawing surface for scroll-driven charts.
//!
//! `scrolly_core` is the bottom layer of Scrolly. A chart draws into a [`Surface`] by pushing
//! [`Mark`]s: rectangles, circles, text, and paths, each with a stable [`MarkId`]. Marks carry
//! their rest geometry plus optional entrance [`Transition`]s and a hover [`Tooltip`].
//!
//! Frontends consume a surface in one of two ways:
//! - [`svg::to_svg_string`] serializes it, either at the first frame ([`svg::SvgFrame::Start`])
//!   or at rest ([`svg::SvgFrame::Rest`]).
//! - [`Timeline`] samples every transition at a point in time, so a frontend can animate the
//!   elements it created from the start frame.
//!
//! This crate is `no_std` (with `alloc`). Float math goes through `libm` unless the `std`
//! feature is enabled.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod dimensions;
#[cfg(not(feature = "std"))]
mod float;
mod mark;
mod surface;
pub mod svg;
mod timeline;
mod tooltip;
mod transition;

pub use dimensions::Dimensions;
pub use mark::{
    CircleChannels, Mark, MarkBuilder, MarkId, MarkKind, MarkPayload, PathChannels, RectChannels,
    Stroke, TextAnchor, TextBaseline, TextChannels,
};
pub use surface::Surface;
pub use timeline::{Sample, Timeline};
pub use tooltip::{Tone, Tooltip};
pub use transition::{Attr, Ease, Transition};
