// Copyright 2025 the Scrolly Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Suggested z-order conventions for chart-generated marks.
//!
//! `scrolly_core` marks carry an explicit `z_index` for render ordering. The chart layer sets
//! z-indexes consistently so panels don't have to hand-tune paint order.
//!
//! Surfaces sort by `(z_index, insertion order)`, so marks sharing a layer keep the order they
//! were pushed in.

/// Backdrops drawn behind series (placeholder circles, deficit regions).
pub const BACKDROP: i32 = -100;

/// Filled series marks (bars, circles).
pub const SERIES_FILL: i32 = 0;
/// Stroked series marks (lines).
pub const SERIES_STROKE: i32 = 10;

/// Axis domain line and tick marks.
pub const AXIS_RULES: i32 = 30;
/// Axis tick labels.
pub const AXIS_LABELS: i32 = 40;

/// Value labels and series annotations.
pub const ANNOTATIONS: i32 = 70;
/// Chart-level titles and captions.
pub const TITLES: i32 = 80;
