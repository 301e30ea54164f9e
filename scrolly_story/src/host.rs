// Copyright 2025 the Scrolly Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The seams between the story logic and whatever displays it.

use scrolly_core::Surface;

use crate::NarrativeStep;

/// Where charts are drawn.
pub trait RenderHost {
    /// Current content-box size of the chart container, or `None` if it does not exist.
    fn measure(&self) -> Option<(f64, f64)>;

    /// Removes every node of the previous chart.
    fn clear(&mut self);

    /// Hides the tooltip.
    fn hide_tooltip(&mut self);

    /// Attaches a freshly drawn chart.
    fn present(&mut self, surface: Surface);
}

/// Where narrative blocks live.
pub trait NarrativeHost {
    /// Whether the narrative container exists.
    fn has_container(&self) -> bool;

    /// Appends the block for `step`, with its pre-rendered markup.
    fn append_step(&mut self, step: &NarrativeStep, html: &str);

    /// Adds or removes the active marking on the block for `step_id`.
    fn set_step_active(&mut self, step_id: &str, active: bool);
}

/// Something that measures step geometry for scroll observation.
pub trait StepObserver {
    /// Re-measures every step block.
    fn recompute(&mut self);
}
