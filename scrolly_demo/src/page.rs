// Copyright 2025 the Scrolly Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A simulated page: chart container, narrative blocks and step geometry.

use scrolly_core::Surface;
use scrolly_story::{NarrativeHost, NarrativeStep, RenderHost, StepObserver, StepTracker};

/// Chart container and narrative container, recording every presented chart.
#[derive(Debug)]
pub(crate) struct HeadlessPage {
    pub(crate) size: (f64, f64),
    pub(crate) blocks: Vec<Block>,
    pub(crate) charts: Vec<Surface>,
    attached: usize,
}

#[derive(Debug)]
pub(crate) struct Block {
    pub(crate) id: String,
    pub(crate) active: bool,
}

impl HeadlessPage {
    pub(crate) fn new(size: (f64, f64)) -> Self {
        Self {
            size,
            blocks: Vec::new(),
            charts: Vec::new(),
            attached: 0,
        }
    }

    /// Nodes currently attached to the chart container.
    pub(crate) fn attached(&self) -> usize {
        self.attached
    }

    pub(crate) fn active_block(&self) -> Option<&str> {
        self.blocks
            .iter()
            .find(|b| b.active)
            .map(|b| b.id.as_str())
    }
}

impl RenderHost for HeadlessPage {
    fn measure(&self) -> Option<(f64, f64)> {
        Some(self.size)
    }

    fn clear(&mut self) {
        self.attached = 0;
    }

    fn hide_tooltip(&mut self) {}

    fn present(&mut self, surface: Surface) {
        self.attached = surface.len();
        self.charts.push(surface);
    }
}

impl NarrativeHost for HeadlessPage {
    fn has_container(&self) -> bool {
        true
    }

    fn append_step(&mut self, step: &NarrativeStep, _html: &str) {
        self.blocks.push(Block {
            id: step.id.clone(),
            active: false,
        });
    }

    fn set_step_active(&mut self, step_id: &str, active: bool) {
        if let Some(block) = self.blocks.iter_mut().find(|b| b.id == step_id) {
            block.active = active;
        }
    }
}

/// Lays steps out as equal-height blocks stacked from the top of the document.
#[derive(Debug)]
pub(crate) struct StackedSteps {
    pub(crate) tracker: StepTracker,
    pub(crate) count: usize,
    pub(crate) step_height: f64,
    pub(crate) viewport_height: f64,
}

impl StackedSteps {
    pub(crate) fn new(count: usize, step_height: f64, viewport_height: f64, offset: f64) -> Self {
        Self {
            tracker: StepTracker::new(offset),
            count,
            step_height,
            viewport_height,
        }
    }

    /// Scroll position that puts the activation line halfway down the last step.
    pub(crate) fn end_scroll(&self) -> f64 {
        let line = self.tracker.offset() * self.viewport_height;
        ((self.count as f64 - 0.5) * self.step_height - line).max(0.0)
    }
}

impl StepObserver for StackedSteps {
    fn recompute(&mut self) {
        let h = self.step_height;
        self.tracker.set_layout(
            (0..self.count).map(|i| (i as f64 * h, (i + 1) as f64 * h)),
            self.viewport_height,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_scroll_keeps_the_last_step_active() {
        let mut steps = StackedSteps::new(6, 900.0, 600.0, 0.5);
        steps.recompute();
        let y = steps.end_scroll();
        steps.tracker.update(y);
        assert_eq!(steps.tracker.active(), Some(5), "last step under the line at {y}");
    }
}
