// Copyright 2025 the Scrolly Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Active-step tracking and the render guard.

use crate::{NarrativeStep, VisualizationType};

/// Outcome of entering a step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Entered {
    /// A different step that was active until now.
    pub deactivated: Option<usize>,
    /// The visualization to render, if it differs from the one on screen.
    pub render: Option<VisualizationType>,
}

/// Which step is active and which visualization is on screen.
///
/// At most one step is active at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollState {
    active: Option<usize>,
    current: Option<VisualizationType>,
}

impl ScrollState {
    /// Nothing active, nothing rendered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Activates `index`.
    ///
    /// The caller renders [`Entered::render`] when it is set and then calls
    /// [`Self::mark_rendered`].
    pub fn enter(&mut self, index: usize, step: &NarrativeStep) -> Entered {
        let deactivated = self.active.filter(|&prev| prev != index);
        self.active = Some(index);
        let render = (self.current != Some(step.visualization)).then_some(step.visualization);
        Entered {
            deactivated,
            render,
        }
    }

    /// Deactivates `index` if it is the active step. Returns whether it was.
    pub fn exit(&mut self, index: usize) -> bool {
        if self.active == Some(index) {
            self.active = None;
            true
        } else {
            false
        }
    }

    /// Records that `ty` is now on screen.
    pub fn mark_rendered(&mut self, ty: VisualizationType) {
        self.current = Some(ty);
    }

    /// The active step index.
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// The visualization on screen.
    pub fn current(&self) -> Option<VisualizationType> {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(ty: VisualizationType) -> NarrativeStep {
        NarrativeStep::new(ty.name(), ty, "", "")
    }

    #[test]
    fn entering_a_new_type_requests_a_render() {
        let mut state = ScrollState::new();
        let entered = state.enter(1, &step(VisualizationType::Global));
        assert_eq!(entered.render, Some(VisualizationType::Global), "first render");
        assert_eq!(entered.deactivated, None, "nothing was active");
        assert_eq!(state.active(), Some(1), "active step");
    }

    #[test]
    fn guard_suppresses_the_type_on_screen() {
        let mut state = ScrollState::new();
        state.mark_rendered(VisualizationType::Intro);
        let entered = state.enter(0, &step(VisualizationType::Intro));
        assert_eq!(entered.render, None, "intro already drawn");

        let global = step(VisualizationType::Global);
        assert!(state.enter(1, &global).render.is_some(), "global not drawn yet");
        state.mark_rendered(VisualizationType::Global);
        assert_eq!(state.enter(1, &global).render, None, "duplicate enter");
    }

    #[test]
    fn entering_deactivates_the_previous_step() {
        let mut state = ScrollState::new();
        state.enter(0, &step(VisualizationType::Intro));
        let entered = state.enter(2, &step(VisualizationType::Age));
        assert_eq!(entered.deactivated, Some(0), "previous step");
        assert_eq!(state.active(), Some(2), "single active step");
        assert_eq!(
            state.enter(2, &step(VisualizationType::Age)).deactivated,
            None,
            "re-entering the same step deactivates nothing"
        );
    }

    #[test]
    fn exit_only_clears_the_active_step() {
        let mut state = ScrollState::new();
        state.enter(3, &step(VisualizationType::Education));
        assert!(!state.exit(1), "other step");
        assert_eq!(state.active(), Some(3), "still active");
        assert!(state.exit(3), "active step");
        assert_eq!(state.active(), None, "cleared");
        assert!(!state.exit(3), "second exit is a no-op");
    }
}
