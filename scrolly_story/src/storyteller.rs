// Copyright 2025 the Scrolly Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::time::Duration;

use tracing::{debug, warn};

use crate::markup;
use crate::{
    ChartRegistry, NarrativeHost, RenderDispatcher, RenderHost, ResizeReconciler, ScrollState,
    StepEvent, StepObserver, Story, StoryConfig, StoryError, ViewportResolver, VisualizationType,
};

/// The story runtime: one value holding every piece of state, driven by host events.
///
/// Frontends call [`Self::mount`] once, wait [`Self::startup_delay`], call
/// [`Self::finish_startup`], and from then on forward step crossings, resizes and animation
/// frames.
#[derive(Debug)]
pub struct Storyteller {
    story: Story,
    config: StoryConfig,
    dispatcher: RenderDispatcher,
    state: ScrollState,
    resize: ResizeReconciler,
}

impl Storyteller {
    /// Creates a storyteller drawing the built-in panels.
    pub fn new(story: Story, config: StoryConfig) -> Self {
        Self::with_registry(story, config, ChartRegistry::builtin())
    }

    /// Creates a storyteller drawing from `registry`.
    pub fn with_registry(story: Story, config: StoryConfig, registry: ChartRegistry) -> Self {
        let resolver = ViewportResolver::new(config.min_side, config.fallback_side);
        Self {
            story,
            config,
            dispatcher: RenderDispatcher::new(registry, resolver),
            state: ScrollState::new(),
            resize: ResizeReconciler::new(),
        }
    }

    /// The built-in story with default configuration.
    pub fn builtin() -> Self {
        Self::new(Story::builtin(), StoryConfig::default())
    }

    /// Appends one narrative block per step.
    ///
    /// Fails with [`StoryError::MissingElement`] when the narrative container does not exist;
    /// nothing is appended in that case.
    pub fn mount(&self, host: &mut impl NarrativeHost) -> Result<(), StoryError> {
        if !host.has_container() {
            return Err(StoryError::MissingElement {
                id: self.config.narrative_id.clone(),
            });
        }
        for step in self.story.steps() {
            host.append_step(step, &markup::step_body(step));
        }
        debug!(steps = self.story.len(), "mounted narrative");
        Ok(())
    }

    /// How long to wait after mounting before [`Self::finish_startup`].
    pub fn startup_delay(&self) -> Duration {
        self.config.startup_delay()
    }

    /// Re-measures the steps and draws the intro.
    pub fn finish_startup(
        &mut self,
        host: &mut impl RenderHost,
        observer: &mut impl StepObserver,
    ) -> VisualizationType {
        observer.recompute();
        self.render(host, VisualizationType::Intro);
        VisualizationType::Intro
    }

    /// Handles the activation line entering the step `step_id`.
    ///
    /// Returns the visualization rendered, or `None` when the step is unknown or its
    /// visualization is already on screen.
    pub fn step_enter<H>(&mut self, host: &mut H, step_id: &str) -> Option<VisualizationType>
    where
        H: RenderHost + NarrativeHost,
    {
        let Some((index, step)) = self.story.find(step_id) else {
            warn!(step = step_id, "ignoring enter for unknown step");
            return None;
        };
        let entered = self.state.enter(index, step);
        if let Some(prev) = entered.deactivated.and_then(|i| self.story.get(i)) {
            host.set_step_active(&prev.id, false);
        }
        host.set_step_active(step_id, true);
        let ty = entered.render?;
        self.render(host, ty);
        Some(ty)
    }

    /// Handles the activation line leaving the step `step_id`.
    pub fn step_exit(&mut self, host: &mut impl NarrativeHost, step_id: &str) {
        let Some((index, _)) = self.story.find(step_id) else {
            warn!(step = step_id, "ignoring exit for unknown step");
            return;
        };
        host.set_step_active(step_id, false);
        if self.state.exit(index) {
            debug!(step = step_id, "no active step");
        }
    }

    /// Forwards a [`StepEvent`] from a [`crate::StepTracker`].
    pub fn step_event<H>(&mut self, host: &mut H, event: StepEvent) -> Option<VisualizationType>
    where
        H: RenderHost + NarrativeHost,
    {
        let Some(step) = self.story.get(event.index()) else {
            warn!(index = event.index(), "ignoring event for step out of range");
            return None;
        };
        let id = step.id.clone();
        match event {
            StepEvent::Enter { .. } => self.step_enter(host, &id),
            StepEvent::Exit { .. } => {
                self.step_exit(host, &id);
                None
            }
        }
    }

    /// Notes a resize. Returns `true` when the caller must schedule an animation frame.
    pub fn request_resize(&mut self) -> bool {
        self.resize.request()
    }

    /// Runs a pending resize recompute.
    ///
    /// Re-measures the steps and redraws the active step's visualization at the new size.
    /// Returns the visualization drawn, if any.
    pub fn animation_frame(
        &mut self,
        host: &mut impl RenderHost,
        observer: &mut impl StepObserver,
    ) -> Option<VisualizationType> {
        if !self.resize.take() {
            return None;
        }
        observer.recompute();
        let ty = self
            .state
            .active()
            .and_then(|i| self.story.get(i))
            .map(|s| s.visualization)?;
        self.render(host, ty);
        Some(ty)
    }

    fn render(&mut self, host: &mut impl RenderHost, ty: VisualizationType) {
        self.dispatcher.render(host, ty);
        self.state.mark_rendered(ty);
    }

    /// Index of the active step.
    pub fn active_step(&self) -> Option<usize> {
        self.state.active()
    }

    /// The visualization on screen.
    pub fn current_visualization(&self) -> Option<VisualizationType> {
        self.state.current()
    }

    /// Number of renders so far.
    pub fn render_count(&self) -> u64 {
        self.dispatcher.render_count()
    }

    /// The story.
    pub fn story(&self) -> &Story {
        &self.story
    }

    /// The configuration.
    pub fn config(&self) -> &StoryConfig {
        &self.config
    }
}
