// Copyright 2025 the Scrolly Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end scroll sessions against a recording host.

use std::cell::RefCell;
use std::rc::Rc;

use scrolly_core::{Dimensions, Surface};
use scrolly_story::{
    ChartRegistry, NarrativeHost, NarrativeStep, RenderHost, StepObserver, StepTracker, Story,
    StoryConfig, StoryError, Storyteller, VisualizationType,
};

#[derive(Debug, Default)]
struct Page {
    container: bool,
    size: Option<(f64, f64)>,
    blocks: Vec<(String, bool)>,
    nodes: usize,
    clears: usize,
    presented: Vec<Dimensions>,
}

impl Page {
    fn new(size: (f64, f64)) -> Self {
        Self {
            container: true,
            size: Some(size),
            ..Self::default()
        }
    }

    fn active_blocks(&self) -> Vec<&str> {
        self.blocks
            .iter()
            .filter(|(_, active)| *active)
            .map(|(id, _)| id.as_str())
            .collect()
    }
}

impl RenderHost for Page {
    fn measure(&self) -> Option<(f64, f64)> {
        self.size
    }

    fn clear(&mut self) {
        self.clears += 1;
        self.nodes = 0;
    }

    fn hide_tooltip(&mut self) {}

    fn present(&mut self, surface: Surface) {
        self.nodes += surface.len();
        self.presented.push(surface.dimensions());
    }
}

impl NarrativeHost for Page {
    fn has_container(&self) -> bool {
        self.container
    }

    fn append_step(&mut self, step: &NarrativeStep, html: &str) {
        assert!(html.contains(&step.title), "block markup carries the title");
        self.blocks.push((step.id.clone(), false));
    }

    fn set_step_active(&mut self, step_id: &str, active: bool) {
        if let Some(block) = self.blocks.iter_mut().find(|(id, _)| id == step_id) {
            block.1 = active;
        }
    }
}

#[derive(Debug, Default)]
struct Recompute(usize);

impl StepObserver for Recompute {
    fn recompute(&mut self) {
        self.0 += 1;
    }
}

/// A storyteller whose panels only record which visualization they drew.
fn recording(story: Story) -> (Storyteller, Rc<RefCell<Vec<VisualizationType>>>) {
    let drawn = Rc::new(RefCell::new(Vec::new()));
    let registry = ChartRegistry::from_fn(|ty| {
        let drawn = Rc::clone(&drawn);
        Box::new(move |_: &mut Surface, _: Dimensions| drawn.borrow_mut().push(ty))
    });
    (
        Storyteller::with_registry(story, StoryConfig::default(), registry),
        drawn,
    )
}

fn started(size: (f64, f64)) -> (Storyteller, Page, Rc<RefCell<Vec<VisualizationType>>>) {
    let (mut story, drawn) = recording(Story::builtin());
    let mut page = Page::new(size);
    story.mount(&mut page).unwrap();
    story.finish_startup(&mut page, &mut Recompute::default());
    (story, page, drawn)
}

#[test]
fn missing_narrative_container_aborts_mount() {
    let story = Storyteller::builtin();
    let mut page = Page::default();
    let err = story.mount(&mut page).unwrap_err();
    assert!(
        matches!(&err, StoryError::MissingElement { id } if id == "narrative-container"),
        "unexpected error {err:?}"
    );
    assert!(page.blocks.is_empty(), "nothing appended");
    assert_eq!(page.clears, 0, "chart container untouched");
    assert!(page.presented.is_empty(), "nothing rendered");
    assert_eq!(story.render_count(), 0, "no render counted");
}

#[test]
fn startup_renders_intro_once() {
    let (story, page, drawn) = started((800.0, 600.0));
    assert_eq!(page.blocks.len(), 6, "one block per step");
    assert_eq!(*drawn.borrow(), [VisualizationType::Intro], "intro drawn");
    assert_eq!(page.presented, [Dimensions::square(600)], "square of the smaller side");
    assert_eq!(story.current_visualization(), Some(VisualizationType::Intro), "marker");
    assert_eq!(story.active_step(), None, "nothing active yet");
}

#[test]
fn entering_the_intro_step_after_startup_does_not_redraw() {
    let (mut story, mut page, drawn) = started((800.0, 600.0));
    assert_eq!(story.step_enter(&mut page, "intro"), None, "already on screen");
    assert_eq!(drawn.borrow().len(), 1, "no second intro");
    assert_eq!(page.active_blocks(), ["intro"], "block still marked active");
}

#[test]
fn step_enter_guard() {
    let (mut story, mut page, drawn) = started((800.0, 600.0));
    assert_eq!(
        story.step_enter(&mut page, "global"),
        Some(VisualizationType::Global),
        "new visualization"
    );
    assert_eq!(story.step_enter(&mut page, "global"), None, "duplicate enter");
    assert_eq!(
        story.step_enter(&mut page, "age"),
        Some(VisualizationType::Age),
        "next step"
    );
    assert_eq!(
        *drawn.borrow(),
        [
            VisualizationType::Intro,
            VisualizationType::Global,
            VisualizationType::Age
        ],
        "one render per change"
    );
    assert_eq!(page.active_blocks(), ["age"], "previous block unmarked");
}

#[test]
fn consecutive_steps_with_the_same_visualization_render_once() {
    let steps = vec![
        NarrativeStep::new("a", VisualizationType::Intro, "A", ""),
        NarrativeStep::new("b", VisualizationType::Education, "B", ""),
        NarrativeStep::new("c", VisualizationType::Education, "C", ""),
    ];
    let (mut story, drawn) = recording(Story::new(steps).unwrap());
    let mut page = Page::new((500.0, 500.0));
    story.mount(&mut page).unwrap();
    story.step_enter(&mut page, "b");
    assert_eq!(story.step_enter(&mut page, "c"), None, "same chart already drawn");
    assert_eq!(*drawn.borrow(), [VisualizationType::Education], "single render");
    assert_eq!(story.active_step(), Some(2), "second block active");
}

#[test]
fn unknown_steps_are_ignored() {
    let (mut story, mut page, drawn) = started((800.0, 600.0));
    assert_eq!(story.step_enter(&mut page, "nope"), None, "unknown enter");
    story.step_exit(&mut page, "nope");
    assert_eq!(drawn.borrow().len(), 1, "no render");
    assert_eq!(story.active_step(), None, "no state change");
}

#[test]
fn exit_clears_only_the_active_step() {
    let (mut story, mut page, _) = started((800.0, 600.0));
    story.step_enter(&mut page, "education");
    story.step_exit(&mut page, "global");
    assert_eq!(story.active_step(), Some(3), "other exit ignored");
    story.step_exit(&mut page, "education");
    assert_eq!(story.active_step(), None, "cleared");
    assert!(page.active_blocks().is_empty(), "marking removed");
}

#[test]
fn resize_without_active_step_does_not_render() {
    let (mut story, mut page, drawn) = started((800.0, 600.0));
    let mut observer = Recompute::default();
    assert!(story.request_resize(), "frame scheduled");
    assert_eq!(story.animation_frame(&mut page, &mut observer), None, "nothing active");
    assert_eq!(observer.0, 1, "steps re-measured");
    assert_eq!(drawn.borrow().len(), 1, "only the startup render");
}

#[test]
fn resize_redraws_the_active_step_at_the_new_size() {
    let (mut story, mut page, drawn) = started((800.0, 600.0));
    story.step_enter(&mut page, "education");
    page.size = Some((500.0, 900.0));

    let mut observer = Recompute::default();
    assert!(story.request_resize(), "first event schedules");
    assert!(!story.request_resize(), "burst coalesces");
    assert!(!story.request_resize(), "burst coalesces");
    assert_eq!(
        story.animation_frame(&mut page, &mut observer),
        Some(VisualizationType::Education),
        "active visualization redrawn"
    );
    assert_eq!(
        story.animation_frame(&mut page, &mut observer),
        None,
        "second frame has nothing pending"
    );
    assert_eq!(observer.0, 1, "one recompute");
    assert_eq!(
        drawn.borrow().last(),
        Some(&VisualizationType::Education),
        "education drawn again"
    );
    assert_eq!(page.presented.last(), Some(&Dimensions::square(500)), "fresh dimensions");
}

#[test]
fn tracker_events_drive_the_story() {
    let (mut story, mut page, drawn) = started((800.0, 600.0));
    let mut tracker = StepTracker::new(story.config().offset);
    tracker.set_layout((0..6).map(|i| (f64::from(i) * 1000.0, f64::from(i + 1) * 1000.0)), 800.0);

    let mut scroll_to = |y: f64, story: &mut Storyteller, page: &mut Page| {
        for event in tracker.update(y) {
            story.step_event(page, event);
        }
    };
    for y in [0.0, 700.0, 1700.0, 2700.0, 3700.0, 4700.0] {
        scroll_to(y, &mut story, &mut page);
    }
    assert_eq!(
        *drawn.borrow(),
        VisualizationType::ALL,
        "every visualization drawn once in order"
    );
    assert_eq!(page.active_blocks(), ["conclusion"], "last block active");

    scroll_to(0.0, &mut story, &mut page);
    assert_eq!(drawn.borrow().last(), Some(&VisualizationType::Intro), "scrolling back");
    assert_eq!(page.active_blocks(), ["intro"], "first block active");
}

#[test]
fn builtin_panels_leave_only_the_last_chart() {
    let mut story = Storyteller::builtin();
    let mut page = Page::new((640.0, 640.0));
    story.mount(&mut page).unwrap();
    story.finish_startup(&mut page, &mut Recompute::default());
    story.step_enter(&mut page, "industry");
    assert_eq!(page.clears, 2, "each render clears first");
    assert!(page.nodes > 0, "industry chart attached");
    assert_eq!(story.render_count(), 2, "two renders");
}
