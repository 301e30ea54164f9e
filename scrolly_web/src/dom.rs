// Copyright 2025 the Scrolly Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM implementations of the story hosts.

use hashbrown::HashMap;
use scrolly_core::svg::{SvgFrame, to_svg_string};
use scrolly_core::{MarkId, Surface, Timeline};
use scrolly_story::{
    NarrativeHost, NarrativeStep, RenderHost, StepObserver, StepTracker, StoryConfig, markup,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast as _, JsValue};
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, MouseEvent, Window};

/// Logs a failed DOM call without interrupting the caller.
pub(crate) fn report(context: &str, result: Result<(), JsValue>) {
    if let Err(err) = result {
        web_sys::console::error_2(&JsValue::from_str(&format!("scrolly: {context}")), &err);
    }
}

/// Adds an event listener that lives as long as the page.
pub(crate) fn listen(
    target: &EventTarget,
    name: &str,
    f: impl FnMut(Event) + 'static,
) -> Result<(), JsValue> {
    let cb = Closure::<dyn FnMut(Event)>::new(f);
    target.add_event_listener_with_callback(name, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// The chart container, the tooltip and the narrative container of the host page.
#[derive(Debug)]
pub(crate) struct DomHost {
    document: Document,
    window: Window,
    visualization: Option<Element>,
    tooltip: Option<HtmlElement>,
    narrative: Option<Element>,
    step_class: String,
    active_class: String,
    blocks: Vec<(String, Element)>,
    surface: Option<Surface>,
    elements: HashMap<u64, Element>,
    clips: HashMap<u64, Element>,
    timeline: Timeline,
    presented_at: f64,
}

impl DomHost {
    pub(crate) fn new(window: Window, document: Document, config: &StoryConfig) -> Self {
        let tooltip = document
            .get_element_by_id(&config.tooltip_id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        Self {
            visualization: document.get_element_by_id(&config.visualization_id),
            narrative: document.get_element_by_id(&config.narrative_id),
            tooltip,
            step_class: config.step_class.clone(),
            active_class: config.active_class.clone(),
            blocks: Vec::new(),
            surface: None,
            elements: HashMap::new(),
            clips: HashMap::new(),
            timeline: Timeline::default(),
            presented_at: 0.0,
            document,
            window,
        }
    }

    /// The chart container, for attaching pointer listeners.
    pub(crate) fn visualization(&self) -> Option<&Element> {
        self.visualization.as_ref()
    }

    fn now(&self) -> f64 {
        self.window.performance().map_or(0.0, |p| p.now())
    }

    /// Whether entrance transitions are still running.
    pub(crate) fn is_animating(&self) -> bool {
        !self.timeline.is_empty()
    }

    /// Applies the transition values for frame time `now`. Returns whether more frames are due.
    pub(crate) fn tick(&mut self, now: f64) -> bool {
        if self.timeline.is_empty() {
            return false;
        }
        let elapsed = (now - self.presented_at).max(0.0);
        for sample in self.timeline.sample(elapsed) {
            let targets = if sample.attr.is_clip() { &self.clips } else { &self.elements };
            if let Some(el) = targets.get(&sample.mark.0) {
                report(
                    "animate",
                    el.set_attribute(sample.attr.svg_name(), &sample.value.to_string()),
                );
            }
        }
        if self.timeline.is_finished(elapsed) {
            self.timeline = Timeline::default();
            return false;
        }
        true
    }

    /// Shows or hides the tooltip for the mark under the pointer.
    pub(crate) fn hover(&self, event: &MouseEvent) {
        let tooltip = self.surface.as_ref().and_then(|surface| {
            let id = event
                .target()?
                .dyn_into::<Element>()
                .ok()?
                .closest("[data-mark]")
                .ok()??
                .get_attribute("data-mark")?
                .parse::<u64>()
                .ok()?;
            surface.get(MarkId(id))?.tooltip.as_ref()
        });
        match tooltip {
            Some(tip) => self.show_tooltip(&markup::tooltip(tip), event),
            None => self.hide_tooltip_now(),
        }
    }

    fn show_tooltip(&self, html: &str, event: &MouseEvent) {
        let Some(el) = &self.tooltip else {
            return;
        };
        el.set_inner_html(html);
        let style = el.style();
        report("tooltip", style.set_property("left", &format!("{}px", event.client_x() + 15)));
        report("tooltip", style.set_property("top", &format!("{}px", event.client_y() - 15)));
        report("tooltip", style.set_property("opacity", "1"));
    }

    pub(crate) fn hide_tooltip_now(&self) {
        if let Some(el) = &self.tooltip {
            report("tooltip", el.style().set_property("opacity", "0"));
        }
    }

    fn index_elements(&mut self, root: &Element) {
        self.elements.clear();
        self.clips.clear();
        for (attr, map) in [("data-mark", &mut self.elements), ("data-clip", &mut self.clips)] {
            let Ok(nodes) = root.query_selector_all(&format!("[{attr}]")) else {
                continue;
            };
            for i in 0..nodes.length() {
                let Some(el) = nodes.get(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
                    continue;
                };
                if let Some(id) = el.get_attribute(attr).and_then(|v| v.parse::<u64>().ok()) {
                    map.insert(id, el);
                }
            }
        }
    }
}

impl RenderHost for DomHost {
    fn measure(&self) -> Option<(f64, f64)> {
        let rect = self.visualization.as_ref()?.get_bounding_client_rect();
        Some((rect.width(), rect.height()))
    }

    fn clear(&mut self) {
        if let Some(viz) = &self.visualization {
            viz.set_inner_html("");
        }
        self.surface = None;
        self.elements.clear();
        self.clips.clear();
        self.timeline = Timeline::default();
    }

    fn hide_tooltip(&mut self) {
        self.hide_tooltip_now();
    }

    fn present(&mut self, surface: Surface) {
        let Some(viz) = self.visualization.clone() else {
            return;
        };
        viz.set_inner_html(&to_svg_string(&surface, SvgFrame::Start));
        self.index_elements(&viz);
        self.timeline = Timeline::from_surface(&surface);
        self.presented_at = self.now();
        self.surface = Some(surface);
    }
}

impl NarrativeHost for DomHost {
    fn has_container(&self) -> bool {
        self.narrative.is_some()
    }

    fn append_step(&mut self, step: &NarrativeStep, html: &str) {
        let Some(narrative) = &self.narrative else {
            return;
        };
        let block = match self.document.create_element("div") {
            Ok(block) => block,
            Err(err) => {
                report("create step", Err(err));
                return;
            }
        };
        block.set_class_name(&self.step_class);
        report("step id", block.set_attribute("data-step", &step.id));
        block.set_inner_html(html);
        if let Err(err) = narrative.append_child(&block) {
            report("append step", Err(err));
            return;
        }
        self.blocks.push((step.id.clone(), block));
    }

    fn set_step_active(&mut self, step_id: &str, active: bool) {
        let Some((_, block)) = self.blocks.iter().find(|(id, _)| id == step_id) else {
            return;
        };
        let classes = block.class_list();
        let result = if active {
            classes.add_1(&self.active_class)
        } else {
            classes.remove_1(&self.active_class)
        };
        report("step class", result);
    }
}

/// Measures step blocks in document coordinates for a [`StepTracker`].
#[derive(Debug)]
pub(crate) struct DomObserver {
    window: Window,
    document: Document,
    selector: String,
    pub(crate) tracker: StepTracker,
}

impl DomObserver {
    pub(crate) fn new(window: Window, document: Document, config: &StoryConfig) -> Self {
        Self {
            window,
            document,
            selector: format!(".{}", config.step_class),
            tracker: StepTracker::new(config.offset),
        }
    }

    pub(crate) fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }
}

impl StepObserver for DomObserver {
    fn recompute(&mut self) {
        let scroll_y = self.scroll_y();
        let viewport_height = self
            .window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0);
        let mut extents = Vec::new();
        if let Ok(nodes) = self.document.query_selector_all(&self.selector) {
            for i in 0..nodes.length() {
                if let Some(el) = nodes.get(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                    let rect = el.get_bounding_client_rect();
                    extents.push((rect.top() + scroll_y, rect.bottom() + scroll_y));
                }
            }
        }
        self.tracker.set_layout(extents, viewport_height);
    }
}
