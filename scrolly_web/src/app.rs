// Copyright 2025 the Scrolly Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The page-wide story instance and its event wiring.

use std::cell::RefCell;

use scrolly_story::{StepObserver as _, Story, StoryConfig, Storyteller};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast as _, JsValue};
use web_sys::{Event, MouseEvent, Window};

use crate::dom::{DomHost, DomObserver, listen, report};
use crate::errors;

struct App {
    window: Window,
    story: Storyteller,
    host: DomHost,
    observer: DomObserver,
    frame_scheduled: bool,
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

/// Runs `f` on the app, unless it is missing or already borrowed by an outer handler.
fn with_app<R>(f: impl FnOnce(&mut App) -> R) -> Option<R> {
    APP.with(|cell| {
        let mut app = cell.try_borrow_mut().ok()?;
        app.as_mut().map(f)
    })
}

impl App {
    /// Feeds the current scroll position to the tracker and the story.
    fn sync_scroll(&mut self) {
        let scroll_y = self.observer.scroll_y();
        for event in self.observer.tracker.update(scroll_y) {
            self.story.step_event(&mut self.host, event);
        }
        if self.host.is_animating() {
            self.schedule_frame();
        }
    }

    fn schedule_frame(&mut self) {
        if self.frame_scheduled {
            return;
        }
        let cb = Closure::once_into_js(|now: f64| {
            with_app(|app| app.on_frame(now));
        });
        match self.window.request_animation_frame(cb.unchecked_ref()) {
            Ok(_) => self.frame_scheduled = true,
            Err(err) => report("animation frame", Err(err)),
        }
    }

    fn on_frame(&mut self, now: f64) {
        self.frame_scheduled = false;
        if self
            .story
            .animation_frame(&mut self.host, &mut self.observer)
            .is_some()
        {
            // The redraw may have moved blocks under the activation line.
            self.sync_scroll();
        }
        if self.host.tick(now) {
            self.schedule_frame();
        }
    }

    fn on_resize(&mut self) {
        if self.story.request_resize() {
            self.schedule_frame();
        }
    }

    fn finish_startup(&mut self) {
        self.story.finish_startup(&mut self.host, &mut self.observer);
        self.sync_scroll();
        self.schedule_frame();
    }
}

/// Builds the story and attaches it to the page.
pub(crate) fn start(config: StoryConfig) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("scrolly: missing window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("scrolly: missing document"))?;
    errors::install(&window, config.benign())?;

    let story = Storyteller::new(Story::builtin(), config);
    let mut host = DomHost::new(window.clone(), document.clone(), story.config());
    if story.mount(&mut host).is_err() {
        // A page without a narrative container simply has no story.
        return Ok(());
    }
    let mut observer = DomObserver::new(window.clone(), document, story.config());
    observer.recompute();

    if let Some(viz) = host.visualization() {
        for name in ["mouseover", "mousemove"] {
            listen(viz, name, |event: Event| {
                if let Some(event) = event.dyn_ref::<MouseEvent>() {
                    with_app(|app| app.host.hover(event));
                }
            })?;
        }
        listen(viz, "mouseleave", |_: Event| {
            with_app(|app| app.host.hide_tooltip_now());
        })?;
    }
    listen(&window, "scroll", |_: Event| {
        with_app(App::sync_scroll);
    })?;
    listen(&window, "resize", |_: Event| {
        with_app(App::on_resize);
    })?;

    let delay = i32::try_from(story.startup_delay().as_millis()).unwrap_or(i32::MAX);
    APP.with(|cell| {
        *cell.borrow_mut() = Some(App {
            window: window.clone(),
            story,
            host,
            observer,
            frame_scheduled: false,
        });
    });

    let cb = Closure::once_into_js(|| {
        with_app(App::finish_startup);
    });
    window.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), delay)?;
    Ok(())
}
