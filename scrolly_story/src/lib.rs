// Copyright 2025 the Scrolly Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll-driven visualization dispatcher.
//!
//! A [`Story`] is an ordered list of [`NarrativeStep`]s, each naming one of six
//! [`VisualizationType`]s. As the reader scrolls, a [`StepTracker`] reports which step block the
//! activation line is over and the [`Storyteller`] swaps the chart accordingly:
//!
//! - [`ChartRegistry`] maps each visualization to its draw procedure.
//! - [`ViewportResolver`] turns the chart container's size into a square drawing area.
//! - [`RenderDispatcher`] clears the previous chart and draws the next one.
//! - [`ScrollState`] tracks the active step and skips redundant renders.
//! - [`ResizeReconciler`] folds resize bursts into one redraw per animation frame.
//!
//! Displays are abstracted by [`RenderHost`] and [`NarrativeHost`], so the same logic runs in a
//! browser and headless.
//!
//! ```
//! use scrolly_core::Surface;
//! use scrolly_story::{NarrativeHost, NarrativeStep, RenderHost, StepObserver, Storyteller};
//!
//! #[derive(Default)]
//! struct Page {
//!     charts: Vec<Surface>,
//! }
//!
//! impl RenderHost for Page {
//!     fn measure(&self) -> Option<(f64, f64)> {
//!         Some((800.0, 600.0))
//!     }
//!     fn clear(&mut self) {}
//!     fn hide_tooltip(&mut self) {}
//!     fn present(&mut self, surface: Surface) {
//!         self.charts.push(surface);
//!     }
//! }
//!
//! impl NarrativeHost for Page {
//!     fn has_container(&self) -> bool {
//!         true
//!     }
//!     fn append_step(&mut self, _: &NarrativeStep, _: &str) {}
//!     fn set_step_active(&mut self, _: &str, _: bool) {}
//! }
//!
//! struct Fixed;
//!
//! impl StepObserver for Fixed {
//!     fn recompute(&mut self) {}
//! }
//!
//! let mut page = Page::default();
//! let mut story = Storyteller::builtin();
//! story.mount(&mut page).unwrap();
//! story.finish_startup(&mut page, &mut Fixed);
//! story.step_enter(&mut page, "age");
//! assert_eq!(page.charts.len(), 2);
//! assert_eq!(page.charts[1].dimensions().width, 600);
//! ```

mod benign;
mod config;
mod dispatcher;
mod error;
mod host;
pub mod markup;
mod observer;
mod registry;
mod resize;
mod state;
mod step;
mod storyteller;
mod viewport;
mod visualization;

pub use benign::{BenignErrors, DEFAULT_BENIGN_MESSAGES};
pub use config::StoryConfig;
pub use dispatcher::RenderDispatcher;
pub use error::StoryError;
pub use host::{NarrativeHost, RenderHost, StepObserver};
pub use observer::{Direction, StepEvent, StepTracker};
pub use registry::{ChartRegistry, Draw};
pub use resize::ResizeReconciler;
pub use state::{Entered, ScrollState};
pub use step::{NarrativeStep, Story};
pub use storyteller::Storyteller;
pub use viewport::ViewportResolver;
pub use visualization::VisualizationType;
