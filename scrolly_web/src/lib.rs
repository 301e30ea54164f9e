// Copyright 2025 the Scrolly Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser frontend for scrolly stories.
//!
//! On `wasm32` targets this crate exports [`start`] and [`start_with_config`], which mount the
//! narrative blocks, draw charts into the visualization element as SVG, drive entrance
//! transitions from animation frames, and show tooltips on hover.
//!
//! The host page provides three elements (ids configurable through `StoryConfig`):
//! `#visualization`, `#tooltip` and `#narrative-container`. A missing narrative container
//! aborts startup silently.
//!
//! On other targets the crate is empty.

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod errors;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Starts the built-in story with the default configuration.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn start() -> Result<(), JsValue> {
    app::start(scrolly_story::StoryConfig::default())
}

/// Starts the built-in story with a JSON configuration layered over the defaults.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn start_with_config(json: &str) -> Result<(), JsValue> {
    let config = scrolly_story::StoryConfig::from_json(json)
        .map_err(|err| JsValue::from_str(&format!("scrolly: {err}")))?;
    app::start(config)
}
