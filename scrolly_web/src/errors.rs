// Copyright 2025 the Scrolly Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Global listeners that swallow known-harmless browser errors.

use scrolly_story::BenignErrors;
use wasm_bindgen::{JsCast as _, JsValue};
use web_sys::{ErrorEvent, Event, PromiseRejectionEvent, Window};

use crate::dom::listen;

/// Installs `error` and `unhandledrejection` listeners on `window`.
///
/// Events whose message contains one of `benign`'s messages are stopped; everything else
/// propagates untouched.
pub(crate) fn install(window: &Window, benign: BenignErrors) -> Result<(), JsValue> {
    let on_error = benign.clone();
    listen(window, "error", move |event: Event| {
        let message = event.dyn_ref::<ErrorEvent>().map(ErrorEvent::message);
        if on_error.matches_opt(message.as_deref()) {
            event.stop_immediate_propagation();
            event.prevent_default();
        }
    })?;
    listen(window, "unhandledrejection", move |event: Event| {
        let message = event
            .dyn_ref::<PromiseRejectionEvent>()
            .map(PromiseRejectionEvent::reason)
            .and_then(|reason| js_sys::Reflect::get(&reason, &JsValue::from_str("message")).ok())
            .and_then(|m| m.as_string());
        if benign.matches_opt(message.as_deref()) {
            event.prevent_default();
        }
    })
}
