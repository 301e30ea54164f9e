// Copyright 2025 the Scrolly Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Transition timing shared by mark specs.

use scrolly_core::{Attr, Ease, Transition};

/// Delay, duration and easing for an entrance transition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timing {
    /// Start delay in milliseconds.
    pub delay_ms: u32,
    /// Duration in milliseconds.
    pub duration_ms: u32,
    /// Easing curve.
    pub ease: Ease,
}

impl Timing {
    /// Timing with no delay and the default ease.
    pub const fn new(duration_ms: u32) -> Self {
        Self {
            delay_ms: 0,
            duration_ms,
            ease: Ease::CubicInOut,
        }
    }

    /// Sets the start delay.
    pub const fn with_delay(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Sets the easing curve.
    pub const fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// A transition of `attr` from `from` to `to` with this timing.
    pub fn transition(&self, attr: Attr, from: f64, to: f64) -> Transition {
        Transition::new(attr, from, to)
            .with_delay(self.delay_ms)
            .with_duration(self.duration_ms)
            .with_ease(self.ease)
    }
}
