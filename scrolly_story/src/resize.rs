// Copyright 2025 the Scrolly Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Coalesces resize events into one recompute per animation frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResizeReconciler {
    pending: bool,
}

impl ResizeReconciler {
    /// Nothing pending.
    pub fn new() -> Self {
        Self::default()
    }

    /// Notes a resize. Returns `true` only when a frame needs to be scheduled.
    pub fn request(&mut self) -> bool {
        !core::mem::replace(&mut self.pending, true)
    }

    /// Consumes the pending request on an animation frame.
    pub fn take(&mut self) -> bool {
        core::mem::take(&mut self.pending)
    }

    /// Whether a recompute is waiting for its frame.
    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bursts_schedule_one_frame() {
        let mut resize = ResizeReconciler::new();
        assert!(resize.request(), "first request schedules");
        assert!(!resize.request(), "second request coalesces");
        assert!(!resize.request(), "third request coalesces");
        assert!(resize.take(), "frame consumes the request");
        assert!(!resize.take(), "nothing left");
        assert!(resize.request(), "next burst schedules again");
    }
}
