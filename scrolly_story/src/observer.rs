// Copyright 2025 the Scrolly Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll observation: which step block the activation line is over.
//!
//! The activation line sits `offset * viewport_height` below the top of the viewport. A step
//! is entered when the line moves into its extent and exited when the line leaves it.

/// Scroll direction at the time of an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Scrolling towards the end of the document.
    Down,
    /// Scrolling towards the start of the document.
    Up,
}

/// A step boundary crossing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StepEvent {
    /// The activation line entered step `index`.
    Enter {
        /// Step index.
        index: usize,
        /// Scroll direction.
        direction: Direction,
    },
    /// The activation line left step `index`.
    Exit {
        /// Step index.
        index: usize,
        /// Scroll direction.
        direction: Direction,
    },
}

impl StepEvent {
    /// The step index this event refers to.
    pub fn index(&self) -> usize {
        match *self {
            Self::Enter { index, .. } | Self::Exit { index, .. } => index,
        }
    }
}

/// Tracks the step under the activation line across scroll updates.
#[derive(Clone, Debug, PartialEq)]
pub struct StepTracker {
    extents: Vec<(f64, f64)>,
    viewport_height: f64,
    offset: f64,
    active: Option<usize>,
    last_scroll: Option<f64>,
}

impl StepTracker {
    /// Creates a tracker with no geometry. `offset` is clamped to `[0, 1]`.
    pub fn new(offset: f64) -> Self {
        Self {
            extents: Vec::new(),
            viewport_height: 0.0,
            offset: if offset.is_finite() { offset.clamp(0.0, 1.0) } else { 0.5 },
            active: None,
            last_scroll: None,
        }
    }

    /// Replaces the step geometry.
    ///
    /// `extents` are `[top, bottom)` ranges in document coordinates, in step order. The new
    /// geometry takes effect on the next [`Self::update`].
    pub fn set_layout(&mut self, extents: impl IntoIterator<Item = (f64, f64)>, viewport_height: f64) {
        self.extents = extents.into_iter().collect();
        self.viewport_height = viewport_height.max(0.0);
        if self.active.is_some_and(|i| i >= self.extents.len()) {
            self.active = None;
        }
    }

    /// Document y of the activation line for a scroll position.
    pub fn trigger_y(&self, scroll_y: f64) -> f64 {
        scroll_y + self.offset * self.viewport_height
    }

    /// The step whose extent contains `y`.
    pub fn step_at(&self, y: f64) -> Option<usize> {
        self.extents
            .iter()
            .position(|&(top, bottom)| y >= top && y < bottom)
    }

    /// Evaluates a scroll position and returns the crossings since the last update, exits first.
    pub fn update(&mut self, scroll_y: f64) -> Vec<StepEvent> {
        let direction = match self.last_scroll {
            Some(last) if scroll_y < last => Direction::Up,
            _ => Direction::Down,
        };
        self.last_scroll = Some(scroll_y);

        let next = self.step_at(self.trigger_y(scroll_y));
        if next == self.active {
            return Vec::new();
        }
        let mut events = Vec::with_capacity(2);
        if let Some(index) = self.active {
            events.push(StepEvent::Exit { index, direction });
        }
        if let Some(index) = next {
            events.push(StepEvent::Enter { index, direction });
        }
        self.active = next;
        events
    }

    /// The step under the activation line after the last update.
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Activation offset as a fraction of the viewport height.
    pub fn offset(&self) -> f64 {
        self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> StepTracker {
        let mut t = StepTracker::new(0.5);
        t.set_layout([(0.0, 1000.0), (1000.0, 2000.0), (2000.0, 3000.0)], 800.0);
        t
    }

    #[test]
    fn first_update_enters_the_step_under_the_line() {
        let mut t = tracker();
        assert_eq!(
            t.update(0.0),
            [StepEvent::Enter { index: 0, direction: Direction::Down }],
            "line at 400"
        );
        assert_eq!(t.active(), Some(0), "active");
    }

    #[test]
    fn crossing_emits_exit_then_enter() {
        let mut t = tracker();
        t.update(0.0);
        assert!(t.update(500.0).is_empty(), "line at 900 stays in step 0");
        assert_eq!(
            t.update(700.0),
            [
                StepEvent::Exit { index: 0, direction: Direction::Down },
                StepEvent::Enter { index: 1, direction: Direction::Down },
            ],
            "line at 1100"
        );
        assert_eq!(
            t.update(0.0),
            [
                StepEvent::Exit { index: 1, direction: Direction::Up },
                StepEvent::Enter { index: 0, direction: Direction::Up },
            ],
            "scrolling back"
        );
    }

    #[test]
    fn leaving_every_step_only_exits() {
        let mut t = tracker();
        t.update(2000.0);
        assert_eq!(
            t.update(5000.0),
            [StepEvent::Exit { index: 2, direction: Direction::Down }],
            "past the last step"
        );
        assert_eq!(t.active(), None, "nothing active");
    }

    #[test]
    fn new_layout_is_evaluated_on_next_update() {
        let mut t = tracker();
        t.update(0.0);
        t.set_layout([(0.0, 300.0), (300.0, 600.0)], 800.0);
        assert_eq!(t.active(), Some(0), "layout alone emits nothing");
        assert_eq!(
            t.update(0.0),
            [
                StepEvent::Exit { index: 0, direction: Direction::Down },
                StepEvent::Enter { index: 1, direction: Direction::Down },
            ],
            "line at 400 is now in step 1"
        );
    }

    #[test]
    fn offset_is_clamped() {
        assert_eq!(StepTracker::new(-1.0).offset(), 0.0, "below");
        assert_eq!(StepTracker::new(2.0).offset(), 1.0, "above");
        assert_eq!(StepTracker::new(f64::NAN).offset(), 0.5, "NaN");
    }
}
