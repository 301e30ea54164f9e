// Copyright 2025 the Scrolly Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame sampling for a surface's entrance transitions.

extern crate alloc;

use alloc::vec::Vec;

use crate::mark::MarkId;
use crate::surface::Surface;
use crate::transition::{Attr, Transition};

/// One attribute value to apply on a frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    /// Target mark.
    pub mark: MarkId,
    /// Target attribute.
    pub attr: Attr,
    /// Value at the sampled time.
    pub value: f64,
}

/// All transitions of one presented surface, flattened for per-frame sampling.
///
/// Time is measured in milliseconds since the surface was presented.
#[derive(Clone, Debug, Default)]
pub struct Timeline {
    tracks: Vec<(MarkId, Transition)>,
    end_ms: u32,
}

impl Timeline {
    /// Collect the transitions of every mark on `surface`.
    pub fn from_surface(surface: &Surface) -> Self {
        let tracks: Vec<_> = surface
            .marks()
            .iter()
            .flat_map(|m| m.transitions.iter().map(move |t| (m.id, *t)))
            .collect();
        Self {
            end_ms: surface.transition_end_ms(),
            tracks,
        }
    }

    /// Whether there is nothing to animate.
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Time at which every transition has finished.
    pub fn end_ms(&self) -> u32 {
        self.end_ms
    }

    /// Whether every transition has reached its rest value at `elapsed_ms`.
    pub fn is_finished(&self, elapsed_ms: f64) -> bool {
        elapsed_ms >= f64::from(self.end_ms)
    }

    /// Values of every animated attribute at `elapsed_ms`.
    ///
    /// Transitions still waiting out their delay are skipped so an earlier transition on the same
    /// attribute keeps control until the later one starts.
    pub fn sample(&self, elapsed_ms: f64) -> impl Iterator<Item = Sample> + '_ {
        self.tracks
            .iter()
            .filter(move |(_, t)| elapsed_ms >= f64::from(t.delay_ms))
            .map(move |(mark, t)| Sample {
                mark: *mark,
                attr: t.attr,
                value: t.value_at(elapsed_ms),
            })
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Rect;

    use super::*;
    use crate::dimensions::Dimensions;
    use crate::mark::Mark;
    use crate::transition::Ease;

    fn surface() -> Surface {
        let mut s = Surface::new(Dimensions::square(100));
        s.push(
            Mark::builder(MarkId(1))
                .rect(Rect::new(0.0, 0.0, 80.0, 10.0))
                .transition(
                    Transition::new(Attr::Width, 0.0, 80.0)
                        .with_duration(1000)
                        .with_ease(Ease::Linear),
                )
                .build(),
        );
        s.push(
            Mark::builder(MarkId(2))
                .rect(Rect::new(0.0, 20.0, 40.0, 30.0))
                .transition(
                    Transition::new(Attr::Opacity, 0.0, 1.0)
                        .with_delay(1000)
                        .with_duration(800),
                )
                .build(),
        );
        s
    }

    #[test]
    fn samples_active_tracks() {
        let tl = Timeline::from_surface(&surface());
        let at_half: Vec<_> = tl.sample(500.0).collect();
        assert_eq!(at_half.len(), 1, "delayed track is skipped");
        assert_eq!(at_half[0].mark, MarkId(1), "width track");
        assert!((at_half[0].value - 40.0).abs() < 1e-9, "linear midpoint");
        assert_eq!(tl.sample(1200.0).count(), 2, "both tracks active");
    }

    #[test]
    fn finishes_after_latest_track() {
        let tl = Timeline::from_surface(&surface());
        assert_eq!(tl.end_ms(), 1800, "delay plus duration");
        assert!(!tl.is_finished(1799.0), "still running");
        assert!(tl.is_finished(1800.0), "finished");
    }

    #[test]
    fn empty_surface_has_empty_timeline() {
        let tl = Timeline::from_surface(&Surface::new(Dimensions::square(10)));
        assert!(tl.is_empty(), "no tracks");
        assert!(tl.is_finished(0.0), "trivially finished");
    }
}
