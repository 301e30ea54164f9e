// Copyright 2025 the Scrolly Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drawing surface a chart is built on.
//!
//! A [`Surface`] is created fresh for every render. Charts populate it through four explicit
//! operations, mirroring the selection idiom of declarative chart libraries:
//! - create the surface ([`Surface::new`]),
//! - bind data to shapes ([`Surface::push`], [`Surface::bind`]),
//! - animate an attribute ([`Surface::animate`]),
//! - attach a pointer handler ([`Surface::on_hover`]).

extern crate alloc;

use alloc::vec::Vec;
use core::ops::Range;

use hashbrown::HashMap;

use crate::dimensions::Dimensions;
use crate::mark::{Mark, MarkId};
use crate::tooltip::Tooltip;
use crate::transition::Transition;

/// A retained set of marks sized to a drawing area.
#[derive(Clone, Debug)]
pub struct Surface {
    dimensions: Dimensions,
    marks: Vec<Mark>,
    index: HashMap<MarkId, usize>,
}

impl Surface {
    /// Create an empty surface.
    pub fn new(dimensions: Dimensions) -> Self {
        Self {
            dimensions,
            marks: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// The drawing-area size this surface was created for.
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Add a mark, replacing any mark with the same id in place.
    pub fn push(&mut self, mark: Mark) {
        match self.index.get(&mark.id) {
            Some(&slot) => self.marks[slot] = mark,
            None => {
                self.index.insert(mark.id, self.marks.len());
                self.marks.push(mark);
            }
        }
    }

    /// Add every mark from an iterator.
    pub fn extend(&mut self, marks: impl IntoIterator<Item = Mark>) {
        for mark in marks {
            self.push(mark);
        }
    }

    /// Bind one mark to each datum.
    ///
    /// `build` receives the datum index and value. Returns the index range the new marks occupy
    /// in insertion order.
    pub fn bind<T>(&mut self, data: &[T], mut build: impl FnMut(usize, &T) -> Mark) -> Range<usize> {
        let start = self.marks.len();
        for (i, datum) in data.iter().enumerate() {
            self.push(build(i, datum));
        }
        start..self.marks.len()
    }

    /// Attach a transition to an existing mark. Returns `false` if the mark is unknown.
    pub fn animate(&mut self, id: MarkId, transition: Transition) -> bool {
        match self.get_mut(id) {
            Some(mark) => {
                mark.transitions.push(transition);
                true
            }
            None => false,
        }
    }

    /// Attach a hover tooltip to an existing mark. Returns `false` if the mark is unknown.
    pub fn on_hover(&mut self, id: MarkId, tooltip: Tooltip) -> bool {
        match self.get_mut(id) {
            Some(mark) => {
                mark.tooltip = Some(tooltip);
                true
            }
            None => false,
        }
    }

    /// Look up a mark.
    pub fn get(&self, id: MarkId) -> Option<&Mark> {
        self.index.get(&id).map(|&slot| &self.marks[slot])
    }

    fn get_mut(&mut self, id: MarkId) -> Option<&mut Mark> {
        let slot = *self.index.get(&id)?;
        self.marks.get_mut(slot)
    }

    /// Number of marks.
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// Whether the surface has no marks.
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Marks in insertion order.
    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    /// Marks in paint order: by `z_index`, then insertion order.
    pub fn paint_order(&self) -> Vec<&Mark> {
        let mut out: Vec<&Mark> = self.marks.iter().collect();
        out.sort_by_key(|m| m.z_index);
        out
    }

    /// Marks that carry a hover tooltip.
    pub fn interactive(&self) -> impl Iterator<Item = &Mark> {
        self.marks.iter().filter(|m| m.is_interactive())
    }

    /// Latest end time over all transitions, in milliseconds.
    pub fn transition_end_ms(&self) -> u32 {
        self.marks
            .iter()
            .flat_map(|m| m.transitions.iter())
            .map(Transition::end_ms)
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Rect;

    use super::*;
    use crate::tooltip::Tone;
    use crate::transition::Attr;

    fn bar(id: u64) -> Mark {
        Mark::builder(MarkId(id))
            .rect(Rect::new(0.0, 0.0, 10.0, 10.0))
            .build()
    }

    #[test]
    fn push_replaces_same_id() {
        let mut s = Surface::new(Dimensions::square(100));
        s.push(bar(1));
        s.push(bar(2));
        s.push(Mark::builder(MarkId(1)).z_index(5).build());
        assert_eq!(s.len(), 2, "duplicate id should replace");
        assert_eq!(s.get(MarkId(1)).map(|m| m.z_index), Some(5), "replaced");
        assert_eq!(s.marks()[0].id, MarkId(1), "slot preserved");
    }

    #[test]
    fn bind_creates_one_mark_per_datum() {
        let mut s = Surface::new(Dimensions::square(100));
        let range = s.bind(&[3.0, 4.0, 5.0], |i, v| {
            Mark::builder(MarkId::for_row(0x10, i))
                .rect(Rect::new(0.0, 0.0, *v, 1.0))
                .build()
        });
        assert_eq!(range, 0..3, "bound range");
        assert_eq!(s.get(MarkId(0x12)).and_then(|m| m.bounds()).map(|b| b.width()), Some(5.0), "third bar width");
    }

    #[test]
    fn paint_order_is_stable_within_z() {
        let mut s = Surface::new(Dimensions::square(100));
        s.push(Mark::builder(MarkId(9)).z_index(1).build());
        s.push(Mark::builder(MarkId(3)).z_index(0).build());
        s.push(Mark::builder(MarkId(1)).z_index(1).build());
        let ids: Vec<u64> = s.paint_order().iter().map(|m| m.id.0).collect();
        assert_eq!(ids, [3, 9, 1], "z first, then insertion order");
    }

    #[test]
    fn animate_and_hover_require_known_marks() {
        let mut s = Surface::new(Dimensions::square(100));
        s.push(bar(1));
        let t = Transition::new(Attr::Width, 0.0, 10.0).with_duration(400);
        assert!(s.animate(MarkId(1), t), "known mark");
        assert!(!s.animate(MarkId(2), t), "unknown mark");
        assert!(
            s.on_hover(MarkId(1), Tooltip::new(Tone::Women, "a", "b", "c")),
            "known mark"
        );
        assert_eq!(s.interactive().count(), 1, "one interactive mark");
        assert_eq!(s.transition_end_ms(), 400, "end time");
    }
}
