// Copyright 2025 the Scrolly Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mapping from visualization to draw procedure.

use core::fmt;

use scrolly_charts::panels;
use scrolly_core::{Dimensions, Surface};

use crate::VisualizationType;

/// A boxed draw procedure.
pub type Draw = Box<dyn Fn(&mut Surface, Dimensions)>;

/// One draw procedure per [`VisualizationType`].
///
/// Entries are indexed by [`VisualizationType::index`], so every variant always has exactly one
/// procedure.
pub struct ChartRegistry {
    entries: [Draw; 6],
}

impl fmt::Debug for ChartRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChartRegistry")
            .field("entries", &VisualizationType::ALL.map(VisualizationType::name))
            .finish()
    }
}

impl Default for ChartRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ChartRegistry {
    /// The story's own panels.
    pub fn builtin() -> Self {
        Self::from_fn(|ty| Box::new(panel(ty)))
    }

    /// Builds a registry by asking `factory` for each variant's procedure.
    pub fn from_fn(mut factory: impl FnMut(VisualizationType) -> Draw) -> Self {
        Self {
            entries: VisualizationType::ALL.map(&mut factory),
        }
    }

    /// Draws `ty` onto `surface`.
    pub fn dispatch(&self, ty: VisualizationType, surface: &mut Surface, dimensions: Dimensions) {
        (self.entries[ty.index()])(surface, dimensions);
    }

    /// Draws the visualization named `name`, falling back to intro for unknown or missing names.
    pub fn dispatch_name(
        &self,
        name: Option<&str>,
        surface: &mut Surface,
        dimensions: Dimensions,
    ) -> VisualizationType {
        let ty = VisualizationType::parse_or_intro(name);
        self.dispatch(ty, surface, dimensions);
        ty
    }
}

fn panel(ty: VisualizationType) -> panels::DrawFn {
    match ty {
        VisualizationType::Intro => panels::intro,
        VisualizationType::Global => panels::global,
        VisualizationType::Age => panels::age,
        VisualizationType::Education => panels::education,
        VisualizationType::Industry => panels::industry,
        VisualizationType::Conclusion => panels::conclusion,
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    fn counting() -> (ChartRegistry, Rc<RefCell<Vec<VisualizationType>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let registry = ChartRegistry::from_fn(|ty| {
            let calls = Rc::clone(&calls);
            Box::new(move |_: &mut Surface, _: Dimensions| calls.borrow_mut().push(ty))
        });
        (registry, calls)
    }

    #[test]
    fn dispatch_runs_exactly_one_procedure() {
        let (registry, calls) = counting();
        let dims = Dimensions::square(200);
        for ty in VisualizationType::ALL {
            calls.borrow_mut().clear();
            registry.dispatch(ty, &mut Surface::new(dims), dims);
            assert_eq!(*calls.borrow(), [ty], "dispatching {ty}");
        }
    }

    #[test]
    fn unknown_names_draw_intro() {
        let (registry, calls) = counting();
        let dims = Dimensions::square(200);
        for name in [None, Some("unknown"), Some("")] {
            calls.borrow_mut().clear();
            let ty = registry.dispatch_name(name, &mut Surface::new(dims), dims);
            assert_eq!(ty, VisualizationType::Intro, "{name:?} resolves to intro");
            assert_eq!(*calls.borrow(), [VisualizationType::Intro], "{name:?} draws intro");
        }
    }

    #[test]
    fn builtin_panels_draw_marks() {
        let registry = ChartRegistry::builtin();
        let dims = Dimensions::square(500);
        for ty in VisualizationType::ALL {
            let mut surface = Surface::new(dims);
            registry.dispatch(ty, &mut surface, dims);
            assert!(!surface.is_empty(), "{ty} drew nothing");
        }
    }
}
