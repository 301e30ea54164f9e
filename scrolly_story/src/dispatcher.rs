// Copyright 2025 the Scrolly Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use scrolly_core::{Dimensions, Surface};
use tracing::debug;

use crate::{ChartRegistry, RenderHost, ViewportResolver, VisualizationType};

/// Clears the previous chart and draws a new one.
///
/// Every render is a full rebuild: the host is cleared, the drawing area is measured again and
/// a fresh [`Surface`] is drawn and presented.
#[derive(Debug)]
pub struct RenderDispatcher {
    registry: ChartRegistry,
    resolver: ViewportResolver,
    renders: u64,
}

impl RenderDispatcher {
    /// Creates a dispatcher.
    pub fn new(registry: ChartRegistry, resolver: ViewportResolver) -> Self {
        Self {
            registry,
            resolver,
            renders: 0,
        }
    }

    /// Renders `ty` into `host` and returns the dimensions it was drawn at.
    pub fn render(&mut self, host: &mut impl RenderHost, ty: VisualizationType) -> Dimensions {
        host.clear();
        host.hide_tooltip();
        let dimensions = self.resolver.resolve(host);
        let mut surface = Surface::new(dimensions);
        self.registry.dispatch(ty, &mut surface, dimensions);
        self.renders += 1;
        debug!(
            visualization = %ty,
            width = dimensions.width,
            height = dimensions.height,
            marks = surface.len(),
            transitions_ms = surface.transition_end_ms(),
            render = self.renders,
            "rendered"
        );
        host.present(surface);
        dimensions
    }

    /// Number of renders so far.
    pub fn render_count(&self) -> u64 {
        self.renders
    }

    /// The registry renders draw from.
    pub fn registry(&self) -> &ChartRegistry {
        &self.registry
    }

    /// The drawing-area resolver.
    pub fn resolver(&self) -> &ViewportResolver {
        &self.resolver
    }
}

#[cfg(test)]
mod tests {
    use scrolly_core::svg::{SvgFrame, to_svg_string};

    use super::*;

    #[derive(Default)]
    struct Host {
        size: Option<(f64, f64)>,
        log: Vec<&'static str>,
        nodes: usize,
        presented: Option<Surface>,
    }

    impl RenderHost for Host {
        fn measure(&self) -> Option<(f64, f64)> {
            self.size
        }

        fn clear(&mut self) {
            self.log.push("clear");
            self.nodes = 0;
        }

        fn hide_tooltip(&mut self) {
            self.log.push("hide");
        }

        fn present(&mut self, surface: Surface) {
            self.log.push("present");
            self.nodes += surface.len();
            self.presented = Some(surface);
        }
    }

    fn dispatcher() -> RenderDispatcher {
        RenderDispatcher::new(ChartRegistry::builtin(), ViewportResolver::default())
    }

    #[test]
    fn clears_before_presenting() {
        let mut host = Host {
            size: Some((800.0, 600.0)),
            ..Host::default()
        };
        let dims = dispatcher().render(&mut host, VisualizationType::Global);
        assert_eq!(dims, Dimensions::square(600), "resolved dimensions");
        assert_eq!(host.log, ["clear", "hide", "present"], "call order");
    }

    #[test]
    fn only_the_last_chart_remains() {
        let mut host = Host {
            size: Some((500.0, 500.0)),
            ..Host::default()
        };
        let mut dispatcher = dispatcher();
        dispatcher.render(&mut host, VisualizationType::Age);
        dispatcher.render(&mut host, VisualizationType::Industry);
        let last = host.presented.as_ref().unwrap();
        assert_eq!(host.nodes, last.len(), "no nodes left from the age chart");
        assert_eq!(dispatcher.render_count(), 2, "render count");
    }

    #[test]
    fn repeated_renders_are_identical() {
        let mut host = Host::default();
        let mut dispatcher = dispatcher();
        dispatcher.render(&mut host, VisualizationType::Education);
        let first = to_svg_string(host.presented.as_ref().unwrap(), SvgFrame::Rest);
        dispatcher.render(&mut host, VisualizationType::Education);
        let second = to_svg_string(host.presented.as_ref().unwrap(), SvgFrame::Rest);
        assert_eq!(first, second, "same type, same chart");
        assert_eq!(
            host.presented.as_ref().unwrap().dimensions(),
            Dimensions::square(400),
            "unmeasurable container uses the fallback"
        );
    }
}
