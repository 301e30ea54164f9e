// Copyright 2025 the Scrolly Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The story's chart panels.
//!
//! Each panel is a draw procedure: it takes a fresh [`Surface`] and the drawing-area
//! [`Dimensions`], and fills the surface with marks, entrance transitions and tooltips. Panels
//! never fail; surfaces smaller than their margins yield empty plots.

mod age;
mod conclusion;
mod education;
mod global;
mod industry;
mod intro;

use scrolly_core::{Dimensions, Surface};

pub use age::age;
pub use conclusion::conclusion;
pub use education::education;
pub use global::global;
pub use industry::industry;
pub use intro::intro;

/// Signature shared by every panel.
pub type DrawFn = fn(&mut Surface, Dimensions);

/// Id bases, kept apart so marks from different roles never collide.
pub(crate) mod ids {
    pub(crate) const SERIES: u64 = 0x100;
    pub(crate) const SERIES_ALT: u64 = 0x200;
    pub(crate) const LABELS: u64 = 0x300;
    pub(crate) const ANNOTATIONS: u64 = 0x400;
    pub(crate) const X_AXIS: u64 = 0x1000;
    pub(crate) const Y_AXIS: u64 = 0x2000;
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::format;
    use alloc::vec::Vec;

    use scrolly_core::svg::{SvgFrame, to_svg_string};
    use scrolly_core::{Attr, MarkId, MarkPayload, Tone};

    use super::*;

    const PANELS: [(&str, DrawFn); 6] = [
        ("intro", intro),
        ("global", global),
        ("age", age),
        ("education", education),
        ("industry", industry),
        ("conclusion", conclusion),
    ];

    fn draw(panel: DrawFn, side: u32) -> Surface {
        let dims = Dimensions::square(side);
        let mut surface = Surface::new(dims);
        panel(&mut surface, dims);
        surface
    }

    fn texts(surface: &Surface) -> Vec<&str> {
        surface
            .marks()
            .iter()
            .filter_map(|m| match &m.payload {
                MarkPayload::Text(t) => Some(t.text.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn every_panel_draws_something() {
        for (name, panel) in PANELS {
            let surface = draw(panel, 600);
            assert!(!surface.is_empty(), "{name} drew nothing");
            assert!(surface.transition_end_ms() > 0, "{name} has no entrance");
        }
    }

    #[test]
    fn tiny_surfaces_stay_finite() {
        for (name, panel) in PANELS {
            let surface = draw(panel, 100);
            for mark in surface.marks() {
                if let Some(b) = mark.bounds() {
                    assert!(
                        b.x0.is_finite() && b.y0.is_finite() && b.x1.is_finite() && b.y1.is_finite(),
                        "{name} produced non-finite bounds for {:?}",
                        mark.id
                    );
                    assert!(b.width() >= 0.0 && b.height() >= 0.0, "{name} inverted {:?}", mark.id);
                }
            }
        }
    }

    #[test]
    fn intro_fills_circles_and_clips_the_woman() {
        let surface = draw(intro, 600);
        let r = 100.0_f64.min(600.0 / 3.5);
        let man = surface.get(MarkId(2)).expect("man fill");
        assert_eq!(man.start_attr(Attr::Radius), Some(0.0), "man grows from nothing");
        assert_eq!(man.attr(Attr::Radius), Some(r), "man rests at full radius");
        let woman = surface.get(MarkId(6)).expect("woman fill");
        let clip = woman.clip.expect("woman is clipped");
        assert!((clip.height() - 1.64 * r).abs() < 1e-9, "82% of the diameter");
        assert_eq!(woman.start_attr(Attr::ClipHeight), Some(0.0), "clip starts empty");
        let hover: Vec<_> = surface.interactive().collect();
        assert_eq!(hover.len(), 1, "one hover target");
        assert_eq!(hover[0].tooltip.as_ref().map(|t| t.value.as_str()), Some("-18%"), "tooltip value");
        assert_eq!(texts(&surface), ["MAN ($1.00)", "WOMAN ($0.82)"], "labels");
    }

    #[test]
    fn hover_targets_receive_pointer_events() {
        for (name, panel) in PANELS {
            let surface = draw(panel, 600);
            let svg = to_svg_string(&surface, SvgFrame::Start);
            for mark in surface.interactive() {
                let tag = format!(r#"data-mark="{}" "#, mark.id.0);
                let element = svg
                    .lines()
                    .find(|line| line.contains(&tag))
                    .unwrap_or_else(|| panic!("{name} did not write {:?}", mark.id));
                assert!(
                    element.contains(r#"pointer-events="all""#),
                    "{name} hover target is not hit-testable: {element}"
                );
            }
        }
    }

    #[test]
    fn global_has_bar_per_country() {
        let surface = draw(global, 600);
        assert_eq!(surface.interactive().count(), 6, "six hoverable bars");
        let labels = texts(&surface);
        assert!(labels.contains(&"Iceland"), "band axis label");
        assert!(labels.contains(&"91.2%"), "value label");
        assert!(labels.contains(&"100%"), "tick label");
    }

    #[test]
    fn age_draws_two_lines() {
        let surface = draw(age, 600);
        let lines = surface
            .marks()
            .iter()
            .filter(|m| matches!(m.payload, MarkPayload::Path(_)) && !m.transitions.is_empty())
            .count();
        assert_eq!(lines, 2, "men and women lines");
        let labels = texts(&surface);
        assert!(labels.contains(&"60 yrs"), "age tick");
        assert!(labels.contains(&"$110k"), "earnings tick");
    }

    #[test]
    fn education_delays_women_bars() {
        let surface = draw(education, 600);
        let tips: Vec<_> = surface.interactive().filter_map(|m| m.tooltip.as_ref()).collect();
        assert_eq!(tips.len(), 8, "two bars per level");
        assert!(
            tips.iter().any(|t| t.tone == Tone::Men && t.value == "$115,000"),
            "men tooltip value"
        );
        let delays: Vec<u32> = surface
            .interactive()
            .map(|m| m.transitions.iter().map(|t| t.delay_ms).max().unwrap_or(0))
            .collect();
        assert_eq!(delays.iter().filter(|d| **d == 300).count(), 4, "women start later");
    }

    #[test]
    fn industry_has_caption() {
        let surface = draw(industry, 600);
        assert!(texts(&surface).contains(&"WAGE GAP INTENSITY BY SECTOR"), "caption");
        assert_eq!(surface.interactive().count(), 5, "five sectors");
    }

    #[test]
    fn conclusion_reveals_the_gap_late() {
        let surface = draw(conclusion, 600);
        let gap = surface
            .interactive()
            .find(|m| m.tooltip.as_ref().is_some_and(|t| t.tone == Tone::Loss))
            .expect("gap region");
        assert_eq!(gap.start_attr(Attr::Opacity), Some(0.0), "hidden at first");
        assert_eq!(gap.transitions[0].delay_ms, 1000, "revealed after the bars start");
        let tip = gap.tooltip.as_ref().expect("tooltip");
        assert_eq!(tip.value, "-$0.6M", "deficit value");
        assert_eq!(tip.suffix.as_deref(), Some(" over a career."), "suffix");
        assert!(
            texts(&surface).contains(&"Men's Average Earnings: $3.50M"),
            "row label"
        );
    }
}
