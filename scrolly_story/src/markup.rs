// Copyright 2025 the Scrolly Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! HTML for narrative blocks and tooltip bodies.
//!
//! All interpolated text is escaped.

use core::fmt::Write as _;

use scrolly_core::svg::write_escaped;
use scrolly_core::{Tone, Tooltip};

use crate::{NarrativeStep, StoryConfig};

/// The inner markup of a step block (card, "Data Focus" label, heading, body).
///
/// The outer element is created by the host with [`StoryConfig::step_class`] and a
/// `data-step` attribute; see [`step_block`] for the complete element.
pub fn step_body(step: &NarrativeStep) -> String {
    let mut out = String::new();
    out.push_str(
        "<div class=\"p-10 bg-[#151515] rounded-3xl border border-gray-800 shadow-2xl\">\
         <div class=\"mb-4 text-indigo-500 font-bold tracking-widest uppercase text-[10px] flex items-center gap-2\">\
         <span class=\"w-1.5 h-1.5 rounded-full bg-indigo-500\"></span>Data Focus: ",
    );
    push_escaped(&mut out, step.visualization.name());
    out.push_str("</div><h2 class=\"text-4xl font-bold text-white mb-6 leading-tight\">");
    push_escaped(&mut out, &step.title);
    out.push_str("</h2><p class=\"text-lg text-gray-400 leading-relaxed font-light italic\">");
    push_escaped(&mut out, &step.description);
    out.push_str("</p></div>");
    out
}

/// The complete step block element.
pub fn step_block(step: &NarrativeStep, config: &StoryConfig) -> String {
    let mut out = String::from("<div class=\"");
    push_escaped(&mut out, &config.step_class);
    out.push_str("\" data-step=\"");
    push_escaped(&mut out, &step.id);
    out.push_str("\">");
    out.push_str(&step_body(step));
    out.push_str("</div>");
    out
}

/// The tooltip body for `tooltip`.
pub fn tooltip(tooltip: &Tooltip) -> String {
    let (title_class, value_class) = match tooltip.tone {
        Tone::Men => ("text-blue-400 font-bold", "text-white"),
        Tone::Women => ("text-pink-400 font-bold", "text-white"),
        Tone::Loss => ("text-red-400 font-bold mb-1", "text-white font-black"),
    };
    let mut out = String::new();
    let _ = write!(out, "<div class='{title_class}'>");
    push_escaped(&mut out, &tooltip.title);
    out.push_str("</div>");
    push_escaped(&mut out, &tooltip.label);
    let _ = write!(out, ": <span class='{value_class}'>");
    push_escaped(&mut out, &tooltip.value);
    out.push_str("</span>");
    if let Some(suffix) = &tooltip.suffix {
        out.push(' ');
        push_escaped(&mut out, suffix);
    }
    out
}

fn push_escaped(out: &mut String, s: &str) {
    // Writing into a `String` cannot fail.
    let _ = write_escaped(out, s);
}

#[cfg(test)]
mod tests {
    use crate::VisualizationType;

    use super::*;

    #[test]
    fn step_block_carries_class_and_id() {
        let step = NarrativeStep::new("global", VisualizationType::Global, "No Country", "Text");
        let html = step_block(&step, &StoryConfig::default());
        assert!(
            html.starts_with("<div class=\"scrollama-step\" data-step=\"global\">"),
            "outer element: {html}"
        );
        assert!(html.contains("Data Focus: global"), "focus label");
        assert!(html.contains(">No Country</h2>"), "title");
        assert!(html.ends_with("</p></div></div>"), "closed");
    }

    #[test]
    fn text_is_escaped() {
        let step = NarrativeStep::new(
            "x\"y",
            VisualizationType::Age,
            "<b>bold</b>",
            "Tom & Jerry's",
        );
        let html = step_block(&step, &StoryConfig::default());
        assert!(html.contains("data-step=\"x&quot;y\""), "id attribute");
        assert!(html.contains("&lt;b&gt;bold&lt;/b&gt;"), "title");
        assert!(html.contains("Tom &amp; Jerry&apos;s"), "description");
    }

    #[test]
    fn tooltip_body() {
        let tip = Tooltip::new(Tone::Loss, "Missing Wealth", "Cumulative Deficit", "-$0.6M")
            .with_suffix("over a career.");
        assert_eq!(
            tooltip(&tip),
            "<div class='text-red-400 font-bold mb-1'>Missing Wealth</div>Cumulative Deficit: \
             <span class='text-white font-black'>-$0.6M</span> over a career.",
            "loss tooltip"
        );
        let tip = Tooltip::new(Tone::Men, "PhD", "Men", "$115,000");
        assert!(tooltip(&tip).starts_with("<div class='text-blue-400 font-bold'>PhD</div>"), "men");
    }
}
