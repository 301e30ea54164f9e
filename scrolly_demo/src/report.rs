// Copyright 2025 the Scrolly Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The HTML index linking every snapshot.

use std::fmt::Write as _;

use scrolly_core::svg::write_escaped;
use scrolly_story::{Story, StoryConfig, VisualizationType, markup};

/// One rendered chart written to disk.
#[derive(Debug)]
pub(crate) struct Snapshot {
    pub(crate) file: String,
    pub(crate) visualization: VisualizationType,
    pub(crate) cause: &'static str,
    pub(crate) width: u32,
}

pub(crate) fn render_index(story: &Story, config: &StoryConfig, snapshots: &[Snapshot]) -> String {
    let mut out = String::new();
    out.push_str(
        "<!doctype html>\n<html><head><meta charset=\"utf-8\"><title>scrolly session</title>\
         <style>body{background:#0a0a0a;color:#e5e7eb;font-family:sans-serif;margin:2rem}\
         figure{display:inline-block;margin:1rem;vertical-align:top}\
         figcaption{color:#9ca3af;font-size:12px}\
         .scrollama-step{max-width:40rem;margin:1rem 0}</style></head><body>\n",
    );
    out.push_str("<h1>Snapshots</h1>\n");
    for snap in snapshots {
        let _ = write!(out, "<figure><img src=\"");
        let _ = write_escaped(&mut out, &snap.file);
        let _ = writeln!(
            out,
            "\" width=\"{}\"><figcaption>{} ({}, {}px)</figcaption></figure>",
            snap.width.min(480),
            snap.visualization,
            snap.cause,
            snap.width
        );
    }
    out.push_str("<h1>Narrative</h1>\n");
    for step in story.steps() {
        out.push_str(&markup::step_block(step, config));
        out.push('\n');
    }
    out.push_str("</body></html>\n");
    out
}
