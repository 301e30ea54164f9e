// Copyright 2025 the Scrolly Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless scroll session.
//!
//! Mounts the built-in story on a simulated page, runs the startup sequence, scrolls through
//! every step, resizes the page, and writes one SVG per render plus an `index.html`.

mod page;
mod report;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::Parser;
use scrolly_core::svg::{SvgFrame, to_svg_string};
use scrolly_story::{Story, StoryConfig, Storyteller, VisualizationType};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::page::{HeadlessPage, StackedSteps};
use crate::report::Snapshot;

#[derive(Parser, Debug)]
#[command(author, version, about = "Headless scroll session writing SVG snapshots")]
struct Args {
    /// Output directory
    #[arg(long, default_value = "scrolly_demo_out")]
    out: PathBuf,

    /// Chart container width in pixels
    #[arg(long, default_value_t = 800.0)]
    width: f64,

    /// Chart container height in pixels
    #[arg(long, default_value_t = 600.0)]
    height: f64,

    /// JSON configuration layered over the defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Height of each narrative block in pixels
    #[arg(long, default_value_t = 900.0)]
    step_height: f64,

    /// Scroll distance per simulated scroll event in pixels
    #[arg(long, default_value_t = 120.0)]
    scroll_step: f64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            StoryConfig::from_json(&json).with_context(|| format!("parsing {}", path.display()))?
        }
        None => StoryConfig::default(),
    };

    let story = Story::builtin();
    let mut steps = StackedSteps::new(
        story.len(),
        args.step_height.max(1.0),
        args.height,
        config.offset,
    );
    let mut teller = Storyteller::new(story, config);
    let mut page = HeadlessPage::new((args.width, args.height));
    let mut rendered: Vec<(VisualizationType, &'static str)> = Vec::new();

    teller.mount(&mut page)?;
    info!(delay = ?teller.startup_delay(), "mounted; startup delay skipped");
    rendered.push((teller.finish_startup(&mut page, &mut steps), "startup"));

    let scroll_step = args.scroll_step.max(1.0);
    let mut y = 0.0;
    loop {
        for event in steps.tracker.update(y) {
            if let Some(ty) = teller.step_event(&mut page, event) {
                info!(scroll = y, visualization = %ty, "step entered");
                rendered.push((ty, "scroll"));
            }
        }
        if y >= steps.end_scroll() {
            break;
        }
        y = (y + scroll_step).min(steps.end_scroll());
    }

    // Shrink the page and let the coalesced resize run on the next frame.
    page.size = (args.width * 0.6, args.height);
    for _ in 0..3 {
        teller.request_resize();
    }
    if let Some(ty) = teller.animation_frame(&mut page, &mut steps) {
        rendered.push((ty, "resize"));
    }
    info!(
        renders = teller.render_count(),
        attached = page.attached(),
        active = page.active_block().unwrap_or("none"),
        "session finished"
    );

    fs::create_dir_all(&args.out).with_context(|| format!("creating {}", args.out.display()))?;
    let mut snapshots = Vec::with_capacity(rendered.len());
    for (i, (surface, (ty, cause))) in page.charts.iter().zip(&rendered).enumerate() {
        let file = format!("{i:02}-{ty}.svg");
        let path = args.out.join(&file);
        fs::write(&path, to_svg_string(surface, SvgFrame::Rest))
            .with_context(|| format!("writing {}", path.display()))?;
        snapshots.push(Snapshot {
            file,
            visualization: *ty,
            cause: *cause,
            width: surface.dimensions().width,
        });
    }
    let index = args.out.join("index.html");
    fs::write(
        &index,
        report::render_index(teller.story(), teller.config(), &snapshots),
    )
    .with_context(|| format!("writing {}", index.display()))?;
    println!("wrote {} snapshots to {}", snapshots.len(), args.out.display());
    Ok(())
}
