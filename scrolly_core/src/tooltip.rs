// Copyright 2025 the Scrolly Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover tooltip content attached to marks.

extern crate alloc;

use alloc::string::String;

/// Colour accent of a tooltip heading/value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tone {
    /// The series for men.
    Men,
    /// The series for women.
    Women,
    /// Losses and deficits.
    Loss,
}

/// Tooltip content shown while the pointer is over a mark.
///
/// Content is structured rather than pre-rendered markup; frontends decide how to present it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tooltip {
    /// Heading line.
    pub title: String,
    /// Label preceding the value.
    pub label: String,
    /// Emphasized value.
    pub value: String,
    /// Optional trailing text after the value.
    pub suffix: Option<String>,
    /// Accent colour.
    pub tone: Tone,
}

impl Tooltip {
    /// Creates a tooltip.
    pub fn new(
        tone: Tone,
        title: impl Into<String>,
        label: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            label: label.into(),
            value: value.into(),
            suffix: None,
            tone,
        }
    }

    /// Sets trailing text shown after the value.
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }
}
