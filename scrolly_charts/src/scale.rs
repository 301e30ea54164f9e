// Copyright 2025 the Scrolly Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scale utilities.
//!
//! Both scales follow d3 conventions so chart geometry matches what readers of d3 code expect:
//! a linear scale with optional output rounding, and a band scale with inner/outer padding and
//! centered alignment.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// A linear mapping from a continuous domain to a continuous range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLinear {
    domain: (f64, f64),
    range: (f64, f64),
    round: bool,
}

impl ScaleLinear {
    /// Creates a new scale mapping `domain` values to `range` values.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            domain,
            range,
            round: false,
        }
    }

    /// Rounds mapped values to the nearest integer (d3's `rangeRound`).
    pub fn with_round(mut self, round: bool) -> Self {
        self.round = round;
        self
    }

    /// Maps a value from domain space into range space.
    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = d1 - d0;
        let v = if denom == 0.0 {
            r0
        } else {
            let t = (x - d0) / denom;
            r0 + t * (r1 - r0)
        };
        if self.round { v.round() } else { v }
    }

    /// Returns the configured domain.
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// Returns the configured range.
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Returns “nice” tick values that fall inside the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (mut min, mut max) = self.domain;
        if min > max {
            core::mem::swap(&mut min, &mut max);
        }
        let eps = (max - min).abs() * 1.0e-9;
        nice_ticks(min, max, count)
            .into_iter()
            .filter(|t| *t >= min - eps && *t <= max + eps)
            .collect()
    }
}

pub(crate) fn nice_ticks(mut min: f64, mut max: f64, count: usize) -> Vec<f64> {
    if count == 0 || !min.is_finite() || !max.is_finite() {
        return Vec::new();
    }
    if min == max {
        return alloc::vec![min];
    }
    if min > max {
        core::mem::swap(&mut min, &mut max);
    }
    let span = max - min;
    let step = nice_step(span / count as f64);
    if step == 0.0 {
        return alloc::vec![min, max];
    }

    let start = (min / step).floor() * step;
    let stop = (max / step).ceil() * step;

    let n_f = ((stop - start) / step).round();
    let n = if n_f.is_finite() && n_f >= 0.0 {
        let n_f = n_f.min(10_000.0);
        #[allow(
            clippy::cast_possible_truncation,
            reason = "guarded by finite/non-negative checks and capped at 10k"
        )]
        {
            n_f as u64
        }
    } else {
        0
    };
    (0..=n).map(|i| start + step * i as f64).collect()
}

pub(crate) fn nice_step(step: f64) -> f64 {
    if !step.is_finite() || step <= 0.0 {
        return 0.0;
    }
    let power = step.log10().floor();
    let base = 10_f64.powf(power);
    let error = step / base;
    let nice = if error >= 7.5 {
        10.0
    } else if error >= 3.5 {
        5.0
    } else if error >= 1.5 {
        2.0
    } else {
        1.0
    };
    nice * base
}

/// A discrete band scale for categorical charts.
///
/// Positions follow d3's `scaleBand`: the range is divided into `n - padding_inner +
/// 2 * padding_outer` steps and the bands are centered in whatever space remains.
#[derive(Clone, Debug, PartialEq)]
pub struct ScaleBand {
    labels: Vec<String>,
    range: (f64, f64),
    padding_inner: f64,
    padding_outer: f64,
    round: bool,
}

impl ScaleBand {
    /// Creates a band scale with one band per label and no padding.
    pub fn new<S: Into<String>>(labels: impl IntoIterator<Item = S>, range: (f64, f64)) -> Self {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
            range,
            padding_inner: 0.0,
            padding_outer: 0.0,
            round: false,
        }
    }

    /// Sets inner and outer padding to the same value (d3's `padding`).
    pub fn with_padding(self, padding: f64) -> Self {
        self.with_padding_inner(padding).with_padding_outer(padding)
    }

    /// Sets the inner padding as a fraction of the step, clamped to `[0, 1]`.
    pub fn with_padding_inner(mut self, padding: f64) -> Self {
        self.padding_inner = padding.clamp(0.0, 1.0);
        self
    }

    /// Sets the outer padding in steps.
    pub fn with_padding_outer(mut self, padding: f64) -> Self {
        self.padding_outer = padding.max(0.0);
        self
    }

    /// Rounds the step, start offset, and band width to integers (d3's `rangeRound`).
    pub fn with_round(mut self, round: bool) -> Self {
        self.round = round;
        self
    }

    /// Returns the number of bands.
    pub fn count(&self) -> usize {
        self.labels.len()
    }

    /// Returns the band labels in order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Returns the configured range.
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Returns whether output rounding is enabled.
    pub fn is_round(&self) -> bool {
        self.round
    }

    /// Index of a label, if present.
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }

    fn layout(&self) -> (f64, f64, f64) {
        let (r0, r1) = self.range;
        let (lo, hi) = if r1 < r0 { (r1, r0) } else { (r0, r1) };
        let n = self.labels.len() as f64;
        let mut step = (hi - lo) / (n - self.padding_inner + 2.0 * self.padding_outer).max(1.0);
        if self.round {
            step = step.floor();
        }
        let mut start = lo + (hi - lo - step * (n - self.padding_inner)) * 0.5;
        let mut band_width = step * (1.0 - self.padding_inner);
        if self.round {
            start = start.round();
            band_width = band_width.round();
        }
        (start, step, band_width)
    }

    /// Distance between the starts of adjacent bands.
    pub fn step(&self) -> f64 {
        self.layout().1
    }

    /// Returns the computed band width.
    pub fn band_width(&self) -> f64 {
        self.layout().2
    }

    /// Returns the start position of the band at `index`.
    pub fn x(&self, index: usize) -> f64 {
        let (start, step, _) = self.layout();
        let n = self.labels.len();
        let slot = if self.range.1 < self.range.0 {
            n.saturating_sub(index + 1)
        } else {
            index
        };
        start + step * slot as f64
    }

    /// Returns the start position of the band for `label`.
    pub fn position(&self, label: &str) -> Option<f64> {
        self.index_of(label).map(|i| self.x(i))
    }
}
