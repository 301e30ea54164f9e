// Copyright 2025 the Scrolly Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Entrance transitions and easing.
//!
//! A [`Transition`] animates one numeric [`Attr`] of a mark from a start value to its rest value.
//! Transitions are fire-and-forget: nothing waits on them, and replacing a surface drops every
//! transition that belonged to it.

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// An animatable numeric attribute of a mark.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Attr {
    /// Rectangle `x`.
    X,
    /// Rectangle `y`.
    Y,
    /// Rectangle width.
    Width,
    /// Rectangle height.
    Height,
    /// Circle radius.
    Radius,
    /// Whole-mark opacity.
    Opacity,
    /// Stroke dash offset.
    DashOffset,
    /// `y` of the mark's clip rectangle.
    ClipY,
    /// Height of the mark's clip rectangle.
    ClipHeight,
}

impl Attr {
    /// The SVG attribute that carries this value.
    ///
    /// Clip attributes live on the clip rectangle element, not on the mark itself.
    pub fn svg_name(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y | Self::ClipY => "y",
            Self::Width => "width",
            Self::Height | Self::ClipHeight => "height",
            Self::Radius => "r",
            Self::Opacity => "opacity",
            Self::DashOffset => "stroke-dashoffset",
        }
    }

    /// Whether the attribute targets the clip rectangle.
    pub fn is_clip(self) -> bool {
        matches!(self, Self::ClipY | Self::ClipHeight)
    }
}

/// Easing curves, using the usual d3 definitions.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Ease {
    /// Identity.
    Linear,
    /// Symmetric cubic; the default for transitions.
    #[default]
    CubicInOut,
    /// Exponential ease-out.
    ExpOut,
    /// Elastic ease-out that overshoots and settles.
    ElasticOut {
        /// Overshoot amplitude (values below 1 are treated as 1).
        amplitude: f64,
        /// Oscillation period in normalized time.
        period: f64,
    },
}

impl Ease {
    /// Elastic ease-out with the default amplitude (1) and period (0.3).
    pub const ELASTIC_OUT: Self = Self::ElasticOut {
        amplitude: 1.0,
        period: 0.3,
    };

    /// Maps normalized time `t` in `[0, 1]` to eased progress.
    ///
    /// `t` is clamped, and the curve returns exactly `0` and `1` at the ends.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        match self {
            Self::Linear => t,
            Self::CubicInOut => {
                let t2 = t * 2.0;
                if t2 <= 1.0 {
                    t2 * t2 * t2 / 2.0
                } else {
                    let u = t2 - 2.0;
                    (u * u * u + 2.0) / 2.0
                }
            }
            Self::ExpOut => 1.0 - tpmt(t),
            Self::ElasticOut { amplitude, period } => {
                let a = amplitude.max(1.0);
                let p = period / core::f64::consts::TAU;
                if p <= 0.0 {
                    return 1.0 - tpmt(t);
                }
                let s = (1.0 / a).asin() * p;
                1.0 - a * tpmt(t) * ((t + s) / p).sin()
            }
        }
    }
}

/// `2^(-10t)`, shifted so it hits exactly zero at `t = 1`.
fn tpmt(t: f64) -> f64 {
    (2.0_f64.powf(-10.0 * t) - 0.000_976_562_5) * 1.000_977_517_106_549_4
}

/// A single-attribute entrance animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    /// Animated attribute.
    pub attr: Attr,
    /// Value before and at the start of the animation.
    pub from: f64,
    /// Rest value reached at the end.
    pub to: f64,
    /// Delay before the animation starts, in milliseconds.
    pub delay_ms: u32,
    /// Animation duration, in milliseconds.
    pub duration_ms: u32,
    /// Easing curve.
    pub ease: Ease,
}

impl Transition {
    /// Duration used when none is set.
    pub const DEFAULT_DURATION_MS: u32 = 250;

    /// Creates a transition with the default duration, no delay, and [`Ease::CubicInOut`].
    pub fn new(attr: Attr, from: f64, to: f64) -> Self {
        Self {
            attr,
            from,
            to,
            delay_ms: 0,
            duration_ms: Self::DEFAULT_DURATION_MS,
            ease: Ease::default(),
        }
    }

    /// Sets the duration in milliseconds.
    pub fn with_duration(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Sets the start delay in milliseconds.
    pub fn with_delay(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Sets the easing curve.
    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Milliseconds after start at which the transition is complete.
    pub fn end_ms(&self) -> u32 {
        self.delay_ms.saturating_add(self.duration_ms)
    }

    /// Eased progress at `elapsed_ms` after the surface was presented.
    pub fn progress(&self, elapsed_ms: f64) -> f64 {
        let local = elapsed_ms - f64::from(self.delay_ms);
        if local <= 0.0 {
            return 0.0;
        }
        if self.duration_ms == 0 {
            return 1.0;
        }
        self.ease.apply(local / f64::from(self.duration_ms))
    }

    /// Attribute value at `elapsed_ms`.
    pub fn value_at(&self, elapsed_ms: f64) -> f64 {
        self.from + (self.to - self.from) * self.progress(elapsed_ms)
    }

    /// Whether the transition has reached its rest value.
    pub fn is_finished(&self, elapsed_ms: f64) -> bool {
        elapsed_ms >= f64::from(self.end_ms())
    }
}
