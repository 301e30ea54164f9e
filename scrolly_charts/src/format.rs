// Copyright 2025 the Scrolly Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Number formatting for tick labels, value labels and tooltips.

extern crate alloc;

use alloc::format;
use alloc::string::{String, ToString};

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Formats a number the way it reads in prose: integers without a fraction, everything else
/// with the shortest round-tripping representation (`82`, `91.2`, `0.5`).
pub fn format_number(v: f64) -> String {
    if v == 0.0 {
        // Normalizes `-0`.
        return "0".to_string();
    }
    format!("{v}")
}

/// Formats a tick value, choosing decimals from the tick step.
///
/// Steps of `1` and above print as integers with thousands separators.
pub fn format_tick_with_step(v: f64, step: f64) -> String {
    if !v.is_finite() {
        return format_number(v);
    }
    let decimals = if step > 0.0 && step < 1.0 {
        let d = (-step.log10()).ceil().clamp(0.0, 12.0);
        #[allow(
            clippy::cast_possible_truncation,
            reason = "clamped to a small non-negative range"
        )]
        {
            d as usize
        }
    } else {
        0
    };
    if decimals == 0 {
        group_thousands(v.round())
    } else {
        format_fixed(v, decimals)
    }
}

/// Formats with a fixed number of decimals.
pub fn format_fixed(v: f64, decimals: usize) -> String {
    let s = format!("{v:.decimals$}");
    if s.starts_with('-') && s[1..].chars().all(|c| c == '0' || c == '.') {
        return s[1..].to_string();
    }
    s
}

/// Formats the integer part of `v` with `,` thousands separators (`45,000`).
pub fn group_thousands(v: f64) -> String {
    let digits = format_fixed(v.trunc_toward_zero(), 0);
    let (sign, digits) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits.as_str()),
    };
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push_str(sign);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Formats a dollar amount with thousands separators (`$45,000`).
pub fn format_dollars(v: f64) -> String {
    format!("${}", group_thousands(v.round()))
}

/// Formats a value in thousands of dollars (`$20k`).
pub fn format_dollars_k(v: f64) -> String {
    format!("${}k", format_number(v / 1000.0))
}

/// Formats a value in millions of dollars with fixed decimals (`$3.50M`).
pub fn format_dollars_m(v: f64, decimals: usize) -> String {
    format!("${}M", format_fixed(v / 1_000_000.0, decimals))
}

trait TruncExt {
    fn trunc_toward_zero(self) -> Self;
}

impl TruncExt for f64 {
    fn trunc_toward_zero(self) -> Self {
        if self < 0.0 { -(-self).floor() } else { self.floor() }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn numbers_drop_trailing_zero_fraction() {
        assert_eq!(format_number(82.0), "82", "integer value");
        assert_eq!(format_number(91.2), "91.2", "fractional value");
        assert_eq!(format_number(-0.0), "0", "negative zero");
    }

    #[test]
    fn thousands_are_grouped() {
        assert_eq!(group_thousands(45_000.0), "45,000", "five digits");
        assert_eq!(group_thousands(115_000.0), "115,000", "six digits");
        assert_eq!(group_thousands(3_500_000.0), "3,500,000", "seven digits");
        assert_eq!(group_thousands(999.0), "999", "no separator");
        assert_eq!(group_thousands(-1234.0), "-1,234", "negative");
        assert_eq!(format_dollars(34_000.0), "$34,000", "dollars");
    }

    #[test]
    fn money_shorthands() {
        assert_eq!(format_dollars_k(110_000.0), "$110k", "thousands");
        assert_eq!(format_dollars_k(2_500.0), "$2.5k", "fractional thousands");
        assert_eq!(format_dollars_m(3_500_000.0, 2), "$3.50M", "millions");
        assert_eq!(format_dollars_m(630_000.0, 1), "$0.6M", "deficit");
    }

    #[test]
    fn tick_step_controls_decimals() {
        assert_eq!(format_tick_with_step(20_000.0, 10_000.0), "20,000", "integer step");
        assert_eq!(format_tick_with_step(0.25, 0.05), "0.25", "hundredths");
        assert_eq!(format_tick_with_step(0.5, 0.5), "0.5", "tenths");
    }
}
