// Copyright 2025 the Scrolly Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Float helpers for `no_std` builds.
//!
//! Rust's float math methods like `f64::sin` and `f64::powf` are not available in `core`.
//! We provide a small trait that dispatches to `libm` when the `std` feature is off.

/// Float math helpers for `f64` in `no_std` mode.
pub(crate) trait FloatExt {
    fn powf(self, n: Self) -> Self;
    fn sin(self) -> Self;
    fn asin(self) -> Self;
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
impl FloatExt for f64 {
    fn powf(self, n: Self) -> Self {
        libm::pow(self, n)
    }

    fn sin(self) -> Self {
        libm::sin(self)
    }

    fn asin(self) -> Self {
        libm::asin(self)
    }
}

#[cfg(all(not(feature = "std"), not(feature = "libm")))]
compile_error!("scrolly_core requires either the `std` or `libm` feature");
