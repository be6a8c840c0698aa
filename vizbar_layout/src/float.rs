// Copyright 2025 the VizBar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Float helpers for `no_std` builds.
//!
//! `f64::ln` and `f64::powf` are not available in `core`. This trait dispatches to `libm`
//! when the `std` feature is off.

/// Float math helpers for `f64` in `no_std` mode.
pub(crate) trait FloatExt {
    fn ln(self) -> Self;
    fn powf(self, n: Self) -> Self;
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
impl FloatExt for f64 {
    fn ln(self) -> Self {
        libm::log(self)
    }

    fn powf(self, n: Self) -> Self {
        libm::pow(self, n)
    }
}

#[cfg(all(not(feature = "std"), not(feature = "libm")))]
compile_error!("vizbar_layout requires either the `std` or `libm` feature");
