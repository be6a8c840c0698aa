// Copyright 2025 the VizBar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Domain to pixel mappings.
//!
//! A [`ScaleSpec`] describes the kind of scale (and optionally a preset domain) without a range.
//! Layout instantiates it into a [`Scale`] once domain and range are known. Instantiation always
//! produces a new value; a spec shared across charts is never modified.

extern crate alloc;

use alloc::sync::Arc;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::domain::Domain;
use crate::range::PixelRange;

/// A caller-supplied scale.
///
/// Implementations must be pure: [`ScaleFn::fitted`] returns a fresh instance bound to the
/// given domain and range, leaving `self` untouched.
pub trait ScaleFn: core::fmt::Debug + Send + Sync {
    /// Domain preset on this scale, used when neither data nor an explicit domain is available.
    fn preset_domain(&self) -> Option<Domain> {
        None
    }

    /// Returns a copy of this scale bound to `domain` and `range`.
    fn fitted(&self, domain: Domain, range: PixelRange) -> Arc<dyn ScaleFn>;

    /// Maps a domain value into pixel space.
    fn map(&self, value: f64) -> f64;

    /// Maps a pixel back into domain space, if the scale is invertible.
    fn invert(&self, pixel: f64) -> Option<f64>;
}

/// A scale specification (kind + optional preset domain, no range yet).
#[derive(Clone, Debug)]
pub enum ScaleSpec {
    /// Continuous linear scale.
    Linear(ScaleLinearSpec),
    /// Continuous log scale.
    Log(ScaleLogSpec),
    /// Linear scale over timestamps (epoch milliseconds).
    Time(ScaleTimeSpec),
    /// Caller-supplied scale.
    Custom(Arc<dyn ScaleFn>),
}

impl Default for ScaleSpec {
    fn default() -> Self {
        Self::Linear(ScaleLinearSpec::default())
    }
}

impl From<ScaleLinearSpec> for ScaleSpec {
    fn from(value: ScaleLinearSpec) -> Self {
        Self::Linear(value)
    }
}

impl From<ScaleLogSpec> for ScaleSpec {
    fn from(value: ScaleLogSpec) -> Self {
        Self::Log(value)
    }
}

impl From<ScaleTimeSpec> for ScaleSpec {
    fn from(value: ScaleTimeSpec) -> Self {
        Self::Time(value)
    }
}

impl ScaleSpec {
    /// Domain preset on the spec, if any.
    pub fn preset_domain(&self) -> Option<Domain> {
        match self {
            Self::Linear(s) => s.domain,
            Self::Log(s) => s.domain,
            Self::Time(s) => s.domain,
            Self::Custom(s) => s.preset_domain(),
        }
    }

    /// Instantiates a concrete scale for `domain` and `range`.
    pub fn instantiate(&self, domain: Domain, range: PixelRange) -> Scale {
        match self {
            Self::Linear(_) => Scale::Linear(ScaleLinear::new(domain, range)),
            Self::Log(s) => Scale::Log(ScaleLog::new(domain, range).with_base(s.base)),
            Self::Time(_) => Scale::Time(ScaleTime::new(domain, range)),
            Self::Custom(s) => Scale::Custom(s.fitted(domain, range)),
        }
    }
}

/// A concrete scale instance.
#[derive(Clone, Debug)]
pub enum Scale {
    /// Linear scale.
    Linear(ScaleLinear),
    /// Log scale.
    Log(ScaleLog),
    /// Time scale.
    Time(ScaleTime),
    /// Caller-supplied scale, fitted to this chart.
    Custom(Arc<dyn ScaleFn>),
}

impl Scale {
    /// Maps a value from domain space into pixel space.
    pub fn map(&self, x: f64) -> f64 {
        match self {
            Self::Linear(s) => s.map(x),
            Self::Log(s) => s.map(x),
            Self::Time(s) => s.map(x),
            Self::Custom(s) => s.map(x),
        }
    }

    /// Maps a pixel back into domain space.
    ///
    /// Returns `None` when the scale has a degenerate domain or range, or for custom scales that
    /// cannot be inverted.
    pub fn invert(&self, px: f64) -> Option<f64> {
        match self {
            Self::Linear(s) => s.invert(px),
            Self::Log(s) => s.invert(px),
            Self::Time(s) => s.invert(px),
            Self::Custom(s) => s.invert(px),
        }
    }

    /// Returns a scale of the same kind bound to a new domain and range.
    pub fn refit(&self, domain: Domain, range: PixelRange) -> Self {
        match self {
            Self::Linear(_) => Self::Linear(ScaleLinear::new(domain, range)),
            Self::Log(s) => Self::Log(ScaleLog::new(domain, range).with_base(s.base)),
            Self::Time(_) => Self::Time(ScaleTime::new(domain, range)),
            Self::Custom(s) => Self::Custom(s.fitted(domain, range)),
        }
    }
}

/// A linear mapping from a continuous domain to a pixel range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLinear {
    domain: (f64, f64),
    range: (f64, f64),
}

/// Specification for a linear scale.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScaleLinearSpec {
    /// Preset domain in data units.
    pub domain: Option<Domain>,
}

impl ScaleLinear {
    /// Creates a new scale mapping `domain` values to `range` pixels.
    pub fn new(domain: Domain, range: PixelRange) -> Self {
        Self {
            domain: (domain.min, domain.max),
            range: range.as_tuple(),
        }
    }

    /// Maps a value from domain space into range space.
    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = d1 - d0;
        if denom == 0.0 {
            return r0;
        }
        let t = (x - d0) / denom;
        r0 + t * (r1 - r0)
    }

    /// Maps a pixel back into domain space.
    pub fn invert(&self, px: f64) -> Option<f64> {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = r1 - r0;
        if denom == 0.0 {
            return None;
        }
        let t = (px - r0) / denom;
        Some(d0 + t * (d1 - d0))
    }
}

impl ScaleLinearSpec {
    /// Creates a linear scale spec with a preset domain.
    pub fn new(domain: Domain) -> Self {
        Self {
            domain: Some(domain),
        }
    }
}

/// A log-scale mapping from a positive domain to a range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLog {
    domain: (f64, f64),
    range: (f64, f64),
    base: f64,
}

/// Specification for a log scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLogSpec {
    /// Preset domain in data units (must be positive).
    pub domain: Option<Domain>,
    /// Log base (default 10).
    pub base: f64,
}

impl Default for ScaleLogSpec {
    fn default() -> Self {
        Self {
            domain: None,
            base: 10.0,
        }
    }
}

impl ScaleLog {
    /// Creates a new log scale.
    pub fn new(domain: Domain, range: PixelRange) -> Self {
        Self {
            domain: (domain.min, domain.max),
            range: range.as_tuple(),
            base: 10.0,
        }
    }

    /// Sets the log base.
    pub fn with_base(mut self, base: f64) -> Self {
        self.base = if base.is_finite() && base > 0.0 && base != 1.0 {
            base
        } else {
            10.0
        };
        self
    }

    fn log_base(&self, x: f64) -> f64 {
        let denom = self.base.ln();
        if denom == 0.0 { x.ln() } else { x.ln() / denom }
    }

    /// Maps a value from domain space into range space.
    ///
    /// Non-positive values map to the range start.
    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if x <= 0.0 || d0 <= 0.0 || d1 <= 0.0 {
            return r0;
        }
        let ld0 = self.log_base(d0);
        let ld1 = self.log_base(d1);
        let denom = ld1 - ld0;
        if denom == 0.0 {
            return r0;
        }
        let t = (self.log_base(x) - ld0) / denom;
        r0 + t * (r1 - r0)
    }

    /// Maps a pixel back into domain space.
    pub fn invert(&self, px: f64) -> Option<f64> {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d0 <= 0.0 || d1 <= 0.0 || r1 == r0 {
            return None;
        }
        let ld0 = self.log_base(d0);
        let ld1 = self.log_base(d1);
        let t = (px - r0) / (r1 - r0);
        Some(self.base.powf(ld0 + t * (ld1 - ld0)))
    }
}

impl ScaleLogSpec {
    /// Creates a log scale spec with a preset domain.
    pub fn new(domain: Domain) -> Self {
        Self {
            domain: Some(domain),
            base: 10.0,
        }
    }

    /// Sets the log base.
    pub fn with_base(mut self, base: f64) -> Self {
        self.base = base;
        self
    }
}

/// A time scale (a linear scale over epoch milliseconds).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleTime {
    inner: ScaleLinear,
}

/// Specification for a time scale.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScaleTimeSpec {
    /// Preset domain in epoch milliseconds.
    pub domain: Option<Domain>,
}

impl ScaleTime {
    /// Creates a new time scale.
    pub fn new(domain: Domain, range: PixelRange) -> Self {
        Self {
            inner: ScaleLinear::new(domain, range),
        }
    }

    /// Maps a timestamp into range space.
    pub fn map(&self, t: f64) -> f64 {
        self.inner.map(t)
    }

    /// Maps a pixel back into a timestamp.
    pub fn invert(&self, px: f64) -> Option<f64> {
        self.inner.invert(px)
    }
}

impl ScaleTimeSpec {
    /// Creates a time scale spec with a preset domain.
    pub fn new(domain: Domain) -> Self {
        Self {
            domain: Some(domain),
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn linear_scale_maps_and_inverts() {
        let s = ScaleLinear::new(Domain::new(0.0, 10.0), PixelRange::new(250.0, 50.0));
        assert!((s.map(0.0) - 250.0).abs() < 1e-9);
        assert!((s.map(10.0) - 50.0).abs() < 1e-9);
        assert!((s.invert(150.0).expect("invertible") - 5.0).abs() < 1e-9);
    }

    #[test]
    fn degenerate_domain_maps_to_range_start() {
        let s = ScaleLinear::new(Domain::new(3.0, 3.0), PixelRange::new(10.0, 20.0));
        assert_eq!(s.map(3.0), 10.0);
    }

    #[test]
    fn log_scale_maps_endpoints_to_range() {
        let s = ScaleLog::new(Domain::new(1.0, 100.0), PixelRange::new(0.0, 10.0));
        assert!((s.map(1.0) - 0.0).abs() < 1e-9);
        assert!((s.map(100.0) - 10.0).abs() < 1e-9);
        assert!((s.invert(5.0).expect("invertible") - 10.0).abs() < 1e-9);
    }

    #[derive(Debug)]
    struct Reversed {
        inner: ScaleLinear,
    }

    impl ScaleFn for Reversed {
        fn fitted(&self, domain: Domain, range: PixelRange) -> Arc<dyn ScaleFn> {
            Arc::new(Self {
                inner: ScaleLinear::new(domain, PixelRange::new(range.end, range.start)),
            })
        }

        fn map(&self, value: f64) -> f64 {
            self.inner.map(value)
        }

        fn invert(&self, pixel: f64) -> Option<f64> {
            self.inner.invert(pixel)
        }
    }

    #[test]
    fn custom_scales_are_fitted_without_mutating_the_shared_spec() {
        let shared = Reversed {
            inner: ScaleLinear::new(Domain::new(0.0, 1.0), PixelRange::new(0.0, 1.0)),
        };
        let spec = ScaleSpec::Custom(Arc::new(shared));
        let scale = spec.instantiate(Domain::new(0.0, 10.0), PixelRange::new(0.0, 100.0));
        assert!((scale.map(0.0) - 100.0).abs() < 1e-9);
        let ScaleSpec::Custom(original) = &spec else {
            unreachable!("spec was built as custom");
        };
        assert!((original.map(1.0) - 1.0).abs() < 1e-9);
    }
}
