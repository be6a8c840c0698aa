// Copyright 2025 the VizBar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The span of data values each axis must cover.

extern crate alloc;

use alloc::string::String;

use crate::consolidate::ConsolidatedSeries;
use crate::data::CategoryBand;
use crate::error::LayoutError;
use crate::range::PixelRange;
use crate::scale::ScaleSpec;
use crate::stack::Stack;
use crate::Axis;

/// A closed interval of data values with `min <= max`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Domain {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
}

impl Domain {
    /// Creates a domain from two bounds in either order.
    pub fn new(a: f64, b: f64) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// `max - min`.
    pub fn extent(&self) -> f64 {
        self.max - self.min
    }

    /// Returns `true` if both bounds are finite.
    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }

    /// Returns `true` if `value` lies within the bounds.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    fn include(self, value: f64) -> Self {
        Self {
            min: self.min.min(value),
            max: self.max.max(value),
        }
    }
}

impl Default for Domain {
    fn default() -> Self {
        Self { min: 0.0, max: 1.0 }
    }
}

impl From<(f64, f64)> for Domain {
    fn from((a, b): (f64, f64)) -> Self {
        Self::new(a, b)
    }
}

/// Whether domain padding may move a bound across zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ZeroCrossing {
    /// A bound that did not cross zero before padding stops at zero.
    #[default]
    Clamp,
    /// Padding extends both bounds unconditionally.
    Allow,
}

/// Inputs for resolving one axis' domain.
#[derive(Clone, Copy, Debug)]
pub struct DomainRequest<'a> {
    /// The axis being resolved.
    pub axis: Axis,
    /// Caller-supplied domain; used as-is when present.
    pub explicit: Option<Domain>,
    /// Consolidated series.
    pub datasets: &'a [ConsolidatedSeries],
    /// Category bands (only consulted for the x axis).
    pub categories: &'a [CategoryBand],
    /// Stack totals, present when the chart stacks more than one series.
    pub stack: Option<&'a Stack>,
    /// Scale spec of the axis, consulted for a preset domain when there is no data.
    pub scale: &'a ScaleSpec,
    /// Padding in pixels added at both ends.
    pub padding: f64,
    /// Pixel range of the axis, used to convert `padding` into data units.
    pub range: PixelRange,
    /// Zero-crossing policy for padding.
    pub zero_crossing: ZeroCrossing,
}

/// Resolves the domain of one axis.
///
/// Precedence: explicit domain, numeric category bands (x only), data (including cumulative
/// stack totals on y), then the scale's preset domain. Padding is applied to every source except
/// the explicit domain.
pub fn compute_domain(req: &DomainRequest<'_>) -> Result<Domain, LayoutError> {
    if let Some(explicit) = req.explicit {
        if !explicit.is_finite() {
            return Err(LayoutError::Configuration {
                axis: req.axis,
                reason: String::from("explicit domain is not finite"),
            });
        }
        return Ok(explicit);
    }

    let base = match category_domain(req).or_else(|| data_domain(req)) {
        Some(domain) => domain,
        None => fallback_domain(req.axis, req.scale)?,
    };
    let padded = pad_domain(base, req.padding, req.range, req.zero_crossing);
    tracing::trace!(axis = %req.axis, min = padded.min, max = padded.max, "resolved domain");
    Ok(padded)
}

fn category_domain(req: &DomainRequest<'_>) -> Option<Domain> {
    if req.axis != Axis::X || req.categories.is_empty() {
        return None;
    }
    let mut domain: Option<Domain> = None;
    for band in req.categories {
        let (lo, hi) = band.bounds()?;
        domain = Some(match domain {
            None => Domain::new(lo, hi),
            Some(d) => d.include(lo).include(hi),
        });
    }
    domain
}

fn data_domain(req: &DomainRequest<'_>) -> Option<Domain> {
    let mut values = req.datasets.iter().flat_map(|s| s.data.iter()).map(|d| match req.axis {
        Axis::X => d.x,
        Axis::Y => d.y,
    });
    let first = values.next()?;
    let mut domain = values.fold(Domain::new(first, first), Domain::include);
    if req.axis == Axis::Y
        && let Some(stack) = req.stack
    {
        domain = domain.include(stack.min).include(stack.max);
    }
    Some(domain)
}

fn fallback_domain(axis: Axis, scale: &ScaleSpec) -> Result<Domain, LayoutError> {
    match scale.preset_domain() {
        Some(d) if d.is_finite() && d.extent() > 0.0 => Ok(d),
        Some(_) => {
            tracing::warn!(
                axis = %axis,
                "scale has a degenerate domain and there is no data; falling back to [0, 1]"
            );
            Ok(Domain::default())
        }
        None => Err(LayoutError::Configuration {
            axis,
            reason: String::from("no data, no explicit domain and no scale domain"),
        }),
    }
}

/// Extends `domain` by `padding` pixels at both ends.
///
/// Pixels are converted into data units with the domain/range ratio. Under
/// [`ZeroCrossing::Clamp`], a bound that was on one side of zero stays on that side.
pub fn pad_domain(
    domain: Domain,
    padding: f64,
    range: PixelRange,
    zero_crossing: ZeroCrossing,
) -> Domain {
    let extent = range.extent();
    if !(padding > 0.0 && padding.is_finite()) || extent == 0.0 {
        return domain;
    }
    let pad = domain.extent() / extent * padding;
    let mut min = domain.min - pad;
    let mut max = domain.max + pad;
    if zero_crossing == ZeroCrossing::Clamp {
        if domain.min >= 0.0 && min < 0.0 {
            min = 0.0;
        }
        if domain.max <= 0.0 && max > 0.0 {
            max = 0.0;
        }
    }
    Domain { min, max }
}
