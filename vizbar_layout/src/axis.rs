// Copyright 2025 the VizBar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis identifiers and per-axis pairs.

use core::fmt;

/// One of the two chart axes.
///
/// `X` is always the independent (category/position) axis in data space, even when the chart is
/// horizontal; orientation only changes which pixel dimension the axis is laid along.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The independent axis.
    X,
    /// The dependent (value) axis.
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::X => "x",
            Self::Y => "y",
        })
    }
}

/// A value held once per axis (the `{x, y}` shape used throughout the layout result).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AxisPair<T> {
    /// Value for the x axis.
    pub x: T,
    /// Value for the y axis.
    pub y: T,
}

impl<T> AxisPair<T> {
    /// Creates a pair from explicit per-axis values.
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Returns the value for `axis`.
    pub fn get(&self, axis: Axis) -> &T {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
        }
    }

    /// Applies `f` to both values.
    pub fn map<U>(self, mut f: impl FnMut(Axis, T) -> U) -> AxisPair<U> {
        AxisPair {
            x: f(Axis::X, self.x),
            y: f(Axis::Y, self.y),
        }
    }
}

impl<T: Clone> AxisPair<T> {
    /// Creates a pair holding the same value on both axes.
    pub fn splat(value: T) -> Self {
        Self {
            x: value.clone(),
            y: value,
        }
    }
}

impl From<f64> for AxisPair<f64> {
    fn from(value: f64) -> Self {
        Self::splat(value)
    }
}
