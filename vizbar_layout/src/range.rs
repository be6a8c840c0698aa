// Copyright 2025 the VizBar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pixel ranges derived from the container and its padding box.

use crate::AxisPair;

/// A width/height pair for the chart container.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Size {
    /// Creates a size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Padding between the container edge and the plot, per side.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Padding {
    /// Top inset in pixels.
    pub top: f64,
    /// Bottom inset in pixels.
    pub bottom: f64,
    /// Left inset in pixels.
    pub left: f64,
    /// Right inset in pixels.
    pub right: f64,
}

impl Padding {
    /// The same inset on every side.
    pub const fn uniform(value: f64) -> Self {
        Self {
            top: value,
            bottom: value,
            left: value,
            right: value,
        }
    }
}

impl From<f64> for Padding {
    fn from(value: f64) -> Self {
        Self::uniform(value)
    }
}

/// A span of pixel coordinates, in mapping order.
///
/// `start` is where the domain minimum lands, so `start > end` for inverted axes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PixelRange {
    /// Pixel for the domain minimum.
    pub start: f64,
    /// Pixel for the domain maximum.
    pub end: f64,
}

impl PixelRange {
    /// Creates a range.
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Smaller endpoint.
    pub fn min(&self) -> f64 {
        self.start.min(self.end)
    }

    /// Larger endpoint.
    pub fn max(&self) -> f64 {
        self.start.max(self.end)
    }

    /// Absolute length in pixels.
    pub fn extent(&self) -> f64 {
        (self.end - self.start).abs()
    }

    /// Returns the endpoints as a `(start, end)` tuple.
    pub fn as_tuple(&self) -> (f64, f64) {
        (self.start, self.end)
    }
}

/// Computes the pixel range of both axes.
///
/// The axis laid along the container height is inverted because pixel y grows downward. For a
/// vertical chart that is the value axis; for a horizontal chart it is the independent axis, and
/// the value axis runs left to right along the width.
pub fn compute_ranges(size: Size, padding: Padding, horizontal: bool) -> AxisPair<PixelRange> {
    let along_width = PixelRange::new(padding.left, size.width - padding.right);
    let along_height = PixelRange::new(size.height - padding.bottom, padding.top);
    if horizontal {
        AxisPair::new(along_height, along_width)
    } else {
        AxisPair::new(along_width, along_height)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn vertical_chart_inverts_the_value_axis() {
        let ranges = compute_ranges(Size::new(450.0, 300.0), Padding::uniform(50.0), false);
        assert_eq!(ranges.x, PixelRange::new(50.0, 400.0));
        assert_eq!(ranges.y, PixelRange::new(250.0, 50.0));
    }

    #[test]
    fn horizontal_chart_swaps_axes() {
        let padding = Padding {
            top: 10.0,
            bottom: 20.0,
            left: 30.0,
            right: 40.0,
        };
        let ranges = compute_ranges(Size::new(400.0, 300.0), padding, true);
        assert_eq!(ranges.x, PixelRange::new(280.0, 10.0));
        assert_eq!(ranges.y, PixelRange::new(30.0, 360.0));
        assert_eq!(ranges.y.extent(), 330.0);
    }
}
