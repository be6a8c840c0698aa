// Copyright 2025 the VizBar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bar geometry.
//!
//! Every bar is reduced to an `(independent, dependent0, dependent1)` triple in pixels. The
//! triple means the same thing for vertical and horizontal charts; only the rectangle a renderer
//! builds from it differs.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Rect;

use crate::consolidate::{BarDatum, ConsolidatedSeries};
use crate::data::CategoryBand;
use crate::domain::Domain;
use crate::range::PixelRange;
use crate::scale::Scale;
use crate::stack::Stack;
use crate::style::{BarStyle, BarStyleSpec};
use crate::{Axis, AxisPair};

/// The pixel span of one bar.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BarGeometry {
    /// Center of the bar along the independent axis.
    pub independent: f64,
    /// Baseline along the dependent axis.
    pub dependent0: f64,
    /// Value end along the dependent axis.
    pub dependent1: f64,
}

impl BarGeometry {
    /// Signed pixel length from baseline to value end.
    pub fn length(&self) -> f64 {
        self.dependent1 - self.dependent0
    }

    /// Returns the rectangle covered by a bar `width` pixels thick.
    ///
    /// Vertical bars span `dependent0..dependent1` along y; horizontal bars along x.
    pub fn to_rect(&self, width: f64, horizontal: bool) -> Rect {
        let half = width / 2.0;
        let (i0, i1) = (self.independent - half, self.independent + half);
        if horizontal {
            Rect::new(self.dependent0, i0, self.dependent1, i1).abs()
        } else {
            Rect::new(i0, self.dependent0, i1, self.dependent1).abs()
        }
    }
}

/// Everything bar placement reads, all already resolved by earlier stages.
#[derive(Clone, Copy, Debug)]
pub struct BarContext<'a> {
    /// Consolidated series.
    pub datasets: &'a [ConsolidatedSeries],
    /// Category bands.
    pub categories: &'a [CategoryBand],
    /// Stack offsets; `Some` exactly when the chart is stacked.
    pub stack: Option<&'a Stack>,
    /// Domains of both axes.
    pub domain: &'a AxisPair<Domain>,
    /// Pixel ranges of both axes.
    pub range: &'a AxisPair<PixelRange>,
    /// Scales of both axes.
    pub scale: &'a AxisPair<Scale>,
    /// Base bar style.
    pub style: &'a BarStyleSpec,
}

impl BarContext<'_> {
    /// Converts a pixel length along `axis` into data units.
    pub fn pixels_to_value(&self, pixels: f64, axis: Axis) -> f64 {
        if pixels == 0.0 {
            return 0.0;
        }
        let range = self.range.get(axis).extent();
        if range == 0.0 {
            return 0.0;
        }
        self.domain.get(axis).extent() / range * pixels
    }

    /// Baseline of unstacked bars: zero, or the domain minimum when that is positive.
    fn baseline(&self) -> f64 {
        self.domain.y.min.max(0.0)
    }

    /// Independent coordinate in data units after category centering and group offset.
    pub fn adjusted_x(&self, series: usize, datum: &BarDatum, bar_width: f64) -> f64 {
        let base = match datum.category.and_then(|c| self.categories.get(c)) {
            Some(band @ CategoryBand::Range(..)) => band
                .bounds()
                .map_or(datum.x, |(min, max)| (min + max) / 2.0),
            _ => datum.x,
        };
        if self.stack.is_some() {
            return base;
        }
        let count = self.datasets.len().max(1);
        let center = (count - 1) as f64 / 2.0;
        let step = self.pixels_to_value(bar_width, Axis::X)
            + self.pixels_to_value(self.style.padding, Axis::X);
        base + (series as f64 - center) * step
    }

    /// Computes the data-space triple `(x, y0, y1)` of one bar.
    pub fn bar_values(
        &self,
        series: usize,
        index: usize,
        datum: &BarDatum,
        bar_width: f64,
    ) -> (f64, f64, f64) {
        let x = self.adjusted_x(series, datum, bar_width);
        match self.stack {
            Some(stack) => {
                let y0 = stack
                    .offsets
                    .get(series)
                    .and_then(|row| row.get(index))
                    .copied()
                    .unwrap_or(0.0);
                (x, y0, y0 + datum.y)
            }
            None => (x, self.baseline(), datum.y),
        }
    }

    /// Computes the pixel geometry of one bar.
    pub fn bar_position(
        &self,
        series: usize,
        index: usize,
        datum: &BarDatum,
        bar_width: f64,
    ) -> BarGeometry {
        let (x, y0, y1) = self.bar_values(series, index, datum, bar_width);
        BarGeometry {
            independent: self.scale.x.map(x),
            dependent0: self.scale.y.map(y0),
            dependent1: self.scale.y.map(y1),
        }
    }
}

/// Resolves styles and geometry for every bar, indexed `[series][point]`.
pub fn position_bars(ctx: &BarContext<'_>) -> (Vec<Vec<BarGeometry>>, Vec<Vec<BarStyle>>) {
    let mut geometries = Vec::with_capacity(ctx.datasets.len());
    let mut styles = Vec::with_capacity(ctx.datasets.len());
    for (s, series) in ctx.datasets.iter().enumerate() {
        let mut row_geometry = Vec::with_capacity(series.data.len());
        let mut row_style = Vec::with_capacity(series.data.len());
        for (i, datum) in series.data.iter().enumerate() {
            let style = ctx.style.resolve(datum, &series.attrs);
            row_geometry.push(ctx.bar_position(s, i, datum, style.width));
            row_style.push(style);
        }
        geometries.push(row_geometry);
        styles.push(row_style);
    }
    (geometries, styles)
}
