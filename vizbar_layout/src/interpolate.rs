// Copyright 2025 the VizBar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Linear blending between two layouts.
//!
//! The layout engine knows nothing about animation. A driver calls [`compute_layout`] for the
//! old and new configuration and then samples [`Interpolator::at`] on its own clock.
//!
//! [`compute_layout`]: crate::compute_layout

use crate::bar::BarGeometry;
use crate::domain::Domain;
use crate::layout::LayoutResult;
use crate::range::{Padding, PixelRange, Size};
use crate::style::BarStyle;
use crate::AxisPair;

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

/// Blends two layout results.
#[derive(Clone, Copy, Debug)]
pub struct Interpolator<'a> {
    from: &'a LayoutResult,
    to: &'a LayoutResult,
}

impl<'a> Interpolator<'a> {
    /// Creates an interpolator from `from` (at `t = 0`) to `to` (at `t = 1`).
    pub fn new(from: &'a LayoutResult, to: &'a LayoutResult) -> Self {
        Self { from, to }
    }

    /// Samples the blend at `t`, clamped to `[0, 1]`.
    ///
    /// Numeric geometry is interpolated linearly. Bars that only exist in the target grow out of
    /// their own baseline, labels that only exist in the target appear in place, and everything
    /// that is not numeric comes from the target.
    pub fn at(&self, t: f64) -> LayoutResult {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let (from, to) = (self.from, self.to);

        let domain = AxisPair::new(
            blend_domain(from.domain.x, to.domain.x, t),
            blend_domain(from.domain.y, to.domain.y, t),
        );
        let range = AxisPair::new(
            blend_range(from.range.x, to.range.x, t),
            blend_range(from.range.y, to.range.y, t),
        );
        let scale = AxisPair::new(
            to.scale.x.refit(domain.x, range.x),
            to.scale.y.refit(domain.y, range.y),
        );

        let bar_geometries = to
            .bar_geometries
            .iter()
            .enumerate()
            .map(|(s, row)| {
                row.iter()
                    .enumerate()
                    .map(|(i, target)| {
                        let start = geometry_at(from, s, i).unwrap_or(BarGeometry {
                            dependent1: target.dependent0,
                            ..*target
                        });
                        blend_geometry(&start, target, t)
                    })
                    .collect()
            })
            .collect();

        let bar_styles = to
            .bar_styles
            .iter()
            .enumerate()
            .map(|(s, row)| {
                row.iter()
                    .enumerate()
                    .map(|(i, target)| match style_at(from, s, i) {
                        Some(start) => blend_style(start, target, t),
                        None => *target,
                    })
                    .collect()
            })
            .collect();

        let label_placements = to
            .label_placements
            .iter()
            .map(|target| {
                let mut label = target.clone();
                if let Some(start) = from
                    .label_placements
                    .iter()
                    .find(|p| p.series == target.series && p.index == target.index)
                {
                    label.position = start.position.lerp(target.position, t);
                }
                label
            })
            .collect();

        LayoutResult {
            datasets: to.datasets.clone(),
            string_maps: to.string_maps.clone(),
            size: Size::new(
                lerp(from.size.width, to.size.width, t),
                lerp(from.size.height, to.size.height, t),
            ),
            padding: Padding {
                top: lerp(from.padding.top, to.padding.top, t),
                bottom: lerp(from.padding.bottom, to.padding.bottom, t),
                left: lerp(from.padding.left, to.padding.left, t),
                right: lerp(from.padding.right, to.padding.right, t),
            },
            domain,
            range,
            scale,
            bar_geometries,
            bar_styles,
            label_placements,
            horizontal: to.horizontal,
            stacked: to.stacked,
        }
    }
}

fn geometry_at(layout: &LayoutResult, series: usize, index: usize) -> Option<BarGeometry> {
    layout.bar_geometries.get(series)?.get(index).copied()
}

fn style_at(layout: &LayoutResult, series: usize, index: usize) -> Option<&BarStyle> {
    layout.bar_styles.get(series)?.get(index)
}

fn blend_domain(a: Domain, b: Domain, t: f64) -> Domain {
    Domain {
        min: lerp(a.min, b.min, t),
        max: lerp(a.max, b.max, t),
    }
}

fn blend_range(a: PixelRange, b: PixelRange, t: f64) -> PixelRange {
    PixelRange::new(lerp(a.start, b.start, t), lerp(a.end, b.end, t))
}

fn blend_geometry(a: &BarGeometry, b: &BarGeometry, t: f64) -> BarGeometry {
    BarGeometry {
        independent: lerp(a.independent, b.independent, t),
        dependent0: lerp(a.dependent0, b.dependent0, t),
        dependent1: lerp(a.dependent1, b.dependent1, t),
    }
}

#[allow(clippy::cast_possible_truncation, reason = "blend of two f32 values")]
fn blend_style(a: &BarStyle, b: &BarStyle, t: f64) -> BarStyle {
    BarStyle {
        fill: b.fill,
        opacity: lerp(f64::from(a.opacity), f64::from(b.opacity), t) as f32,
        width: lerp(a.width, b.width, t),
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec::Vec;

    use super::*;
    use crate::{ChartData, Datum, Defaults, LayoutConfig, compute_layout};

    fn layout(values: &[f64]) -> LayoutResult {
        let data: Vec<Datum> = values.iter().copied().map(Datum::value).collect();
        let config = LayoutConfig::new()
            .with_data(ChartData::Points(data))
            .with_axis_domain(crate::Axis::Y, (0.0, 10.0))
            .with_axis_domain(crate::Axis::X, (0.0, 4.0));
        compute_layout(&config, &Defaults::default()).expect("valid config")
    }

    #[test]
    fn endpoints_reproduce_the_inputs() {
        let a = layout(&[2.0, 4.0]);
        let b = layout(&[6.0, 8.0]);
        let blend = Interpolator::new(&a, &b);
        assert_eq!(blend.at(0.0).bar_geometries, a.bar_geometries);
        assert_eq!(blend.at(1.0).bar_geometries, b.bar_geometries);
        assert_eq!(blend.at(7.0).bar_geometries, b.bar_geometries);
    }

    #[test]
    fn midpoint_blends_bar_ends() {
        let a = layout(&[2.0]);
        let b = layout(&[6.0]);
        let mid = Interpolator::new(&a, &b).at(0.5);
        let expected = (a.bar_geometries[0][0].dependent1 + b.bar_geometries[0][0].dependent1) / 2.0;
        assert!((mid.bar_geometries[0][0].dependent1 - expected).abs() < 1e-9);
    }

    #[test]
    fn new_bars_grow_from_their_baseline() {
        let a = layout(&[2.0]);
        let b = layout(&[2.0, 8.0]);
        let start = Interpolator::new(&a, &b).at(0.0);
        let grown = start.bar_geometries[0][1];
        assert_eq!(grown.dependent0, grown.dependent1);
        assert_eq!(grown.independent, b.bar_geometries[0][1].independent);
        assert_eq!(start.bar_geometries.len(), 1);
        assert_eq!(start.bar_geometries[0].len(), 2);
    }
}
