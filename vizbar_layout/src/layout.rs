// Copyright 2025 the VizBar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The layout pipeline.
//!
//! `compute_layout` runs each stage in order, feeding every stage only the outputs of earlier
//! ones:
//! - string maps, then consolidated series,
//! - pixel ranges (domain padding is expressed in pixels, so ranges come before domains),
//! - stack offsets when stacked, then domains, then scales,
//! - bar geometry and styles, then label placements.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Rect;

use crate::bar::{BarContext, BarGeometry, position_bars};
use crate::config::{Defaults, LayoutConfig};
use crate::consolidate::{ConsolidatedSeries, consolidate};
use crate::domain::{Domain, DomainRequest, compute_domain};
use crate::error::LayoutError;
use crate::label::{LabelContext, LabelPlacement, place_labels};
use crate::range::{Padding, PixelRange, Size, compute_ranges};
use crate::scale::Scale;
use crate::stack::stack;
use crate::string_map::{StringMap, build_string_map};
use crate::style::BarStyle;
use crate::{Axis, AxisPair};

/// Everything a renderer needs to draw one bar chart.
#[derive(Clone, Debug)]
pub struct LayoutResult {
    /// Consolidated series.
    pub datasets: Vec<ConsolidatedSeries>,
    /// String maps per axis, `None` for numeric axes.
    pub string_maps: AxisPair<Option<StringMap>>,
    /// Container size.
    pub size: Size,
    /// Container padding.
    pub padding: Padding,
    /// Resolved domains.
    pub domain: AxisPair<Domain>,
    /// Pixel ranges.
    pub range: AxisPair<PixelRange>,
    /// Fitted scales.
    pub scale: AxisPair<Scale>,
    /// Bar geometry, `[series][point]`.
    pub bar_geometries: Vec<Vec<BarGeometry>>,
    /// Bar styles, parallel to `bar_geometries`.
    pub bar_styles: Vec<Vec<BarStyle>>,
    /// Category labels.
    pub label_placements: Vec<LabelPlacement>,
    /// Whether bars extend horizontally.
    pub horizontal: bool,
    /// Whether series were stacked.
    pub stacked: bool,
}

impl LayoutResult {
    /// Iterates over `(series, index, rect, style)` for every bar.
    pub fn bar_rects(&self) -> impl Iterator<Item = (usize, usize, Rect, &BarStyle)> + '_ {
        self.bar_geometries
            .iter()
            .zip(&self.bar_styles)
            .enumerate()
            .flat_map(move |(s, (row, styles))| {
                row.iter().zip(styles).enumerate().map(move |(i, (g, style))| {
                    (s, i, g.to_rect(style.width, self.horizontal), style)
                })
            })
    }
}

/// Computes the full layout of a bar chart.
///
/// Fields left unset in `config` are taken from `defaults`. The computation is pure: neither
/// input is modified, and custom scales are fitted into fresh instances.
pub fn compute_layout(
    config: &LayoutConfig,
    defaults: &Defaults,
) -> Result<LayoutResult, LayoutError> {
    let size = config.size(defaults);
    let padding = config.padding.unwrap_or(defaults.padding);
    let style = config.style.as_ref().unwrap_or(&defaults.bar_style);
    let label_style = config.label_style.unwrap_or(defaults.label_style);

    let series = config.data.as_ref().unwrap_or(&defaults.data).series();
    let string_maps = AxisPair::new(
        build_string_map(Axis::X, &config.categories, &series),
        build_string_map(Axis::Y, &config.categories, &series),
    );
    let datasets = consolidate(
        &series,
        config.data_attributes.as_ref(),
        &config.categories,
        &string_maps,
        &config.color_scale,
    )?;

    let range = compute_ranges(size, padding, config.horizontal);
    let stacked = config.stacked.then(|| stack(&datasets, config.stack_key));

    let resolve = |axis: Axis| {
        compute_domain(&DomainRequest {
            axis,
            explicit: *config.domain.get(axis),
            datasets: &datasets,
            categories: &config.categories,
            stack: stacked.as_ref().filter(|_| datasets.len() > 1),
            scale: config.scale.get(axis),
            padding: *config.domain_padding.get(axis),
            range: *range.get(axis),
            zero_crossing: config.zero_crossing,
        })
    };
    let domain = AxisPair::new(resolve(Axis::X)?, resolve(Axis::Y)?);

    let scale = AxisPair::new(
        config.scale.x.instantiate(domain.x, range.x),
        config.scale.y.instantiate(domain.y, range.y),
    );

    let (bar_geometries, bar_styles) = position_bars(&BarContext {
        datasets: &datasets,
        categories: &config.categories,
        stack: stacked.as_ref(),
        domain: &domain,
        range: &range,
        scale: &scale,
        style,
    });

    let labels = LabelContext::new(
        &datasets,
        &config.labels,
        &config.label_components,
        string_maps.x.as_ref(),
        label_style,
        config.horizontal,
    );
    let label_placements = place_labels(&labels, &datasets, &bar_geometries, config.stacked);

    tracing::debug!(
        series = datasets.len(),
        bars = bar_geometries.iter().map(Vec::len).sum::<usize>(),
        labels = label_placements.len(),
        stacked = config.stacked,
        horizontal = config.horizontal,
        "computed bar layout"
    );

    Ok(LayoutResult {
        datasets,
        string_maps,
        size,
        padding,
        domain,
        range,
        scale,
        bar_geometries,
        bar_styles,
        label_placements,
        horizontal: config.horizontal,
        stacked: config.stacked,
    })
}
