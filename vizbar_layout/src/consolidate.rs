// Copyright 2025 the VizBar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Normalizes raw chart data into uniform per-series records.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use peniko::Color;

use crate::data::{CategoryBand, DataAttributes, Datum, Value};
use crate::error::LayoutError;
use crate::palette::ColorScale;
use crate::string_map::StringMap;
use crate::AxisPair;

/// A data point after string translation and category assignment.
#[derive(Clone, Debug, PartialEq)]
pub struct BarDatum {
    /// Numeric independent coordinate (string ordinal for categorical data).
    pub x: f64,
    /// Numeric dependent coordinate.
    pub y: f64,
    /// Original x string, if the input was categorical.
    pub x_name: Option<String>,
    /// Original y string, if the input was categorical.
    pub y_name: Option<String>,
    /// Index of the category band containing this point.
    pub category: Option<usize>,
    /// Per-point label text.
    pub label: Option<String>,
    /// Per-point fill override.
    pub fill: Option<Color>,
    /// Per-point opacity override.
    pub opacity: Option<f32>,
}

/// Series attributes after defaults have been applied.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedAttrs {
    /// Series name.
    pub name: String,
    /// Series fill.
    pub fill: Color,
    /// Series opacity, if one was supplied.
    pub opacity: Option<f32>,
}

/// One consolidated series.
#[derive(Clone, Debug, PartialEq)]
pub struct ConsolidatedSeries {
    /// Points in input order.
    pub data: Vec<BarDatum>,
    /// Resolved attributes.
    pub attrs: ResolvedAttrs,
}

/// Consolidates raw series into [`ConsolidatedSeries`].
///
/// Every string coordinate is translated through the string map of its axis. A point without a
/// `y` value is rejected; a point without an `x` value takes its 1-based position.
pub fn consolidate(
    series: &[&[Datum]],
    attributes: Option<&DataAttributes>,
    categories: &[CategoryBand],
    string_maps: &AxisPair<Option<StringMap>>,
    color_scale: &ColorScale,
) -> Result<Vec<ConsolidatedSeries>, LayoutError> {
    if let Some(DataAttributes::Many(list)) = attributes
        && !list.is_empty()
        && list.len() != series.len()
    {
        tracing::warn!(
            attributes = list.len(),
            series = series.len(),
            "data attribute count does not match series count; reusing the last entry"
        );
    }

    series
        .iter()
        .enumerate()
        .map(|(s, points)| {
            let supplied = attributes.and_then(|a| a.for_series(s));
            let attrs = ResolvedAttrs {
                name: supplied
                    .and_then(|a| a.name.clone())
                    .unwrap_or_else(|| format!("data-{s}")),
                fill: supplied
                    .and_then(|a| a.fill)
                    .unwrap_or_else(|| color_scale.color(s)),
                opacity: supplied.and_then(|a| a.opacity),
            };
            let data = points
                .iter()
                .enumerate()
                .map(|(i, datum)| consolidate_datum(datum, s, i, categories, string_maps))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(ConsolidatedSeries { data, attrs })
        })
        .collect()
}

fn consolidate_datum(
    datum: &Datum,
    series: usize,
    index: usize,
    categories: &[CategoryBand],
    string_maps: &AxisPair<Option<StringMap>>,
) -> Result<BarDatum, LayoutError> {
    let Some(y_raw) = datum.y.as_ref() else {
        return Err(LayoutError::data_shape(series, index, "missing y value"));
    };
    let (x, x_name) = match datum.x.as_ref() {
        Some(v) => translate(v, string_maps.x.as_ref(), series, index)?,
        None => ((index + 1) as f64, None),
    };
    let (y, y_name) = translate(y_raw, string_maps.y.as_ref(), series, index)?;

    let category = categories
        .iter()
        .position(|band| band_contains(band, datum.x.as_ref(), x));

    Ok(BarDatum {
        x,
        y,
        x_name,
        y_name,
        category,
        label: datum.label.clone(),
        fill: datum.fill,
        opacity: datum.opacity,
    })
}

fn translate(
    value: &Value,
    map: Option<&StringMap>,
    series: usize,
    index: usize,
) -> Result<(f64, Option<String>), LayoutError> {
    match value {
        Value::Number(v) | Value::Date(v) => {
            if v.is_finite() {
                Ok((*v, None))
            } else {
                Err(LayoutError::data_shape(
                    series,
                    index,
                    "coordinate is not finite",
                ))
            }
        }
        Value::Text(s) => map
            .and_then(|m| m.ordinal(s))
            .map(|ordinal| (ordinal as f64, Some(s.clone())))
            .ok_or_else(|| {
                LayoutError::data_shape(series, index, format!("unknown category {s:?}"))
            }),
    }
}

fn band_contains(band: &CategoryBand, raw: Option<&Value>, x: f64) -> bool {
    match (band, raw) {
        (CategoryBand::Range(..), _) => band
            .bounds()
            .is_some_and(|(min, max)| x >= min && x <= max),
        (CategoryBand::Value(Value::Text(c)), Some(Value::Text(s))) => c == s,
        (CategoryBand::Value(Value::Text(_)), _) => false,
        (CategoryBand::Value(v), _) => v.as_f64() == Some(x),
    }
}
