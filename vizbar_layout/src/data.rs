// Copyright 2025 the VizBar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raw input data: values, data points, series attributes and category bands.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use peniko::Color;

/// A raw coordinate value as supplied by the caller.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// A plain number.
    Number(f64),
    /// A categorical string, translated to an ordinal through a string map.
    Text(String),
    /// A timestamp in milliseconds since the Unix epoch.
    Date(f64),
}

impl Value {
    /// Returns the numeric value for numbers and dates.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(v) | Self::Date(v) => Some(*v),
            Self::Text(_) => None,
        }
    }

    /// Returns the string for text values.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(String::from(value))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// A single input data point.
///
/// `x` is optional: when absent the point takes its 1-based position within its series.
/// `y` is required; a point without one is rejected during consolidation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Datum {
    /// Independent coordinate.
    pub x: Option<Value>,
    /// Dependent coordinate.
    pub y: Option<Value>,
    /// Optional per-point label text.
    pub label: Option<String>,
    /// Per-point fill override.
    pub fill: Option<Color>,
    /// Per-point opacity override.
    pub opacity: Option<f32>,
}

impl Datum {
    /// Creates an `{x, y}` point.
    pub fn new(x: impl Into<Value>, y: impl Into<Value>) -> Self {
        Self {
            x: Some(x.into()),
            y: Some(y.into()),
            ..Self::default()
        }
    }

    /// Creates a plain-value point (only `y` is set).
    pub fn value(y: impl Into<Value>) -> Self {
        Self {
            y: Some(y.into()),
            ..Self::default()
        }
    }

    /// Sets the label text.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets a per-point fill.
    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = Some(fill);
        self
    }

    /// Sets a per-point opacity.
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity);
        self
    }
}

/// Chart input: either one flat series or several.
#[derive(Clone, Debug, PartialEq)]
pub enum ChartData {
    /// A single series.
    Points(Vec<Datum>),
    /// One entry per series.
    Series(Vec<Vec<Datum>>),
}

impl ChartData {
    /// Returns the data as a list of series, wrapping a flat list as one series.
    pub fn series(&self) -> Vec<&[Datum]> {
        match self {
            Self::Points(points) => alloc::vec![points.as_slice()],
            Self::Series(series) => series.iter().map(Vec::as_slice).collect(),
        }
    }
}

impl From<Vec<Datum>> for ChartData {
    fn from(value: Vec<Datum>) -> Self {
        Self::Points(value)
    }
}

impl From<Vec<Vec<Datum>>> for ChartData {
    fn from(value: Vec<Vec<Datum>>) -> Self {
        Self::Series(value)
    }
}

/// Caller-supplied attributes for one series.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SeriesAttrs {
    /// Series name (defaults to `data-<index>`).
    pub name: Option<String>,
    /// Series fill (defaults to the color scale entry for the series index).
    pub fill: Option<Color>,
    /// Series opacity.
    pub opacity: Option<f32>,
}

impl SeriesAttrs {
    /// Creates attributes with only a fill.
    pub fn fill(fill: Color) -> Self {
        Self {
            fill: Some(fill),
            ..Self::default()
        }
    }

    /// Sets the series name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the series opacity.
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity);
        self
    }
}

/// Series attributes, either shared by every series or given per series index.
#[derive(Clone, Debug, PartialEq)]
pub enum DataAttributes {
    /// One attribute object for all series.
    One(SeriesAttrs),
    /// Attributes by series index. Indices past the end reuse the last entry.
    Many(Vec<SeriesAttrs>),
}

impl DataAttributes {
    /// Returns the attributes for a series, if any were supplied.
    pub fn for_series(&self, index: usize) -> Option<&SeriesAttrs> {
        match self {
            Self::One(attrs) => Some(attrs),
            Self::Many(list) => list.get(index).or_else(|| list.last()),
        }
    }
}

/// A discrete position along the independent axis.
#[derive(Clone, Debug, PartialEq)]
pub enum CategoryBand {
    /// A bare category value.
    Value(Value),
    /// A numeric band; points with `min <= x <= max` belong to it.
    Range(f64, f64),
}

impl CategoryBand {
    /// Returns `true` for numeric bands and numeric/date values.
    pub fn is_numeric(&self) -> bool {
        match self {
            Self::Value(v) => v.as_f64().is_some(),
            Self::Range(..) => true,
        }
    }

    /// Returns the band bounds, ordered, for numeric entries.
    pub fn bounds(&self) -> Option<(f64, f64)> {
        match self {
            Self::Value(v) => v.as_f64().map(|v| (v, v)),
            Self::Range(a, b) => Some((a.min(*b), a.max(*b))),
        }
    }
}

impl From<(f64, f64)> for CategoryBand {
    fn from((min, max): (f64, f64)) -> Self {
        Self::Range(min, max)
    }
}

impl From<&str> for CategoryBand {
    fn from(value: &str) -> Self {
        Self::Value(Value::from(value))
    }
}

impl From<f64> for CategoryBand {
    fn from(value: f64) -> Self {
        Self::Value(Value::Number(value))
    }
}
