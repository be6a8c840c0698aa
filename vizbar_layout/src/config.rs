// Copyright 2025 the VizBar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout inputs: the per-chart [`LayoutConfig`] and the call-time [`Defaults`].

extern crate alloc;

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::data::{CategoryBand, ChartData, DataAttributes, Datum};
use crate::domain::{Domain, ZeroCrossing};
use crate::label::LabelRenderer;
use crate::palette::ColorScale;
use crate::range::{Padding, Size};
use crate::scale::ScaleSpec;
use crate::stack::StackKey;
use crate::style::{BarStyleSpec, LabelStyle};
use crate::{Axis, AxisPair};

/// Fallback values used where a [`LayoutConfig`] leaves a field unset.
#[derive(Clone, Debug)]
pub struct Defaults {
    /// Container size.
    pub size: Size,
    /// Container padding.
    pub padding: Padding,
    /// Data laid out when the config has none.
    pub data: ChartData,
    /// Bar style.
    pub bar_style: BarStyleSpec,
    /// Label style.
    pub label_style: LabelStyle,
}

impl Default for Defaults {
    /// 800 × 600 with 50 px padding, plotting `[10, 30, 50, 80, 110]` as plain values.
    fn default() -> Self {
        Self {
            size: Size::new(800.0, 600.0),
            padding: Padding::uniform(50.0),
            data: ChartData::Points(
                [10.0, 30.0, 50.0, 80.0, 110.0]
                    .into_iter()
                    .map(Datum::value)
                    .collect(),
            ),
            bar_style: BarStyleSpec::default(),
            label_style: LabelStyle::default(),
        }
    }
}

/// Configuration of a single bar chart.
#[derive(Clone, Debug, Default)]
pub struct LayoutConfig {
    /// Chart data; [`Defaults::data`] when `None`.
    pub data: Option<ChartData>,
    /// Series attributes.
    pub data_attributes: Option<DataAttributes>,
    /// Category bands along the independent axis.
    pub categories: Vec<CategoryBand>,
    /// Palette for series without an explicit fill.
    pub color_scale: ColorScale,
    /// Explicit per-axis domains.
    pub domain: AxisPair<Option<Domain>>,
    /// Domain padding in pixels, per axis.
    pub domain_padding: AxisPair<f64>,
    /// Container width; [`Defaults::size`] when `None`.
    pub width: Option<f64>,
    /// Container height; [`Defaults::size`] when `None`.
    pub height: Option<f64>,
    /// Container padding; [`Defaults::padding`] when `None`.
    pub padding: Option<Padding>,
    /// Per-axis scale specs.
    pub scale: AxisPair<ScaleSpec>,
    /// Stack series instead of grouping them.
    pub stacked: bool,
    /// Lay the independent axis vertically.
    pub horizontal: bool,
    /// Category label text, by label index.
    pub labels: Vec<String>,
    /// Custom label renderers, by label index.
    pub label_components: Vec<Arc<dyn LabelRenderer>>,
    /// Bar style; [`Defaults::bar_style`] when `None`.
    pub style: Option<BarStyleSpec>,
    /// Label style; [`Defaults::label_style`] when `None`.
    pub label_style: Option<LabelStyle>,
    /// Whether domain padding may cross zero.
    pub zero_crossing: ZeroCrossing,
    /// How stacked points are matched across series.
    pub stack_key: StackKey,
}

impl LayoutConfig {
    /// Creates an empty config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the chart data.
    pub fn with_data(mut self, data: impl Into<ChartData>) -> Self {
        self.data = Some(data.into());
        self
    }

    /// Sets the series attributes.
    pub fn with_data_attributes(mut self, attributes: DataAttributes) -> Self {
        self.data_attributes = Some(attributes);
        self
    }

    /// Sets the category bands.
    pub fn with_categories<I, C>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<CategoryBand>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the color scale.
    pub fn with_color_scale(mut self, color_scale: ColorScale) -> Self {
        self.color_scale = color_scale;
        self
    }

    /// Sets the same explicit domain on both axes.
    pub fn with_domain(mut self, domain: impl Into<Domain>) -> Self {
        self.domain = AxisPair::splat(Some(domain.into()));
        self
    }

    /// Sets the explicit domain of one axis.
    pub fn with_axis_domain(mut self, axis: Axis, domain: impl Into<Domain>) -> Self {
        let domain = Some(domain.into());
        match axis {
            Axis::X => self.domain.x = domain,
            Axis::Y => self.domain.y = domain,
        }
        self
    }

    /// Sets the domain padding, either one value or an `AxisPair`.
    pub fn with_domain_padding(mut self, padding: impl Into<AxisPair<f64>>) -> Self {
        self.domain_padding = padding.into();
        self
    }

    /// Sets the container size.
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Sets the container padding, either one value or per side.
    pub fn with_padding(mut self, padding: impl Into<Padding>) -> Self {
        self.padding = Some(padding.into());
        self
    }

    /// Uses the same scale spec on both axes.
    pub fn with_scale(mut self, scale: impl Into<ScaleSpec>) -> Self {
        self.scale = AxisPair::splat(scale.into());
        self
    }

    /// Sets the scale spec of one axis.
    pub fn with_axis_scale(mut self, axis: Axis, scale: impl Into<ScaleSpec>) -> Self {
        let scale = scale.into();
        match axis {
            Axis::X => self.scale.x = scale,
            Axis::Y => self.scale.y = scale,
        }
        self
    }

    /// Enables or disables stacking.
    pub fn with_stacked(mut self, stacked: bool) -> Self {
        self.stacked = stacked;
        self
    }

    /// Enables or disables horizontal orientation.
    pub fn with_horizontal(mut self, horizontal: bool) -> Self {
        self.horizontal = horizontal;
        self
    }

    /// Sets the category label text.
    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Adds a custom label renderer.
    pub fn with_label_component(mut self, component: Arc<dyn LabelRenderer>) -> Self {
        self.label_components.push(component);
        self
    }

    /// Sets the bar style.
    pub fn with_style(mut self, style: BarStyleSpec) -> Self {
        self.style = Some(style);
        self
    }

    /// Sets the label style.
    pub fn with_label_style(mut self, style: LabelStyle) -> Self {
        self.label_style = Some(style);
        self
    }

    /// Sets the zero-crossing policy for domain padding.
    pub fn with_zero_crossing(mut self, policy: ZeroCrossing) -> Self {
        self.zero_crossing = policy;
        self
    }

    /// Sets how stacked points are matched across series.
    pub fn with_stack_key(mut self, key: StackKey) -> Self {
        self.stack_key = key;
        self
    }

    /// The container size after defaults.
    pub fn size(&self, defaults: &Defaults) -> Size {
        Size::new(
            self.width.unwrap_or(defaults.size.width),
            self.height.unwrap_or(defaults.size.height),
        )
    }
}
