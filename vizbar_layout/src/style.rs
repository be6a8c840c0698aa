// Copyright 2025 the VizBar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bar and label styles, with values that may depend on the datum.

extern crate alloc;

use alloc::sync::Arc;

use peniko::Color;

use crate::consolidate::{BarDatum, ResolvedAttrs};

/// A style value that is either fixed or computed from the datum it styles.
#[derive(Clone)]
pub enum StyleResolver<T> {
    /// The same value for every bar.
    Value(T),
    /// A per-datum function.
    Func(Arc<dyn Fn(&BarDatum) -> T + Send + Sync>),
}

impl<T: Clone> StyleResolver<T> {
    /// Creates a per-datum resolver.
    pub fn func(f: impl Fn(&BarDatum) -> T + Send + Sync + 'static) -> Self {
        Self::Func(Arc::new(f))
    }

    /// Resolves the value for `datum`.
    pub fn resolve(&self, datum: &BarDatum) -> T {
        match self {
            Self::Value(v) => v.clone(),
            Self::Func(f) => f(datum),
        }
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for StyleResolver<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Value(v) => f.debug_tuple("Value").field(v).finish(),
            Self::Func(_) => f.write_str("Func(<fn>)"),
        }
    }
}

impl<T> From<T> for StyleResolver<T> {
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

/// Base style for every bar, before series and datum overrides.
#[derive(Clone, Debug)]
pub struct BarStyleSpec {
    /// Bar thickness across the independent axis, in pixels.
    pub width: StyleResolver<f64>,
    /// Gap between neighbouring bars of a group, in pixels.
    pub padding: f64,
    /// Fill opacity.
    pub opacity: StyleResolver<f32>,
}

impl Default for BarStyleSpec {
    fn default() -> Self {
        Self {
            width: StyleResolver::Value(8.0),
            padding: 6.0,
            opacity: StyleResolver::Value(1.0),
        }
    }
}

impl BarStyleSpec {
    /// Sets the bar width.
    pub fn with_width(mut self, width: impl Into<StyleResolver<f64>>) -> Self {
        self.width = width.into();
        self
    }

    /// Sets the gap between grouped bars.
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Sets the fill opacity.
    pub fn with_opacity(mut self, opacity: impl Into<StyleResolver<f32>>) -> Self {
        self.opacity = opacity.into();
        self
    }

    /// Resolves the style of one bar.
    ///
    /// Precedence, lowest first: this base style, the series attributes, the datum's own
    /// overrides.
    pub fn resolve(&self, datum: &BarDatum, attrs: &ResolvedAttrs) -> BarStyle {
        BarStyle {
            fill: datum.fill.unwrap_or(attrs.fill),
            opacity: datum
                .opacity
                .or(attrs.opacity)
                .unwrap_or_else(|| self.opacity.resolve(datum)),
            width: self.width.resolve(datum).max(0.0),
        }
    }
}

/// The resolved style of a single bar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarStyle {
    /// Fill color.
    pub fill: Color,
    /// Fill opacity.
    pub opacity: f32,
    /// Bar thickness in pixels.
    pub width: f64,
}

/// Style for category labels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelStyle {
    /// Distance between the bar end and the label anchor, in pixels.
    pub padding: f64,
    /// Font size hint passed through to the renderer.
    pub font_size: f64,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            padding: 5.0,
            font_size: 12.0,
        }
    }
}
