// Copyright 2025 the VizBar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout engine for bar charts.
//!
//! This crate turns chart data (numeric, categorical or mixed-sign; one or many series; stacked
//! or grouped) into pixel-space geometry:
//! - **Domains** and **ranges** per axis, with pixel-denominated domain padding.
//! - **Scales** mapping domain values onto pixel ranges, linear by default and pluggable.
//! - **Bar geometry** as `(independent, dependent0, dependent1)` triples, with per-bar styles.
//! - **Label placements** for the one series per chart that carries category labels.
//!
//! Drawing is out of scope. A renderer consumes [`LayoutResult`] directly, and an animation
//! driver blends two results with [`Interpolator`].
//!
//! ```
//! use vizbar_layout::{Datum, Defaults, LayoutConfig, compute_layout};
//!
//! let config = LayoutConfig::new()
//!     .with_data(vec![Datum::new(1.0, 2.0), Datum::new(2.0, 5.0)])
//!     .with_size(400.0, 300.0);
//! let layout = compute_layout(&config, &Defaults::default()).unwrap();
//! assert_eq!(layout.bar_geometries[0].len(), 2);
//! ```

#![no_std]

extern crate alloc;

mod axis;
mod bar;
mod config;
mod consolidate;
mod data;
mod domain;
mod error;
#[cfg(not(feature = "std"))]
mod float;
mod interpolate;
mod label;
mod layout;
mod palette;
mod range;
mod scale;
#[cfg(test)]
mod scenario_tests;
mod stack;
mod string_map;
mod style;

pub use axis::{Axis, AxisPair};
pub use bar::{BarContext, BarGeometry, position_bars};
pub use config::{Defaults, LayoutConfig};
pub use consolidate::{BarDatum, ConsolidatedSeries, ResolvedAttrs, consolidate};
pub use data::{CategoryBand, ChartData, DataAttributes, Datum, SeriesAttrs, Value};
pub use domain::{Domain, DomainRequest, ZeroCrossing, compute_domain, pad_domain};
pub use error::LayoutError;
pub use interpolate::Interpolator;
pub use label::{
    Label, LabelContext, LabelPlacement, LabelRenderer, TextAnchor, VerticalAnchor,
    place_labels, should_plot_label,
};
pub use layout::{LayoutResult, compute_layout};
pub use palette::ColorScale;
pub use range::{Padding, PixelRange, Size, compute_ranges};
pub use scale::{
    Scale, ScaleFn, ScaleLinear, ScaleLinearSpec, ScaleLog, ScaleLogSpec, ScaleSpec, ScaleTime,
    ScaleTimeSpec,
};
pub use stack::{Stack, StackKey, stack};
pub use string_map::{StringMap, build_string_map};
pub use style::{BarStyle, BarStyleSpec, LabelStyle, StyleResolver};
