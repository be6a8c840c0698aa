// Copyright 2025 the VizBar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Category label selection and anchoring.
//!
//! One series per chart carries the category labels: the middle series of a grouped chart, or
//! the last (topmost) series of a stacked chart.

extern crate alloc;

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use kurbo::Point;

use crate::bar::BarGeometry;
use crate::consolidate::{BarDatum, ConsolidatedSeries};
use crate::string_map::StringMap;
use crate::style::LabelStyle;

/// Horizontal text anchor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    /// Text starts at the anchor.
    Start,
    /// Text is centered on the anchor.
    Middle,
    /// Text ends at the anchor.
    End,
}

/// Vertical text anchor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerticalAnchor {
    /// Text hangs below the anchor.
    Start,
    /// Text is centered on the anchor.
    Middle,
    /// Text sits above the anchor.
    End,
}

/// A caller-supplied label renderer.
///
/// The engine never calls into the renderer beyond these optional overrides; drawing is left to
/// whoever consumes the [`LabelPlacement`].
pub trait LabelRenderer: core::fmt::Debug + Send + Sync {
    /// Text to render instead of the configured label text.
    fn text(&self) -> Option<&str> {
        None
    }

    /// Anchor position overriding the computed one.
    fn position(&self) -> Option<Point> {
        None
    }

    /// Horizontal anchor overriding the computed one.
    fn text_anchor(&self) -> Option<TextAnchor> {
        None
    }

    /// Vertical anchor overriding the computed one.
    fn vertical_anchor(&self) -> Option<VerticalAnchor> {
        None
    }
}

/// What a placed label shows.
#[derive(Clone, Debug)]
pub enum Label {
    /// Plain text.
    Text(String),
    /// A custom renderer, with the configured text (if any) for it to use.
    Custom {
        /// The renderer.
        renderer: Arc<dyn LabelRenderer>,
        /// Label text for this category.
        text: Option<String>,
    },
}

impl Label {
    /// The text this label displays, if any.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Custom { renderer, text } => renderer.text().or(text.as_deref()),
        }
    }
}

/// A label anchored next to one bar.
#[derive(Clone, Debug)]
pub struct LabelPlacement {
    /// Series of the labelled bar.
    pub series: usize,
    /// Point index of the labelled bar.
    pub index: usize,
    /// Anchor position in pixels.
    pub position: Point,
    /// Label content.
    pub label: Label,
    /// Horizontal anchor.
    pub text_anchor: TextAnchor,
    /// Vertical anchor.
    pub vertical_anchor: VerticalAnchor,
}

/// Returns `true` if series `index` of `count` carries the category labels.
pub fn should_plot_label(index: usize, count: usize, stacked: bool, has_labels: bool) -> bool {
    if !has_labels {
        return false;
    }
    if stacked {
        index + 1 == count
    } else {
        index == count / 2
    }
}

/// Label configuration and the lookups needed to pick label text.
#[derive(Clone, Debug)]
pub struct LabelContext<'a> {
    /// Label text by category index.
    pub labels: &'a [String],
    /// Custom renderers by category index; index misses fall back to the first entry.
    pub components: &'a [Arc<dyn LabelRenderer>],
    /// String map of the x axis.
    pub string_map_x: Option<&'a StringMap>,
    /// Label style.
    pub style: LabelStyle,
    /// Whether the chart is horizontal.
    pub horizontal: bool,
    sorted_x: Vec<f64>,
}

impl<'a> LabelContext<'a> {
    /// Creates a label context for `datasets`.
    pub fn new(
        datasets: &[ConsolidatedSeries],
        labels: &'a [String],
        components: &'a [Arc<dyn LabelRenderer>],
        string_map_x: Option<&'a StringMap>,
        style: LabelStyle,
        horizontal: bool,
    ) -> Self {
        let mut sorted_x: Vec<f64> = datasets
            .iter()
            .flat_map(|s| s.data.iter().map(|d| d.x))
            .collect();
        sorted_x.sort_by(f64::total_cmp);
        sorted_x.dedup();
        Self {
            labels,
            components,
            string_map_x,
            style,
            horizontal,
            sorted_x,
        }
    }

    /// Returns `true` if any label source is configured.
    pub fn has_labels(&self) -> bool {
        !self.labels.is_empty() || !self.components.is_empty()
    }

    /// Category index used to look up label text for `datum`.
    ///
    /// This is the datum's category band if it has one, otherwise its string ordinal, otherwise
    /// the rank of its `x` among all distinct x values. On a string axis a numeric `x` is taken
    /// as an ordinal directly.
    pub fn label_index(&self, datum: &BarDatum) -> Option<usize> {
        if let Some(c) = datum.category {
            return Some(c);
        }
        if let Some(map) = self.string_map_x {
            return match datum.x_name.as_deref() {
                Some(name) => map.ordinal(name).map(|ordinal| ordinal - 1),
                None => ordinal_index(datum.x),
            };
        }
        self.sorted_x.iter().position(|&x| x == datum.x)
    }

    fn label_for(&self, datum: &BarDatum) -> Option<Label> {
        let index = self.label_index(datum);
        let text = index
            .and_then(|i| self.labels.get(i))
            .cloned()
            .or_else(|| datum.label.clone());
        let component = index
            .and_then(|i| self.components.get(i))
            .or_else(|| self.components.first());
        match (component, text) {
            (Some(renderer), text) => Some(Label::Custom {
                renderer: renderer.clone(),
                text,
            }),
            (None, Some(text)) => Some(Label::Text(text)),
            (None, None) => None,
        }
    }

    /// Anchors for a bar with value `y`.
    pub fn anchors(&self, y: f64) -> (TextAnchor, VerticalAnchor) {
        let positive = y >= 0.0;
        if self.horizontal {
            let text = if positive {
                TextAnchor::Start
            } else {
                TextAnchor::End
            };
            (text, VerticalAnchor::Middle)
        } else {
            let vertical = if positive {
                VerticalAnchor::End
            } else {
                VerticalAnchor::Start
            };
            (TextAnchor::Middle, vertical)
        }
    }

    /// Anchor position just past the value end of `bar`.
    pub fn anchor_position(&self, bar: &BarGeometry, y: f64) -> Point {
        let length = bar.length();
        let direction = if length != 0.0 {
            length.signum()
        } else {
            // Fall back to the usual screen direction for the value's sign.
            match (self.horizontal, y >= 0.0) {
                (true, true) | (false, false) => 1.0,
                (true, false) | (false, true) => -1.0,
            }
        };
        let end = bar.dependent1 + direction * self.style.padding;
        if self.horizontal {
            Point::new(end, bar.independent)
        } else {
            Point::new(bar.independent, end)
        }
    }

    /// Places the labels carried by series `series`.
    pub fn place_series(
        &self,
        series: usize,
        data: &ConsolidatedSeries,
        bars: &[BarGeometry],
        count: usize,
        stacked: bool,
    ) -> Vec<LabelPlacement> {
        if !should_plot_label(series, count, stacked, self.has_labels()) {
            return Vec::new();
        }
        data.data
            .iter()
            .zip(bars)
            .enumerate()
            .filter_map(|(index, (datum, bar))| {
                let label = self.label_for(datum)?;
                let (mut text_anchor, mut vertical_anchor) = self.anchors(datum.y);
                let mut position = self.anchor_position(bar, datum.y);
                if let Label::Custom { renderer, .. } = &label {
                    position = renderer.position().unwrap_or(position);
                    text_anchor = renderer.text_anchor().unwrap_or(text_anchor);
                    vertical_anchor = renderer.vertical_anchor().unwrap_or(vertical_anchor);
                }
                Some(LabelPlacement {
                    series,
                    index,
                    position,
                    label,
                    text_anchor,
                    vertical_anchor,
                })
            })
            .collect()
    }
}

/// Places labels for every series.
pub fn place_labels(
    ctx: &LabelContext<'_>,
    datasets: &[ConsolidatedSeries],
    bars: &[Vec<BarGeometry>],
    stacked: bool,
) -> Vec<LabelPlacement> {
    datasets
        .iter()
        .zip(bars)
        .enumerate()
        .flat_map(|(s, (data, row))| ctx.place_series(s, data, row, datasets.len(), stacked))
        .collect()
}

/// Zero-based index for a whole-number ordinal `x >= 1`.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    reason = "checked to be a non-negative whole number in range"
)]
fn ordinal_index(x: f64) -> Option<usize> {
    let index = x - 1.0;
    if index >= 0.0 && index < usize::MAX as f64 && (index as usize) as f64 == index {
        Some(index as usize)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;
    use crate::data::CategoryBand;
    use crate::string_map::build_string_map;
    use crate::Axis;

    #[test]
    fn grouped_charts_label_the_middle_series() {
        assert!(should_plot_label(1, 3, false, true));
        assert!(!should_plot_label(0, 3, false, true));
        assert!(should_plot_label(2, 4, false, true));
        assert!(should_plot_label(0, 1, false, true));
    }

    #[test]
    fn stacked_charts_label_the_last_series() {
        assert!(should_plot_label(3, 4, true, true));
        assert!(!should_plot_label(2, 4, true, true));
    }

    #[test]
    fn nothing_is_labelled_without_label_sources() {
        assert!(!should_plot_label(0, 1, false, false));
        assert!(!should_plot_label(0, 1, true, false));
    }

    #[test]
    fn numeric_x_on_a_string_axis_is_read_as_an_ordinal() {
        let categories: Vec<CategoryBand> = vec!["a".into(), "b".into(), "c".into()];
        let map = build_string_map(Axis::X, &categories, &[]).expect("string axis");
        let ctx = LabelContext::new(&[], &[], &[], Some(&map), LabelStyle::default(), false);
        let datum = |x: f64, x_name: Option<&str>| BarDatum {
            x,
            y: 1.0,
            x_name: x_name.map(String::from),
            y_name: None,
            category: None,
            label: None,
            fill: None,
            opacity: None,
        };
        assert_eq!(ctx.label_index(&datum(3.0, Some("c"))), Some(2));
        assert_eq!(ctx.label_index(&datum(2.0, None)), Some(1));
        assert_eq!(ctx.label_index(&datum(2.5, None)), None);
        assert_eq!(ctx.label_index(&datum(0.0, None)), None);
    }

    #[test]
    fn anchors_flip_with_the_value_sign() {
        let vertical = LabelContext::new(&[], &[], &[], None, LabelStyle::default(), false);
        assert_eq!(vertical.anchors(2.0), (TextAnchor::Middle, VerticalAnchor::End));
        assert_eq!(vertical.anchors(-2.0), (TextAnchor::Middle, VerticalAnchor::Start));

        let horizontal = LabelContext::new(&[], &[], &[], None, LabelStyle::default(), true);
        assert_eq!(horizontal.anchors(2.0), (TextAnchor::Start, VerticalAnchor::Middle));
        assert_eq!(horizontal.anchors(-2.0), (TextAnchor::End, VerticalAnchor::Middle));
    }

    #[test]
    fn labels_are_nudged_away_from_the_bar_end() {
        let ctx = LabelContext::new(&[], &[], &[], None, LabelStyle::default(), false);
        let up = BarGeometry {
            independent: 40.0,
            dependent0: 250.0,
            dependent1: 150.0,
        };
        assert_eq!(ctx.anchor_position(&up, 1.0), Point::new(40.0, 145.0));
        let down = BarGeometry {
            independent: 40.0,
            dependent0: 150.0,
            dependent1: 200.0,
        };
        assert_eq!(ctx.anchor_position(&down, -1.0), Point::new(40.0, 205.0));

        let ctx = LabelContext::new(&[], &[], &[], None, LabelStyle::default(), true);
        let right = BarGeometry {
            independent: 80.0,
            dependent0: 50.0,
            dependent1: 120.0,
        };
        assert_eq!(ctx.anchor_position(&right, 1.0), Point::new(125.0, 80.0));
    }
}
