// Copyright 2025 the VizBar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

extern crate std;

use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;

use peniko::color::palette::css;

use crate::{
    Axis, BarStyleSpec, CategoryBand, ChartData, ColorScale, DataAttributes, Datum, Defaults,
    Domain, Label, LabelRenderer, LayoutConfig, LayoutError, LayoutResult, PixelRange, ScaleFn,
    ScaleLinear, ScaleSpec, SeriesAttrs, Size, StyleResolver, TextAnchor, VerticalAnchor,
    compute_layout,
};

fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() <= 1e-9, "{a} != {b}");
}

fn series(values: &[(f64, f64)]) -> Vec<Datum> {
    values.iter().map(|&(x, y)| Datum::new(x, y)).collect()
}

fn layout(config: &LayoutConfig) -> LayoutResult {
    compute_layout(config, &Defaults::default()).expect("valid config")
}

fn scenario_a() -> Vec<Vec<Datum>> {
    vec![
        series(&[(1.0, 0.0), (2.0, 0.0), (3.0, 0.0)]),
        series(&[(1.0, 1.0), (2.0, 1.0), (3.0, 1.0)]),
        series(&[(1.0, 2.0), (2.0, 2.0), (3.0, 2.0)]),
    ]
}

#[test]
fn grouped_domain_covers_raw_values() {
    let out = layout(&LayoutConfig::new().with_data(scenario_a()));
    assert_eq!(out.domain.y, Domain::new(0.0, 2.0));
    assert_eq!(out.domain.x, Domain::new(1.0, 3.0));
}

#[test]
fn a_negative_value_extends_the_domain_below_zero() {
    let mut data = scenario_a();
    data[2][2] = Datum::new(3.0, -2.0);
    let out = layout(&LayoutConfig::new().with_data(data));
    assert_eq!(out.domain.y, Domain::new(-2.0, 2.0));
}

#[test]
fn stacked_domain_covers_cumulative_totals() {
    let out = layout(&LayoutConfig::new().with_data(scenario_a()).with_stacked(true));
    assert_eq!(out.domain.y, Domain::new(0.0, 3.0));
}

fn mixed_sign_stack() -> Vec<Vec<Datum>> {
    [1.0, 3.0, -1.0, -2.0]
        .into_iter()
        .map(|y| series(&[(1.0, y), (2.0, y)]))
        .collect()
}

#[test]
fn mixed_sign_stack_splits_at_zero() {
    let config = LayoutConfig::new()
        .with_data(mixed_sign_stack())
        .with_stacked(true)
        .with_size(500.0, 400.0);
    let out = layout(&config);
    assert_eq!(out.domain.y, Domain::new(-3.0, 4.0));

    // Series share one x position per stack.
    for row in &out.bar_geometries {
        assert_close(row[0].independent, 50.0);
        assert_close(row[1].independent, 450.0);
    }
    let y = &out.scale.y;
    let bar = |s: usize| out.bar_geometries[s][0];
    assert_close(bar(0).dependent0, y.map(0.0));
    assert_close(bar(0).dependent1, y.map(1.0));
    assert_close(bar(1).dependent0, y.map(1.0));
    assert_close(bar(1).dependent1, 50.0);
    assert_close(bar(2).dependent0, y.map(0.0));
    assert_close(bar(2).dependent1, y.map(-1.0));
    assert_close(bar(3).dependent0, y.map(-1.0));
    assert_close(bar(3).dependent1, 350.0);
}

#[test]
fn default_config_lays_out_the_default_data() {
    let out = layout(&LayoutConfig::new());
    assert_eq!(out.size, Size::new(800.0, 600.0));
    assert_eq!(out.datasets.len(), 1);
    assert_eq!(out.bar_geometries.len(), 1);
    assert_eq!(out.bar_geometries[0].len(), 5);
    let xs: Vec<f64> = out.datasets[0].data.iter().map(|d| d.x).collect();
    assert_eq!(xs, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    assert_eq!(out.domain.y, Domain::new(10.0, 110.0));
    assert!(out.label_placements.is_empty());
}

#[test]
fn grouped_series_fan_out_around_the_shared_x() {
    let config = LayoutConfig::new()
        .with_data(scenario_a())
        .with_size(500.0, 400.0);
    let out = layout(&config);
    // x range [50, 450] over [1, 3] is 200 px per unit; bar width 8 + padding 6 = 14 px.
    let at_one: Vec<f64> = out.bar_geometries.iter().map(|row| row[0].independent).collect();
    assert_close(at_one[0], 36.0);
    assert_close(at_one[1], 50.0);
    assert_close(at_one[2], 64.0);
}

#[test]
fn a_positive_domain_minimum_lifts_the_baseline() {
    let config = LayoutConfig::new()
        .with_data(series(&[(1.0, 4.0), (2.0, 8.0)]))
        .with_axis_domain(Axis::Y, (2.0, 10.0));
    let out = layout(&config);
    let baseline = out.scale.y.map(2.0);
    for bar in &out.bar_geometries[0] {
        assert_close(bar.dependent0, baseline);
    }
}

#[test]
fn all_negative_bars_hang_from_zero() {
    let config = LayoutConfig::new().with_data(series(&[(1.0, -5.0), (2.0, -1.0)]));
    let out = layout(&config);
    assert_eq!(out.domain.y, Domain::new(-5.0, -1.0));
    let zero = out.scale.y.map(0.0);
    for bar in &out.bar_geometries[0] {
        assert_close(bar.dependent0, zero);
    }
    let nearest = out.bar_geometries[0][1];
    assert_close(nearest.dependent1, out.scale.y.map(-1.0));
    assert!(nearest.length().abs() > 0.0);
}

#[test]
fn numeric_bands_center_their_points() {
    let data = vec![series(&[(2.0, 1.0), (5.0, 2.0)])];
    let config = LayoutConfig::new()
        .with_data(data)
        .with_categories([(1.0, 3.0), (4.0, 8.0)])
        .with_size(500.0, 400.0);
    let out = layout(&config);
    assert_eq!(out.domain.x, Domain::new(1.0, 8.0));
    assert_eq!(out.datasets[0].data[1].category, Some(1));
    assert_close(out.bar_geometries[0][0].independent, out.scale.x.map(2.0));
    assert_close(out.bar_geometries[0][1].independent, out.scale.x.map(6.0));
}

#[test]
fn horizontal_bars_grow_rightward() {
    let config = LayoutConfig::new()
        .with_data(series(&[(1.0, 2.0), (2.0, 4.0)]))
        .with_horizontal(true)
        .with_labels(["low", "high"])
        .with_size(500.0, 400.0);
    let out = layout(&config);
    let bar = out.bar_geometries[0][1];
    assert!(bar.dependent1 > bar.dependent0);
    assert!(
        out.bar_geometries[0][1].independent < out.bar_geometries[0][0].independent,
        "later categories sit higher"
    );
    let rects: Vec<_> = out.bar_rects().collect();
    assert_close(rects[1].2.height(), 8.0);

    let label = &out.label_placements[1];
    assert_eq!(label.text_anchor, TextAnchor::Start);
    assert_eq!(label.vertical_anchor, VerticalAnchor::Middle);
    assert_close(label.position.x, bar.dependent1 + 5.0);
    assert_close(label.position.y, bar.independent);
    assert_eq!(label.label.text(), Some("high"));
}

#[test]
fn stacked_string_categories_label_the_top_series() {
    let data = vec![
        vec![
            Datum::new("cherries", 1.0),
            Datum::new("apples", 2.0),
            Datum::new("bananas", 3.0),
        ],
        vec![
            Datum::new("cherries", 4.0),
            Datum::new("apples", 5.0),
            Datum::new("bananas", 6.0),
        ],
    ];
    let config = LayoutConfig::new()
        .with_data(data)
        .with_stacked(true)
        .with_color_scale(ColorScale::Greyscale)
        .with_labels(["A", "B", "C"]);
    let out = layout(&config);
    assert_eq!(out.datasets[0].data[0].x, 3.0);
    assert_eq!(out.datasets[0].data[0].x_name.as_deref(), Some("cherries"));
    assert_eq!(out.datasets[1].attrs.fill, ColorScale::Greyscale.color(1));

    assert_eq!(out.label_placements.len(), 3);
    assert!(out.label_placements.iter().all(|p| p.series == 1));
    let texts: Vec<_> = out
        .label_placements
        .iter()
        .map(|p| p.label.text())
        .collect();
    assert_eq!(texts, vec![Some("C"), Some("A"), Some("B")]);
    assert_eq!(out.label_placements[0].vertical_anchor, VerticalAnchor::End);
}

#[test]
fn grouped_labels_ride_on_the_middle_series() {
    let config = LayoutConfig::new()
        .with_data(scenario_a())
        .with_labels(["one", "two", "three"]);
    let out = layout(&config);
    assert_eq!(out.label_placements.len(), 3);
    assert!(out.label_placements.iter().all(|p| p.series == 1));
    assert_eq!(out.label_placements[2].label.text(), Some("three"));
}

#[derive(Debug)]
struct Flag;

impl LabelRenderer for Flag {
    fn text_anchor(&self) -> Option<TextAnchor> {
        Some(TextAnchor::End)
    }
}

#[test]
fn custom_renderers_fall_back_to_the_first_component() {
    let config = LayoutConfig::new()
        .with_data(series(&[(1.0, 2.0), (2.0, 4.0)]))
        .with_label_component(Arc::new(Flag));
    let out = layout(&config);
    assert_eq!(out.label_placements.len(), 2);
    for placement in &out.label_placements {
        assert!(matches!(placement.label, Label::Custom { .. }));
        assert_eq!(placement.text_anchor, TextAnchor::End);
        assert_eq!(placement.label.text(), None);
    }
}

#[test]
fn style_layers_merge_base_series_and_datum() {
    let data = vec![
        vec![Datum::new(1.0, 2.0), Datum::new(2.0, 6.0).with_fill(css::RED)],
        vec![Datum::new(1.0, 3.0)],
    ];
    let style = BarStyleSpec::default()
        .with_width(StyleResolver::<f64>::func(|d| if d.y > 4.0 { 12.0 } else { 4.0 }));
    let config = LayoutConfig::new()
        .with_data(data)
        .with_data_attributes(DataAttributes::Many(vec![
            SeriesAttrs::fill(css::BLUE).with_opacity(0.5),
        ]))
        .with_style(style);
    let out = layout(&config);
    let styles = &out.bar_styles;
    assert_eq!(styles[0][0].fill, css::BLUE);
    assert_eq!(styles[0][1].fill, css::RED);
    assert_eq!(styles[1][0].fill, css::BLUE);
    assert_eq!(styles[0][0].opacity, 0.5);
    assert_eq!(styles[0][0].width, 4.0);
    assert_eq!(styles[0][1].width, 12.0);
}

#[test]
fn a_point_without_y_is_rejected() {
    let data = vec![series(&[(1.0, 1.0)]), vec![Datum::default()]];
    let err = compute_layout(&LayoutConfig::new().with_data(data), &Defaults::default())
        .expect_err("missing y");
    assert!(
        matches!(err, LayoutError::DataShape { series: 1, index: 0, .. }),
        "unexpected error {err:?}"
    );
}

#[test]
fn empty_data_needs_a_domain() {
    let empty = LayoutConfig::new().with_data(ChartData::Points(Vec::new()));
    let err = compute_layout(&empty, &Defaults::default()).expect_err("no domain");
    assert!(
        matches!(err, LayoutError::Configuration { axis: Axis::X, .. }),
        "unexpected error {err:?}"
    );

    let out = layout(&empty.with_domain((0.0, 1.0)));
    assert!(out.bar_geometries[0].is_empty());
}

#[test]
fn explicit_string_categories_keep_their_order() {
    let config = LayoutConfig::new()
        .with_data(vec![Datum::new("b", 1.0), Datum::new("a", 2.0)])
        .with_categories([CategoryBand::from("b"), CategoryBand::from("a")]);
    let out = layout(&config);
    let map = out.string_maps.x.as_ref().expect("categorical x axis");
    assert_eq!(map.ordinal("b"), Some(1));
    assert_eq!(map.ordinal("a"), Some(2));
    assert_eq!(out.datasets[0].data[1].category, Some(1));
}

#[derive(Debug)]
struct Shifted {
    shift: f64,
    fit: Option<(Domain, PixelRange)>,
}

impl ScaleFn for Shifted {
    fn fitted(&self, domain: Domain, range: PixelRange) -> Arc<dyn ScaleFn> {
        Arc::new(Self {
            shift: self.shift,
            fit: Some((domain, range)),
        })
    }

    fn map(&self, value: f64) -> f64 {
        let linear = self
            .fit
            .map_or(value, |(d, r)| ScaleLinear::new(d, r).map(value));
        linear + self.shift
    }

    fn invert(&self, pixel: f64) -> Option<f64> {
        let (d, r) = self.fit?;
        ScaleLinear::new(d, r).invert(pixel - self.shift)
    }
}

#[test]
fn shared_custom_scales_are_left_untouched() {
    let shared = Arc::new(Shifted {
        shift: 3.0,
        fit: None,
    });
    let data = series(&[(1.0, 2.0), (3.0, 4.0)]);
    let plain = layout(&LayoutConfig::new().with_data(data.clone()));
    let config = LayoutConfig::new()
        .with_data(data)
        .with_axis_scale(Axis::X, ScaleSpec::Custom(shared.clone()));
    let first = layout(&config);
    let second = layout(&config);

    assert!(shared.fit.is_none());
    assert_eq!(first.bar_geometries, second.bar_geometries);
    for (custom, linear) in first.bar_geometries[0].iter().zip(&plain.bar_geometries[0]) {
        assert_close(custom.independent, linear.independent + 3.0);
        assert_close(custom.dependent1, linear.dependent1);
    }
}
