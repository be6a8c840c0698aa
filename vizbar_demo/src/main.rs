// Copyright 2025 the VizBar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bar chart demos for `vizbar_layout`.
//!
//! Writes one SVG per demo chart into the directory given as the first argument (default
//! `vizbar_demo_out`). Set `RUST_LOG=vizbar_layout=debug` to see the layout stages.

mod svg;

use std::error::Error;
use std::path::{Path, PathBuf};

use peniko::color::palette::css;
use tracing_subscriber::EnvFilter;
use vizbar_layout::{
    CategoryBand, ColorScale, DataAttributes, Datum, Defaults, Interpolator, LayoutConfig,
    LayoutResult, SeriesAttrs, compute_layout,
};

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let out_dir = PathBuf::from(
        std::env::args()
            .nth(1)
            .unwrap_or_else(|| "vizbar_demo_out".to_string()),
    );
    std::fs::create_dir_all(&out_dir)?;

    let defaults = Defaults::default();
    let demos = [
        ("numeric_horizontal", numeric_demo(&NUMERIC_FRAMES[0])),
        ("string_stacked", string_stacked_demo()),
        ("defaults", LayoutConfig::new()),
    ];
    for (name, config) in &demos {
        let layout = compute_layout(config, &defaults)?;
        write_svg(&out_dir, name, &layout, &defaults)?;
    }

    // Tween between two snapshots of the numeric demo, the way an animation driver would.
    let from = compute_layout(&numeric_demo(&NUMERIC_FRAMES[0]), &defaults)?;
    let to = compute_layout(&numeric_demo(&NUMERIC_FRAMES[1]), &defaults)?;
    let tween = Interpolator::new(&from, &to);
    for step in 0..=4 {
        let t = f64::from(step) / 4.0;
        write_svg(&out_dir, &format!("numeric_tween_{step}"), &tween.at(t), &defaults)?;
    }

    Ok(())
}

fn write_svg(
    dir: &Path,
    name: &str,
    layout: &LayoutResult,
    defaults: &Defaults,
) -> Result<(), Box<dyn Error>> {
    let path = dir.join(format!("{name}.svg"));
    std::fs::write(&path, svg::render(layout, defaults.label_style.font_size))?;
    tracing::info!(path = %path.display(), bars = layout.bar_rects().count(), "wrote chart");
    Ok(())
}

/// Two snapshots of five series, each with one point per numeric band.
const NUMERIC_FRAMES: [[[f64; 2]; 15]; 2] = [
    [
        [2.0, 3.0],
        [5.0, 7.0],
        [10.0, 12.0],
        [1.0, 1.0],
        [6.0, 4.0],
        [9.0, 0.0],
        [3.0, 5.0],
        [4.0, 9.0],
        [11.0, 6.0],
        [2.0, 2.0],
        [7.0, 3.0],
        [10.0, 15.0],
        [1.0, 4.0],
        [5.0, 10.0],
        [9.0, 8.0],
    ],
    [
        [1.0, 5.0],
        [6.0, 2.0],
        [11.0, 9.0],
        [3.0, 2.0],
        [4.0, 8.0],
        [10.0, 3.0],
        [2.0, 1.0],
        [7.0, 6.0],
        [9.0, 14.0],
        [1.0, 3.0],
        [5.0, 5.0],
        [10.0, 7.0],
        [3.0, 4.0],
        [6.0, 9.0],
        [11.0, 11.0],
    ],
];

/// Horizontal grouped bars with numeric category bands and labels.
fn numeric_demo(frame: &[[f64; 2]; 15]) -> LayoutConfig {
    let data: Vec<Vec<Datum>> = frame
        .chunks(3)
        .map(|points| points.iter().map(|&[x, y]| Datum::new(x, y)).collect())
        .collect();
    let fills = [css::CORNFLOWER_BLUE, css::ORANGE, css::GREEN_YELLOW, css::GOLD, css::TOMATO];
    LayoutConfig::new()
        .with_data(data)
        .with_size(450.0, 500.0)
        .with_data_attributes(DataAttributes::Many(
            fills.into_iter().map(SeriesAttrs::fill).collect(),
        ))
        .with_labels(["low", "medium", "high"])
        .with_horizontal(true)
        .with_categories([(1.0, 3.0), (4.0, 7.0), (9.0, 11.0)].map(CategoryBand::from))
}

/// Stacked bars over string categories in greyscale.
fn string_stacked_demo() -> LayoutConfig {
    const COUNTS: [[f64; 3]; 5] = [
        [3.0, 7.0, 12.0],
        [1.0, 4.0, 0.0],
        [5.0, 9.0, 6.0],
        [2.0, 2.0, 15.0],
        [4.0, 10.0, 8.0],
    ];
    let data: Vec<Vec<Datum>> = COUNTS
        .iter()
        .map(|counts| {
            ["rabbits", "cats", "dogs"]
                .into_iter()
                .zip(counts)
                .map(|(animal, &count)| Datum::new(animal, count))
                .collect()
        })
        .collect();
    LayoutConfig::new()
        .with_data(data)
        .with_color_scale(ColorScale::Greyscale)
        .with_labels(["one", "two", "three"])
        .with_stacked(true)
}
