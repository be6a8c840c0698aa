// Copyright 2025 the VizBar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Named series color scales.

extern crate alloc;

use alloc::vec::Vec;

use peniko::Color;
use peniko::color::palette::css;

const DEFAULT: [Color; 8] = [
    css::CORNFLOWER_BLUE,
    css::ORANGE,
    css::MEDIUM_SEA_GREEN,
    css::CRIMSON,
    css::GOLDENROD,
    css::SLATE_BLUE,
    css::DARK_CYAN,
    css::HOT_PINK,
];

const GREYSCALE: [Color; 4] = [
    Color::from_rgb8(0xcc, 0xcc, 0xcc),
    Color::from_rgb8(0x96, 0x96, 0x96),
    Color::from_rgb8(0x63, 0x63, 0x63),
    Color::from_rgb8(0x25, 0x25, 0x25),
];

const QUALITATIVE: [Color; 10] = [
    Color::from_rgb8(0x33, 0x4d, 0x5c),
    Color::from_rgb8(0x45, 0xb2, 0x9d),
    Color::from_rgb8(0xef, 0xc9, 0x4c),
    Color::from_rgb8(0xe2, 0x7a, 0x3f),
    Color::from_rgb8(0xdf, 0x5a, 0x49),
    Color::from_rgb8(0x4f, 0x7d, 0xa1),
    Color::from_rgb8(0x55, 0xdb, 0xc1),
    Color::from_rgb8(0xef, 0xda, 0x97),
    Color::from_rgb8(0xe2, 0xa3, 0x7f),
    Color::from_rgb8(0xdf, 0x94, 0x8a),
];

const HEATMAP: [Color; 5] = [
    Color::from_rgb8(0x42, 0x85, 0x17),
    Color::from_rgb8(0x77, 0xd2, 0x00),
    Color::from_rgb8(0xd6, 0xd3, 0x05),
    Color::from_rgb8(0xec, 0x8e, 0x19),
    Color::from_rgb8(0xc9, 0x2b, 0x05),
];

const WARM: [Color; 5] = [
    Color::from_rgb8(0x94, 0x00, 0x31),
    Color::from_rgb8(0xc4, 0x33, 0x43),
    Color::from_rgb8(0xdc, 0x54, 0x29),
    Color::from_rgb8(0xff, 0x82, 0x1d),
    Color::from_rgb8(0xff, 0xaf, 0x55),
];

const COOL: [Color; 5] = [
    Color::from_rgb8(0x27, 0x46, 0xb9),
    Color::from_rgb8(0x0b, 0x69, 0xd4),
    Color::from_rgb8(0x27, 0x94, 0xdb),
    Color::from_rgb8(0x31, 0xbb, 0x76),
    Color::from_rgb8(0x60, 0xe8, 0x3b),
];

const RED: [Color; 5] = [
    Color::from_rgb8(0xfc, 0xae, 0x91),
    Color::from_rgb8(0xfb, 0x6a, 0x4a),
    Color::from_rgb8(0xde, 0x2d, 0x26),
    Color::from_rgb8(0xa5, 0x0f, 0x15),
    Color::from_rgb8(0x75, 0x0b, 0x0e),
];

const GREEN: [Color; 5] = [
    Color::from_rgb8(0x35, 0x47, 0x22),
    Color::from_rgb8(0x46, 0x66, 0x31),
    Color::from_rgb8(0x64, 0x91, 0x46),
    Color::from_rgb8(0x8a, 0xb2, 0x5c),
    Color::from_rgb8(0xa9, 0xc9, 0x7e),
];

const BLUE: [Color; 5] = [
    Color::from_rgb8(0x00, 0x2c, 0x61),
    Color::from_rgb8(0x00, 0x4b, 0x8f),
    Color::from_rgb8(0x00, 0x6b, 0xc9),
    Color::from_rgb8(0x37, 0x95, 0xe5),
    Color::from_rgb8(0x65, 0xb4, 0xf4),
];

/// A cyclic palette used for default series fills.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ColorScale {
    /// Named CSS colors (cornflower blue, orange, sea green, ...).
    #[default]
    Default,
    /// Four greys from light to dark.
    Greyscale,
    /// Ten distinct hues.
    Qualitative,
    /// Green through red.
    Heatmap,
    /// Reds and oranges.
    Warm,
    /// Blues and greens.
    Cool,
    /// Shades of red.
    Red,
    /// Shades of green.
    Green,
    /// Shades of blue.
    Blue,
    /// Caller-supplied colors. An empty list falls back to [`ColorScale::Default`].
    Custom(Vec<Color>),
}

impl ColorScale {
    /// Returns the palette colors.
    pub fn colors(&self) -> &[Color] {
        match self {
            Self::Default => &DEFAULT,
            Self::Greyscale => &GREYSCALE,
            Self::Qualitative => &QUALITATIVE,
            Self::Heatmap => &HEATMAP,
            Self::Warm => &WARM,
            Self::Cool => &COOL,
            Self::Red => &RED,
            Self::Green => &GREEN,
            Self::Blue => &BLUE,
            Self::Custom(colors) if colors.is_empty() => &DEFAULT,
            Self::Custom(colors) => colors,
        }
    }

    /// Returns the color for series `index`, repeating the palette as needed.
    pub fn color(&self, index: usize) -> Color {
        let colors = self.colors();
        colors[index % colors.len()]
    }
}
