// Copyright 2025 the VizBar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG dump of a computed bar layout.

use std::fmt::Write as _;

use kurbo::Rect;
use peniko::Color;
use vizbar_layout::{LayoutResult, TextAnchor, VerticalAnchor};

/// Renders `layout` as a standalone SVG document.
pub(crate) fn render(layout: &LayoutResult, font_size: f64) -> String {
    let size = layout.size;
    let mut out = String::new();

    out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
    let _ = writeln!(
        out,
        r#"viewBox="0 0 {w} {h}" width="{w}" height="{h}">"#,
        w = size.width,
        h = size.height,
    );
    let _ = writeln!(
        out,
        r##"<rect x="0" y="0" width="{}" height="{}" fill="none" stroke="#000"/>"##,
        size.width, size.height,
    );

    write_baseline(&mut out, layout);

    for (series, index, rect, style) in layout.bar_rects() {
        let _ = write!(
            out,
            r#"<rect data-series="{series}" data-index="{index}" x="{}" y="{}" width="{}" height="{}""#,
            rect.x0,
            rect.y0,
            rect.width(),
            rect.height(),
        );
        write_paint_attr(&mut out, "fill", style.fill, style.opacity);
        out.push_str("/>\n");
    }

    for label in &layout.label_placements {
        let Some(text) = label.label.text() else {
            continue;
        };
        let anchor = match label.text_anchor {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        };
        let baseline = match label.vertical_anchor {
            VerticalAnchor::Start => "hanging",
            VerticalAnchor::Middle => "middle",
            VerticalAnchor::End => "alphabetic",
        };
        let _ = writeln!(
            out,
            r#"<text x="{}" y="{}" font-size="{font_size}" text-anchor="{anchor}" dominant-baseline="{baseline}">{}</text>"#,
            label.position.x,
            label.position.y,
            escape_xml(text),
        );
    }

    out.push_str("</svg>\n");
    out
}

/// Draws the zero line of the value axis when it lies inside the plot.
fn write_baseline(out: &mut String, layout: &LayoutResult) {
    let domain = layout.domain.y;
    if !domain.contains(0.0) {
        return;
    }
    let at = layout.scale.y.map(0.0);
    let (i0, i1) = layout.range.x.as_tuple();
    let line = if layout.horizontal {
        Rect::new(at, i0, at, i1)
    } else {
        Rect::new(i0, at, i1, at)
    }
    .abs();
    let _ = writeln!(
        out,
        r##"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="#888" stroke-width="1"/>"##,
        line.x0, line.y0, line.x1, line.y1,
    );
}

fn svg_paint(color: Color, opacity: f32) -> (String, Option<f64>) {
    let rgba = color.to_rgba8();
    let fill = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
    let alpha = f64::from(rgba.a) / 255.0 * f64::from(opacity);
    let fill_opacity = if alpha >= 1.0 { None } else { Some(alpha) };
    (fill, fill_opacity)
}

fn write_paint_attr(out: &mut String, name: &str, color: Color, opacity: f32) {
    let (value, opacity) = svg_paint(color, opacity);
    let _ = write!(out, r#" {name}="{value}""#);
    if let Some(o) = opacity {
        let _ = write!(out, r#" {name}-opacity="{o}""#);
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
