//! Chart renderers. Both pies draw the same [`Stat`] slices; the radar overlays two
//! characters' scores.

use super::html_escape;
use marvel_core::{RadarSeries, Stat, RADAR_AXES, RADAR_MAX};
use std::f64::consts::{FRAC_PI_2, TAU};

/// Slice colours, taken in slice order.
const PALETTE: [&str; 6] = ["#d53e4f", "#fc8d59", "#fee08b", "#e6f598", "#99d594", "#3288bd"];

pub const NO_CAPACITIES: &str = "No capacities available.";
pub const COMPARE_PLACEHOLDER: &str = "Please select two characters with available stats to compare.";

// Donut geometry.
const DIAMETER: f64 = 100.0;
const MARGIN: f64 = 10.0;
const DONUT_SIZE: f64 = 2.0 * DIAMETER + 2.0 * MARGIN;

// Radar geometry.
const RADAR_SIZE: f64 = 500.0;
const RADAR_MARGIN: f64 = 60.0;
const GRID_LEVELS: usize = 5;

fn color(i: usize) -> &'static str {
    PALETTE[i % PALETTE.len()]
}

/// Slice boundaries as fractions of the whole, `(start, end)`; empty when nothing to draw.
fn fractions(data: &[Stat]) -> Vec<(f64, f64)> {
    let total: f64 = data.iter().map(|s| s.value.max(0.0)).sum();
    if total <= 0.0 {
        return Vec::new();
    }
    let mut acc = 0.0;
    data.iter()
        .map(|s| {
            let start = acc;
            acc += s.value.max(0.0) / total;
            (start, acc)
        })
        .collect()
}

fn point(radius: f64, angle: f64) -> (f64, f64) {
    (radius * angle.cos(), radius * angle.sin())
}

/// Ring segment between two angles (radians, 0 at 12 o'clock, clockwise).
fn ring_segment(start: f64, end: f64, inner: f64, outer: f64) -> String {
    if end - start >= TAU - 1e-9 {
        // A full ring cannot be drawn as one arc; split it into halves.
        let mid = start + TAU / 2.0;
        return format!(
            "{}{}",
            ring_segment(start, mid, inner, outer),
            ring_segment(mid, end, inner, outer)
        );
    }
    let (a0, a1) = (start - FRAC_PI_2, end - FRAC_PI_2);
    let large = if end - start > TAU / 2.0 { 1 } else { 0 };
    let (ox0, oy0) = point(outer, a0);
    let (ox1, oy1) = point(outer, a1);
    let (ix1, iy1) = point(inner, a1);
    let (ix0, iy0) = point(inner, a0);
    format!(
        "M{:.2},{:.2}A{r},{r},0,{l},1,{:.2},{:.2}L{:.2},{:.2}A{ir},{ir},0,{l},0,{:.2},{:.2}Z",
        ox0,
        oy0,
        ox1,
        oy1,
        ix1,
        iy1,
        ix0,
        iy0,
        r = outer,
        ir = inner,
        l = large
    )
}

fn legend(data: &[Stat]) -> String {
    let items: String = data
        .iter()
        .enumerate()
        .map(|(i, s)| {
            format!(
                r#"<li><span class="swatch" style="background:{}"></span>{}: {}</li>"#,
                color(i),
                s.name,
                s.value
            )
        })
        .collect();
    format!(r#"<ul class="chart-legend">{}</ul>"#, items)
}

/// SVG donut with one arc path per slice.
pub fn svg_pie(data: &[Stat]) -> String {
    let slices = fractions(data);
    if slices.is_empty() {
        return format!(r#"<p class="chart-empty">{}</p>"#, NO_CAPACITIES);
    }
    let radius = DONUT_SIZE / 2.0;
    let (inner, outer) = (radius * 0.67, radius - 1.0);
    let paths: String = data
        .iter()
        .zip(&slices)
        .enumerate()
        .filter(|(_, (_, (start, end)))| end > start)
        .map(|(i, (stat, (start, end)))| {
            format!(
                r#"<path fill="{}" d="{}"><title>{}: {}</title></path>"#,
                color(i),
                ring_segment(start * TAU, end * TAU, inner, outer),
                stat.name,
                stat.value
            )
        })
        .collect();
    format!(
        r#"<div class="pie-chart svg-pie"><svg width="{s}" height="{s}" viewBox="{o} {o} {s} {s}" style="max-width: 100%; height: auto;">{paths}</svg>{legend}</div>"#,
        s = DONUT_SIZE,
        o = -radius,
        paths = paths,
        legend = legend(data),
    )
}

/// CSS conic-gradient pie.
pub fn conic_pie(data: &[Stat]) -> String {
    let slices = fractions(data);
    if slices.is_empty() {
        return format!(r#"<p class="chart-empty">{}</p>"#, NO_CAPACITIES);
    }
    let stops: Vec<String> = slices
        .iter()
        .enumerate()
        .map(|(i, (start, end))| format!("{} {:.2}% {:.2}%", color(i), start * 100.0, end * 100.0))
        .collect();
    format!(
        r#"<div class="pie-chart conic-pie"><div class="pie" role="img" aria-label="Capacities" style="width:{s}px;height:{s}px;border-radius:50%;background:conic-gradient({stops})"></div>{legend}</div>"#,
        s = DONUT_SIZE,
        stops = stops.join(", "),
        legend = legend(data),
    )
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// SVG radar with two overlaid series.
pub fn radar(series: &[RadarSeries; 2]) -> String {
    let radius = RADAR_SIZE / 2.0 - RADAR_MARGIN;
    let scale = |v: f64| radius * v / RADAR_MAX;
    let slice = TAU / RADAR_AXES.len() as f64;
    let angle = |i: usize| slice * i as f64 - FRAC_PI_2;

    let grid: String = (1..=GRID_LEVELS)
        .rev()
        .map(|level| {
            format!(
                r##"<circle class="grid-level" r="{:.2}" fill="#CDCDCD" fill-opacity="0.1" stroke="#CDCDCD"/>"##,
                radius / GRID_LEVELS as f64 * level as f64
            )
        })
        .collect();

    let axes: String = RADAR_AXES
        .iter()
        .enumerate()
        .map(|(i, attr)| {
            let (x, y) = point(scale(RADAR_MAX), angle(i));
            let (lx, ly) = point(scale(RADAR_MAX + 1.0), angle(i));
            format!(
                r#"<line x1="0" y1="0" x2="{:.2}" y2="{:.2}" stroke="grey" stroke-width="1"/><text class="legend" x="{:.2}" y="{:.2}" dy="0.35em" text-anchor="middle" font-size="11">{}</text>"#,
                x,
                y,
                lx,
                ly,
                capitalize(attr.key())
            )
        })
        .collect();

    let areas: String = series
        .iter()
        .map(|s| {
            let points: Vec<String> = s
                .values
                .iter()
                .enumerate()
                .map(|(i, v)| {
                    let (x, y) = point(scale(*v), angle(i));
                    format!("{:.2},{:.2}", x, y)
                })
                .collect();
            format!(
                r#"<polygon class="radar-area" points="{}" fill="{c}" fill-opacity="0.5" stroke="{c}" stroke-width="2"/>"#,
                points.join(" "),
                c = s.color
            )
        })
        .collect();

    let legend: String = series
        .iter()
        .enumerate()
        .map(|(i, s)| {
            format!(
                r#"<g transform="translate(-50, {:.0})"><rect width="18" height="18" fill="{}"/><text x="24" y="9" dy="0.35em">{}</text></g>"#,
                RADAR_SIZE / 2.0 - 20.0 - 20.0 * i as f64,
                s.color,
                html_escape(&s.name)
            )
        })
        .collect();

    format!(
        r#"<svg class="radar-chart" width="{s}" height="{s}" viewBox="{o} {o} {s} {s}"><g class="grid">{grid}{axes}</g>{areas}<g class="legend-container">{legend}</g></svg>"#,
        s = RADAR_SIZE,
        o = -RADAR_SIZE / 2.0,
        grid = grid,
        axes = axes,
        areas = areas,
        legend = legend,
    )
}
