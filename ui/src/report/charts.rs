//! SVG chart primitives for the report dashboard.
//!
//! Geometry is computed by pure helpers so the gap semantics of the trend
//! series can be asserted in tests: a point with an absent `y` splits the line
//! into separate segments and is never drawn at zero.

use dioxus::prelude::*;

use crate::api::{DistributionSlice, TrendPoint};
use crate::core::format;

const CHART_WIDTH: f64 = 640.0;
const CHART_HEIGHT: f64 = 240.0;
const CHART_PAD: f64 = 18.0;

/// A drawable piece of the trend series: a polyline for runs of two or more
/// consecutive present values, a lone dot for an isolated one.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum TrendMark {
    Line { points: String },
    Dot { cx: f64, cy: f64 },
}

/// Splits the series into contiguous runs of present values, in order. Absent
/// `y` values contribute nothing; they only terminate the current run.
pub(crate) fn present_runs(points: &[TrendPoint]) -> Vec<Vec<(f64, f64)>> {
    let mut runs = Vec::new();
    let mut current: Vec<(f64, f64)> = Vec::new();
    for point in points {
        match point.y {
            Some(y) => current.push((point.x, y)),
            None => {
                if !current.is_empty() {
                    runs.push(std::mem::take(&mut current));
                }
            }
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}

fn domain(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for value in values {
        min = min.min(value);
        max = max.max(value);
    }
    if min.is_finite() && max.is_finite() {
        Some((min, max))
    } else {
        None
    }
}

fn scale(value: f64, min: f64, max: f64, out_lo: f64, out_hi: f64) -> f64 {
    if (max - min).abs() < f64::EPSILON {
        return (out_lo + out_hi) / 2.0;
    }
    out_lo + (value - min) / (max - min) * (out_hi - out_lo)
}

/// Projects the present runs into pixel space. Returns no marks when the
/// series holds no present value at all.
pub(crate) fn trend_marks(
    points: &[TrendPoint],
    width: f64,
    height: f64,
    pad: f64,
) -> Vec<TrendMark> {
    let runs = present_runs(points);
    let (x_min, x_max) = match domain(points.iter().map(|p| p.x)) {
        Some(domain) => domain,
        None => return Vec::new(),
    };
    let (y_min, y_max) = match domain(runs.iter().flatten().map(|&(_, y)| y)) {
        Some(domain) => domain,
        None => return Vec::new(),
    };

    runs.iter()
        .map(|run| {
            let projected: Vec<(f64, f64)> = run
                .iter()
                .map(|&(x, y)| {
                    (
                        scale(x, x_min, x_max, pad, width - pad),
                        // SVG y grows downward.
                        scale(y, y_min, y_max, height - pad, pad),
                    )
                })
                .collect();
            if let [(cx, cy)] = projected[..] {
                TrendMark::Dot { cx, cy }
            } else {
                let points = projected
                    .iter()
                    .map(|(x, y)| format!("{x:.1},{y:.1}"))
                    .collect::<Vec<_>>()
                    .join(" ");
                TrendMark::Line { points }
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub label: String,
}

/// Lays the distribution out as equal-width bars scaled against the largest
/// value. Category labels travel on the rect for hover titles only; the axis
/// itself stays unlabelled because labels are not guaranteed short.
pub(crate) fn bar_rects(
    slices: &[DistributionSlice],
    width: f64,
    height: f64,
    pad: f64,
) -> Vec<BarRect> {
    let max = slices.iter().map(|slice| slice.value).fold(0.0, f64::max);
    if slices.is_empty() || max <= 0.0 {
        return Vec::new();
    }

    let inner_width = width - 2.0 * pad;
    let inner_height = height - 2.0 * pad;
    let step = inner_width / slices.len() as f64;
    let bar_width = (step * 0.7).max(1.0);

    slices
        .iter()
        .enumerate()
        .map(|(idx, slice)| {
            let bar_height = inner_height * (slice.value / max);
            BarRect {
                x: pad + idx as f64 * step + (step - bar_width) / 2.0,
                y: height - pad - bar_height,
                width: bar_width,
                height: bar_height,
                label: slice.label.clone(),
            }
        })
        .collect()
}

#[component]
pub fn TrendChart(points: Vec<TrendPoint>) -> Element {
    let marks = trend_marks(&points, CHART_WIDTH, CHART_HEIGHT, CHART_PAD);
    let mut lines: Vec<String> = Vec::new();
    let mut dots: Vec<(f64, f64)> = Vec::new();
    for mark in marks {
        match mark {
            TrendMark::Line { points } => lines.push(points),
            TrendMark::Dot { cx, cy } => dots.push((cx, cy)),
        }
    }
    let y_max = present_runs(&points)
        .iter()
        .flatten()
        .map(|&(_, y)| y)
        .fold(f64::NEG_INFINITY, f64::max);
    let y_max_label = if y_max.is_finite() {
        format::format_axis(y_max)
    } else {
        String::new()
    };
    let axis_y = CHART_HEIGHT - CHART_PAD;
    let axis_x_end = CHART_WIDTH - CHART_PAD;
    let tick_y = CHART_PAD - 4.0;

    rsx! {
        svg {
            class: "chart chart--trend",
            view_box: "0 0 {CHART_WIDTH} {CHART_HEIGHT}",
            preserve_aspect_ratio: "none",
            role: "img",
            line {
                class: "chart__axis",
                x1: "{CHART_PAD}",
                y1: "{axis_y}",
                x2: "{axis_x_end}",
                y2: "{axis_y}",
            }
            if !y_max_label.is_empty() {
                text {
                    class: "chart__tick",
                    x: "{CHART_PAD}",
                    y: "{tick_y}",
                    "{y_max_label}"
                }
            }
            for line in lines.iter() {
                polyline {
                    class: "chart__line",
                    points: "{line}",
                    fill: "none",
                }
            }
            for (cx, cy) in dots.iter() {
                circle {
                    class: "chart__dot",
                    cx: "{cx}",
                    cy: "{cy}",
                    r: "3",
                }
            }
        }
    }
}

#[component]
pub fn DistributionChart(slices: Vec<DistributionSlice>) -> Element {
    let bars = bar_rects(&slices, CHART_WIDTH, CHART_HEIGHT, CHART_PAD);
    let axis_y = CHART_HEIGHT - CHART_PAD;
    let axis_x_end = CHART_WIDTH - CHART_PAD;

    rsx! {
        svg {
            class: "chart chart--distribution",
            view_box: "0 0 {CHART_WIDTH} {CHART_HEIGHT}",
            preserve_aspect_ratio: "none",
            role: "img",
            line {
                class: "chart__axis",
                x1: "{CHART_PAD}",
                y1: "{axis_y}",
                x2: "{axis_x_end}",
                y2: "{axis_y}",
            }
            for bar in bars.iter() {
                rect {
                    class: "chart__bar",
                    x: "{bar.x}",
                    y: "{bar.y}",
                    width: "{bar.width}",
                    height: "{bar.height}",
                    rx: "3",
                    title { "{bar.label}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(x: f64, y: Option<f64>) -> TrendPoint {
        TrendPoint { x, y }
    }

    #[test]
    fn absent_values_split_the_line_into_segments() {
        let points = vec![
            point(0.0, Some(10.0)),
            point(1.0, Some(12.0)),
            point(2.0, None),
            point(3.0, Some(9.0)),
            point(4.0, Some(11.0)),
        ];

        let runs = present_runs(&points);
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0], vec![(0.0, 10.0), (1.0, 12.0)]);
        assert_eq!(runs[1], vec![(3.0, 9.0), (4.0, 11.0)]);

        let marks = trend_marks(&points, 640.0, 240.0, 18.0);
        assert_eq!(marks.len(), 2);
        assert!(marks
            .iter()
            .all(|mark| matches!(mark, TrendMark::Line { .. })));
    }

    #[test]
    fn a_gap_is_not_rendered_as_zero() {
        let points = vec![
            point(0.0, Some(5.0)),
            point(1.0, None),
            point(2.0, Some(5.0)),
        ];

        // Every projected vertex sits at the y of value 5.0; a zero would land
        // at a different pixel row and would show up as a third coordinate.
        let marks = trend_marks(&points, 640.0, 240.0, 18.0);
        let dot_ys: Vec<f64> = marks
            .iter()
            .map(|mark| match mark {
                TrendMark::Dot { cy, .. } => *cy,
                TrendMark::Line { .. } => panic!("single points should be dots"),
            })
            .collect();
        assert_eq!(dot_ys.len(), 2);
        assert_eq!(dot_ys[0], dot_ys[1]);
    }

    #[test]
    fn all_absent_series_yields_no_marks() {
        let points = vec![point(0.0, None), point(1.0, None)];
        assert!(trend_marks(&points, 640.0, 240.0, 18.0).is_empty());
    }

    #[test]
    fn isolated_present_value_becomes_a_dot() {
        let points = vec![
            point(0.0, None),
            point(1.0, Some(3.0)),
            point(2.0, None),
            point(3.0, Some(1.0)),
            point(4.0, Some(2.0)),
        ];

        let marks = trend_marks(&points, 640.0, 240.0, 18.0);
        assert_eq!(marks.len(), 2);
        assert!(matches!(marks[0], TrendMark::Dot { .. }));
        assert!(matches!(marks[1], TrendMark::Line { .. }));
    }

    #[test]
    fn bars_scale_against_the_maximum() {
        let slices = vec![
            DistributionSlice {
                label: "North".to_string(),
                value: 40.0,
            },
            DistributionSlice {
                label: "South".to_string(),
                value: 20.0,
            },
        ];

        let bars = bar_rects(&slices, 640.0, 240.0, 18.0);
        assert_eq!(bars.len(), 2);
        assert!((bars[0].height - 2.0 * bars[1].height).abs() < 1e-9);
        assert_eq!(bars[0].label, "North");
        // Taller bar starts higher up (smaller y).
        assert!(bars[0].y < bars[1].y);
    }

    #[test]
    fn empty_or_zero_distribution_draws_nothing() {
        assert!(bar_rects(&[], 640.0, 240.0, 18.0).is_empty());
        let zeros = vec![DistributionSlice {
            label: "None".to_string(),
            value: 0.0,
        }];
        assert!(bar_rects(&zeros, 640.0, 240.0, 18.0).is_empty());
    }
}
