//! SVG geometry for the suggested chart.
//!
//! `plot` turns a [`ChartSuggestion`] into coordinates inside a
//! `width` x `height` viewBox. Bars and line points are scaled against the
//! largest value, with negative values clamped to the baseline. Pie slices are
//! proportional to the positive values only.

use crate::model::analysis::{ChartKind, ChartPoint, ChartSuggestion};
use std::f64::consts::{PI, TAU};

/// Slice colors, cycled when there are more slices than entries.
pub const PALETTE: [&str; 5] = ["#0ea5e9", "#6366f1", "#a855f7", "#ec4899", "#f97316"];
/// Fill for bars and stroke for the line.
pub const ACCENT: &str = "#3b82f6";

const MARGIN_LEFT: f64 = 44.0;
const MARGIN_RIGHT: f64 = 8.0;
const MARGIN_TOP: f64 = 8.0;
const MARGIN_BOTTOM: f64 = 28.0;
const TICK_COUNT: usize = 4;
const BAR_FILL_RATIO: f64 = 0.7;

#[derive(Debug, Clone, PartialEq)]
pub enum ChartPlot {
    Bars { axis: Axis, bars: Vec<Bar> },
    Line { axis: Axis, points: Vec<LinePoint>, path: String },
    Pie { slices: Vec<Slice> },
    Unsupported { chart_type: String },
}

impl ChartPlot {
    pub fn is_empty(&self) -> bool {
        match self {
            ChartPlot::Bars { bars, .. } => bars.is_empty(),
            ChartPlot::Line { points, .. } => points.is_empty(),
            ChartPlot::Pie { slices } => slices.is_empty(),
            ChartPlot::Unsupported { .. } => false,
        }
    }

    /// Legend row shown under the chart: the single `value` series for bar
    /// and line charts, one entry per slice for pie charts.
    pub fn legend(&self) -> Vec<LegendEntry> {
        match self {
            ChartPlot::Bars { .. } | ChartPlot::Line { .. } if !self.is_empty() => {
                vec![LegendEntry {
                    label: SERIES_LABEL.to_string(),
                    color: ACCENT,
                }]
            }
            ChartPlot::Pie { slices } => slices
                .iter()
                .map(|slice| LegendEntry {
                    label: slice.label.clone(),
                    color: slice.color,
                })
                .collect(),
            _ => Vec::new(),
        }
    }
}

const SERIES_LABEL: &str = "value";

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: &'static str,
}

/// Value axis shared by bar and line charts.
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    pub left: f64,
    pub right: f64,
    pub baseline_y: f64,
    pub ticks: Vec<Tick>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub y: f64,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Horizontal centre, used for the category label.
    pub center_x: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LinePoint {
    pub label: String,
    pub value: f64,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub label: String,
    pub value: f64,
    /// Share of the total, rounded to whole percent.
    pub percent: u32,
    /// SVG path data for the wedge.
    pub path: String,
    pub color: &'static str,
    pub label_x: f64,
    pub label_y: f64,
}

/// Lays out `suggestion` in a `width` x `height` viewBox.
pub fn plot(suggestion: &ChartSuggestion, width: f64, height: f64) -> ChartPlot {
    match &suggestion.chart_type {
        ChartKind::Bar => plot_bars(&suggestion.data, width, height),
        ChartKind::Line => plot_line(&suggestion.data, width, height),
        ChartKind::Pie => plot_pie(&suggestion.data, width, height),
        ChartKind::Unsupported(raw) => ChartPlot::Unsupported {
            chart_type: raw.clone(),
        },
    }
}

struct Frame {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
    max: f64,
}

impl Frame {
    fn new(data: &[ChartPoint], width: f64, height: f64) -> Self {
        let max = data.iter().map(|p| p.value).fold(0.0_f64, f64::max);
        Self {
            left: MARGIN_LEFT,
            top: MARGIN_TOP,
            width: (width - MARGIN_LEFT - MARGIN_RIGHT).max(0.0),
            height: (height - MARGIN_TOP - MARGIN_BOTTOM).max(0.0),
            // all-zero or all-negative data still gets a usable scale
            max: if max > 0.0 { max } else { 1.0 },
        }
    }

    fn baseline(&self) -> f64 {
        self.top + self.height
    }

    fn scaled(&self, value: f64) -> f64 {
        value.max(0.0) / self.max * self.height
    }

    fn slot(&self, count: usize) -> f64 {
        self.width / count.max(1) as f64
    }

    fn axis(&self) -> Axis {
        let ticks = (0..=TICK_COUNT)
            .map(|i| {
                let value = self.max * i as f64 / TICK_COUNT as f64;
                Tick {
                    y: self.baseline() - self.scaled(value),
                    value,
                }
            })
            .collect();
        Axis {
            left: self.left,
            right: self.left + self.width,
            baseline_y: self.baseline(),
            ticks,
        }
    }
}

fn plot_bars(data: &[ChartPoint], width: f64, height: f64) -> ChartPlot {
    let frame = Frame::new(data, width, height);
    let slot = frame.slot(data.len());
    let bar_width = slot * BAR_FILL_RATIO;

    let bars = data
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let bar_height = frame.scaled(point.value);
            let slot_left = frame.left + slot * i as f64;
            Bar {
                label: point.name.clone(),
                value: point.value,
                x: slot_left + (slot - bar_width) / 2.0,
                y: frame.baseline() - bar_height,
                width: bar_width,
                height: bar_height,
                center_x: slot_left + slot / 2.0,
            }
        })
        .collect();

    ChartPlot::Bars {
        axis: frame.axis(),
        bars,
    }
}

fn plot_line(data: &[ChartPoint], width: f64, height: f64) -> ChartPlot {
    let frame = Frame::new(data, width, height);
    let slot = frame.slot(data.len());

    let points: Vec<LinePoint> = data
        .iter()
        .enumerate()
        .map(|(i, point)| LinePoint {
            label: point.name.clone(),
            value: point.value,
            x: frame.left + slot * (i as f64 + 0.5),
            y: frame.baseline() - frame.scaled(point.value),
        })
        .collect();

    let path = points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let command = if i == 0 { 'M' } else { 'L' };
            format!("{} {:.1} {:.1}", command, p.x, p.y)
        })
        .collect::<Vec<_>>()
        .join(" ");

    ChartPlot::Line {
        axis: frame.axis(),
        points,
        path,
    }
}

fn plot_pie(data: &[ChartPoint], width: f64, height: f64) -> ChartPlot {
    let total: f64 = data.iter().map(|p| p.value.max(0.0)).sum();
    if total <= 0.0 {
        return ChartPlot::Pie { slices: Vec::new() };
    }

    let cx = width / 2.0;
    let cy = height / 2.0;
    let radius = width.min(height) / 2.0 * 0.8;
    // start at twelve o'clock, run clockwise
    let mut angle = -PI / 2.0;

    let slices = data
        .iter()
        .filter(|p| p.value > 0.0)
        .enumerate()
        .map(|(i, point)| {
            let fraction = point.value / total;
            let sweep = fraction * TAU;
            let start = angle;
            let end = angle + sweep;
            angle = end;

            let mid = start + sweep / 2.0;
            Slice {
                label: point.name.clone(),
                value: point.value,
                percent: (fraction * 100.0).round() as u32,
                path: wedge_path(cx, cy, radius, start, end),
                color: PALETTE[i % PALETTE.len()],
                label_x: cx + radius * 0.6 * mid.cos(),
                label_y: cy + radius * 0.6 * mid.sin(),
            }
        })
        .collect();

    ChartPlot::Pie { slices }
}

fn wedge_path(cx: f64, cy: f64, r: f64, start: f64, end: f64) -> String {
    let sweep = end - start;
    if sweep >= TAU - 1e-9 {
        // an arc cannot start and end on the same point; draw two halves
        return format!(
            "M {:.2} {:.2} A {r:.2} {r:.2} 0 1 1 {:.2} {:.2} A {r:.2} {r:.2} 0 1 1 {:.2} {:.2} Z",
            cx,
            cy - r,
            cx,
            cy + r,
            cx,
            cy - r,
            r = r
        );
    }
    let (x1, y1) = (cx + r * start.cos(), cy + r * start.sin());
    let (x2, y2) = (cx + r * end.cos(), cy + r * end.sin());
    let large_arc = if sweep > PI { 1 } else { 0 };
    format!(
        "M {:.2} {:.2} L {:.2} {:.2} A {r:.2} {r:.2} 0 {} 1 {:.2} {:.2} Z",
        cx,
        cy,
        x1,
        y1,
        large_arc,
        x2,
        y2,
        r = r
    )
}
