//! Inline SVG rendering of the suggested chart.
//!
//! Geometry comes from `common::present::chart::plot`; this module only maps
//! it to SVG elements. Unknown chart types render a one-line message.

use common::model::analysis::ChartSuggestion;
use common::present::chart::{plot, Axis, Bar, ChartPlot, LegendEntry, LinePoint, Slice, ACCENT};
use num_format::{Locale, ToFormattedString};
use yew::{html, Component, Context, Html, Properties};

const WIDTH: f64 = 480.0;
const HEIGHT: f64 = 260.0;

#[derive(Properties, PartialEq)]
pub struct AnalysisChartProps {
    pub suggestion: ChartSuggestion,
}

pub struct AnalysisChart;

impl Component for AnalysisChart {
    type Message = ();
    type Properties = AnalysisChartProps;

    fn create(_ctx: &Context<Self>) -> Self {
        AnalysisChart
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let suggestion = &ctx.props().suggestion;
        let plot = plot(suggestion, WIDTH, HEIGHT);

        html! {
            <div class="chart">
                <h4 class="chart-title">{ suggestion.title.clone() }</h4>
                <p class="chart-description">{ suggestion.description.clone() }</p>
                { build_plot(&plot) }
            </div>
        }
    }
}

fn build_plot(plot: &ChartPlot) -> Html {
    if plot.is_empty() {
        return html! { <p class="chart-fallback">{"No chart data available."}</p> };
    }
    let body = match plot {
        ChartPlot::Bars { axis, bars } => html! {
            <>
                { build_axis(axis) }
                { for bars.iter().map(build_bar) }
            </>
        },
        ChartPlot::Line { axis, points, path } => html! {
            <>
                { build_axis(axis) }
                <path d={path.clone()} fill="none" stroke={ACCENT} stroke-width="2" />
                { for points.iter().map(|p| build_line_point(p, axis)) }
            </>
        },
        ChartPlot::Pie { slices } => html! {
            <>
                { for slices.iter().map(build_slice) }
            </>
        },
        ChartPlot::Unsupported { chart_type } => {
            return html! {
                <p class="chart-fallback">{ format!("Unsupported chart type: {}", chart_type) }</p>
            };
        }
    };

    html! {
        <>
            <svg
                class="chart-svg"
                viewBox={format!("0 0 {} {}", WIDTH, HEIGHT)}
                preserveAspectRatio="xMidYMid meet"
                role="img"
            >
                { body }
            </svg>
            <ul class="chart-legend">
                { for plot.legend().iter().map(build_legend_entry) }
            </ul>
        </>
    }
}

fn build_legend_entry(entry: &LegendEntry) -> Html {
    html! {
        <li>
            <span class="chart-legend-swatch" style={format!("background: {}", entry.color)}></span>
            { entry.label.clone() }
        </li>
    }
}

fn build_axis(axis: &Axis) -> Html {
    html! {
        <g class="chart-axis">
            { for axis.ticks.iter().map(|tick| html! {
                <>
                    <line
                        x1={axis.left.to_string()}
                        x2={axis.right.to_string()}
                        y1={tick.y.to_string()}
                        y2={tick.y.to_string()}
                        class="chart-grid"
                    />
                    <text
                        x={(axis.left - 6.0).to_string()}
                        y={(tick.y + 4.0).to_string()}
                        text-anchor="end"
                        class="chart-tick"
                    >
                        { format_value(tick.value) }
                    </text>
                </>
            }) }
        </g>
    }
}

fn build_bar(bar: &Bar) -> Html {
    html! {
        <g>
            <rect
                x={bar.x.to_string()}
                y={bar.y.to_string()}
                width={bar.width.to_string()}
                height={bar.height.to_string()}
                rx="4"
                fill={ACCENT}
            >
                <title>{ format!("{}: {}", bar.label, format_value(bar.value)) }</title>
            </rect>
            { build_category_label(&bar.label, bar.center_x, bar.y + bar.height) }
        </g>
    }
}

fn build_line_point(point: &LinePoint, axis: &Axis) -> Html {
    html! {
        <g>
            <circle cx={point.x.to_string()} cy={point.y.to_string()} r="4" fill={ACCENT}>
                <title>{ format!("{}: {}", point.label, format_value(point.value)) }</title>
            </circle>
            { build_category_label(&point.label, point.x, axis.baseline_y) }
        </g>
    }
}

fn build_category_label(label: &str, x: f64, baseline_y: f64) -> Html {
    html! {
        <text
            x={x.to_string()}
            y={(baseline_y + 16.0).to_string()}
            text-anchor="middle"
            class="chart-label"
        >
            { label.to_string() }
        </text>
    }
}

fn build_slice(slice: &Slice) -> Html {
    html! {
        <g>
            <path d={slice.path.clone()} fill={slice.color} stroke="#ffffff" stroke-width="1">
                <title>{ format!("{}: {}", slice.label, format_value(slice.value)) }</title>
            </path>
            <text
                x={slice.label_x.to_string()}
                y={slice.label_y.to_string()}
                text-anchor="middle"
                class="chart-slice-label"
            >
                { format!("{} {}%", slice.label, slice.percent) }
            </text>
        </g>
    }
}

/// Thousands separators for whole numbers, two decimals otherwise.
fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        (value as i64).to_formatted_string(&Locale::en)
    } else {
        format!("{:.2}", value)
    }
}
