//! Dashboard shown after a successful analysis: summary, suggested chart,
//! data preview, anomalies and root causes.
//!
//! Anomalies and root causes are rendered as two independent lists in the
//! order the model returned them; no attempt is made to pair them up.

mod chart;
mod result_card;
mod table;

use chart::AnalysisChart;
use common::model::analysis::{AnalysisResult, Anomaly, RootCause};
use common::model::preview::CsvPreview;
use common::present::SeverityTone;
use result_card::ResultCard;
use table::DataTable;
use yew::{classes, html, AttrValue, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct AnalysisDashboardProps {
    pub result: AnalysisResult,
    pub preview: CsvPreview,
    pub file_name: AttrValue,
}

pub struct AnalysisDashboard;

impl Component for AnalysisDashboard {
    type Message = ();
    type Properties = AnalysisDashboardProps;

    fn create(_ctx: &Context<Self>) -> Self {
        AnalysisDashboard
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let result = &props.result;
        let file_name = if props.file_name.is_empty() {
            "Uploaded Data"
        } else {
            props.file_name.as_str()
        };

        html! {
            <div class="dashboard" data-testid="analysis-dashboard">
                <ResultCard title="Executive Summary" icon="checklist">
                    <p>{ result.summary.clone() }</p>
                </ResultCard>

                <div class="dashboard-grid">
                    if let Some(suggestion) = &result.chart_suggestion {
                        <ResultCard title="Visualized Trend" icon="bar_chart">
                            <AnalysisChart suggestion={suggestion.clone()} />
                        </ResultCard>
                    }
                    <ResultCard title={format!("Data Preview: {}", file_name)} icon="table_chart">
                        <DataTable preview={props.preview.clone()} />
                    </ResultCard>
                </div>

                <ResultCard title="Detected Anomalies" icon="warning">
                    <div class="stack">
                        { for result.anomalies.iter().map(build_anomaly) }
                    </div>
                </ResultCard>

                <ResultCard title="Root Cause Analysis & Recommendations" icon="help_outline">
                    <div class="stack">
                        { for result.root_causes.iter().map(build_root_cause) }
                    </div>
                </ResultCard>
            </div>
        }
    }
}

fn build_anomaly(anomaly: &Anomaly) -> Html {
    let tone = SeverityTone::from(&anomaly.severity);
    html! {
        <div class={classes!("anomaly", tone.css_class())}>
            <div class="anomaly-head">
                <p class="anomaly-title">{ anomaly.description.clone() }</p>
                <span class="severity-badge">{ anomaly.severity.label().to_string() }</span>
            </div>
            <p class="anomaly-implication">
                <strong>{"Implication: "}</strong>{ anomaly.implication.clone() }
            </p>
        </div>
    }
}

fn build_root_cause(cause: &RootCause) -> Html {
    html! {
        <div class="root-cause">
            <p class="root-cause-title">{ cause.anomaly.clone() }</p>
            <p><strong>{"Suspected Cause: "}</strong>{ cause.cause.clone() }</p>
            <p><strong>{"Recommendation: "}</strong>{ cause.recommendation.clone() }</p>
        </div>
    }
}
