//! View rendering for the analysis workbench.
//!
//! Exactly one screen is shown per session phase: the upload prompt when
//! idle, the loader while a cycle runs, the dashboard on success, and a
//! single-line error banner on failure. The header's reset button is shown
//! in every phase except idle.

use common::session::AnalysisPhase;
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::AnalysisWorkbench;
use crate::components::dashboard::AnalysisDashboard;
use crate::components::layout::{AppHeader, Loader};
use crate::components::upload::FileUpload;

pub fn view(component: &AnalysisWorkbench, ctx: &Context<AnalysisWorkbench>) -> Html {
    let link = ctx.link();
    let phase = component.session.phase();

    html! {
        <>
            <AppHeader
                show_reset={!phase.is_idle()}
                on_reset={link.callback(|_| Msg::Reset)}
            />
            <main class="container">
                { build_phase(phase, link) }
            </main>
        </>
    }
}

fn build_phase(phase: &AnalysisPhase, link: &Scope<AnalysisWorkbench>) -> Html {
    match phase {
        AnalysisPhase::Idle => html! {
            <FileUpload on_file={link.callback(Msg::Submit)} />
        },
        AnalysisPhase::Loading { .. } => html! { <Loader /> },
        AnalysisPhase::Success {
            file_name,
            result,
            preview,
        } => html! {
            <AnalysisDashboard
                result={result.clone()}
                preview={preview.clone()}
                file_name={AttrValue::from(file_name.clone())}
            />
        },
        AnalysisPhase::Failure { message, .. } => build_error_banner(message),
    }
}

fn build_error_banner(message: &str) -> Html {
    html! {
        <div class="error-banner" data-testid="error-message" role="alert">
            <p><strong>{"Error: "}</strong>{ message.to_string() }</p>
        </div>
    }
}
