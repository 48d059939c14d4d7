//! Update function for the analysis workbench.
//!
//! Every asynchronous continuation carries the `Ticket` it was started with;
//! the session decides whether it still applies. Stale completions are
//! logged and otherwise ignored.

use common::session::Ticket;
use gloo_console::{error, log};
use gloo_timers::future::TimeoutFuture;
use web_sys::AbortController;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::helpers::{read_file_text, request_analysis, CLIENT_TIMEOUT_MS};
use super::messages::Msg;
use super::state::AnalysisWorkbench;

pub fn update(
    component: &mut AnalysisWorkbench,
    ctx: &Context<AnalysisWorkbench>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::Submit(file) => {
            component.cancel_in_flight();
            let ticket = component.session.submit(file.name());

            let link = ctx.link().clone();
            spawn_local(async move {
                let outcome = read_file_text(file).await;
                link.send_message(Msg::TextRead { ticket, outcome });
            });
            true
        }
        Msg::TextRead { ticket, outcome } => match outcome {
            Ok(text) => {
                let current = component.session.is_current(ticket);
                match component.session.text_ready(ticket, text) {
                    Some(csv) => {
                        start_analysis(component, ctx, ticket, csv);
                        true
                    }
                    // empty file: the session already moved to Failure
                    None => current,
                }
            }
            Err(detail) => {
                error!("Failed to read file:", detail);
                component.session.read_failed(ticket)
            }
        },
        Msg::AnalysisFinished { ticket, outcome } => {
            let applied = match outcome {
                Ok(result) => component.session.analysis_succeeded(ticket, result),
                Err(detail) => {
                    let applied = component.session.analysis_failed(ticket);
                    if applied {
                        error!("Analysis failed:", detail);
                    }
                    applied
                }
            };
            if applied {
                component.in_flight = None;
            } else {
                log!("Dropping completion of a superseded analysis");
            }
            applied
        }
        Msg::TimedOut(ticket) => {
            if component.session.analysis_failed(ticket) {
                error!("Analysis timed out");
                component.cancel_in_flight();
                true
            } else {
                false
            }
        }
        Msg::Reset => {
            component.cancel_in_flight();
            component.session.reset();
            true
        }
    }
}

/// Sends `csv` for analysis under `ticket` and arms the client deadline.
fn start_analysis(
    component: &mut AnalysisWorkbench,
    ctx: &Context<AnalysisWorkbench>,
    ticket: Ticket,
    csv: String,
) {
    let controller = AbortController::new().ok();
    let signal = controller.as_ref().map(|c| c.signal());
    component.in_flight = controller;

    let file_name = component
        .session
        .phase()
        .file_name()
        .unwrap_or_default()
        .to_string();

    let link = ctx.link().clone();
    spawn_local(async move {
        let outcome = request_analysis(file_name, csv, signal).await;
        link.send_message(Msg::AnalysisFinished { ticket, outcome });
    });

    let link = ctx.link().clone();
    spawn_local(async move {
        TimeoutFuture::new(CLIENT_TIMEOUT_MS).await;
        link.send_message(Msg::TimedOut(ticket));
    });
}
