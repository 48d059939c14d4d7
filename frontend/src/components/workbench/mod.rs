//! Analysis workbench: the root screen of the app.
//!
//! Wires the Yew `Component` implementation to its submodules:
//! - `state`: the component struct around the shared `AnalysisSession`.
//! - `update`: message handling, file reading and the analysis request.
//! - `view`: picks one of the four screens (upload, loader, dashboard, error).
//! - `helpers`: async I/O against the browser and the server.

use yew::prelude::*;

mod helpers;
mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::AnalysisWorkbench;

impl Component for AnalysisWorkbench {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        AnalysisWorkbench::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.cancel_in_flight();
    }
}
