use common::model::analysis::AnalysisResult;
use common::session::Ticket;

pub enum Msg {
    /// A file was picked or dropped.
    Submit(web_sys::File),
    /// Reading the file as text finished.
    TextRead {
        ticket: Ticket,
        outcome: Result<String, String>,
    },
    /// The analysis request finished. `Err` carries a diagnostic detail that
    /// is logged but never shown.
    AnalysisFinished {
        ticket: Ticket,
        outcome: Result<AnalysisResult, String>,
    },
    /// The client-side deadline for `ticket` passed.
    TimedOut(Ticket),
    Reset,
}
