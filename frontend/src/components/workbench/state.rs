use common::session::AnalysisSession;
use web_sys::AbortController;

/// State of the workbench: the session state machine plus the abort handle
/// of the request currently in flight.
pub struct AnalysisWorkbench {
    pub session: AnalysisSession,

    /// Aborts the outstanding `POST /api/analysis`, if any. Replaced on every
    /// new request and cleared once its completion has been applied.
    pub in_flight: Option<AbortController>,
}

impl AnalysisWorkbench {
    pub fn new() -> Self {
        Self {
            session: AnalysisSession::new(),
            in_flight: None,
        }
    }

    /// Aborts the outstanding request. Its completion still arrives, as an
    /// error, and is dropped by the session as stale.
    pub fn cancel_in_flight(&mut self) {
        if let Some(controller) = self.in_flight.take() {
            controller.abort();
        }
    }
}
