//! Analysis session: the single source of truth for what the user sees.
//!
//! A session moves through four mutually exclusive phases:
//!
//! - `Idle`: nothing uploaded.
//! - `Loading`: a file was submitted; its text is being read or analyzed.
//! - `Success`: the remote analysis returned a valid result.
//! - `Failure`: reading or analysis failed; only a fixed message is kept.
//!
//! Every submission is stamped with a [`Ticket`]. The two asynchronous
//! continuations (file text ready, analysis finished) must present the ticket
//! they were started with, and are dropped unless it is still the current one.
//! `reset` and a newer `submit` both retire the current ticket, so a late
//! response from an abandoned cycle can never reach the screen.

use crate::model::analysis::AnalysisResult;
use crate::model::preview::{CsvPreview, PREVIEW_ROWS};

pub const READ_FAILED_MESSAGE: &str = "Failed to read the file.";
pub const EMPTY_FILE_MESSAGE: &str = "Could not read file content.";
pub const ANALYSIS_FAILED_MESSAGE: &str =
    "Failed to analyze the data. The AI model may be unavailable or the data format is unsupported.";

/// Identifies one analysis cycle. Issued by [`AnalysisSession::submit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

#[derive(Debug, Clone, PartialEq, Default)]
pub enum AnalysisPhase {
    #[default]
    Idle,
    Loading {
        file_name: String,
        /// Filled in once the file text is available.
        preview: Option<CsvPreview>,
    },
    Success {
        file_name: String,
        result: AnalysisResult,
        preview: CsvPreview,
    },
    Failure {
        file_name: String,
        message: String,
    },
}

impl AnalysisPhase {
    pub fn is_idle(&self) -> bool {
        matches!(self, AnalysisPhase::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, AnalysisPhase::Loading { .. })
    }

    pub fn file_name(&self) -> Option<&str> {
        match self {
            AnalysisPhase::Idle => None,
            AnalysisPhase::Loading { file_name, .. }
            | AnalysisPhase::Success { file_name, .. }
            | AnalysisPhase::Failure { file_name, .. } => Some(file_name),
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            AnalysisPhase::Failure { message, .. } => Some(message),
            _ => None,
        }
    }
}

#[derive(Debug, Default)]
pub struct AnalysisSession {
    phase: AnalysisPhase,
    /// Ticket of the cycle allowed to complete, if any.
    current: Option<Ticket>,
    issued: u64,
}

impl AnalysisSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &AnalysisPhase {
        &self.phase
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.current == Some(ticket)
    }

    /// Starts a new cycle for `file_name` and enters `Loading` immediately.
    ///
    /// Any previous result, error or in-flight cycle is discarded.
    pub fn submit(&mut self, file_name: impl Into<String>) -> Ticket {
        self.issued += 1;
        let ticket = Ticket(self.issued);
        self.current = Some(ticket);
        self.phase = AnalysisPhase::Loading {
            file_name: file_name.into(),
            preview: None,
        };
        ticket
    }

    /// File text for `ticket` is available.
    ///
    /// Stores the preview and hands back the text that should be sent for
    /// analysis. Returns `None` when the ticket is stale, or when the text is
    /// empty, in which case the cycle fails without any remote call.
    pub fn text_ready(&mut self, ticket: Ticket, text: String) -> Option<String> {
        if !self.accepts(ticket) {
            return None;
        }
        if text.is_empty() {
            self.fail(EMPTY_FILE_MESSAGE);
            return None;
        }
        if let AnalysisPhase::Loading { preview, .. } = &mut self.phase {
            *preview = Some(CsvPreview::from_text(&text, PREVIEW_ROWS));
        }
        Some(text)
    }

    /// The file could not be read as text. Returns whether it was applied.
    pub fn read_failed(&mut self, ticket: Ticket) -> bool {
        if !self.accepts(ticket) {
            return false;
        }
        self.fail(READ_FAILED_MESSAGE);
        true
    }

    /// The remote analysis for `ticket` produced `result`.
    /// Returns whether it was applied.
    pub fn analysis_succeeded(&mut self, ticket: Ticket, result: AnalysisResult) -> bool {
        if !self.accepts(ticket) {
            return false;
        }
        let AnalysisPhase::Loading { file_name, preview } = std::mem::take(&mut self.phase) else {
            return false;
        };
        self.phase = AnalysisPhase::Success {
            file_name,
            result,
            preview: preview.unwrap_or_default(),
        };
        self.current = None;
        true
    }

    /// The remote analysis for `ticket` failed for any reason, timeouts
    /// included. The detail is the caller's to log; the session only keeps
    /// the generic message. Returns whether it was applied.
    pub fn analysis_failed(&mut self, ticket: Ticket) -> bool {
        if !self.accepts(ticket) {
            return false;
        }
        self.fail(ANALYSIS_FAILED_MESSAGE);
        true
    }

    /// Back to `Idle` from anywhere; outstanding tickets become stale.
    pub fn reset(&mut self) {
        self.phase = AnalysisPhase::Idle;
        self.current = None;
    }

    fn accepts(&self, ticket: Ticket) -> bool {
        self.is_current(ticket) && self.phase.is_loading()
    }

    fn fail(&mut self, message: &str) {
        let file_name = self.phase.file_name().unwrap_or_default().to_string();
        self.phase = AnalysisPhase::Failure {
            file_name,
            message: message.to_string(),
        };
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_result(summary: &str) -> AnalysisResult {
        AnalysisResult {
            summary: summary.to_string(),
            anomalies: vec![],
            root_causes: vec![],
            chart_suggestion: None,
        }
    }

    #[test]
    fn test_initial_state_is_idle() {
        let session = AnalysisSession::new();
        assert!(session.phase().is_idle());
        assert!(session.phase().file_name().is_none());
    }

    #[test]
    fn test_submit_enters_loading_synchronously() {
        let mut session = AnalysisSession::new();
        let ticket = session.submit("data.csv");
        assert!(session.is_current(ticket));
        assert_eq!(
            session.phase(),
            &AnalysisPhase::Loading {
                file_name: "data.csv".to_string(),
                preview: None
            }
        );
    }

    #[test]
    fn test_successful_cycle() {
        let mut session = AnalysisSession::new();
        let ticket = session.submit("data.csv");

        let text = session
            .text_ready(ticket, "col1,col2\nval1,val2".to_string())
            .unwrap();
        assert_eq!(text, "col1,col2\nval1,val2");

        assert!(session.analysis_succeeded(ticket, minimal_result("ok")));
        match session.phase() {
            AnalysisPhase::Success {
                file_name,
                result,
                preview,
            } => {
                assert_eq!(file_name, "data.csv");
                assert_eq!(result, &minimal_result("ok"));
                assert_eq!(preview.headers(), ["col1", "col2"]);
                assert_eq!(preview.body().len(), 1);
            }
            other => panic!("unexpected phase {:?}", other),
        }
    }

    #[test]
    fn test_analysis_failure_uses_generic_message() {
        let mut session = AnalysisSession::new();
        let ticket = session.submit("data.csv");
        session.text_ready(ticket, "a,b".to_string());

        assert!(session.analysis_failed(ticket));
        assert_eq!(session.phase().error_message(), Some(ANALYSIS_FAILED_MESSAGE));
        assert!(!session.is_current(ticket));
    }

    #[test]
    fn test_read_failure_never_yields_text() {
        let mut session = AnalysisSession::new();
        let ticket = session.submit("data.csv");
        assert!(session.read_failed(ticket));
        assert_eq!(session.phase().error_message(), Some(READ_FAILED_MESSAGE));
        assert!(session.text_ready(ticket, "late,text".to_string()).is_none());
    }

    #[test]
    fn test_empty_text_fails_without_analysis() {
        let mut session = AnalysisSession::new();
        let ticket = session.submit("empty.csv");
        assert!(session.text_ready(ticket, String::new()).is_none());
        assert_eq!(session.phase().error_message(), Some(EMPTY_FILE_MESSAGE));
    }

    #[test]
    fn test_second_submission_wins() {
        let mut session = AnalysisSession::new();
        let first = session.submit("first.csv");
        session.text_ready(first, "a\n1".to_string());
        let second = session.submit("second.csv");
        session.text_ready(second, "b\n2".to_string());

        assert!(!session.analysis_succeeded(first, minimal_result("first")));
        assert!(!session.analysis_failed(first));
        assert!(session.phase().is_loading());

        assert!(session.analysis_succeeded(second, minimal_result("second")));
        match session.phase() {
            AnalysisPhase::Success { file_name, result, .. } => {
                assert_eq!(file_name, "second.csv");
                assert_eq!(result.summary, "second");
            }
            other => panic!("unexpected phase {:?}", other),
        }

        assert!(!session.analysis_failed(first));
        assert!(matches!(session.phase(), AnalysisPhase::Success { .. }));
    }

    #[test]
    fn test_stale_text_does_not_touch_newer_cycle() {
        let mut session = AnalysisSession::new();
        let first = session.submit("first.csv");
        let _second = session.submit("second.csv");
        assert!(session.text_ready(first, "x,y".to_string()).is_none());
        assert_eq!(
            session.phase(),
            &AnalysisPhase::Loading {
                file_name: "second.csv".to_string(),
                preview: None
            }
        );
    }

    #[test]
    fn test_late_response_after_reset_is_dropped() {
        let mut session = AnalysisSession::new();
        let ticket = session.submit("data.csv");
        session.text_ready(ticket, "a,b".to_string());
        session.reset();

        assert!(!session.analysis_succeeded(ticket, minimal_result("late")));
        assert!(!session.analysis_failed(ticket));
        assert!(!session.read_failed(ticket));
        assert!(session.phase().is_idle());
    }

    #[test]
    fn test_reset_from_every_phase_matches_initial_state() {
        let initial = AnalysisSession::new();

        let mut loading = AnalysisSession::new();
        loading.submit("a.csv");

        let mut success = AnalysisSession::new();
        let t = success.submit("b.csv");
        success.text_ready(t, "x".to_string());
        success.analysis_succeeded(t, minimal_result("ok"));

        let mut failure = AnalysisSession::new();
        let t = failure.submit("c.csv");
        failure.read_failed(t);

        let mut idle = AnalysisSession::new();

        for session in [&mut loading, &mut success, &mut failure, &mut idle] {
            session.reset();
            assert_eq!(session.phase(), initial.phase());
            assert_eq!(session.current, None);
        }
    }

    #[test]
    fn test_resubmit_after_failure_starts_fresh() {
        let mut session = AnalysisSession::new();
        let first = session.submit("bad.csv");
        session.read_failed(first);

        let second = session.submit("good.csv");
        assert_ne!(first, second);
        assert!(session.phase().error_message().is_none());
        assert_eq!(session.phase().file_name(), Some("good.csv"));
    }

    #[test]
    fn test_completion_applies_only_once() {
        let mut session = AnalysisSession::new();
        let ticket = session.submit("data.csv");
        session.text_ready(ticket, "a".to_string());
        assert!(session.analysis_succeeded(ticket, minimal_result("ok")));
        assert!(!session.analysis_failed(ticket));
        assert!(!session.analysis_succeeded(ticket, minimal_result("again")));
    }
}
