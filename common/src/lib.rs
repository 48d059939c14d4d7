//! Domain shared by the browser app and the server: the analysis result
//! model, the preview splitter, the session state machine and the view-models
//! the dashboard renders from.

pub mod model;
pub mod present;
pub mod requests;
pub mod session;
