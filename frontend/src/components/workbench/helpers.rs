//! Browser-side I/O for the workbench: reading the picked file and calling
//! the analysis endpoint. Both return plain `String` errors; the caller only
//! logs them.

use common::model::analysis::AnalysisResult;
use common::requests::AnalyzeRequest;
use gloo_file::futures::read_as_text;
use gloo_net::http::Request;
use web_sys::AbortSignal;

pub const ANALYSIS_ENDPOINT: &str = "/api/analysis";

/// Client-side deadline. Longer than the server's own upstream timeout so
/// the server normally reports first.
pub const CLIENT_TIMEOUT_MS: u32 = 75_000;

/// Reads the whole file as UTF-8 text.
pub async fn read_file_text(file: web_sys::File) -> Result<String, String> {
    let file = gloo_file::File::from(file);
    read_as_text(&file).await.map_err(|e| e.to_string())
}

/// Posts the analyzed prefix of `csv` to the server and decodes the result.
///
/// Any non-200 status, transport error, abort or undecodable body is an
/// `Err` with a diagnostic string.
pub async fn request_analysis(
    file_name: String,
    csv: String,
    signal: Option<AbortSignal>,
) -> Result<AnalysisResult, String> {
    let response = Request::post(ANALYSIS_ENDPOINT)
        .abort_signal(signal.as_ref())
        .json(&AnalyzeRequest::new(file_name, &csv))
        .map_err(|e| format!("Could not encode request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(format!("Server returned {}: {}", status, body));
    }

    let result = response
        .json::<AnalysisResult>()
        .await
        .map_err(|e| format!("Invalid analysis payload: {}", e))?;
    result.validate().map_err(|e| e.to_string())?;
    Ok(result)
}
