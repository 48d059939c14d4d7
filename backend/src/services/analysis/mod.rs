//! CSV analysis backed by a generative model with structured output.
//!
//! The browser posts the uploaded text to `POST /api/analysis`. The text is
//! truncated to `common::requests::MAX_CSV_CHARS` characters, wrapped in the analyst
//! prompt and sent to the model together with `prompt::RESPONSE_SCHEMA`. The
//! model's answer is decoded into an `AnalysisResult` and validated before it
//! is returned; anything short of a fully valid result is an `AnalysisError`.
//!
//! The model sits behind the `StructuredGenerator` trait so the route can be
//! exercised without network access.

use crate::error::AnalysisError;
use actix_web::web::{post, scope};
use actix_web::Scope;
use async_trait::async_trait;
use common::model::analysis::AnalysisResult;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

mod analyze;
pub mod gemini;
pub mod prompt;

const API_PATH: &str = "/api/analysis";

static CODE_FENCE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^```[A-Za-z]*\s*([\s\S]*?)\s*```$").unwrap());

/// One structured generation call: a prompt in, JSON text out.
#[async_trait]
pub trait StructuredGenerator: Send + Sync {
    async fn generate(&self, prompt: &str, schema: &Value) -> Result<String, AnalysisError>;
}

/// Configures and returns the Actix scope for analysis routes.
pub fn configure_routes() -> Scope {
    scope(API_PATH).route("", post().to(analyze::process))
}

/// Runs one analysis of `csv` through `generator`.
pub async fn analyze_csv(
    generator: &dyn StructuredGenerator,
    csv: &str,
) -> Result<AnalysisResult, AnalysisError> {
    let prompt = prompt::build_prompt(csv);
    let raw = generator.generate(&prompt, &prompt::RESPONSE_SCHEMA).await?;
    parse_result(&raw)
}

/// Decodes and validates the model output.
///
/// A surrounding Markdown code fence is tolerated; everything else must be a
/// JSON document that fits `AnalysisResult` exactly.
pub fn parse_result(raw: &str) -> Result<AnalysisResult, AnalysisError> {
    let trimmed = raw.trim();
    let json = CODE_FENCE_PATTERN
        .captures(trimmed)
        .and_then(|caps| caps.get(1))
        .map_or(trimmed, |m| m.as_str());

    let result: AnalysisResult = serde_json::from_str(json)?;
    result
        .validate()
        .map_err(|e| AnalysisError::Schema(e.to_string()))?;
    Ok(result)
}
