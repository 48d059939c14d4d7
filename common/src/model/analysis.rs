use serde::{Deserialize, Serialize};

/// Structured outcome of one analysis cycle, as returned by the remote model.
///
/// The JSON form uses camelCase keys (`rootCauses`, `chartSuggestion`) so the
/// same type serves as the response schema contract and as the wire type
/// between the backend and the browser.
///
/// `anomalies` and `root_causes` are independently ordered. A root cause's
/// `anomaly` field is a human-readable title, not a key into `anomalies`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub summary: String,
    pub anomalies: Vec<Anomaly>,
    pub root_causes: Vec<RootCause>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chart_suggestion: Option<ChartSuggestion>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anomaly {
    pub description: String,
    /// Missing from the model output means `Unrecognized("")`.
    #[serde(default)]
    pub severity: Severity,
    pub implication: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RootCause {
    pub anomaly: String,
    pub cause: String,
    pub recommendation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSuggestion {
    pub chart_type: ChartKind,
    pub title: String,
    pub description: String,
    pub data: Vec<ChartPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub name: String,
    pub value: f64,
}

/// Severity reported for an anomaly.
///
/// The model is asked for one of four labels but nothing forces it to comply,
/// so any other string is kept as `Unrecognized` instead of failing the whole
/// result. Matching is case-insensitive. A missing severity defaults to an
/// empty `Unrecognized`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
    Unrecognized(String),
}

impl Severity {
    pub fn label(&self) -> &str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
            Severity::Critical => "Critical",
            Severity::Unrecognized(raw) if raw.trim().is_empty() => "Unknown",
            Severity::Unrecognized(raw) => raw,
        }
    }
}

impl Default for Severity {
    fn default() -> Self {
        Severity::Unrecognized(String::new())
    }
}

impl From<String> for Severity {
    fn from(raw: String) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "low" => Severity::Low,
            "medium" => Severity::Medium,
            "high" => Severity::High,
            "critical" => Severity::Critical,
            _ => Severity::Unrecognized(raw),
        }
    }
}

impl From<Severity> for String {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Unrecognized(raw) => raw,
            known => known.label().to_string(),
        }
    }
}

/// Kind of chart suggested by the model. Unknown kinds are preserved so the
/// dashboard can show a textual fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ChartKind {
    Bar,
    Line,
    Pie,
    Unsupported(String),
}

impl From<String> for ChartKind {
    fn from(raw: String) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "bar" => ChartKind::Bar,
            "line" => ChartKind::Line,
            "pie" => ChartKind::Pie,
            _ => ChartKind::Unsupported(raw),
        }
    }
}

impl From<ChartKind> for String {
    fn from(kind: ChartKind) -> Self {
        match kind {
            ChartKind::Bar => "bar".to_string(),
            ChartKind::Line => "line".to_string(),
            ChartKind::Pie => "pie".to_string(),
            ChartKind::Unsupported(raw) => raw,
        }
    }
}

/// Reasons a structurally decoded result is still refused.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    NonFiniteChartValue { index: usize, name: String },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::NonFiniteChartValue { index, name } => write!(
                f,
                "chart data point {} ('{}') has a non-finite value",
                index, name
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

impl AnalysisResult {
    /// Checks the invariants serde cannot express on its own.
    ///
    /// Field presence and types are already enforced by deserialization, and
    /// JSON has no NaN or infinity, so decoded results always pass. The check
    /// guards results built in code before they reach the chart geometry.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(chart) = &self.chart_suggestion {
            for (index, point) in chart.data.iter().enumerate() {
                if !point.value.is_finite() {
                    return Err(ValidationError::NonFiniteChartValue {
                        index,
                        name: point.name.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}
