//! Prompt and response schema sent to the generative model.

use common::requests::{truncate_chars, MAX_CSV_CHARS};
use once_cell::sync::Lazy;
use serde_json::{json, Value};

/// Response schema in the model's OpenAPI subset. Mirrors `AnalysisResult`:
/// `summary`, `anomalies` and `rootCauses` are required, `chartSuggestion`
/// is optional.
pub static RESPONSE_SCHEMA: Lazy<Value> = Lazy::new(|| {
    json!({
        "type": "OBJECT",
        "properties": {
            "summary": {
                "type": "STRING",
                "description": "A high-level summary of emerging patterns, trends, and overall health of the system based on the provided data."
            },
            "anomalies": {
                "type": "ARRAY",
                "description": "A list of identified anomalies or outliers in the data.",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "description": {
                            "type": "STRING",
                            "description": "A clear and concise description of the anomaly."
                        },
                        "severity": {
                            "type": "STRING",
                            "format": "enum",
                            "enum": ["Low", "Medium", "High", "Critical"],
                            "description": "The estimated severity of the anomaly."
                        },
                        "implication": {
                            "type": "STRING",
                            "description": "The potential business or technical impact of this anomaly."
                        }
                    },
                    "required": ["description", "severity", "implication"]
                }
            },
            "rootCauses": {
                "type": "ARRAY",
                "description": "An analysis of the potential root causes for the identified anomalies.",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "anomaly": {
                            "type": "STRING",
                            "description": "A short title for the anomaly this root cause relates to."
                        },
                        "cause": {
                            "type": "STRING",
                            "description": "The suspected root cause of the anomaly."
                        },
                        "recommendation": {
                            "type": "STRING",
                            "description": "A suggested action or next step to validate the cause and resolve the issue."
                        }
                    },
                    "required": ["anomaly", "cause", "recommendation"]
                }
            },
            "chartSuggestion": {
                "type": "OBJECT",
                "description": "The single most insightful chart to visualize a key trend or pattern in the data.",
                "properties": {
                    "chartType": {
                        "type": "STRING",
                        "format": "enum",
                        "enum": ["bar", "line", "pie"],
                        "description": "The suggested type of chart."
                    },
                    "title": {
                        "type": "STRING",
                        "description": "A descriptive title for the chart."
                    },
                    "description": {
                        "type": "STRING",
                        "description": "A short explanation of what the chart shows and why it's useful."
                    },
                    "data": {
                        "type": "ARRAY",
                        "description": "Chart data points, each with a 'name' label and a numeric 'value'.",
                        "items": {
                            "type": "OBJECT",
                            "properties": {
                                "name": {
                                    "type": "STRING",
                                    "description": "The label for the data point (a category on the x-axis or a pie slice)."
                                },
                                "value": {
                                    "type": "NUMBER",
                                    "description": "The numerical value associated with the label."
                                }
                            },
                            "required": ["name", "value"]
                        }
                    }
                },
                "required": ["chartType", "title", "description", "data"]
            }
        },
        "required": ["summary", "anomalies", "rootCauses"]
    })
});

/// Builds the analyst instruction around the (truncated) CSV text.
pub fn build_prompt(csv: &str) -> String {
    let data = truncate_chars(csv, MAX_CSV_CHARS);
    format!(
        "You are a world-class support intelligence analyst AI. Your task is to analyze \
user-provided CSV data, which could be application logs, usage dumps, or error reports. \
Your goal is to proactively identify issues and provide actionable insights for a support team.

Analyze the following CSV data:
---
{data}
---

Based on your analysis, provide the following in a structured JSON format:
1. Summary: A high-level summary of emerging patterns and overall data health.
2. Anomalies: A list of significant anomalies, outliers, or error patterns. For each, specify \
a description, severity ('Low', 'Medium', 'High', or 'Critical'), and the potential implication.
3. Root Causes: For the most critical anomalies, suggest potential root causes and recommended \
next steps for the support team.
4. Chart Suggestion: Propose ONE SINGLE, most insightful chart (bar, line, or pie) to visualize \
a key pattern. Provide the chart type, a title, a brief description, and the data formatted as \
an array of objects. The data keys must be 'name' and 'value'. Do not nest objects within the \
data array.
"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_first_chars_reach_prompt() {
        let head = "x".repeat(MAX_CSV_CHARS - 1);
        let csv = format!("{}YTAIL_MARKER", head);
        let prompt = build_prompt(&csv);
        assert!(prompt.contains(&format!("{}Y", head)));
        assert!(!prompt.contains("TAIL_MARKER"));
    }

    #[test]
    fn test_prompts_differ_only_within_limit() {
        let head = "a,b\n".repeat(MAX_CSV_CHARS / 4);
        assert_eq!(head.chars().count(), MAX_CSV_CHARS);
        assert_eq!(
            build_prompt(&format!("{}one", head)),
            build_prompt(&format!("{}two", head))
        );
    }

    #[test]
    fn test_schema_required_fields() {
        let required = RESPONSE_SCHEMA["required"].as_array().unwrap();
        let names: Vec<&str> = required.iter().filter_map(Value::as_str).collect();
        assert_eq!(names, vec!["summary", "anomalies", "rootCauses"]);
        assert!(RESPONSE_SCHEMA["properties"]["chartSuggestion"].is_object());
        assert_eq!(
            RESPONSE_SCHEMA["properties"]["anomalies"]["items"]["properties"]["severity"]["enum"],
            json!(["Low", "Medium", "High", "Critical"])
        );
    }
}
