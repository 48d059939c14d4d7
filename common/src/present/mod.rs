//! View-models for the dashboard. Everything here is pure so the browser
//! views stay a thin layer of markup over it.

pub mod chart;

use crate::model::analysis::Severity;

/// Visual treatment of an anomaly card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeverityTone {
    Critical,
    High,
    Medium,
    Low,
    Neutral,
}

impl SeverityTone {
    pub fn css_class(self) -> &'static str {
        match self {
            SeverityTone::Critical => "tone-critical",
            SeverityTone::High => "tone-high",
            SeverityTone::Medium => "tone-medium",
            SeverityTone::Low => "tone-low",
            SeverityTone::Neutral => "tone-neutral",
        }
    }
}

impl From<&Severity> for SeverityTone {
    fn from(severity: &Severity) -> Self {
        match severity {
            Severity::Critical => SeverityTone::Critical,
            Severity::High => SeverityTone::High,
            Severity::Medium => SeverityTone::Medium,
            Severity::Low => SeverityTone::Low,
            Severity::Unrecognized(_) => SeverityTone::Neutral,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tone_of(raw: &str) -> SeverityTone {
        SeverityTone::from(&Severity::from(raw.to_string()))
    }

    #[test]
    fn test_critical_in_any_case() {
        for raw in ["Critical", "critical", "CRITICAL", " cRiTiCaL "] {
            assert_eq!(tone_of(raw), SeverityTone::Critical);
        }
    }

    #[test]
    fn test_each_tone_is_distinct() {
        let classes = [
            tone_of("Critical").css_class(),
            tone_of("High").css_class(),
            tone_of("Medium").css_class(),
            tone_of("Low").css_class(),
            tone_of("urgent").css_class(),
        ];
        for (i, a) in classes.iter().enumerate() {
            for b in &classes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_unknown_and_blank_are_neutral() {
        assert_eq!(tone_of("urgent"), SeverityTone::Neutral);
        assert_eq!(tone_of(""), SeverityTone::Neutral);
    }

    #[test]
    fn test_missing_severity_is_neutral() {
        let json = r#"{"description": "d", "implication": "i"}"#;
        let anomaly: crate::model::analysis::Anomaly = serde_json::from_str(json).unwrap();
        assert_eq!(SeverityTone::from(&anomaly.severity), SeverityTone::Neutral);
    }
}
