use serde::Serialize;

/// JSON formatter for explanations and reports
pub struct JsonFormatter;

impl JsonFormatter {
    /// Format as pretty-printed JSON
    pub fn format<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(value)
    }

    /// Format as compact JSON (no whitespace)
    pub fn format_compact<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
        serde_json::to_string(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::explanation::types::*;

    fn explanation() -> Explanation {
        Explanation {
            overall: OverallExplanation {
                score: 85.0,
                stars: "★★★★☆".to_string(),
                label: "Excellent".to_string(),
                message: "Composition score: 85.0".to_string(),
            },
            members: vec![],
            benefits: vec![],
            warnings: vec![],
            metrics_display: MetricsDisplay {
                core: vec![],
                bonus: vec![],
            },
            synergy: String::new(),
            treasures: vec![],
        }
    }

    #[test]
    fn test_format_json() {
        let json = JsonFormatter::format(&explanation()).unwrap();

        assert!(json.contains("\"score\": 85.0"));
        assert!(json.contains("\"label\": \"Excellent\""));
        assert!(json.contains("\"core\": []"));
    }

    #[test]
    fn test_format_compact() {
        let json = JsonFormatter::format_compact(&explanation()).unwrap();
        assert!(!json.contains("\n  "));
    }
}
