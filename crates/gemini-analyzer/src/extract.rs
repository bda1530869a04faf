//! Turning model reply text into an analysis result.

use analysis_core::{AnalysisError, AnalysisResult, InvoiceAnalysis, LineItem, RecommendedAction};
use serde::Deserialize;

/// Line item as the model returns it (no id yet).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExtractedLineItem {
    description: String,
    quantity: f64,
    unit_price: f64,
    total: f64,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    flagged: bool,
    #[serde(default)]
    flag_reason: Option<String>,
    #[serde(default)]
    baseline_price: Option<f64>,
    #[serde(default)]
    variance_percent: Option<f64>,
}

/// Top-level object the auditor prompt asks for.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExtractedAnalysis {
    line_items: Vec<ExtractedLineItem>,
    trust_score: f64,
    summary: String,
    #[serde(default)]
    flags: Vec<String>,
    #[serde(default)]
    savings_potential: f64,
    recommended_action: RecommendedAction,
}

/// Parse the model's reply into an analysis result.
///
/// Line items get ids of the form `li-<millis>-<index>`.
pub fn parse_analysis(text: &str, millis: i64) -> Result<AnalysisResult, AnalysisError> {
    let json = extract_json(text);
    let extracted: ExtractedAnalysis = serde_json::from_str(json)
        .map_err(|e| AnalysisError::InvalidResponse(format!("reply is not analysis JSON: {}", e)))?;

    let line_items = extracted
        .line_items
        .into_iter()
        .enumerate()
        .map(|(i, item)| LineItem {
            id: format!("li-{}-{}", millis, i),
            description: item.description,
            quantity: item.quantity,
            unit_price: item.unit_price,
            total: item.total,
            category: item.category,
            flagged: item.flagged,
            flag_reason: item.flag_reason,
            baseline_price: item.baseline_price,
            variance_percent: item.variance_percent,
        })
        .collect();

    Ok(AnalysisResult {
        line_items,
        analysis: InvoiceAnalysis {
            trust_score: extracted.trust_score,
            summary: extracted.summary,
            flags: extracted.flags,
            savings_potential: extracted.savings_potential,
            recommended_action: extracted.recommended_action,
        },
    })
}

/// Extract JSON from a reply that may contain markdown or other text.
pub fn extract_json(response: &str) -> &str {
    let trimmed = response.trim();

    if trimmed.starts_with('{') {
        return extract_balanced_json(trimmed);
    }

    // ```json fenced block
    if let Some(start) = trimmed.find("```json") {
        let json_start = start + 7;
        if let Some(end) = trimmed[json_start..].find("```") {
            let extracted = trimmed[json_start..json_start + end].trim();
            return extract_balanced_json(extracted);
        }
    }

    // Generic fenced block, skipping an optional language tag
    if let Some(start) = trimmed.find("```") {
        let after_backticks = &trimmed[start + 3..];
        let json_start = after_backticks.find('\n').map(|i| i + 1).unwrap_or(0);
        if let Some(end) = after_backticks[json_start..].find("```") {
            let extracted = after_backticks[json_start..json_start + end].trim();
            return extract_balanced_json(extracted);
        }
    }

    if let Some(start) = trimmed.find('{') {
        return extract_balanced_json(&trimmed[start..]);
    }

    trimmed
}

/// Extract a balanced JSON object from a string that starts with '{'.
///
/// Drops anything after the closing brace, e.g. `{"a": 1}}` -> `{"a": 1}`.
fn extract_balanced_json(s: &str) -> &str {
    if !s.starts_with('{') {
        return s;
    }

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escape_next = false;

    for (i, ch) in s.char_indices() {
        if escape_next {
            escape_next = false;
            continue;
        }

        match ch {
            '\\' if in_string => escape_next = true,
            '"' => in_string = !in_string,
            '{' if !in_string => depth += 1,
            '}' if !in_string => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return &s[..=i];
                }
            }
            _ => {}
        }
    }

    s
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPLY: &str = r#"{
        "lineItems": [
            {"description": "Labor", "quantity": 3, "unitPrice": 200, "total": 600,
             "flagged": true, "flagReason": "Rate 33% above baseline", "baselinePrice": 150, "variancePercent": 33},
            {"description": "Parts", "quantity": 1, "unitPrice": 40, "total": 40, "flagged": false}
        ],
        "trustScore": 70,
        "summary": "Labor rate is high.",
        "flags": ["High Labor Rate"],
        "savingsPotential": 150,
        "recommendedAction": "review"
    }"#;

    #[test]
    fn test_extract_plain_json() {
        assert_eq!(extract_json("  {\"a\": 1}  "), "{\"a\": 1}");
    }

    #[test]
    fn test_extract_json_fence() {
        let text = "Here you go:\n```json\n{\"a\": {\"b\": 2}}\n```\nThanks";
        assert_eq!(extract_json(text), "{\"a\": {\"b\": 2}}");
    }

    #[test]
    fn test_extract_bare_fence() {
        let text = "```\n{\"a\": 1}\n```";
        assert_eq!(extract_json(text), "{\"a\": 1}");
    }

    #[test]
    fn test_extract_object_in_prose() {
        let text = "The result is {\"a\": \"}\"} as requested.";
        assert_eq!(extract_json(text), "{\"a\": \"}\"}");
    }

    #[test]
    fn test_extract_trailing_braces() {
        assert_eq!(extract_json("{\"a\": 1}}}"), "{\"a\": 1}");
    }

    #[test]
    fn test_parse_analysis_assigns_ids() {
        let fenced = format!("```json\n{}\n```", REPLY);
        let result = parse_analysis(&fenced, 42).unwrap();

        assert_eq!(result.line_items.len(), 2);
        assert_eq!(result.line_items[0].id, "li-42-0");
        assert_eq!(result.line_items[1].id, "li-42-1");
        assert_eq!(result.line_items[0].baseline_price, Some(150.0));
        assert!(!result.line_items[1].flagged);
        assert_eq!(result.analysis.trust_score, 70.0);
        assert_eq!(result.analysis.recommended_action, RecommendedAction::Review);
        assert_eq!(result.line_item_total(), 640.0);
    }

    #[test]
    fn test_parse_analysis_defaults_optional_fields() {
        let text = r#"{"lineItems": [], "trustScore": 99, "summary": "ok", "recommendedAction": "approve"}"#;
        let result = parse_analysis(text, 0).unwrap();

        assert!(result.analysis.flags.is_empty());
        assert_eq!(result.analysis.savings_potential, 0.0);
        assert_eq!(result.analysis.recommended_action, RecommendedAction::Approve);
    }

    #[test]
    fn test_parse_analysis_rejects_prose() {
        let err = parse_analysis("I could not read this invoice.", 0).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidResponse(_)));
    }

    #[test]
    fn test_parse_analysis_rejects_schema_mismatch() {
        let text = r#"{"lineItems": [], "trustScore": 50, "summary": "?", "recommendedAction": "escalate"}"#;
        assert!(matches!(
            parse_analysis(text, 0),
            Err(AnalysisError::InvalidResponse(_))
        ));

        let missing_items = r#"{"trustScore": 50, "summary": "?", "recommendedAction": "review"}"#;
        assert!(parse_analysis(missing_items, 0).is_err());
    }
}
