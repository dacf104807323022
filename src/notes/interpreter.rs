//! Turn the model's raw text into an [`AnalysisResult`]

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

use crate::notes::AnalysisResult;
use crate::AnalysisError;

/// What to do with output that is not a bare JSON object.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParsePolicy {
    /// Any non-JSON payload fails the request.
    #[default]
    Strict,

    /// Remove a surrounding markdown code fence before parsing.
    StripFences,
}

impl FromStr for ParsePolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "strict" => Ok(ParsePolicy::Strict),
            "strip_fences" | "strip-fences" => Ok(ParsePolicy::StripFences),
            other => anyhow::bail!(
                "Unknown parse policy '{}'. Expected 'strict' or 'strip_fences'",
                other
            ),
        }
    }
}

impl fmt::Display for ParsePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParsePolicy::Strict => write!(f, "strict"),
            ParsePolicy::StripFences => write!(f, "strip_fences"),
        }
    }
}

/// Parse the completion content.
///
/// Missing or `null` keys default to empty values; anything that is not a
/// JSON object is a [`AnalysisError::MalformedResponse`].
pub fn interpret(raw: &str, policy: ParsePolicy) -> crate::Result<AnalysisResult> {
    let payload = match policy {
        ParsePolicy::Strict => raw,
        ParsePolicy::StripFences => strip_fences(raw),
    };

    let value: Value = serde_json::from_str(payload).map_err(|e| {
        AnalysisError::MalformedResponse(format!("Failed to parse AI response as JSON: {e}"))
    })?;

    let Value::Object(object) = value else {
        return Err(AnalysisError::MalformedResponse(format!(
            "Expected a JSON object, got {}",
            json_kind(&value)
        )));
    };

    Ok(AnalysisResult {
        summary: text_field(&object, "summary"),
        action_items: list_field(&object, "action_items"),
        follow_ups: list_field(&object, "follow_ups"),
    })
}

fn strip_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let inner = inner.strip_suffix("```").unwrap_or(inner).trim_start();
    let inner = inner
        .strip_prefix("json")
        .or_else(|| inner.strip_prefix("JSON"))
        .unwrap_or(inner);
    inner.trim()
}

fn text_field(object: &Map<String, Value>, key: &str) -> String {
    match object.get(key) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}

fn list_field(object: &Map<String, Value>, key: &str) -> Vec<String> {
    match object.get(key) {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items.iter().map(item_text).collect(),
        Some(Value::String(text)) if text.is_empty() => Vec::new(),
        Some(single) => vec![item_text(single)],
    }
}

fn item_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_object_is_taken_verbatim() {
        let raw = r#"{"summary":"Short standup.","action_items":["Alice: send report by Friday"],"follow_ups":[]}"#;
        let result = interpret(raw, ParsePolicy::Strict).unwrap();
        assert_eq!(result.summary, "Short standup.");
        assert_eq!(result.action_items, vec!["Alice: send report by Friday"]);
        assert!(result.follow_ups.is_empty());
    }

    #[test]
    fn non_json_is_a_parse_failure() {
        for raw in ["not json", "{invalid", ""] {
            let err = interpret(raw, ParsePolicy::Strict).unwrap_err();
            assert!(err.is_parse_failure(), "{raw:?} should fail to parse");
        }
    }

    #[test]
    fn json_that_is_not_an_object_is_a_parse_failure() {
        for raw in ["[1,2]", "\"summary\"", "42", "null"] {
            let err = interpret(raw, ParsePolicy::Strict).unwrap_err();
            assert!(err.is_parse_failure(), "{raw:?} should be rejected");
        }
    }

    #[test]
    fn missing_and_null_keys_default_independently() {
        let result = interpret(r#"{"action_items":["x"],"follow_ups":null}"#, ParsePolicy::Strict)
            .unwrap();
        assert_eq!(result.summary, "");
        assert_eq!(result.action_items, vec!["x"]);
        assert!(result.follow_ups.is_empty());

        assert_eq!(
            interpret("{}", ParsePolicy::Strict).unwrap(),
            AnalysisResult::default()
        );
    }

    #[test]
    fn loosely_typed_fields_are_kept_as_text() {
        let raw = r#"{"summary":3,"action_items":"Bob: book room","follow_ups":[1,"why?"]}"#;
        let result = interpret(raw, ParsePolicy::Strict).unwrap();
        assert_eq!(result.summary, "3");
        assert_eq!(result.action_items, vec!["Bob: book room"]);
        assert_eq!(result.follow_ups, vec!["1", "why?"]);
    }

    #[test]
    fn strict_policy_rejects_fenced_output() {
        let raw = "```json\n{\"summary\":\"s\"}\n```";
        assert!(interpret(raw, ParsePolicy::Strict).is_err());
    }

    #[test]
    fn strip_fences_policy_recovers_fenced_output() {
        for raw in [
            "```json\n{\"summary\":\"s\"}\n```",
            "  ```\n{\"summary\":\"s\"}\n```\n",
            "```JSON {\"summary\":\"s\"}```",
            "{\"summary\":\"s\"}",
        ] {
            let result = interpret(raw, ParsePolicy::StripFences).unwrap();
            assert_eq!(result.summary, "s", "failed for {raw:?}");
        }
    }

    #[test]
    fn strip_fences_still_fails_on_garbage() {
        let err = interpret("```\nnot json\n```", ParsePolicy::StripFences).unwrap_err();
        assert!(err.is_parse_failure());
    }

    #[test]
    fn parse_policy_from_str() {
        assert_eq!("strict".parse::<ParsePolicy>().unwrap(), ParsePolicy::Strict);
        assert_eq!(
            "Strip-Fences".parse::<ParsePolicy>().unwrap(),
            ParsePolicy::StripFences
        );
        assert!("repair".parse::<ParsePolicy>().is_err());
        assert_eq!(ParsePolicy::StripFences.to_string(), "strip_fences");
    }
}
