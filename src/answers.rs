//! Answer store adapter
//!
//! Parses the two per-profile JSON blobs. Both are user-authored, so parsing
//! fails soft: malformed text or an unexpected shape yields `None`, never an
//! error. Individual records are kept leniently and filtered later.

use crate::questions;
use crate::types::{AnswerRecord, OneLiners, Stories, StoryGroup};
use serde_json::{Map, Value};

/// Parse `one_liners_data`: `{ key: { answer, visibility } }`
pub fn parse_one_liners(json: Option<&str>) -> Option<OneLiners> {
    let object = parse_object(json, "one_liners")?;
    Some(records_from_object(&object).collect())
}

/// Parse `stories_data`: `{ category: { key: { answer, visibility } } }`
///
/// Categories and their answers keep the order they were written in.
/// Categories whose value is not an object are skipped.
pub fn parse_stories(json: Option<&str>) -> Option<Stories> {
    let object = parse_object(json, "stories")?;
    let stories = object
        .iter()
        .filter_map(|(category, value)| {
            let answers = value.as_object()?;
            if questions::story_category(category).is_none() {
                tracing::debug!(category = %category, "story category not in catalogue");
            }
            Some(StoryGroup {
                category: category.clone(),
                answers: records_from_object(answers).collect(),
            })
        })
        .collect();
    Some(stories)
}

fn parse_object(json: Option<&str>, source: &str) -> Option<Map<String, Value>> {
    let text = json.filter(|t| !t.is_empty())?;
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(object)) => Some(object),
        Ok(Value::Null) => None,
        Ok(other) => {
            tracing::debug!(source, kind = json_kind(&other), "ignoring non-object answer blob");
            None
        }
        Err(e) => {
            tracing::debug!(source, error = %e, "ignoring malformed answer blob");
            None
        }
    }
}

fn records_from_object(
    object: &Map<String, Value>,
) -> impl Iterator<Item = (String, AnswerRecord)> + '_ {
    object
        .iter()
        .map(|(key, value)| (key.clone(), AnswerRecord::from_value(value)))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_one_liners() {
        let json = r#"{
            "climbing_meaning": {"answer": "freedom", "visibility": "public"},
            "best_moment": {"answer": "sending", "visibility": "private"}
        }"#;
        let parsed = parse_one_liners(Some(json)).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed["climbing_meaning"].answer.as_deref(), Some("freedom"));
        assert!(!parsed["best_moment"].is_public());
    }

    #[test]
    fn test_malformed_json_is_none() {
        assert!(parse_one_liners(Some("{not json")).is_none());
        assert!(parse_stories(Some("[1, 2")).is_none());
    }

    #[test]
    fn test_absent_and_empty_input_is_none() {
        assert!(parse_one_liners(None).is_none());
        assert!(parse_one_liners(Some("")).is_none());
        assert!(parse_stories(Some("null")).is_none());
    }

    #[test]
    fn test_non_object_top_level_is_none() {
        assert!(parse_one_liners(Some(r#"[{"id": "q1", "answer": "x"}]"#)).is_none());
        assert!(parse_stories(Some(r#""just text""#)).is_none());
    }

    #[test]
    fn test_odd_records_are_kept_as_absent() {
        let json = r#"{"a": "plain string", "b": {"answer": null}, "c": {"answer": ["x"]}}"#;
        let parsed = parse_one_liners(Some(json)).unwrap();
        assert_eq!(parsed.len(), 3);
        assert!(parsed.values().all(|r| r.answer.is_none()));
    }

    #[test]
    fn test_parse_stories_skips_non_object_categories() {
        let json = r#"{
            "growth": {"first_outdoor": {"answer": "Long Dong", "visibility": "public"}},
            "psychology": "oops",
            "life": null
        }"#;
        let parsed = parse_stories(Some(json)).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].category, "growth");
        assert_eq!(
            parsed[0].get("first_outdoor").and_then(|r| r.answer.as_deref()),
            Some("Long Dong")
        );
    }

    #[test]
    fn test_parse_stories_keeps_written_order() {
        let json = r#"{
            "psychology": {"fear_management": {"answer": "breathe", "visibility": "public"}},
            "growth": {
                "memorable_moment": {"answer": "first 7a", "visibility": "public"},
                "biggest_challenge": {"answer": "fear", "visibility": "public"}
            }
        }"#;
        let parsed = parse_stories(Some(json)).unwrap();
        let categories: Vec<&str> = parsed.iter().map(|g| g.category.as_str()).collect();
        assert_eq!(categories, vec!["psychology", "growth"]);
        let growth_keys: Vec<&str> = parsed[1].answers.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(growth_keys, vec!["memorable_moment", "biggest_challenge"]);
    }
}
