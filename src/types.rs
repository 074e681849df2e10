//! Core types for biography card quote selection
//!
//! Everything here is ephemeral: built per render pass, never persisted.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};

/// Visibility value that makes an answer eligible for a card
pub const PUBLIC_VISIBILITY: &str = "public";

/// A single answered question, as authored by the profile owner
///
/// Both fields are optional because the source blobs are free-form JSON.
/// A non-string `answer` is kept as `None` rather than rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub answer: Option<String>,
    pub visibility: Option<String>,
}

impl AnswerRecord {
    /// Build a record from an arbitrary JSON value, ignoring anything malformed
    pub fn from_value(value: &Value) -> Self {
        Self {
            answer: value
                .get("answer")
                .and_then(Value::as_str)
                .map(String::from),
            visibility: value
                .get("visibility")
                .and_then(Value::as_str)
                .map(String::from),
        }
    }

    pub fn is_public(&self) -> bool {
        self.visibility.as_deref() == Some(PUBLIC_VISIBILITY)
    }

    /// The answer text if this record may be shown on a card
    pub fn displayable_answer(&self) -> Option<&str> {
        let answer = self.answer.as_deref()?;
        if answer.trim().is_empty() || !self.is_public() {
            return None;
        }
        Some(answer)
    }
}

/// question key -> answer
pub type OneLiners = BTreeMap<String, AnswerRecord>;

/// Story answers under one category, in the order they were written
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryGroup {
    pub category: String,
    pub answers: Vec<(String, AnswerRecord)>,
}

impl StoryGroup {
    pub fn get(&self, key: &str) -> Option<&AnswerRecord> {
        self.answers.iter().find(|(k, _)| k == key).map(|(_, r)| r)
    }
}

/// Story groups in the order the categories were written.
///
/// Authored order is kept on purpose: it is the candidate pool order, so
/// reordering would change which story a profile shows.
pub type Stories = Vec<StoryGroup>;

/// Per-render-pass tally of how often each question key was selected
pub type UsageCounter = HashMap<String, u32>;

/// A display-ready question/answer pair eligible for selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub key: String,
    pub question: String,
    pub answer: String,
}

/// The quote chosen for one card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedContent {
    pub question: String,
    pub answer: String,
    pub question_id: String,
}

impl From<&Candidate> for SelectedContent {
    fn from(candidate: &Candidate) -> Self {
        Self {
            question: candidate.question.clone(),
            answer: candidate.answer.clone(),
            question_id: candidate.key.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_from_value_ignores_non_string_answer() {
        let record = AnswerRecord::from_value(&json!({"answer": 42, "visibility": "public"}));
        assert_eq!(record.answer, None);
        assert!(record.is_public());
        assert_eq!(record.displayable_answer(), None);
    }

    #[test]
    fn test_displayable_requires_public_and_non_blank() {
        let public = AnswerRecord::from_value(&json!({"answer": "crimps", "visibility": "public"}));
        assert_eq!(public.displayable_answer(), Some("crimps"));

        let private = AnswerRecord::from_value(&json!({"answer": "crimps", "visibility": "private"}));
        assert_eq!(private.displayable_answer(), None);

        let missing = AnswerRecord::from_value(&json!({"answer": "crimps"}));
        assert_eq!(missing.displayable_answer(), None);

        let blank = AnswerRecord::from_value(&json!({"answer": "   ", "visibility": "public"}));
        assert_eq!(blank.displayable_answer(), None);
    }

    #[test]
    fn test_selected_content_serializes_camel_case() {
        let candidate = Candidate {
            key: "best_moment".to_string(),
            question: "爬岩最爽的是？".to_string(),
            answer: "topping out".to_string(),
        };
        let value = serde_json::to_value(SelectedContent::from(&candidate)).unwrap();
        assert_eq!(value["questionId"], "best_moment");
        assert_eq!(value["answer"], "topping out");
    }
}
