//! Candidate ranker
//!
//! Merges one-liners and stories into a single ordered candidate pool:
//! priority one-liners, then remaining one-liners by key, then stories in
//! the order their categories and questions were written. The result is the
//! pool order the selection engine indexes into.

use crate::questions::{self, CARD_QUESTION_PRIORITY};
use crate::types::{Candidate, OneLiners, Stories};

/// Story answers longer than this many characters are truncated on cards
pub const CARD_STORY_MAX_LENGTH: usize = 100;

/// Appended to truncated story answers
pub const TRUNCATION_MARKER: &str = "...";

/// Build the candidate pool for one profile
pub fn rank_candidates(one_liners: Option<&OneLiners>, stories: Option<&Stories>) -> Vec<Candidate> {
    let mut candidates = Vec::new();

    if let Some(one_liners) = one_liners {
        let mut order: Vec<&str> = CARD_QUESTION_PRIORITY.to_vec();
        // BTreeMap keys are already sorted
        order.extend(
            one_liners
                .keys()
                .map(String::as_str)
                .filter(|key| !questions::is_priority_key(key)),
        );

        for key in order {
            let Some(answer) = one_liners.get(key).and_then(|r| r.displayable_answer()) else {
                continue;
            };
            candidates.push(Candidate {
                key: key.to_string(),
                question: questions::one_liner_label(key).to_string(),
                answer: answer.to_string(),
            });
        }
    }

    if let Some(stories) = stories {
        for group in stories {
            for (key, record) in &group.answers {
                let Some(answer) = record.displayable_answer() else {
                    continue;
                };
                candidates.push(Candidate {
                    key: key.clone(),
                    question: questions::story_label(key).to_string(),
                    answer: truncate_story(answer),
                });
            }
        }
    }

    candidates
}

/// Cut a story answer to the card length, marking the cut
pub fn truncate_story(answer: &str) -> String {
    match answer.char_indices().nth(CARD_STORY_MAX_LENGTH) {
        Some((cut, _)) => format!("{}{}", &answer[..cut], TRUNCATION_MARKER),
        None => answer.to_string(),
    }
}
