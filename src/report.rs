//! Render pass report
//!
//! Summarizes how quotes were spread across one pass:
//! - how many cards got real content vs a fallback
//! - which questions were shown and how often
//! - which selection tier produced each quote

use crate::render::{CardQuote, ProfileCard};
use crate::selection::{SelectionOptions, SelectionTier};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PassReport {
    pub generated_at: String,
    pub options: SelectionOptions,
    pub profiles: usize,
    pub real_quotes: usize,
    pub fallback_quotes: usize,

    /// question key -> times shown
    pub question_counts: BTreeMap<String, u32>,

    /// question key -> share of real quotes
    pub selection_rates: BTreeMap<String, f64>,

    pub distinct_questions: usize,
    pub max_repetition_observed: u32,
    pub tier_counts: BTreeMap<SelectionTier, usize>,

    /// Questions shown more often than the cap allows (overflow)
    pub over_cap: Vec<String>,
}

impl PassReport {
    pub fn from_cards(cards: &[ProfileCard], options: &SelectionOptions) -> Self {
        let mut question_counts: BTreeMap<String, u32> = BTreeMap::new();
        let mut tier_counts: BTreeMap<SelectionTier, usize> = BTreeMap::new();
        let mut fallback_quotes = 0;

        for card in cards {
            match &card.quote {
                CardQuote::Real(content) => {
                    *question_counts.entry(content.question_id.clone()).or_default() += 1;
                }
                CardQuote::Fallback { .. } => fallback_quotes += 1,
            }
            if let Some(tier) = card.tier {
                *tier_counts.entry(tier).or_default() += 1;
            }
        }

        let real_quotes = cards.len() - fallback_quotes;
        let selection_rates = question_counts
            .iter()
            .map(|(key, count)| (key.clone(), *count as f64 / real_quotes.max(1) as f64))
            .collect();
        let over_cap = if options.is_capped() {
            question_counts
                .iter()
                .filter(|(_, count)| **count > options.max_repetition)
                .map(|(key, _)| key.clone())
                .collect()
        } else {
            Vec::new()
        };

        Self {
            generated_at: chrono::Utc::now().to_rfc3339(),
            options: *options,
            profiles: cards.len(),
            real_quotes,
            fallback_quotes,
            distinct_questions: question_counts.len(),
            max_repetition_observed: question_counts.values().copied().max().unwrap_or(0),
            selection_rates,
            question_counts,
            tier_counts,
            over_cap,
        }
    }

    pub fn tier_count(&self, tier: SelectionTier) -> usize {
        self.tier_counts.get(&tier).copied().unwrap_or(0)
    }

    /// One-paragraph human summary
    pub fn summary(&self) -> String {
        let mut lines = vec![format!(
            "{} card(s): {} real, {} fallback, {} distinct question(s), max repetition {}",
            self.profiles,
            self.real_quotes,
            self.fallback_quotes,
            self.distinct_questions,
            self.max_repetition_observed
        )];
        lines.push(format!(
            "Tiers: {} unused, {} least used, {} overflow",
            self.tier_count(SelectionTier::Unused),
            self.tier_count(SelectionTier::LeastUsed),
            self.tier_count(SelectionTier::Overflow)
        ));
        if !self.over_cap.is_empty() {
            lines.push(format!("Over cap: {}", self.over_cap.join(", ")));
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{render_cards, Profile};

    fn profile(id: &str, one_liners: Option<&str>) -> Profile {
        Profile {
            id: id.to_string(),
            one_liners_json: one_liners.map(String::from),
            stories_json: None,
        }
    }

    const MEANING_ONLY: &str =
        r#"{"climbing_meaning": {"answer": "freedom", "visibility": "public"}}"#;

    #[test]
    fn test_report_counts() {
        let options = SelectionOptions {
            max_repetition: 2,
            allow_repetition: true,
        };
        let profiles = vec![
            profile("a", Some(MEANING_ONLY)),
            profile("b", Some(MEANING_ONLY)),
            profile("c", Some(MEANING_ONLY)),
            profile("d", None),
        ];
        let cards = render_cards(&profiles, options);
        let report = PassReport::from_cards(&cards, &options);

        assert_eq!(report.profiles, 4);
        assert_eq!(report.real_quotes, 3);
        assert_eq!(report.fallback_quotes, 1);
        assert_eq!(report.distinct_questions, 1);
        assert_eq!(report.max_repetition_observed, 3);
        assert_eq!(report.tier_count(SelectionTier::Unused), 1);
        assert_eq!(report.tier_count(SelectionTier::LeastUsed), 1);
        assert_eq!(report.tier_count(SelectionTier::Overflow), 1);
        assert_eq!(report.over_cap, vec!["climbing_meaning".to_string()]);
        assert!((report.selection_rates["climbing_meaning"] - 1.0).abs() < f64::EPSILON);
        assert!(report.summary().contains("1 fallback"));
    }

    #[test]
    fn test_empty_report() {
        let report = PassReport::from_cards(&[], &SelectionOptions::default());
        assert_eq!(report.profiles, 0);
        assert_eq!(report.max_repetition_observed, 0);
        assert!(report.selection_rates.is_empty());
        assert!(report.over_cap.is_empty());
    }

    #[test]
    fn test_report_serializes_tiers_as_names() {
        let cards = render_cards(&[profile("a", Some(MEANING_ONLY))], SelectionOptions::default());
        let report = PassReport::from_cards(&cards, &SelectionOptions::default());
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["tier_counts"]["unused"], 1);
        assert_eq!(value["options"]["maxRepetition"], 3);
    }
}
