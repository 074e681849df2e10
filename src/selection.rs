//! Selection engine
//!
//! Picks one candidate per profile so that:
//! - the same profile always shows the same quote for the same usage state
//! - questions are spread across a page instead of repeating
//! - a profile with any real answer always shows one
//!
//! Tiers, first non-empty pool wins:
//! 1. unused   - candidates whose key has no entry in the usage counter
//! 2. least used - candidates under the repetition cap, at the minimum count
//! 3. overflow - every candidate, once the cap is exhausted
//!
//! An empty candidate pool yields `None` and leaves the counter untouched.

use crate::types::{Candidate, SelectedContent, UsageCounter};
use serde::{Deserialize, Serialize};

/// Caller-supplied selection options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SelectionOptions {
    /// Times a question key may be shown per pass before overflow (0 = uncapped)
    pub max_repetition: u32,
    /// Whether a key may be shown more than once per pass at all
    pub allow_repetition: bool,
}

impl Default for SelectionOptions {
    fn default() -> Self {
        Self {
            max_repetition: 3,
            allow_repetition: true,
        }
    }
}

impl SelectionOptions {
    pub fn is_capped(&self) -> bool {
        self.max_repetition > 0
    }
}

/// Which tier produced a selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionTier {
    Unused,
    LeastUsed,
    Overflow,
}

impl SelectionTier {
    pub fn name(&self) -> &'static str {
        match self {
            SelectionTier::Unused => "unused",
            SelectionTier::LeastUsed => "least_used",
            SelectionTier::Overflow => "overflow",
        }
    }
}

/// A selected quote together with the tier that chose it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub content: SelectedContent,
    pub tier: SelectionTier,
}

/// Sum of the id's UTF-16 code units
pub fn id_checksum(id: &str) -> u64 {
    id.encode_utf16().map(u64::from).fold(0, u64::wrapping_add)
}

/// Stable index in `0..n` for an id. `None` when `n == 0`.
///
/// Deliberately a plain checksum: the same id must map to the same index
/// everywhere, with no seed or platform dependence.
pub fn hash_pick(id: &str, n: usize) -> Option<usize> {
    if n == 0 {
        return None;
    }
    Some((id_checksum(id) % n as u64) as usize)
}

/// Select a quote for `id` and record it in `usage`
pub fn select(
    id: &str,
    candidates: &[Candidate],
    usage: &mut UsageCounter,
    options: &SelectionOptions,
) -> Option<SelectedContent> {
    select_with_tier(id, candidates, usage, options).map(|s| s.content)
}

/// Like [`select`], also reporting which tier made the choice
pub fn select_with_tier(
    id: &str,
    candidates: &[Candidate],
    usage: &mut UsageCounter,
    options: &SelectionOptions,
) -> Option<Selection> {
    let (candidate, tier) = choose(id, candidates, usage, options)?;
    *usage.entry(candidate.key.clone()).or_insert(0) += 1;

    tracing::trace!(id, key = %candidate.key, tier = tier.name(), "selected card content");

    Some(Selection {
        content: SelectedContent::from(candidate),
        tier,
    })
}

fn choose<'c>(
    id: &str,
    candidates: &'c [Candidate],
    usage: &UsageCounter,
    options: &SelectionOptions,
) -> Option<(&'c Candidate, SelectionTier)> {
    if candidates.is_empty() {
        return None;
    }
    let uses = |key: &str| usage.get(key).copied().unwrap_or(0);

    let unused: Vec<&Candidate> = candidates
        .iter()
        .filter(|c| !usage.contains_key(&c.key))
        .collect();
    if let Some(candidate) = pick(id, &unused) {
        return Some((candidate, SelectionTier::Unused));
    }

    if !options.allow_repetition {
        return None;
    }

    let under_cap: Vec<&Candidate> = candidates
        .iter()
        .filter(|c| !options.is_capped() || uses(c.key.as_str()) < options.max_repetition)
        .collect();
    if let Some(min_uses) = under_cap.iter().map(|c| uses(c.key.as_str())).min() {
        let least_used: Vec<&Candidate> = under_cap
            .into_iter()
            .filter(|c| uses(c.key.as_str()) == min_uses)
            .collect();
        if let Some(candidate) = pick(id, &least_used) {
            return Some((candidate, SelectionTier::LeastUsed));
        }
    }

    if cfg!(debug_assertions) {
        tracing::warn!(
            id,
            max_repetition = options.max_repetition,
            "every question hit the repetition cap, showing real content anyway"
        );
    }
    let all: Vec<&Candidate> = candidates.iter().collect();
    pick(id, &all).map(|c| (c, SelectionTier::Overflow))
}

fn pick<'c>(id: &str, pool: &[&'c Candidate]) -> Option<&'c Candidate> {
    hash_pick(id, pool.len()).map(|i| pool[i])
}
