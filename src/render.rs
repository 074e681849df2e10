//! Render pass: one quote per card across a list of profiles
//!
//! A list renderer walks its profiles in a stable order and threads one
//! `UsageCounter` through every selection, so repetition is judged against
//! everything chosen earlier in the same pass. The counter lives exactly as
//! long as the `RenderPass` and is never shared between passes.
//!
//! ```rust,ignore
//! let cards = render_cards(&profiles, SelectionOptions::default());
//! for card in &cards {
//!     println!("{}: {}", card.quote.question(), card.quote.text());
//! }
//! ```

use crate::answers::{parse_one_liners, parse_stories};
use crate::fallback::pick_fallback;
use crate::questions::DEFAULT_ONE_LINER_LABEL;
use crate::ranker::rank_candidates;
use crate::selection::{select_with_tier, Selection, SelectionOptions, SelectionTier};
use crate::types::{SelectedContent, UsageCounter};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The profile fields card selection reads, shaped like the API response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    #[serde(default, alias = "one_liners_data", alias = "oneLinersJson")]
    pub one_liners_json: Option<String>,
    #[serde(default, alias = "stories_data", alias = "storiesJson")]
    pub stories_json: Option<String>,
}

/// What a card displays
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CardQuote {
    Real(SelectedContent),
    Fallback { quote: String },
}

impl CardQuote {
    /// Label shown above the quote
    pub fn question(&self) -> &str {
        match self {
            CardQuote::Real(content) => &content.question,
            CardQuote::Fallback { .. } => DEFAULT_ONE_LINER_LABEL,
        }
    }

    /// Quote text, already truncated
    pub fn text(&self) -> &str {
        match self {
            CardQuote::Real(content) => &content.answer,
            CardQuote::Fallback { quote } => quote,
        }
    }
}

/// A rendered card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileCard {
    pub profile_id: String,
    pub quote: CardQuote,
    /// None when the card shows a fallback quote
    pub tier: Option<SelectionTier>,
}

/// Parse, rank and select in one call, updating `usage`
pub fn select_card_content(
    id: &str,
    one_liners_json: Option<&str>,
    stories_json: Option<&str>,
    usage: &mut UsageCounter,
    options: &SelectionOptions,
) -> Option<SelectedContent> {
    select_card(id, one_liners_json, stories_json, usage, options).map(|s| s.content)
}

fn select_card(
    id: &str,
    one_liners_json: Option<&str>,
    stories_json: Option<&str>,
    usage: &mut UsageCounter,
    options: &SelectionOptions,
) -> Option<Selection> {
    let one_liners = parse_one_liners(one_liners_json);
    let stories = parse_stories(stories_json);
    let candidates = rank_candidates(one_liners.as_ref(), stories.as_ref());
    select_with_tier(id, &candidates, usage, options)
}

/// State for a single render pass
#[derive(Debug, Default)]
pub struct RenderPass {
    options: SelectionOptions,
    usage: UsageCounter,
}

impl RenderPass {
    pub fn new(options: SelectionOptions) -> Self {
        Self {
            options,
            usage: UsageCounter::new(),
        }
    }

    /// Choose the quote for the next profile in render order
    pub fn card_for(&mut self, profile: &Profile) -> ProfileCard {
        let selection = select_card(
            &profile.id,
            profile.one_liners_json.as_deref(),
            profile.stories_json.as_deref(),
            &mut self.usage,
            &self.options,
        );

        match selection {
            Some(Selection { content, tier }) => ProfileCard {
                profile_id: profile.id.clone(),
                quote: CardQuote::Real(content),
                tier: Some(tier),
            },
            None => ProfileCard {
                profile_id: profile.id.clone(),
                quote: CardQuote::Fallback {
                    quote: pick_fallback(&profile.id).to_string(),
                },
                tier: None,
            },
        }
    }

    pub fn usage(&self) -> &UsageCounter {
        &self.usage
    }
}

/// Render every profile in order with a fresh counter
pub fn render_cards(profiles: &[Profile], options: SelectionOptions) -> Vec<ProfileCard> {
    let mut pass = RenderPass::new(options);
    profiles.iter().map(|p| pass.card_for(p)).collect()
}

/// Load a JSON array of profiles
pub fn load_profiles(path: &Path) -> Result<Vec<Profile>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read profiles from {:?}", path))?;
    let profiles: Vec<Profile> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse profiles in {:?}", path))?;
    Ok(profiles)
}
