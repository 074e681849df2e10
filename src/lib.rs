//! card-quotes - highlight quote selection for biography cards
//!
//! Picks the single quote shown on each biography card in a list so that:
//!
//! - **Stable**: the same profile shows the same quote across re-renders
//! - **Spread**: one question does not dominate a page of cards
//! - **Never empty**: profiles without public answers get a fallback line
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use card_quotes::{render_cards, Profile, SelectionOptions};
//!
//! let profiles: Vec<Profile> = serde_json::from_str(&api_response)?;
//! for card in render_cards(&profiles, SelectionOptions::default()) {
//!     println!("{} -> {}", card.quote.question(), card.quote.text());
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//!  one_liners_data ─┐
//!                   ├─ answers ─▶ ranker ─▶ selection ─┬─▶ SelectedContent
//!  stories_data ────┘                ▲         │        └─▶ None ─▶ fallback
//!                                    │         ▼
//!                               questions   UsageCounter (one per render pass)
//! ```

pub mod answers;
pub mod fallback;
pub mod questions;
pub mod ranker;
pub mod render;
pub mod report;
pub mod selection;
pub mod types;

pub use answers::{parse_one_liners, parse_stories};
pub use fallback::pick_fallback;
pub use ranker::{rank_candidates, truncate_story};
pub use render::{load_profiles, render_cards, select_card_content, CardQuote, Profile, ProfileCard, RenderPass};
pub use report::PassReport;
pub use selection::{hash_pick, select, select_with_tier, Selection, SelectionOptions, SelectionTier};
pub use types::*;
