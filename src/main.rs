//! card-quotes CLI
//!
//! Preview which quote each biography card would show for a profile dump.
//!
//! Run with: cargo run -- preview profiles.json

use anyhow::{bail, Context, Result};
use card_quotes::{
    fallback, load_profiles, render_cards, selection, CardQuote, PassReport, SelectionOptions,
};
use std::path::Path;

const USAGE: &str = "\
Usage:
  card-quotes preview <profiles.json> [--json] [--max-repetition=N] [--no-repeat] [--options=FILE]
  card-quotes report <profiles.json> [--max-repetition=N] [--no-repeat] [--options=FILE]
  card-quotes fallback <id>
  card-quotes hash <id> <n>";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let positional: Vec<&str> = args
        .iter()
        .skip(1)
        .filter(|a| !a.starts_with("--"))
        .map(String::as_str)
        .collect();

    if args.iter().any(|a| a == "--help" || a == "-h") || positional.is_empty() {
        println!("{}", USAGE);
        return Ok(());
    }

    match positional[0] {
        "preview" => {
            let path = positional.get(1).context("preview needs a profiles file")?;
            let json_output = args.iter().any(|a| a == "--json");
            run_preview(Path::new(path), &parse_options(&args)?, json_output)
        }
        "report" => {
            let path = positional.get(1).context("report needs a profiles file")?;
            run_report(Path::new(path), &parse_options(&args)?)
        }
        "fallback" => {
            let id = positional.get(1).context("fallback needs an id")?;
            println!("{}", fallback::pick_fallback(id));
            Ok(())
        }
        "hash" => {
            let (Some(id), Some(n)) = (positional.get(1), positional.get(2)) else {
                bail!("hash needs an id and a pool size");
            };
            let n: usize = n.parse().with_context(|| format!("Invalid pool size: {}", n))?;
            match selection::hash_pick(id, n) {
                Some(index) => println!("{}", index),
                None => bail!("pool size must be greater than zero"),
            }
            Ok(())
        }
        other => bail!("Unknown command: {}\n\n{}", other, USAGE),
    }
}

/// Build selection options from `--options=FILE`, then flag overrides
fn parse_options(args: &[String]) -> Result<SelectionOptions> {
    let mut options = match args.iter().find_map(|a| a.strip_prefix("--options=")) {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read options from {}", path))?;
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse options in {}", path))?
        }
        None => SelectionOptions::default(),
    };

    if let Some(value) = args.iter().find_map(|a| a.strip_prefix("--max-repetition=")) {
        options.max_repetition = value
            .parse()
            .with_context(|| format!("Invalid --max-repetition: {}", value))?;
    }
    if args.iter().any(|a| a == "--no-repeat") {
        options.allow_repetition = false;
    }

    Ok(options)
}

fn run_preview(path: &Path, options: &SelectionOptions, json_output: bool) -> Result<()> {
    let profiles = load_profiles(path)?;
    tracing::info!("Loaded {} profile(s) from {:?}", profiles.len(), path);

    let cards = render_cards(&profiles, *options);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&cards)?);
        return Ok(());
    }

    for card in &cards {
        let tier = card.tier.map(|t| t.name()).unwrap_or("fallback");
        match &card.quote {
            CardQuote::Real(content) => println!(
                "{} [{}] {}: \"{}\"",
                card.profile_id, tier, content.question, content.answer
            ),
            CardQuote::Fallback { quote } => println!(
                "{} [{}] {}: {}",
                card.profile_id,
                tier,
                card.quote.question(),
                quote
            ),
        }
    }
    Ok(())
}

fn run_report(path: &Path, options: &SelectionOptions) -> Result<()> {
    let profiles = load_profiles(path)?;
    let cards = render_cards(&profiles, *options);
    let report = PassReport::from_cards(&cards, options);

    eprintln!("{}", report.summary());
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
