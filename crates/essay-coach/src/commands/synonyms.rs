//! Synonyms command — single-word lookup.

use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use essay_coach_core::analysis::synonyms::synonyms_for;
use essay_coach_core::config::Config;

/// Arguments for the `synonyms` subcommand.
#[derive(Args, Debug)]
pub struct SynonymsArgs {
    /// Word to look up.
    pub word: String,
}

#[derive(Serialize)]
struct SynonymsOutput<'a> {
    word: &'a str,
    synonyms: Vec<String>,
}

/// Look up synonym candidates for one word.
#[instrument(name = "cmd_synonyms", skip_all, fields(word = %args.word))]
pub fn cmd_synonyms(args: SynonymsArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    debug!(word = %args.word, "executing synonyms command");

    let thesaurus = super::load_thesaurus(config)?;
    let options = super::review_options(config, None);
    let synonyms = synonyms_for(&thesaurus, &args.word, options.max_synonyms);

    if global_json {
        let output = SynonymsOutput {
            word: &args.word,
            synonyms,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if synonyms.is_empty() {
        println!(
            "\"{}\" — {}",
            args.word.bold(),
            "no recommendation available".dimmed(),
        );
    } else {
        println!("\"{}\" → {}", args.word.bold(), synonyms.join(", ").italic());
    }

    Ok(())
}
