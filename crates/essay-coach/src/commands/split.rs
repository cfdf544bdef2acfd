//! Split command — sentence decomposition.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use essay_coach_core::analysis::splitter::split_long_sentence;
use essay_coach_core::config::Config;
use essay_coach_core::text;

/// Arguments for the `split` subcommand.
#[derive(Args, Debug)]
pub struct SplitArgs {
    /// Essay file whose long sentences should be split.
    #[arg(required_unless_present = "sentence")]
    pub file: Option<Utf8PathBuf>,

    /// Split this sentence directly instead of reading a file.
    #[arg(long, conflicts_with = "file")]
    pub sentence: Option<String>,

    /// Word-count cutoff for flagging long sentences (file mode only).
    #[arg(long)]
    pub threshold: Option<usize>,
}

#[derive(Serialize)]
struct SplitOutput {
    original: String,
    word_count: usize,
    split: Option<Vec<String>>,
}

/// Split a sentence, or every long sentence of a file.
#[instrument(name = "cmd_split", skip_all)]
pub fn cmd_split(
    args: SplitArgs,
    global_json: bool,
    config: &Config,
    max_input: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = ?args.file, direct = args.sentence.is_some(), "executing split command");

    let results: Vec<SplitOutput> = if let Some(sentence) = args.sentence {
        vec![split_one(sentence)]
    } else {
        // required_unless_present guarantees the file is set here
        let Some(file) = args.file else {
            anyhow::bail!("a file or --sentence is required");
        };
        let content = super::read_input_file(&file, max_input)?;
        let threshold = super::review_options(config, args.threshold).long_sentence_threshold;

        text::split_sentences(&content)
            .into_iter()
            .filter(|s| text::word_count(s) > threshold)
            .map(split_one)
            .collect()
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("{}", "No long sentences found.".green());
        return Ok(());
    }

    for result in &results {
        println!("{} ({} words)", result.original.dimmed(), result.word_count);
        match result.split {
            Some(ref clauses) => {
                for clause in clauses {
                    println!("  {} {}", "→".green(), clause);
                }
            }
            None => println!(
                "  {}",
                "cannot automatically split — needs manual revision".red(),
            ),
        }
    }

    Ok(())
}

fn split_one(sentence: String) -> SplitOutput {
    SplitOutput {
        word_count: text::word_count(&sentence),
        split: split_long_sentence(&sentence),
        original: sentence,
    }
}
