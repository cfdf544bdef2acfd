//! Review command — full essay feedback.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use essay_coach_core::analysis::{self, reports::EssayReport};
use essay_coach_core::config::Config;

/// Arguments for the `review` subcommand.
#[derive(Args, Debug)]
pub struct ReviewArgs {
    /// Essay file to review.
    pub file: Utf8PathBuf,

    /// Word-count cutoff for flagging long sentences.
    #[arg(long)]
    pub threshold: Option<usize>,
}

/// Run a full essay review on a file.
#[instrument(name = "cmd_review", skip_all, fields(file = %args.file))]
pub fn cmd_review(
    args: ReviewArgs,
    global_json: bool,
    config: &Config,
    max_input: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, threshold = ?args.threshold, "executing review command");

    let content = super::read_input_file(&args.file, max_input)?;
    let strip_md = args.file.extension() == Some("md");

    let thesaurus = super::load_thesaurus(config)?;
    let options = super::review_options(config, args.threshold);

    let report = analysis::run_essay_review(&content, strip_md, &thesaurus, &options)
        .with_context(|| format!("failed to review {}", args.file))?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    render_text(&args.file, &report);
    Ok(())
}

/// Text output — section by section.
fn render_text(file: &Utf8Path, report: &EssayReport) {
    println!("{}", file.bold());

    let d = &report.diagnostics;
    println!(
        "\n  {} polarity {:.2}, {} words, {:.1}% distinct",
        "Diagnostics:".cyan(),
        d.polarity,
        d.total_words,
        d.distinct_ratio * 100.0,
    );

    println!("\n  {}", "Vocabulary upgrades:".cyan());
    if report.vocabulary.is_empty() {
        println!("    {}", "Vocabulary use is varied — no repeated simple words found.".green());
    } else {
        for suggestion in &report.vocabulary {
            if suggestion.synonyms.is_empty() {
                println!(
                    "    \"{}\" (used {}x) — {}",
                    suggestion.word.bold(),
                    suggestion.count,
                    "no recommendation available".dimmed(),
                );
            } else {
                println!(
                    "    \"{}\" (used {}x) → {}",
                    suggestion.word.bold(),
                    suggestion.count,
                    suggestion.synonyms.join(", ").italic(),
                );
            }
        }
    }

    println!(
        "\n  {} (over {} words)",
        "Long sentences:".cyan(),
        report.long_sentence_threshold,
    );
    if report.long_sentences.is_empty() {
        println!("    {}", "Sentence lengths look good — nothing to split.".green());
    } else {
        for review in &report.long_sentences {
            println!(
                "    {} sentence {} ({} words)",
                "▸".yellow(),
                review.sentence_num,
                review.word_count,
            );
            println!("      {}", review.original.dimmed());
            match review.split {
                Some(ref clauses) => {
                    for clause in clauses {
                        println!("      {} {}", "→".green(), clause);
                    }
                }
                None => println!(
                    "      {}",
                    "cannot automatically split — needs manual revision".red(),
                ),
            }
        }
    }
}
