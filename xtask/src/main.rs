//! Workspace automation tasks.
//!
//! Generates shell completions and man pages from the CLI definition.
//! Run with `cargo run -p xtask -- <task>`.

use std::fs;
use std::io::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::{Shell, generate_to};

/// xtask argument parser.
#[derive(Parser)]
#[command(name = "xtask", about = "Workspace automation tasks")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate shell completions into target/dist/completions
    Completions,
    /// Generate man pages into target/dist/man
    Man,
    /// Generate completions and man pages
    Dist,
}

fn main() -> Result<(), Error> {
    let xtask = Xtask::parse();
    match xtask.task {
        Task::Completions => completions(),
        Task::Man => man(),
        Task::Dist => {
            completions()?;
            man()
        }
    }
}

fn dist_dir(sub: &str) -> Result<PathBuf, Error> {
    let dir = PathBuf::from("target").join("dist").join(sub);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

fn completions() -> Result<(), Error> {
    let dir = dist_dir("completions")?;
    let mut cmd = essay_coach::command();
    for shell in [Shell::Bash, Shell::Zsh, Shell::Fish, Shell::PowerShell] {
        let path = generate_to(shell, &mut cmd, "essay-coach", &dir)?;
        println!("generated {}", path.display());
    }
    Ok(())
}

fn man() -> Result<(), Error> {
    let dir = dist_dir("man")?;
    let cmd = essay_coach::command();

    let mut buffer: Vec<u8> = Vec::new();
    clap_mangen::Man::new(cmd.clone()).render(&mut buffer)?;
    let path = dir.join("essay-coach.1");
    fs::write(&path, &buffer)?;
    println!("generated {}", path.display());

    // One page per subcommand
    for sub in cmd.get_subcommands() {
        let mut buffer: Vec<u8> = Vec::new();
        clap_mangen::Man::new(sub.clone()).render(&mut buffer)?;
        let path = dir.join(format!("essay-coach-{}.1", sub.get_name()));
        fs::write(&path, &buffer)?;
        println!("generated {}", path.display());
    }

    Ok(())
}
