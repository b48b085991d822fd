mod commands;
mod logger;

use anyhow::Result;
use clap::{Parser, Subcommand};
use gh_pr_config::RenderConfig;
use std::io::Write;
use std::path::PathBuf;

/// gh-pr-render - turn GitHub PR patches and review comments into HTML
#[derive(Parser, Debug)]
#[command(name = "gh-pr-render")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Config file to use instead of the discovered one
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render one unified-diff patch as a table
    Diff {
        /// Patch file, or `-` for stdin
        #[arg(default_value = "-")]
        input: PathBuf,

        /// Language hint for highlighting (extension or language name)
        #[arg(long)]
        language: Option<String>,

        /// Path of the changed file, used to derive the language hint
        #[arg(long)]
        path: Option<String>,
    },
    /// Render a GitHub pull-request files JSON array
    Files {
        /// JSON file, or `-` for stdin
        #[arg(default_value = "-")]
        input: PathBuf,
    },
    /// Render a GitHub review comments JSON array grouped by file
    Comments {
        /// JSON file, or `-` for stdin
        #[arg(default_value = "-")]
        input: PathBuf,
    },
    /// Print the stylesheet for the highlighter's classes
    Css {
        /// Theme name (defaults to the configured theme)
        #[arg(long)]
        theme: Option<String>,
    },
    /// List the bundled theme names
    Themes,
}

fn main() -> Result<()> {
    logger::init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => RenderConfig::from_path(path)?,
        None => RenderConfig::load(),
    };
    log::debug!("Using config: {:?}", config);

    let output = commands::run(&args.command, &config)?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", output)?;
    Ok(())
}
