//! Subcommand handlers. Each returns the text to print on stdout.

use crate::Command;
use anyhow::{Context, Result};
use gh_diff_table::{
    decode_patch, group_comments, language_hint_for_path, parse_comments, parse_files,
    render_comment_groups, CmarkRenderer, DiffRenderer, Highlighter, PlainHighlighter,
    RenderOptions, SyntectHighlighter,
};
use gh_pr_config::RenderConfig;
use std::io::Read;
use std::path::Path;

/// Run a subcommand with the given configuration
pub fn run(command: &Command, config: &RenderConfig) -> Result<String> {
    match command {
        Command::Diff {
            input,
            language,
            path,
        } => {
            let bytes = read_input(input)?;
            let patch = decode_patch(&bytes)
                .with_context(|| format!("Invalid patch input {}", input.display()))?;
            let hint = language
                .clone()
                .or_else(|| path.as_deref().and_then(language_hint_for_path));

            let highlighter = build_highlighter(config);
            let renderer = DiffRenderer::new(highlighter.as_ref(), render_options(config));
            let rendered = renderer.render_patch_with_hint(patch, hint.as_deref());
            log::info!("Rendered {} rows ({:?})", rendered.rows, rendered.outcome);
            Ok(rendered.html)
        }
        Command::Files { input } => {
            let json = read_text(input)?;
            let files = parse_files(&json)
                .with_context(|| format!("Invalid files input {}", input.display()))?;

            let highlighter = build_highlighter(config);
            let renderer = DiffRenderer::new(highlighter.as_ref(), render_options(config));
            Ok(renderer.render_files(&files))
        }
        Command::Comments { input } => {
            let json = read_text(input)?;
            let comments = parse_comments(&json)
                .with_context(|| format!("Invalid comments input {}", input.display()))?;

            let groups = group_comments(comments);
            if !groups.unanchored.is_empty() {
                log::warn!(
                    "{} comment(s) without a file path were skipped",
                    groups.unanchored.len()
                );
            }
            Ok(render_comment_groups(&groups, &CmarkRenderer))
        }
        Command::Css { theme } => {
            let theme = theme.as_deref().unwrap_or(&config.theme);
            SyntectHighlighter::new()
                .stylesheet(theme)
                .with_context(|| format!("Failed to build stylesheet for theme {}", theme))
        }
        Command::Themes => Ok(SyntectHighlighter::new().available_themes().join("\n")),
    }
}

fn build_highlighter(config: &RenderConfig) -> Box<dyn Highlighter> {
    if config.syntax_highlighting {
        Box::new(SyntectHighlighter::new())
    } else {
        Box::new(PlainHighlighter)
    }
}

fn render_options(config: &RenderConfig) -> RenderOptions {
    RenderOptions {
        placeholder: config.placeholder.clone(),
        language_hint: None,
    }
}

/// Read raw bytes from a file, or from stdin when the path is `-`
fn read_input(input: &Path) -> Result<Vec<u8>> {
    if input == Path::new("-") {
        let mut buffer = Vec::new();
        std::io::stdin()
            .read_to_end(&mut buffer)
            .context("Failed to read stdin")?;
        return Ok(buffer);
    }

    std::fs::read(input).with_context(|| format!("Failed to read {}", input.display()))
}

fn read_text(input: &Path) -> Result<String> {
    let bytes = read_input(input)?;
    String::from_utf8(bytes).with_context(|| format!("{} is not UTF-8 text", input.display()))
}
