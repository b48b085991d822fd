//! Trait for rendering comment bodies from markdown to HTML.

use pulldown_cmark::{html, Options, Parser};

/// Converts markdown text to HTML.
pub trait MarkdownRenderer {
    fn render(&self, text: &str) -> String;
}

/// [`MarkdownRenderer`] backed by `pulldown-cmark` with the GitHub
/// extensions comments commonly use (tables, strikethrough, task lists).
#[derive(Debug, Clone, Copy, Default)]
pub struct CmarkRenderer;

impl CmarkRenderer {
    fn options() -> Options {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TASKLISTS);
        options
    }
}

impl MarkdownRenderer for CmarkRenderer {
    fn render(&self, text: &str) -> String {
        let parser = Parser::new_ext(text, Self::options());
        let mut output = String::with_capacity(text.len() * 3 / 2);
        html::push_html(&mut output, parser);
        output
    }
}
