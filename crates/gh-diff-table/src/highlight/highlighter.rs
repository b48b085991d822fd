//! Syntax highlighter using syntect's classed HTML output.

use crate::traits::{HighlightError, Highlighter};
use std::path::Path;
use syntect::highlighting::ThemeSet;
use syntect::html::{css_for_theme_with_class_style, ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

/// Class naming used for emitted spans and the generated stylesheet.
const CLASS_STYLE: ClassStyle = ClassStyle::Spaced;

/// Highlights code into nested `<span class="...">` markup.
///
/// Colors are not inlined; pair the output with [`SyntectHighlighter::stylesheet`].
pub struct SyntectHighlighter {
    /// Syntax definitions.
    syntax_set: SyntaxSet,
    /// Bundled themes, only used for stylesheets.
    theme_set: ThemeSet,
}

impl std::fmt::Debug for SyntectHighlighter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyntectHighlighter")
            .field("syntaxes", &self.syntax_set.syntaxes().len())
            .field("themes", &self.theme_set.themes.len())
            .finish()
    }
}

impl Default for SyntectHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntectHighlighter {
    /// Create a highlighter with the bundled syntaxes and themes.
    pub fn new() -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
        }
    }

    /// Names of the bundled themes, sorted.
    pub fn available_themes(&self) -> Vec<&str> {
        self.theme_set.themes.keys().map(String::as_str).collect()
    }

    /// CSS rules for the classes this highlighter emits, using `theme_name`'s colors.
    pub fn stylesheet(&self, theme_name: &str) -> Result<String, HighlightError> {
        let theme = self
            .theme_set
            .themes
            .get(theme_name)
            .ok_or_else(|| HighlightError::UnknownTheme(theme_name.to_string()))?;

        css_for_theme_with_class_style(theme, CLASS_STYLE)
            .map_err(|e| HighlightError::Engine(e.to_string()))
    }

    /// Pick a syntax: language hint first, then the first line of the
    /// text (shebangs, modelines), then plain text.
    pub fn resolve_syntax(&self, text: &str, language_hint: Option<&str>) -> &SyntaxReference {
        language_hint
            .and_then(|hint| self.find_by_hint(hint))
            .or_else(|| {
                text.lines()
                    .next()
                    .and_then(|first| self.syntax_set.find_syntax_by_first_line(first))
            })
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text())
    }

    fn find_by_hint(&self, hint: &str) -> Option<&SyntaxReference> {
        let hint = hint.trim();
        if hint.is_empty() {
            return None;
        }

        self.syntax_set.find_syntax_by_token(hint).or_else(|| {
            // Languages without a bundled syntax map onto a close relative
            let mapped = match hint.to_lowercase().as_str() {
                "ts" | "tsx" | "mts" | "cts" | "typescript" => "js",
                "jsx" | "mjs" | "cjs" => "js",
                "yml" => "yaml",
                "md" => "markdown",
                _ => return None,
            };
            self.syntax_set.find_syntax_by_token(mapped)
        })
    }
}

impl Highlighter for SyntectHighlighter {
    fn highlight(&self, text: &str, language_hint: Option<&str>) -> Result<String, HighlightError> {
        let syntax = self.resolve_syntax(text, language_hint);
        let mut generator =
            ClassedHTMLGenerator::new_with_class_style(syntax, &self.syntax_set, CLASS_STYLE);

        for line in LinesWithEndings::from(text) {
            generator
                .parse_html_for_line_which_includes_newline(line)
                .map_err(|e| HighlightError::Engine(e.to_string()))?;
        }

        Ok(generator.finalize())
    }
}

/// Derive a language hint from a file path: its lowercase extension, or the
/// file name for extension-less files such as `Makefile`.
pub fn language_hint_for_path(path: &str) -> Option<String> {
    let path = Path::new(path);
    path.extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .or_else(|| path.file_name().and_then(|n| n.to_str()).map(str::to_string))
        .filter(|hint| !hint.is_empty())
}
