//! Trait for syntax highlighting source text into HTML.

use crate::html::escape_html;
use thiserror::Error;

/// Errors that can occur while highlighting.
#[derive(Debug, Error)]
pub enum HighlightError {
    /// The highlighting engine failed on the given input.
    #[error("Highlighting failed: {0}")]
    Engine(String),

    /// The requested theme is not bundled.
    #[error("Unknown theme: {0}")]
    UnknownTheme(String),
}

/// Highlights source text into HTML.
///
/// Implementations return markup made of one nested wrapper tag family,
/// named by [`Highlighter::wrapper_tag`], and must not add or remove line
/// breaks: the output has to contain exactly the newlines of the input.
/// Text content must be HTML-escaped.
///
/// The renderer only needs `&self`; implementations that are `Sync` can be
/// shared between threads rendering different patches.
///
/// # Example
///
/// ```ignore
/// struct Shouting;
///
/// impl Highlighter for Shouting {
///     fn highlight(&self, text: &str, _hint: Option<&str>) -> Result<String, HighlightError> {
///         Ok(format!("<span class=\"loud\">{}</span>", escape_html(&text.to_uppercase())))
///     }
/// }
/// ```
pub trait Highlighter {
    /// Highlight `text`, optionally guided by a language hint such as a
    /// file extension (`"rs"`) or a language name (`"Rust"`).
    fn highlight(&self, text: &str, language_hint: Option<&str>) -> Result<String, HighlightError>;

    /// Name of the wrapper tag this highlighter emits. Line splitting
    /// tracks only this tag.
    fn wrapper_tag(&self) -> &str {
        "span"
    }
}

/// A highlighter that only escapes text, for when highlighting is disabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainHighlighter;

impl Highlighter for PlainHighlighter {
    fn highlight(&self, text: &str, _language_hint: Option<&str>) -> Result<String, HighlightError> {
        Ok(escape_html(text))
    }
}
