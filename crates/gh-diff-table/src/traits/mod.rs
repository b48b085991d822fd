//! Extension traits for the external collaborators of the renderer.

mod highlighter;
mod markdown;

pub use highlighter::{HighlightError, Highlighter, PlainHighlighter};
pub use markdown::{CmarkRenderer, MarkdownRenderer};
