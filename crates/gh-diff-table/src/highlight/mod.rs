//! Syntax highlighting of diff code and redistribution onto lines.

mod block;
mod highlighter;
mod splitter;

pub use block::{highlight_lines, HighlightOutcome, HighlightedLines};
pub use highlighter::{language_hint_for_path, SyntectHighlighter};
pub use splitter::LineSplitter;
