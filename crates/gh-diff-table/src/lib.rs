//! # gh-diff-table
//!
//! Turns the `patch` field of a GitHub pull-request file and the review
//! comments attached to it into display-ready HTML.
//!
//! ## Design Principles
//!
//! This crate is **pure**: it receives already-fetched text and returns
//! markup as a value. It never performs network or file I/O. Syntax
//! highlighting and markdown rendering are injected through the
//! [`Highlighter`] and [`MarkdownRenderer`] traits, which keeps the
//! pipeline testable with deterministic doubles.
//!
//! ## Pipeline
//!
//! 1. [`classify_patch`] walks the patch once, numbering lines and stripping
//!    diff markers into three parallel arrays.
//! 2. The joined code is highlighted as a single block so multi-line tokens
//!    (block comments, strings) are recognised.
//! 3. [`LineSplitter`] redistributes the highlighted markup onto line
//!    boundaries, closing and reopening wrapper tags so every fragment is
//!    self-contained.
//! 4. [`DiffRenderer`] assembles one `<table>` row per classified line.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use gh_diff_table::{DiffRenderer, RenderOptions, SyntectHighlighter};
//!
//! let highlighter = SyntectHighlighter::new();
//! let renderer = DiffRenderer::new(&highlighter, RenderOptions::default());
//! let rendered = renderer.render_patch("@@ -1 +1 @@\n-old\n+new");
//! println!("{}", rendered.html);
//! ```

pub mod grouping;
pub mod highlight;
pub mod html;
pub mod input;
pub mod model;
pub mod parser;
pub mod render;
pub mod traits;

// Re-export commonly used types
pub use grouping::group_comments;
pub use highlight::{
    highlight_lines, language_hint_for_path, HighlightOutcome, HighlightedLines, LineSplitter,
    SyntectHighlighter,
};
pub use input::{decode_patch, parse_comments, parse_files, InputError};
pub use model::{
    ClassifiedPatch, CommentGroups, CommentUser, HunkStart, LineKind, LineNumbers,
    PullRequestFile, ReviewComment,
};
pub use parser::{classify_patch, parse_hunk_header};
pub use render::{
    render_comment_groups, render_placeholder, DiffRenderer, RenderOptions, RenderedDiff,
};
pub use traits::{CmarkRenderer, HighlightError, Highlighter, MarkdownRenderer, PlainHighlighter};
