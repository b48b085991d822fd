//! HTML rendering of diff tables and comment threads.

mod comments;
mod diff;
mod table;

pub use comments::render_comment_groups;
pub use diff::{DiffRenderer, RenderOptions, RenderedDiff};
pub use table::{render_placeholder, TABLE_CLASS};
