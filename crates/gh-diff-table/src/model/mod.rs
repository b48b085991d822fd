//! Data models for classified patches and review comments.

mod comment;
mod diff;

pub use comment::{CommentGroups, CommentUser, PullRequestFile, ReviewComment};
pub use diff::{ClassifiedPatch, HunkStart, LineKind, LineNumbers};
