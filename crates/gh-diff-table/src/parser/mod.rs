//! Unified diff parsing (as returned in the `patch` field by the GitHub API).

mod classify;
mod hunk;

pub use classify::classify_patch;
pub use hunk::parse_hunk_header;
