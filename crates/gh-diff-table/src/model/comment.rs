//! Review comment and pull-request file records as returned by the GitHub API.
//!
//! Only the fields this crate reads are modelled; anything else in the
//! payload is ignored during deserialization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Author of a review comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentUser {
    /// GitHub username.
    pub login: String,
}

/// A review (line) comment on a pull request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewComment {
    /// GitHub comment ID.
    pub id: u64,
    /// File path the comment is on.
    #[serde(default)]
    pub path: Option<String>,
    /// Line number in the current version of the file.
    #[serde(default)]
    pub line: Option<u32>,
    /// Line number the comment was originally made on.
    #[serde(default)]
    pub original_line: Option<u32>,
    /// Comment body (markdown).
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub user: Option<CommentUser>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Parent comment ID when this is a reply.
    #[serde(default)]
    pub in_reply_to_id: Option<u64>,
    #[serde(default)]
    pub html_url: Option<String>,
}

impl ReviewComment {
    /// Create a comment with only the anchoring fields set.
    pub fn new(id: u64, path: Option<&str>, line: Option<u32>, original_line: Option<u32>) -> Self {
        Self {
            id,
            path: path.map(str::to_string),
            line,
            original_line,
            body: String::new(),
            user: None,
            created_at: None,
            in_reply_to_id: None,
            html_url: None,
        }
    }

    /// Effective line used for ordering: `line`, else `original_line`, else 0.
    ///
    /// A line of 0 counts as absent.
    pub fn sort_line(&self) -> u32 {
        self.line
            .filter(|n| *n != 0)
            .or(self.original_line.filter(|n| *n != 0))
            .unwrap_or(0)
    }

    /// Author login, if the payload carried one.
    pub fn author(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.login.as_str())
    }
}

/// Comments grouped by file path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommentGroups {
    /// Comments per path, each group ordered by [`ReviewComment::sort_line`].
    pub by_path: BTreeMap<String, Vec<ReviewComment>>,
    /// IDs of comments that had no path and were left out.
    pub unanchored: Vec<u64>,
}

impl CommentGroups {
    /// Comments for a single path, in display order.
    pub fn get(&self, path: &str) -> Option<&[ReviewComment]> {
        self.by_path.get(path).map(Vec::as_slice)
    }

    /// Total number of grouped comments.
    pub fn total(&self) -> usize {
        self.by_path.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_path.is_empty()
    }
}

/// A changed file of a pull request (`GET /pulls/{n}/files`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestFile {
    pub filename: String,
    /// `added`, `modified`, `removed`, `renamed`, ...
    #[serde(default)]
    pub status: Option<String>,
    /// Unified diff. Missing for binary or very large files.
    #[serde(default)]
    pub patch: Option<String>,
}
