//! Hunk header parsing.

use crate::model::HunkStart;
use regex::Regex;
use std::sync::OnceLock;

/// Parse a hunk header line and return its starting line numbers.
///
/// Accepts `@@ -<old>[,<count>] +<new>[,<count>] @@`, optionally followed by
/// function context. Counts are ignored. Anything else, including a line
/// that starts with `@@` but has a malformed body, returns `None`.
pub fn parse_hunk_header(line: &str) -> Option<HunkStart> {
    static HUNK_REGEX: OnceLock<Regex> = OnceLock::new();

    let re = HUNK_REGEX
        .get_or_init(|| Regex::new(r"^@@ -(\d+)(?:,\d+)? \+(\d+)(?:,\d+)? @@").unwrap());

    let captures = re.captures(line)?;
    let old_start = captures.get(1)?.as_str().parse().ok()?;
    let new_start = captures.get(2)?.as_str().parse().ok()?;

    Some(HunkStart {
        old_start,
        new_start,
    })
}
