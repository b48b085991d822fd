//! Classify the physical lines of a patch into numbered line records.

use super::hunk::parse_hunk_header;
use crate::model::{ClassifiedPatch, HunkStart, LineKind, LineNumbers};

/// Running old/new line counters. Zero means "not initialized yet".
#[derive(Debug, Default)]
struct LineCounters {
    old: u32,
    new: u32,
}

impl LineCounters {
    fn reset(&mut self, start: HunkStart) {
        self.old = start.old_start;
        self.new = start.new_start;
    }

    fn next_old(&mut self) -> Option<u32> {
        advance(&mut self.old)
    }

    fn next_new(&mut self) -> Option<u32> {
        advance(&mut self.new)
    }
}

/// Return the current value and move past it; an uninitialized counter stays at zero.
fn advance(counter: &mut u32) -> Option<u32> {
    if *counter == 0 {
        return None;
    }
    let current = *counter;
    *counter = current.saturating_add(1);
    Some(current)
}

/// Classify a unified-diff patch in a single pass.
///
/// Hunk headers update the counters and file headers (`+++`/`---`) are
/// dropped; every other physical line becomes exactly one record. A hunk
/// header that does not parse leaves the counters where they were.
///
/// A blank or whitespace-only patch yields an empty result.
pub fn classify_patch(patch: &str) -> ClassifiedPatch {
    let mut classified = ClassifiedPatch::new();
    if patch.trim().is_empty() {
        return classified;
    }

    let mut counters = LineCounters::default();

    for line in patch.split('\n') {
        if line.starts_with("@@") {
            match parse_hunk_header(line) {
                Some(start) => counters.reset(start),
                None => log::debug!("Keeping line counters for malformed hunk header: {line}"),
            }
            continue;
        }

        if line.starts_with("+++") || line.starts_with("---") {
            continue;
        }

        if let Some(code) = line.strip_prefix('+') {
            let numbers = LineNumbers::new(None, counters.next_new());
            classified.push(LineKind::Addition, numbers, code);
        } else if let Some(code) = line.strip_prefix('-') {
            let numbers = LineNumbers::new(counters.next_old(), None);
            classified.push(LineKind::Deletion, numbers, code);
        } else {
            let code = line.strip_prefix(' ').unwrap_or(line);
            let numbers = LineNumbers::new(counters.next_old(), counters.next_new());
            classified.push(LineKind::Context, numbers, code);
        }
    }

    classified
}
