//! Data structures produced by classifying a unified-diff patch.

/// Starting line numbers taken from a hunk header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HunkStart {
    /// Old file starting line.
    pub old_start: u32,
    /// New file starting line.
    pub new_start: u32,
}

/// Line type in the diff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Unchanged line (for context).
    Context,
    /// Added line (+).
    Addition,
    /// Removed line (-).
    Deletion,
}

impl LineKind {
    /// Get the marker glyph shown in front of the code.
    pub fn prefix(&self) -> char {
        match self {
            LineKind::Context => ' ',
            LineKind::Addition => '+',
            LineKind::Deletion => '-',
        }
    }

    /// CSS class of the table row for this line type.
    pub fn row_class(&self) -> &'static str {
        match self {
            LineKind::Context => "diff-context",
            LineKind::Addition => "diff-addition",
            LineKind::Deletion => "diff-deletion",
        }
    }
}

/// Old/new line number pair. `None` renders as an empty cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineNumbers {
    /// Line number in old file (for Context and Deletion).
    pub old: Option<u32>,
    /// Line number in new file (for Context and Addition).
    pub new: Option<u32>,
}

impl LineNumbers {
    pub fn new(old: Option<u32>, new: Option<u32>) -> Self {
        Self { old, new }
    }
}

/// A patch split into per-line records.
///
/// The line kinds, numbers and code are kept in three parallel vectors that
/// are only ever extended together through [`ClassifiedPatch::push`], so
/// their lengths always agree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedPatch {
    kinds: Vec<LineKind>,
    numbers: Vec<LineNumbers>,
    code: Vec<String>,
}

impl ClassifiedPatch {
    /// Create an empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one line record.
    pub fn push(&mut self, kind: LineKind, numbers: LineNumbers, code: impl Into<String>) {
        self.kinds.push(kind);
        self.numbers.push(numbers);
        self.code.push(code.into());
    }

    /// Number of line records.
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    pub fn kinds(&self) -> &[LineKind] {
        &self.kinds
    }

    pub fn numbers(&self) -> &[LineNumbers] {
        &self.numbers
    }

    /// Code of each line, diff markers stripped.
    pub fn code(&self) -> &[String] {
        &self.code
    }

    /// All code lines joined by `\n`, ready for block highlighting.
    pub fn joined_code(&self) -> String {
        self.code.join("\n")
    }

    /// Number of added lines.
    pub fn additions(&self) -> usize {
        self.count(LineKind::Addition)
    }

    /// Number of removed lines.
    pub fn deletions(&self) -> usize {
        self.count(LineKind::Deletion)
    }

    fn count(&self, kind: LineKind) -> usize {
        self.kinds.iter().filter(|k| **k == kind).count()
    }
}
