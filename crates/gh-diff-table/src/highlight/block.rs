//! Whole-block highlighting with a guarded per-line fallback.

use super::LineSplitter;
use crate::html::escape_html;
use crate::traits::Highlighter;

/// Which path produced the highlighted fragments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightOutcome {
    /// There were no code lines; the highlighter was not called.
    Skipped,
    /// The joined code was highlighted in one call and split cleanly.
    Block,
    /// Block highlighting failed; escaped plain text was split instead.
    EscapedBlock,
    /// The block result did not line up, so every line was highlighted on its own.
    PerLine,
}

/// Highlighted fragments, one per code line, plus how they were produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightedLines {
    pub fragments: Vec<String>,
    pub outcome: HighlightOutcome,
}

/// Highlight `code` as one block and split the markup back into lines.
///
/// The markup is split on the highlighter's own wrapper tag. The result
/// always holds exactly `code.len()` fragments. If the split block does not
/// produce that many, the block is discarded and each line is highlighted
/// individually.
pub fn highlight_lines<H: Highlighter + ?Sized>(
    highlighter: &H,
    code: &[String],
    language_hint: Option<&str>,
) -> HighlightedLines {
    if code.is_empty() {
        return HighlightedLines {
            fragments: Vec::new(),
            outcome: HighlightOutcome::Skipped,
        };
    }

    let splitter = LineSplitter::new(highlighter.wrapper_tag());
    let joined = code.join("\n");
    let (blob, outcome) = match highlighter.highlight(&joined, language_hint) {
        Ok(html) => (html, HighlightOutcome::Block),
        Err(e) => {
            log::warn!("Highlighting failed, rendering plain text: {}", e);
            (escape_html(&joined), HighlightOutcome::EscapedBlock)
        }
    };

    let fragments = splitter.split(&blob);
    if fragments.len() == code.len() {
        return HighlightedLines {
            fragments,
            outcome,
        };
    }

    log::debug!(
        "Highlighted block split into {} fragments for {} lines, highlighting per line",
        fragments.len(),
        code.len()
    );

    let fragments = code
        .iter()
        .map(|line| highlight_single_line(highlighter, &splitter, line, language_hint))
        .collect();

    HighlightedLines {
        fragments,
        outcome: HighlightOutcome::PerLine,
    }
}

/// Highlight one line into exactly one fragment, falling back to escaped text.
fn highlight_single_line<H: Highlighter + ?Sized>(
    highlighter: &H,
    splitter: &LineSplitter,
    line: &str,
    language_hint: Option<&str>,
) -> String {
    let html = match highlighter.highlight(line, language_hint) {
        Ok(html) => html,
        Err(e) => {
            log::debug!("Highlighting line failed: {}", e);
            return escape_html(line);
        }
    };

    let mut fragments = splitter.split(&html);
    match (fragments.pop(), fragments.is_empty()) {
        (Some(fragment), true) => fragment,
        _ => escape_html(line),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{HighlightError, PlainHighlighter};
    use pretty_assertions::assert_eq;
    use std::cell::Cell;

    /// Wraps every line's text in a marker span and counts calls.
    #[derive(Default)]
    struct MarkerHighlighter {
        calls: Cell<usize>,
    }

    impl Highlighter for MarkerHighlighter {
        fn highlight(&self, text: &str, _hint: Option<&str>) -> Result<String, HighlightError> {
            self.calls.set(self.calls.get() + 1);
            Ok(format!("<span class=\"m\">{}</span>", escape_html(text)))
        }
    }

    /// Drops every newline from block input, forcing the per-line path.
    #[derive(Default)]
    struct NewlineEater {
        calls: Cell<usize>,
    }

    impl Highlighter for NewlineEater {
        fn highlight(&self, text: &str, _hint: Option<&str>) -> Result<String, HighlightError> {
            self.calls.set(self.calls.get() + 1);
            Ok(format!("<span>{}</span>", escape_html(&text.replace('\n', " "))))
        }
    }

    /// Emits `<em>` wrappers instead of spans.
    struct Emphasis;

    impl Highlighter for Emphasis {
        fn highlight(&self, text: &str, _hint: Option<&str>) -> Result<String, HighlightError> {
            Ok(format!("<em class=\"c\">{}</em>", escape_html(text)))
        }

        fn wrapper_tag(&self) -> &str {
            "em"
        }
    }

    struct Failing;

    impl Highlighter for Failing {
        fn highlight(&self, _text: &str, _hint: Option<&str>) -> Result<String, HighlightError> {
            Err(HighlightError::Engine("boom".to_string()))
        }
    }

    fn lines(code: &[&str]) -> Vec<String> {
        code.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_code_skips_highlighter() {
        let highlighter = MarkerHighlighter::default();
        let result = highlight_lines(&highlighter, &[], None);

        assert_eq!(result.outcome, HighlightOutcome::Skipped);
        assert!(result.fragments.is_empty());
        assert_eq!(highlighter.calls.get(), 0);
    }

    #[test]
    fn test_block_highlight_single_call() {
        let highlighter = MarkerHighlighter::default();
        let code = lines(&["a", "b < c"]);
        let result = highlight_lines(&highlighter, &code, None);

        assert_eq!(result.outcome, HighlightOutcome::Block);
        assert_eq!(highlighter.calls.get(), 1);
        assert_eq!(
            result.fragments,
            vec![
                "<span class=\"m\">a</span>",
                "<span class=\"m\">b &lt; c</span>",
            ]
        );
    }

    #[test]
    fn test_mismatched_newlines_fall_back_per_line() {
        let highlighter = NewlineEater::default();
        let code = lines(&["one", "two", "three"]);
        let result = highlight_lines(&highlighter, &code, None);

        assert_eq!(result.outcome, HighlightOutcome::PerLine);
        // One block call plus one call per line
        assert_eq!(highlighter.calls.get(), 4);
        assert_eq!(
            result.fragments,
            vec!["<span>one</span>", "<span>two</span>", "<span>three</span>"]
        );
    }

    #[test]
    fn test_failure_falls_back_to_escaped_text() {
        let code = lines(&["<a>", "b"]);
        let result = highlight_lines(&Failing, &code, None);

        assert_eq!(result.outcome, HighlightOutcome::EscapedBlock);
        assert_eq!(result.fragments, vec!["&lt;a&gt;", "b"]);
    }

    #[test]
    fn test_trailing_empty_line_stays_aligned() {
        // "x\n" splits into one fragment, so the per-line path takes over
        let code = lines(&["x", ""]);
        let result = highlight_lines(&PlainHighlighter, &code, None);

        assert_eq!(result.outcome, HighlightOutcome::PerLine);
        assert_eq!(result.fragments, vec!["x", ""]);
    }

    #[test]
    fn test_failure_and_mismatch_still_aligned() {
        let code = lines(&["", ""]);
        let result = highlight_lines(&Failing, &code, None);

        assert_eq!(result.outcome, HighlightOutcome::PerLine);
        assert_eq!(result.fragments, vec!["", ""]);
    }

    #[test]
    fn test_split_uses_highlighter_wrapper_tag() {
        let code = lines(&["/* a", "b */"]);
        let result = highlight_lines(&Emphasis, &code, None);

        assert_eq!(result.outcome, HighlightOutcome::Block);
        assert_eq!(
            result.fragments,
            vec![
                "<em class=\"c\">/* a</em>",
                "<em class=\"c\">b */</em>",
            ]
        );
    }
}
