//! End-to-end rendering of patches into diff tables.

use super::table::{render_placeholder, render_table};
use crate::highlight::{highlight_lines, language_hint_for_path, HighlightOutcome};
use crate::html::escape_html;
use crate::model::PullRequestFile;
use crate::parser::classify_patch;
use crate::traits::Highlighter;

/// Options that shape the rendered output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Text shown instead of a table when a patch has no lines.
    pub placeholder: String,
    /// Language hint passed to the highlighter. For file lists this
    /// overrides the hint derived from each file name.
    pub language_hint: Option<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            placeholder: "No diff available".to_string(),
            language_hint: None,
        }
    }
}

impl RenderOptions {
    /// Set the language hint.
    pub fn with_language_hint(mut self, hint: impl Into<String>) -> Self {
        self.language_hint = Some(hint.into());
        self
    }

    /// Set the placeholder text.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }
}

/// Result of rendering one patch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDiff {
    /// The `<table>` markup, or the placeholder.
    pub html: String,
    /// Number of table rows.
    pub rows: usize,
    /// How the code was highlighted.
    pub outcome: HighlightOutcome,
}

impl RenderedDiff {
    fn placeholder(text: &str) -> Self {
        Self {
            html: render_placeholder(text),
            rows: 0,
            outcome: HighlightOutcome::Skipped,
        }
    }
}

/// Renders patches with an injected highlighter.
///
/// Holds no per-render state; every call works on its own buffers.
pub struct DiffRenderer<'a, H: Highlighter + ?Sized> {
    highlighter: &'a H,
    options: RenderOptions,
}

impl<'a, H: Highlighter + ?Sized> DiffRenderer<'a, H> {
    pub fn new(highlighter: &'a H, options: RenderOptions) -> Self {
        Self {
            highlighter,
            options,
        }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Render one patch using the configured language hint.
    pub fn render_patch(&self, patch: &str) -> RenderedDiff {
        self.render_patch_with_hint(patch, self.options.language_hint.as_deref())
    }

    /// Render one patch with an explicit language hint.
    pub fn render_patch_with_hint(&self, patch: &str, language_hint: Option<&str>) -> RenderedDiff {
        if patch.trim().is_empty() {
            return RenderedDiff::placeholder(&self.options.placeholder);
        }

        let classified = classify_patch(patch);
        if classified.is_empty() {
            return RenderedDiff::placeholder(&self.options.placeholder);
        }

        let highlighted = highlight_lines(self.highlighter, classified.code(), language_hint);
        log::debug!(
            "Rendered {} lines (+{} -{}) via {:?}",
            classified.len(),
            classified.additions(),
            classified.deletions(),
            highlighted.outcome
        );

        RenderedDiff {
            html: render_table(&classified, &highlighted.fragments, &self.options.placeholder),
            rows: classified.len(),
            outcome: highlighted.outcome,
        }
    }

    /// Render the files of a pull request, one section per file.
    ///
    /// The language hint comes from each file name unless the options set one.
    /// Files without a patch (binary or too large) show the placeholder.
    pub fn render_files(&self, files: &[PullRequestFile]) -> String {
        let mut html = String::from("<div class=\"diff-files\">\n");

        for file in files {
            let hint = self
                .options
                .language_hint
                .clone()
                .or_else(|| language_hint_for_path(&file.filename));
            let rendered = match file.patch.as_deref() {
                Some(patch) => self.render_patch_with_hint(patch, hint.as_deref()),
                None => RenderedDiff::placeholder(&self.options.placeholder),
            };

            html.push_str("<section class=\"diff-file\"");
            if let Some(status) = &file.status {
                html.push_str(" data-status=\"");
                html.push_str(&escape_html(status));
                html.push('"');
            }
            html.push_str("><h3 class=\"diff-file-name\">");
            html.push_str(&escape_html(&file.filename));
            html.push_str("</h3>\n");
            html.push_str(&rendered.html);
            html.push_str("\n</section>\n");
        }

        html.push_str("</div>");
        html
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::{LineSplitter, SyntectHighlighter};
    use crate::traits::{HighlightError, PlainHighlighter};
    use pretty_assertions::assert_eq;

    /// Deterministic double: one marker span around the whole input.
    struct Marker;

    impl Highlighter for Marker {
        fn highlight(&self, text: &str, _hint: Option<&str>) -> Result<String, HighlightError> {
            Ok(format!("<span class=\"t\">{}</span>", escape_html(text)))
        }
    }

    fn row_count(html: &str) -> usize {
        html.matches("<tr ").count()
    }

    #[test]
    fn test_render_concrete_scenario() {
        let renderer = DiffRenderer::new(&PlainHighlighter, RenderOptions::default());
        let rendered = renderer.render_patch("@@ -1,2 +1,3 @@\n-old line\n+new line\n context");

        assert_eq!(rendered.rows, 3);
        assert_eq!(row_count(&rendered.html), 3);
        assert!(rendered.html.contains("diff-deletion\"><td class=\"diff-line-number diff-old\">1</td><td class=\"diff-line-number diff-new\"></td>"));
        assert!(rendered.html.contains("diff-addition\"><td class=\"diff-line-number diff-old\"></td><td class=\"diff-line-number diff-new\">1</td>"));
        assert!(rendered.html.contains("diff-context\"><td class=\"diff-line-number diff-old\">2</td><td class=\"diff-line-number diff-new\">2</td>"));
    }

    #[test]
    fn test_empty_patch_placeholder() {
        let renderer = DiffRenderer::new(&Marker, RenderOptions::default());

        for patch in ["", "   \n  "] {
            let rendered = renderer.render_patch(patch);
            assert_eq!(rendered.rows, 0);
            assert_eq!(
                rendered.html,
                "<div class=\"diff-empty\">No diff available</div>"
            );
        }
    }

    #[test]
    fn test_file_headers_only_placeholder() {
        let renderer = DiffRenderer::new(&Marker, RenderOptions::default());
        let rendered = renderer.render_patch("+++ a\n--- b");

        assert_eq!(rendered.rows, 0);
        assert_eq!(rendered.outcome, HighlightOutcome::Skipped);
        assert!(!rendered.html.contains("<table"));
    }

    #[test]
    fn test_malformed_hunk_header_quirk() {
        let renderer = DiffRenderer::new(&PlainHighlighter, RenderOptions::default());
        let rendered = renderer.render_patch("@@ -10 +20 @@\n a\n@@ garbage @@\n b");

        assert!(rendered.html.contains(">11</td><td class=\"diff-line-number diff-new\">21</td>"));
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let highlighter = SyntectHighlighter::new();
        let renderer = DiffRenderer::new(&highlighter, RenderOptions::default());
        let patch = "@@ -1,3 +1,4 @@\n /* keep\n-   old */\n+   new */\n+fn added() {}\n fn main() {}";

        let first = renderer.render_patch_with_hint(patch, Some("rs"));
        let second = renderer.render_patch_with_hint(patch, Some("rs"));
        assert_eq!(first, second);
        assert_eq!(first.outcome, HighlightOutcome::Block);
    }

    #[test]
    fn test_rows_match_lines_for_assorted_patches() {
        let highlighter = SyntectHighlighter::new();
        let renderer = DiffRenderer::new(&highlighter, RenderOptions::default());
        let patches = [
            "no hunk at all\njust text",
            "@@ -0,0 +1,2 @@\n+only\n+additions",
            "@@ -1,2 +0,0 @@\n-only\n-removals",
            "@@ -1 +1 @@\n-a\n+b\n",
            "@@ -1,2 +1,2 @@\n /* open\n-x\n+y\n@@ -9 +9 @@\n close */",
        ];

        for patch in patches {
            let expected = patch
                .split('\n')
                .filter(|l| !l.starts_with("@@") && !l.starts_with("+++") && !l.starts_with("---"))
                .count();
            let rendered = renderer.render_patch(patch);
            assert_eq!(rendered.rows, expected, "patch: {patch:?}");
            assert_eq!(row_count(&rendered.html), expected, "patch: {patch:?}");
        }
    }

    #[test]
    fn test_syntect_rows_are_balanced() {
        let highlighter = SyntectHighlighter::new();
        let renderer = DiffRenderer::new(&highlighter, RenderOptions::default());
        let rendered =
            renderer.render_patch_with_hint("@@ -1,3 +1,3 @@\n /* a\n  b */\n fn x() {}", Some("rs"));

        assert_eq!(rendered.outcome, HighlightOutcome::Block);
        let splitter = LineSplitter::new(highlighter.wrapper_tag());
        let rows: Vec<&str> = rendered.html.lines().filter(|l| l.starts_with("<tr ")).collect();
        assert_eq!(rows.len(), 3);
        for row in rows {
            let (opened, closed) = splitter.tag_balance(row);
            assert_eq!(opened, closed, "unbalanced row: {row}");
        }
    }

    #[test]
    fn test_highlighted_fragments_in_cells() {
        let renderer = DiffRenderer::new(&Marker, RenderOptions::default());
        let rendered = renderer.render_patch("@@ -1,2 +1,2 @@\n a\n-b");

        assert_eq!(rendered.outcome, HighlightOutcome::Block);
        assert!(rendered.html.contains("<span class=\"diff-marker\"> </span><span class=\"t\">a</span></td>"));
        assert!(rendered.html.contains("<span class=\"diff-marker\">-</span><span class=\"t\">b</span></td>"));
    }

    #[test]
    fn test_render_files() {
        let renderer = DiffRenderer::new(&PlainHighlighter, RenderOptions::default());
        let files = vec![
            PullRequestFile {
                filename: "src/lib.rs".to_string(),
                status: Some("modified".to_string()),
                patch: Some("@@ -1 +1 @@\n-a\n+b".to_string()),
            },
            PullRequestFile {
                filename: "logo.png".to_string(),
                status: Some("added".to_string()),
                patch: None,
            },
        ];

        let html = renderer.render_files(&files);
        assert!(html.starts_with("<div class=\"diff-files\">"));
        assert!(html.contains("<section class=\"diff-file\" data-status=\"modified\"><h3 class=\"diff-file-name\">src/lib.rs</h3>"));
        assert!(html.contains("<h3 class=\"diff-file-name\">logo.png</h3>\n<div class=\"diff-empty\">No diff available</div>"));
        assert_eq!(row_count(&html), 2);
    }

    #[test]
    fn test_custom_placeholder() {
        let options = RenderOptions::default().with_placeholder("Nothing here");
        let renderer = DiffRenderer::new(&PlainHighlighter, options);
        assert_eq!(
            renderer.render_patch("").html,
            "<div class=\"diff-empty\">Nothing here</div>"
        );
    }
}
