//! Table assembly from classified lines and highlighted fragments.

use crate::html::escape_html;
use crate::model::{ClassifiedPatch, LineKind, LineNumbers};
use std::borrow::Cow;

/// CSS class of the table element.
pub const TABLE_CLASS: &str = "diff-table";

/// Render the placeholder shown instead of a table when there is nothing to diff.
pub fn render_placeholder(text: &str) -> String {
    format!("<div class=\"diff-empty\">{}</div>", escape_html(text))
}

/// Render one HTML table row per line of `patch`.
///
/// `fragments` are the highlighted lines from [`crate::highlight_lines`] for
/// `patch.code()`. The patch alone decides the rows: a line without a
/// fragment shows its escaped code, and surplus fragments are ignored. An
/// empty patch renders the placeholder instead of an empty table.
pub(crate) fn render_table(patch: &ClassifiedPatch, fragments: &[String], placeholder: &str) -> String {
    if patch.is_empty() {
        return render_placeholder(placeholder);
    }
    if fragments.len() != patch.len() {
        log::warn!(
            "Got {} highlighted fragments for {} lines, filling in plain text",
            fragments.len(),
            patch.len()
        );
    }

    let mut html = String::with_capacity(patch.code().iter().map(|c| c.len() + 160).sum());
    html.push_str("<table class=\"");
    html.push_str(TABLE_CLASS);
    html.push_str("\">\n");

    for (index, ((kind, numbers), code)) in patch
        .kinds()
        .iter()
        .zip(patch.numbers())
        .zip(patch.code())
        .enumerate()
    {
        let fragment = match fragments.get(index) {
            Some(fragment) => Cow::Borrowed(fragment.as_str()),
            None => Cow::Owned(escape_html(code)),
        };
        push_row(&mut html, *kind, numbers, &fragment);
    }

    html.push_str("</table>");
    html
}

fn push_row(html: &mut String, kind: LineKind, numbers: &LineNumbers, fragment: &str) {
    // Additions never show an old number and deletions never a new one
    let (old, new) = match kind {
        LineKind::Addition => (None, numbers.new),
        LineKind::Deletion => (numbers.old, None),
        LineKind::Context => (numbers.old, numbers.new),
    };

    html.push_str(&format!(
        "<tr class=\"diff-line {}\"><td class=\"diff-line-number diff-old\">{}</td><td class=\"diff-line-number diff-new\">{}</td><td class=\"diff-code\"><span class=\"diff-marker\">{}</span>{}</td></tr>\n",
        kind.row_class(),
        number_cell(old),
        number_cell(new),
        kind.prefix(),
        fragment,
    ));
}

fn number_cell(number: Option<u32>) -> String {
    number.map(|n| n.to_string()).unwrap_or_default()
}
