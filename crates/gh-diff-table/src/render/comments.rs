//! HTML rendering of review comments grouped by file.

use crate::html::escape_html;
use crate::model::{CommentGroups, ReviewComment};
use crate::traits::MarkdownRenderer;

/// Render grouped comments: one section per path, paths ascending, comments
/// in group order with their bodies rendered as markdown.
pub fn render_comment_groups(groups: &CommentGroups, markdown: &dyn MarkdownRenderer) -> String {
    if groups.is_empty() {
        return "<div class=\"comment-empty\">No comments</div>".to_string();
    }

    let mut html = String::from("<div class=\"comment-groups\">\n");
    for (path, comments) in &groups.by_path {
        html.push_str("<section class=\"comment-file\"><h3 class=\"comment-path\">");
        html.push_str(&escape_html(path));
        html.push_str("</h3>\n");
        for comment in comments {
            push_comment(&mut html, comment, markdown);
        }
        html.push_str("</section>\n");
    }
    html.push_str("</div>");
    html
}

fn push_comment(html: &mut String, comment: &ReviewComment, markdown: &dyn MarkdownRenderer) {
    html.push_str(&format!(
        "<div class=\"comment\" data-comment-id=\"{}\"><div class=\"comment-meta\"><span class=\"comment-author\">{}</span>",
        comment.id,
        escape_html(comment.author().unwrap_or("unknown")),
    ));

    let line = comment.sort_line();
    if line > 0 {
        html.push_str(&format!(" <span class=\"comment-line\">line {}</span>", line));
    }

    html.push_str("</div><div class=\"comment-body\">");
    html.push_str(&markdown.render(&comment.body));
    html.push_str("</div></div>\n");
}
