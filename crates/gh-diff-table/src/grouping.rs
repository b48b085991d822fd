//! Grouping of review comments by file.

use crate::model::{CommentGroups, ReviewComment};

/// Group comments by path, each group sorted by [`ReviewComment::sort_line`].
///
/// The sort is stable, so comments on the same line keep their input
/// (reply) order. Comments without a path are left out, logged, and their
/// IDs reported in [`CommentGroups::unanchored`].
pub fn group_comments(comments: impl IntoIterator<Item = ReviewComment>) -> CommentGroups {
    let mut groups = CommentGroups::default();

    for comment in comments {
        match comment.path.clone() {
            Some(path) => groups.by_path.entry(path).or_default().push(comment),
            None => {
                log::warn!("Dropping review comment {} without a file path", comment.id);
                groups.unanchored.push(comment.id);
            }
        }
    }

    for comments in groups.by_path.values_mut() {
        comments.sort_by_key(ReviewComment::sort_line);
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(comments: &[ReviewComment]) -> Vec<u64> {
        comments.iter().map(|c| c.id).collect()
    }

    #[test]
    fn test_stable_sort_within_path() {
        let groups = group_comments(vec![
            ReviewComment::new(1, Some("a"), Some(5), None),
            ReviewComment::new(2, Some("a"), Some(5), None),
            ReviewComment::new(3, Some("a"), Some(2), None),
        ]);

        assert_eq!(ids(groups.get("a").unwrap()), vec![3, 1, 2]);
    }

    #[test]
    fn test_groups_by_path() {
        let groups = group_comments(vec![
            ReviewComment::new(1, Some("src/b.rs"), Some(1), None),
            ReviewComment::new(2, Some("src/a.rs"), Some(9), None),
            ReviewComment::new(3, Some("src/b.rs"), None, Some(4)),
        ]);

        let paths: Vec<&str> = groups.by_path.keys().map(String::as_str).collect();
        assert_eq!(paths, vec!["src/a.rs", "src/b.rs"]);
        assert_eq!(ids(groups.get("src/b.rs").unwrap()), vec![1, 3]);
        assert_eq!(groups.total(), 3);
    }

    #[test]
    fn test_sort_key_fallbacks() {
        let groups = group_comments(vec![
            ReviewComment::new(1, Some("a"), Some(10), None),
            ReviewComment::new(2, Some("a"), None, Some(3)),
            ReviewComment::new(3, Some("a"), None, None),
            ReviewComment::new(4, Some("a"), Some(0), Some(7)),
        ]);

        assert_eq!(ids(groups.get("a").unwrap()), vec![3, 2, 4, 1]);
    }

    #[test]
    fn test_comments_without_path_are_reported() {
        let groups = group_comments(vec![
            ReviewComment::new(1, None, Some(1), None),
            ReviewComment::new(2, Some("a"), Some(1), None),
            ReviewComment::new(3, None, None, None),
        ]);

        assert_eq!(groups.unanchored, vec![1, 3]);
        assert_eq!(groups.total(), 1);
        // No catch-all key is invented for them
        assert_eq!(groups.by_path.len(), 1);
    }

    #[test]
    fn test_empty_input() {
        let groups = group_comments(Vec::new());
        assert!(groups.is_empty());
        assert!(groups.unanchored.is_empty());
    }
}
