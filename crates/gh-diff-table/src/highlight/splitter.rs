//! Tag-aware splitting of highlighted HTML onto source line boundaries.

/// Splits one highlighted HTML blob into one self-contained fragment per line.
///
/// Only the highlighter's wrapper tag family is tracked (by default
/// `<span ...>` / `</span>`). When a line ends while wrapper tags are open,
/// they are closed at the end of that fragment and reopened, in their
/// original order, at the start of the next one. A `<` that does not start a
/// wrapper tag is copied through as text, and a closing tag with nothing open
/// is copied without complaint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineSplitter {
    open_prefix: String,
    close_tag: String,
}

impl Default for LineSplitter {
    fn default() -> Self {
        Self::new("span")
    }
}

impl LineSplitter {
    /// Create a splitter for the given wrapper tag name.
    pub fn new(tag: &str) -> Self {
        Self {
            open_prefix: format!("<{tag}"),
            close_tag: format!("</{tag}>"),
        }
    }

    /// Split `html` at every `\n`.
    ///
    /// Concatenating the fragments without the reopened/closed tags gives
    /// back the input. A trailing empty line produces no fragment.
    pub fn split(&self, html: &str) -> Vec<String> {
        let mut fragments = Vec::new();
        let mut current = String::new();
        let mut open_tags: Vec<&str> = Vec::new();
        let mut rest = html;

        while !rest.is_empty() {
            let plain_len = rest.find(&['\n', '<'][..]).unwrap_or(rest.len());
            if plain_len > 0 {
                current.push_str(&rest[..plain_len]);
                rest = &rest[plain_len..];
                continue;
            }

            if let Some(tail) = rest.strip_prefix('\n') {
                self.close_open_tags(&mut current, &open_tags);
                fragments.push(std::mem::take(&mut current));
                for tag in &open_tags {
                    current.push_str(tag);
                }
                rest = tail;
            } else if let Some(len) = self.opening_tag_len(rest) {
                let (tag, tail) = rest.split_at(len);
                current.push_str(tag);
                open_tags.push(tag);
                rest = tail;
            } else if let Some(tail) = rest.strip_prefix(self.close_tag.as_str()) {
                current.push_str(&self.close_tag);
                open_tags.pop();
                rest = tail;
            } else {
                current.push('<');
                rest = &rest[1..];
            }
        }

        if !current.is_empty() || !open_tags.is_empty() {
            self.close_open_tags(&mut current, &open_tags);
            fragments.push(current);
        }

        fragments
    }

    /// Length of the wrapper opening tag at the start of `s`, if there is one.
    ///
    /// The tag must be `<name>` or `<name` + whitespace + attributes + `>`,
    /// all on one line.
    fn opening_tag_len(&self, s: &str) -> Option<usize> {
        let after_name = s.strip_prefix(self.open_prefix.as_str())?;
        let next = after_name.chars().next()?;
        if next != '>' && !next.is_ascii_whitespace() {
            return None;
        }

        let end = after_name.find('>')?;
        if after_name[..end].contains('\n') {
            return None;
        }
        Some(self.open_prefix.len() + end + 1)
    }

    /// Every wrapper closes the same way, so only the count matters.
    fn close_open_tags(&self, current: &mut String, open_tags: &[&str]) {
        current.push_str(&self.close_tag.repeat(open_tags.len()));
    }

    /// Count wrapper opening and closing tags in a fragment.
    pub fn tag_balance(&self, fragment: &str) -> (usize, usize) {
        let mut opened = 0;
        let mut closed = 0;
        let mut rest = fragment;

        while let Some(pos) = rest.find('<') {
            rest = &rest[pos..];
            if let Some(len) = self.opening_tag_len(rest) {
                opened += 1;
                rest = &rest[len..];
            } else if let Some(tail) = rest.strip_prefix(self.close_tag.as_str()) {
                closed += 1;
                rest = tail;
            } else {
                rest = &rest[1..];
            }
        }

        (opened, closed)
    }
}
