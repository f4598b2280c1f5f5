// src/util/text.rs

/// First `max_lines` lines of `content`, plus whether anything was cut.
///
/// # Examples
///
/// ```
/// use notekeep::util::text::preview;
///
/// let (shown, elided) = preview("one\ntwo\nthree", 2);
/// assert_eq!(shown, "one\ntwo");
/// assert!(elided);
/// ```
pub fn preview(content: &str, max_lines: usize) -> (String, bool) {
    let mut lines = content.lines();
    let shown: Vec<&str> = lines.by_ref().take(max_lines).collect();
    let elided = lines.next().is_some();
    (shown.join("\n"), elided)
}

/// Title to display, falling back to the first non-empty content line
pub fn display_title<'a>(title: &'a str, content: &'a str) -> &'a str {
    let title = title.trim();
    if !title.is_empty() {
        return title;
    }
    content
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or("(untitled)")
}
