// Line-oriented markup renderer for AI answer text.
//
// Splits a text blob on newlines and classifies each line independently.
// There is no cross-line state: nested lists, multi-line bold spans and the
// like are deliberately unsupported. Every input line maps to exactly one
// node, so rendering never fails.

/// One classified output line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineNode {
    /// `# `, `## ` or `### ` prefix; level is 1-3.
    Heading { level: u8, text: String },
    /// `- ` prefix.
    BulletItem { text: String },
    /// Digits, a dot, then whitespace. Label is the digit run before the
    /// first dot; text starts two characters past the dot.
    NumberedItem { label: String, text: String },
    /// A line containing `**`, split into alternating plain/bold spans.
    BoldRun { spans: Vec<Inline> },
    /// Any other non-empty line, kept verbatim.
    PlainText { text: String },
    /// An empty line.
    Blank,
}

/// A span inside a bold run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Plain(String),
    Bold(String),
}

impl Inline {
    /// The span's text regardless of emphasis.
    pub fn text(&self) -> &str {
        match self {
            Inline::Plain(t) | Inline::Bold(t) => t,
        }
    }

    pub fn is_bold(&self) -> bool {
        matches!(self, Inline::Bold(_))
    }
}

impl LineNode {
    /// Reconstruct the source line this node was classified from.
    ///
    /// Returns `None` for bold runs, whose marker positions are not kept.
    /// For the other variants the reconstruction re-classifies to an equal
    /// node (and, for canonical space-separated input, is byte-identical).
    pub fn source_line(&self) -> Option<String> {
        match self {
            LineNode::Heading { level, text } => {
                Some(format!("{} {}", "#".repeat(*level as usize), text))
            }
            LineNode::BulletItem { text } => Some(format!("- {}", text)),
            LineNode::NumberedItem { label, text } => Some(format!("{}. {}", label, text)),
            LineNode::BoldRun { .. } => None,
            LineNode::PlainText { text } => Some(text.clone()),
            LineNode::Blank => Some(String::new()),
        }
    }
}

/// Render a text blob into one node per input line.
///
/// Lines are produced by splitting on `'\n'`, so the node count always
/// equals the line count: an empty input is one blank line, and input
/// ending in a newline carries a trailing blank. Carriage returns are not
/// stripped; a `"\r\n"` line ending leaves the `'\r'` on the line text.
pub fn render(text: &str) -> Vec<LineNode> {
    text.split('\n').map(classify_line).collect()
}

/// Classify a single line. First match wins; the prefix checks run before
/// bold detection, so a heading containing `**` keeps the markers raw.
pub fn classify_line(line: &str) -> LineNode {
    if let Some(text) = line.strip_prefix("# ") {
        return LineNode::Heading { level: 1, text: text.to_string() };
    }
    if let Some(text) = line.strip_prefix("## ") {
        return LineNode::Heading { level: 2, text: text.to_string() };
    }
    if let Some(text) = line.strip_prefix("### ") {
        return LineNode::Heading { level: 3, text: text.to_string() };
    }
    if let Some(text) = line.strip_prefix("- ") {
        return LineNode::BulletItem { text: text.to_string() };
    }
    if let Some((label, text)) = split_numbered(line) {
        return LineNode::NumberedItem { label, text };
    }
    if line.contains("**") {
        return LineNode::BoldRun { spans: split_bold(line) };
    }
    if line.is_empty() {
        LineNode::Blank
    } else {
        LineNode::PlainText { text: line.to_string() }
    }
}

/// Match "one or more digits, a dot, then whitespace" at the start of the
/// line. The label is the digit run (everything before the first dot) and
/// the text starts two characters past the dot, skipping the separator.
///
/// Known limitation, kept on purpose: the first dot is always the split
/// point, so decimal-looking labels misparse (`"12.5. x"` becomes label
/// `"12"` with text `"5. x"`).
fn split_numbered(line: &str) -> Option<(String, String)> {
    let digits_end = line
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(line.len());
    if digits_end == 0 {
        return None;
    }
    let tail = &line[digits_end..];
    let mut chars = tail.chars();
    if chars.next() != Some('.') {
        return None;
    }
    match chars.next() {
        Some(c) if c.is_whitespace() => {}
        _ => return None,
    }
    // Skip two characters (dot + separator) by char boundary, not byte
    // offset, so a multi-byte separator cannot split a code point.
    let text_start = tail
        .char_indices()
        .nth(2)
        .map(|(i, _)| i)
        .unwrap_or(tail.len());
    Some((line[..digits_end].to_string(), tail[text_start..].to_string()))
}

/// Split on every `**` marker; segments at even positions are plain, odd
/// positions bold. Empty segments are preserved so markers at the line
/// boundary or adjacent markers keep the alternation honest. An odd marker
/// count simply leaves the final segment in whatever role the alternation
/// assigns it.
fn split_bold(line: &str) -> Vec<Inline> {
    line.split("**")
        .enumerate()
        .map(|(i, segment)| {
            if i % 2 == 0 {
                Inline::Plain(segment.to_string())
            } else {
                Inline::Bold(segment.to_string())
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(s: &str) -> Inline {
        Inline::Plain(s.to_string())
    }

    fn bold(s: &str) -> Inline {
        Inline::Bold(s.to_string())
    }

    #[test]
    fn heading_levels() {
        assert_eq!(
            classify_line("# Title"),
            LineNode::Heading { level: 1, text: "Title".to_string() }
        );
        assert_eq!(
            classify_line("## Sub"),
            LineNode::Heading { level: 2, text: "Sub".to_string() }
        );
        assert_eq!(
            classify_line("### Deep"),
            LineNode::Heading { level: 3, text: "Deep".to_string() }
        );
    }

    #[test]
    fn four_hashes_is_plain_text() {
        assert_eq!(
            classify_line("#### nope"),
            LineNode::PlainText { text: "#### nope".to_string() }
        );
    }

    #[test]
    fn hash_without_space_is_plain_text() {
        assert_eq!(
            classify_line("#Title"),
            LineNode::PlainText { text: "#Title".to_string() }
        );
    }

    #[test]
    fn bullet_item() {
        assert_eq!(
            classify_line("- item"),
            LineNode::BulletItem { text: "item".to_string() }
        );
    }

    #[test]
    fn bullet_needs_trailing_space() {
        assert_eq!(
            classify_line("-item"),
            LineNode::PlainText { text: "-item".to_string() }
        );
    }

    #[test]
    fn numbered_item_basic() {
        assert_eq!(
            classify_line("3. third"),
            LineNode::NumberedItem { label: "3".to_string(), text: "third".to_string() }
        );
    }

    #[test]
    fn numbered_label_multi_digit() {
        assert_eq!(
            classify_line("42. answer"),
            LineNode::NumberedItem { label: "42".to_string(), text: "answer".to_string() }
        );
    }

    #[test]
    fn numbered_item_uses_first_dot() {
        // Decimal-looking content misparses on the first dot. Known
        // limitation of the format, not something to correct here.
        assert_eq!(
            classify_line("12. 5. note"),
            LineNode::NumberedItem { label: "12".to_string(), text: "5. note".to_string() }
        );
    }

    #[test]
    fn numbered_requires_space_after_dot() {
        assert_eq!(
            classify_line("3.x"),
            LineNode::PlainText { text: "3.x".to_string() }
        );
        assert_eq!(
            classify_line("3."),
            LineNode::PlainText { text: "3.".to_string() }
        );
    }

    #[test]
    fn numbered_requires_leading_digits() {
        assert_eq!(
            classify_line(". x"),
            LineNode::PlainText { text: ". x".to_string() }
        );
        assert_eq!(
            classify_line("a1. x"),
            LineNode::PlainText { text: "a1. x".to_string() }
        );
    }

    #[test]
    fn numbered_tab_separator() {
        assert_eq!(
            classify_line("7.\tnote"),
            LineNode::NumberedItem { label: "7".to_string(), text: "note".to_string() }
        );
    }

    #[test]
    fn numbered_empty_text() {
        assert_eq!(
            classify_line("1. "),
            LineNode::NumberedItem { label: "1".to_string(), text: String::new() }
        );
    }

    #[test]
    fn bold_run_alternation() {
        assert_eq!(
            classify_line("a**b**c"),
            LineNode::BoldRun { spans: vec![plain("a"), bold("b"), plain("c")] }
        );
    }

    #[test]
    fn bold_run_markers_at_boundaries() {
        assert_eq!(
            classify_line("**bold**"),
            LineNode::BoldRun { spans: vec![plain(""), bold("bold"), plain("")] }
        );
    }

    #[test]
    fn bold_run_adjacent_markers() {
        assert_eq!(
            classify_line("a****b"),
            LineNode::BoldRun { spans: vec![plain("a"), bold(""), plain("b")] }
        );
    }

    #[test]
    fn bold_run_odd_marker_count() {
        // Unterminated bold: the final segment stays in the role the
        // alternation gives it.
        assert_eq!(
            classify_line("a**b"),
            LineNode::BoldRun { spans: vec![plain("a"), bold("b")] }
        );
        assert_eq!(
            classify_line("**"),
            LineNode::BoldRun { spans: vec![plain(""), bold("")] }
        );
    }

    #[test]
    fn prefix_checks_win_over_bold() {
        assert_eq!(
            classify_line("# a**b**"),
            LineNode::Heading { level: 1, text: "a**b**".to_string() }
        );
        assert_eq!(
            classify_line("- a**b**"),
            LineNode::BulletItem { text: "a**b**".to_string() }
        );
        assert_eq!(
            classify_line("1. a**b**"),
            LineNode::NumberedItem { label: "1".to_string(), text: "a**b**".to_string() }
        );
    }

    #[test]
    fn blank_and_whitespace_lines() {
        assert_eq!(classify_line(""), LineNode::Blank);
        // A whitespace-only line is not blank.
        assert_eq!(
            classify_line(" "),
            LineNode::PlainText { text: " ".to_string() }
        );
    }

    #[test]
    fn node_count_matches_line_count() {
        let cases = [
            ("", 1),
            ("one", 1),
            ("a\nb", 2),
            ("a\nb\n", 3),
            ("\n\n", 3),
            ("# h\n- b\n1. n\n**x**\nplain\n", 6),
        ];
        for (input, lines) in cases {
            assert_eq!(render(input).len(), lines, "input {:?}", input);
        }
    }

    #[test]
    fn render_classifies_each_line_independently() {
        let nodes = render("# Report\n\n- first\n- second\n1. one\nend");
        assert_eq!(
            nodes,
            vec![
                LineNode::Heading { level: 1, text: "Report".to_string() },
                LineNode::Blank,
                LineNode::BulletItem { text: "first".to_string() },
                LineNode::BulletItem { text: "second".to_string() },
                LineNode::NumberedItem { label: "1".to_string(), text: "one".to_string() },
                LineNode::PlainText { text: "end".to_string() },
            ]
        );
    }

    #[test]
    fn carriage_return_stays_on_line() {
        let nodes = render("a\r\nb");
        assert_eq!(
            nodes,
            vec![
                LineNode::PlainText { text: "a\r".to_string() },
                LineNode::PlainText { text: "b".to_string() },
            ]
        );
    }

    #[test]
    fn source_line_roundtrips_non_bold_variants() {
        let lines = ["# Title", "## Sub", "### Deep", "- item", "3. third", "plain text", ""];
        for line in lines {
            let node = classify_line(line);
            let rebuilt = node.source_line().expect("non-bold variants reconstruct");
            assert_eq!(rebuilt, line, "lost source text for {:?}", line);
            assert_eq!(classify_line(&rebuilt), node, "reclassification drifted for {:?}", line);
        }
    }

    #[test]
    fn source_line_none_for_bold_runs() {
        assert_eq!(classify_line("a**b**c").source_line(), None);
    }

    #[test]
    fn inline_accessors() {
        assert_eq!(plain("x").text(), "x");
        assert_eq!(bold("y").text(), "y");
        assert!(!plain("x").is_bold());
        assert!(bold("y").is_bold());
    }

    #[test]
    fn multibyte_content_is_preserved() {
        assert_eq!(
            classify_line("1. café"),
            LineNode::NumberedItem { label: "1".to_string(), text: "café".to_string() }
        );
        assert_eq!(
            classify_line("é**ü**"),
            LineNode::BoldRun { spans: vec![plain("é"), bold("ü"), plain("")] }
        );
    }
}
