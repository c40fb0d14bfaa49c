use serde::{Deserialize, Serialize};

/// Kind of a rendered diff row.
///
/// # Examples
///
/// ```
/// use alpha_difflens::parser::DiffLineKind;
///
/// let kind = DiffLineKind::Added;
/// assert_eq!(format!("{kind}"), "added");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffLineKind {
    /// Line present only in the newer filing.
    Added,
    /// Line present only in the older filing.
    Removed,
    /// Line present in both filings.
    Context,
    /// File or hunk header (`+++`, `---`, `@@`).
    Header,
}

impl std::fmt::Display for DiffLineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiffLineKind::Added => write!(f, "added"),
            DiffLineKind::Removed => write!(f, "removed"),
            DiffLineKind::Context => write!(f, "context"),
            DiffLineKind::Header => write!(f, "header"),
        }
    }
}

/// One rendered row of a diff view.
///
/// `text` holds the line content with its leading marker character stripped;
/// header lines are kept in full.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffLine {
    /// Classification of this row.
    pub kind: DiffLineKind,
    /// Line content, marker stripped.
    pub text: String,
}

/// Parse a unified-diff body into typed, renderable lines.
///
/// Each line is classified independently, with no cross-line state and no
/// hunk-header parsing beyond recognizing `@@` as a header marker:
///
/// - `+++`, `---`, or `@@` prefix → [`DiffLineKind::Header`], text unstripped
/// - leading `+` → [`DiffLineKind::Added`], marker stripped
/// - leading `-` → [`DiffLineKind::Removed`], marker stripped
/// - anything else → [`DiffLineKind::Context`], with exactly one leading
///   space stripped if present
///
/// Line-splitting convention: the input is split on `'\n'`, so a trailing
/// newline yields a final empty segment, which is preserved as an empty
/// context line. An empty input short-circuits to an empty vec before the
/// split, so `""` yields zero lines rather than one.
///
/// The function is pure and total: no input string fails, and output order
/// matches input order.
///
/// # Examples
///
/// ```
/// use alpha_difflens::parser::{parse_diff_lines, DiffLineKind};
///
/// let lines = parse_diff_lines("-old wording\n+new wording");
/// assert_eq!(lines.len(), 2);
/// assert_eq!(lines[0].kind, DiffLineKind::Removed);
/// assert_eq!(lines[1].text, "new wording");
///
/// assert!(parse_diff_lines("").is_empty());
/// ```
pub fn parse_diff_lines(diff_text: &str) -> Vec<DiffLine> {
    if diff_text.is_empty() {
        return Vec::new();
    }

    diff_text.split('\n').map(classify_line).collect()
}

fn classify_line(line: &str) -> DiffLine {
    if line.starts_with("+++") || line.starts_with("---") || line.starts_with("@@") {
        return DiffLine {
            kind: DiffLineKind::Header,
            text: line.to_string(),
        };
    }

    if let Some(rest) = line.strip_prefix('+') {
        return DiffLine {
            kind: DiffLineKind::Added,
            text: rest.to_string(),
        };
    }

    if let Some(rest) = line.strip_prefix('-') {
        return DiffLine {
            kind: DiffLineKind::Removed,
            text: rest.to_string(),
        };
    }

    DiffLine {
        kind: DiffLineKind::Context,
        text: line.strip_prefix(' ').unwrap_or(line).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_returns_empty_vec() {
        assert!(parse_diff_lines("").is_empty());
    }

    #[test]
    fn added_line_strips_marker() {
        let lines = parse_diff_lines("+hello");
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].kind, DiffLineKind::Added);
        assert_eq!(lines[0].text, "hello");
    }

    #[test]
    fn removed_line_strips_marker() {
        let lines = parse_diff_lines("-hello");
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].kind, DiffLineKind::Removed);
        assert_eq!(lines[0].text, "hello");
    }

    #[test]
    fn context_line_strips_single_leading_space() {
        let lines = parse_diff_lines(" hello");
        assert_eq!(lines[0].kind, DiffLineKind::Context);
        assert_eq!(lines[0].text, "hello");

        // Only one space is stripped.
        let lines = parse_diff_lines("  indented");
        assert_eq!(lines[0].text, " indented");
    }

    #[test]
    fn unprefixed_line_is_context_unstripped() {
        let lines = parse_diff_lines("RISK FACTORS");
        assert_eq!(lines[0].kind, DiffLineKind::Context);
        assert_eq!(lines[0].text, "RISK FACTORS");
    }

    #[test]
    fn hunk_header_kept_in_full() {
        let lines = parse_diff_lines("@@ -1,2 +1,3 @@");
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].kind, DiffLineKind::Header);
        assert_eq!(lines[0].text, "@@ -1,2 +1,3 @@");
    }

    #[test]
    fn file_headers_kept_in_full() {
        let lines = parse_diff_lines("--- Previous Filing\n+++ Current Filing");
        assert_eq!(lines[0].kind, DiffLineKind::Header);
        assert_eq!(lines[0].text, "--- Previous Filing");
        assert_eq!(lines[1].kind, DiffLineKind::Header);
        assert_eq!(lines[1].text, "+++ Current Filing");
    }

    #[test]
    fn bare_marker_produces_empty_text() {
        let lines = parse_diff_lines("+");
        assert_eq!(lines[0].kind, DiffLineKind::Added);
        assert_eq!(lines[0].text, "");

        let lines = parse_diff_lines("-");
        assert_eq!(lines[0].kind, DiffLineKind::Removed);
        assert_eq!(lines[0].text, "");
    }

    #[test]
    fn trailing_newline_yields_empty_context_line() {
        let lines = parse_diff_lines("+added\n");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].kind, DiffLineKind::Context);
        assert_eq!(lines[1].text, "");
    }

    #[test]
    fn output_length_matches_segment_count() {
        let input = "a\nb\n\nc";
        assert_eq!(parse_diff_lines(input).len(), input.split('\n').count());
    }

    #[test]
    fn multi_line_scenario_preserves_order() {
        let input = "--- a\n+++ b\n@@ -1,1 +1,2 @@\n context\n+added line\n-removed line";
        let lines = parse_diff_lines(input);
        let kinds: Vec<DiffLineKind> = lines.iter().map(|l| l.kind).collect();
        assert_eq!(
            kinds,
            vec![
                DiffLineKind::Header,
                DiffLineKind::Header,
                DiffLineKind::Header,
                DiffLineKind::Context,
                DiffLineKind::Added,
                DiffLineKind::Removed,
            ]
        );
        assert_eq!(lines[3].text, "context");
        assert_eq!(lines[4].text, "added line");
        assert_eq!(lines[5].text, "removed line");
    }

    #[test]
    fn parsing_is_deterministic() {
        let input = "--- a\n+++ b\n@@ -1 +1 @@\n-x\n+y\n z";
        assert_eq!(parse_diff_lines(input), parse_diff_lines(input));
    }

    #[test]
    fn diff_line_serializes_lowercase_kind() {
        let line = DiffLine {
            kind: DiffLineKind::Header,
            text: "@@ -1 +1 @@".into(),
        };
        let json = serde_json::to_value(&line).unwrap();
        assert_eq!(json["kind"], "header");
    }
}
