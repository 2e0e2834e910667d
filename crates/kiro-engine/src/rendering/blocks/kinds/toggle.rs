/// Toggle (collapsible) lines: optional `#` heading markers, then one or
/// more `>` markers, then content. Marker count is the nesting depth.
///
/// `> > B` and `>> B` both have depth 2.
pub struct Toggle;

/// A recognised toggle line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleLine<'a> {
    pub depth: u8,
    pub heading_level: Option<u8>,
    pub content: &'a str,
}

impl Toggle {
    /// The nesting marker.
    pub const MARKER: char = '>';
    pub const HEADING_MARKER: char = '#';
    pub const MAX_HEADING_LEVEL: usize = 6;

    /// Counts `>` markers, allowing spaces around each one.
    ///
    /// # Returns
    /// - `depth`: Number of markers found (0 if none)
    /// - `byte_offset`: Index just past the last marker (0 if none)
    pub fn strip_markers(s: &str) -> (u8, usize) {
        let b = s.as_bytes();
        let mut i = 0usize;
        let mut end = 0usize;
        let mut depth = 0u8;

        loop {
            while i < b.len() && b[i] == b' ' {
                i += 1;
            }
            if i < b.len() && b[i] == (Self::MARKER as u8) {
                depth = depth.saturating_add(1);
                i += 1;
                end = i;
            } else {
                break;
            }
        }
        (depth, end)
    }

    pub fn parse(line: &str) -> Option<ToggleLine<'_>> {
        let hashes = line
            .bytes()
            .take_while(|&b| b == Self::HEADING_MARKER as u8)
            .count();
        if hashes > Self::MAX_HEADING_LEVEL {
            return None;
        }
        let rest = line[hashes..].trim_start();

        let (depth, offset) = Self::strip_markers(rest);
        if depth == 0 {
            return None;
        }
        let content = rest[offset..].trim_start();
        if content.is_empty() {
            return None;
        }

        Some(ToggleLine {
            depth,
            heading_level: (hashes > 0).then_some(hashes as u8),
            content,
        })
    }

    /// Whether `next` is a toggle line nested deeper than `depth`.
    pub fn has_deeper_next(next: Option<&str>, depth: u8) -> bool {
        next.and_then(Self::parse).is_some_and(|n| n.depth > depth)
    }

    /// Container lines for a toggle with nested content. The summary is
    /// plain whatever the heading level.
    pub fn open_container(summary_html: &str) -> [String; 3] {
        [
            "<details open>".to_string(),
            format!("<summary>{summary_html}</summary>"),
            "<div>".to_string(),
        ]
    }

    pub fn close_container() -> &'static str {
        "</div></details>"
    }

    /// A toggle line with nothing nested under it.
    pub fn render_leaf(heading_level: Option<u8>, html: &str) -> String {
        match heading_level {
            Some(level) => format!(
                "<h{level} class=\"text-{level}xl font-bold mt-{} mb-2\">{html}</h{level}>",
                level + 2
            ),
            None => format!("<p class=\"mb-4\">{html}</p>"),
        }
    }
}

/// An open collapsible section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleFrame {
    pub depth: u8,
    pub heading_level: Option<u8>,
}

/// Open collapsible sections, depths strictly increasing bottom to top.
#[derive(Debug, Clone, Default)]
pub struct ToggleStack(Vec<ToggleFrame>);

impl ToggleStack {
    pub fn push(&mut self, frame: ToggleFrame) {
        debug_assert!(
            self.0.last().is_none_or(|top| top.depth < frame.depth),
            "toggle depths must increase: {:?} then {:?}",
            self.0.last(),
            frame
        );
        self.0.push(frame);
    }

    /// Pops every frame with depth >= `depth`, innermost first.
    pub fn close_from(&mut self, depth: u8) -> Vec<ToggleFrame> {
        let mut closed = Vec::new();
        while let Some(top) = self.0.last().copied() {
            if top.depth < depth {
                break;
            }
            self.0.pop();
            closed.push(top);
        }
        closed
    }

    pub fn close_all(&mut self) -> Vec<ToggleFrame> {
        self.close_from(0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_single_marker() {
        assert_eq!(Toggle::strip_markers("> hello"), (1, 1));
    }

    #[test]
    fn strip_spaced_markers() {
        assert_eq!(Toggle::strip_markers("> > hello"), (2, 3));
    }

    #[test]
    fn strip_adjacent_markers() {
        assert_eq!(Toggle::strip_markers(">> hello"), (2, 2));
    }

    #[test]
    fn strip_leading_space_and_no_markers() {
        assert_eq!(Toggle::strip_markers("  > x"), (1, 3));
        assert_eq!(Toggle::strip_markers("  x"), (0, 0));
    }

    #[test]
    fn container_summary_is_plain() {
        assert_eq!(
            Toggle::open_container("Top"),
            [
                "<details open>".to_string(),
                "<summary>Top</summary>".to_string(),
                "<div>".to_string()
            ]
        );
    }

    #[test]
    fn parse_plain_toggle() {
        assert_eq!(
            Toggle::parse("> A"),
            Some(ToggleLine {
                depth: 1,
                heading_level: None,
                content: "A"
            })
        );
    }

    #[test]
    fn parse_heading_toggle() {
        assert_eq!(
            Toggle::parse("## >> Deep"),
            Some(ToggleLine {
                depth: 2,
                heading_level: Some(2),
                content: "Deep"
            })
        );
    }

    #[test]
    fn reject_non_toggles() {
        assert_eq!(Toggle::parse("plain"), None);
        assert_eq!(Toggle::parse("# Title"), None);
        assert_eq!(Toggle::parse(">"), None);
        assert_eq!(Toggle::parse("> >  "), None);
        assert_eq!(Toggle::parse("####### > too many"), None);
    }

    #[test]
    fn deeper_lookahead() {
        assert!(Toggle::has_deeper_next(Some("> > B"), 1));
        assert!(!Toggle::has_deeper_next(Some("> B"), 1));
        assert!(!Toggle::has_deeper_next(Some("text"), 1));
        assert!(!Toggle::has_deeper_next(None, 1));
    }

    #[test]
    fn stack_closes_from_depth() {
        let mut stack = ToggleStack::default();
        for depth in 1..=3 {
            stack.push(ToggleFrame {
                depth,
                heading_level: None,
            });
        }
        let closed = stack.close_from(2);
        assert_eq!(closed.iter().map(|f| f.depth).collect::<Vec<_>>(), vec![3, 2]);
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.close_all().len(), 1);
        assert!(stack.is_empty());
    }
}
