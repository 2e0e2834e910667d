use crate::rendering::inline::Emphasis;

/// One structural marker of a `{...}` template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StructureMarker {
    /// `#`, `##`, `###`
    Heading(u8),
    /// `>`
    Quote,
    /// `-`
    ListItem,
    /// `|`
    Paragraph,
    /// `**`, `_`, `` ` ``, `~~`, `==`
    Emphasis(Emphasis),
}

impl StructureMarker {
    const MARKER_CHARS: [char; 9] = ['#', '>', '-', '|', '*', '_', '`', '~', '='];

    fn from_token(token: &str) -> Option<Self> {
        Some(match token {
            "#" => Self::Heading(1),
            "##" => Self::Heading(2),
            "###" => Self::Heading(3),
            ">" => Self::Quote,
            "-" => Self::ListItem,
            "|" => Self::Paragraph,
            "**" => Self::Emphasis(Emphasis::Bold),
            "_" => Self::Emphasis(Emphasis::Italic),
            "`" => Self::Emphasis(Emphasis::Code),
            "~~" => Self::Emphasis(Emphasis::Strike),
            "==" => Self::Emphasis(Emphasis::Highlight),
            _ => return None,
        })
    }

    /// Fixed priority: headings, quote, list, paragraph, bold, italic,
    /// code, strike, highlight.
    pub fn priority(self) -> u8 {
        match self {
            Self::Heading(level) => level,
            Self::Quote => 4,
            Self::ListItem => 5,
            Self::Paragraph => 6,
            Self::Emphasis(Emphasis::Bold) => 7,
            Self::Emphasis(Emphasis::Italic) => 8,
            Self::Emphasis(Emphasis::Code) => 9,
            Self::Emphasis(Emphasis::Strike) => 10,
            Self::Emphasis(Emphasis::Highlight) => 11,
        }
    }

    fn wrap(self, content: &str) -> String {
        match self {
            Self::Heading(1) => format!("<h1 class='mt-6 mb-4 text-4xl font-bold'>{content}</h1>"),
            Self::Heading(2) => format!("<h2 class='mt-5 mb-3 text-3xl font-bold'>{content}</h2>"),
            Self::Heading(_) => format!("<h3 class='mt-4 mb-2 text-2xl font-bold'>{content}</h3>"),
            Self::Quote => format!(
                "<blockquote class='my-4 border-l-4 pl-4 italic text-gray-600'>{content}</blockquote>"
            ),
            Self::ListItem => format!("<li class='ml-6'>{content}</li>"),
            Self::Paragraph => format!("<p class='mb-4'>{content}</p>"),
            Self::Emphasis(kind @ (Emphasis::Bold | Emphasis::Italic | Emphasis::Code)) => {
                if kind.is_present_in(content) {
                    content.to_string()
                } else {
                    kind.wrap(content)
                }
            }
            Self::Emphasis(kind) => kind.wrap(content),
        }
    }
}

/// Deduplicated, priority-sorted markers of a style's `{...}` template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructureTemplate {
    markers: Vec<StructureMarker>,
}

impl StructureTemplate {
    /// Tokenises a template body. Runs of the same marker character form one
    /// token (`##`, `**`, `==`); characters that are not markers separate
    /// tokens and are otherwise ignored, as are unknown tokens.
    pub fn parse(body: &str) -> Self {
        let mut markers: Vec<StructureMarker> = Vec::new();
        let mut run = String::new();

        let mut flush = |run: &mut String| {
            if let Some(marker) = StructureMarker::from_token(run)
                && !markers.contains(&marker)
            {
                markers.push(marker);
            }
            run.clear();
        };

        for ch in body.chars() {
            let is_marker = StructureMarker::MARKER_CHARS.contains(&ch);
            if !is_marker {
                flush(&mut run);
                continue;
            }
            if run.chars().next().is_some_and(|c| c != ch) {
                flush(&mut run);
            }
            run.push(ch);
        }
        flush(&mut run);

        markers.sort_by_key(|m| m.priority());
        Self { markers }
    }

    pub fn markers(&self) -> &[StructureMarker] {
        &self.markers
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Wraps `content` with every marker in priority order, so the
    /// highest-priority marker ends up innermost. A list item marker also
    /// adds the surrounding list container.
    pub fn apply(&self, content: &str) -> String {
        let mut html = content.to_string();
        for marker in &self.markers {
            html = marker.wrap(&html);
        }
        if self.markers.contains(&StructureMarker::ListItem) {
            html = format!("<ul class='list-disc ml-6 mb-4'>{html}</ul>");
        }
        html
    }
}
