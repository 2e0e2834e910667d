/// Character-level emphasis kinds with their owned delimiters and output.
///
/// The formatter never hardcodes `**` or `<strong>`; every delimiter and
/// element lives here so block-level code can ask "has this element already
/// been produced?" through the same table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Emphasis {
    Strike,
    Highlight,
    Bold,
    Italic,
    Code,
}

impl Emphasis {
    /// Fixed pass order of the inline formatter.
    pub const PASS_ORDER: [Emphasis; 5] = [
        Emphasis::Strike,
        Emphasis::Highlight,
        Emphasis::Bold,
        Emphasis::Italic,
        Emphasis::Code,
    ];

    pub fn delimiter(self) -> &'static str {
        match self {
            Emphasis::Strike => "~~",
            Emphasis::Highlight => "==",
            Emphasis::Bold => "**",
            Emphasis::Italic => "_",
            Emphasis::Code => "`",
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Emphasis::Strike => "del",
            Emphasis::Highlight => "mark",
            Emphasis::Bold => "strong",
            Emphasis::Italic => "em",
            Emphasis::Code => "code",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Emphasis::Strike => "line-through",
            Emphasis::Highlight => "bg-yellow-200",
            Emphasis::Bold => "font-bold",
            Emphasis::Italic => "italic",
            Emphasis::Code => "px-1 py-0.5 bg-gray-100 text-sm rounded font-jetbrains",
        }
    }

    /// Opening element, e.g. `<strong class='font-bold'>`.
    pub fn open_tag(self) -> String {
        format!("<{} class='{}'>", self.tag(), self.class())
    }

    pub fn close_tag(self) -> String {
        format!("</{}>", self.tag())
    }

    /// Wraps `inner` in this element.
    pub fn wrap(self, inner: &str) -> String {
        format!("{}{inner}{}", self.open_tag(), self.close_tag())
    }

    /// Whether `html` already contains an element of this kind.
    pub fn is_present_in(self, html: &str) -> bool {
        html.contains(&format!("<{}", self.tag()))
    }

    /// Non-greedy pattern matching one delimited run on a single line.
    pub fn pattern(self) -> String {
        let d = regex::escape(self.delimiter());
        format!("{d}(.*?){d}")
    }
}

/// Icon prefix form `[+glyph] rest` recognised at the start of a fragment.
pub struct IconPrefix;

impl IconPrefix {
    pub const OPEN: &'static str = "[+";
    pub const CLOSE: char = ']';

    /// Splits `[+glyph] rest` into `(glyph, rest)`; rest has leading
    /// whitespace removed.
    pub fn split(text: &str) -> Option<(&str, &str)> {
        let after_open = text.strip_prefix(Self::OPEN)?;
        let close = after_open.find(Self::CLOSE)?;
        let glyph = &after_open[..close];
        if glyph.is_empty() {
            return None;
        }
        let rest = after_open[close + Self::CLOSE.len_utf8()..].trim_start();
        Some((glyph, rest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_with_fixed_class() {
        assert_eq!(
            Emphasis::Bold.wrap("x"),
            "<strong class='font-bold'>x</strong>"
        );
        assert_eq!(Emphasis::Italic.wrap("y"), "<em class='italic'>y</em>");
    }

    #[test]
    fn detects_existing_element() {
        assert!(Emphasis::Code.is_present_in("a <code class='c'>b</code>"));
        assert!(!Emphasis::Bold.is_present_in("<em class='italic'>b</em>"));
    }

    #[test]
    fn icon_prefix_split() {
        assert_eq!(IconPrefix::split("[+⭐]  star"), Some(("⭐", "star")));
        assert_eq!(IconPrefix::split("[+]"), None);
        assert_eq!(IconPrefix::split("[=Font] x"), None);
        assert_eq!(IconPrefix::split("[+open"), None);
    }
}
