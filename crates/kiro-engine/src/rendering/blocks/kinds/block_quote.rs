/// Blockquote lines: `| text`, accumulated until a non-quote line.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote line prefix, bar then space.
    pub const PREFIX: &'static str = "| ";

    /// Returns the content after the prefix.
    pub fn strip_prefix(line: &str) -> Option<&str> {
        line.strip_prefix(Self::PREFIX)
    }

    /// Joins already-rendered lines with `<br>` inside `<blockquote>`.
    pub fn render(lines: &[String]) -> String {
        format!("<blockquote>{}</blockquote>", lines.join("<br>"))
    }
}
