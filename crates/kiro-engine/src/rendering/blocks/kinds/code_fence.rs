/// Fenced code block delimiter and output.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// Whether a line opens or closes a fence. Anything after the backticks
    /// (e.g. a language name) is ignored.
    pub fn is_fence(line: &str) -> bool {
        line.trim().starts_with(Self::BACKTICKS)
    }

    /// Joins raw lines verbatim inside `<pre><code>`.
    pub fn render(lines: &[String]) -> String {
        format!("<pre><code>{}</code></pre>", lines.join("\n"))
    }
}
