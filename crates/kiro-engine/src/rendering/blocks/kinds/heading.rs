/// ATX headings `# `, `## `, `### ` and the `---` rule.
pub struct Heading;

impl Heading {
    const PREFIXES: [(&'static str, u8); 3] = [("### ", 3), ("## ", 2), ("# ", 1)];

    /// Returns `(level, content)` for a heading line.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        Self::PREFIXES
            .iter()
            .find_map(|(prefix, level)| line.strip_prefix(*prefix).map(|rest| (*level, rest)))
    }

    pub fn render(level: u8, html: &str) -> String {
        format!("<h{level}>{html}</h{level}>")
    }
}

pub struct Rule;

impl Rule {
    pub fn is_rule(line: &str) -> bool {
        line.trim() == "---"
    }

    pub fn render() -> &'static str {
        "<hr>"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_levels() {
        assert_eq!(Heading::parse("# One"), Some((1, "One")));
        assert_eq!(Heading::parse("## Two"), Some((2, "Two")));
        assert_eq!(Heading::parse("### Three"), Some((3, "Three")));
        assert_eq!(Heading::parse("#### Four"), None);
        assert_eq!(Heading::parse("#NoSpace"), None);
    }

    #[test]
    fn rule_is_exact() {
        assert!(Rule::is_rule("---"));
        assert!(Rule::is_rule(" --- "));
        assert!(!Rule::is_rule("----"));
    }
}
