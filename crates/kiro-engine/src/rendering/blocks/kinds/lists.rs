use std::sync::OnceLock;

use regex::Regex;

/// Keyed list items such as `-1. text` or `-A text`, rendered with the key
/// right-aligned in a fixed-width gutter.
pub struct CustomList;

impl CustomList {
    pub const OPEN: &'static str = "<ul class=\"custom-list pl-0 -ml-20\">";
    pub const CLOSE: &'static str = "</ul>";

    /// Returns `(key, content)`.
    pub fn parse(line: &str) -> Option<(&str, &str)> {
        static ITEM: OnceLock<Regex> = OnceLock::new();
        let re = ITEM.get_or_init(|| {
            Regex::new(r"^-([0-9A-Za-z.]+)\s+(.*)").expect("Invalid custom list regex")
        });
        let caps = re.captures(line)?;
        Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()))
    }

    pub fn render_item(key: &str, html: &str) -> String {
        format!(
            "<li><span class=\"inline-block w-[6em] text-right text-gray-500 font-mono\">{key}</span> {html}</li>"
        )
    }
}

/// `N. text` items.
pub struct OrderedList;

impl OrderedList {
    pub const OPEN: &'static str = "<ol>";
    pub const CLOSE: &'static str = "</ol>";

    pub fn parse(line: &str) -> Option<&str> {
        let digits = line.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            return None;
        }
        line[digits..].strip_prefix(". ")
    }

    pub fn render_item(html: &str) -> String {
        format!("<li>{html}</li>")
    }
}

/// Unordered items in two dialects: `- text` indented by pairs of spaces, and
/// `-- text` / `--- text` where each extra dash is one level.
pub struct DashList;

impl DashList {
    pub const OPEN: &'static str = "<ul>";
    pub const CLOSE: &'static str = "</ul>";

    /// Returns `(level, content)`.
    pub fn parse(line: &str) -> Option<(usize, &str)> {
        static INDENTED: OnceLock<Regex> = OnceLock::new();
        static DASHED: OnceLock<Regex> = OnceLock::new();

        let indented = INDENTED
            .get_or_init(|| Regex::new(r"^(\s*)- (.*)").expect("Invalid dash list regex"));
        if let Some(caps) = indented.captures(line) {
            let indent = caps.get(1)?.as_str().chars().count();
            return Some((indent / 2, caps.get(2)?.as_str()));
        }

        let dashed =
            DASHED.get_or_init(|| Regex::new(r"^(-+)\s+(.*)").expect("Invalid dash list regex"));
        let caps = dashed.captures(line)?;
        Some((caps.get(1)?.as_str().len() - 1, caps.get(2)?.as_str()))
    }

    pub fn render_item(level: usize, html: &str) -> String {
        if level > 0 {
            format!("<li class=\"ml-{}\">{html}</li>", level * 4)
        } else {
            format!("<li>{html}</li>")
        }
    }
}
