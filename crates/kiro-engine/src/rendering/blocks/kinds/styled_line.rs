use std::sync::OnceLock;

use regex::Regex;

use crate::rendering::styles::processor::DEFAULT_MARGIN_CLASS;
use crate::rendering::styles::{StyleRegistry, apply, render_inline};

/// A `[name]content<> tail` line rendered as a styled `<div>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyledLine<'a> {
    /// One tag starting the line, content up to the first `<>`.
    Single {
        name: &'a str,
        content: &'a str,
        tail: &'a str,
    },
    /// Several tags before the final `<>`, each rendered as its own span.
    Multi {
        segments: Vec<(&'a str, &'a str)>,
        tail: &'a str,
    },
}

impl<'a> StyledLine<'a> {
    pub const TERMINATOR: &'static str = "<>";

    pub fn parse(line: &'a str) -> Option<Self> {
        if !(line.contains('[') && line.contains(']')) {
            return None;
        }
        let last = line.rfind(Self::TERMINATOR)?;
        let head = &line[..last];
        let tags: Vec<_> = tag_regex().captures_iter(head).collect();

        if tags.len() > 1 {
            let segments = tags
                .iter()
                .filter_map(|caps| {
                    let tag = caps.get(0)?;
                    let rest = &head[tag.end()..];
                    let end = [rest.find('['), rest.find(Self::TERMINATOR)]
                        .into_iter()
                        .flatten()
                        .min()
                        .unwrap_or(rest.len());
                    let content = rest[..end].trim();
                    (!content.is_empty()).then(|| (caps.get(1).map_or("", |m| m.as_str()), content))
                })
                .collect();
            return Some(Self::Multi {
                segments,
                tail: line[last + Self::TERMINATOR.len()..].trim(),
            });
        }

        let after_open = line.strip_prefix('[')?;
        let close = after_open.find(']')?;
        let name = &after_open[..close];
        if name.is_empty() {
            return None;
        }
        let rest = &after_open[close + 1..];
        let (content, tail) = rest.split_once(Self::TERMINATOR)?;
        Some(Self::Single {
            name,
            content: content.trim(),
            tail: tail.trim(),
        })
    }

    pub fn render(&self, registry: &StyleRegistry) -> String {
        match self {
            Self::Single {
                name,
                content,
                tail,
            } => {
                let tail_html = render_tail(tail, registry);
                if registry.contains(name) {
                    let fragment = apply(name, content, registry);
                    format!(
                        "<div{}>{}{tail_html}</div>",
                        fragment.attributes(),
                        fragment.html
                    )
                } else {
                    format!(
                        "<div class=\"{DEFAULT_MARGIN_CLASS}\">[{name}]{}{}{tail_html}</div>",
                        render_inline(content, registry),
                        Self::TERMINATOR
                    )
                }
            }
            Self::Multi { segments, tail } => {
                let mut html = String::new();
                for (name, content) in segments {
                    if registry.contains(name) {
                        html.push_str(&apply(name, content, registry).wrap_in("span"));
                    } else {
                        html.push_str(&format!(
                            "<span>[{name}]{}</span>",
                            render_inline(content, registry)
                        ));
                    }
                }
                if !tail.is_empty() {
                    html.push_str(&render_inline(tail, registry));
                }
                format!("<div class=\"{DEFAULT_MARGIN_CLASS}\">{html}</div>")
            }
        }
    }
}

fn tag_regex() -> &'static Regex {
    static TAG: OnceLock<Regex> = OnceLock::new();
    TAG.get_or_init(|| Regex::new(r"\[([^\]]+)\]").expect("Invalid style tag regex"))
}

/// Rendered tail with a separating space, or nothing.
fn render_tail(tail: &str, registry: &StyleRegistry) -> String {
    if tail.is_empty() {
        String::new()
    } else {
        format!(" {}", render_inline(tail, registry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn registry(defs: &str) -> StyleRegistry {
        let src = format!("<style>\n{defs}\n<>");
        StyleRegistry::parse(src.lines())
    }

    #[test]
    fn parse_single() {
        assert_eq!(
            StyledLine::parse("[note] Hello <> after"),
            Some(StyledLine::Single {
                name: "note",
                content: "Hello",
                tail: "after"
            })
        );
    }

    #[test]
    fn parse_multi_stops_at_terminator() {
        assert_eq!(
            StyledLine::parse("[a]one [b] two <> tail [c]"),
            Some(StyledLine::Multi {
                segments: vec![("a", "one"), ("b", "two")],
                tail: "tail [c]"
            })
        );
    }

    #[test]
    fn multi_skips_empty_segments() {
        let Some(StyledLine::Multi { segments, .. }) = StyledLine::parse("[a][b]text<>") else {
            panic!("expected multi-style line");
        };
        assert_eq!(segments, vec![("b", "text")]);
    }

    #[test]
    fn declines_without_terminator_or_leading_tag() {
        assert_eq!(StyledLine::parse("[note] Hello"), None);
        assert_eq!(StyledLine::parse("see [note] Hello <>"), None);
        assert_eq!(StyledLine::parse("[] x <>"), None);
    }

    #[test]
    fn render_known_single() {
        let reg = registry("[note] = [$p-2] [#red]");
        let line = StyledLine::parse("[note] **Hi** <> there").unwrap();
        assert_eq!(
            line.render(&reg),
            "<div class=\"text-red-600 p-2 mb-4\"><strong class='font-bold text-red-600'>Hi</strong> there</div>"
        );
    }

    #[test]
    fn render_known_single_without_tail() {
        let reg = registry("[note] = [$mt-2]");
        let line = StyledLine::parse("[note]Hi<>").unwrap();
        assert_eq!(line.render(&reg), "<div class=\"mt-2\">Hi</div>");
    }

    #[test]
    fn render_unknown_single_keeps_brackets() {
        let reg = StyleRegistry::default();
        let line = StyledLine::parse("[ghost] boo <> end").unwrap();
        assert_eq!(line.render(&reg), "<div class=\"mb-4\">[ghost]boo<> end</div>");
    }

    #[test]
    fn render_multi_mixes_known_and_unknown() {
        let reg = registry("[a] = [$mt-1]");
        let line = StyledLine::parse("[a] one [zz] two <> _t_").unwrap();
        assert_eq!(
            line.render(&reg),
            "<div class=\"mb-4\"><span class=\"mt-1\">one</span><span>[zz]two</span><em class='italic'>t</em></div>"
        );
    }
}
