use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;

use super::attribute::{AttributeTag, merge};
use super::structure::StructureTemplate;
use crate::assets::{ColorOutput, font_class, resolve_color};

/// Deepest supported reference: style, child, grandchild.
pub const MAX_DEPTH: usize = 3;

/// Reserved style whose attributes become the document root classes.
pub const GLOBAL_STYLE: &str = "!global";

/// Delimiters of the style definition preamble.
pub struct Preamble;

impl Preamble {
    pub const OPEN: &'static str = "<style>";
    pub const CLOSE: &'static str = "<>";

    pub fn is_open(line: &str) -> bool {
        line.trim() == Self::OPEN
    }

    pub fn is_close(line: &str) -> bool {
        line.trim() == Self::CLOSE
    }

    /// A `[key] = value` assignment written outside the delimited region.
    pub fn is_assignment(line: &str) -> bool {
        static ASSIGNMENT: OnceLock<Regex> = OnceLock::new();
        ASSIGNMENT
            .get_or_init(|| Regex::new(r"^\s*\[[^\]]+\]\s*=").expect("Invalid assignment regex"))
            .is_match(line)
    }
}

/// A style definition at any of the three levels.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleNode {
    pub attributes: Vec<AttributeTag>,
    pub structure: Option<StructureTemplate>,
    pub children: HashMap<String, StyleNode>,
}

impl StyleNode {
    fn from_value(value: &str) -> Self {
        static STRUCTURE: OnceLock<Regex> = OnceLock::new();
        let re = STRUCTURE.get_or_init(|| Regex::new(r"\{([^}]+)\}").expect("Invalid structure regex"));

        Self {
            attributes: AttributeTag::scan(value),
            structure: re
                .captures(value)
                .map(|caps| StructureTemplate::parse(&caps[1])),
            children: HashMap::new(),
        }
    }
}

/// Flattened result of resolving a style reference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedStyle {
    pub attributes: Vec<AttributeTag>,
    pub structure: Option<StructureTemplate>,
}

/// Top-level styles defined by a document's preamble.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleRegistry {
    styles: HashMap<String, StyleNode>,
}

enum DefinitionLevel {
    Style,
    Child,
    Grandchild,
}

impl StyleRegistry {
    /// Collects definitions between `<style>` and `<>` lines.
    ///
    /// `key = value` opens a style, `: key = value` a child of the last
    /// style, `:: key = value` a grandchild of the last child. Lines that do
    /// not fit are dropped.
    pub fn parse<'a>(lines: impl IntoIterator<Item = &'a str>) -> Self {
        let mut registry = Self::default();
        let mut in_preamble = false;
        let mut current_style: Option<String> = None;
        let mut current_child: Option<String> = None;

        for line in lines {
            if Preamble::is_open(line) {
                in_preamble = true;
                continue;
            }
            if Preamble::is_close(line) {
                in_preamble = false;
                continue;
            }
            if !in_preamble {
                continue;
            }

            let Some((raw_key, value)) = line.split_once('=') else {
                continue;
            };
            let trimmed = line.trim_start();
            let level = if trimmed.starts_with("::") {
                DefinitionLevel::Grandchild
            } else if trimmed.starts_with(':') {
                DefinitionLevel::Child
            } else {
                DefinitionLevel::Style
            };

            match level {
                DefinitionLevel::Style => {
                    let key = raw_key.trim_matches(|c: char| c == '[' || c == ']' || c == ' ');
                    if key.is_empty() {
                        continue;
                    }
                    registry
                        .styles
                        .insert(key.to_string(), StyleNode::from_value(value));
                    current_style = Some(key.to_string());
                    current_child = None;
                }
                DefinitionLevel::Child => {
                    let key = raw_key.trim_matches(|c: char| c == ':' || c == ' ');
                    let Some(parent) = current_style
                        .as_ref()
                        .and_then(|name| registry.styles.get_mut(name))
                    else {
                        continue;
                    };
                    if key.is_empty() {
                        continue;
                    }
                    parent
                        .children
                        .insert(key.to_string(), StyleNode::from_value(value));
                    current_child = Some(key.to_string());
                }
                DefinitionLevel::Grandchild => {
                    let key = raw_key.trim_matches(|c: char| c == ':' || c == ' ');
                    let Some(child) = current_style
                        .as_ref()
                        .and_then(|name| registry.styles.get_mut(name))
                        .zip(current_child.as_ref())
                        .and_then(|(parent, child)| parent.children.get_mut(child))
                    else {
                        continue;
                    };
                    if key.is_empty() {
                        continue;
                    }
                    child
                        .children
                        .insert(key.to_string(), StyleNode::from_value(value));
                }
            }
        }

        registry
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&StyleNode> {
        self.styles.get(name)
    }

    /// Whether the root segment of `reference` names a defined style.
    pub fn contains(&self, reference: &str) -> bool {
        let root = reference.split(':').next().unwrap_or_default();
        self.styles.contains_key(root)
    }

    /// Resolves `name`, `name:child` or `name:child:grandchild`.
    ///
    /// Unknown names resolve to an empty style. Missing lower levels stop the
    /// walk at the deepest level found; segments beyond the third are ignored.
    pub fn resolve(&self, reference: &str) -> ResolvedStyle {
        let mut segments = reference.split(':').take(MAX_DEPTH);
        let Some(mut node) = segments.next().and_then(|root| self.styles.get(root)) else {
            return ResolvedStyle::default();
        };

        let mut resolved = ResolvedStyle {
            attributes: node.attributes.clone(),
            structure: node.structure.clone(),
        };

        for segment in segments {
            let Some(next) = node.children.get(segment) else {
                break;
            };
            merge(&mut resolved.attributes, &next.attributes);
            if next.structure.is_some() {
                resolved.structure = next.structure.clone();
            }
            node = next;
        }

        resolved
    }

    /// Space-joined classes of the reserved `!global` style.
    ///
    /// Fonts map to font classes, colours to palette classes or a bare
    /// `color: #...` declaration, raw classes pass through, icons are dropped.
    pub fn global_classes(&self) -> String {
        let Some(global) = self.styles.get(GLOBAL_STYLE) else {
            return String::new();
        };

        global
            .attributes
            .iter()
            .filter_map(|tag| match tag {
                AttributeTag::Font(name) => Some(font_class(name).to_string()),
                AttributeTag::Color(spec) => Some(match resolve_color(spec) {
                    ColorOutput::Class(class) => class.to_string(),
                    ColorOutput::Inline(decl) => decl,
                }),
                AttributeTag::RawClass(class) => Some(class.clone()),
                AttributeTag::Icon(_) => None,
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::styles::structure::StructureMarker;
    use pretty_assertions::assert_eq;

    fn registry(src: &str) -> StyleRegistry {
        StyleRegistry::parse(src.lines())
    }

    const THREE_LEVELS: &str = "\
<style>
[title] = [=RIDIBatang] [#red] [$p-2] {#}
: sub = [=GowunDodum] [$shadow]
:: tiny = [#blue] [$p-2] {##}
[note] = [+📌]
<>";

    #[test]
    fn parses_three_levels() {
        let reg = registry(THREE_LEVELS);
        assert_eq!(reg.len(), 2);
        let title = reg.get("title").unwrap();
        let sub = &title.children["sub"];
        assert!(sub.children.contains_key("tiny"));
        assert_eq!(reg.get("note").unwrap().attributes, vec![AttributeTag::Icon("📌".into())]);
    }

    #[test]
    fn lines_outside_preamble_ignored() {
        let reg = registry("[loose] = [#red]\n<style>\n[a] = [#blue]\n<>\n[b] = [#green]");
        assert!(reg.get("loose").is_none());
        assert!(reg.get("b").is_none());
        assert!(reg.get("a").is_some());
    }

    #[test]
    fn orphan_child_lines_are_dropped() {
        let reg = registry("<style>\n: child = [#red]\n:: gc = [#blue]\n<>");
        assert!(reg.is_empty());
    }

    #[test]
    fn grandchild_without_child_is_dropped() {
        let reg = registry("<style>\n[a] = [#red]\n:: gc = [#blue]\n<>");
        assert!(reg.get("a").unwrap().children.is_empty());
    }

    #[test]
    fn unknown_reference_resolves_empty() {
        let reg = registry(THREE_LEVELS);
        assert_eq!(reg.resolve("missing"), ResolvedStyle::default());
        assert_eq!(reg.resolve("missing:sub"), ResolvedStyle::default());
    }

    #[test]
    fn child_font_replaces_parent_font() {
        let reg = registry(THREE_LEVELS);
        let resolved = reg.resolve("title:sub");
        let fonts: Vec<_> = resolved
            .attributes
            .iter()
            .filter(|t| matches!(t, AttributeTag::Font(_)))
            .collect();
        assert_eq!(fonts, vec![&AttributeTag::Font("GowunDodum".into())]);
    }

    #[test]
    fn grandchild_merges_and_overrides_structure() {
        let reg = registry(THREE_LEVELS);
        let resolved = reg.resolve("title:sub:tiny");
        assert_eq!(
            resolved.attributes,
            vec![
                AttributeTag::RawClass("p-2".into()),
                AttributeTag::Font("GowunDodum".into()),
                AttributeTag::RawClass("shadow".into()),
                AttributeTag::Color("blue".into()),
                AttributeTag::RawClass("p-2".into()),
            ]
        );
        assert_eq!(
            resolved.structure.unwrap().markers(),
            &[StructureMarker::Heading(2)]
        );
    }

    #[test]
    fn structure_inherited_from_ancestor() {
        let reg = registry(THREE_LEVELS);
        let resolved = reg.resolve("title:sub");
        assert_eq!(
            resolved.structure.unwrap().markers(),
            &[StructureMarker::Heading(1)]
        );
    }

    #[test]
    fn missing_child_stops_at_parent() {
        let reg = registry(THREE_LEVELS);
        assert_eq!(reg.resolve("title:nope:tiny"), reg.resolve("title"));
    }

    #[test]
    fn deeper_segments_ignored() {
        let reg = registry(THREE_LEVELS);
        assert_eq!(reg.resolve("title:sub:tiny:extra"), reg.resolve("title:sub:tiny"));
    }

    #[test]
    fn global_classes_translate_attributes() {
        let reg = registry("<style>\n[!global] = [=Pretendard] [#ff0000] [+✨] [$leading-7]\n<>");
        assert_eq!(reg.global_classes(), "font-pretendard color: #ff0000 leading-7");
    }

    #[test]
    fn no_global_style_means_no_classes() {
        assert_eq!(registry(THREE_LEVELS).global_classes(), "");
    }

    #[test]
    fn assignment_lines_detected() {
        assert!(Preamble::is_assignment("[title] = [#red]"));
        assert!(Preamble::is_assignment("  [a]=b"));
        assert!(!Preamble::is_assignment("[title]content<>"));
        assert!(!Preamble::is_assignment("[title]a = b"));
    }
}
