use std::sync::OnceLock;

use regex::Regex;

/// A single attribute declared on a style definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeTag {
    /// `[=Font]`
    Font(String),
    /// `[#spec]` where spec is a palette name or a hex value.
    Color(String),
    /// `[+glyph]`
    Icon(String),
    /// `[$class]` passed through as a CSS class.
    RawClass(String),
}

/// Categories in which a deeper definition replaces the inherited value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExclusiveCategory {
    Font,
    Color,
    Icon,
}

impl AttributeTag {
    pub const FONT_SIGIL: char = '=';
    pub const COLOR_SIGIL: char = '#';
    pub const ICON_SIGIL: char = '+';
    pub const CLASS_SIGIL: char = '$';

    fn from_sigil(sigil: char, value: &str) -> Option<Self> {
        let value = value.to_string();
        match sigil {
            Self::FONT_SIGIL => Some(Self::Font(value)),
            Self::COLOR_SIGIL => Some(Self::Color(value)),
            Self::ICON_SIGIL => Some(Self::Icon(value)),
            Self::CLASS_SIGIL => Some(Self::RawClass(value)),
            _ => None,
        }
    }

    /// `None` for raw classes, which accumulate instead of replacing.
    pub fn exclusive_category(&self) -> Option<ExclusiveCategory> {
        match self {
            Self::Font(_) => Some(ExclusiveCategory::Font),
            Self::Color(_) => Some(ExclusiveCategory::Color),
            Self::Icon(_) => Some(ExclusiveCategory::Icon),
            Self::RawClass(_) => None,
        }
    }

    fn scan_rank(&self) -> u8 {
        match self {
            Self::Font(_) => 0,
            Self::Color(_) => 1,
            Self::Icon(_) => 2,
            Self::RawClass(_) => 3,
        }
    }

    /// Extracts attribute tags from a definition value.
    ///
    /// Tags are grouped fonts, colours, icons, then raw classes; within a
    /// group they keep their order of appearance.
    pub fn scan(value: &str) -> Vec<AttributeTag> {
        static TAG_REGEX: OnceLock<Regex> = OnceLock::new();
        let re = TAG_REGEX
            .get_or_init(|| Regex::new(r"\[([=#+$])([^\]]+)\]").expect("Invalid attribute regex"));

        let mut tags: Vec<AttributeTag> = re
            .captures_iter(value)
            .filter_map(|caps| {
                let sigil = caps[1].chars().next()?;
                Self::from_sigil(sigil, &caps[2])
            })
            .collect();
        tags.sort_by_key(AttributeTag::scan_rank);
        tags
    }
}

/// Merges a deeper level's tags onto the inherited list.
///
/// Font, colour and icon tags remove any inherited tag of the same category
/// before being appended; raw classes are appended as-is, duplicates allowed.
pub fn merge(inherited: &mut Vec<AttributeTag>, overrides: &[AttributeTag]) {
    for tag in overrides {
        if let Some(category) = tag.exclusive_category() {
            inherited.retain(|t| t.exclusive_category() != Some(category));
        }
        inherited.push(tag.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn scan_groups_by_kind() {
        let tags = AttributeTag::scan("[$p-2] [#red] [=RIDIBatang] [+⭐] [$shadow]");
        assert_eq!(
            tags,
            vec![
                AttributeTag::Font("RIDIBatang".into()),
                AttributeTag::Color("red".into()),
                AttributeTag::Icon("⭐".into()),
                AttributeTag::RawClass("p-2".into()),
                AttributeTag::RawClass("shadow".into()),
            ]
        );
    }

    #[test]
    fn scan_ignores_unknown_sigils_and_structure() {
        assert_eq!(AttributeTag::scan("[plain] {#} [%x]"), vec![]);
    }

    #[test]
    fn merge_replaces_font_keeps_one() {
        let mut base = vec![AttributeTag::Font("F1".into())];
        merge(&mut base, &[AttributeTag::Font("F2".into())]);
        assert_eq!(base, vec![AttributeTag::Font("F2".into())]);
    }

    #[test]
    fn merge_appends_raw_classes() {
        let mut base = vec![
            AttributeTag::Color("red".into()),
            AttributeTag::RawClass("p-2".into()),
        ];
        merge(
            &mut base,
            &[
                AttributeTag::RawClass("p-2".into()),
                AttributeTag::Color("blue".into()),
            ],
        );
        assert_eq!(
            base,
            vec![
                AttributeTag::RawClass("p-2".into()),
                AttributeTag::RawClass("p-2".into()),
                AttributeTag::Color("blue".into()),
            ]
        );
    }
}
