use crate::rendering::styles::Preamble;

use super::kinds::{
    BlockQuote, CodeFence, CustomList, DashList, Heading, MediaDirective, OrderedList, Rule,
    StyledLine, Toggle, ToggleLine,
};

/// What a single line is, judged from the line alone.
///
/// Variants are listed in recognition order; the first recognizer that
/// accepts a line wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    PreambleOpen,
    PreambleClose,
    /// `[key] = value` outside the preamble.
    Assignment,
    Fence,
    Toggle(ToggleLine<'a>),
    Quote(&'a str),
    Styled(StyledLine<'a>),
    Media(MediaDirective<'a>),
    CustomItem { key: &'a str, content: &'a str },
    OrderedItem(&'a str),
    DashItem { level: usize, content: &'a str },
    Heading { level: u8, content: &'a str },
    Rule,
    Blank,
    Paragraph(&'a str),
}

impl LineKind<'_> {
    pub const CUSTOM_ITEM_RANK: u8 = 7;
    pub const ORDERED_ITEM_RANK: u8 = 8;
    pub const DASH_ITEM_RANK: u8 = 9;

    /// Position in the recognition order.
    ///
    /// An open list is closed by any line ranked after its own item kind;
    /// lines ranked before it leave the list open.
    pub fn rank(&self) -> u8 {
        match self {
            Self::PreambleOpen | Self::PreambleClose | Self::Assignment => 1,
            Self::Fence => 2,
            Self::Toggle(_) => 3,
            Self::Quote(_) => 4,
            Self::Styled(_) => 5,
            Self::Media(_) => 6,
            Self::CustomItem { .. } => Self::CUSTOM_ITEM_RANK,
            Self::OrderedItem(_) => Self::ORDERED_ITEM_RANK,
            Self::DashItem { .. } => Self::DASH_ITEM_RANK,
            Self::Heading { .. } => 10,
            Self::Rule => 11,
            Self::Blank => 12,
            Self::Paragraph(_) => 13,
        }
    }
}

/// Classifies a line by running the recognizers in order.
pub fn classify(line: &str) -> LineKind<'_> {
    try_preamble(line)
        .or_else(|| CodeFence::is_fence(line).then_some(LineKind::Fence))
        .or_else(|| Toggle::parse(line).map(LineKind::Toggle))
        .or_else(|| BlockQuote::strip_prefix(line).map(LineKind::Quote))
        .or_else(|| StyledLine::parse(line).map(LineKind::Styled))
        .or_else(|| MediaDirective::parse(line).map(LineKind::Media))
        .or_else(|| try_list_item(line))
        .or_else(|| Heading::parse(line).map(|(level, content)| LineKind::Heading { level, content }))
        .unwrap_or_else(|| try_leaf(line))
}

fn try_preamble(line: &str) -> Option<LineKind<'_>> {
    if Preamble::is_open(line) {
        Some(LineKind::PreambleOpen)
    } else if Preamble::is_close(line) {
        Some(LineKind::PreambleClose)
    } else if Preamble::is_assignment(line) {
        Some(LineKind::Assignment)
    } else {
        None
    }
}

fn try_list_item(line: &str) -> Option<LineKind<'_>> {
    if let Some((key, content)) = CustomList::parse(line) {
        return Some(LineKind::CustomItem { key, content });
    }
    if let Some(content) = OrderedList::parse(line) {
        return Some(LineKind::OrderedItem(content));
    }
    DashList::parse(line).map(|(level, content)| LineKind::DashItem { level, content })
}

fn try_leaf(line: &str) -> LineKind<'_> {
    if Rule::is_rule(line) {
        LineKind::Rule
    } else if line.trim().is_empty() {
        LineKind::Blank
    } else {
        LineKind::Paragraph(line)
    }
}
