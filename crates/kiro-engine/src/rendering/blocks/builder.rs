use crate::rendering::styles::{StyleRegistry, render_inline};

use super::classify::{LineKind, classify};
use super::kinds::{
    BlockQuote, CodeFence, CustomList, DashList, Heading, OrderedList, Rule, Toggle, ToggleFrame,
    ToggleLine, ToggleStack,
};

/// Open constructs carried from one line to the next.
#[derive(Debug, Default)]
struct RenderState {
    in_preamble: bool,
    code: Option<Vec<String>>,
    quote: Vec<String>,
    in_custom_list: bool,
    in_ordered_list: bool,
    in_dash_list: bool,
    toggles: ToggleStack,
}

/// Line-by-line driver turning document lines into HTML fragments.
///
/// Every line is consumed by exactly one recognizer. Fragments are collected
/// in order and joined by the caller.
pub struct BlockCompiler<'a> {
    registry: &'a StyleRegistry,
    state: RenderState,
    out: Vec<String>,
}

impl<'a> BlockCompiler<'a> {
    pub fn new(registry: &'a StyleRegistry) -> Self {
        Self {
            registry,
            state: RenderState::default(),
            out: vec![],
        }
    }

    /// Consumes one line. `next` is the following raw line, used to decide
    /// whether a toggle line opens a container.
    pub fn push(&mut self, line: &str, next: Option<&str>) {
        let kind = classify(line);

        match kind {
            LineKind::PreambleOpen => {
                self.state.in_preamble = true;
                return;
            }
            LineKind::PreambleClose => {
                self.state.in_preamble = false;
                return;
            }
            _ if self.state.in_preamble => return,
            LineKind::Assignment => return,
            _ => {}
        }

        if let Some(code) = self.state.code.as_mut() {
            if kind == LineKind::Fence {
                self.flush_code();
            } else {
                code.push(line.to_string());
            }
            return;
        }

        self.close_before(&kind);

        match kind {
            LineKind::Fence => self.state.code = Some(Vec::new()),
            LineKind::Toggle(toggle) => self.push_toggle(toggle, next),
            LineKind::Quote(content) => {
                let html = self.inline(content);
                self.state.quote.push(html);
            }
            LineKind::Styled(styled) => {
                let html = styled.render(self.registry);
                self.out.push(html);
            }
            LineKind::Media(media) => self.out.push(media.render()),
            LineKind::CustomItem { key, content } => {
                if !self.state.in_custom_list {
                    self.out.push(CustomList::OPEN.to_string());
                    self.state.in_custom_list = true;
                }
                let html = CustomList::render_item(key, &self.inline(content));
                self.out.push(html);
            }
            LineKind::OrderedItem(content) => {
                if !self.state.in_ordered_list {
                    self.out.push(OrderedList::OPEN.to_string());
                    self.state.in_ordered_list = true;
                }
                let html = OrderedList::render_item(&self.inline(content));
                self.out.push(html);
            }
            LineKind::DashItem { level, content } => {
                if !self.state.in_dash_list {
                    self.out.push(DashList::OPEN.to_string());
                    self.state.in_dash_list = true;
                }
                let html = DashList::render_item(level, &self.inline(content));
                self.out.push(html);
            }
            LineKind::Heading { level, content } => {
                let html = Heading::render(level, &self.inline(content));
                self.out.push(html);
            }
            LineKind::Rule => self.out.push(Rule::render().to_string()),
            LineKind::Blank => self.out.push("<p></p>".to_string()),
            LineKind::Paragraph(text) => {
                let html = format!("<p>{}</p>", self.inline(text));
                self.out.push(html);
            }
            LineKind::PreambleOpen | LineKind::PreambleClose | LineKind::Assignment => {}
        }
    }

    /// Closes everything still open and returns the fragments.
    ///
    /// An unterminated code block is emitted as if closed, then the quote,
    /// unordered, ordered and custom lists, then toggle frames innermost first.
    pub fn finish(mut self) -> Vec<String> {
        if self.state.code.is_some() {
            self.flush_code();
        }
        self.flush_quote();
        if self.state.in_dash_list {
            self.out.push(DashList::CLOSE.to_string());
        }
        if self.state.in_ordered_list {
            self.out.push(OrderedList::CLOSE.to_string());
        }
        if self.state.in_custom_list {
            self.out.push(CustomList::CLOSE.to_string());
        }
        let closed = self.state.toggles.close_all();
        self.close_toggles(closed.len());
        self.out
    }

    fn inline(&self, text: &str) -> String {
        render_inline(text, self.registry)
    }

    /// Closes constructs that `kind` cannot continue.
    fn close_before(&mut self, kind: &LineKind<'_>) {
        if !matches!(kind, LineKind::Toggle(_) | LineKind::Fence) {
            let closed = self.state.toggles.close_all();
            self.close_toggles(closed.len());
        }
        if !matches!(kind, LineKind::Quote(_)) {
            self.flush_quote();
        }

        let rank = kind.rank();
        if rank > LineKind::CUSTOM_ITEM_RANK && self.state.in_custom_list {
            self.out.push(CustomList::CLOSE.to_string());
            self.state.in_custom_list = false;
        }
        if rank > LineKind::ORDERED_ITEM_RANK && self.state.in_ordered_list {
            self.out.push(OrderedList::CLOSE.to_string());
            self.state.in_ordered_list = false;
        }
        if rank > LineKind::DASH_ITEM_RANK && self.state.in_dash_list {
            self.out.push(DashList::CLOSE.to_string());
            self.state.in_dash_list = false;
        }
    }

    fn push_toggle(&mut self, toggle: ToggleLine<'_>, next: Option<&str>) {
        let closed = self.state.toggles.close_from(toggle.depth);
        self.close_toggles(closed.len());

        let html = self.inline(toggle.content);
        if Toggle::has_deeper_next(next, toggle.depth) {
            self.state.toggles.push(ToggleFrame {
                depth: toggle.depth,
                heading_level: toggle.heading_level,
            });
            self.out.extend(Toggle::open_container(&html));
        } else {
            self.out.push(Toggle::render_leaf(toggle.heading_level, &html));
        }
    }

    fn close_toggles(&mut self, count: usize) {
        for _ in 0..count {
            self.out.push(Toggle::close_container().to_string());
        }
    }

    fn flush_quote(&mut self) {
        if self.state.quote.is_empty() {
            return;
        }
        let lines = std::mem::take(&mut self.state.quote);
        self.out.push(BlockQuote::render(&lines));
    }

    fn flush_code(&mut self) {
        if let Some(lines) = self.state.code.take() {
            self.out.push(CodeFence::render(&lines));
        }
    }
}
