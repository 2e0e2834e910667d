use crate::assets::{ColorOutput, font_class, resolve_color};
use crate::rendering::inline::{Emphasis, format, format_with_icon};

use super::attribute::AttributeTag;
use super::registry::StyleRegistry;

/// Class added when a styled fragment carries no margin class.
pub const DEFAULT_MARGIN_CLASS: &str = "mb-4";

/// Output of applying a style to literal content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyledFragment {
    pub classes: Vec<String>,
    /// Inline declaration such as `color: #ff8800`.
    pub inline_style: Option<String>,
    pub html: String,
}

impl StyledFragment {
    /// ` class="..."` plus ` style="..."` when an inline colour is set.
    pub fn attributes(&self) -> String {
        let mut attrs = format!(" class=\"{}\"", self.classes.join(" "));
        if let Some(style) = &self.inline_style {
            attrs.push_str(&format!(" style=\"{style}\""));
        }
        attrs
    }

    /// Wraps the fragment in `element` carrying its classes.
    pub fn wrap_in(&self, element: &str) -> String {
        format!("<{element}{}>{}</{element}>", self.attributes(), self.html)
    }
}

/// Renders `content` under the style named by `reference`.
///
/// Content is inline-rendered first, then wrapped by the structure template,
/// then given its icon prefix. Attribute tags become classes or an inline
/// colour; palette colours are also merged onto bold elements.
pub fn apply(reference: &str, content: &str, registry: &StyleRegistry) -> StyledFragment {
    let resolved = registry.resolve(reference);

    let mut html = render_inline(content, registry);
    if let Some(structure) = &resolved.structure {
        html = structure.apply(&html);
    }

    let mut classes: Vec<String> = Vec::new();
    let mut color_classes: Vec<&str> = Vec::new();
    let mut inline_style = None;
    let mut icon_prefix = None;

    for tag in &resolved.attributes {
        match tag {
            AttributeTag::Icon(glyph) => icon_prefix = Some(glyph.as_str()),
            AttributeTag::Color(spec) => match resolve_color(spec) {
                ColorOutput::Class(class) => {
                    classes.push(class.to_string());
                    color_classes.push(class);
                }
                ColorOutput::Inline(decl) => inline_style = Some(decl),
            },
            AttributeTag::Font(name) => classes.push(font_class(name).to_string()),
            AttributeTag::RawClass(class) => classes.push(class.clone()),
        }
    }

    if !classes.iter().any(|c| c.starts_with('m')) {
        classes.push(DEFAULT_MARGIN_CLASS.to_string());
    }

    if let Some(icon) = icon_prefix {
        html = format!("{icon} {html}");
    }

    if !color_classes.is_empty() {
        let bold = Emphasis::Bold;
        let plain_open = bold.open_tag();
        let coloured_open = format!(
            "<{} class='{} {}'>",
            bold.tag(),
            bold.class(),
            color_classes.join(" ")
        );
        html = html.replace(&plain_open, &coloured_open);
    }

    StyledFragment {
        classes,
        inline_style,
        html,
    }
}

/// Renders a text fragment with everything that can appear inside a line:
/// inline style spans, the icon prefix, then emphasis.
///
/// Span rendering applies when the fragment contains brackets, does not start
/// with `[` and has no `<>` terminator.
pub fn render_inline(text: &str, registry: &StyleRegistry) -> String {
    let has_spans =
        text.contains('[') && text.contains(']') && !text.starts_with('[') && !text.contains("<>");
    if has_spans {
        return render_spans(text, registry);
    }
    format_with_icon(text)
}

fn render_spans(text: &str, registry: &StyleRegistry) -> String {
    let mut out = String::new();
    let mut pos = 0;

    while pos < text.len() {
        let Some(open) = text[pos..].find('[').map(|i| pos + i) else {
            out.push_str(&format(&text[pos..]));
            break;
        };
        if open > pos {
            out.push_str(&format(&text[pos..open]));
        }

        let Some(close) = text[open..].find(']').map(|i| open + i) else {
            out.push_str(&text[open..]);
            break;
        };
        let name = &text[open + 1..close];

        let content_start = close + 1;
        let content_end = text[content_start..]
            .find('[')
            .map_or(text.len(), |i| content_start + i);
        let content = &text[content_start..content_end];
        pos = content_end;

        if registry.contains(name) {
            let fragment = apply(name, content.trim(), registry);
            out.push_str(&fragment.wrap_in("span"));
        } else {
            out.push_str(&format!("[{name}]{}", format(content)));
        }
    }

    out
}
