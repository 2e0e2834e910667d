use crate::assets::render_font_assets;
use crate::rendering::render;

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com?plugins=typography";

const PAGE_CSS: &str = r#"<style type="text/css">
.prose :where(ul.custom-list):not(:where([class~="not-prose"] *)) {
    list-style-type: none;
    padding-left: 0em;
}
.prose :where(h1, h2, h3, h4, h5, h6):not(:where([class~="not-prose"] *)) {
    margin-bottom: 0.3em;
}
.prose :where(ul.custom-list li):not(:where([class~="not-prose"] *)) {
    display: flex;
    align-items: baseline;
    margin-top: 0.5em;
    margin-bottom: 0.5em;
}
.prose :where(ul.custom-list li span):not(:where([class~="not-prose"] *)) {
    font-family: 'JetBrains Mono', monospace;
    color: #6b7280;
    margin-right: 0.5em;
    min-width: 3em;
    display: inline-block;
    text-align: right;
}
details {
    position: relative;
    margin: 0em 0;
    padding-left: 1em;
}
details::before {
    content: none;
}
details > div {
    position: relative;
    margin-left: 1em;
    padding-left: 1em;
}
details > div::before {
    content: '';
    position: absolute;
    left: -1em;
    top: 0;
    bottom: 0;
    width: 2px;
    background-color: #e5e7eb;
    border-radius: 1px;
}
details summary {
    margin-bottom: 0.5em;
}
</style>"#;

/// Renders `document` into a standalone HTML page.
///
/// An empty document yields an empty string rather than an empty page.
pub fn render_page(document: &str, title: &str) -> String {
    if document.is_empty() {
        return String::new();
    }

    let output = render(document);
    let fonts = render_font_assets();
    let article_class = if output.global_classes.is_empty() {
        "prose prose-slate max-w-none".to_string()
    } else {
        format!("prose prose-slate max-w-none {}", output.global_classes)
    };

    let head = [
        "<meta charset=\"UTF-8\">".to_string(),
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">".to_string(),
        format!("<title>{title}</title>"),
        format!("<script src=\"{TAILWIND_CDN}\"></script>"),
        fonts.google_fonts_link,
        fonts.custom_font_links,
        fonts.custom_font_css,
        fonts.tailwind_config,
        PAGE_CSS.to_string(),
    ]
    .into_iter()
    .filter(|part| !part.is_empty())
    .collect::<Vec<_>>()
    .join("\n");

    format!(
        "<!DOCTYPE html>\n<html lang=\"ko\">\n<head>\n{head}\n</head>\n\
         <body class=\"min-h-screen bg-gray-50 text-gray-800 font-sans\">\n\
         <div class=\"max-w-3xl mx-auto py-10 px-4 sm:px-6\">\n\
         <article class=\"{article_class}\">\n{}\n</article>\n</div>\n</body>\n</html>",
        output.html
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_has_no_page() {
        assert_eq!(render_page("", "Empty"), "");
    }

    #[test]
    fn page_wraps_body_in_article() {
        let page = render_page("# Hello", "Notes");
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>Notes</title>"));
        assert!(page.contains(TAILWIND_CDN));
        assert!(page.contains("<article class=\"prose prose-slate max-w-none\">\n<h1>Hello</h1>\n</article>"));
        assert!(page.ends_with("</html>"));
    }

    #[test]
    fn page_applies_global_classes() {
        let page = render_page("<style>\n[!global] = [$text-lg]\n<>\nx", "t");
        assert!(page.contains("<article class=\"prose prose-slate max-w-none text-lg\">"));
    }

    #[test]
    fn page_includes_font_assets() {
        let page = render_page("x", "t");
        assert!(page.contains("fonts.googleapis.com"));
        assert!(page.contains("@font-face"));
        assert!(page.contains("tailwind.config"));
        assert!(page.contains("ul.custom-list"));
    }
}
