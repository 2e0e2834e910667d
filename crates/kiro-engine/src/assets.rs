//! Static font and colour tables plus the font asset snippets a page needs.

/// A named font known to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontConfig {
    /// Tailwind class applied to styled content, e.g. `font-ridi`.
    pub class_name: &'static str,
    /// CSS font family.
    pub family: &'static str,
    /// Stylesheet or font file to load, if not served by Google Fonts.
    pub url: Option<&'static str>,
    /// Served by Google Fonts.
    pub google: bool,
}

/// Font table in declaration order. The `default` entry is the fallback for
/// unknown names.
pub const FONTS: &[(&str, FontConfig)] = &[
    (
        "RIDIBatang",
        FontConfig {
            class_name: "font-ridi",
            family: "RIDIBatang",
            url: Some("https://fastly.jsdelivr.net/gh/projectnoonnu/noonfonts_twelve@1.0/RIDIBatang.woff"),
            google: false,
        },
    ),
    (
        "GowunDodum",
        FontConfig {
            class_name: "font-gowun",
            family: "GowunDodum",
            url: Some("https://fastly.jsdelivr.net/gh/projectnoonnu/noonfonts_2108@1.1/GowunDodum-Regular.woff"),
            google: false,
        },
    ),
    (
        "Monoplex",
        FontConfig {
            class_name: "font-monoplex",
            family: "MonoplexKR",
            url: Some("https://fastly.jsdelivr.net/gh/projectnoonnu/noonfonts_Monoplex-kr@1.0/MonoplexKR-Regular.woff2"),
            google: false,
        },
    ),
    (
        "Pretendard",
        FontConfig {
            class_name: "font-pretendard",
            family: "Pretendard",
            url: Some("https://cdn.jsdelivr.net/gh/orioncactus/pretendard/dist/web/static/pretendard.css"),
            google: false,
        },
    ),
    (
        "JetBrains Mono",
        FontConfig {
            class_name: "font-jetbrains",
            family: "JetBrains Mono",
            url: None,
            google: true,
        },
    ),
    (
        "code",
        FontConfig {
            class_name: "font-jetbrains",
            family: "JetBrains Mono",
            url: None,
            google: true,
        },
    ),
    (
        "default",
        FontConfig {
            class_name: "font-sans",
            family: "Noto Sans KR",
            url: None,
            google: true,
        },
    ),
];

/// Alternative spellings accepted in `[=Font]` tags.
const FONT_ALIASES: &[(&str, &str)] = &[("MonoplexKR-Regular", "Monoplex")];

/// Named colours mapped to text colour classes.
pub const BASIC_COLORS: &[(&str, &str)] = &[
    ("red", "text-red-600"),
    ("blue", "text-blue-600"),
    ("green", "text-green-600"),
    ("yellow", "text-yellow-600"),
    ("purple", "text-purple-600"),
    ("pink", "text-pink-600"),
    ("indigo", "text-indigo-600"),
    ("teal", "text-teal-600"),
    ("cyan", "text-cyan-600"),
    ("orange", "text-orange-600"),
    ("lime", "text-lime-600"),
    ("amber", "text-amber-600"),
    ("gray", "text-gray-600"),
    ("zinc", "text-zinc-600"),
    ("slate", "text-slate-600"),
    ("black", "text-black"),
    ("white", "text-white"),
];

/// Looks up a font by name or alias.
pub fn font_config(name: &str) -> Option<&'static FontConfig> {
    let name = FONT_ALIASES
        .iter()
        .find(|(alias, _)| *alias == name)
        .map_or(name, |(_, target)| *target);
    FONTS.iter().find(|(key, _)| *key == name).map(|(_, f)| f)
}

/// Font class for `name`, falling back to the default font.
pub fn font_class(name: &str) -> &'static str {
    font_config(name)
        .or_else(|| font_config("default"))
        .map_or("font-sans", |f| f.class_name)
}

/// Palette class for a colour name, matched case-insensitively.
pub fn color_class(name: &str) -> Option<&'static str> {
    let lower = name.to_lowercase();
    BASIC_COLORS
        .iter()
        .find(|(key, _)| *key == lower)
        .map(|(_, class)| *class)
}

/// How a `[#spec]` colour is expressed in HTML.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorOutput {
    /// A palette class such as `text-red-600`.
    Class(&'static str),
    /// Inline declaration such as `color: #ff8800`.
    Inline(String),
}

pub fn resolve_color(spec: &str) -> ColorOutput {
    match color_class(spec) {
        Some(class) => ColorOutput::Class(class),
        None => ColorOutput::Inline(format!("color: #{spec}")),
    }
}

/// Font snippets a full page concatenates into its `<head>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontAssets {
    pub google_fonts_link: String,
    pub custom_font_links: String,
    pub custom_font_css: String,
    pub tailwind_config: String,
}

/// Builds the font asset snippets from [`FONTS`].
pub fn render_font_assets() -> FontAssets {
    let mut google_families: Vec<String> = Vec::new();
    let mut seen_families: Vec<&str> = Vec::new();
    let mut links = Vec::new();
    let mut faces = Vec::new();

    for (_, font) in FONTS {
        if font.google {
            let family = font.family.replace(' ', "+");
            if !google_families.contains(&family) {
                google_families.push(family);
            }
            continue;
        }
        let Some(url) = font.url else { continue };
        if seen_families.contains(&font.family) {
            continue;
        }
        seen_families.push(font.family);

        if url.ends_with(".css") {
            links.push(format!("<link rel=\"stylesheet\" href=\"{url}\">"));
            continue;
        }
        let format = url.rsplit('.').next().unwrap_or_default();
        faces.push(format!(
            "@font-face {{\n    font-family: '{}';\n    src: url('{url}') format('{format}');\n    font-display: swap;\n}}",
            font.family
        ));
    }

    let google_fonts_link = if google_families.is_empty() {
        String::new()
    } else {
        format!(
            "<link href=\"https://fonts.googleapis.com/css2?family={}&display=swap\" rel=\"stylesheet\">",
            google_families.join("&family=")
        )
    };

    let code_family = font_config("code").map_or("JetBrains Mono", |f| f.family);
    let custom_font_css = format!(
        "<style>\n{}\npre, code {{\n    font-family: '{code_family}', monospace !important;\n}}\n</style>",
        faces.join("\n")
    );

    let mut tailwind_config = String::from(
        "<script>\ntailwind.config = {\n  theme: {\n    extend: {\n      fontFamily: {\n",
    );
    let mut seen_classes: Vec<&str> = Vec::new();
    for (_, font) in FONTS {
        let name = font
            .class_name
            .strip_prefix("font-")
            .unwrap_or(font.class_name);
        if seen_classes.contains(&name) {
            continue;
        }
        seen_classes.push(name);
        tailwind_config.push_str(&format!(
            "        '{name}': ['{}', ...tailwind.defaultTheme.fontFamily.sans],\n",
            font.family
        ));
    }
    tailwind_config.push_str("      }\n    }\n  }\n}\n</script>");

    FontAssets {
        google_fonts_link,
        custom_font_links: links.join("\n"),
        custom_font_css,
        tailwind_config,
    }
}
