use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;

/// Media directive kinds accepted after `@`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Image,
    Audio,
    Video,
    Link,
}

impl FromStr for MediaType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "image" => Ok(MediaType::Image),
            "audio" => Ok(MediaType::Audio),
            "video" => Ok(MediaType::Video),
            "link" => Ok(MediaType::Link),
            _ => Err(()),
        }
    }
}

/// A parsed `@type: url ! description` directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaDirective<'a> {
    pub media_type: MediaType,
    pub url: &'a str,
    pub description: &'a str,
}

const CAPTION_CLASS: &str = "text-center text-sm text-gray-600 mt-1";

impl<'a> MediaDirective<'a> {
    /// Returns `None` for lines that are not directives or name an unknown type.
    pub fn parse(line: &'a str) -> Option<Self> {
        static DIRECTIVE: OnceLock<Regex> = OnceLock::new();
        let re = DIRECTIVE
            .get_or_init(|| Regex::new(r"^@([a-z]+): *([^ ]+) *! *(.*)").expect("Invalid media regex"));

        let caps = re.captures(line)?;
        let media_type = caps.get(1)?.as_str().parse().ok()?;
        Some(Self {
            media_type,
            url: caps.get(2)?.as_str().trim(),
            description: caps.get(3)?.as_str().trim(),
        })
    }

    pub fn render(&self) -> String {
        let (url, desc) = (self.url, self.description);
        let figure = |media: String| {
            format!("<figure class=\"my-4\">{media}<figcaption class=\"{CAPTION_CLASS}\">{desc}</figcaption></figure>")
        };

        match self.media_type {
            MediaType::Image => figure(format!(
                "<img src=\"{url}\" alt=\"{desc}\" title=\"{desc}\" class=\"rounded-md\"/>"
            )),
            MediaType::Audio => figure(format!(
                "<audio controls src=\"{url}\" title=\"{desc}\" class=\"mt-1 w-full\"></audio>"
            )),
            MediaType::Video => figure(format!(
                "<video controls src=\"{url}\" title=\"{desc}\" class=\"rounded-md mt-1 w-full\"></video>"
            )),
            MediaType::Link => format!(
                "<a href=\"{url}\" class=\"text-blue-600 underline\" title=\"{desc}\">{desc}</a>"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_image_directive() {
        let directive = MediaDirective::parse("@image: http://x/y.png ! a cat").unwrap();
        assert_eq!(directive.media_type, MediaType::Image);
        assert_eq!(directive.url, "http://x/y.png");
        assert_eq!(directive.description, "a cat");
    }

    #[test]
    fn unknown_type_declines() {
        assert_eq!(MediaDirective::parse("@gif: http://x/y.gif ! nope"), None);
        assert_eq!(MediaDirective::parse("@image http://x/y.png ! no colon"), None);
        assert_eq!(MediaDirective::parse("@image: http://x/y.png"), None);
    }

    #[test]
    fn render_image_figure() {
        let html = MediaDirective::parse("@image: http://x/y.png ! a cat")
            .unwrap()
            .render();
        assert_eq!(
            html,
            "<figure class=\"my-4\"><img src=\"http://x/y.png\" alt=\"a cat\" title=\"a cat\" class=\"rounded-md\"/><figcaption class=\"text-center text-sm text-gray-600 mt-1\">a cat</figcaption></figure>"
        );
    }

    #[test]
    fn render_link_anchor() {
        let html = MediaDirective::parse("@link:https://kiro.dev!Home")
            .unwrap()
            .render();
        assert_eq!(
            html,
            "<a href=\"https://kiro.dev\" class=\"text-blue-600 underline\" title=\"Home\">Home</a>"
        );
    }

    #[test]
    fn render_audio_and_video() {
        let audio = MediaDirective::parse("@audio: a.mp3 ! Song").unwrap().render();
        assert!(audio.contains("<audio controls src=\"a.mp3\" title=\"Song\""));
        let video = MediaDirective::parse("@video: b.mp4 ! Clip").unwrap().render();
        assert!(video.contains("<video controls src=\"b.mp4\""));
        assert!(video.ends_with("Clip</figcaption></figure>"));
    }
}
