use std::sync::OnceLock;

use regex::Regex;

use super::kinds::{Emphasis, IconPrefix};

/// Upper bound on full substitution passes. Every pass removes delimiter
/// pairs without introducing new ones, so well-formed input converges in two.
pub const MAX_PASSES: usize = 8;

fn emphasis_rules() -> &'static [(Emphasis, Regex)] {
    static RULES: OnceLock<Vec<(Emphasis, Regex)>> = OnceLock::new();
    RULES.get_or_init(|| {
        Emphasis::PASS_ORDER
            .iter()
            .map(|&kind| {
                let re = Regex::new(&kind.pattern()).expect("Invalid emphasis regex");
                (kind, re)
            })
            .collect()
    })
}

/// Applies strike, highlight, bold, italic and inline code substitutions.
///
/// The pass sequence repeats until the text stops changing or
/// [`MAX_PASSES`] is reached. Nothing is escaped: angle brackets in the input
/// pass through as HTML.
pub fn format(text: &str) -> String {
    let mut current = text.to_string();

    for _ in 0..MAX_PASSES {
        let before = current.clone();
        for (kind, re) in emphasis_rules() {
            let replacement = format!("{}${{1}}{}", kind.open_tag(), kind.close_tag());
            current = re.replace_all(&current, replacement.as_str()).into_owned();
        }
        if current == before {
            return current;
        }
    }

    log::debug!("inline formatting did not converge after {MAX_PASSES} passes");
    current
}

/// Formats a fragment, honouring a leading `[+icon] rest` prefix.
pub fn format_with_icon(text: &str) -> String {
    match IconPrefix::split(text) {
        Some((icon, rest)) => format!("<span>{icon}</span> {}", format(rest)),
        None => format(text),
    }
}
