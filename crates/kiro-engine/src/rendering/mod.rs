//! # Kiro Rendering
//!
//! Compiles a Kiro document to an HTML body fragment.
//!
//! ## Modules
//!
//! - **`inline`**: emphasis and icon prefixes inside a fragment
//! - **`styles`**: the `<style>` preamble, style resolution and styled content
//! - **`blocks`**: line classification and the block compiler
//!
//! ## Pipeline
//!
//! 1. Split the document into lines (`\r\n` and `\n` both accepted)
//! 2. Collect style definitions into a [`StyleRegistry`]
//! 3. Feed each line to the [`BlockCompiler`] with one line of lookahead
//! 4. Join the emitted fragments with newlines
//!
//! Rendering never fails: lines no recognizer accepts become paragraphs.
//! All state lives in the call, so concurrent renders are independent.

pub mod blocks;
pub mod inline;
pub mod styles;

use blocks::BlockCompiler;
use styles::StyleRegistry;

/// Rendered document body plus classes for the root element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOutput {
    pub html: String,
    /// Space-joined classes from the `!global` style.
    pub global_classes: String,
}

/// Renders a complete Kiro document.
pub fn render(document: &str) -> RenderOutput {
    if document.is_empty() {
        return RenderOutput::default();
    }

    let lines: Vec<&str> = document
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();
    let registry = StyleRegistry::parse(lines.iter().copied());
    log::debug!(
        "Rendering {} lines with {} styles",
        lines.len(),
        registry.len()
    );

    let mut compiler = BlockCompiler::new(&registry);
    for (i, line) in lines.iter().enumerate() {
        compiler.push(line, lines.get(i + 1).copied());
    }
    let fragments = compiler.finish();
    log::debug!("Rendered {} fragments", fragments.len());

    RenderOutput {
        html: fragments.join("\n"),
        global_classes: registry.global_classes(),
    }
}
