//! # Style Definitions
//!
//! The `<style>` … `<>` preamble sublanguage and everything needed to turn a
//! style reference plus content into an HTML fragment.
//!
//! ## Modules
//!
//! - **`attribute`**: `AttributeTag` (`[=font]`, `[#colour]`, `[+icon]`,
//!   `[$class]`) and the category-replace merge rule
//! - **`structure`**: `StructureTemplate` parsed from `{...}` markers
//! - **`registry`**: `StyleRegistry` with three-level inheritance and
//!   reference resolution
//! - **`processor`**: `apply()` and the registry-aware `render_inline()`
//!
//! ## Inheritance
//!
//! Resolving `a:b:c` starts from `a` and merges each deeper level: a deeper
//! font, colour or icon replaces the inherited one; raw classes accumulate.
//! The structure template comes from the deepest level that defines one.

pub mod attribute;
pub mod processor;
pub mod registry;
pub mod structure;

pub use attribute::AttributeTag;
pub use processor::{StyledFragment, apply, render_inline};
pub use registry::{GLOBAL_STYLE, Preamble, ResolvedStyle, StyleNode, StyleRegistry};
pub use structure::{StructureMarker, StructureTemplate};
