//! Block compilation.
//!
//! Lines are classified on their own ([`classify`]), then fed to the
//! [`BlockCompiler`], which tracks open code blocks, quotes, lists and toggle
//! frames across lines and emits one HTML fragment per construct.

pub mod builder;
pub mod classify;
pub mod kinds;

pub use builder::BlockCompiler;
pub use classify::{LineKind, classify};
