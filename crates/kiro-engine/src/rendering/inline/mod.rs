//! # Inline Formatting
//!
//! Character-level emphasis inside a single text fragment, independent of
//! block context.
//!
//! ## Modules
//!
//! - **`kinds`**: `Emphasis` (delimiters, elements, classes) and `IconPrefix`
//! - **`formatter`**: `format()` fixed-point substitution and
//!   `format_with_icon()` for the `[+icon] rest` form
//!
//! ## Pass Order
//!
//! Strike, highlight, bold, italic, then inline code. The whole sequence
//! repeats until the text is stable so that nested markers such as
//! `_**x**_` resolve.

pub mod formatter;
pub mod kinds;

pub use formatter::{MAX_PASSES, format, format_with_icon};
pub use kinds::{Emphasis, IconPrefix};
