pub mod assets;
pub mod io;
pub mod models;
pub mod page;
pub mod rendering;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use assets::{FontAssets, render_font_assets};
pub use io::*;
pub use models::*;
pub use page::render_page;
pub use rendering::{RenderOutput, render};
