pub mod document_tree;
pub mod owner;

pub use document_tree::{DocumentKind, DocumentNode};
pub use owner::OwnerId;
