use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Folder,
    File,
}

/// One entry of an owner's document listing.
///
/// `id` is the `/`-separated path relative to the owner's directory.
/// Files have no children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentNode {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: DocumentKind,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<DocumentNode>,
}

impl DocumentNode {
    pub fn new_folder(id: String, name: String, children: Vec<DocumentNode>) -> Self {
        Self {
            id,
            name,
            kind: DocumentKind::Folder,
            children,
        }
    }

    pub fn new_file(id: String, name: String) -> Self {
        Self {
            id,
            name,
            kind: DocumentKind::File,
            children: Vec::new(),
        }
    }

    pub fn is_folder(&self) -> bool {
        self.kind == DocumentKind::Folder
    }

    /// Folders before files, then by name.
    pub fn sort_siblings(nodes: &mut [DocumentNode]) {
        nodes.sort_by(|a, b| a.kind.cmp(&b.kind).then_with(|| a.name.cmp(&b.name)));
    }
}
