use crate::models::{DocumentNode, OwnerId};
use relative_path::{Component, RelativePath};
use std::fs;
use std::path::{Path, PathBuf};

/// Extension of documents shown in listings.
pub const DOCUMENT_EXTENSION: &str = "kiro";

/// File seeded into every new owner directory.
pub const WELCOME_FILE: &str = "welcome.kiro";

/// Welcome document used when no template is configured.
pub const DEFAULT_WELCOME: &str = "# Welcome!

Welcome to the Kiro editor.

## Features
- Markdown-style editing
- Live preview
- File management

Start a new document or edit this one.";

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid document path: {0}")]
    InvalidPath(String),
    #[error("Invalid owner directory: {0}")]
    InvalidOwner(String),
}

/// File-system store giving each owner an isolated document directory.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    root: PathBuf,
    welcome: String,
}

impl DocumentStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            welcome: DEFAULT_WELCOME.to_string(),
        }
    }

    /// Replaces the content seeded into new owner directories.
    pub fn with_welcome(mut self, welcome: impl Into<String>) -> Self {
        self.welcome = welcome.into();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the owner's directory, creating and seeding it on first use.
    pub fn owner_dir(&self, owner: &OwnerId) -> Result<PathBuf, IoError> {
        let dir = self.root.join(owner.to_string());
        if dir.exists() {
            if !dir.is_dir() {
                return Err(IoError::InvalidOwner(format!(
                    "{} is not a directory",
                    dir.display()
                )));
            }
            return Ok(dir);
        }

        fs::create_dir_all(&dir).map_err(IoError::Io)?;
        log::info!("Created document directory for owner {owner}");
        fs::write(dir.join(WELCOME_FILE), &self.welcome).map_err(IoError::Io)?;
        log::info!("Seeded {WELCOME_FILE} for owner {owner}");
        Ok(dir)
    }

    /// Lists `.kiro` files and all folders, folders first, then by name.
    pub fn list_documents(&self, owner: &OwnerId) -> Result<Vec<DocumentNode>, IoError> {
        let dir = self.owner_dir(owner)?;
        list_directory_recursive(&dir, None)
    }

    pub fn read_document(&self, owner: &OwnerId, path: &RelativePath) -> Result<String, IoError> {
        let absolute_path = self.resolve(owner, path)?;
        if !absolute_path.is_file() {
            return Err(IoError::NotFound(absolute_path));
        }
        fs::read_to_string(&absolute_path).map_err(IoError::Io)
    }

    /// Writes a document, creating parent folders as needed.
    pub fn write_document(
        &self,
        owner: &OwnerId,
        path: &RelativePath,
        content: &str,
    ) -> Result<(), IoError> {
        let absolute_path = self.resolve(owner, path)?;
        if let Some(parent) = absolute_path.parent() {
            fs::create_dir_all(parent).map_err(IoError::Io)?;
        }
        fs::write(&absolute_path, content).map_err(IoError::Io)
    }

    /// Deletes a document, or a folder with everything in it.
    pub fn delete_document(&self, owner: &OwnerId, path: &RelativePath) -> Result<(), IoError> {
        let absolute_path = self.resolve(owner, path)?;
        if absolute_path.is_dir() {
            fs::remove_dir_all(&absolute_path).map_err(IoError::Io)
        } else if absolute_path.exists() {
            fs::remove_file(&absolute_path).map_err(IoError::Io)
        } else {
            Err(IoError::NotFound(absolute_path))
        }
    }

    pub fn create_folder(&self, owner: &OwnerId, path: &RelativePath) -> Result<(), IoError> {
        let absolute_path = self.resolve(owner, path)?;
        fs::create_dir_all(&absolute_path).map_err(IoError::Io)
    }

    /// Maps a document path into the owner's directory.
    ///
    /// Rejects empty and absolute paths, and paths whose `..` components
    /// would leave the owner directory.
    fn resolve(&self, owner: &OwnerId, path: &RelativePath) -> Result<PathBuf, IoError> {
        if path.as_str().starts_with('/') {
            return Err(IoError::InvalidPath(format!("{path} is absolute")));
        }
        let normalized = path.normalize();
        if normalized.as_str().is_empty() {
            return Err(IoError::InvalidPath("empty path".to_string()));
        }
        if normalized.components().any(|c| c == Component::ParentDir) {
            return Err(IoError::InvalidPath(format!(
                "{path} escapes the owner directory"
            )));
        }

        let dir = self.owner_dir(owner)?;
        Ok(normalized.to_path(dir))
    }
}

fn list_directory_recursive(
    dir: &Path,
    parent_id: Option<&str>,
) -> Result<Vec<DocumentNode>, IoError> {
    let mut nodes = Vec::new();

    for entry in fs::read_dir(dir).map_err(IoError::Io)? {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().to_string();
        let id = match parent_id {
            Some(parent) => format!("{parent}/{name}"),
            None => name.clone(),
        };

        if path.is_dir() {
            let children = list_directory_recursive(&path, Some(&id))?;
            nodes.push(DocumentNode::new_folder(id, name, children));
        } else if let Some(ext) = path.extension()
            && ext == DOCUMENT_EXTENSION
        {
            nodes.push(DocumentNode::new_file(id, name));
        }
    }

    DocumentNode::sort_siblings(&mut nodes);
    Ok(nodes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DocumentKind;
    use crate::tests::{create_test_file, create_test_store_dir};

    fn store_with_owner() -> (tempfile::TempDir, DocumentStore, OwnerId) {
        let dir = create_test_store_dir();
        let store = DocumentStore::new(dir.path());
        (dir, store, OwnerId::new())
    }

    #[test]
    fn test_first_access_seeds_welcome() {
        let (_dir, store, owner) = store_with_owner();

        let content = store
            .read_document(&owner, RelativePath::new(WELCOME_FILE))
            .unwrap();
        assert_eq!(content, DEFAULT_WELCOME);
    }

    #[test]
    fn test_custom_welcome_template() {
        let dir = create_test_store_dir();
        let store = DocumentStore::new(dir.path()).with_welcome("# Hi");
        let owner = OwnerId::new();

        let content = store
            .read_document(&owner, RelativePath::new(WELCOME_FILE))
            .unwrap();
        assert_eq!(content, "# Hi");
    }

    #[test]
    fn test_existing_owner_is_not_reseeded() {
        let (_dir, store, owner) = store_with_owner();
        let welcome = RelativePath::new(WELCOME_FILE);
        store.delete_document(&owner, welcome).unwrap();

        let listing = store.list_documents(&owner).unwrap();
        assert!(listing.is_empty());
    }

    #[test]
    fn test_owners_are_isolated() {
        let (_dir, store, alice) = store_with_owner();
        let bob = OwnerId::new();
        let path = RelativePath::new("notes.kiro");

        store.write_document(&alice, path, "alice").unwrap();

        assert!(matches!(
            store.read_document(&bob, path),
            Err(IoError::NotFound(_))
        ));
    }

    #[test]
    fn test_write_creates_parent_folders() {
        let (_dir, store, owner) = store_with_owner();
        let path = RelativePath::new("a/b/c.kiro");

        store.write_document(&owner, path, "deep").unwrap();
        assert_eq!(store.read_document(&owner, path).unwrap(), "deep");
    }

    #[test]
    fn test_list_documents_tree() {
        let (dir, store, owner) = store_with_owner();
        let owner_dir = store.owner_dir(&owner).unwrap();
        fs::create_dir_all(owner_dir.join("projects/empty")).unwrap();
        let rel = |p: &str| format!("{owner}/{p}");
        create_test_file(&dir, &rel("projects/plan.kiro"), "# Plan");
        create_test_file(&dir, &rel("image.png"), "not a document");
        create_test_file(&dir, &rel("alpha.kiro"), "a");

        let listing = store.list_documents(&owner).unwrap();

        let top: Vec<_> = listing.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(top, vec!["projects", "alpha.kiro", "welcome.kiro"]);

        let projects = &listing[0];
        assert_eq!(projects.kind, DocumentKind::Folder);
        let children: Vec<_> = projects.children.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(children, vec!["projects/empty", "projects/plan.kiro"]);
    }

    #[test]
    fn test_delete_folder_recursively() {
        let (_dir, store, owner) = store_with_owner();
        store
            .write_document(&owner, RelativePath::new("old/x.kiro"), "x")
            .unwrap();

        store
            .delete_document(&owner, RelativePath::new("old"))
            .unwrap();

        let listing = store.list_documents(&owner).unwrap();
        assert!(listing.iter().all(|n| n.name != "old"));
    }

    #[test]
    fn test_delete_missing_is_not_found() {
        let (_dir, store, owner) = store_with_owner();
        let result = store.delete_document(&owner, RelativePath::new("nope.kiro"));
        assert!(matches!(result, Err(IoError::NotFound(_))));
    }

    #[test]
    fn test_create_folder_shows_in_listing() {
        let (_dir, store, owner) = store_with_owner();
        store
            .create_folder(&owner, RelativePath::new("drafts/2024"))
            .unwrap();

        let listing = store.list_documents(&owner).unwrap();
        assert!(listing[0].is_folder());
        assert_eq!(listing[0].children[0].id, "drafts/2024");
    }

    #[test]
    fn test_rejects_escaping_paths() {
        let (_dir, store, owner) = store_with_owner();

        for bad in ["../other/x.kiro", "a/../../x.kiro", "/etc/passwd", "", "a/.."] {
            let result = store.read_document(&owner, RelativePath::new(bad));
            assert!(
                matches!(result, Err(IoError::InvalidPath(_))),
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_inner_parent_dirs_are_allowed() {
        let (_dir, store, owner) = store_with_owner();
        store
            .write_document(&owner, RelativePath::new("a/../b.kiro"), "b")
            .unwrap();
        assert_eq!(
            store
                .read_document(&owner, RelativePath::new("b.kiro"))
                .unwrap(),
            "b"
        );
    }

    #[test]
    fn test_owner_path_that_is_a_file() {
        let dir = create_test_store_dir();
        let owner = OwnerId::new();
        create_test_file(&dir, &owner.to_string(), "oops");
        let store = DocumentStore::new(dir.path());

        assert!(matches!(
            store.list_documents(&owner),
            Err(IoError::InvalidOwner(_))
        ));
    }
}
