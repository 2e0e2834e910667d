use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temporary document store root
pub fn create_test_store_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Create a file under the store root, creating parent folders
pub fn create_test_file(store_dir: &TempDir, relative: &str, content: &str) -> PathBuf {
    let file_path = store_dir.path().join(relative);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&file_path, content).unwrap();
    file_path
}
