use std::path::PathBuf;
use tempfile::TempDir;

/// Creates a temporary directory to hold test sources.
pub fn create_test_source_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// Writes `content` to `name` inside `dir` and returns the full path.
pub fn create_test_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let file_path = dir.path().join(name);
    std::fs::write(&file_path, content).expect("Failed to write test file");
    file_path
}
