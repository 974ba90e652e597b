use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read a markdown source file and return its content
pub fn read_source(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Write rendered HTML, creating parent directories if needed
pub fn write_html(path: &Path, html: &str) -> Result<(), IoError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(path, html).map_err(IoError::Io)
}

/// Output location for `source` inside `output_dir`: same stem, `.html` extension
pub fn output_path_for(source: &Path, output_dir: &Path) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "index".to_string());
    output_dir.join(format!("{stem}.html"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{create_test_file, create_test_source_dir};

    #[test]
    fn test_read_source_success() {
        let dir = create_test_source_dir();
        let path = create_test_file(&dir, "page.md", "Some **bold** text");

        let content = read_source(&path).unwrap();
        assert_eq!(content, "Some **bold** text");
    }

    #[test]
    fn test_read_source_not_found() {
        let dir = create_test_source_dir();
        let result = read_source(&dir.path().join("missing.md"));
        assert!(matches!(result, Err(IoError::NotFound(_))));
    }

    #[test]
    fn test_write_html_creates_parent_directories() {
        let dir = create_test_source_dir();
        let path = dir.path().join("public").join("posts").join("page.html");

        write_html(&path, "<p>hi</p>").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<p>hi</p>");
        assert!(dir.path().join("public").join("posts").is_dir());
    }

    #[test]
    fn test_write_html_overwrites_existing() {
        let dir = create_test_source_dir();
        let path = create_test_file(&dir, "page.html", "<p>old</p>");

        write_html(&path, "<p>new</p>").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<p>new</p>");
    }

    #[test]
    fn test_output_path_for_replaces_extension() {
        let out = output_path_for(Path::new("notes/hello.md"), Path::new("/site"));
        assert_eq!(out, PathBuf::from("/site/hello.html"));
    }

    #[test]
    fn test_output_path_for_without_stem() {
        let out = output_path_for(Path::new("/"), Path::new("/site"));
        assert_eq!(out, PathBuf::from("/site/index.html"));
    }
}
