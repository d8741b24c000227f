//! Writing extracted text to disk

use crate::error::Result;
use crate::scrape::extract::UNTITLED;
use crate::scrape::slug::to_kebab_case;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Path the text for `title` is written to inside `dir`
pub fn output_path(dir: &Path, title: &str) -> PathBuf {
    let slug = to_kebab_case(title);
    let stem: &str = if slug.is_empty() { UNTITLED } else { &slug };
    dir.join(format!("{stem}.txt"))
}

/// Save `content` as `<dir>/<kebab-title>.txt`, creating `dir` if needed
///
/// Returns `None` without touching the filesystem when there is nothing to
/// save. An existing file with the same name is overwritten.
pub fn save_text(dir: &Path, title: &str, content: &str) -> Result<Option<PathBuf>> {
    if content.is_empty() {
        return Ok(None);
    }

    fs::create_dir_all(dir)?;
    let path = output_path(dir, title);
    fs::write(&path, content)?;
    debug!(path = %path.display(), bytes = content.len(), "saved page text");

    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_output_path() {
        let dir = Path::new("out");
        assert_eq!(output_path(dir, "My Page"), dir.join("my-page.txt"));
        assert_eq!(output_path(dir, "!!!"), dir.join("untitled.txt"));
    }

    #[test]
    fn test_save_creates_nested_dir() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("a").join("b");

        let path = save_text(&dir, "Some Title", "line one\nline two")
            .unwrap()
            .unwrap();

        assert_eq!(path, dir.join("some-title.txt"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "line one\nline two");
    }

    #[test]
    fn test_empty_content_writes_nothing() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("never");

        assert!(save_text(&dir, "Title", "").unwrap().is_none());
        assert!(!dir.exists());
    }
}
