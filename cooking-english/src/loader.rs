//! Content loader.
//!
//! Reads `day{N}.json` documents from the content directory. An absent
//! document is reported as `ContentError::NotFound` so the build can treat
//! it as "not authored yet" rather than a failure.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use cooking_english_core::{ContentError, DayMeta, LessonContent, parse_lesson};

/// Loads lesson documents from a directory.
#[derive(Debug, Clone)]
pub struct ContentLoader {
    root: PathBuf,
}

impl ContentLoader {
    /// Creates a loader rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns `true` if the content directory exists.
    #[must_use]
    pub fn root_exists(&self) -> bool {
        self.root.is_dir()
    }

    /// Location of the document for `day`.
    #[must_use]
    pub fn day_path(&self, day: u32) -> PathBuf {
        self.root.join(format!("day{day}.json"))
    }

    /// Loads and parses the document for `meta.day`.
    ///
    /// `meta` is injected when the document has no `meta` block.
    ///
    /// # Errors
    ///
    /// - `ContentError::NotFound` if the document does not exist
    /// - `ContentError::Read` for any other read failure
    /// - `ContentError::Parse` if the document is not a lesson object
    pub fn load(&self, meta: &DayMeta) -> Result<LessonContent, ContentError> {
        let path = self.day_path(meta.day);

        let raw = fs::read_to_string(&path).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                ContentError::NotFound {
                    day: meta.day,
                    path: path.clone(),
                }
            } else {
                ContentError::Read {
                    day: meta.day,
                    path: path.clone(),
                    source,
                }
            }
        })?;

        tracing::debug!(day = meta.day, path = %path.display(), bytes = raw.len(), "read lesson document");

        parse_lesson(&raw, meta).map_err(|e| ContentError::Parse {
            day: meta.day,
            path,
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn karaage() -> DayMeta {
        DayMeta::new(3, "Karaage", "唐揚げ", "🍗")
    }

    #[test]
    fn day_path_convention() {
        let loader = ContentLoader::new("content");
        assert_eq!(loader.day_path(12), PathBuf::from("content/day12.json"));
    }

    #[test]
    fn missing_document_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let loader = ContentLoader::new(dir.path());
        let err = loader.load(&karaage()).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.day(), 3);
    }

    #[test]
    fn malformed_document_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("day3.json"), "{ \"recipe\": [").unwrap();
        let loader = ContentLoader::new(dir.path());
        match loader.load(&karaage()).unwrap_err() {
            ContentError::Parse { day, message, .. } => {
                assert_eq!(day, 3);
                assert!(message.contains("line 1"));
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn missing_meta_is_injected() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("day3.json"),
            r#"{"recipe": {"title": "Karaage"}}"#,
        )
        .unwrap();
        let loader = ContentLoader::new(dir.path());
        let content = loader.load(&karaage()).unwrap();
        assert_eq!(content.meta, karaage());
        assert_eq!(content.recipe.title, "Karaage");
    }

    #[test]
    fn directory_in_place_of_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("day3.json")).unwrap();
        let loader = ContentLoader::new(dir.path());
        let err = loader.load(&karaage()).unwrap_err();
        assert!(!err.is_not_found());
    }

    #[test]
    fn root_exists() {
        let dir = tempfile::tempdir().unwrap();
        assert!(ContentLoader::new(dir.path()).root_exists());
        assert!(!ContentLoader::new(dir.path().join("missing")).root_exists());
    }
}
