//! Output directory and atomic page writes.
//!
//! Pages are written to a hidden temporary file next to the target and
//! renamed into place, so a reader never sees a half-written page.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::CookingEnglishError;

/// File name of the course index page.
pub const INDEX_FILE: &str = "index.html";

/// The directory generated pages are written to.
#[derive(Debug, Clone)]
pub struct OutputDir {
    root: PathBuf,
}

impl OutputDir {
    /// Ensures `root` exists and returns a handle to it.
    ///
    /// # Errors
    ///
    /// Returns `CookingEnglishError::Io` if the directory cannot be created.
    pub fn create(root: impl Into<PathBuf>) -> Result<Self, CookingEnglishError> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|e| CookingEnglishError::io(&root, e))?;
        Ok(Self { root })
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File name of the page for `day`.
    #[must_use]
    pub fn day_file(day: u32) -> String {
        format!("day{day}.html")
    }

    /// Atomically writes `contents` to `name` inside the directory.
    ///
    /// Returns the final path.
    ///
    /// # Errors
    ///
    /// Returns `CookingEnglishError::Io` if the temporary file cannot be
    /// written or renamed.
    pub fn write(&self, name: &str, contents: &str) -> Result<PathBuf, CookingEnglishError> {
        let target = self.root.join(name);
        let staging = self.root.join(format!(".{name}.tmp"));

        if let Err(e) = fs::write(&staging, contents) {
            let _ = fs::remove_file(&staging);
            return Err(CookingEnglishError::io(&staging, e));
        }

        if let Err(e) = fs::rename(&staging, &target) {
            let _ = fs::remove_file(&staging);
            return Err(CookingEnglishError::io(&target, e));
        }

        tracing::info!(path = %target.display(), bytes = contents.len(), "wrote page");
        Ok(target)
    }
}
