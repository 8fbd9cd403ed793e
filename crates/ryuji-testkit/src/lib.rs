//! Test utilities for ryuji
//!
//! This crate provides shared testing utilities used across the ryuji workspace.

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Creates a temporary directory within `.tmp/` at the current directory
///
/// Keeps test files in one gitignored location that is easy to clean up
/// manually if a test aborts.
///
/// # Panics
///
/// Panics if the current directory cannot be determined or `.tmp/` cannot be
/// created.
///
/// # Examples
///
/// ```rust
/// use ryuji_testkit::temp_dir_in_workspace;
///
/// let temp = temp_dir_in_workspace();
/// let file_path = temp.path().join("test.txt");
/// std::fs::write(&file_path, "test data").unwrap();
/// // Cleanup happens automatically when temp is dropped
/// ```
pub fn temp_dir_in_workspace() -> TempDir {
    try_temp_dir_in_workspace().expect("Failed to create temporary directory in .tmp/")
}

/// Alternative with Result for non-test code
pub fn try_temp_dir_in_workspace() -> std::io::Result<TempDir> {
    let workspace_root = std::env::current_dir()?;
    let tmp_base = workspace_root.join(".tmp");
    std::fs::create_dir_all(&tmp_base)?;
    TempDir::new_in(&tmp_base)
}

/// On-disk template tree: `<root>/templates` and `<root>/components`
///
/// # Examples
///
/// ```rust
/// use ryuji_testkit::{temp_dir_in_workspace, SiteFixture};
///
/// let temp = temp_dir_in_workspace();
/// let site = SiteFixture::new(temp.path())
///     .template("index", "[[ component:nav ]]")
///     .component("nav", "<nav/>");
/// assert!(site.root().join("components/nav.html").exists());
/// ```
#[derive(Debug, Clone)]
pub struct SiteFixture {
    root: PathBuf,
    extension: String,
}

impl SiteFixture {
    /// Create the `templates/` and `components/` directories under `root`
    pub fn new(root: &Path) -> Self {
        Self::with_extension(root, ".html")
    }

    /// Like [`SiteFixture::new`] with a custom file extension
    pub fn with_extension(root: &Path, extension: &str) -> Self {
        std::fs::create_dir_all(root.join("templates")).expect("Failed to create templates/");
        std::fs::create_dir_all(root.join("components")).expect("Failed to create components/");
        Self {
            root: root.to_path_buf(),
            extension: extension.to_string(),
        }
    }

    /// Write `templates/<name><ext>`
    pub fn template(self, name: &str, text: &str) -> Self {
        self.write("templates", name, text)
    }

    /// Write `components/<name><ext>`
    pub fn component(self, name: &str, text: &str) -> Self {
        self.write("components", name, text)
    }

    /// Write an arbitrary file relative to the root
    pub fn file(self, relative: &str, text: &str) -> Self {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, text).expect("Failed to write fixture file");
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute templates root as a string, for `RenderConfig`
    pub fn templates_root(&self) -> String {
        self.root.join("templates").display().to_string()
    }

    /// Absolute components root as a string, for `RenderConfig`
    pub fn components_root(&self) -> String {
        self.root.join("components").display().to_string()
    }

    fn write(self, dir: &str, name: &str, text: &str) -> Self {
        let relative = format!("{}/{}{}", dir, name, self.extension);
        self.file(&relative, text)
    }
}
