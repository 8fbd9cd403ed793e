//! Path segment utilities for locating template sources
//!
//! Template and component sources are addressed by plain strings
//! (`<root>/<name><extension>`) rather than `std::path::PathBuf`, so the same
//! addressing works for the filesystem loader and for in-memory loaders.
//!
//! ```rust
//! use ryuji_core::path::{concat_path, source_file_name};
//!
//! let file = source_file_name("header", ".html");
//! assert_eq!(concat_path("components/", &file), "components/header.html");
//! ```

/// Join two path segments with exactly one `/` between them
///
/// Trailing slashes of `base` and leading slashes of `rest` are collapsed,
/// so every combination yields a single separator.
///
/// # Examples
///
/// ```rust
/// use ryuji_core::path::concat_path;
///
/// assert_eq!(concat_path("templates", "index.html"), "templates/index.html");
/// assert_eq!(concat_path("templates/", "/index.html"), "templates/index.html");
/// assert_eq!(concat_path("/", "index.html"), "/index.html");
/// ```
pub fn concat_path(base: &str, rest: &str) -> String {
    let base = base.trim_end_matches('/');
    let rest = rest.trim_start_matches('/');
    format!("{}/{}", base, rest)
}

/// File name for a logical template name: `name` followed by `extension`
pub fn source_file_name(name: &str, extension: &str) -> String {
    format!("{}{}", name, extension)
}
