//! Where the merged document goes.
//!
//! Output lands next to the inputs when they all share a directory and in
//! `~/Downloads` otherwise. The file name is always `merged.pdf`; a
//! previous result with that name is overwritten.

use std::path::{Path, PathBuf};

/// File name of every merge result.
pub const OUTPUT_FILE_NAME: &str = "merged.pdf";

/// Directory under the home directory used when inputs are scattered.
pub const FALLBACK_DIR_NAME: &str = "Downloads";

/// Resolve the destination for merging `paths`.
///
/// - No paths: `<home>/Downloads/merged.pdf`
/// - All paths in one directory: `<that directory>/merged.pdf`
/// - Paths spread over several directories: `<home>/Downloads/merged.pdf`
///
/// Directories are compared component-wise, so `/a/` and `/a` are the same
/// directory. A bare file name lives in `.`. No filesystem access happens.
pub fn resolve_output_path<P: AsRef<Path>>(paths: &[P], home: &Path) -> PathBuf {
    let Some((first, rest)) = paths.split_first() else {
        return fallback_path(home);
    };

    let candidate = parent_dir(first.as_ref());
    if rest.iter().all(|path| parent_dir(path.as_ref()) == candidate) {
        candidate.join(OUTPUT_FILE_NAME)
    } else {
        fallback_path(home)
    }
}

fn fallback_path(home: &Path) -> PathBuf {
    home.join(FALLBACK_DIR_NAME).join(OUTPUT_FILE_NAME)
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        Some(_) => Path::new("."),
        None => path,
    }
}

/// [`resolve_output_path`] bound to a home directory.
#[derive(Debug, Clone)]
pub struct OutputPathResolver {
    home: PathBuf,
}

impl OutputPathResolver {
    /// Create a resolver that falls back to `<home>/Downloads`.
    pub fn new(home: impl Into<PathBuf>) -> Self {
        Self { home: home.into() }
    }

    /// Create a resolver for the current user's home directory.
    ///
    /// Uses `.` when the home directory cannot be determined.
    pub fn from_env() -> Self {
        Self::new(dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
    }

    /// The home directory this resolver falls back under.
    pub fn home(&self) -> &Path {
        &self.home
    }

    /// Resolve the destination for merging `paths`.
    pub fn resolve<P: AsRef<Path>>(&self, paths: &[P]) -> PathBuf {
        resolve_output_path(paths, &self.home)
    }
}

impl Default for OutputPathResolver {
    fn default() -> Self {
        Self::from_env()
    }
}
