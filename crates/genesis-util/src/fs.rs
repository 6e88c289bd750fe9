use std::path::{Path, PathBuf};

/// The nearest of `start` and its ancestors that holds the file `marker`
/// (a path relative to each candidate directory).
pub fn find_ancestor_with(start: &Path, marker: impl AsRef<Path>) -> Option<PathBuf> {
    let marker = marker.as_ref();
    start
        .ancestors()
        .find(|dir| dir.join(marker).is_file())
        .map(Path::to_path_buf)
}

/// `mkdir -p`, logged.
pub fn ensure_dir(path: &Path) -> std::io::Result<()> {
    if path.is_dir() {
        return Ok(());
    }
    tracing::debug!("creating directory {}", path.display());
    std::fs::create_dir_all(path)
}
