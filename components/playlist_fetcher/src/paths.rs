// components/playlist_fetcher/src/paths.rs
use crate::types::FetchError;
use std::path::{Component, Path, PathBuf};

/// Expand a leading `~` and make the path absolute.
///
/// `~user` forms are not supported and are treated as ordinary relative paths.
pub fn resolve_output_directory(path: &Path) -> Result<PathBuf, FetchError> {
    let mut components = path.components();
    let expanded = match components.next() {
        Some(Component::Normal(first)) if first == "~" => {
            let home = dirs::home_dir().ok_or(FetchError::HomeDirectoryUnavailable)?;
            home.join(components.as_path())
        }
        _ => path.to_path_buf(),
    };

    if expanded.is_absolute() {
        return Ok(expanded);
    }

    let cwd = std::env::current_dir().map_err(FetchError::CurrentDirectory)?;
    Ok(cwd.join(expanded))
}

/// Create `path` and any missing parents. Existing directories are left alone.
pub async fn ensure_output_directory(path: &Path) -> Result<(), FetchError> {
    tokio::fs::create_dir_all(path)
        .await
        .map_err(|source| FetchError::CreateDirectory {
            path: path.to_path_buf(),
            source,
        })
}
