//! Persists the ranked feed as a pretty-printed JSON array

use std::fs;
use std::path::Path;

use super::error::RankingError;
use super::post::Post;

/// Write the post collection to `path`.
///
/// The array is fully serialized before the file is touched, so a
/// serialization failure never leaves partial output behind. Parent
/// directories are created as needed.
pub fn write_posts(path: &Path, posts: &[Post]) -> Result<(), RankingError> {
    let json = serde_json::to_string_pretty(posts)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, json)?;

    log::info!("Wrote {} posts to {}", posts.len(), path.display());
    Ok(())
}
