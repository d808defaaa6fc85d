//! Fail-fast loader for the cleaned post collection

use std::fs;
use std::path::Path;

use super::error::RankingError;
use super::post::Post;

/// Load the full cleaned-post collection from a JSON array file.
///
/// Any IO or parse failure aborts the run. This is a one-shot batch job:
/// partial input is never ranked and no output is written on failure.
pub fn load_posts(path: &Path) -> Result<Vec<Post>, RankingError> {
    let json = fs::read_to_string(path)?;
    let posts: Vec<Post> = serde_json::from_str(&json)?;

    log::info!("Loaded {} posts from {}", posts.len(), path.display());
    Ok(posts)
}
