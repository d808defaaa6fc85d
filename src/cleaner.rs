//! Flattening of raw community API records into the cleaned post shape

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::ranking_core::{Post, RankingError};

/// Nested rich-text body as delivered by the community API.
#[derive(Debug, Deserialize)]
pub struct RawBody {
    pub body: Option<String>,
    pub record_type: Option<String>,
}

/// A raw post record as fetched from the community API.
///
/// Only the fields the cleaned shape carries are modeled; everything else in
/// the raw payload is ignored on deserialization.
#[derive(Debug, Deserialize)]
pub struct RawPost {
    pub id: u64,
    pub status: Option<String>,
    pub name: Option<String>,
    pub published_at: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,

    pub url: Option<String>,
    pub body: Option<RawBody>,

    pub space_id: Option<u64>,
    pub space_name: Option<String>,
    pub community_id: Option<u64>,

    pub user_id: Option<u64>,
    pub user_name: Option<String>,
    pub user_email: Option<String>,

    pub likes_count: Option<u64>,
    pub comments_count: Option<u64>,
}

/// Load raw records from a JSON array file. Fail-fast, like the ranking load.
pub fn load_raw_posts(path: &Path) -> Result<Vec<RawPost>, RankingError> {
    let json = fs::read_to_string(path)?;
    let raw: Vec<RawPost> = serde_json::from_str(&json)?;

    log::info!("Loaded {} raw posts from {}", raw.len(), path.display());
    Ok(raw)
}

/// Flatten one raw record into the cleaned post shape.
pub fn clean_post(raw: RawPost) -> Post {
    let (body, record_type) = match raw.body {
        Some(b) => (b.body, b.record_type),
        None => (None, None),
    };

    Post {
        id: raw.id,
        status: raw.status,
        name: raw.name,
        published_at: raw.published_at,
        created_at: raw.created_at,
        updated_at: raw.updated_at,
        url: raw.url,
        body,
        record_type,
        space_id: raw.space_id,
        space_name: raw.space_name,
        community_id: raw.community_id,
        user_id: raw.user_id,
        user_name: raw.user_name,
        user_email: raw.user_email,
        likes_count: raw.likes_count,
        comments_count: raw.comments_count,
        score: None,
        age_days: 0.0,
        age_bin: 0,
    }
}

/// Flatten a whole collection, preserving order.
pub fn clean_posts(raw: Vec<RawPost>) -> Vec<Post> {
    raw.into_iter().map(clean_post).collect()
}
