//! Cleaned community post record consumed and annotated by the ranking core

use serde::{Deserialize, Serialize};

/// A cleaned community post as persisted by the cleaning stage.
///
/// The identifier is required; everything else is optional passthrough the
/// ranking core never mutates. Missing engagement counts read as 0 through
/// the accessors. `score` is written by the scorer and only serialized once
/// set, so cleaned (pre-ranking) files carry no score key. `age_days` and
/// `age_bin` are pipeline-internal annotations and never serialized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub status: Option<String>,
    pub name: Option<String>,
    pub published_at: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,

    pub url: Option<String>,
    pub body: Option<String>,
    pub record_type: Option<String>,

    pub space_id: Option<u64>,
    pub space_name: Option<String>,
    pub community_id: Option<u64>,

    pub user_id: Option<u64>,
    pub user_name: Option<String>,
    pub user_email: Option<String>,

    pub likes_count: Option<u64>,
    pub comments_count: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,

    #[serde(skip)]
    pub age_days: f64,
    #[serde(skip)]
    pub age_bin: usize,
}

impl Post {
    /// Likes count, defaulting a missing value to 0.
    pub fn likes(&self) -> u64 {
        self.likes_count.unwrap_or(0)
    }

    /// Comments count, defaulting a missing value to 0.
    pub fn comments(&self) -> u64 {
        self.comments_count.unwrap_or(0)
    }
}
