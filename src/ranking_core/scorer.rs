//! Composite engagement + recency scoring within an age tier

use chrono::{DateTime, Utc};

use super::normalize::min_max;
use super::post::Post;
use super::recency::{raw_recency, DEFAULT_DECAY_HOURS};

/// Weights for the three scoring signals.
///
/// Weights need not sum to 1; the composite score is a relative ranking key,
/// not a probability. The recency default is small: tier partitioning
/// already guarantees fresher tiers come first, and within a tier the
/// recency term acts as a tie-break nudge.
#[derive(Debug, Clone, Copy)]
pub struct ScoreWeights {
    pub likes: f64,
    pub comments: f64,
    pub recency: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            likes: 1.0,
            comments: 1.0,
            recency: 0.05,
        }
    }
}

/// Scores posts one age tier at a time.
pub struct CompositeScorer {
    weights: ScoreWeights,
    decay_hours: f64,
}

impl CompositeScorer {
    pub fn new(weights: ScoreWeights, decay_hours: f64) -> Self {
        Self {
            weights,
            decay_hours,
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(ScoreWeights::default(), DEFAULT_DECAY_HOURS)
    }

    /// Compute and write back composite scores for one tier.
    ///
    /// Normalization is tier-local: each metric series is min-max scaled
    /// against this tier's own distribution. Recency is decayed first, then
    /// normalized like the count metrics. Scores are rounded to 6 decimal
    /// digits, the persisted precision.
    pub fn score_tier(&self, posts: &mut [Post], now: DateTime<Utc>) {
        if posts.is_empty() {
            return;
        }

        let likes: Vec<f64> = posts.iter().map(|p| p.likes() as f64).collect();
        let comments: Vec<f64> = posts.iter().map(|p| p.comments() as f64).collect();
        let recency: Vec<f64> = posts
            .iter()
            .map(|p| raw_recency(p.published_at.as_deref(), now, self.decay_hours))
            .collect();

        let likes_norm = min_max(&likes);
        let comments_norm = min_max(&comments);
        let recency_norm = min_max(&recency);

        for (i, post) in posts.iter_mut().enumerate() {
            let score = self.weights.likes * likes_norm[i]
                + self.weights.comments * comments_norm[i]
                + self.weights.recency * recency_norm[i];
            post.score = Some(round6(score));
        }
    }
}

/// Round to 6 decimal digits.
fn round6(value: f64) -> f64 {
    (value * 1_000_000.0).round() / 1_000_000.0
}
