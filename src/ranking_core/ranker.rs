//! Tier grouping and final feed ordering

use chrono::{DateTime, Utc};

use super::bucket::AgeBuckets;
use super::post::Post;
use super::recency::age_days;
use super::scorer::CompositeScorer;

/// Annotate each post with its elapsed age and tier index.
pub fn annotate(posts: &mut [Post], buckets: &AgeBuckets, now: DateTime<Utc>) {
    for post in posts.iter_mut() {
        let age = age_days(post.published_at.as_deref(), now);
        post.age_days = age;
        post.age_bin = buckets.index_for(age);
    }
}

/// Produce the final feed order.
///
/// Posts are grouped by tier index (insertion order preserved), each tier is
/// scored against its own value distribution and stable-sorted descending by
/// score, and tiers are concatenated in ascending index order. Any post in a
/// fresher tier precedes every post in a staler tier regardless of score.
/// Empty tiers contribute nothing. Output length equals input length.
pub fn rank(
    mut posts: Vec<Post>,
    buckets: &AgeBuckets,
    scorer: &CompositeScorer,
    now: DateTime<Utc>,
) -> Vec<Post> {
    annotate(&mut posts, buckets, now);

    let total = posts.len();
    let mut tiers: Vec<Vec<Post>> = (0..buckets.bucket_count()).map(|_| Vec::new()).collect();
    for post in posts {
        let bin = post.age_bin;
        tiers[bin].push(post);
    }

    let mut ordered = Vec::with_capacity(total);
    for mut tier in tiers {
        if tier.is_empty() {
            continue;
        }

        scorer.score_tier(&mut tier, now);

        // sort_by is stable: equal scores keep their original relative order
        tier.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        ordered.extend(tier);
    }

    ordered
}
