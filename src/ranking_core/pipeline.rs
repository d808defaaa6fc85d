//! Batch orchestration: load, bucket, score, rank, persist

use chrono::{DateTime, Utc};

use crate::config::RankerConfig;

use super::bucket::AgeBuckets;
use super::error::RankingError;
use super::ranker;
use super::reader;
use super::scorer::CompositeScorer;
use super::writer;

/// One-shot ranking run over a single data snapshot.
pub struct RankingPipeline {
    config: RankerConfig,
}

impl RankingPipeline {
    pub fn new(config: RankerConfig) -> Self {
        Self { config }
    }

    /// Run the pipeline, stamping "now" once for the whole batch.
    pub fn run(&self) -> Result<usize, RankingError> {
        self.run_at(Utc::now())
    }

    /// Run the pipeline against an explicit reference time.
    ///
    /// Every age and recency computation in the run uses the same `now`,
    /// keeping a single run internally consistent and making reruns at a
    /// fixed time byte-identical.
    pub fn run_at(&self, now: DateTime<Utc>) -> Result<usize, RankingError> {
        let posts = reader::load_posts(&self.config.input_path)?;

        let buckets = AgeBuckets::new(self.config.age_bounds.clone());
        let scorer = CompositeScorer::new(self.config.weights, self.config.decay_hours);

        log::info!("Ranking {} posts across {} age tiers", posts.len(), buckets.bucket_count());
        let ranked = ranker::rank(posts, &buckets, &scorer, now);

        writer::write_posts(&self.config.output_path, &ranked)?;
        Ok(ranked.len())
    }
}
