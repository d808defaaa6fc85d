//! Rank Feed Binary - Freshness-Tiered Feed Ranking
//!
//! Loads the cleaned post collection, scores and orders it, and persists the
//! ranked feed for the rendering layer.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --release --bin rank_feed
//! ```
//!
//! ## Environment Variables
//!
//! - POSTS_INPUT_PATH - Cleaned posts JSON array (default: data/processed/posts_clean.json)
//! - RANKED_OUTPUT_PATH - Ranked output path (default: data/processed/posts_scored.json)
//! - DECAY_HOURS - Recency decay constant in hours (default: 12)
//! - WEIGHT_LIKES - Likes weight (default: 1.0)
//! - WEIGHT_COMMENTS - Comments weight (default: 1.0)
//! - WEIGHT_RECENCY - Recency weight (default: 0.05)
//! - AGE_BUCKET_DAYS - Comma-separated ascending age bounds in days (default: 2,5,7,15,30,90)
//! - RUST_LOG - Logging level (optional, default: info)

use feedflow::config::RankerConfig;
use feedflow::ranking_core::RankingPipeline;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    dotenv::dotenv().ok();

    let config = RankerConfig::from_env()?;

    log::info!("🚀 Starting feed ranking run");
    log::info!("   Input: {}", config.input_path.display());
    log::info!("   Output: {}", config.output_path.display());
    log::info!("   Decay: {}h", config.decay_hours);
    log::info!(
        "   Weights: likes={} comments={} recency={}",
        config.weights.likes,
        config.weights.comments,
        config.weights.recency
    );
    log::info!("   Age buckets (days): {:?}", config.age_bounds);

    let pipeline = RankingPipeline::new(config);
    let written = pipeline.run()?;

    log::info!("✅ Ranked and persisted {} posts", written);
    Ok(())
}
