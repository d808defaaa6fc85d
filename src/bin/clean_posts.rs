//! Clean Posts Binary - Raw Record Flattening
//!
//! Flattens raw community API records into the cleaned shape the ranking
//! pipeline consumes: nested rich-text bodies are lifted to flat fields and
//! only the fields downstream stages use are kept.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --release --bin clean_posts
//! ```
//!
//! ## Environment Variables
//!
//! - RAW_POSTS_PATH - Raw post records JSON array (default: data/raw/posts_raw.json)
//! - CLEAN_POSTS_PATH - Cleaned output path (default: data/processed/posts_clean.json)
//! - RUST_LOG - Logging level (optional, default: info)

use std::path::PathBuf;

use feedflow::cleaner;
use feedflow::ranking_core::writer;

#[derive(Debug)]
struct CleanerConfig {
    raw_path: PathBuf,
    clean_path: PathBuf,
}

impl CleanerConfig {
    fn from_env() -> Self {
        Self {
            raw_path: std::env::var("RAW_POSTS_PATH")
                .unwrap_or_else(|_| "data/raw/posts_raw.json".to_string())
                .into(),
            clean_path: std::env::var("CLEAN_POSTS_PATH")
                .unwrap_or_else(|_| "data/processed/posts_clean.json".to_string())
                .into(),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    dotenv::dotenv().ok();

    let config = CleanerConfig::from_env();

    log::info!("🧹 Cleaning raw post records");
    log::info!("   Input: {}", config.raw_path.display());
    log::info!("   Output: {}", config.clean_path.display());

    let raw = cleaner::load_raw_posts(&config.raw_path)?;
    let cleaned = cleaner::clean_posts(raw);
    writer::write_posts(&config.clean_path, &cleaned)?;

    log::info!("✅ Cleaned {} posts", cleaned.len());
    Ok(())
}
