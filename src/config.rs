//! Environment-driven configuration for the ranking pipeline

use std::env;
use std::path::PathBuf;

use crate::ranking_core::{ScoreWeights, DEFAULT_AGE_BOUNDS, DEFAULT_DECAY_HOURS};

pub const DEFAULT_INPUT_PATH: &str = "data/processed/posts_clean.json";
pub const DEFAULT_OUTPUT_PATH: &str = "data/processed/posts_scored.json";

#[derive(Debug)]
pub enum ConfigError {
    InvalidValue(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidValue(msg) => write!(f, "Invalid configuration value: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Tunable knobs of the ranking pipeline.
///
/// Everything has a default; the environment only needs to name what it
/// overrides. Weights and bucket bounds are plain values rather than
/// module-level state, so tests can run several configurations side by side.
#[derive(Debug, Clone)]
pub struct RankerConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub decay_hours: f64,
    pub weights: ScoreWeights,
    pub age_bounds: Vec<f64>,
}

impl Default for RankerConfig {
    fn default() -> Self {
        Self {
            input_path: DEFAULT_INPUT_PATH.into(),
            output_path: DEFAULT_OUTPUT_PATH.into(),
            decay_hours: DEFAULT_DECAY_HOURS,
            weights: ScoreWeights::default(),
            age_bounds: DEFAULT_AGE_BOUNDS.to_vec(),
        }
    }
}

impl RankerConfig {
    /// Load configuration from environment variables.
    ///
    /// Recognized variables: POSTS_INPUT_PATH, RANKED_OUTPUT_PATH,
    /// DECAY_HOURS, WEIGHT_LIKES, WEIGHT_COMMENTS, WEIGHT_RECENCY,
    /// AGE_BUCKET_DAYS (comma-separated ascending day bounds).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = ScoreWeights::default();

        let config = Self {
            input_path: env::var("POSTS_INPUT_PATH")
                .unwrap_or_else(|_| DEFAULT_INPUT_PATH.to_string())
                .into(),
            output_path: env::var("RANKED_OUTPUT_PATH")
                .unwrap_or_else(|_| DEFAULT_OUTPUT_PATH.to_string())
                .into(),
            decay_hours: parse_f64_var("DECAY_HOURS", DEFAULT_DECAY_HOURS)?,
            weights: ScoreWeights {
                likes: parse_f64_var("WEIGHT_LIKES", defaults.likes)?,
                comments: parse_f64_var("WEIGHT_COMMENTS", defaults.comments)?,
                recency: parse_f64_var("WEIGHT_RECENCY", defaults.recency)?,
            },
            age_bounds: match env::var("AGE_BUCKET_DAYS") {
                Ok(raw) => parse_age_bounds(&raw)?,
                Err(_) => DEFAULT_AGE_BOUNDS.to_vec(),
            },
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.decay_hours > 0.0) || !self.decay_hours.is_finite() {
            return Err(ConfigError::InvalidValue(format!(
                "DECAY_HOURS must be a positive number, got {}",
                self.decay_hours
            )));
        }

        for (name, value) in [
            ("WEIGHT_LIKES", self.weights.likes),
            ("WEIGHT_COMMENTS", self.weights.comments),
            ("WEIGHT_RECENCY", self.weights.recency),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::InvalidValue(format!(
                    "{} must be finite, got {}",
                    name, value
                )));
            }
        }

        if self.age_bounds.is_empty() {
            return Err(ConfigError::InvalidValue(
                "AGE_BUCKET_DAYS must list at least one bound".to_string(),
            ));
        }
        if self.age_bounds.iter().any(|b| !b.is_finite() || *b < 0.0) {
            return Err(ConfigError::InvalidValue(format!(
                "AGE_BUCKET_DAYS bounds must be non-negative numbers, got {:?}",
                self.age_bounds
            )));
        }
        for pair in self.age_bounds.windows(2) {
            if pair[0] >= pair[1] {
                return Err(ConfigError::InvalidValue(format!(
                    "AGE_BUCKET_DAYS must be strictly ascending, got {:?}",
                    self.age_bounds
                )));
            }
        }

        Ok(())
    }
}

fn parse_f64_var(name: &str, default: f64) -> Result<f64, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw.trim().parse::<f64>().map_err(|_| {
            ConfigError::InvalidValue(format!("{} must be a number, got {:?}", name, raw))
        }),
        Err(_) => Ok(default),
    }
}

fn parse_age_bounds(raw: &str) -> Result<Vec<f64>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<f64>().map_err(|_| {
                ConfigError::InvalidValue(format!(
                    "AGE_BUCKET_DAYS entries must be numbers, got {:?}",
                    s
                ))
            })
        })
        .collect()
}
