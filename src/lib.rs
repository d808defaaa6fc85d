//! feedflow - community feed ranking pipeline
//!
//! Ranks community posts for feed display by blending engagement signals
//! (likes, comments) with exponentially decayed recency, partitioned into
//! discrete age tiers so newer posts are never outranked by older,
//! more-popular ones. Batch-shaped: one run loads a cleaned post snapshot,
//! ranks it, and persists the ordered result for the rendering layer.

pub mod cleaner;
pub mod config;
pub mod ranking_core;
