//! Integration tests for the end-to-end ranking pipeline
//!
//! Key points covered:
//! - Fixture file -> pipeline -> ranked output on disk
//! - Determinism: reruns at a fixed "now" are byte-identical
//! - Freshness dominance and within-tier ordering in the persisted order
//! - Transient annotations never reach the output file
//! - No output file is produced when the input is unreadable
//! - The clean -> rank stage chain

use std::fs;

use chrono::{DateTime, Duration, Utc};
use feedflow::cleaner;
use feedflow::config::RankerConfig;
use feedflow::ranking_core::{writer, RankingPipeline};

fn fixed_now() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2024-06-01T12:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

fn post_json(
    id: u64,
    likes: u64,
    comments: u64,
    published_at: Option<String>,
) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "status": "published",
        "name": format!("Post {}", id),
        "published_at": published_at,
        "created_at": null,
        "updated_at": null,
        "url": null,
        "body": "<p>hello</p>",
        "record_type": "trix",
        "space_id": 1,
        "space_name": "General",
        "community_id": 1,
        "user_id": id,
        "user_name": "Someone",
        "user_email": null,
        "likes_count": likes,
        "comments_count": comments
    })
}

fn hours_ago(now: DateTime<Utc>, hours: i64) -> Option<String> {
    Some((now - Duration::hours(hours)).to_rfc3339())
}

#[test]
fn test_pipeline_end_to_end_and_determinism() {
    let temp = tempfile::tempdir().unwrap();
    let input = temp.path().join("posts_clean.json");
    let output = temp.path().join("posts_scored.json");
    let now = fixed_now();

    // Tiers with default bounds: post 1 -> 5 (40 days), posts 2 and 3 -> 0,
    // post 4 -> 2 (6 days). Post 3 has no timestamp and falls back to "now".
    let posts = serde_json::json!([
        post_json(1, 500, 80, hours_ago(now, 24 * 40)),
        post_json(2, 3, 1, hours_ago(now, 2)),
        post_json(3, 0, 0, None),
        post_json(4, 9, 2, hours_ago(now, 24 * 6)),
    ]);
    fs::write(&input, serde_json::to_string_pretty(&posts).unwrap()).unwrap();

    let config = RankerConfig {
        input_path: input.clone(),
        output_path: output.clone(),
        ..RankerConfig::default()
    };
    let pipeline = RankingPipeline::new(config);

    let written = pipeline.run_at(now).unwrap();
    assert_eq!(written, 4, "output length must equal input length");

    let first = fs::read(&output).unwrap();
    let ranked: Vec<serde_json::Value> = serde_json::from_slice(&first).unwrap();

    // Post 1 has by far the most engagement but sits in the stalest occupied
    // tier, so it must come last. Within tier 0, post 2 wins both engagement
    // axes against post 3.
    let ids: Vec<u64> = ranked.iter().map(|p| p["id"].as_u64().unwrap()).collect();
    assert_eq!(ids, vec![2, 3, 4, 1]);

    for post in &ranked {
        let obj = post.as_object().unwrap();
        assert!(obj.contains_key("score"), "every ranked post carries a score");
        assert!(!obj.contains_key("age_days"), "age_days leaked into output");
        assert!(!obj.contains_key("age_bin"), "age_bin leaked into output");
        let id = obj["id"].as_u64().unwrap();
        assert_eq!(obj["name"], format!("Post {}", id), "passthrough fields must survive");
    }

    let written_again = pipeline.run_at(now).unwrap();
    assert_eq!(written_again, 4);
    let second = fs::read(&output).unwrap();
    assert_eq!(first, second, "reruns at a fixed now must be byte-identical");
}

#[test]
fn test_engagement_blend_scenario() {
    // A and B split the engagement axes and tie at 1.05 with A first by
    // insertion order; C sits mid-range on both counts but is 100h old, so
    // its normalized recency collapses to 0 and it lands at exactly 1.0.
    let temp = tempfile::tempdir().unwrap();
    let input = temp.path().join("posts_clean.json");
    let output = temp.path().join("posts_scored.json");
    let now = fixed_now();

    let posts = serde_json::json!([
        post_json(1, 10, 0, hours_ago(now, 0)),
        post_json(2, 0, 10, hours_ago(now, 0)),
        post_json(3, 5, 5, hours_ago(now, 100)),
    ]);
    fs::write(&input, serde_json::to_string_pretty(&posts).unwrap()).unwrap();

    let config = RankerConfig {
        input_path: input,
        output_path: output.clone(),
        // One wide tier so the blend alone decides the order.
        age_bounds: vec![30.0],
        ..RankerConfig::default()
    };

    RankingPipeline::new(config).run_at(now).unwrap();

    let ranked: Vec<serde_json::Value> =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();

    let ids: Vec<u64> = ranked.iter().map(|p| p["id"].as_u64().unwrap()).collect();
    assert_eq!(ids, vec![1, 2, 3]);

    assert_eq!(ranked[0]["score"].as_f64().unwrap(), 1.05);
    assert_eq!(ranked[1]["score"].as_f64().unwrap(), 1.05);
    assert_eq!(ranked[2]["score"].as_f64().unwrap(), 1.0);
}

#[test]
fn test_fatal_input_writes_no_output() {
    let temp = tempfile::tempdir().unwrap();
    let input = temp.path().join("broken.json");
    let output = temp.path().join("posts_scored.json");
    fs::write(&input, r#"[{"id": "#).unwrap();

    let config = RankerConfig {
        input_path: input,
        output_path: output.clone(),
        ..RankerConfig::default()
    };

    assert!(RankingPipeline::new(config).run_at(fixed_now()).is_err());
    assert!(!output.exists(), "no partial output may be written on failure");
}

#[test]
fn test_clean_then_rank_chain() {
    let temp = tempfile::tempdir().unwrap();
    let raw_path = temp.path().join("posts_raw.json");
    let clean_path = temp.path().join("posts_clean.json");
    let scored_path = temp.path().join("posts_scored.json");
    let now = fixed_now();

    let raw = serde_json::json!([
        {
            "id": 1,
            "name": "Nested body",
            "published_at": hours_ago(now, 3),
            "body": {"body": "<p>flatten me</p>", "record_type": "trix"},
            "likes_count": 4,
            "comments_count": 1,
            "cardinal_color": "ignored"
        },
        {
            "id": 2,
            "name": "Bare",
            "published_at": hours_ago(now, 4),
            "likes_count": 9,
            "comments_count": 5
        }
    ]);
    fs::write(&raw_path, serde_json::to_string_pretty(&raw).unwrap()).unwrap();

    let cleaned = cleaner::clean_posts(cleaner::load_raw_posts(&raw_path).unwrap());
    writer::write_posts(&clean_path, &cleaned).unwrap();

    let config = RankerConfig {
        input_path: clean_path,
        output_path: scored_path.clone(),
        ..RankerConfig::default()
    };
    RankingPipeline::new(config).run_at(now).unwrap();

    let ranked: Vec<serde_json::Value> =
        serde_json::from_str(&fs::read_to_string(&scored_path).unwrap()).unwrap();

    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0]["id"], 2, "higher engagement wins inside the shared tier");
    assert_eq!(ranked[1]["body"], "<p>flatten me</p>");
    assert!(ranked[0]["score"].is_f64());
}
