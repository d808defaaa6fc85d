//! Discrete age tiers enforcing freshness dominance

/// Default age-bucket upper bounds, in days.
pub const DEFAULT_AGE_BOUNDS: [f64; 6] = [2.0, 5.0, 7.0, 15.0, 30.0, 90.0];

/// A total partition of post ages into discrete tiers.
///
/// Bounds are ascending upper edges in days; ages beyond the last bound land
/// in a catch-all tier, so every age maps to exactly one tier index.
#[derive(Debug, Clone)]
pub struct AgeBuckets {
    bounds: Vec<f64>,
}

impl AgeBuckets {
    /// Build a bucket set from ascending upper bounds (days).
    ///
    /// Bounds are validated by `RankerConfig`; this constructor trusts them.
    pub fn new(bounds: Vec<f64>) -> Self {
        Self { bounds }
    }

    /// Tier index for an age: the first bound the age does not exceed.
    ///
    /// A post exactly at a bound belongs to that bound's tier (inclusive
    /// upper edge). Ages past every bound get the catch-all index.
    pub fn index_for(&self, age_days: f64) -> usize {
        self.bounds
            .iter()
            .position(|&upper| age_days <= upper)
            .unwrap_or(self.bounds.len())
    }

    /// Number of tiers, including the catch-all.
    pub fn bucket_count(&self) -> usize {
        self.bounds.len() + 1
    }

    pub fn bounds(&self) -> &[f64] {
        &self.bounds
    }
}

impl Default for AgeBuckets {
    fn default() -> Self {
        Self::new(DEFAULT_AGE_BOUNDS.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_is_inclusive() {
        let buckets = AgeBuckets::default();

        assert_eq!(buckets.index_for(2.0), 0, "age exactly at a bound stays in that bucket");
        assert_eq!(buckets.index_for(2.0001), 1);
        assert_eq!(buckets.index_for(90.0), 5);
    }

    #[test]
    fn test_catch_all_bucket() {
        let buckets = AgeBuckets::default();

        assert_eq!(buckets.index_for(90.0001), 6);
        assert_eq!(buckets.index_for(500.0), 6);
        assert_eq!(buckets.bucket_count(), 7);
    }

    #[test]
    fn test_every_age_gets_a_bucket() {
        let buckets = AgeBuckets::default();

        for age in [0.0, 0.5, 2.0, 3.0, 6.9, 14.0, 29.0, 89.9, 1000.0] {
            let idx = buckets.index_for(age);
            assert!(idx < buckets.bucket_count(), "age {} unassigned", age);
        }
    }

    #[test]
    fn test_custom_bounds() {
        let buckets = AgeBuckets::new(vec![1.0, 7.0]);

        assert_eq!(buckets.index_for(0.9), 0);
        assert_eq!(buckets.index_for(5.0), 1);
        assert_eq!(buckets.index_for(8.0), 2);
        assert_eq!(buckets.bucket_count(), 3);
    }
}
