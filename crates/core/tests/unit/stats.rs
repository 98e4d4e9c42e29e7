//! Statistics Aggregator Tests.

use csim_core::cache::AccessResult;
use csim_core::stats::CacheStats;

#[test]
fn starts_at_zero() {
    let stats = CacheStats::new();
    assert_eq!(stats.snapshot(), (0, 0, 0));
    assert_eq!(stats.accesses(), 0);
    assert!(stats.hit_rate().abs() < f64::EPSILON);
}

#[test]
fn eviction_counts_as_miss_too() {
    let mut stats = CacheStats::new();
    stats.record(AccessResult::MissEviction);
    assert_eq!(stats.snapshot(), (0, 1, 1));
}

#[test]
fn record_matches_individual_counters() {
    let mut a = CacheStats::new();
    let mut b = CacheStats::new();
    for r in [
        AccessResult::Hit,
        AccessResult::MissCold,
        AccessResult::Hit,
        AccessResult::MissEviction,
    ] {
        a.record(r);
    }
    b.record_hit();
    b.record_hit();
    b.record_miss();
    b.record_miss();
    b.record_eviction();
    assert_eq!(a, b);
    assert!((a.hit_rate() - 0.5).abs() < f64::EPSILON);
}

#[test]
fn summary_line_format() {
    let mut stats = CacheStats::new();
    stats.record(AccessResult::Hit);
    stats.record(AccessResult::Hit);
    stats.record(AccessResult::MissCold);
    assert_eq!(stats.to_string(), "hits:2 misses:1 evictions:0");
}
