//! Trace Replay Tests.
//!
//! Whole-run scenarios: operation-kind dispatch, the classic worked example,
//! direct-mapped thrashing, verbose outcomes, and fail-fast error handling.

use std::io::{Cursor, Write};

use csim_core::cache::AccessResult::{Hit, MissCold, MissEviction};
use csim_core::common::{Addr, SimError};
use csim_core::config::CacheGeometry;
use csim_core::sim::{Outcome, TraceReplay, replay, simulate_file};
use csim_core::trace::{OpKind, Operation, TraceReader};
use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;

fn ops(list: &[(OpKind, u64)]) -> impl Iterator<Item = csim_core::Result<Operation>> + '_ {
    list.iter().map(|&(kind, addr)| Ok(Operation::new(kind, addr, 1)))
}

fn trace_file(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

// ══════════════════════════════════════════════════════════
// 1. Operation dispatch
// ══════════════════════════════════════════════════════════

#[test]
fn empty_sequence_yields_zero_counts() {
    for geometry in [
        CacheGeometry::new(0, 1, 0),
        CacheGeometry::new(4, 2, 4),
        CacheGeometry::new(8, 16, 6),
    ] {
        let stats = replay(geometry, ops(&[])).unwrap();
        assert_eq!(stats.snapshot(), (0, 0, 0));
    }
}

#[test]
fn instruction_touches_nothing() {
    let mut run = TraceReplay::new(CacheGeometry::new(1, 1, 2)).unwrap();
    let outcome = run.apply(&Operation::new(OpKind::Instruction, 0x40, 4));

    assert_eq!(outcome, Outcome::Ignored);
    assert_eq!(run.model().clock(), 0);
    assert_eq!(run.stats().snapshot(), (0, 0, 0));
    assert!(!run.model().contains(Addr(0x40)));
}

#[test]
fn load_and_store_issue_one_access() {
    let mut run = TraceReplay::new(CacheGeometry::new(0, 1, 4)).unwrap();
    assert_eq!(
        run.apply(&Operation::new(OpKind::Load, 0x10, 1)),
        Outcome::Single(MissCold)
    );
    assert_eq!(
        run.apply(&Operation::new(OpKind::Store, 0x18, 1)),
        Outcome::Single(Hit)
    );
    assert_eq!(run.model().clock(), 2);
}

#[test]
fn modify_second_half_always_hits() {
    let mut run = TraceReplay::new(CacheGeometry::new(0, 1, 0)).unwrap();
    assert_eq!(
        run.apply(&Operation::new(OpKind::Modify, 0x1, 1)),
        Outcome::Modify {
            read: MissCold,
            write: Hit
        }
    );
    assert_eq!(
        run.apply(&Operation::new(OpKind::Modify, 0x2, 1)),
        Outcome::Modify {
            read: MissEviction,
            write: Hit
        }
    );
    assert_eq!(run.finish().snapshot(), (2, 2, 1));
}

// ══════════════════════════════════════════════════════════
// 2. Scenarios
// ══════════════════════════════════════════════════════════

/// s=0, E=1, b=3: `M 0,1` then `L 4,1` land in the same 8-byte block.
#[test]
fn worked_example_same_block() {
    let stats = replay(
        CacheGeometry::new(0, 1, 3),
        ops(&[(OpKind::Modify, 0), (OpKind::Load, 4)]),
    )
    .unwrap();
    assert_eq!(stats.snapshot(), (2, 1, 0));
}

#[test]
fn pure_reuse_misses_once() {
    for k in 1..=20u64 {
        let list: Vec<_> = (0..k).map(|_| (OpKind::Load, 0xbeef)).collect();
        let stats = replay(CacheGeometry::new(2, 2, 3), ops(&list)).unwrap();
        assert_eq!(stats.snapshot(), (k - 1, 1, 0), "k={k}");
    }
}

/// E=1 with two tags in one set: every access misses, all but the first evict.
#[test]
fn direct_mapped_thrashing() {
    let geometry = CacheGeometry::new(2, 1, 4);
    let span = 1u64 << (2 + 4);
    for n in 1..=12u64 {
        let list: Vec<_> = (0..n)
            .map(|i| (OpKind::Load, if i % 2 == 0 { 0x100 } else { 0x100 + span }))
            .collect();
        let stats = replay(geometry, ops(&list)).unwrap();
        assert_eq!(stats.snapshot(), (0, n, n - 1), "n={n}");
    }
}

#[test]
fn lru_scenario_through_replay() {
    let mut outcomes = Vec::new();
    let mut run = TraceReplay::new(CacheGeometry::new(0, 2, 0)).unwrap();
    run.run_with(
        ops(&[
            (OpKind::Load, 0xa),
            (OpKind::Load, 0xb),
            (OpKind::Load, 0xa),
            (OpKind::Load, 0xc),
            (OpKind::Load, 0xa),
            (OpKind::Load, 0xb),
        ]),
        |_, outcome| outcomes.push(*outcome),
    )
    .unwrap();

    assert_eq!(
        outcomes,
        vec![
            Outcome::Single(MissCold),
            Outcome::Single(MissCold),
            Outcome::Single(Hit),
            Outcome::Single(MissEviction),
            Outcome::Single(Hit),
            Outcome::Single(MissEviction),
        ]
    );
}

// ══════════════════════════════════════════════════════════
// 3. Verbose output and files
// ══════════════════════════════════════════════════════════

#[test]
fn verbose_lines_match_reference_format() {
    let trace = " L 10,1\n M 20,1\n L 22,1\n S 18,1\n L 110,1\n L 210,1\n M 12,1\n";
    let mut lines = Vec::new();
    let mut run = TraceReplay::new(CacheGeometry::new(4, 1, 4)).unwrap();
    run.run_with(TraceReader::new(Cursor::new(trace)), |op, outcome| {
        lines.push(format!("{op} {outcome}"));
    })
    .unwrap();

    assert_eq!(
        lines,
        vec![
            "L 10,1 miss",
            "M 20,1 miss hit",
            "L 22,1 hit",
            "S 18,1 hit",
            "L 110,1 miss eviction",
            "L 210,1 miss eviction",
            "M 12,1 miss eviction hit",
        ]
    );
    assert_eq!(run.finish().snapshot(), (4, 5, 3));
}

#[test]
fn simulate_file_end_to_end() {
    let file = trace_file("I 0400d7d4,8\n M 0421c7f0,4\n L 04f6b868,8\n S 7ff0005c8,8\n");
    let mut seen = 0;
    let stats =
        simulate_file(file.path(), CacheGeometry::new(1, 1, 1), |_, _| seen += 1).unwrap();
    assert_eq!(seen, 4);
    assert_eq!(stats.accesses(), 4);
}

#[test]
fn simulate_file_fails_fast_on_bad_line() {
    let file = trace_file(" L 10,1\n L 20,1\n Q 30,1\n L 40,1\n");
    let err = simulate_file(file.path(), CacheGeometry::new(1, 1, 1), |_, _| {}).unwrap_err();
    assert!(matches!(err, SimError::Decode { line: 3, .. }));
}

#[test]
fn simulate_file_missing_source() {
    let err = simulate_file(
        "/nonexistent/trace/file.trace",
        CacheGeometry::new(1, 1, 1),
        |_, _| {},
    )
    .unwrap_err();
    assert!(matches!(err, SimError::SourceUnavailable { .. }));
}

#[test]
fn invalid_geometry_reported_before_source() {
    let err = simulate_file(
        "/nonexistent/trace/file.trace",
        CacheGeometry::new(1, 0, 1),
        |_, _| {},
    )
    .unwrap_err();
    assert!(matches!(err, SimError::Configuration { .. }));
}
