//! Simulation Error Tests.
//!
//! Verifies display text, source chaining, and the exit status each error
//! kind maps to.

use std::error::Error;
use std::io;

use csim_core::common::SimError;
use rstest::rstest;

fn io_error() -> io::Error {
    io::Error::new(io::ErrorKind::NotFound, "no such file")
}

#[rstest]
#[case(SimError::config("missing associativity (-E)"), 2)]
#[case(SimError::SourceUnavailable { path: "t.trace".into(), source: io_error() }, 1)]
#[case(SimError::Decode { line: 3, content: "Q 30,1".into(), reason: "unknown".into() }, 1)]
#[case(SimError::output(io_error()), 1)]
fn exit_codes_are_nonzero_and_distinguish_configuration(
    #[case] err: SimError,
    #[case] expected: i32,
) {
    assert_eq!(err.exit_code(), expected);
}

#[test]
fn configuration_display() {
    let err = SimError::config("associativity (-E) must be at least 1");
    assert_eq!(
        err.to_string(),
        "invalid cache configuration: associativity (-E) must be at least 1"
    );
    assert!(err.source().is_none());
}

#[test]
fn decode_display_names_line_and_content() {
    let err = SimError::Decode {
        line: 12,
        content: "X 10,1".into(),
        reason: "unknown operation".into(),
    };
    let text = err.to_string();
    assert!(text.contains("line 12"));
    assert!(text.contains("X 10,1"));
    assert!(text.contains("unknown operation"));
}

#[test]
fn io_kinds_chain_their_source() {
    let err = SimError::SourceUnavailable {
        path: "traces/missing.trace".into(),
        source: io_error(),
    };
    assert!(err.to_string().contains("traces/missing.trace"));
    assert_eq!(err.source().map(ToString::to_string).as_deref(), Some("no such file"));

    let err = SimError::output(io::Error::new(io::ErrorKind::StorageFull, "disk full"));
    assert_eq!(err.to_string(), "cannot write report");
    assert_eq!(err.source().map(ToString::to_string).as_deref(), Some("disk full"));
}
