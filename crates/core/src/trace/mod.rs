//! Memory trace operations.
//!
//! A trace is a sequence of `<op> <hexaddr>,<size>` lines. This module provides:
//! 1. **Operations:** The decoded `(kind, address, size)` form consumed by replay.
//! 2. **Parsing:** Line-level decoding with fail-fast error reporting.
//! 3. **Reading:** A streaming iterator over any buffered reader or file.

/// Single-line decoding.
pub mod parser;

/// Streaming trace reader.
pub mod reader;

use std::fmt;

pub use parser::parse_line;
pub use reader::TraceReader;

use crate::common::Addr;

/// Kind of a trace operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OpKind {
    /// Instruction fetch (`I`); not simulated.
    Instruction,
    /// Data load (`L`).
    Load,
    /// Data store (`S`).
    Store,
    /// Data modify (`M`): a load followed by a store to the same address.
    Modify,
}

impl OpKind {
    /// Maps a trace opcode letter to its kind.
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'I' => Some(Self::Instruction),
            'L' => Some(Self::Load),
            'S' => Some(Self::Store),
            'M' => Some(Self::Modify),
            _ => None,
        }
    }

    /// The trace opcode letter.
    pub const fn as_char(self) -> char {
        match self {
            Self::Instruction => 'I',
            Self::Load => 'L',
            Self::Store => 'S',
            Self::Modify => 'M',
        }
    }

    /// Number of cache accesses this kind issues.
    pub const fn access_count(self) -> usize {
        match self {
            Self::Instruction => 0,
            Self::Load | Self::Store => 1,
            Self::Modify => 2,
        }
    }
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// One decoded trace operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Operation {
    /// What the operation does.
    pub kind: OpKind,
    /// Byte address accessed.
    pub addr: Addr,
    /// Access width in bytes. Carried for reporting only; classification
    /// depends on the address alone.
    pub size: u32,
}

impl Operation {
    /// Creates an operation.
    pub const fn new(kind: OpKind, addr: u64, size: u32) -> Self {
        Self {
            kind,
            addr: Addr(addr),
            size,
        }
    }
}

impl fmt::Display for Operation {
    /// Formats in trace syntax, e.g. `M 7ff0,8`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {},{}", self.kind, self.addr, self.size)
    }
}
