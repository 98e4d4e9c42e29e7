//! Trace line decoding.
//!
//! Grammar, one operation per line:
//!
//! ```text
//! line := ws* op ws+ hexaddr "," size ws*
//! op   := "I" | "L" | "S" | "M"
//! ```
//!
//! Data operations are conventionally indented by one space and instruction
//! fetches are not; both forms are accepted. The address may carry a `0x`
//! prefix. Blank lines carry no operation.

use super::{OpKind, Operation};
use crate::common::{Result, SimError};

/// Decodes one trace line.
///
/// # Arguments
///
/// * `line_no` - 1-based line number, used in error reports.
/// * `line` - Raw line text without its terminator.
///
/// # Returns
///
/// `Ok(None)` for a blank line, `Ok(Some(op))` for a well-formed operation.
///
/// # Errors
///
/// Returns [`SimError::Decode`] if the line does not match the grammar.
pub fn parse_line(line_no: usize, line: &str) -> Result<Option<Operation>> {
    let text = line.trim();
    if text.is_empty() {
        return Ok(None);
    }
    let fail = |reason: &str| SimError::Decode {
        line: line_no,
        content: text.to_owned(),
        reason: reason.to_owned(),
    };

    let mut chars = text.chars();
    let kind = chars
        .next()
        .and_then(OpKind::from_char)
        .ok_or_else(|| fail("unknown operation, expected one of I, L, S, M"))?;

    let rest = chars.as_str();
    let operand = rest.trim_start();
    if operand.len() == rest.len() {
        return Err(fail("expected whitespace after operation"));
    }

    let (addr_text, size_text) = operand
        .split_once(',')
        .ok_or_else(|| fail("expected <address>,<size>"))?;

    let addr_text = addr_text.trim_end();
    let addr_digits = addr_text
        .strip_prefix("0x")
        .or_else(|| addr_text.strip_prefix("0X"))
        .unwrap_or(addr_text);
    if addr_digits.is_empty() {
        return Err(fail("missing address"));
    }
    if !addr_digits.bytes().all(|c| c.is_ascii_hexdigit()) {
        return Err(fail("address is not a 64-bit hexadecimal number"));
    }
    let addr = u64::from_str_radix(addr_digits, 16)
        .map_err(|_| fail("address is not a 64-bit hexadecimal number"))?;

    let size_text = size_text.trim();
    if size_text.is_empty() || !size_text.bytes().all(|c| c.is_ascii_digit()) {
        return Err(fail("size is not a decimal integer"));
    }
    let size = size_text
        .parse::<u32>()
        .map_err(|_| fail("size is not a decimal integer"))?;

    Ok(Some(Operation::new(kind, addr, size)))
}
