// src/utils.rs
use crate::models::Item;
use std::io::{self, Write};

/// Message printed by `list` when the store holds no items.
pub const EMPTY_CHECKLIST: &str = "No tasks in the checklist.";

/// Parses a task id given on the command line.
///
/// Leading whitespace and a single `+` or `-` are accepted, followed by a run
/// of decimal digits. Anything after the digits is ignored, so `12abc` and
/// `1.5` name tasks 12 and 1. Input that does not start with a digit, or whose
/// digits overflow an `i64`, is rejected.
#[inline]
#[must_use]
pub fn parse_task_id(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let unsigned = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
    let digits = unsigned.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let sign = trimmed.len() - unsigned.len();
    trimmed.get(..sign + digits)?.parse().ok()
}

/// Writes one line per item, or the empty-checklist message.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
#[inline]
pub fn print_items(out: &mut dyn Write, items: &[Item]) -> io::Result<()> {
    if items.is_empty() {
        return writeln!(out, "{EMPTY_CHECKLIST}");
    }
    for item in items {
        writeln!(out, "{item}")?;
    }
    Ok(())
}
