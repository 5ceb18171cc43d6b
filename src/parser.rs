//! Block parser: splits input on `@@` markers and reads `key: value` lines.
//!
//! Input format:
//! ```text
//! @@
//! name: Alice
//! age: 30
//! @@
//! name: Bob
//! city: Paris
//! ```
//!
//! Line rules, checked in this order after trimming whitespace:
//! - blank lines are skipped
//! - a line containing `@@` closes the current block if it has any fields
//! - a line containing `:` is split on the first colon into key and value
//! - anything else is ignored
//!
//! A block with no fields never becomes a record, so runs of markers are
//! harmless. The last block does not need a closing marker. Lines may end in
//! `\n`, `\r\n` or a lone `\r`.

use log::{debug, trace};

use crate::Record;

/// Substring that separates blocks.
pub const MARKER: &str = "@@";

/// Separator between a field's key and its value.
pub const SEPARATOR: char = ':';

/// Classification of one trimmed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line<'a> {
    Blank,
    Marker,
    Field { key: &'a str, value: &'a str },
    Ignored,
}

/// Classify a single line. Marker detection wins over the colon split.
pub fn classify_line(line: &str) -> Line<'_> {
    let line = line.trim();
    if line.is_empty() {
        Line::Blank
    } else if line.contains(MARKER) {
        Line::Marker
    } else if let Some((key, value)) = line.split_once(SEPARATOR) {
        Line::Field {
            key: key.trim(),
            value: value.trim(),
        }
    } else {
        Line::Ignored
    }
}

/// Parse a sequence of lines into records, in input order.
pub fn parse_lines<'a, I>(lines: I) -> Vec<Record>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut records = Vec::new();
    let mut current = Record::new();

    for (index, line) in lines.into_iter().enumerate() {
        match classify_line(line) {
            Line::Blank => {}
            Line::Marker => {
                if current.is_empty() {
                    trace!("line {}: marker with no open fields, absorbed", index + 1);
                } else {
                    records.push(std::mem::take(&mut current));
                }
            }
            Line::Field { key, value } => current.set(key, value),
            Line::Ignored => {
                trace!("line {}: no marker or separator, ignored", index + 1);
            }
        }
    }

    if !current.is_empty() {
        records.push(current);
    }

    debug!("parsed {} record(s)", records.len());
    records
}

/// Split text into lines ending in `\n`, `\r\n` or a lone `\r`.
///
/// Like `str::lines`, a final terminator does not produce an empty line.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.find(['\r', '\n']) {
            Some(end) => {
                let line = &rest[..end];
                let width = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[end + width..];
                Some(line)
            }
            None => Some(std::mem::take(&mut rest)),
        }
    })
}

/// Parse a whole input text. Accepts `\n`, `\r\n` and lone `\r` line endings.
pub fn parse_records(text: &str) -> Vec<Record> {
    parse_lines(split_lines(text))
}
