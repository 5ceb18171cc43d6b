//! CSV output: one header row, then one row per record.

use std::io::{self, Write};

use log::debug;

use crate::Record;
use crate::config::LineTerminator;

/// Write `records` as CSV into `sink` using `headers` as the column order.
///
/// Cells for keys a record lacks are left empty. Quoting follows standard
/// CSV rules: only fields containing a comma, quote or line break are quoted.
/// With no headers the output is a single empty line.
///
/// Returns the number of data rows written.
pub fn write_csv<W: Write>(
    mut sink: W,
    headers: &[String],
    records: &[Record],
    terminator: LineTerminator,
) -> Result<usize, csv::Error> {
    if headers.is_empty() {
        // csv would write `""` for an empty record; an empty line is the
        // header row of a table with no columns.
        sink.write_all(terminator.as_str().as_bytes())?;
        sink.flush()?;
        return Ok(0);
    }

    let mut writer = csv::WriterBuilder::new()
        .terminator(terminator.to_csv())
        .from_writer(sink);

    writer.write_record(headers)?;
    for record in records {
        writer.write_record(headers.iter().map(|h| record.get_or_blank(h)))?;
    }
    writer.flush()?;

    debug!(
        "wrote {} row(s) across {} column(s)",
        records.len(),
        headers.len()
    );
    Ok(records.len())
}

/// Render `records` to a CSV string.
pub fn to_csv_string(
    headers: &[String],
    records: &[Record],
    terminator: LineTerminator,
) -> Result<String, csv::Error> {
    let mut buf = Vec::new();
    write_csv(&mut buf, headers, records, terminator)?;
    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
}
