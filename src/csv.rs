// src/csv.rs
use std::io::{Read, Write};

use ::csv::{ReaderBuilder, StringRecord, Terminator, WriterBuilder};

use crate::error::Result;

/* ---------------- Writing ---------------- */

/// Write a header line followed by every record, `\n`-terminated.
/// Fields are quoted only when they contain a comma, quote or line break.
pub fn write_table<W, R, F>(w: W, headers: &[&str], rows: R) -> Result<()>
where
    W: Write,
    R: IntoIterator,
    R::Item: IntoIterator<Item = F>,
    F: AsRef<[u8]>,
{
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(w);

    writer.write_record(headers)?;
    for row in rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}

/* ---------------- Parsing ---------------- */

/// Read a headed CSV table. Returns the header record and the data records.
pub fn read_table<R: Read>(r: R) -> Result<(StringRecord, Vec<StringRecord>)> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(r);
    let headers = reader.headers()?.clone();
    let rows = reader.records().collect::<std::result::Result<Vec<_>, _>>()?;
    Ok((headers, rows))
}
