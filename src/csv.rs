// src/csv.rs
use std::error::Error;
use std::io::Write;

use ::csv::{QuoteStyle, ReaderBuilder, Terminator, Writer, WriterBuilder};

/* ---------------- Writing ---------------- */

/// Writer for export tables: minimal quoting, CRLF records, ragged rows allowed.
pub fn table_writer<W: Write>(w: W, sep: u8) -> Writer<W> {
    WriterBuilder::new()
        .delimiter(sep)
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::CRLF)
        .flexible(true)
        .from_writer(w)
}

/// Header line, then every row as-is. Flushes before returning.
pub fn write_table<W: Write>(
    out: &mut Writer<W>,
    headers: &[String],
    rows: &[Vec<String>],
) -> Result<(), Box<dyn Error>> {
    out.write_record(headers)?;
    for row in rows {
        out.write_record(row)?;
    }
    out.flush()?;
    Ok(())
}

/// Whole table as a String (header + rows).
pub fn to_export_string(
    headers: &[String],
    rows: &[Vec<String>],
    sep: u8,
) -> Result<String, Box<dyn Error>> {
    let mut buf: Vec<u8> = Vec::new();
    {
        let mut out = table_writer(&mut buf, sep);
        write_table(&mut out, headers, rows)?;
    }
    Ok(String::from_utf8(buf)?)
}

/* ---------------- Parsing ---------------- */

/// Read delimited text back into rows. No header handling: the first line is a row.
pub fn parse_rows(text: &str, sep: u8) -> Result<Vec<Vec<String>>, Box<dyn Error>> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(sep)
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for rec in rdr.records() {
        rows.push(rec?.iter().map(|f| s!(f)).collect());
    }
    Ok(rows)
}
