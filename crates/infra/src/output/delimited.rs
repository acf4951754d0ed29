// crates/infra/src/output/delimited.rs
use std::io::Write;

use lab_catalog_domain::{CATALOG_HEADER, MetadataRecord};
use lab_catalog_shared_kernel::Result;

const QUOTE: char = '"';
const ROW_TERMINATOR: &str = "\r\n";

/// Header plus one row per record, quoting only where required.
pub fn write_delimited(records: &[MetadataRecord], sep: char, out: &mut impl Write) -> Result<()> {
    write_row(&CATALOG_HEADER, sep, out)?;
    for record in records {
        write_row(&record.fields(), sep, out)?;
    }
    Ok(())
}

fn write_row(fields: &[&str], sep: char, out: &mut impl Write) -> Result<()> {
    let line = fields.iter().map(|f| escape_field(f, sep)).collect::<Vec<_>>().join(&sep.to_string());
    write!(out, "{line}{ROW_TERMINATOR}")?;
    Ok(())
}

/// Quote a field containing the separator, a quote or a line break; inner quotes are doubled.
pub fn escape_field(s: &str, sep: char) -> String {
    let needs_quotes = s.chars().any(|c| c == sep || c == QUOTE || c == '\n' || c == '\r');
    if needs_quotes {
        let escaped = s.replace(QUOTE, "\"\"");
        format!("{QUOTE}{escaped}{QUOTE}")
    } else {
        s.to_string()
    }
}
