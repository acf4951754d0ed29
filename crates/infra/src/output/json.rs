// crates/infra/src/output/json.rs
use std::io::Write;

use lab_catalog_domain::MetadataRecord;
use lab_catalog_shared_kernel::Result;

pub fn write_json(records: &[MetadataRecord], out: &mut impl Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, records)?;
    writeln!(out)?;
    Ok(())
}
