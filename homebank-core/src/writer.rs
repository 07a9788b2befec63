//! HomeBank CSV writer.
//!
//! One `;`-separated line per record, no header line, `\n` terminated.
//! Free-text fields are quoted only when they contain `;`, `"` or a newline.

use std::fs::File;
use std::io;
use std::path::Path;

use tracing::info;

use crate::error::ConvertError;
use crate::record::HomebankRecord;

/// Serialize records in order to any writer.
pub fn write_records<W: io::Write>(out: W, records: &[HomebankRecord]) -> csv::Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(out);

    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Create (or truncate) `path` and write all records to it.
pub fn write_file(path: &Path, records: &[HomebankRecord]) -> Result<(), ConvertError> {
    info!(path = %path.display(), records = records.len(), "writing homebank csv");

    let file = File::create(path).map_err(|source| ConvertError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;

    write_records(file, records).map_err(|err| ConvertError::FileWrite {
        path: path.to_path_buf(),
        source: err.into(),
    })
}
