//! Writing documents to their output sink.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use brix_core::Result;
use serde::Serialize;

/// Write a document to a file as pretty-printed JSON.
///
/// All-or-nothing: failure to create or write the sink aborts the run with an
/// IO error, and no partial document is considered valid.
pub fn write_document<T: Serialize>(document: &T, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, document).map_err(std::io::Error::from)?;
    writer.flush()?;
    Ok(())
}

/// Render a document as a pretty-printed JSON string.
pub fn document_to_string<T: Serialize>(document: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(document).map_err(std::io::Error::from)?)
}
