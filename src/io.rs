use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter};
use std::path::Path;

use anyhow::{Context, Result};
use bzip2::read::BzDecoder;
use flate2::read::MultiGzDecoder;
use serde::de::DeserializeOwned;

/// Open a text file, decompressing `.bz2` and `.gz` inputs on the fly.
pub fn open_reader(path: &Path) -> Result<Box<dyn BufRead>> {
    let file = File::open(path).with_context(|| format!("Cannot open {}", path.display()))?;
    let reader: Box<dyn BufRead> = match path.extension().and_then(|ext| ext.to_str()) {
        Some("bz2") => Box::new(BufReader::new(BzDecoder::new(file))),
        Some("gz") => Box::new(BufReader::new(MultiGzDecoder::new(file))),
        _ => Box::new(BufReader::new(file)),
    };
    Ok(reader)
}

/// Read every record of a headed TSV file. Columns are matched by header name.
pub fn read_tsv<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .from_reader(open_reader(path)?);

    let mut records = Vec::new();
    for result in reader.deserialize() {
        let record: T = result.with_context(|| format!("Error parsing {}", path.display()))?;
        records.push(record);
    }
    Ok(records)
}

/// Create a headerless TSV writer; callers write their own header row.
pub fn tsv_writer(path: &Path) -> Result<csv::Writer<BufWriter<File>>> {
    let file = File::create(path).with_context(|| format!("Cannot create {}", path.display()))?;
    Ok(csv::WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .from_writer(BufWriter::new(file)))
}
