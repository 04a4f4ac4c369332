use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use color_eyre::eyre::Context;
use color_eyre::Result;

use crate::document::OutputDocument;
use crate::error::Error;
use crate::record::RawRecord;

const SOURCE_DELIMITER: u8 = b';';
const SOURCE_EXTENSION: &str = "csv";
const BYTE_ORDER_MARK: char = '\u{feff}';
/// Stands in for the Nordic letters the export fails to encode
const REPLACEMENT_REPAIR: &str = "oe";

/// Expands directories into the CSV files they directly contain, sorted by name
pub fn collect_inputs(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut inputs = Vec::new();
    for path in paths {
        if path.is_dir() {
            let mut found = fs::read_dir(path)
                .with_context(|| format!("Could not list directory {path:?}"))?
                .map(|entry| entry.map(|e| e.path()))
                .collect::<std::io::Result<Vec<_>>>()
                .with_context(|| format!("Could not list directory {path:?}"))?
                .into_iter()
                .filter(|p| p.is_file() && p.extension().is_some_and(|e| e == SOURCE_EXTENSION))
                .collect::<Vec<_>>();
            found.sort();
            inputs.extend(found);
        } else {
            inputs.push(path.clone());
        }
    }
    Ok(inputs)
}

/// Decodes raw export bytes, repairing what the bank mis-encoded
pub fn decode(bytes: &[u8]) -> String {
    let text = String::from_utf8_lossy(bytes);
    let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(&text);
    text.replace(char::REPLACEMENT_CHARACTER, REPLACEMENT_REPAIR)
}

pub fn parse_records(text: &str) -> crate::error::Result<Vec<RawRecord>> {
    csv::ReaderBuilder::new()
        .delimiter(SOURCE_DELIMITER)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(text.as_bytes())
        .deserialize::<RawRecord>()
        .map(|record| record.map_err(Error::from))
        .collect()
}

pub fn read_statement(path: &Path) -> Result<Vec<RawRecord>> {
    let bytes = fs::read(path).with_context(|| format!("Could not read input file {path:?}"))?;
    parse_records(&decode(&bytes))
        .with_context(|| format!("Could not parse statement file {path:?}"))
}

/// Writes the document into `dir`, refusing to replace an existing file
pub fn write_document(dir: &Path, document: &OutputDocument) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Could not create output directory {dir:?}"))?;
    let path = dir.join(&document.filename);
    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&path)
        .with_context(|| format!("Could not create output file {path:?}"))?;
    file.write_all(document.text.as_bytes())
        .with_context(|| format!("Could not write output file {path:?}"))?;
    Ok(path)
}
