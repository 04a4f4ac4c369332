use std::panic;
use std::thread;

use chrono::NaiveDateTime;

use crate::document::{serialize, OutputDocument};
use crate::error::{Error, Result};
use crate::record::{NormalizedEntry, RawRecord, Transformer};

/// Transforms the records of one file, in order.
///
/// The first record that cannot be converted fails the whole file.
pub fn transform_file(
    transformer: &Transformer<'_>,
    records: &[RawRecord],
) -> Result<Vec<NormalizedEntry>> {
    records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            transformer.transform(record).map_err(|err| Error::Record {
                row: i + 1,
                source: Box::new(err),
            })
        })
        .collect()
}

/// Converts every file on its own thread.
///
/// Results come back in the order of `files`. A failed file does not affect the others.
pub fn run(
    transformer: &Transformer<'_>,
    files: &[Vec<RawRecord>],
    now: NaiveDateTime,
) -> Vec<Result<OutputDocument>> {
    thread::scope(|scope| {
        let handles: Vec<_> = files
            .iter()
            .map(|records| {
                scope.spawn(move || {
                    let entries = transform_file(transformer, records)?;
                    serialize(&entries, now)
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap_or_else(|err| panic::resume_unwind(err)))
            .collect()
    })
}
