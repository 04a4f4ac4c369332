use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The amount, once reduced to digits and minus signs, is not an integer
    #[error("Malformed amount '{raw}'")]
    MalformedAmount { raw: String },

    #[error("Could not convert record {row}")]
    Record {
        /// 1-based position in the source file, header excluded
        row: usize,
        #[source]
        source: Box<Error>,
    },

    /// Refusing to render a document without entries
    #[error("No entries to serialize")]
    EmptyInput,

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
