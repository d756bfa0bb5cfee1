use thiserror::Error;

/// Failure of the batch as a whole; no link is built.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("expected an even number of site rows, got {0}")]
    OddRowCount(usize),
}

/// Failure of a single link; sibling links are unaffected.
#[derive(Debug, Error, PartialEq)]
pub enum RequirementError {
    #[error("site '{site}' must contain either 4 or 9 fields, got {count}")]
    FieldCount { site: String, count: usize },
    #[error("frequency range cannot be '{0}', expected one of 3, 4, 5, 6, 28, 70")]
    Frequency(String),
    #[error("bandwidth cannot be '{0}', expected a number greater than zero")]
    Bandwidth(String),
    #[error("capacity cannot be '{0}', expected an integer greater than zero")]
    Capacity(String),
    #[error("availability cannot be '{0}', expected either 99.90 or 99.99")]
    Availability(String),
}

#[derive(Debug, Error)]
pub enum ReadError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
