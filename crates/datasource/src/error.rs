use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Input file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to parse delimited input: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error reading input: {0}")]
    Io(#[from] std::io::Error),
}
