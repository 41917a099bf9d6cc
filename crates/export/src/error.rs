use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to write export data: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error while writing export: {0}")]
    Io(#[from] std::io::Error),
}
