use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Row index {0} out of bounds")]
    IndexOutOfBounds(usize),
}

pub type StoreResult<T> = Result<T, StoreError>;
