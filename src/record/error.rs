use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("Roll No must be an integer, got {0:?}")]
    InvalidRollNo(String),
}

pub type RecordResult<T> = Result<T, RecordError>;
