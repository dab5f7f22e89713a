use rustyline::error::ReadlineError;
use thiserror::Error;

use crate::chart::ChartError;
use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Chart error: {0}")]
    Chart(#[from] ChartError),

    #[error("Input error: {0}")]
    Readline(#[from] ReadlineError),
}

pub type ShellResult<T> = Result<T, ShellError>;
