use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("Render error: {0}")]
    Render(String),
}

pub type ChartResult<T> = Result<T, ChartError>;
