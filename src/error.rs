use thiserror::Error;

#[derive(Error, Debug)]
pub enum TenpinError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Roll Validation Error: {0}")]
    Validation(String),

    #[error("Input Error: {0}")]
    Input(String),
}

pub type TpResult<T> = Result<T, TenpinError>;
