use thiserror::Error;

#[derive(Error, Debug)]
pub enum AccretionError {
    #[error("population should be \"warm\" or \"cold\" but given \"{given}\"")]
    InvalidPopulation { given: String },

    #[error("array shape mismatch: expected {expected:?}, found {found:?}")]
    ShapeMismatch {
        expected: Vec<usize>,
        found: Vec<usize>,
    },

    #[error("sweep configuration error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type AccretionResult<T> = Result<T, AccretionError>;
