use thiserror::Error;

/// RFC modelling and validation errors
#[derive(Error, Debug)]
pub enum RfcError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Value out of range: {0}")]
    OutOfRange(String),
}

pub type RfcResult<T> = std::result::Result<T, RfcError>;
