use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("Number {value} is out of range ({min}..={max})")]
    NumberOutOfRange { value: i64, min: i64, max: i64 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RecordError>;
