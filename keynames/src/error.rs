//! Extraction errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid input file: no `{marker}` found")]
    InvalidInputFile { marker: &'static str },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
