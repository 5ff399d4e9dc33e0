//! Errors and results.
use std::result::Result as StdResult;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid navigation options: {0}")]
    InvalidOptions(#[from] serde_json::Error),
}

pub type Result<T = ()> = StdResult<T, Error>;
