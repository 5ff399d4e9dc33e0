//! Errors and results.
use std::result::Result as StdResult;
use thiserror::Error;

// *************
// *** Error ***
// *************

#[derive(Error, Debug, PartialEq)]
pub enum Error {
    /// The option list is empty.
    #[error("no options were provided")]
    NoOptions,

    /// Two or more options share a label.
    #[error("label `{0}` is used by more than one option")]
    DuplicateLabel(String),
}

// **************
// *** Result ***
// **************

pub type Result<T = ()> = StdResult<T, Error>;
