use thiserror::Error;

/// Errors produced by value construction.
#[derive(Debug, Error, PartialEq)]
pub enum TypeError {
    #[error("number is not representable in JSON: {0}")]
    InvalidNumber(f64),
}
