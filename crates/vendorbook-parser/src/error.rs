use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The input held no text at all. Distinct from text that yielded zero
    /// vendors, which is `Ok(vec![])`.
    #[error("no vendor text was provided")]
    EmptyInput,

    #[error("failed to parse vendor text: {0}")]
    Internal(String),
}
