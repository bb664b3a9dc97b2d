//! Error types for the split engine.

use thiserror::Error;

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors that can occur during engine operation.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Failed to open or read the input file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// Transaction index outside the current transaction list
    #[error("Transaction index {index} out of range (have {len} transactions)")]
    TransactionOutOfRange { index: usize, len: usize },

    /// Participant index outside the current roster
    #[error("Participant index {index} out of range (have {len} participants)")]
    ParticipantOutOfRange { index: usize, len: usize },

    /// Missing input file argument
    #[error("Missing input file argument. Usage: split-engine <input.csv> [participant name...]")]
    MissingArgument,
}
