use crate::{Scroogecoin, Utxo};
use thiserror::Error;

/// Faults while building or encoding a transaction.
#[derive(Error, Debug)]
pub enum TransactionError {
    #[error("Input index: {index} is out of range for a transaction with {count} inputs")]
    InputIndexOutOfRange { index: usize, count: usize },

    #[error("Failed to encode the transaction: {0}")]
    Encoding(#[from] bincode::Error),
}

/// The first condition a transaction violates when checked against a UTXO pool.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Transaction is not finalized")]
    NotFinalized,

    #[error("Input: {index} claims {utxo} which is not in the UTXO pool")]
    MissingUtxo { index: usize, utxo: Utxo },

    #[error("Input: {index} has an invalid signature for {utxo}")]
    InvalidSignature { index: usize, utxo: Utxo },

    #[error("Input: {index} claims {utxo} which is already claimed by an earlier input")]
    DoubleSpend { index: usize, utxo: Utxo },

    #[error("Output: {index} has a negative value: {value}")]
    NegativeOutput { index: usize, value: Scroogecoin },

    #[error("Transaction has {count} outputs, more than an output index can address")]
    TooManyOutputs { count: usize },

    #[error("Inputs: {inputs} are less than outputs: {outputs}")]
    InsufficientInput { inputs: i128, outputs: i128 },

    #[error(transparent)]
    Malformed(#[from] TransactionError),
}

/// Faults while loading an epoch file.
#[derive(Error, Debug)]
pub enum EpochError {
    #[error("Failed to read epoch file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse epoch file: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Transaction(#[from] TransactionError),
}
