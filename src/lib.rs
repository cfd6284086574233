pub mod commands;
pub mod encoding;
pub mod epoch;
pub mod error;
pub mod hash;
pub mod public_key;
pub mod scroogecoin;
pub mod signature;
pub mod transaction;
pub mod tx_handler;
pub mod utxo_pool;

pub use self::{
    epoch::*, error::*, hash::*, public_key::*, scroogecoin::*, signature::*, transaction::*,
    tx_handler::*, utxo_pool::*,
};
