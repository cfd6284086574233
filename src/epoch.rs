use crate::error::EpochError;
use crate::{Transaction, TransactionOutput, Utxo, UtxoPool};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// An unspent output together with the UTXO that names it.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct PoolEntry {
    pub utxo: Utxo,
    pub output: TransactionOutput,
}

/// The input of a single epoch: a snapshot of the pool and the transactions proposed
/// against it.
///
/// # Example JSON
/// ```json
/// {
///   "pool": [
///     { "utxo": { "tx_hash": "<64 hex chars>", "output_index": 0 },
///       "output": { "value": 10, "recipient": "<64 hex chars>" } }
///   ],
///   "transactions": [
///     { "inputs": [ { "utxo": { "tx_hash": "<64 hex chars>", "output_index": 0 },
///                     "signature": "<128 hex chars>" } ],
///       "outputs": [ { "value": 10, "recipient": "<64 hex chars>" } ] }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Epoch {
    pub pool: Vec<PoolEntry>,
    pub transactions: Vec<Transaction>,
}

impl Epoch {
    /// Reads the epoch from a JSON file. Transactions are finalized as they are loaded.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, EpochError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self, EpochError> {
        let mut epoch: Epoch = serde_json::from_str(content)?;
        for transaction in epoch.transactions.iter_mut() {
            transaction.finalize()?;
        }
        Ok(epoch)
    }

    pub fn utxo_pool(&self) -> UtxoPool {
        self.pool
            .iter()
            .map(|entry| (entry.utxo, entry.output.clone()))
            .collect()
    }
}

/// Lists the pool's entries ordered by UTXO, so that the output is reproducible.
pub fn pool_entries(pool: &UtxoPool) -> Vec<PoolEntry> {
    let mut entries = pool
        .iter()
        .map(|(utxo, output)| PoolEntry {
            utxo: *utxo,
            output: output.clone(),
        })
        .collect::<Vec<PoolEntry>>();
    entries.sort_by(|lhs, rhs| lhs.utxo.cmp(&rhs.utxo));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{OutputIndex, PublicKey, Scroogecoin, Sha256, Signature, TransactionHash, TxHandler};
    use ed25519_dalek::{Signer, SigningKey};

    fn sample_epoch_json() -> (String, Utxo) {
        let owner = SigningKey::from_bytes(&[1; 32]);
        let recipient = PublicKey::from(&SigningKey::from_bytes(&[2; 32]).verifying_key());
        let utxo = Utxo::new(
            TransactionHash::new(Sha256::digest(b"genesis")),
            OutputIndex::new(0),
        );
        let mut transaction = Transaction::new(
            vec![],
            vec![TransactionOutput::new(Scroogecoin::new(10), recipient)],
        );
        transaction.add_input(utxo);
        let message = transaction.raw_data_to_sign(0).unwrap();
        transaction
            .add_signature(0, Signature::from(&owner.sign(&message)))
            .unwrap();
        let epoch = Epoch {
            pool: vec![PoolEntry {
                utxo,
                output: TransactionOutput::new(
                    Scroogecoin::new(10),
                    PublicKey::from(&owner.verifying_key()),
                ),
            }],
            transactions: vec![transaction],
        };
        (serde_json::to_string_pretty(&epoch).unwrap(), utxo)
    }

    #[test]
    fn loaded_transactions_are_finalized() {
        let (json, _) = sample_epoch_json();
        let epoch = Epoch::from_json(&json).unwrap();
        assert!(epoch.transactions.iter().all(|tx| tx.hash().is_some()));
    }

    #[test]
    fn loaded_epoch_can_be_handled() {
        let (json, utxo) = sample_epoch_json();
        let epoch = Epoch::from_json(&json).unwrap();
        let mut handler = TxHandler::new(&epoch.utxo_pool());
        let accepted = handler.handle_batch(epoch.transactions.clone());
        assert_eq!(accepted.len(), 1);
        let entries = pool_entries(handler.utxo_pool());
        assert_eq!(entries.len(), 1);
        assert_ne!(entries[0].utxo, utxo);
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            Epoch::from_json("{ \"pool\": 3 }"),
            Err(EpochError::Json(_))
        ));
    }
}
