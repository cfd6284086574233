use crate::error::ValidationError;
use crate::{OutputIndex, Transaction, TransactionHash, Utxo, UtxoPool};
use log::{debug, info, trace};
use std::collections::HashSet;

/// Decides which transactions are valid against a public ledger of unspent outputs,
/// and applies the accepted ones to it.
///
/// The handler owns its pool exclusively. It does no locking, so callers that share a
/// handler across threads must serialize access to it.
pub struct TxHandler {
    utxo_pool: UtxoPool,
}

impl TxHandler {
    /// Creates a handler whose ledger is a copy of the given pool.
    /// The caller's pool is never modified.
    pub fn new(utxo_pool: &UtxoPool) -> Self {
        Self {
            utxo_pool: utxo_pool.clone(),
        }
    }

    pub fn utxo_pool(&self) -> &UtxoPool {
        &self.utxo_pool
    }

    /// Returns true iff the transaction is finalized and:
    ///   - every output it claims is in the current pool,
    ///   - every input is correctly signed by the owner of the output it claims,
    ///   - no output is claimed more than once,
    ///   - no output value is negative,
    ///   - the sum of input values is at least the sum of output values.
    pub fn is_valid(&self, transaction: &Transaction) -> bool {
        self.validate(transaction).is_ok()
    }

    /// Same checks as `is_valid`, stopping at the first violated condition and
    /// reporting it.
    pub fn validate(&self, transaction: &Transaction) -> Result<(), ValidationError> {
        self.check(transaction).map(|_| ())
    }

    // Returns the hash of a valid transaction, which names its new outputs.
    fn check(&self, transaction: &Transaction) -> Result<TransactionHash, ValidationError> {
        let hash = *transaction.hash().ok_or(ValidationError::NotFinalized)?;

        let mut claimed = HashSet::with_capacity(transaction.inputs().len());
        let mut input_sum: i128 = 0;
        for (index, input) in transaction.inputs().iter().enumerate() {
            let utxo = *input.utxo();
            let claimed_output = self
                .utxo_pool
                .get(&utxo)
                .ok_or(ValidationError::MissingUtxo { index, utxo })?;

            let message = transaction.raw_data_to_sign(index)?;
            let signed = input.signature().map_or(false, |signature| {
                claimed_output.recipient().verify(&message, signature)
            });
            if !signed {
                return Err(ValidationError::InvalidSignature { index, utxo });
            }

            if !claimed.insert(utxo) {
                return Err(ValidationError::DoubleSpend { index, utxo });
            }

            input_sum += claimed_output.value().to_i128();
        }

        let count = transaction.outputs().len();
        if let Some(last) = count.checked_sub(1) {
            OutputIndex::from_position(last).ok_or(ValidationError::TooManyOutputs { count })?;
        }

        let mut output_sum: i128 = 0;
        for (index, output) in transaction.outputs().iter().enumerate() {
            if output.value().is_negative() {
                return Err(ValidationError::NegativeOutput {
                    index,
                    value: output.value(),
                });
            }
            output_sum += output.value().to_i128();
        }

        // The difference is the fee, which nobody claims.
        if input_sum < output_sum {
            return Err(ValidationError::InsufficientInput {
                inputs: input_sum,
                outputs: output_sum,
            });
        }
        Ok(hash)
    }

    /// Handles an epoch: receives an unordered batch of proposed transactions and
    /// returns a mutually valid subset of them, in the order they were accepted.
    ///
    /// Candidates are re-checked in passes until a pass accepts nothing, so a
    /// transaction may spend outputs created by another one from the same batch,
    /// regardless of their order. Within a pass candidates are checked in the given
    /// order and the first valid one wins any conflict. Rejected candidates are dropped.
    pub fn handle_batch(&mut self, candidates: Vec<Transaction>) -> Vec<Transaction> {
        let candidate_count = candidates.len();
        let mut pending = candidates;
        let mut accepted = Vec::new();
        let mut pass = 0;

        loop {
            pass += 1;
            let mut rejected = Vec::with_capacity(pending.len());
            let accepted_before = accepted.len();

            for transaction in pending {
                match self.check(&transaction) {
                    Ok(hash) => {
                        self.commit(&transaction, hash);
                        accepted.push(transaction);
                    }
                    Err(reason) => {
                        trace!(
                            "Pass {}: transaction {} rejected: {}",
                            pass,
                            transaction,
                            reason
                        );
                        rejected.push((transaction, reason));
                    }
                }
            }

            let committed = accepted.len() - accepted_before;
            debug!(
                "Pass {}: committed {} transactions, {} pending",
                pass,
                committed,
                rejected.len()
            );
            if committed == 0 || rejected.is_empty() {
                for (transaction, reason) in &rejected {
                    debug!("Dropping transaction {}: {}", transaction, reason);
                }
                break;
            }
            pending = rejected
                .into_iter()
                .map(|(transaction, _)| transaction)
                .collect();
        }

        info!(
            "Accepted {} of {} transactions in {} passes",
            accepted.len(),
            candidate_count,
            pass
        );
        accepted
    }

    // Spends the claimed outputs and adds the newly created ones.
    // `check` guarantees every output position fits an `OutputIndex`.
    fn commit(&mut self, transaction: &Transaction, hash: TransactionHash) {
        for input in transaction.inputs() {
            self.utxo_pool.remove(input.utxo());
        }
        for (index, output) in (0..=u32::MAX).zip(transaction.outputs()) {
            let utxo = Utxo::new(hash, OutputIndex::new(index));
            self.utxo_pool.add(utxo, output.clone());
        }
    }
}
