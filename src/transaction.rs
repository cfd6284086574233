use crate::error::TransactionError;
use crate::{PublicKey, Scroogecoin, Sha256, Signature, Utxo};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// A double SHA-256 hash of the transaction data.
#[derive(Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Copy, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionHash(Sha256);

impl Display for TransactionHash {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TransactionHash {
    pub const fn new(data: Sha256) -> Self {
        Self(data)
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct TransactionInput {
    // The output being spent.
    utxo: Utxo,
    // Signs the transaction data returned by `Transaction::raw_data_to_sign` for this input.
    signature: Option<Signature>,
}

impl Display for TransactionInput {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.utxo)
    }
}

impl TransactionInput {
    pub fn new(utxo: Utxo) -> Self {
        Self {
            utxo,
            signature: None,
        }
    }

    pub fn utxo(&self) -> &Utxo {
        &self.utxo
    }

    pub fn signature(&self) -> Option<&Signature> {
        self.signature.as_ref()
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct TransactionOutput {
    value: Scroogecoin,
    // Only the owner of the matching private key can spend this output.
    recipient: PublicKey,
}

impl Display for TransactionOutput {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.value, self.recipient)
    }
}

impl TransactionOutput {
    pub fn new(value: Scroogecoin, recipient: PublicKey) -> Self {
        Self { value, recipient }
    }

    pub fn value(&self) -> Scroogecoin {
        self.value
    }

    pub fn recipient(&self) -> &PublicKey {
        &self.recipient
    }
}

// The message signed by a single input.
#[derive(Serialize)]
struct SigningData<'a> {
    utxo: &'a Utxo,
    outputs: &'a [TransactionOutput],
}

/// A transfer of coins from the outputs it claims to the outputs it creates.
/// The hash is only known once the transaction is finalized, and any change to its
/// contents invalidates it.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(skip)]
    hash: Option<TransactionHash>,
    inputs: Vec<TransactionInput>,
    outputs: Vec<TransactionOutput>,
}

impl Transaction {
    pub fn new(inputs: Vec<TransactionInput>, outputs: Vec<TransactionOutput>) -> Self {
        Self {
            hash: None,
            inputs,
            outputs,
        }
    }

    pub fn hash(&self) -> Option<&TransactionHash> {
        self.hash.as_ref()
    }

    pub fn inputs(&self) -> &Vec<TransactionInput> {
        &self.inputs
    }

    pub fn outputs(&self) -> &Vec<TransactionOutput> {
        &self.outputs
    }

    pub fn add_input(&mut self, utxo: Utxo) {
        self.hash = None;
        self.inputs.push(TransactionInput::new(utxo));
    }

    pub fn add_output(&mut self, output: TransactionOutput) {
        self.hash = None;
        self.outputs.push(output);
    }

    pub fn add_signature(
        &mut self,
        index: usize,
        signature: Signature,
    ) -> Result<(), TransactionError> {
        let count = self.inputs.len();
        let input = self
            .inputs
            .get_mut(index)
            .ok_or(TransactionError::InputIndexOutOfRange { index, count })?;
        input.signature = Some(signature);
        self.hash = None;
        Ok(())
    }

    /// The bytes the input at `index` must sign: the output it claims and all outputs.
    /// Signatures are not included, so inputs can be signed in any order.
    pub fn raw_data_to_sign(&self, index: usize) -> Result<Vec<u8>, TransactionError> {
        let input = self
            .inputs
            .get(index)
            .ok_or(TransactionError::InputIndexOutOfRange {
                index,
                count: self.inputs.len(),
            })?;
        let data = SigningData {
            utxo: &input.utxo,
            outputs: &self.outputs,
        };
        Ok(bincode::serialize(&data)?)
    }

    /// The full transaction data, including signatures.
    pub fn raw_tx(&self) -> Result<Vec<u8>, TransactionError> {
        Ok(bincode::serialize(&(&self.inputs, &self.outputs))?)
    }

    /// Computes the hash over the current contents.
    pub fn finalize(&mut self) -> Result<TransactionHash, TransactionError> {
        let first_hash = Sha256::digest(&self.raw_tx()?);
        let second_hash = Sha256::digest(first_hash.as_slice());
        let hash = TransactionHash::new(second_hash);
        self.hash = Some(hash);
        Ok(hash)
    }
}

impl Display for Transaction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.hash {
            Some(hash) => write!(f, "{}", hash),
            None => write!(f, "<unfinalized>"),
        }
    }
}
