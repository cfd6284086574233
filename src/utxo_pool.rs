use crate::{TransactionHash, TransactionOutput};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::convert::TryFrom;
use std::fmt::{Display, Formatter};
use std::iter::FromIterator;

/// The index of the transaction output.
#[derive(Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Copy, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OutputIndex(u32);

impl Display for OutputIndex {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl OutputIndex {
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// The index of the output at `position`, if it fits.
    pub fn from_position(position: usize) -> Option<Self> {
        u32::try_from(position).ok().map(Self)
    }
}

/// Identifies a transaction output by the transaction that created it and its index in
/// that transaction.
#[derive(Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Copy, Clone, Serialize, Deserialize)]
pub struct Utxo {
    tx_hash: TransactionHash,
    output_index: OutputIndex,
}

impl Display for Utxo {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.tx_hash, self.output_index)
    }
}

impl Utxo {
    pub const fn new(tx_hash: TransactionHash, output_index: OutputIndex) -> Self {
        Self {
            tx_hash,
            output_index,
        }
    }

    pub fn tx_hash(&self) -> &TransactionHash {
        &self.tx_hash
    }

    pub fn output_index(&self) -> OutputIndex {
        self.output_index
    }
}

/// A pool of unspent transaction outputs, indexed by the output they name.
/// Cloning the pool produces an independent snapshot.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct UtxoPool {
    utxos: HashMap<Utxo, TransactionOutput>,
}

impl UtxoPool {
    pub fn new() -> Self {
        Self {
            utxos: HashMap::new(),
        }
    }

    pub fn contains(&self, utxo: &Utxo) -> bool {
        self.utxos.contains_key(utxo)
    }

    /// Returns the output named by the UTXO, if it is still unspent.
    pub fn get(&self, utxo: &Utxo) -> Option<&TransactionOutput> {
        self.utxos.get(utxo)
    }

    /// Ensures that the UTXO maps to the given output, replacing any previous one.
    pub fn add(&mut self, utxo: Utxo, output: TransactionOutput) {
        self.utxos.insert(utxo, output);
    }

    pub fn remove(&mut self, utxo: &Utxo) {
        self.utxos.remove(utxo);
    }

    /// All UTXOs in the pool, in no particular order.
    pub fn all_ids(&self) -> Vec<Utxo> {
        self.utxos.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.utxos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.utxos.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Utxo, &TransactionOutput)> {
        self.utxos.iter()
    }
}

impl FromIterator<(Utxo, TransactionOutput)> for UtxoPool {
    fn from_iter<I: IntoIterator<Item = (Utxo, TransactionOutput)>>(iter: I) -> Self {
        Self {
            utxos: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PublicKey, Scroogecoin, Sha256};

    fn utxo(seed: &[u8], index: u32) -> Utxo {
        Utxo::new(
            TransactionHash::new(Sha256::digest(seed)),
            OutputIndex::new(index),
        )
    }

    fn output(value: i64) -> TransactionOutput {
        TransactionOutput::new(Scroogecoin::new(value), PublicKey::from_raw([3; 32]))
    }

    #[test]
    fn utxo_displays_hash_and_index() {
        let utxo = utxo(b"a", 3);
        assert_eq!(utxo.output_index(), OutputIndex::new(3));
        assert_eq!(utxo.to_string(), format!("{}:3", utxo.tx_hash()));
    }

    #[test]
    fn output_index_from_position() {
        assert_eq!(OutputIndex::from_position(7), Some(OutputIndex::new(7)));
        assert_eq!(
            OutputIndex::from_position(u32::MAX as usize),
            Some(OutputIndex::new(u32::MAX))
        );
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn output_index_rejects_positions_past_u32() {
        assert_eq!(OutputIndex::from_position(u32::MAX as usize + 1), None);
    }

    #[test]
    fn add_then_get() {
        let mut pool = UtxoPool::new();
        pool.add(utxo(b"a", 0), output(10));
        assert!(pool.contains(&utxo(b"a", 0)));
        assert!(!pool.contains(&utxo(b"a", 1)));
        assert_eq!(pool.get(&utxo(b"a", 0)), Some(&output(10)));
        assert_eq!(pool.get(&utxo(b"b", 0)), None);
    }

    #[test]
    fn add_overwrites() {
        let mut pool = UtxoPool::new();
        pool.add(utxo(b"a", 0), output(10));
        pool.add(utxo(b"a", 0), output(20));
        assert_eq!(pool.len(), 1);
        assert_eq!(pool.get(&utxo(b"a", 0)), Some(&output(20)));
    }

    #[test]
    fn remove_is_a_noop_when_absent() {
        let mut pool = UtxoPool::new();
        pool.add(utxo(b"a", 0), output(10));
        pool.remove(&utxo(b"b", 0));
        assert_eq!(pool.len(), 1);
        pool.remove(&utxo(b"a", 0));
        assert!(pool.is_empty());
    }

    #[test]
    fn all_lists_every_utxo() {
        let pool = vec![(utxo(b"a", 0), output(1)), (utxo(b"a", 1), output(2))]
            .into_iter()
            .collect::<UtxoPool>();
        let mut all = pool.all_ids();
        all.sort();
        let mut expected = vec![utxo(b"a", 0), utxo(b"a", 1)];
        expected.sort();
        assert_eq!(all, expected);
    }

    #[test]
    fn clone_is_independent() {
        let mut pool = UtxoPool::new();
        pool.add(utxo(b"a", 0), output(10));
        let mut snapshot = pool.clone();
        snapshot.remove(&utxo(b"a", 0));
        assert!(pool.contains(&utxo(b"a", 0)));
    }
}
