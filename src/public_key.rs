use crate::encoding::{deserialize_array, serialize_to_hex};
use crate::Signature;
use ed25519_dalek::VerifyingKey;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

const PUBLIC_KEY_BYTE_COUNT: usize = 32;

/// An ed25519 public key which identifies the owner of a transaction output.
#[derive(Debug, Copy, Clone, Hash, Serialize, Deserialize, Eq, PartialEq)]
pub struct PublicKey(
    #[serde(serialize_with = "serialize_to_hex", deserialize_with = "deserialize_array")]
    [u8; PUBLIC_KEY_BYTE_COUNT],
);

impl PublicKey {
    pub const fn from_raw(raw_bytes: [u8; PUBLIC_KEY_BYTE_COUNT]) -> Self {
        Self(raw_bytes)
    }

    /// Returns true iff the signature over the message was produced by the private key
    /// matching this public key.
    /// Bytes that don't decode to a valid curve point never verify.
    pub fn verify(&self, message: &[u8], signature: &Signature) -> bool {
        match VerifyingKey::from_bytes(&self.0) {
            Ok(verifying_key) => verifying_key
                .verify_strict(message, &signature.to_dalek())
                .is_ok(),
            Err(_) => false,
        }
    }
}

impl From<&VerifyingKey> for PublicKey {
    fn from(verifying_key: &VerifyingKey) -> Self {
        Self(verifying_key.to_bytes())
    }
}

impl Display for PublicKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}
