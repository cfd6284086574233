use crate::encoding::{deserialize_array, serialize_to_hex};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

const SIGNATURE_BYTE_COUNT: usize = 64;

/// An ed25519 signature attached to a transaction input.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Signature(
    #[serde(serialize_with = "serialize_to_hex", deserialize_with = "deserialize_array")]
    [u8; SIGNATURE_BYTE_COUNT],
);

impl Signature {
    pub const fn from_raw(raw_bytes: [u8; SIGNATURE_BYTE_COUNT]) -> Self {
        Self(raw_bytes)
    }

    pub(crate) fn to_dalek(&self) -> ed25519_dalek::Signature {
        ed25519_dalek::Signature::from_bytes(&self.0)
    }
}

impl From<&ed25519_dalek::Signature> for Signature {
    fn from(signature: &ed25519_dalek::Signature) -> Self {
        Self(signature.to_bytes())
    }
}

impl Display for Signature {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}
