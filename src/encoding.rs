use serde::de::Error;
use serde::{Deserialize, Deserializer, Serializer};
use std::convert::TryFrom;

/// Serializes raw bytes as a hex string for human-readable formats (e.g. JSON),
/// and as a plain byte sequence otherwise (e.g. bincode).
pub fn serialize_to_hex<S>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if serializer.is_human_readable() {
        serializer.serialize_str(&hex::encode(bytes))
    } else {
        serializer.serialize_bytes(bytes)
    }
}

/// Counterpart of `serialize_to_hex` for fixed-size byte arrays.
pub fn deserialize_array<'de, D, const N: usize>(deserializer: D) -> Result<[u8; N], D::Error>
where
    D: Deserializer<'de>,
{
    let bytes = if deserializer.is_human_readable() {
        let s = String::deserialize(deserializer)?;
        hex::decode(&s).map_err(D::Error::custom)?
    } else {
        Vec::<u8>::deserialize(deserializer)?
    };
    <[u8; N]>::try_from(bytes.as_slice()).map_err(|_| {
        D::Error::custom(format!(
            "Invalid length. Expected: {} bytes but got: {}",
            N,
            bytes.len()
        ))
    })
}
