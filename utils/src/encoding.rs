//! Canonical byte encoding of field and group elements. The compressed encoding has a fixed size for
//! each type, so objects made of several elements are encoded as the plain concatenation of their
//! elements without any length prefix.

use alloc::vec::Vec;
use ark_ec::AffineRepr;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize, SerializationError};

/// Compressed encoding of `obj`
pub fn to_bytes_compressed<T: CanonicalSerialize>(obj: &T) -> Result<Vec<u8>, SerializationError> {
    let mut bytes = Vec::with_capacity(obj.compressed_size());
    obj.serialize_compressed(&mut bytes)?;
    Ok(bytes)
}

/// Decode an object from its compressed encoding. Group elements are checked to be on the curve and
/// in the prime order subgroup. Fails if `bytes` is longer than the encoding.
pub fn from_bytes_compressed<T: CanonicalDeserialize>(bytes: &[u8]) -> Result<T, SerializationError> {
    let mut reader = bytes;
    let obj = T::deserialize_compressed(&mut reader)?;
    if !reader.is_empty() {
        return Err(SerializationError::InvalidData);
    }
    Ok(obj)
}

/// Decode a group element from its compressed encoding. Returns `None` if it is the point at infinity.
pub fn non_zero_point_from_bytes<G: AffineRepr>(
    bytes: &[u8],
) -> Result<Option<G>, SerializationError> {
    let point = from_bytes_compressed::<G>(bytes)?;
    if point.is_zero() {
        return Ok(None);
    }
    Ok(Some(point))
}
