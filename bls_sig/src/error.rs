use ark_serialize::SerializationError;
use pairing_utils::{
    serde_utils::ArkSerializationError,
    status::{StatusCode, FAIL, INVALID_POINT},
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub enum BlsError {
    /// Bytes could not be decoded as a scalar or as a point of the prime order subgroup
    #[serde(with = "ArkSerializationError")]
    Serialization(SerializationError),
    /// The point at infinity was given to an addition
    InvalidPoint,
    InvalidSignature,
    InvalidPublicKey,
}

impl BlsError {
    /// True if the input was well formed but did not pass verification
    pub fn is_verification_failure(&self) -> bool {
        matches!(self, Self::InvalidSignature | Self::InvalidPublicKey)
    }
}

impl From<SerializationError> for BlsError {
    fn from(e: SerializationError) -> Self {
        Self::Serialization(e)
    }
}

impl StatusCode for BlsError {
    fn status_code(&self) -> i32 {
        match self {
            Self::InvalidPoint => INVALID_POINT,
            _ => FAIL,
        }
    }
}
