use ark_serialize::SerializationError;
use pairing_utils::{
    serde_utils::ArkSerializationError,
    status::{StatusCode, FAIL},
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub enum NizkError {
    #[serde(with = "ArkSerializationError")]
    Serialization(SerializationError),
    /// At least one of the four pairing equations of a proof does not hold
    InvalidProof,
    /// The proof about the combined CRS of a bit proof does not verify
    InvalidCrsProof,
    /// The proof of the branch for the given value does not verify
    InvalidBranchProof(u8),
    /// The combined CRS of a bit proof isn't the sum of the branch CRSs
    InvalidCombinedCrs,
    /// CRSs with different `H` can't be combined
    IncompatibleCrs,
    /// The ciphertext does not decrypt to 0 or 1
    InvalidDecryption,
}

impl NizkError {
    /// True if the input was well formed but did not pass verification
    pub fn is_verification_failure(&self) -> bool {
        !matches!(self, Self::Serialization(_) | Self::InvalidDecryption)
    }
}

impl From<SerializationError> for NizkError {
    fn from(e: SerializationError) -> Self {
        Self::Serialization(e)
    }
}

impl StatusCode for NizkError {
    fn status_code(&self) -> i32 {
        FAIL
    }
}
