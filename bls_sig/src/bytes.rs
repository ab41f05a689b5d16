//! Signing, verification and point addition over canonical byte encodings, for callers that only hold
//! bytes like bindings to other languages. Malformed bytes or points not in the prime order subgroup
//! fail with `BlsError::Serialization` before any pairing is computed, so they are never confused with a
//! signature that does not verify. `pairing_utils::status::status_code` maps the results to integer codes.

use crate::{
    common::SignatureParams,
    error::BlsError,
    signature::{Keypair, PublicKeyG2, SecretKey, SignatureG1},
};
use ark_ec::{pairing::Pairing, AffineRepr, CurveGroup};
use ark_std::{rand::RngCore, vec::Vec};
use digest::{ExtendableOutput, Update};
use pairing_utils::encoding::{non_zero_point_from_bytes, to_bytes_compressed};

/// Returns the encoded secret key and public key
pub fn generate_keypair<E: Pairing, R: RngCore>(
    rng: &mut R,
    params: &SignatureParams<E>,
) -> Result<(Vec<u8>, Vec<u8>), BlsError> {
    let keypair = Keypair::generate_using_rng(rng, params);
    Ok((
        keypair.secret_key.to_bytes()?,
        keypair.public_key.to_bytes()?,
    ))
}

/// Returns the encoded public key for an externally supplied secret key
pub fn public_key_from_secret_key<E: Pairing>(
    secret_key: &[u8],
    params: &SignatureParams<E>,
) -> Result<Vec<u8>, BlsError> {
    Keypair::generate_using_secret_key_bytes(secret_key, params)?
        .public_key
        .to_bytes()
}

/// Returns the compressed signature on `message`
pub fn sign<E: Pairing, X: Default + Update + ExtendableOutput>(
    message: &[u8],
    secret_key: &[u8],
) -> Result<Vec<u8>, BlsError> {
    let sk = SecretKey::<E::ScalarField>::from_bytes(secret_key)?;
    SignatureG1::<E>::new::<X>(message, &sk).to_bytes()
}

pub fn verify<E: Pairing, X: Default + Update + ExtendableOutput>(
    signature: &[u8],
    message: &[u8],
    public_key: &[u8],
    params: &SignatureParams<E>,
) -> Result<(), BlsError> {
    let sig = SignatureG1::<E>::from_bytes(signature)?;
    let pk = PublicKeyG2::<E>::from_bytes(public_key)?;
    sig.verify::<X>(message, &pk, params)
}

/// Add two encoded points of the same group. Fails with `InvalidPoint` if either is the point at infinity.
fn add<G: AffineRepr>(p1: &[u8], p2: &[u8]) -> Result<Vec<u8>, BlsError> {
    let p1 = non_zero_point_from_bytes::<G>(p1)?.ok_or(BlsError::InvalidPoint)?;
    let p2 = non_zero_point_from_bytes::<G>(p2)?.ok_or(BlsError::InvalidPoint)?;
    Ok(to_bytes_compressed(&(p1 + p2).into_affine())?)
}

/// Add two G1 points like signatures on the same message
pub fn add_g1<E: Pairing>(p1: &[u8], p2: &[u8]) -> Result<Vec<u8>, BlsError> {
    add::<E::G1Affine>(p1, p2)
}

/// Add two G2 points like public keys
pub fn add_g2<E: Pairing>(q1: &[u8], q2: &[u8]) -> Result<Vec<u8>, BlsError> {
    add::<E::G2Affine>(q1, q2)
}
