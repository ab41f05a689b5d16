//! BLS signature with the signature in G1 and the public key in G2

use crate::{common::SignatureParams, error::BlsError};
use ark_ec::{pairing::Pairing, AffineRepr, CurveGroup};
use ark_ff::PrimeField;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::{end_timer, rand::RngCore, start_timer, vec::Vec, Zero};
use digest::{ExtendableOutput, Update};
use pairing_utils::{
    encoding::{from_bytes_compressed, to_bytes_compressed},
    hashing_utils::affine_group_elem_from_xof,
    pairing_check::PairingProductAccumulator,
    serde_utils::ArkObjectBytes,
};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Secret key used by the signer to sign messages
#[serde_as]
#[derive(
    Clone,
    PartialEq,
    Eq,
    Debug,
    CanonicalSerialize,
    CanonicalDeserialize,
    Zeroize,
    ZeroizeOnDrop,
    Serialize,
    Deserialize,
)]
pub struct SecretKey<F: PrimeField>(#[serde_as(as = "ArkObjectBytes")] pub F);

/// Public key used to verify signatures
#[serde_as]
#[derive(
    Clone, PartialEq, Eq, Debug, CanonicalSerialize, CanonicalDeserialize, Serialize, Deserialize,
)]
pub struct PublicKeyG2<E: Pairing>(#[serde_as(as = "ArkObjectBytes")] pub <E as Pairing>::G2Affine);

#[derive(
    Clone, PartialEq, Eq, Debug, CanonicalSerialize, CanonicalDeserialize, Serialize, Deserialize,
)]
#[serde(bound = "")]
pub struct Keypair<E: Pairing> {
    pub secret_key: SecretKey<E::ScalarField>,
    pub public_key: PublicKeyG2<E>,
}

#[serde_as]
#[derive(
    Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize, Serialize, Deserialize,
)]
pub struct SignatureG1<E: Pairing>(#[serde_as(as = "ArkObjectBytes")] pub E::G1Affine);

/// Hash a message to a point of G1 using the extendable-output function `X`
pub fn hash_message<E: Pairing, X: Default + Update + ExtendableOutput>(
    message: &[u8],
) -> E::G1Affine {
    affine_group_elem_from_xof::<E::G1Affine, X>(message)
}

/// Sum of the given points, none of which can be the point at infinity
fn sum_of_non_zero<'a, G: AffineRepr>(points: impl Iterator<Item = &'a G>) -> Result<G, BlsError> {
    let mut sum = G::Group::zero();
    let mut count = 0;
    for p in points {
        if p.is_zero() {
            return Err(BlsError::InvalidPoint);
        }
        sum += p;
        count += 1;
    }
    if count == 0 {
        return Err(BlsError::InvalidPoint);
    }
    Ok(sum.into_affine())
}

impl<F: PrimeField> SecretKey<F> {
    pub fn new<R: RngCore>(rng: &mut R) -> Self {
        Self(F::rand(rng))
    }

    /// Decode an externally supplied secret key from its canonical encoding
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, BlsError> {
        Ok(Self(from_bytes_compressed(bytes)?))
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, BlsError> {
        Ok(to_bytes_compressed(&self.0)?)
    }
}

impl<E: Pairing> PublicKeyG2<E> {
    pub fn generate_using_secret_key(
        secret_key: &SecretKey<E::ScalarField>,
        params: &SignatureParams<E>,
    ) -> Self {
        Self((params.g2 * secret_key.0).into())
    }

    /// Public key shouldn't be 0. A verifier on receiving this must first check that its
    /// valid and only then use it for any signature verification.
    pub fn is_valid(&self) -> bool {
        !self.0.is_zero()
    }

    /// Add public keys so that the sum verifies the sum of signatures on the same message.
    /// Fails with `InvalidPoint` if any key is 0 or no key is given.
    pub fn aggregate(keys: &[Self]) -> Result<Self, BlsError> {
        Ok(Self(sum_of_non_zero(keys.iter().map(|k| &k.0))?))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, BlsError> {
        Ok(Self(from_bytes_compressed(bytes)?))
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, BlsError> {
        Ok(to_bytes_compressed(&self.0)?)
    }
}

impl<E: Pairing> Keypair<E> {
    pub fn generate_using_rng<R: RngCore>(rng: &mut R, params: &SignatureParams<E>) -> Self {
        Self::from_secret_key(SecretKey::new(rng), params)
    }

    /// Create the keypair from an externally supplied secret key
    pub fn generate_using_secret_key_bytes(
        secret_key: &[u8],
        params: &SignatureParams<E>,
    ) -> Result<Self, BlsError> {
        Ok(Self::from_secret_key(
            SecretKey::from_bytes(secret_key)?,
            params,
        ))
    }

    pub fn from_secret_key(secret_key: SecretKey<E::ScalarField>, params: &SignatureParams<E>) -> Self {
        let public_key = PublicKeyG2::generate_using_secret_key(&secret_key, params);
        Self {
            secret_key,
            public_key,
        }
    }
}

impl<E: Pairing> SignatureG1<E> {
    /// Create a new signature. Signing is deterministic, the same message and key always give the
    /// same signature.
    pub fn new<X: Default + Update + ExtendableOutput>(
        message: &[u8],
        sk: &SecretKey<E::ScalarField>,
    ) -> Self {
        let sign_time = start_timer!(|| "Sign BLS");
        let sig = Self((hash_message::<E, X>(message) * sk.0).into_affine());
        end_timer!(sign_time);
        sig
    }

    pub fn verify<X: Default + Update + ExtendableOutput>(
        &self,
        message: &[u8],
        pk: &PublicKeyG2<E>,
        params: &SignatureParams<E>,
    ) -> Result<(), BlsError> {
        // A 0 signature and a 0 public key satisfy the equation for every message
        if self.0.is_zero() {
            return Err(BlsError::InvalidSignature);
        }
        if !pk.is_valid() {
            return Err(BlsError::InvalidPublicKey);
        }
        let verify_time = start_timer!(|| "Verify BLS");
        // Check e(sig, g2) == e(H(m), pk) => e(-sig, g2) * e(H(m), pk) == 1
        let mut pairing_check = PairingProductAccumulator::<E>::with_capacity(2);
        pairing_check.add_inverse_term(&self.0, params.g2);
        pairing_check.add_term(hash_message::<E, X>(message), pk.0);
        let valid = pairing_check.is_identity();
        end_timer!(verify_time);
        if !valid {
            return Err(BlsError::InvalidSignature);
        }
        Ok(())
    }

    /// Add signatures. Fails with `InvalidPoint` if any signature is 0 or no signature is given.
    pub fn aggregate(signatures: &[Self]) -> Result<Self, BlsError> {
        Ok(Self(sum_of_non_zero(signatures.iter().map(|s| &s.0))?))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, BlsError> {
        Ok(Self(from_bytes_compressed(bytes)?))
    }

    /// Compressed encoding of the signature
    pub fn to_bytes(&self) -> Result<Vec<u8>, BlsError> {
        Ok(to_bytes_compressed(&self.0)?)
    }
}
