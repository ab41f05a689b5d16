//! Exponential Elgamal encryption of a bit in G1. The bit is encrypted as the group element `g1*b`, so a
//! ciphertext of 0 or 1 can be decrypted by comparing with `0` and `g1`.

use crate::{error::NizkError, setup::SetupParams};
use ark_ec::{pairing::Pairing, AffineRepr, CurveGroup};
use ark_ff::PrimeField;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::{rand::RngCore, vec::Vec, UniformRand};
use pairing_utils::{
    encoding::{from_bytes_compressed, to_bytes_compressed},
    serde_utils::ArkObjectBytes,
};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use zeroize::{Zeroize, ZeroizeOnDrop};

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

/// `g1*sk`
#[serde_as]
#[derive(
    Clone, PartialEq, Eq, Debug, CanonicalSerialize, CanonicalDeserialize, Serialize, Deserialize,
)]
pub struct PublicKey<E: Pairing>(#[serde_as(as = "ArkObjectBytes")] pub E::G1Affine);

/// Encryption of a bit `b` with randomness `r`
#[serde_as]
#[derive(
    Clone, PartialEq, Eq, Debug, CanonicalSerialize, CanonicalDeserialize, Serialize, Deserialize,
)]
pub struct Ciphertext<E: Pairing> {
    /// `g1*r`
    #[serde_as(as = "ArkObjectBytes")]
    pub C1: E::G1Affine,
    /// `pk*r + g1*b`
    #[serde_as(as = "ArkObjectBytes")]
    pub C2: E::G1Affine,
}

impl<F: PrimeField> SecretKey<F> {
    pub fn new<R: RngCore>(rng: &mut R) -> Self {
        Self(F::rand(rng))
    }
}

impl<E: Pairing> PublicKey<E> {
    pub fn new(secret_key: &SecretKey<E::ScalarField>, params: &SetupParams<E>) -> Self {
        Self((params.g1 * secret_key.0).into_affine())
    }
}

pub fn keygen<R: RngCore, E: Pairing>(
    rng: &mut R,
    params: &SetupParams<E>,
) -> (SecretKey<E::ScalarField>, PublicKey<E>) {
    let sk = SecretKey::new(rng);
    let pk = PublicKey::new(&sk, params);
    (sk, pk)
}

impl<E: Pairing> Ciphertext<E> {
    /// Returns the ciphertext and randomness created for encryption. The randomness is the witness
    /// for proving that the ciphertext encrypts a bit.
    pub fn new<R: RngCore>(
        rng: &mut R,
        bit: bool,
        public_key: &PublicKey<E>,
        params: &SetupParams<E>,
    ) -> (Self, E::ScalarField) {
        let r = E::ScalarField::rand(rng);
        (Self::new_given_randomness(bit, public_key, &r, params), r)
    }

    pub fn new_given_randomness(
        bit: bool,
        public_key: &PublicKey<E>,
        randomness: &E::ScalarField,
        params: &SetupParams<E>,
    ) -> Self {
        let mut C2 = public_key.0 * randomness;
        if bit {
            C2 += params.g1;
        }
        Self {
            C1: (params.g1 * randomness).into_affine(),
            C2: C2.into_affine(),
        }
    }

    /// `C2 - g1*value`. This is `pk*r` iff the ciphertext encrypts `value`.
    pub fn shifted_C2(&self, value: bool, params: &SetupParams<E>) -> E::G1Affine {
        if value {
            (self.C2.into_group() - params.g1).into_affine()
        } else {
            self.C2
        }
    }

    /// Decrypts to the bit. Fails if the ciphertext does not encrypt 0 or 1.
    pub fn decrypt_bit(
        &self,
        secret_key: &SecretKey<E::ScalarField>,
        params: &SetupParams<E>,
    ) -> Result<bool, NizkError> {
        let m = (self.C2.into_group() - self.C1 * secret_key.0).into_affine();
        if m.is_zero() {
            Ok(false)
        } else if m == params.g1 {
            Ok(true)
        } else {
            Err(NizkError::InvalidDecryption)
        }
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, NizkError> {
        Ok(from_bytes_compressed(bytes)?)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, NizkError> {
        Ok(to_bytes_compressed(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bls12_381::{Bls12_381, Fr};
    use ark_std::rand::{rngs::StdRng, SeedableRng};
    use test_utils::test_serialization;

    #[test]
    fn encrypt_decrypt() {
        let mut rng = StdRng::seed_from_u64(0u64);
        let params = SetupParams::<Bls12_381>::new_standard();
        let (sk, pk) = keygen(&mut rng, &params);

        for bit in [false, true] {
            let (ct, r) = Ciphertext::new(&mut rng, bit, &pk, &params);
            assert_eq!(ct.decrypt_bit(&sk, &params).unwrap(), bit);
            assert_eq!(ct, Ciphertext::new_given_randomness(bit, &pk, &r, &params));
            assert_eq!(ct.C1, (params.g1 * r).into_affine());

            // Shifting by the encrypted value leaves pk*r
            assert_eq!(ct.shifted_C2(bit, &params), (pk.0 * r).into_affine());
            assert_ne!(ct.shifted_C2(!bit, &params), (pk.0 * r).into_affine());

            let bytes = ct.to_bytes().unwrap();
            assert_eq!(bytes.len(), 96);
            assert_eq!(Ciphertext::<Bls12_381>::from_bytes(&bytes).unwrap(), ct);
            assert!(matches!(
                Ciphertext::<Bls12_381>::from_bytes(&bytes[..95]),
                Err(NizkError::Serialization(_))
            ));
            test_serialization!(Ciphertext<Bls12_381>, ct);
        }

        // Same randomness draws give the same ciphertext
        let mut rng_1 = StdRng::seed_from_u64(1u64);
        let mut rng_2 = StdRng::seed_from_u64(1u64);
        assert_eq!(
            Ciphertext::new(&mut rng_1, true, &pk, &params),
            Ciphertext::new(&mut rng_2, true, &pk, &params)
        );

        // A ciphertext of 2 doesn't decrypt
        let r = Fr::rand(&mut rng);
        let ct = Ciphertext::<Bls12_381> {
            C1: (params.g1 * r).into_affine(),
            C2: (pk.0 * r + params.g1 + params.g1).into_affine(),
        };
        assert!(matches!(
            ct.decrypt_bit(&sk, &params),
            Err(NizkError::InvalidDecryption)
        ));

        // Wrong key
        let (sk_1, _) = keygen::<_, Bls12_381>(&mut rng, &params);
        let (ct, _) = Ciphertext::new(&mut rng, true, &pk, &params);
        assert!(ct.decrypt_bit(&sk_1, &params).is_err());

        test_serialization!(SecretKey<Fr>, sk);
        test_serialization!(PublicKey<Bls12_381>, pk, 48);
    }
}
