use ark_ec::{pairing::Pairing, AffineRepr};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::{rand::RngCore, vec::Vec, UniformRand};
use digest::Digest;
use pairing_utils::{
    affine_group_element_from_byte_slices, serde_utils::ArkObjectBytes,
};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

/// Generators of both groups. Ciphertexts, keys and statements about ciphertexts use `g1`. Each
/// CRS uses the generator of its own group.
#[serde_as]
#[derive(
    Clone, PartialEq, Eq, Debug, CanonicalSerialize, CanonicalDeserialize, Serialize, Deserialize,
)]
pub struct SetupParams<E: Pairing> {
    #[serde_as(as = "ArkObjectBytes")]
    pub g1: E::G1Affine,
    #[serde_as(as = "ArkObjectBytes")]
    pub g2: E::G2Affine,
}

impl<E: Pairing> SetupParams<E> {
    pub fn new<D: Digest>(label: &[u8]) -> Self {
        let g1 = affine_group_element_from_byte_slices!(label, b" : g1");
        let g2 = affine_group_element_from_byte_slices!(label, b" : g2");
        Self { g1, g2 }
    }

    /// Uses the standard generators of the curve
    pub fn new_standard() -> Self {
        Self {
            g1: E::G1Affine::generator(),
            g2: E::G2Affine::generator(),
        }
    }

    pub fn generate_using_rng<R: RngCore>(rng: &mut R) -> Self {
        Self {
            g1: E::G1::rand(rng).into(),
            g2: E::G2::rand(rng).into(),
        }
    }

    pub fn is_valid(&self) -> bool {
        !(self.g1.is_zero() || self.g2.is_zero())
    }
}

impl<E: Pairing> Default for SetupParams<E> {
    fn default() -> Self {
        Self::new_standard()
    }
}
