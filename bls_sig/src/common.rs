use ark_ec::{pairing::Pairing, AffineRepr};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::{rand::RngCore, vec::Vec, UniformRand};
use digest::Digest;
use pairing_utils::{
    concat_slices, hashing_utils::affine_group_elem_from_try_and_incr, serde_utils::ArkObjectBytes,
};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

/// Public parameters for creating and verifying BLS signatures
#[serde_as]
#[derive(
    Clone, PartialEq, Eq, Debug, CanonicalSerialize, CanonicalDeserialize, Serialize, Deserialize,
)]
pub struct SignatureParams<E: Pairing> {
    #[serde_as(as = "ArkObjectBytes")]
    pub g2: E::G2Affine,
}

impl<E: Pairing> SignatureParams<E> {
    /// Generator of G2 derived from a public label
    pub fn new<D: Digest>(label: &[u8]) -> Self {
        let g2 =
            affine_group_elem_from_try_and_incr::<E::G2Affine, D>(&concat_slices![label, b" : g2"]);
        Self { g2 }
    }

    /// Uses the standard generator of G2 of the curve
    pub fn new_standard() -> Self {
        Self {
            g2: E::G2Affine::generator(),
        }
    }

    pub fn generate_using_rng<R: RngCore>(rng: &mut R) -> Self {
        Self {
            g2: E::G2::rand(rng).into(),
        }
    }

    pub fn is_valid(&self) -> bool {
        !self.g2.is_zero()
    }
}

impl<E: Pairing> Default for SignatureParams<E> {
    fn default() -> Self {
        Self::new_standard()
    }
}
