//! Common reference strings `(H, U1, U2)` with `H = g*a1` and `U1 = g*a2` where `g` is the generator of the
//! CRS's group. In real mode `U2 = H*a2 + g` and `a1`, `a2` are discarded. In simulation mode `U2 = H*a2`
//! and `a2` is kept as the trapdoor for simulating proofs. The two modes are indistinguishable under DDH.
//!
//! [`CrsG2`] is used for proofs about statements in G1 and [`CrsG1`] for proofs about statements in G2.

use crate::{error::NizkError, setup::SetupParams};
use ark_ec::{pairing::Pairing, AffineRepr, CurveGroup};
use ark_ff::PrimeField;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::{rand::RngCore, vec::Vec, UniformRand};
use pairing_utils::serde_utils::ArkObjectBytes;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Discrete log of `U1` of a CRS created in simulation mode
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
pub struct Trapdoor<F: PrimeField>(#[serde_as(as = "ArkObjectBytes")] pub F);

macro_rules! impl_crs {
    (
        $(#[$doc:meta])*
        $crs: ident, $group: path, $gen: ident
    ) => {
        $(#[$doc])*
        #[serde_as]
        #[derive(
            Clone, PartialEq, Eq, Debug, CanonicalSerialize, CanonicalDeserialize, Serialize, Deserialize,
        )]
        pub struct $crs<E: Pairing> {
            #[serde_as(as = "ArkObjectBytes")]
            pub H: $group,
            #[serde_as(as = "ArkObjectBytes")]
            pub U1: $group,
            #[serde_as(as = "ArkObjectBytes")]
            pub U2: $group,
        }

        impl<E: Pairing> $crs<E> {
            /// Create a CRS in real mode
            pub fn new<R: RngCore>(rng: &mut R, params: &SetupParams<E>) -> Self {
                let a1 = E::ScalarField::rand(rng);
                let a2 = E::ScalarField::rand(rng);
                let H = (params.$gen * a1).into_affine();
                Self::new_real_given_secret(&H, &a2, params)
            }

            /// Real mode CRS with the given `H` and `U1 = g*a`
            pub fn new_real_given_secret(
                H: &$group,
                a: &E::ScalarField,
                params: &SetupParams<E>,
            ) -> Self {
                Self {
                    H: *H,
                    U1: (params.$gen * a).into_affine(),
                    U2: (*H * a + params.$gen).into_affine(),
                }
            }

            /// Simulation mode CRS with the given `H` and `U1 = g*a`. `a` is the trapdoor.
            pub fn new_simulated_given_secret(
                H: &$group,
                a: &E::ScalarField,
                params: &SetupParams<E>,
            ) -> Self {
                Self {
                    H: *H,
                    U1: (params.$gen * a).into_affine(),
                    U2: (*H * a).into_affine(),
                }
            }

            /// Pointwise sum of 2 CRSs sharing the same `H`. The sum of a real mode and a simulation mode CRS with
            /// exponents `a` and `b` is `(H, g*(a+b), H*(a+b) + g)`.
            pub fn combine(&self, other: &Self) -> Result<Self, NizkError> {
                if self.H != other.H {
                    return Err(NizkError::IncompatibleCrs);
                }
                Ok(Self {
                    H: self.H,
                    U1: (self.U1 + other.U1).into_affine(),
                    U2: (self.U2 + other.U2).into_affine(),
                })
            }

            /// `U2 - g`, which is `H*a2` for a real mode CRS
            pub fn U2_minus_gen(&self, params: &SetupParams<E>) -> $group {
                (self.U2.into_group() - params.$gen).into_affine()
            }

            pub fn is_valid(&self) -> bool {
                !(self.H.is_zero() || self.U1.is_zero() || self.U2.is_zero())
            }
        }
    };
}

impl_crs!(
    /// CRS in group G2 for proofs about statements in group G1
    CrsG2, E::G2Affine, g2
);

impl_crs!(
    /// CRS in group G1 for proofs about statements in group G2
    CrsG1, E::G1Affine, g1
);
