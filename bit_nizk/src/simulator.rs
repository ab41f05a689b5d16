//! Simulation of proofs with the trapdoor of a simulation mode CRS `(H, g*a, H*a)`. For any statement
//! `(A, B, C, D)`, the simulator picks a random `r` and outputs
//!
//! `C1 = g*r`, `C2 = H*r`, `P1 = A*r - C*a`, `P2 = B*r - D*a`
//!
//! which satisfies all 4 verification equations without `C = A*s` or `D = B*s` having to hold.

use crate::{
    crs::{CrsG1, CrsG2, Trapdoor},
    proof::{ProofG1, ProofG2, StatementG1, StatementG2},
    setup::SetupParams,
};
use ark_ec::{pairing::Pairing, CurveGroup};
use ark_std::{end_timer, rand::RngCore, start_timer, UniformRand};

macro_rules! impl_simulator {
    ($crs: ident, $statement: ident, $proof: ident, $crs_gen: ident) => {
        impl<E: Pairing> $crs<E> {
            /// Create a CRS in simulation mode. Returns the CRS and its trapdoor.
            pub fn new_with_trapdoor<R: RngCore>(
                rng: &mut R,
                params: &SetupParams<E>,
            ) -> (Self, Trapdoor<E::ScalarField>) {
                let a1 = E::ScalarField::rand(rng);
                let a2 = E::ScalarField::rand(rng);
                let H = (params.$crs_gen * a1).into_affine();
                (
                    Self::new_simulated_given_secret(&H, &a2, params),
                    Trapdoor(a2),
                )
            }
        }

        impl<E: Pairing> $proof<E> {
            /// Simulate a proof for the statement. Verifies only if `crs` was created in simulation mode with
            /// this trapdoor.
            pub fn simulate<R: RngCore>(
                rng: &mut R,
                crs: &$crs<E>,
                statement: &$statement<E>,
                trapdoor: &Trapdoor<E::ScalarField>,
                params: &SetupParams<E>,
            ) -> Self {
                let r = E::ScalarField::rand(rng);
                Self::simulate_given_randomness(crs, statement, trapdoor, &r, params)
            }

            pub fn simulate_given_randomness(
                crs: &$crs<E>,
                statement: &$statement<E>,
                trapdoor: &Trapdoor<E::ScalarField>,
                randomness: &E::ScalarField,
                params: &SetupParams<E>,
            ) -> Self {
                let sim_time = start_timer!(|| concat!("Simulate ", stringify!($proof)));
                let P1 = statement.A * randomness - statement.C * trapdoor.0;
                let P2 = statement.B * randomness - statement.D * trapdoor.0;
                let proof = Self {
                    C1: (params.$crs_gen * randomness).into_affine(),
                    C2: (crs.H * randomness).into_affine(),
                    P1: P1.into_affine(),
                    P2: P2.into_affine(),
                };
                end_timer!(sim_time);
                proof
            }
        }
    };
}

impl_simulator!(CrsG2, StatementG1, ProofG1, g2);
impl_simulator!(CrsG1, StatementG2, ProofG2, g1);
