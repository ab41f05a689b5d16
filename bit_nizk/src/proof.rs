//! Proof that a statement `(A, B, C, D)` satisfies `C = A*s` and `D = B*s` for a witness `s`, under a CRS
//! `(H, U1, U2)` from the other group. With `g` the generator of the CRS's group, the prover picks a random `r`
//! and outputs
//!
//! `C1 = U1*s + g*r`, `C2 = U2*s + H*r`, `P1 = A*r`, `P2 = B*r`
//!
//! and the verifier checks
//!
//! 1. `e(C, U1) * e(P1, g) == e(A, C1)`
//! 2. `e(C, U2) * e(P1, H) == e(A, C2)`
//! 3. `e(D, U1) * e(P2, g) == e(B, C1)`
//! 4. `e(D, U2) * e(P2, H) == e(B, C2)`
//!
//! Each equation is checked with one multi-pairing. [`ProofG1`] is for statements in G1 with the CRS and `C1, C2` in G2,
//! [`ProofG2`] is the mirrored form.

use crate::{
    crs::{CrsG1, CrsG2},
    error::NizkError,
    setup::SetupParams,
};
use ark_ec::{pairing::Pairing, AffineRepr, CurveGroup};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::{end_timer, rand::RngCore, start_timer, vec::Vec, UniformRand};
use pairing_utils::{
    accumulate_g1_g2, accumulate_g2_g1, join, pairing_check::PairingProductAccumulator,
    serde_utils::ArkObjectBytes,
};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

macro_rules! impl_proof_system {
    (
        $(#[$statement_doc:meta])*
        $statement: ident,
        $(#[$proof_doc:meta])*
        $proof: ident, $crs: ident, $statement_group: path, $crs_group: path, $statement_gen: ident, $crs_gen: ident, $accumulate: ident
    ) => {
        $(#[$statement_doc])*
        #[serde_as]
        #[derive(
            Clone, PartialEq, Eq, Debug, CanonicalSerialize, CanonicalDeserialize, Serialize, Deserialize,
        )]
        pub struct $statement<E: Pairing> {
            #[serde_as(as = "ArkObjectBytes")]
            pub A: $statement_group,
            #[serde_as(as = "ArkObjectBytes")]
            pub B: $statement_group,
            #[serde_as(as = "ArkObjectBytes")]
            pub C: $statement_group,
            #[serde_as(as = "ArkObjectBytes")]
            pub D: $statement_group,
        }

        $(#[$proof_doc])*
        #[serde_as]
        #[derive(
            Clone, PartialEq, Eq, Debug, CanonicalSerialize, CanonicalDeserialize, Serialize, Deserialize,
        )]
        pub struct $proof<E: Pairing> {
            #[serde_as(as = "ArkObjectBytes")]
            pub C1: $crs_group,
            #[serde_as(as = "ArkObjectBytes")]
            pub C2: $crs_group,
            #[serde_as(as = "ArkObjectBytes")]
            pub P1: $statement_group,
            #[serde_as(as = "ArkObjectBytes")]
            pub P2: $statement_group,
        }

        impl<E: Pairing> $statement<E> {
            pub fn new(
                A: $statement_group,
                B: $statement_group,
                C: $statement_group,
                D: $statement_group,
            ) -> Self {
                Self { A, B, C, D }
            }

            /// Statement `(A, B, A*s, B*s)`
            pub fn from_witness(
                A: &$statement_group,
                B: &$statement_group,
                witness: &E::ScalarField,
            ) -> Self {
                Self {
                    A: *A,
                    B: *B,
                    C: (*A * witness).into_affine(),
                    D: (*B * witness).into_affine(),
                }
            }

            /// A random DDH tuple `(g*a, g*b, g*a*s, g*b*s)`. Returns the statement and its witness `s`.
            pub fn random_ddh<R: RngCore>(
                rng: &mut R,
                params: &SetupParams<E>,
            ) -> (Self, E::ScalarField) {
                let a = E::ScalarField::rand(rng);
                let b = E::ScalarField::rand(rng);
                let s = E::ScalarField::rand(rng);
                let A = (params.$statement_gen * a).into_affine();
                let B = (params.$statement_gen * b).into_affine();
                (Self::from_witness(&A, &B, &s), s)
            }

            /// A tuple of 4 random elements. It has a witness only with negligible probability.
            pub fn random<R: RngCore>(rng: &mut R, params: &SetupParams<E>) -> Self {
                let A = (params.$statement_gen * E::ScalarField::rand(rng)).into_affine();
                let B = (params.$statement_gen * E::ScalarField::rand(rng)).into_affine();
                let C = (params.$statement_gen * E::ScalarField::rand(rng)).into_affine();
                let D = (params.$statement_gen * E::ScalarField::rand(rng)).into_affine();
                Self { A, B, C, D }
            }
        }

        impl<E: Pairing> $proof<E> {
            pub fn new<R: RngCore>(
                rng: &mut R,
                crs: &$crs<E>,
                A: &$statement_group,
                B: &$statement_group,
                witness: &E::ScalarField,
                params: &SetupParams<E>,
            ) -> Self {
                let r = E::ScalarField::rand(rng);
                Self::new_given_randomness(crs, A, B, witness, &r, params)
            }

            /// Create the proof using the given randomness. The randomness must not be reused.
            pub fn new_given_randomness(
                crs: &$crs<E>,
                A: &$statement_group,
                B: &$statement_group,
                witness: &E::ScalarField,
                randomness: &E::ScalarField,
                params: &SetupParams<E>,
            ) -> Self {
                let prove_time = start_timer!(|| concat!("Prove ", stringify!($proof)));
                let C1 = crs.U1 * witness + params.$crs_gen * randomness;
                let C2 = crs.U2 * witness + crs.H * randomness;
                let proof = Self {
                    C1: C1.into_affine(),
                    C2: C2.into_affine(),
                    P1: (*A * randomness).into_affine(),
                    P2: (*B * randomness).into_affine(),
                };
                end_timer!(prove_time);
                proof
            }

            /// Evaluates all 4 equations and returns the result of each
            pub fn check_equations(
                &self,
                crs: &$crs<E>,
                statement: &$statement<E>,
                params: &SetupParams<E>,
            ) -> [bool; 4] {
                let g = params.$crs_gen;
                let (e1, e2, e3, e4) = join!(
                    Self::check_equation(&statement.C, &crs.U1, &self.P1, &g, &statement.A, &self.C1),
                    Self::check_equation(&statement.C, &crs.U2, &self.P1, &crs.H, &statement.A, &self.C2),
                    Self::check_equation(&statement.D, &crs.U1, &self.P2, &g, &statement.B, &self.C1),
                    Self::check_equation(&statement.D, &crs.U2, &self.P2, &crs.H, &statement.B, &self.C2)
                );
                [e1, e2, e3, e4]
            }

            /// Checks the 4 equations, stopping at the first that fails
            pub fn verify(
                &self,
                crs: &$crs<E>,
                statement: &$statement<E>,
                params: &SetupParams<E>,
            ) -> Result<(), NizkError> {
                let verify_time = start_timer!(|| concat!("Verify ", stringify!($proof)));
                let g = params.$crs_gen;
                let valid =
                    Self::check_equation(&statement.C, &crs.U1, &self.P1, &g, &statement.A, &self.C1)
                        && Self::check_equation(&statement.C, &crs.U2, &self.P1, &crs.H, &statement.A, &self.C2)
                        && Self::check_equation(&statement.D, &crs.U1, &self.P2, &g, &statement.B, &self.C1)
                        && Self::check_equation(&statement.D, &crs.U2, &self.P2, &crs.H, &statement.B, &self.C2);
                end_timer!(verify_time);
                if !valid {
                    return Err(NizkError::InvalidProof);
                }
                Ok(())
            }

            /// Checks `e(x, u) * e(p, v) == e(y, z)` as `e(x, u) * e(p, v) * e(y, -z) == 1`
            fn check_equation(
                x: &$statement_group,
                u: &$crs_group,
                p: &$statement_group,
                v: &$crs_group,
                y: &$statement_group,
                z: &$crs_group,
            ) -> bool {
                let mut pairing_check = PairingProductAccumulator::<E>::with_capacity(3);
                $accumulate!(pairing_check, *x, *u);
                $accumulate!(pairing_check, *p, *v);
                $accumulate!(pairing_check, *y, -z.into_group());
                pairing_check.is_identity()
            }
        }
    };
}

impl_proof_system!(
    /// Statement with all elements in G1
    StatementG1,
    /// Proof for a statement in G1 under a CRS in G2
    ProofG1, CrsG2, E::G1Affine, E::G2Affine, g1, g2, accumulate_g1_g2
);

impl_proof_system!(
    /// Statement with all elements in G2
    StatementG2,
    /// Proof for a statement in G2 under a CRS in G1
    ProofG2, CrsG1, E::G2Affine, E::G1Affine, g2, g1, accumulate_g2_g1
);

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bls12_381::{Bls12_381, Fr};
    use ark_std::rand::{rngs::StdRng, SeedableRng};
    use test_utils::test_serialization;

    #[test]
    fn proof_for_ddh_tuple() {
        let mut rng = StdRng::seed_from_u64(0u64);
        let params = SetupParams::<Bls12_381>::new_standard();

        macro_rules! check {
            ($statement: ident, $proof: ident, $crs: ident, $size: expr) => {
                let crs = $crs::<Bls12_381>::new(&mut rng, &params);
                let (statement, s) = $statement::<Bls12_381>::random_ddh(&mut rng, &params);
                let proof = $proof::new(&mut rng, &crs, &statement.A, &statement.B, &s, &params);
                assert_eq!(proof.check_equations(&crs, &statement, &params), [true; 4]);
                proof.verify(&crs, &statement, &params).unwrap();
                test_serialization!($statement<Bls12_381>, statement);
                test_serialization!($proof<Bls12_381>, proof, $size);

                // Many proofs for the same CRS
                for _ in 0..3 {
                    let (statement, s) = $statement::<Bls12_381>::random_ddh(&mut rng, &params);
                    let proof =
                        $proof::new(&mut rng, &crs, &statement.A, &statement.B, &s, &params);
                    proof.verify(&crs, &statement, &params).unwrap();
                }

                // Deterministic given the randomness
                let r = Fr::rand(&mut rng);
                assert_eq!(
                    $proof::new_given_randomness(&crs, &statement.A, &statement.B, &s, &r, &params),
                    $proof::new_given_randomness(&crs, &statement.A, &statement.B, &s, &r, &params)
                );

                // Wrong witness
                let wrong = s + Fr::from(1u64);
                let proof = $proof::new(&mut rng, &crs, &statement.A, &statement.B, &wrong, &params);
                assert!(matches!(
                    proof.verify(&crs, &statement, &params),
                    Err(NizkError::InvalidProof)
                ));
                assert_eq!(
                    proof.check_equations(&crs, &statement, &params),
                    [false; 4]
                );

                // Statement where only C is consistent with the witness
                let mut statement_1 = statement.clone();
                statement_1.D = (statement.B * wrong).into_affine();
                let proof = $proof::new(&mut rng, &crs, &statement.A, &statement.B, &s, &params);
                assert_eq!(
                    proof.check_equations(&crs, &statement_1, &params),
                    [true, true, false, false]
                );
                assert!(proof.verify(&crs, &statement_1, &params).is_err());

                // Proof verified with a different CRS
                let crs_1 = $crs::<Bls12_381>::new(&mut rng, &params);
                assert!(proof.verify(&crs_1, &statement, &params).is_err());

                // A random tuple has no witness
                let random = $statement::<Bls12_381>::random(&mut rng, &params);
                let proof = $proof::new(&mut rng, &crs, &random.A, &random.B, &s, &params);
                assert!(proof.verify(&crs, &random, &params).is_err());
            };
        }

        check!(StatementG1, ProofG1, CrsG2, 288);
        check!(StatementG2, ProofG2, CrsG1, 288);
    }

    #[test]
    fn statement_from_witness() {
        let mut rng = StdRng::seed_from_u64(0u64);
        let params = SetupParams::<Bls12_381>::new_standard();
        let s = Fr::rand(&mut rng);
        let A = (params.g1 * Fr::rand(&mut rng)).into_affine();
        let B = (params.g1 * Fr::rand(&mut rng)).into_affine();
        let statement = StatementG1::<Bls12_381>::from_witness(&A, &B, &s);
        assert_eq!(
            statement,
            StatementG1::new(A, B, (A * s).into_affine(), (B * s).into_affine())
        );
        let (statement, s) = StatementG2::<Bls12_381>::random_ddh(&mut rng, &params);
        assert_eq!(
            statement,
            StatementG2::from_witness(&statement.A, &statement.B, &s)
        );
    }
}
