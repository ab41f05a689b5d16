//! Proofs that a ciphertext `(C1, C2)` under public key `pk` encrypts a bit.
//!
//! The ciphertext encrypts value `v` iff the statement `(g1, pk, C1, C2 - g1*v)` has the encryption randomness as
//! witness. [`BitProof`] proves this for `v = 0` or `v = 1` without revealing which. It holds a CRS per value,
//! both with the same `H`, and their sum, along with a proof per value under that value's CRS. The CRS for the
//! encrypted value is in real mode and its proof is real. The other CRS is in simulation mode and its proof is
//! simulated. A proof under the verifier's [`BitProofKey`] shows that `(g2, H, U1, U2 - g2)` of the summed CRS is a
//! DDH tuple. So the offsets of `U2` from `H*a2` in the two CRSs sum to `g2`, at least one of them is non-zero
//! and the proof under that CRS needs a witness.
//!
//! [`OneSidedBitProof`] proves that the ciphertext encrypts a given value with a single real mode CRS.
//!
//! Both can be simulated when the key was created with a trapdoor.

use crate::{
    crs::{CrsG1, CrsG2, Trapdoor},
    encryption::{Ciphertext, PublicKey},
    error::NizkError,
    proof::{ProofG1, ProofG2, StatementG1, StatementG2},
    setup::SetupParams,
};
use ark_ec::{pairing::Pairing, CurveGroup};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::{end_timer, rand::RngCore, start_timer, vec::Vec, UniformRand};
use pairing_utils::{
    encoding::{from_bytes_compressed, to_bytes_compressed},
    join,
};
use serde::{Deserialize, Serialize};

/// Public key of the encryption and the CRS under which provers show that their combined CRS is well formed.
/// Created by the verifier or a trusted party.
#[derive(
    Clone, PartialEq, Eq, Debug, CanonicalSerialize, CanonicalDeserialize, Serialize, Deserialize,
)]
#[serde(bound = "")]
pub struct BitProofKey<E: Pairing> {
    pub pk: PublicKey<E>,
    pub crs: CrsG1<E>,
}

/// Proof that a ciphertext encrypts 0 or 1
#[derive(
    Clone, PartialEq, Eq, Debug, CanonicalSerialize, CanonicalDeserialize, Serialize, Deserialize,
)]
#[serde(bound = "")]
pub struct BitProof<E: Pairing> {
    /// CRS for the branch proving that the ciphertext encrypts 0
    pub crs_0: CrsG2<E>,
    /// CRS for the branch proving that the ciphertext encrypts 1
    pub crs_1: CrsG2<E>,
    /// `crs_0 + crs_1`
    pub crs: CrsG2<E>,
    /// Proof that `crs` is a real mode CRS
    pub crs_proof: ProofG2<E>,
    pub proof_0: ProofG1<E>,
    pub proof_1: ProofG1<E>,
}

/// Proof that a ciphertext encrypts a specific value
#[derive(
    Clone, PartialEq, Eq, Debug, CanonicalSerialize, CanonicalDeserialize, Serialize, Deserialize,
)]
#[serde(bound = "")]
pub struct OneSidedBitProof<E: Pairing> {
    pub crs: CrsG2<E>,
    /// Proof that `crs` is a real mode CRS
    pub crs_proof: ProofG2<E>,
    pub proof: ProofG1<E>,
}

impl<E: Pairing> BitProofKey<E> {
    pub fn new<R: RngCore>(rng: &mut R, pk: PublicKey<E>, params: &SetupParams<E>) -> Self {
        Self {
            pk,
            crs: CrsG1::new(rng, params),
        }
    }

    /// Key whose CRS is in simulation mode. Bit proofs can then be simulated with the returned trapdoor.
    pub fn new_with_trapdoor<R: RngCore>(
        rng: &mut R,
        pk: PublicKey<E>,
        params: &SetupParams<E>,
    ) -> (Self, Trapdoor<E::ScalarField>) {
        let (crs, td) = CrsG1::new_with_trapdoor(rng, params);
        (Self { pk, crs }, td)
    }

    /// Statement `(g1, pk, C1, C2 - g1*value)`, which has the encryption randomness as witness iff the ciphertext
    /// encrypts `value`
    pub fn ciphertext_statement(
        &self,
        ciphertext: &Ciphertext<E>,
        value: bool,
        params: &SetupParams<E>,
    ) -> StatementG1<E> {
        StatementG1::new(
            params.g1,
            self.pk.0,
            ciphertext.C1,
            ciphertext.shifted_C2(value, params),
        )
    }
}

/// Statement `(g2, H, U1, U2 - g2)` which is a DDH tuple iff `crs` is in real mode
fn crs_statement<E: Pairing>(crs: &CrsG2<E>, params: &SetupParams<E>) -> StatementG2<E> {
    StatementG2::new(params.g2, crs.H, crs.U1, crs.U2_minus_gen(params))
}

impl<E: Pairing> BitProof<E> {
    /// Prove that `ciphertext` encrypts `bit` with `randomness`, without revealing `bit`
    pub fn new<R: RngCore>(
        rng: &mut R,
        key: &BitProofKey<E>,
        ciphertext: &Ciphertext<E>,
        randomness: &E::ScalarField,
        bit: bool,
        params: &SetupParams<E>,
    ) -> Result<Self, NizkError> {
        let prove_time = start_timer!(|| "Prove bit");
        let a1 = E::ScalarField::rand(rng);
        let a2 = E::ScalarField::rand(rng);
        let a3 = E::ScalarField::rand(rng);
        let H = (params.g2 * a1).into_affine();
        let real_crs = CrsG2::new_real_given_secret(&H, &a2, params);
        let sim_crs = CrsG2::new_simulated_given_secret(&H, &a3, params);
        let crs = real_crs.combine(&sim_crs)?;

        // crs is (H, g2*(a2+a3), H*(a2+a3) + g2)
        let rm = E::ScalarField::rand(rng);
        let crs_proof = ProofG2::new_given_randomness(
            &key.crs,
            &params.g2,
            &H,
            &(a2 + a3),
            &rm,
            params,
        );

        let real_proof = ProofG1::new(rng, &real_crs, &params.g1, &key.pk.0, randomness, params);
        let sim_proof = ProofG1::simulate(
            rng,
            &sim_crs,
            &key.ciphertext_statement(ciphertext, !bit, params),
            &Trapdoor(a3),
            params,
        );
        end_timer!(prove_time);

        let (crs_0, proof_0, crs_1, proof_1) = if bit {
            (sim_crs, sim_proof, real_crs, real_proof)
        } else {
            (real_crs, real_proof, sim_crs, sim_proof)
        };
        Ok(Self {
            crs_0,
            crs_1,
            crs,
            crs_proof,
            proof_0,
            proof_1,
        })
    }

    /// Simulate a proof for any ciphertext using the trapdoor of `key`
    pub fn simulate<R: RngCore>(
        rng: &mut R,
        key: &BitProofKey<E>,
        ciphertext: &Ciphertext<E>,
        trapdoor: &Trapdoor<E::ScalarField>,
        params: &SetupParams<E>,
    ) -> Result<Self, NizkError> {
        let sim_time = start_timer!(|| "Simulate bit proof");
        let a1 = E::ScalarField::rand(rng);
        let td_0 = Trapdoor(E::ScalarField::rand(rng));
        let td_1 = Trapdoor(E::ScalarField::rand(rng));
        let H = (params.g2 * a1).into_affine();
        let crs_0 = CrsG2::new_simulated_given_secret(&H, &td_0.0, params);
        let crs_1 = CrsG2::new_simulated_given_secret(&H, &td_1.0, params);
        let crs = crs_0.combine(&crs_1)?;

        let rm = E::ScalarField::rand(rng);
        let crs_proof = ProofG2::simulate_given_randomness(
            &key.crs,
            &crs_statement(&crs, params),
            trapdoor,
            &rm,
            params,
        );
        let proof_0 = ProofG1::simulate(
            rng,
            &crs_0,
            &key.ciphertext_statement(ciphertext, false, params),
            &td_0,
            params,
        );
        let proof_1 = ProofG1::simulate(
            rng,
            &crs_1,
            &key.ciphertext_statement(ciphertext, true, params),
            &td_1,
            params,
        );
        end_timer!(sim_time);
        Ok(Self {
            crs_0,
            crs_1,
            crs,
            crs_proof,
            proof_0,
            proof_1,
        })
    }

    /// Checks that `crs` is the sum of the branch CRSs, then the proof for `crs` and the proofs of both branches.
    /// The last 3 checks run in parallel with the `parallel` feature.
    pub fn verify(
        &self,
        key: &BitProofKey<E>,
        ciphertext: &Ciphertext<E>,
        params: &SetupParams<E>,
    ) -> Result<(), NizkError> {
        let verify_time = start_timer!(|| "Verify bit proof");
        if self.crs_0.combine(&self.crs_1)? != self.crs {
            return Err(NizkError::InvalidCombinedCrs);
        }
        let (crs_res, res_0, res_1) = join!(
            self.crs_proof
                .verify(&key.crs, &crs_statement(&self.crs, params), params)
                .map_err(|_| NizkError::InvalidCrsProof),
            self.proof_0
                .verify(
                    &self.crs_0,
                    &key.ciphertext_statement(ciphertext, false, params),
                    params
                )
                .map_err(|_| NizkError::InvalidBranchProof(0)),
            self.proof_1
                .verify(
                    &self.crs_1,
                    &key.ciphertext_statement(ciphertext, true, params),
                    params
                )
                .map_err(|_| NizkError::InvalidBranchProof(1))
        );
        end_timer!(verify_time);
        crs_res?;
        res_0?;
        res_1
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, NizkError> {
        Ok(from_bytes_compressed(bytes)?)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, NizkError> {
        Ok(to_bytes_compressed(self)?)
    }
}

impl<E: Pairing> OneSidedBitProof<E> {
    /// Prove knowledge of the randomness of the ciphertext. Whether that shows the ciphertext encrypts 0 or 1
    /// depends on the value the verifier checks against.
    pub fn new<R: RngCore>(
        rng: &mut R,
        key: &BitProofKey<E>,
        randomness: &E::ScalarField,
        params: &SetupParams<E>,
    ) -> Self {
        let prove_time = start_timer!(|| "Prove one-sided bit");
        let a1 = E::ScalarField::rand(rng);
        let a2 = E::ScalarField::rand(rng);
        let H = (params.g2 * a1).into_affine();
        let crs = CrsG2::new_real_given_secret(&H, &a2, params);

        let rm = E::ScalarField::rand(rng);
        let crs_proof =
            ProofG2::new_given_randomness(&key.crs, &params.g2, &H, &a2, &rm, params);
        let proof = ProofG1::new(rng, &crs, &params.g1, &key.pk.0, randomness, params);
        end_timer!(prove_time);
        Self {
            crs,
            crs_proof,
            proof,
        }
    }

    /// Simulate a proof that the ciphertext encrypts `value` using the trapdoor of `key`
    pub fn simulate<R: RngCore>(
        rng: &mut R,
        key: &BitProofKey<E>,
        ciphertext: &Ciphertext<E>,
        value: bool,
        trapdoor: &Trapdoor<E::ScalarField>,
        params: &SetupParams<E>,
    ) -> Self {
        let sim_time = start_timer!(|| "Simulate one-sided bit proof");
        let (crs, td) = CrsG2::new_with_trapdoor(rng, params);
        let rm = E::ScalarField::rand(rng);
        let crs_proof = ProofG2::simulate_given_randomness(
            &key.crs,
            &crs_statement(&crs, params),
            trapdoor,
            &rm,
            params,
        );
        let proof = ProofG1::simulate(
            rng,
            &crs,
            &key.ciphertext_statement(ciphertext, value, params),
            &td,
            params,
        );
        end_timer!(sim_time);
        Self {
            crs,
            crs_proof,
            proof,
        }
    }

    /// Checks that the ciphertext encrypts `value`
    pub fn verify(
        &self,
        key: &BitProofKey<E>,
        ciphertext: &Ciphertext<E>,
        value: bool,
        params: &SetupParams<E>,
    ) -> Result<(), NizkError> {
        let verify_time = start_timer!(|| "Verify one-sided bit proof");
        let (crs_res, res) = join!(
            self.crs_proof
                .verify(&key.crs, &crs_statement(&self.crs, params), params)
                .map_err(|_| NizkError::InvalidCrsProof),
            self.proof
                .verify(
                    &self.crs,
                    &key.ciphertext_statement(ciphertext, value, params),
                    params
                )
                .map_err(|_| NizkError::InvalidBranchProof(value as u8))
        );
        end_timer!(verify_time);
        crs_res?;
        res
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, NizkError> {
        Ok(from_bytes_compressed(bytes)?)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, NizkError> {
        Ok(to_bytes_compressed(self)?)
    }
}
