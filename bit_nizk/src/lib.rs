#![cfg_attr(not(feature = "std"), no_std)]
#![allow(non_snake_case)]

//! # NIZK proofs for encrypted bits
//!
//! Non-interactive zero-knowledge proofs over a bilinear group that an exponential Elgamal ciphertext
//! `(C1, C2) = (g1*r, pk*r + g1*b)` encrypts a bit `b`.
//!
//! The building block is a proof for the relation `C = A*s, D = B*s` over a statement `(A, B, C, D)`. The
//! proof is made with a common reference string `(H, U1, U2)` in the other group and is checked with four
//! pairing-product equations. It comes in two mirrored forms, [`proof::ProofG1`] for statements in G1 and
//! [`proof::ProofG2`] for statements in G2. A CRS created in simulation mode comes with a trapdoor that lets
//! [`simulator`] create proofs, which the verifier accepts, for any statement.
//!
//! [`bit_proof::BitProof`] is a disjunctive proof that the ciphertext encrypts 0 or 1 without revealing which.
//! The prover creates a CRS per possible value with a shared `H`: the one for the encrypted value in real mode
//! and the other in simulation mode. It proves the real branch with the encryption randomness, simulates the
//! other branch and proves, under a CRS held by the verifier, that the sum of both branch CRSs is a simulation
//! mode CRS shifted by the generator. So the offsets of `U2` from `H*a2` in the two branch CRSs sum to the
//! generator, at least one of them is non-zero and the proof for that branch needs a witness.
//! [`bit_proof::OneSidedBitProof`] proves that the ciphertext encrypts a given value.

extern crate alloc;

pub mod bit_proof;
pub mod crs;
pub mod encryption;
pub mod error;
pub mod proof;
pub mod setup;
pub mod simulator;


pub type Result<T> = core::result::Result<T, error::NizkError>;
