#![cfg_attr(not(feature = "std"), no_std)]

//! # BLS signatures
//!
//! Signatures live in G1 and public keys in G2, as described in the paper [Short signatures from the Weil pairing](https://www.iacr.org/archive/asiacrypt2001/22480516.pdf).
//! The message is hashed to G1 with an extendable-output function and the signature is the hash
//! multiplied by the secret key. Verification checks `e(sig, g2) == e(H(m), pk)` as a single
//! pairing-product equation.
//!
//! Signatures (and public keys) on the same message can be aggregated by adding them. The [`bytes`]
//! module offers the same operations over canonical byte encodings and distinguishes malformed input
//! from a signature that does not verify.

extern crate alloc;

pub mod bytes;
pub mod common;
pub mod error;
pub mod signature;

pub use common::SignatureParams;
pub use error::BlsError;
pub use signature::{Keypair, PublicKeyG2, SecretKey, SignatureG1};
