#![cfg_attr(not(feature = "std"), no_std)]

//! Common code for the pairing based crates: hashing to curve, a streaming accumulator for
//! pairing-product equations, canonical byte encoding and serde adapters for arkworks objects.

extern crate alloc;

#[macro_use]
pub mod macros;
pub mod encoding;
pub mod hashing_utils;
pub mod pairing_check;
pub mod serde_utils;
pub mod status;
