use ark_bls12_381::{Bls12_381, Fr};
use ark_std::rand::RngCore;
use bit_nizk::{
    bit_proof::BitProofKey,
    encryption::{keygen, Ciphertext},
    setup::SetupParams,
};

/// Ciphertexts of alternating bits with their randomness, under a fresh key
pub fn encrypted_bits<R: RngCore>(
    rng: &mut R,
    count: usize,
    params: &SetupParams<Bls12_381>,
) -> (BitProofKey<Bls12_381>, Vec<(Ciphertext<Bls12_381>, Fr, bool)>) {
    let (_, pk) = keygen(rng, params);
    let key = BitProofKey::new(rng, pk, params);
    let cts = (0..count)
        .map(|i| {
            let bit = i % 2 == 1;
            let (ct, r) = Ciphertext::new(rng, bit, &key.pk, params);
            (ct, r, bit)
        })
        .collect();
    (key, cts)
}
