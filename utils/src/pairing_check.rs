use alloc::vec::Vec;
use ark_ec::{
    pairing::{MillerLoopOutput, Pairing, PairingOutput},
    AffineRepr,
};
use ark_std::{ops::Neg, Zero};

/// Accumulates terms of a pairing-product equation of the form `e(A1, B1)*e(A2, B2)*... == 1` and
/// evaluates them with a single multi-miller loop followed by a single final exponentiation.
/// An equation `e(A1, B1) == e(C1, D1)` is added as the terms `e(A1, B1)` and `e(-C1, D1)`.
///
/// The accumulator is consumed on evaluation so one instance serves exactly one check.
#[derive(Debug, Clone)]
pub struct PairingProductAccumulator<E: Pairing> {
    g1: Vec<E::G1Prepared>,
    g2: Vec<E::G2Prepared>,
}

impl<E: Pairing> Default for PairingProductAccumulator<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Pairing> PairingProductAccumulator<E> {
    pub fn new() -> Self {
        Self {
            g1: Vec::new(),
            g2: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            g1: Vec::with_capacity(capacity),
            g2: Vec::with_capacity(capacity),
        }
    }

    /// Add the term `e(a, b)`
    pub fn add_term(&mut self, a: impl Into<E::G1Prepared>, b: impl Into<E::G2Prepared>) {
        self.g1.push(a.into());
        self.g2.push(b.into());
    }

    /// Add the term `e(a, b)^-1`, i.e. `e(-a, b)`
    pub fn add_inverse_term(&mut self, a: &E::G1Affine, b: impl Into<E::G2Prepared>) {
        self.add_term(E::G1Prepared::from(a.into_group().neg()), b);
    }

    /// Number of terms added so far
    pub fn len(&self) -> usize {
        self.g1.len()
    }

    pub fn is_empty(&self) -> bool {
        self.g1.is_empty()
    }

    /// Run the miller loop over all accumulated terms
    pub fn miller_loop(self) -> MillerLoopOutput<E> {
        E::multi_miller_loop(self.g1, self.g2)
    }

    /// Run the miller loop and the final exponentiation. Returns `None` only if the final
    /// exponentiation fails which does not happen for valid miller loop outputs.
    pub fn evaluate(self) -> Option<PairingOutput<E>> {
        E::final_exponentiation(self.miller_loop())
    }

    /// Returns true if the product of all accumulated terms is the identity of the target group.
    pub fn is_identity(self) -> bool {
        self.evaluate().map(|out| out.is_zero()).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bls12_381::{Bls12_381, Fr, G1Affine, G2Affine};
    use ark_ec::CurveGroup;
    use ark_std::{
        rand::{rngs::StdRng, SeedableRng},
        UniformRand,
    };

    #[test]
    fn accumulate_and_check() {
        let mut rng = StdRng::seed_from_u64(0u64);
        let g1 = G1Affine::generator();
        let g2 = G2Affine::generator();
        let x = Fr::rand(&mut rng);
        let y = Fr::rand(&mut rng);

        // e(g1*x, g2*y) == e(g1*(x*y), g2)
        let mut acc = PairingProductAccumulator::<Bls12_381>::new();
        accumulate_g1_g2!(acc, (g1 * x).into_affine(), (g2 * y).into_affine());
        acc.add_inverse_term(&(g1 * (x * y)).into_affine(), g2);
        assert_eq!(acc.len(), 2);
        assert!(acc.clone().is_identity());
        assert_eq!(acc.evaluate(), Some(PairingOutput::zero()));

        // Same check with arguments given in the (G2, G1) order
        let mut acc = PairingProductAccumulator::<Bls12_381>::with_capacity(2);
        accumulate_g2_g1!(acc, (g2 * y).into_affine(), (g1 * x).into_affine());
        acc.add_inverse_term(&(g1 * (x * y)).into_affine(), g2);
        assert!(acc.is_identity());

        // e(g1*x, g2*y) != e(g1*(x*y + 1), g2)
        let mut acc = PairingProductAccumulator::<Bls12_381>::new();
        acc.add_term((g1 * x).into_affine(), (g2 * y).into_affine());
        acc.add_inverse_term(&(g1 * (x * y + Fr::from(1u64))).into_affine(), g2);
        assert!(!acc.is_identity());

        // Miller loop followed by final exponentiation is the pairing
        let mut acc = PairingProductAccumulator::<Bls12_381>::new();
        assert!(acc.is_empty());
        acc.add_term(g1, g2);
        let out = Bls12_381::final_exponentiation(acc.miller_loop()).unwrap();
        assert_eq!(out, Bls12_381::pairing(g1, g2));
    }
}
