use alloc::vec;
use ark_ec::AffineRepr;
use digest::{Digest, ExtendableOutput, Update, XofReader};

/// Hash bytes to a point on the curve using an extendable-output function. The XOF is fed with
/// `bytes` and squeezed for as many bytes as the compressed encoding of a point of the group. If those
/// don't describe a point, a counter is appended to `bytes` and the process is repeated. The result has
/// its cofactor cleared so it lies in the prime order subgroup. Returns as Projective coordinates.
/// This is vulnerable to timing attack and is only used when input is public like messages
/// being signed.
pub fn projective_group_elem_from_xof<G: AffineRepr, X: Default + Update + ExtendableOutput>(
    bytes: &[u8],
) -> G::Group {
    let mut out = vec![0u8; G::zero().compressed_size()];
    squeeze::<X>(bytes, &mut out);
    let mut j = 1u64;
    loop {
        if let Some(g) = G::from_random_bytes(&out) {
            return g.mul_by_cofactor_to_group();
        }
        squeeze::<X>(
            &concat_slices!(bytes, b"-attempt-", j.to_le_bytes()),
            &mut out,
        );
        j += 1;
    }
}

/// Same as `projective_group_elem_from_xof` but returns as Affine coordinates.
pub fn affine_group_elem_from_xof<G: AffineRepr, X: Default + Update + ExtendableOutput>(
    bytes: &[u8],
) -> G {
    projective_group_elem_from_xof::<G, X>(bytes).into()
}

/// Hash bytes to a point on the curve. Returns as Projective coordinates. This is vulnerable to timing attack and is only used when input
/// is public anyway like when generating setup parameters.
pub fn projective_group_elem_from_try_and_incr<G: AffineRepr, D: Digest>(bytes: &[u8]) -> G::Group {
    let mut hash = D::digest(bytes);
    let mut j = 1u64;
    loop {
        if let Some(g) = G::from_random_bytes(&hash) {
            return g.mul_by_cofactor_to_group();
        }
        hash = D::digest(&concat_slices!(bytes, b"-attempt-", j.to_le_bytes()));
        j += 1;
    }
}

/// Hash bytes to a point on the curve. Returns as Affine coordinates. This is vulnerable to timing attack and is only used when input
/// is public anyway like when generating setup parameters.
pub fn affine_group_elem_from_try_and_incr<G: AffineRepr, D: Digest>(bytes: &[u8]) -> G {
    projective_group_elem_from_try_and_incr::<G, D>(bytes).into()
}

fn squeeze<X: Default + Update + ExtendableOutput>(bytes: &[u8], out: &mut [u8]) {
    let mut hasher = X::default();
    Update::update(&mut hasher, bytes);
    hasher.finalize_xof().read(out);
}
