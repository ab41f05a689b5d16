use ark_bls12_381::Bls12_381;
use ark_std::rand::{rngs::StdRng, SeedableRng};
use benches::encrypted_bits;
use bit_nizk::{
    bit_proof::{BitProof, BitProofKey, OneSidedBitProof},
    encryption::keygen,
    setup::SetupParams,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bit_proof_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0u64);
    let params = SetupParams::<Bls12_381>::new_standard();
    let (key, cts) = encrypted_bits(&mut rng, 2, &params);

    for (ct, r, bit) in &cts {
        c.bench_function(&format!("Prove bit {}", *bit as u8), |b| {
            b.iter(|| {
                BitProof::new(
                    &mut rng,
                    black_box(&key),
                    black_box(ct),
                    black_box(r),
                    *bit,
                    black_box(&params),
                )
                .unwrap()
            })
        });

        let proof = BitProof::new(&mut rng, &key, ct, r, *bit, &params).unwrap();
        c.bench_function(&format!("Verify bit {}", *bit as u8), |b| {
            b.iter(|| {
                proof
                    .verify(black_box(&key), black_box(ct), black_box(&params))
                    .unwrap()
            })
        });

        let proof = OneSidedBitProof::new(&mut rng, &key, r, &params);
        c.bench_function(&format!("Verify one-sided bit {}", *bit as u8), |b| {
            b.iter(|| {
                proof
                    .verify(black_box(&key), black_box(ct), *bit, black_box(&params))
                    .unwrap()
            })
        });
    }

    let (_, pk) = keygen(&mut rng, &params);
    let (sim_key, td) = BitProofKey::new_with_trapdoor(&mut rng, pk, &params);
    let (ct, _, _) = &cts[0];
    c.bench_function("Simulate bit proof", |b| {
        b.iter(|| {
            BitProof::simulate(
                &mut rng,
                black_box(&sim_key),
                black_box(ct),
                black_box(&td),
                black_box(&params),
            )
            .unwrap()
        })
    });
}

criterion_group!(benches, bit_proof_benchmark);
criterion_main!(benches);
