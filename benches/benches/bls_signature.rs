use ark_bls12_381::Bls12_381;
use ark_std::rand::{rngs::StdRng, RngCore, SeedableRng};
use bls_sig::{Keypair, PublicKeyG2, SignatureG1, SignatureParams};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sha3::Shake256;

fn sign_verify_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0u64);
    let params = SignatureParams::<Bls12_381>::new_standard();
    let keypair = Keypair::<Bls12_381>::generate_using_rng(&mut rng, &params);

    let message_size_range = [32, 256, 1024, 8192];
    let messages_range = message_size_range
        .iter()
        .map(|size| {
            let mut msg = vec![0u8; *size];
            rng.fill_bytes(&mut msg);
            msg
        })
        .collect::<Vec<_>>();

    let mut sign_group = c.benchmark_group("BLS signing");
    for (i, size) in message_size_range.iter().enumerate() {
        sign_group.bench_with_input(BenchmarkId::from_parameter(*size), &i, |b, &i| {
            b.iter(|| {
                SignatureG1::<Bls12_381>::new::<Shake256>(
                    black_box(&messages_range[i]),
                    black_box(&keypair.secret_key),
                )
            });
        });
    }
    sign_group.finish();

    let sigs_range = messages_range
        .iter()
        .map(|m| SignatureG1::<Bls12_381>::new::<Shake256>(m, &keypair.secret_key))
        .collect::<Vec<_>>();

    let mut verify_group = c.benchmark_group("BLS verifying");
    for (i, size) in message_size_range.iter().enumerate() {
        verify_group.bench_with_input(BenchmarkId::from_parameter(*size), &i, |b, &i| {
            b.iter(|| {
                sigs_range[i]
                    .verify::<Shake256>(
                        black_box(&messages_range[i]),
                        black_box(&keypair.public_key),
                        black_box(&params),
                    )
                    .unwrap()
            });
        });
    }
    verify_group.finish();
}

fn aggregate_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0u64);
    let params = SignatureParams::<Bls12_381>::new_standard();
    let message = b"message signed by all";

    let count_range = [2, 8, 32, 128];
    let mut group = c.benchmark_group("BLS aggregate verifying");
    for count in count_range {
        let keypairs = (0..count)
            .map(|_| Keypair::<Bls12_381>::generate_using_rng(&mut rng, &params))
            .collect::<Vec<_>>();
        let sigs = keypairs
            .iter()
            .map(|k| SignatureG1::<Bls12_381>::new::<Shake256>(message, &k.secret_key))
            .collect::<Vec<_>>();
        let pks = keypairs
            .iter()
            .map(|k| k.public_key.clone())
            .collect::<Vec<_>>();
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| {
                let sig = SignatureG1::aggregate(black_box(&sigs)).unwrap();
                let pk = PublicKeyG2::aggregate(black_box(&pks)).unwrap();
                sig.verify::<Shake256>(message, &pk, &params).unwrap()
            });
        });
    }
    group.finish();
}

criterion_group!(benches, sign_verify_benchmark, aggregate_benchmark);
criterion_main!(benches);
