use std::time::Duration;

use rand::{thread_rng, Rng};

use criterion::{
    criterion_group, criterion_main, BenchmarkId, Criterion, SamplingMode, Throughput,
};

use nilsimsa::digest::DIGEST_LEN;
use nilsimsa::{Digest, Nilsimsa};
use nilsimsa_search::DigestJoiner;

const SAMPLE_SIZE: usize = 10;
const WARM_UP_TIME: Duration = Duration::from_secs(5);
const MEASURE_TIME: Duration = Duration::from_secs(10);

const INPUT_LENS: [usize; 3] = [1 << 10, 1 << 16, 1 << 20];
const NUM_DIGESTS: [usize; 3] = [1000, 10000, 30000];
const MAX_DIFFERENCES: [u32; 3] = [8, 24, 64];

fn criterion_digest(c: &mut Criterion) {
    let mut group = c.benchmark_group("digest");
    group.sample_size(SAMPLE_SIZE);
    group.warm_up_time(WARM_UP_TIME);
    group.measurement_time(MEASURE_TIME);
    group.sampling_mode(SamplingMode::Flat);

    let mut rng = thread_rng();
    for &len in &INPUT_LENS {
        let data: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &data, |b, data| {
            let mut hasher = Nilsimsa::new();
            b.iter(|| hasher.digest_data(data));
        });
    }
}

fn criterion_join(c: &mut Criterion) {
    let mut group = c.benchmark_group("join");
    group.sample_size(SAMPLE_SIZE);
    group.warm_up_time(WARM_UP_TIME);
    group.measurement_time(MEASURE_TIME);
    group.sampling_mode(SamplingMode::Flat);

    let mut rng = thread_rng();
    for &num_digests in &NUM_DIGESTS {
        let mut joiner = DigestJoiner::new();
        for _ in 0..num_digests {
            joiner.add(Digest::new(rng.gen::<[u8; DIGEST_LEN]>()));
        }
        for &max_difference in &MAX_DIFFERENCES {
            let bench_name = format!("{num_digests}/{max_difference}");
            group.bench_function(bench_name, |b| {
                b.iter(|| {
                    if joiner.similar_pairs(max_difference).len() == usize::MAX {
                        panic!();
                    }
                });
            });
        }
    }
}

criterion_group!(benches, criterion_digest, criterion_join);
criterion_main!(benches);
