//! Benchmarks for the Vigenère core.
//!
//! Measures encryption and decryption throughput, key-length scaling,
//! frequency counting, and the parallel key comparison.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use vigenere::{Alphabet, Codec, FrequencyAnalyzer, KeyAnalyzer, Vigenere, DEMO_KEYS};

/// Sample paragraph repeated to build the benchmark message.
const SAMPLE: &str = "It was the best of times, it was the worst of times, it was the age \
                      of wisdom, it was the age of foolishness, it was the epoch of belief.";

/// Number of sample repetitions in the benchmark message.
const REPEAT: usize = 64;

fn message(alphabet: &Alphabet) -> Vec<usize> {
    Codec::new(alphabet).encode_folded(&SAMPLE.repeat(REPEAT))
}

/// Benchmarks `Vigenere::encrypt()` with the `LEMON` key.
fn bench_encrypt(c: &mut Criterion) {
    let alphabet = Alphabet::default();
    let engine = Vigenere::new(&alphabet);
    let plain = message(&alphabet);
    let key = Codec::new(&alphabet).encode("LEMON");

    let mut group = c.benchmark_group("encrypt");
    group.throughput(Throughput::Elements(plain.len() as u64));
    group.bench_function("lemon", |b| {
        b.iter(|| engine.encrypt(black_box(&plain), black_box(&key)).unwrap());
    });
    group.finish();
}

/// Benchmarks `Vigenere::decrypt()` with the `LEMON` key.
fn bench_decrypt(c: &mut Criterion) {
    let alphabet = Alphabet::default();
    let engine = Vigenere::new(&alphabet);
    let key = Codec::new(&alphabet).encode("LEMON");
    let cipher = engine.encrypt(&message(&alphabet), &key).unwrap();

    let mut group = c.benchmark_group("decrypt");
    group.throughput(Throughput::Elements(cipher.len() as u64));
    group.bench_function("lemon", |b| {
        b.iter(|| engine.decrypt(black_box(&cipher), black_box(&key)).unwrap());
    });
    group.finish();
}

/// Benchmarks `encrypt()` across key lengths, from a Caesar shift up to a
/// key as long as a sentence.
fn bench_key_length_scaling(c: &mut Criterion) {
    let alphabet = Alphabet::default();
    let engine = Vigenere::new(&alphabet);
    let plain = message(&alphabet);
    let key_lengths: &[usize] = &[1, 8, 64];

    let mut group = c.benchmark_group("encrypt_key_length");
    group.throughput(Throughput::Elements(plain.len() as u64));
    for &len in key_lengths {
        let key: Vec<usize> = (0..len).map(|i| (i * 7 + 3) % alphabet.len()).collect();
        group.bench_with_input(BenchmarkId::from_parameter(len), &key, |b, key| {
            b.iter(|| engine.encrypt(black_box(&plain), black_box(key)).unwrap());
        });
    }
    group.finish();
}

/// Benchmarks `FrequencyAnalyzer::count_symbols()`.
fn bench_count_symbols(c: &mut Criterion) {
    let alphabet = Alphabet::default();
    let analyzer = FrequencyAnalyzer::new(&alphabet);
    let plain = message(&alphabet);

    let mut group = c.benchmark_group("count_symbols");
    group.throughput(Throughput::Elements(plain.len() as u64));
    group.bench_function("sample", |b| {
        b.iter(|| analyzer.count_symbols(black_box(&plain)).unwrap());
    });
    group.finish();
}

/// Benchmarks `KeyAnalyzer::compare_keys()` over the demo key set.
fn bench_compare_keys(c: &mut Criterion) {
    let alphabet = Alphabet::default();
    let analyzer = KeyAnalyzer::new(&alphabet);
    let plain = message(&alphabet);

    c.bench_function("compare_demo_keys", |b| {
        b.iter(|| analyzer.compare_keys(black_box(&plain), &DEMO_KEYS).unwrap());
    });
}

criterion_group!(
    benches,
    bench_encrypt,
    bench_decrypt,
    bench_key_length_scaling,
    bench_count_symbols,
    bench_compare_keys,
);
criterion_main!(benches);
