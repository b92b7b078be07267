// Chain benchmarks for linkchain.
//
// Covers block serialization and digesting, append throughput, and
// validation over chains of increasing length.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use linkchain::{validate, Block, Chain, Digest};

/// Builds a clean chain of `n` blocks with fixed timestamps.
fn build_chain(n: usize) -> Chain {
    let mut chain = Chain::new();
    for i in 0..n {
        chain.append(Block::with_timestamp(format!("payload {}", i), i as i64));
    }
    chain
}

fn bench_block_digest(c: &mut Criterion) {
    let block = Block::with_timestamp("a typical payload of modest size", 1_700_000_000_000_000);

    c.bench_function("block/serialize", |b| {
        b.iter(|| black_box(&block).serialize());
    });

    c.bench_function("block/recompute_digest", |b| {
        b.iter(|| black_box(&block).recompute_digest());
    });
}

fn bench_append(c: &mut Criterion) {
    c.bench_function("chain/append", |b| {
        b.iter_with_setup(
            || (build_chain(16), Block::with_timestamp("next", 99)),
            |(mut chain, block)| {
                chain.append(block);
            },
        );
    });

    c.bench_function("chain/append_with_hook", |b| {
        b.iter_with_setup(
            || (build_chain(16), Block::with_timestamp("next", 99)),
            |(mut chain, block)| {
                chain.append_with(block, |blk| blk.previous_digest = Digest::filled(0xFF));
            },
        );
    });
}

fn bench_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("chain/validate");

    for len in [10usize, 100, 1_000, 10_000] {
        let chain = build_chain(len);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &chain, |b, chain| {
            b.iter(|| validate(black_box(chain)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_block_digest, bench_append, bench_validate);
criterion_main!(benches);
