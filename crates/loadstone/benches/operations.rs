// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Benchmarks for cache lookup and load paths.

#![allow(missing_docs, reason = "Benchmark code")]

use std::{convert::Infallible, hint::black_box, sync::Arc};

use criterion::{Criterion, criterion_group, criterion_main};
use loadstone::{MemoCache, loader_fn};

fn bench_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("memo_cache");

    group.bench_function("get_hit", |b| {
        let cache = MemoCache::<u64, String>::new();
        let loader = Arc::new(loader_fn(|key: &u64| Ok::<_, Infallible>(Some(format!("value_{key}")))));
        for i in 0..1000_u64 {
            let _ = cache.get_or_load(&loader, Some(&i));
        }

        let mut i = 0_u64;
        b.iter(|| {
            i = (i + 1) % 1000;
            black_box(cache.get_or_load(&loader, Some(&i)))
        });
    });

    group.bench_function("miss_and_load", |b| {
        let cache = MemoCache::<u64, String>::new();
        let loader = Arc::new(loader_fn(|key: &u64| Ok::<_, Infallible>(Some(format!("value_{key}")))));

        let mut i = 0_u64;
        b.iter(|| {
            i += 1;
            black_box(cache.get_or_load(&loader, Some(&i)))
        });
    });

    group.bench_function("absent_key", |b| {
        let cache = MemoCache::<u64, String>::new();
        let loader = Arc::new(loader_fn(|key: &u64| Ok::<_, Infallible>(Some(format!("value_{key}")))));

        b.iter(|| black_box(cache.get_or_load(&loader, None)));
    });

    group.finish();
}

criterion_group!(benches, bench_operations);
criterion_main!(benches);
