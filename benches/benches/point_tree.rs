// Copyright 2025 the Raster Figure Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use raster_dict::{ColoredPoint, PointTree, Position};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_coord(&mut self, max: i32) -> i32 {
        (self.next_u64() % max as u64) as i32
    }
}

/// Distinct positions in a pseudo-random order, so the tree stays shallow on average.
fn gen_random_points(count: usize, side: i32) -> Vec<ColoredPoint> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    let mut tree = PointTree::new();
    let mut out = Vec::with_capacity(count);
    while out.len() < count {
        let p = ColoredPoint::at(rng.next_coord(side), rng.next_coord(side), out.len() as u32);
        if tree.insert(p).is_ok() {
            out.push(p);
        }
    }
    out
}

/// A filled square scanned column by column: every insertion extends the same right spine.
fn gen_column_scan(side: i32) -> Vec<ColoredPoint> {
    let mut out = Vec::with_capacity((side * side) as usize);
    for x in 0..side {
        for y in 0..side {
            out.push(ColoredPoint::at(x, y, 0));
        }
    }
    out
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    for &n in &[1_000usize, 10_000] {
        let points = gen_random_points(n, 1024);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("random_n{}", n), |b| {
            b.iter_batched(
                PointTree::new,
                |mut tree| {
                    for p in points.iter().copied() {
                        let _ = tree.insert(p);
                    }
                    black_box(tree.len());
                },
                BatchSize::SmallInput,
            )
        });
    }
    let points = gen_column_scan(32);
    group.throughput(Throughput::Elements(points.len() as u64));
    group.bench_function("column_scan_32x32", |b| {
        b.iter_batched(
            PointTree::new,
            |mut tree| {
                for p in points.iter().copied() {
                    let _ = tree.insert(p);
                }
                black_box(tree.depth());
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("query");
    let points = gen_random_points(10_000, 1024);
    let mut tree = PointTree::new();
    for p in points.iter().copied() {
        let _ = tree.insert(p);
    }
    group.throughput(Throughput::Elements(points.len() as u64));
    group.bench_function("find_present", |b| {
        b.iter(|| {
            let found = points
                .iter()
                .filter(|p| tree.find(p.position()).is_some())
                .count();
            black_box(found);
        })
    });
    group.bench_function("successor_walk", |b| {
        b.iter(|| black_box(tree.iter().count()))
    });
    group.bench_function("predecessor_absent", |b| {
        b.iter(|| {
            let mut hits = 0;
            for x in 0..100 {
                if tree.predecessor(Position::new(x * 10 + 1, -1)).is_some() {
                    hits += 1;
                }
            }
            black_box(hits);
        })
    });
    group.finish();
}

fn bench_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove");
    let points = gen_random_points(10_000, 1024);
    group.throughput(Throughput::Elements(points.len() as u64));
    group.bench_function("remove_all_random", |b| {
        b.iter_batched(
            || {
                let mut tree = PointTree::new();
                for p in points.iter().copied() {
                    let _ = tree.insert(p);
                }
                tree
            },
            |mut tree| {
                for p in points.iter().rev() {
                    let _ = tree.remove(p.position());
                }
                black_box(tree.is_empty());
            },
            BatchSize::LargeInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_insert, bench_queries, bench_remove);
criterion_main!(benches);
