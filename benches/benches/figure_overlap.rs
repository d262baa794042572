// Copyright 2025 the Raster Figure Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use raster_dict::{ColoredPoint, Position};
use raster_figure::{Figure, FigureKind, PixelScan};

/// A ring of radius `r` centered in a `2r x 2r` box, one pixel thick.
fn ring(id: u32, r: i32, at: Position) -> Figure {
    let mut f = Figure::new(id, 2 * r, 2 * r, FigureKind::Fixed, at);
    for x in 0..=2 * r {
        for y in 0..=2 * r {
            let (dx, dy) = (x - r, y - r);
            let d2 = dx * dx + dy * dy;
            if (d2 - r * r).abs() <= r {
                let _ = f.add_point(ColoredPoint::at(x, y, 0xFFFF_FFFF));
            }
        }
    }
    f
}

fn bench_intersects(c: &mut Criterion) {
    let mut group = c.benchmark_group("intersects");
    let a = ring(1, 64, Position::ORIGIN);

    let apart = ring(2, 64, Position::new(1000, 1000));
    group.bench_function("boxes_apart", |b| b.iter(|| black_box(a.intersects(&apart))));

    // Concentric with a smaller radius: boxes overlap, pixels never do.
    let inner = ring(3, 32, Position::new(32, 32));
    group.bench_function("boxes_overlap_no_hit", |b| {
        b.iter(|| black_box(a.intersects(&inner)))
    });

    let shifted = ring(4, 64, Position::new(64, 0));
    group.bench_function("hit", |b| b.iter(|| black_box(a.intersects(&shifted))));
    group.bench_function("hit_inclusive", |b| {
        b.iter(|| black_box(a.intersects_with(&shifted, PixelScan::Inclusive)))
    });
    group.finish();
}

criterion_group!(benches, bench_intersects);
criterion_main!(benches);
