// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_virtual_list::{
    ListGeometry, MemoizedCalculator, VirtualList, compute_visible_range,
};

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u32(&mut self) -> u32 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 32) as u32
    }

    fn gen_range_usize(&mut self, upper_exclusive: usize) -> usize {
        if upper_exclusive == 0 {
            return 0;
        }
        (self.next_u32() as usize) % upper_exclusive
    }
}

/// A smooth scroll from top to bottom with a few repeated frames mixed in.
fn scroll_trace(len: usize, item_height: usize, steps: usize, seed: u64) -> Vec<usize> {
    let mut rng = Lcg::new(seed);
    let total = len * item_height;
    let mut out = Vec::with_capacity(steps);
    let mut offset = 0;
    for _ in 0..steps {
        // Roughly one frame in four repeats the previous offset.
        if rng.gen_range_usize(4) != 0 {
            offset = (offset + rng.gen_range_usize(3 * item_height)).min(total);
        }
        out.push(offset);
    }
    out
}

fn bench_visible_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("visible_range");

    for &len in &[1_000_usize, 100_000, 10_000_000] {
        let geometry = ListGeometry::new(400, 800, 3).expect("valid geometry");
        let trace = scroll_trace(len, geometry.item_height(), 4_096, 0x5C20_11ED);
        group.throughput(Throughput::Elements(trace.len() as u64));

        group.bench_with_input(BenchmarkId::new("pure", len), &trace, |b, trace| {
            b.iter(|| {
                let mut acc = 0_usize;
                for &offset in trace {
                    let range = compute_visible_range(black_box(offset), len, &geometry);
                    acc = acc.wrapping_add(range.start ^ range.end);
                }
                black_box(acc);
            });
        });

        group.bench_with_input(BenchmarkId::new("memoized", len), &trace, |b, trace| {
            b.iter(|| {
                let mut calc = MemoizedCalculator::new(geometry);
                let mut acc = 0_usize;
                for &offset in trace {
                    let range = calc.compute(black_box(offset), len);
                    acc = acc.wrapping_add(range.start ^ range.end);
                }
                black_box(acc);
            });
        });

        group.bench_with_input(BenchmarkId::new("virtual_list", len), &trace, |b, trace| {
            b.iter(|| {
                let mut list = VirtualList::new(geometry, len);
                let mut acc = 0_usize;
                for &offset in trace {
                    list.set_scroll_offset(black_box(offset));
                    acc = acc.wrapping_add(list.visible_range().len());
                }
                black_box(acc);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_visible_range);
criterion_main!(benches);
