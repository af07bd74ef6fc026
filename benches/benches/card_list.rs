// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use overstory_list::{CardItem, CardList};
use understory_preload::PreloadCache;
use understory_virtual_list::ListGeometry;

struct Card {
    image: String,
}

impl CardItem for Card {
    type ImageKey = String;

    fn image_key(&self) -> Option<String> {
        Some(self.image.clone())
    }
}

fn cards(n: usize) -> Vec<Card> {
    (0..n)
        .map(|i| Card {
            image: format!("https://cdn.example.com/programs/{i}.webp"),
        })
        .collect()
}

fn bench_card_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("card_list");
    let geometry = ListGeometry::new(400, 800, 3).expect("valid geometry");

    for &throttle_ms in &[0_u64, 16] {
        group.bench_function(format!("scroll_and_preload(throttle={throttle_ms}ms)"), |b| {
            b.iter_batched(
                || (CardList::new(cards(10_000), geometry, throttle_ms), PreloadCache::new(256)),
                |(mut list, mut cache)| {
                    let mut requested = 0_usize;
                    // 2000 frames at 4ms, scrolling 100px per frame.
                    for frame in 0..2_000_u64 {
                        let now = frame * 4;
                        let moved = list.on_scroll((frame as usize) * 100, now) | list.tick(now);
                        if moved {
                            for key in list.preload_visible(&mut cache) {
                                requested += 1;
                                cache.complete(key, Ok::<_, ()>(()));
                            }
                        }
                    }
                    black_box(requested);
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_card_list);
criterion_main!(benches);
