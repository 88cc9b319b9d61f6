use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use wander_widgets::recs::RecBoard;

fn seeded_board(entries: usize) -> RecBoard {
    RecBoard::from_rendered(
        (0..entries).map(|i| (format!("City{i} Country{i}"), format!("+{}", entries - i))),
    )
    .expect("seed board")
}

fn bench_submit(c: &mut Criterion) {
    c.bench_function("board_submit_hit_64", |b| {
        b.iter_batched(
            || seeded_board(64),
            |mut board| {
                board.submit(black_box("city32"));
                board
            },
            BatchSize::SmallInput,
        );
    });

    c.bench_function("board_submit_miss_64", |b| {
        b.iter_batched(
            || seeded_board(64),
            |mut board| {
                board.submit(black_box("Somewhere New"));
                board
            },
            BatchSize::SmallInput,
        );
    });

    c.bench_function("board_sort_256", |b| {
        b.iter_batched(
            || seeded_board(256),
            |mut board| {
                board.sort_by_votes();
                board
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_submit);
criterion_main!(benches);
