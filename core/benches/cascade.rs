use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use gridsweep_core::{Board, Game};

fn bench_full_board_cascade(c: &mut Criterion) {
    let board = Board::from_mine_coords((64, 64), &[]).unwrap();

    c.bench_function("cascade_64x64_mineless", |b| {
        b.iter_batched(
            || Game::new(board.clone()),
            |mut game| game.reveal((0, 0)).unwrap(),
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_full_board_cascade);
criterion_main!(benches);
