use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use lib::chess::{Board, Color, Square};
use lib::game::Game;

fn crit(c: &mut Criterion) {
    let board = Board::default();

    c.benchmark_group("movegen")
        .throughput(Throughput::Elements(1))
        .bench_function("pseudo-legal", |b| {
            b.iter(|| {
                black_box(&board)
                    .figures_of(Color::White)
                    .map(|f| f.moves(&board).len())
                    .sum::<usize>()
            })
        })
        .bench_function("legal", |b| {
            let mut board = board.clone();
            b.iter(|| black_box(&mut board).legal_moves(Color::White))
        });

    c.benchmark_group("game")
        .throughput(Throughput::Elements(1))
        .bench_function("click", |b| {
            b.iter(|| {
                let mut game = Game::new();
                for sq in [Square::E2, Square::E4] {
                    black_box(game.submit_click(sq));
                }
                game
            })
        });
}

criterion_group!(benches, crit);
criterion_main!(benches);
