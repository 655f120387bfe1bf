//! Benchmarks for move generation and check detection.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use chess_rules::board::{BoardBuilder, Color, PieceKind, Square, QUEEN_DIRECTIONS};
use chess_rules::{Game, GameConfig};

fn middlegame() -> Game {
    let mut game = Game::new(GameConfig::default());
    for (from, to) in [
        ("e2", "e4"),
        ("e7", "e5"),
        ("g1", "f3"),
        ("b8", "c6"),
        ("f1", "c4"),
        ("g8", "f6"),
    ] {
        let from: Square = from.parse().expect("valid square");
        let to: Square = to.parse().expect("valid square");
        game.play(from, to).expect("legal move");
    }
    game
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    let startpos = Game::default();
    group.bench_function("startpos_all_legal", |b| {
        b.iter(|| black_box(startpos.all_legal_moves()))
    });

    let middle = middlegame();
    group.bench_function("middlegame_all_legal", |b| {
        b.iter(|| black_box(middle.all_legal_moves()))
    });

    // Lone queen in the center: longest rays on an open board.
    let open = BoardBuilder::new()
        .piece(Square(3, 3), Color::White, PieceKind::Queen)
        .build();
    group.bench_function("queen_rays", |b| {
        b.iter(|| black_box(open.ray_destinations(black_box(Square(3, 3)), &QUEEN_DIRECTIONS)))
    });

    group.finish();
}

fn bench_attacks(c: &mut Criterion) {
    let mut group = c.benchmark_group("attacks");

    let middle = middlegame();
    group.bench_function("is_under_attack", |b| {
        b.iter(|| black_box(middle.is_under_attack(black_box(Color::White))))
    });
    group.bench_function("status", |b| b.iter(|| black_box(middle.status())));

    group.finish();
}

criterion_group!(benches, bench_movegen, bench_attacks);
criterion_main!(benches);
