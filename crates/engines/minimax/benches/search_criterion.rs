use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use chess_rules::Position;
use minimax_engine::select_best;

fn bench_select_best(c: &mut Criterion) {
    let startpos = Position::startpos();
    let midgame =
        Position::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1")
            .expect("valid FEN");

    for depth in [1u8, 2, 3] {
        c.bench_function(&format!("select_best/startpos/depth_{depth}"), |b| {
            b.iter(|| {
                let mut nodes = 0u64;
                select_best(black_box(&startpos), depth, &mut nodes)
            })
        });
    }

    c.bench_function("select_best/midgame/depth_2", |b| {
        b.iter(|| {
            let mut nodes = 0u64;
            select_best(black_box(&midgame), 2, &mut nodes)
        })
    });
}

criterion_group!(benches, bench_select_best);
criterion_main!(benches);
