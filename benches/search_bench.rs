use criterion::{black_box, criterion_group, criterion_main, Criterion};
use othello::{AIEngine, Board, EngineConfig, Searcher, Side, WeightTable};

fn search_benchmark(c: &mut Criterion) {
    let board = Board::new();
    let weights = WeightTable::default();

    for depth in [4u8, 6] {
        c.bench_function(&format!("alphabeta_depth_{depth}"), |b| {
            b.iter(|| {
                let mut searcher = Searcher::new(Side::Black, &weights);
                black_box(searcher.search(
                    black_box(&board),
                    Side::Black,
                    depth,
                    i32::MIN,
                    i32::MAX,
                ))
            })
        });
    }

    c.bench_function("minimax_depth_4", |b| {
        b.iter(|| {
            let mut searcher = Searcher::new(Side::Black, &weights);
            black_box(searcher.minimax(black_box(&board), Side::Black, 4))
        })
    });
}

fn choose_move_benchmark(c: &mut Criterion) {
    let config = EngineConfig::default();

    c.bench_function("choose_move_opening", |b| {
        b.iter(|| {
            let mut engine = AIEngine::with_config(&config).unwrap();
            black_box(engine.choose_move(black_box(&Board::new()), Side::Black))
        })
    });
}

criterion_group!(benches, search_benchmark, choose_move_benchmark);
criterion_main!(benches);
